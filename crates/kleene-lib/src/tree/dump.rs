//! Indented text form of a syntax tree, for inspection and snapshot tests.

use std::fmt::Write;

use super::{Leaf, Node, OperatorKind};

impl Node {
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out, 0).expect("String write never fails");
        out
    }

    fn format(&self, w: &mut String, depth: usize) -> std::fmt::Result {
        let indent = "  ".repeat(depth);
        match self {
            Node::Leaf(Leaf::Char(c)) => writeln!(w, "{indent}Char {c}"),
            Node::Leaf(Leaf::Epsilon) => writeln!(w, "{indent}Epsilon"),
            Node::Leaf(Leaf::EndMarker) => writeln!(w, "{indent}EndMarker"),
            Node::Operator(op) => {
                let name = match op.kind() {
                    OperatorKind::Alternation => "Alternation",
                    OperatorKind::Concatenation => "Concatenation",
                    OperatorKind::Star => "Star",
                };
                writeln!(w, "{indent}{name}")?;
                for operand in op.operands() {
                    operand.format(w, depth + 1)?;
                }
                Ok(())
            }
        }
    }
}
