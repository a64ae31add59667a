//! Loads expressions from the command line, a batch file, or stdin.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Display name used for expressions read from stdin.
pub const STDIN_ORIGIN: &str = "<stdin>";

/// One expression to compile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    pub text: String,
    /// File path or [`STDIN_ORIGIN`]; `None` for inline expressions.
    pub origin: Option<String>,
    /// 1-based line within `origin`.
    pub line: usize,
}

impl Expression {
    pub fn inline(text: &str) -> Self {
        Self {
            text: text.to_owned(),
            origin: None,
            line: 1,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("expression is required: use a positional argument or -f/--file")]
    Missing,

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to read '{}': {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no expressions found in '{0}'")]
    Empty(String),
}

pub fn load_expressions(
    text: Option<&str>,
    file: Option<&Path>,
) -> Result<Vec<Expression>, LoadError> {
    if let Some(text) = text {
        return Ok(vec![Expression::inline(text)]);
    }

    let Some(path) = file else {
        return Err(LoadError::Missing);
    };

    let (content, origin) = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(LoadError::Stdin)?;
        (buf, STDIN_ORIGIN.to_owned())
    } else {
        let content = fs::read_to_string(path).map_err(|source| LoadError::File {
            path: path.to_owned(),
            source,
        })?;
        (content, path.to_string_lossy().into_owned())
    };

    let expressions = parse_batch(&content, &origin);
    if expressions.is_empty() {
        return Err(LoadError::Empty(origin));
    }
    Ok(expressions)
}

/// Splits batch content into expressions, one per line.
///
/// Blank lines and lines starting with `#` are skipped. Line numbers refer
/// to the original content.
pub fn parse_batch(content: &str, origin: &str) -> Vec<Expression> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty() && !line.starts_with('#'))
        .map(|(i, line)| Expression {
            text: line.to_owned(),
            origin: Some(origin.to_owned()),
            line: i + 1,
        })
        .collect()
}
