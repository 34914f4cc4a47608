use std::path::Path;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    TypeError,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::TypeError => write!(f, "TypeError"),
        }
    }
}

/// Malformed generic-type expression detected while building a node.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Expected 2 parameters to Callable, got {count}")]
    Arity { count: usize },

    #[error("{message}")]
    InvalidShape { message: String },

    #[error("First argument to Callable must be a list of argument types (got {got})")]
    InvalidFirstArgument { got: String },
}

impl BuildError {
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::TypeError
    }

    /// Attach the source location the failing expression came from.
    pub fn at(
        self,
        file: impl Into<String>,
        line: Option<usize>,
        source_line: Option<String>,
    ) -> TypeNodeError {
        TypeNodeError {
            category: self.category(),
            message: self.to_string(),
            file: file.into(),
            line,
            request: None,
            source_line,
        }
    }
}

#[derive(Debug, Error)]
#[error("{category}: {message}")]
pub struct TypeNodeError {
    pub category: ErrorCategory,
    pub message: String,
    pub file: String,
    /// Line in `file`, when the caller knows it.
    pub line: Option<usize>,
    /// 1-based position of the failing entry in a batch.
    pub request: Option<usize>,
    pub source_line: Option<String>,
}

impl TypeNodeError {
    pub fn in_request(mut self, request: usize) -> Self {
        self.request = Some(request);
        self
    }

    fn location(&self) -> String {
        let mut location = match self.line {
            Some(line) => format!("{}:{}", self.file, line),
            None => self.file.clone(),
        };
        if let Some(request) = self.request {
            location.push_str(&format!(", request #{}", request));
        }
        location
    }
}

pub fn print_error(file: &Path, err: &anyhow::Error) {
    if let Some(te) = err.chain().find_map(|e| e.downcast_ref::<TypeNodeError>()) {
        print_type_node_error(te);
    } else {
        let message = err
            .chain()
            .last()
            .map(|e| e.to_string())
            .unwrap_or_default();
        eprintln!("error: {}", message);
        eprintln!("  --> {}", file.display());
    }
}

fn print_type_node_error(te: &TypeNodeError) {
    eprintln!("{}: {}", te.category, te.message);
    eprintln!("  --> {}", te.location());

    let excerpt = te
        .line
        .zip(te.source_line.as_deref().map(str::trim))
        .filter(|(_, src)| !src.is_empty());

    if let Some((line, src)) = excerpt {
        let gutter = " ".repeat(line.to_string().len());
        eprintln!("{} |", gutter);
        eprintln!("{} |   {}", line, src);
        eprintln!("{} |", gutter);
    }
}
