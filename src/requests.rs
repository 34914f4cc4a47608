//! Batch evaluation of builder requests read from a JSON file.
//!
//! A request file holds an array of objects tagged by `op`:
//!
//! ```json
//! [
//!   {"op": "list", "name": "int"},
//!   {"op": "callable", "base": "typing.Callable",
//!    "params": [{"args": [{"type": {"named": "int"}}]}, {"type": {"named": "str"}}],
//!    "line": 2}
//! ]
//! ```
//!
//! `line` is optional and only used to locate errors.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::ast::{NamedType, Param, Type};
use crate::builder;
use crate::errors::BuildError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    List { name: String },
    TypeOf { value: Type },
    Tuple { base: NamedType, params: Vec<Type> },
    Callable { base: NamedType, params: Vec<Param> },
    IsAny { value: Type },
    IsNone { value: Type },
    IsString { value: Type },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestEntry {
    #[serde(flatten)]
    pub request: Request,
    #[serde(default)]
    pub line: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Node(Type),
    Flag(bool),
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Node(ty) => write!(f, "{}", ty),
            Outcome::Flag(flag) => write!(f, "{}", flag),
        }
    }
}

pub fn evaluate(request: Request) -> Result<Outcome, BuildError> {
    let outcome = match request {
        Request::List { name } => Outcome::Node(builder::list_type(&name)),
        Request::TypeOf { value } => Outcome::Node(builder::type_of(value)),
        Request::Tuple { base, params } => Outcome::Node(builder::heterogeneous_tuple(base, params)),
        Request::Callable { base, params } => Outcome::Node(builder::callable_type(base, params)?),
        Request::IsAny { value } => Outcome::Flag(builder::is_any(&value)),
        Request::IsNone { value } => Outcome::Flag(builder::is_none(&value)),
        Request::IsString { value } => Outcome::Flag(builder::is_string_type(&value)),
    };

    Ok(outcome)
}

pub struct RequestFile {
    path: PathBuf,
    source_lines: Vec<String>,
    entries: Vec<RequestEntry>,
}

impl RequestFile {
    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::parse(path, &source)
    }

    pub fn parse(path: &Path, source: &str) -> Result<Self> {
        let entries: Vec<RequestEntry> = serde_json::from_str(source)
            .with_context(|| format!("Invalid request file {}", path.display()))?;

        log::debug!("Loaded {} request(s) from {}", entries.len(), path.display());

        Ok(Self {
            path: path.to_path_buf(),
            source_lines: source.lines().map(str::to_string).collect(),
            entries,
        })
    }

    /// Evaluate every request in order, stopping at the first failure.
    pub fn evaluate_all(&self) -> Result<Vec<Outcome>> {
        let mut outcomes = Vec::with_capacity(self.entries.len());

        for (index, entry) in self.entries.iter().enumerate() {
            let outcome = evaluate(entry.request.clone()).map_err(|err| {
                let source_line = entry
                    .line
                    .and_then(|line| self.source_lines.get(line.wrapping_sub(1)).cloned());

                err.at(self.path.display().to_string(), entry.line, source_line)
                    .in_request(index + 1)
            })?;

            log::trace!("request {} -> {}", index, outcome);
            outcomes.push(outcome);
        }

        Ok(outcomes)
    }
}
