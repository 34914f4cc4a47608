use serde::{Deserialize, Serialize};

use super::Type;

/// One element of a literal argument list, e.g. `int` in `Callable[[int], str]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArgItem {
    Type(Type),
    /// `...` written inside the brackets.
    Ellipsis,
}

impl std::fmt::Display for ArgItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArgItem::Type(ty) => write!(f, "{}", ty),
            ArgItem::Ellipsis => write!(f, "..."),
        }
    }
}

/// A resolved `Callable[...]` parameter as handed over by the parser.
///
/// The parser keeps a bracketed list of argument types apart from a single
/// type value. A bare `...` in the argument position arrives as
/// `Param::Type(Type::Anything)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Param {
    Args(Vec<ArgItem>),
    Type(Type),
}

impl Param {
    /// Argument list made only of plain types.
    pub fn args(types: impl IntoIterator<Item = Type>) -> Self {
        Param::Args(types.into_iter().map(ArgItem::Type).collect())
    }
}

impl From<Type> for Param {
    fn from(ty: Type) -> Self {
        Param::Type(ty)
    }
}

impl std::fmt::Display for Param {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Param::Args(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Param::Type(ty) => write!(f, "{}", ty),
        }
    }
}
