use serde::{Deserialize, Serialize};

/// Reference to a type by its fully-qualified name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NamedType {
    pub name: String,
}

impl NamedType {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl std::fmt::Display for NamedType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Node of the type-expression tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "TypeRepr")]
pub enum Type {
    Named(NamedType),

    /// Base type applied to type arguments, in argument order.
    Generic { base: NamedType, params: Vec<Type> },

    /// Each position carries its own element type.
    Tuple { base: NamedType, params: Vec<Type> },

    /// Argument types followed by the return type; `params` is never empty.
    Callable { base: NamedType, params: Vec<Type> },

    /// The dynamic type, same meaning as `typing.Any`.
    Anything,

    /// The bottom type.
    Nothing,
}

/// Wire shape of `Type`, checked before it becomes a node.
#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
enum TypeRepr {
    Named(NamedType),
    Generic { base: NamedType, params: Vec<Type> },
    Tuple { base: NamedType, params: Vec<Type> },
    Callable { base: NamedType, params: Vec<Type> },
    Anything,
    Nothing,
}

impl TryFrom<TypeRepr> for Type {
    type Error = String;

    fn try_from(repr: TypeRepr) -> Result<Self, Self::Error> {
        Ok(match repr {
            TypeRepr::Named(named) => Type::Named(named),
            TypeRepr::Generic { base, params } => Type::Generic { base, params },
            TypeRepr::Tuple { base, params } => Type::Tuple { base, params },
            TypeRepr::Callable { base, params } if params.is_empty() => {
                return Err(format!("callable type {} has no return type", base));
            }
            TypeRepr::Callable { base, params } => Type::Callable { base, params },
            TypeRepr::Anything => Type::Anything,
            TypeRepr::Nothing => Type::Nothing,
        })
    }
}

impl Type {
    pub fn named(name: impl Into<String>) -> Self {
        Type::Named(NamedType::new(name))
    }

    /// Base type of a parametrized node.
    pub fn base(&self) -> Option<&NamedType> {
        match self {
            Type::Generic { base, .. }
            | Type::Tuple { base, .. }
            | Type::Callable { base, .. } => Some(base),
            Type::Named(_) | Type::Anything | Type::Nothing => None,
        }
    }

    pub fn params(&self) -> &[Type] {
        match self {
            Type::Generic { params, .. }
            | Type::Tuple { params, .. }
            | Type::Callable { params, .. } => params.as_slice(),
            Type::Named(_) | Type::Anything | Type::Nothing => &[],
        }
    }
}

fn write_list(f: &mut std::fmt::Formatter<'_>, items: &[Type]) -> std::fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Type::Named(named) => write!(f, "{}", named),
            Type::Generic { base, params } | Type::Tuple { base, params } => {
                write!(f, "{}[", base)?;
                write_list(f, params)?;
                write!(f, "]")
            }
            Type::Callable { base, params } => {
                // Callable[[args...], ret]
                match params.split_last() {
                    Some((ret, args)) => {
                        write!(f, "{}[[", base)?;
                        write_list(f, args)?;
                        write!(f, "], {}]", ret)
                    }
                    None => write!(f, "{}[]", base),
                }
            }
            Type::Anything => write!(f, "Any"),
            Type::Nothing => write!(f, "nothing"),
        }
    }
}
