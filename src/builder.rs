//! Constructors for common type-expression nodes.
//!
//! Everything here is a pure function: inputs are consumed or borrowed, never
//! mutated, and identical inputs give structurally equal nodes.

use crate::ast::{ArgItem, NamedType, Param, Type};
use crate::errors::BuildError;

pub const STRING_TYPES: [&str; 3] = ["str", "bytes", "unicode"];

/// `typing.List[name]`, or the bare `typing.List` when `name` is empty.
pub fn list_type(name: &str) -> Type {
    if name.is_empty() {
        Type::named("typing.List")
    } else {
        Type::Generic {
            base: NamedType::new("typing.List"),
            params: vec![Type::named(name)],
        }
    }
}

pub fn is_any(ty: &Type) -> bool {
    match ty {
        Type::Anything => true,
        Type::Named(named) => named.name == "typing.Any",
        _ => false,
    }
}

pub fn is_none(ty: &Type) -> bool {
    matches!(ty, Type::Named(named) if named.name == "None" || named.name == "NoneType")
}

pub fn is_string_type(ty: &Type) -> bool {
    matches!(ty, Type::Named(named) if STRING_TYPES.contains(&named.name.as_str()))
}

/// Tuple whose positions each carry their own element type. Arity is not checked.
pub fn heterogeneous_tuple(base: NamedType, params: Vec<Type>) -> Type {
    Type::Tuple { base, params }
}

/// `type[value]`: the type object of a value of type `value`.
pub fn type_of(value: Type) -> Type {
    Type::Generic {
        base: NamedType::new("type"),
        params: vec![value],
    }
}

/// Build the node for `base[args, ret]`.
///
/// - `Callable[[], R]` and `Callable[[nothing], R]` take no arguments.
/// - `Callable[[A, B], R]` becomes a `Callable` with params `(A, B, R)`.
/// - `Callable[..., R]` arrives with `Any` in the argument position and
///   stays a `Generic`, since the arguments are unknown.
/// - `Callable[X]` is accepted with an `Any` return type.
///
/// `params` must not be empty.
pub fn callable_type(base: NamedType, params: Vec<Param>) -> Result<Type, BuildError> {
    debug_assert!(!params.is_empty(), "Callable needs at least one parameter");

    if params.len() > 2 {
        return Err(BuildError::Arity {
            count: params.len(),
        });
    }

    let mut params = params.into_iter();
    let args = params.next().unwrap_or(Param::Type(Type::Anything));
    let ret = match params.next() {
        Some(Param::Type(ret)) => ret,
        Some(list @ Param::Args(_)) => {
            return Err(BuildError::InvalidShape {
                message: format!(
                    "Invalid Callable return type, expected a single type (got {})",
                    list
                ),
            });
        }
        None => {
            // TODO: report `Callable[X]` as a type error instead of guessing.
            log::debug!("{}[{}] has no return type, assuming Any", base, args);
            Type::Anything
        }
    };

    match args {
        Param::Args(items) => {
            if items.is_empty() || items == [ArgItem::Type(Type::Nothing)] {
                return Ok(Type::Callable {
                    base,
                    params: vec![ret],
                });
            }

            let mut params = items
                .into_iter()
                .map(|item| match item {
                    ArgItem::Type(ty) => Some(ty),
                    ArgItem::Ellipsis => None,
                })
                .collect::<Option<Vec<_>>>()
                .ok_or_else(|| invalid_ellipsis(&ret))?;
            params.push(ret);

            Ok(Type::Callable { base, params })
        }
        Param::Type(args) if is_any(&args) => {
            log::trace!("{}[{}, {}] has unknown arguments", base, args, ret);
            Ok(Type::Generic {
                base,
                params: vec![args, ret],
            })
        }
        Param::Type(args) => Err(BuildError::InvalidFirstArgument {
            got: args.to_string(),
        }),
    }
}

fn invalid_ellipsis(ret: &Type) -> BuildError {
    let ret = if is_any(ret) {
        "Any".to_string()
    } else {
        ret.to_string()
    };

    BuildError::InvalidShape {
        message: format!("Invalid Callable args, did you mean Callable[..., {}]?", ret),
    }
}
