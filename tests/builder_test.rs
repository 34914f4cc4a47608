use pytdgen::ast::{ArgItem, NamedType, Param, Type};
use pytdgen::builder::{
    callable_type, heterogeneous_tuple, is_any, is_none, is_string_type, list_type, type_of,
};
use pytdgen::errors::{BuildError, ErrorCategory};

fn callable() -> NamedType {
    NamedType::new("typing.Callable")
}

fn int() -> Type {
    Type::named("int")
}

fn str_() -> Type {
    Type::named("str")
}

#[test]
fn test_list_type() {
    assert_eq!(
        list_type("int"),
        Type::Generic {
            base: NamedType::new("typing.List"),
            params: vec![Type::named("int")],
        }
    );
    assert_eq!(list_type("foo.Bar").params(), &[Type::named("foo.Bar")]);
    assert_eq!(list_type(""), Type::named("typing.List"));
    assert!(list_type("").params().is_empty());
    assert_eq!(list_type("").base(), None);
}

#[test]
fn test_is_any() {
    assert!(is_any(&Type::Anything));
    assert!(is_any(&Type::named("typing.Any")));

    assert!(!is_any(&Type::named("Any")));
    assert!(!is_any(&Type::named("typing.any")));
    assert!(!is_any(&Type::Nothing));
    assert!(!is_any(&list_type("typing.Any")));
}

#[test]
fn test_is_none() {
    assert!(is_none(&Type::named("None")));
    assert!(is_none(&Type::named("NoneType")));

    assert!(!is_none(&Type::named("none")));
    assert!(!is_none(&Type::named("builtins.NoneType")));
    assert!(!is_none(&Type::Nothing));
    assert!(!is_none(&Type::Anything));
}

#[test]
fn test_is_string_type() {
    for name in ["str", "bytes", "unicode"] {
        assert!(is_string_type(&Type::named(name)), "{} is a string type", name);
    }
    assert!(!is_string_type(&Type::named("bytearray")));
    assert!(!is_string_type(&list_type("str")));
}

#[test]
fn test_heterogeneous_tuple_keeps_params() {
    let tuple = heterogeneous_tuple(NamedType::new("tuple"), vec![int(), str_(), int()]);

    assert_eq!(
        tuple,
        Type::Tuple {
            base: NamedType::new("tuple"),
            params: vec![int(), str_(), int()],
        }
    );
    assert_eq!(tuple.base(), Some(&NamedType::new("tuple")));
    assert_eq!(tuple.to_string(), "tuple[int, str, int]");
}

#[test]
fn test_type_of() {
    let value = list_type("int");
    let ty = type_of(value.clone());

    assert_eq!(
        ty,
        Type::Generic {
            base: NamedType::new("type"),
            params: vec![value],
        }
    );
    assert_eq!(ty.to_string(), "type[typing.List[int]]");
}

#[test]
fn test_callable_empty_args() {
    let ty = callable_type(callable(), vec![Param::Args(vec![]), str_().into()]).unwrap();

    assert_eq!(
        ty,
        Type::Callable {
            base: callable(),
            params: vec![str_()],
        }
    );
    assert_eq!(ty.to_string(), "typing.Callable[[], str]");
}

#[test]
fn test_callable_nothing_args() {
    let ty = callable_type(callable(), vec![Param::args([Type::Nothing]), int().into()]).unwrap();

    assert_eq!(
        ty,
        Type::Callable {
            base: callable(),
            params: vec![int()],
        }
    );
}

#[test]
fn test_callable_explicit_args() {
    let ty = callable_type(callable(), vec![Param::args([int(), str_()]), Type::Nothing.into()])
        .unwrap();

    assert_eq!(
        ty,
        Type::Callable {
            base: callable(),
            params: vec![int(), str_(), Type::Nothing],
        }
    );
    assert_eq!(ty.to_string(), "typing.Callable[[int, str], nothing]");
}

#[test]
fn test_callable_nothing_among_other_args() {
    let ty = callable_type(
        callable(),
        vec![Param::args([Type::Nothing, int()]), str_().into()],
    )
    .unwrap();

    assert_eq!(ty.params(), &[Type::Nothing, int(), str_()]);
}

#[test]
fn test_callable_single_param_any() {
    let ty = callable_type(callable(), vec![Type::Anything.into()]).unwrap();

    assert_eq!(
        ty,
        Type::Generic {
            base: callable(),
            params: vec![Type::Anything, Type::Anything],
        }
    );
}

#[test]
fn test_callable_single_param_list() {
    let ty = callable_type(callable(), vec![Param::args([int()])]).unwrap();

    assert_eq!(
        ty,
        Type::Callable {
            base: callable(),
            params: vec![int(), Type::Anything],
        }
    );
}

#[test]
fn test_callable_unspecified_args() {
    let any = Type::named("typing.Any");
    let ty = callable_type(callable(), vec![any.clone().into(), int().into()]).unwrap();

    assert_eq!(
        ty,
        Type::Generic {
            base: callable(),
            params: vec![any, int()],
        }
    );
}

#[test]
fn test_callable_ellipsis_in_list() {
    let err = callable_type(
        callable(),
        vec![Param::Args(vec![ArgItem::Ellipsis]), int().into()],
    )
    .unwrap_err();

    assert!(matches!(err, BuildError::InvalidShape { .. }));
    assert_eq!(
        err.to_string(),
        "Invalid Callable args, did you mean Callable[..., int]?"
    );
}

#[test]
fn test_callable_ellipsis_after_args_with_any_return() {
    let err = callable_type(
        callable(),
        vec![
            Param::Args(vec![ArgItem::Type(int()), ArgItem::Ellipsis]),
            Type::Anything.into(),
        ],
    )
    .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Invalid Callable args, did you mean Callable[..., Any]?"
    );
}

#[test]
fn test_callable_ellipsis_with_typing_any_return() {
    let err = callable_type(
        callable(),
        vec![
            Param::Args(vec![ArgItem::Ellipsis]),
            Type::named("typing.Any").into(),
        ],
    )
    .unwrap_err();

    assert_eq!(
        err,
        BuildError::InvalidShape {
            message: "Invalid Callable args, did you mean Callable[..., Any]?".to_string()
        }
    );
}

#[test]
fn test_callable_invalid_first_argument() {
    let err = callable_type(callable(), vec![int().into(), str_().into()]).unwrap_err();

    assert_eq!(
        err,
        BuildError::InvalidFirstArgument {
            got: "int".to_string()
        }
    );
    assert_eq!(
        err.to_string(),
        "First argument to Callable must be a list of argument types (got int)"
    );
}

#[test]
fn test_callable_list_as_return_type() {
    let err = callable_type(callable(), vec![Param::args([int()]), Param::args([str_()])])
        .unwrap_err();

    assert!(matches!(err, BuildError::InvalidShape { .. }));
    assert!(err.to_string().contains("(got [str])"));
}

#[test]
fn test_callable_arity() {
    let err = callable_type(
        callable(),
        vec![Param::args([int()]), str_().into(), int().into()],
    )
    .unwrap_err();

    assert_eq!(err, BuildError::Arity { count: 3 });
    assert_eq!(err.to_string(), "Expected 2 parameters to Callable, got 3");
}

#[test]
fn test_construction_is_deterministic() {
    let params = vec![Param::args([int(), list_type("str")]), str_().into()];

    let first = callable_type(callable(), params.clone()).unwrap();
    let second = callable_type(callable(), params.clone()).unwrap();

    assert_eq!(first, second);
    assert_eq!(params, vec![Param::args([int(), list_type("str")]), str_().into()]);
}

#[test]
fn test_error_location() {
    let err =
        BuildError::Arity { count: 4 }.at("stub.pyi", Some(12), Some("f: Callable".to_string()));

    assert_eq!(err.category, ErrorCategory::TypeError);
    assert_eq!(err.file, "stub.pyi");
    assert_eq!(err.line, Some(12));
    assert_eq!(err.request, None);
    assert_eq!(
        err.to_string(),
        "TypeError: Expected 2 parameters to Callable, got 4"
    );
}
