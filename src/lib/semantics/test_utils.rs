use crate::semantics::*;
use crate::*;

pub fn symbol(name: &str) -> Symbol {
    Symbol(None, name.into())
}

pub fn expression(notation: &str) -> TypeExpression {
    TypeExpression::from_notation(notation, None).unwrap()
}

/// Builds a hierarchy from `(name, parent)` pairs, failing the test on any
/// diagnostic.
pub fn hierarchy(declarations: &[(&str, Option<&str>)]) -> Hierarchy {
    let (hierarchy, diagnostics) = Hierarchy::from_declarations(
        declarations
            .iter()
            .map(|(name, parent)| (symbol(name), parent.map(symbol))),
    );
    assert!(diagnostics.is_empty(), "{:?}", diagnostics);
    hierarchy
}

/// `Food -> FastFood -> Burger`, `FastFood -> Pizza` and
/// `Gift -> Book -> Novel`.
pub fn practice_hierarchy() -> Hierarchy {
    hierarchy(&[
        ("Food", None),
        ("FastFood", Some("Food")),
        ("Burger", Some("FastFood")),
        ("Pizza", Some("FastFood")),
        ("Gift", None),
        ("Book", Some("Gift")),
        ("Novel", Some("Book")),
    ])
}

pub fn interface<F: FnOnce(&mut GenericInterface)>(
    name: &str,
    parameter: &str,
    variance: Variance,
    f: F,
) -> Arc<GenericInterface> {
    let mut interface = GenericInterface {
        name: symbol(name),
        parameter: TypeParameter {
            name: symbol(parameter),
            variance,
        },
        methods: vec![],
    };
    f(&mut interface);
    Arc::new(interface)
}

pub fn method(selector: &str, parameters: &[&str], return_type: Option<&str>) -> Signature {
    Signature {
        selector: symbol(selector),
        parameters: parameters.iter().map(|p| expression(p)).collect(),
        return_type: return_type.map(expression),
    }
}

pub fn class(name: &str, implements: &[&str]) -> Arc<Class> {
    Arc::new(Class {
        name: symbol(name),
        implements: implements.iter().map(|i| expression(i)).collect(),
    })
}

pub fn binding(name: &str, declared: &str, value: &str) -> Binding {
    Binding {
        name: symbol(name),
        declared: expression(declared),
        value: symbol(value),
    }
}

pub fn messages(diagnostics: &[Diagnostic]) -> Vec<String> {
    let mut messages = diagnostics
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>();

    messages.sort();

    messages
}
