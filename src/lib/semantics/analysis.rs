use crate::semantics::*;
use crate::*;

#[cfg(debug_assertions)]
use std::time::{Duration, Instant};

#[cfg(debug_assertions)]
const SLOW_CHECKER_WARNING_LIMIT: Duration = Duration::from_millis(10);

/// Everything that was declared: the subtype hierarchy, the generic
/// interfaces, the classes implementing them and the bindings to check.
#[derive(Clone, Default)]
pub struct Analysis {
    pub hierarchy: Hierarchy,
    pub interfaces: Vec<Arc<GenericInterface>>,
    pub classes: Vec<Arc<Class>>,
    pub bindings: Vec<Arc<Binding>>,
}

impl Analysis {
    pub fn new(hierarchy: Hierarchy) -> Analysis {
        Analysis {
            hierarchy,
            ..Analysis::default()
        }
    }

    pub fn check(&self) -> Vec<Diagnostic> {
        let mut diagnostics = vec![];

        for checker in checkers::checkers().iter() {
            timed(checker.name(), || checker.check(self, &mut diagnostics));
        }

        diagnostics
    }

    pub fn interface(&self, name: &str) -> Option<&Arc<GenericInterface>> {
        self.interfaces.iter().find(|i| i.name.as_str() == name)
    }

    pub fn class(&self, name: &str) -> Option<&Arc<Class>> {
        self.classes.iter().find(|c| c.name.as_str() == name)
    }

    /// Resolves `Interface<Type>` to its declarations. Anything else, such
    /// as a nested application, doesn't denote an instance in a subtype
    /// tree.
    pub fn instance_of(
        &self,
        expression: &TypeExpression,
    ) -> Option<(&Arc<GenericInterface>, &Arc<Type>)> {
        match expression {
            TypeExpression::Application(name, argument) => match argument.as_ref() {
                TypeExpression::Reference(argument) => Some((
                    self.interface(name.as_str())?,
                    self.hierarchy.get(argument.as_str())?,
                )),
                TypeExpression::Application(_, _) => None,
            },
            TypeExpression::Reference(_) => None,
        }
    }
}

#[allow(unused_variables)]
fn timed<T, F: FnOnce() -> T>(name: &str, f: F) -> T {
    #[cfg(debug_assertions)]
    {
        let now = Instant::now();
        let result = f();
        if now.elapsed() > SLOW_CHECKER_WARNING_LIMIT {
            warn!("Checker {:?} took {:?}.", name, now.elapsed());
        }
        result
    }

    #[cfg(not(debug_assertions))]
    {
        f()
    }
}
