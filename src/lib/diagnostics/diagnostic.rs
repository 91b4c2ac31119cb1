use crate::semantics::*;
use crate::*;

#[derive(Clone, IntoStaticStr)]
pub enum Diagnostic {
    SyntaxError(Option<URI>, String),
    UndefinedTypeReference(Symbol),
    DuplicatedDeclaration(Symbol, usize),
    CyclicInheritance(Symbol),
    WrongNumberOfTypeArguments(Symbol, usize, usize),
    NonHierarchyTypeArgument(TypeExpression),
    InvalidTypeParameterVarianceUsage {
        interface: Symbol,
        selector: Symbol,
        parameter: Symbol,
        usage: Variance,
        mark: Variance,
    },
    UndeclaredVariance {
        interface: Symbol,
        parameter: Symbol,
        inferred: Variance,
    },
    MissingImplementation {
        binding: Symbol,
        class: Symbol,
        interface: Symbol,
    },
    UnassignableType {
        binding: Symbol,
        assignability: TypeAssignability,
    },
    InvalidHierarchy {
        binding: Symbol,
        error: InvalidHierarchy,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiagnosticLevel {
    Error,
    Info,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DiagnosticLevel::Error => write!(f, "error"),
            DiagnosticLevel::Info => write!(f, "info"),
        }
    }
}

impl Diagnostic {
    /// The declaration the diagnostic is about.
    pub fn subject(&self) -> Option<&Symbol> {
        use Diagnostic::*;

        match self {
            SyntaxError(_, _) => None,
            UndefinedTypeReference(ref s)
            | DuplicatedDeclaration(ref s, _)
            | CyclicInheritance(ref s)
            | WrongNumberOfTypeArguments(ref s, _, _)
            | InvalidTypeParameterVarianceUsage { interface: ref s, .. }
            | UndeclaredVariance { interface: ref s, .. }
            | MissingImplementation { binding: ref s, .. }
            | UnassignableType { binding: ref s, .. }
            | InvalidHierarchy { binding: ref s, .. } => Some(s),
            NonHierarchyTypeArgument(ref argument) => Some(argument.name()),
        }
    }

    /// The manifest the diagnostic was found in, when known.
    pub fn origin(&self) -> Option<&URI> {
        match self {
            Diagnostic::SyntaxError(ref uri, _) => uri.as_ref(),
            _ => self.subject().and_then(Symbol::origin),
        }
    }

    pub fn level(&self) -> DiagnosticLevel {
        use Diagnostic::*;

        match self {
            SyntaxError(_, _)
            | UndefinedTypeReference(_)
            | DuplicatedDeclaration(_, _)
            | CyclicInheritance(_)
            | WrongNumberOfTypeArguments(_, _, _)
            | NonHierarchyTypeArgument(_)
            | InvalidTypeParameterVarianceUsage { .. }
            | MissingImplementation { .. }
            | UnassignableType { .. }
            | InvalidHierarchy { .. } => DiagnosticLevel::Error,

            UndeclaredVariance { .. } => DiagnosticLevel::Info,
        }
    }

    pub fn code(&self) -> usize {
        use Diagnostic::*;

        match self {
            SyntaxError(_, _) => 1,
            UndefinedTypeReference(_) => 2,
            DuplicatedDeclaration(_, _) => 3,
            CyclicInheritance(_) => 4,
            WrongNumberOfTypeArguments(_, _, _) => 5,
            InvalidTypeParameterVarianceUsage { .. } => 6,
            UndeclaredVariance { .. } => 7,
            MissingImplementation { .. } => 8,
            UnassignableType { .. } => 9,
            InvalidHierarchy { .. } => 10,
            NonHierarchyTypeArgument(_) => 11,
        }
    }

    pub fn failed(diagnostics: &[Diagnostic]) -> bool {
        diagnostics
            .iter()
            .any(|d| d.level() == DiagnosticLevel::Error)
    }
}

impl From<(Symbol, InvalidHierarchy)> for Diagnostic {
    fn from((binding, error): (Symbol, InvalidHierarchy)) -> Self {
        Diagnostic::InvalidHierarchy { binding, error }
    }
}

impl fmt::Debug for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name: &'static str = self.into();
        write!(f, "{:?} ({} E{:03}", self.to_string(), name, self.code())?;
        if let Some(uri) = self.origin() {
            write!(f, " @ {}", uri)?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Diagnostic::*;

        match self {
            SyntaxError(_, s) => write!(f, "{}", s),
            UndefinedTypeReference(s) => write!(f, "`{}` is undefined.", s),
            DuplicatedDeclaration(s, n) => write!(f, "`{}` is defined {} times.", s, n),
            CyclicInheritance(s) => write!(f, "`{}` inherits from itself.", s),
            WrongNumberOfTypeArguments(name, params, args) => write!(
                f,
                "`{}` takes {} type arguments, but was provided {}.",
                name,
                if *params == 0 {
                    "no".into()
                } else {
                    params.to_string()
                },
                if *args == 0 {
                    "none".into()
                } else {
                    args.to_string()
                },
            ),
            NonHierarchyTypeArgument(argument) => {
                write!(f, "`{}` is not a type in a subtype tree.", argument)
            }
            InvalidTypeParameterVarianceUsage {
                interface,
                selector,
                parameter,
                usage,
                mark,
            } => write!(
                f,
                "`{}` cannot be used in {} position of `{}#{}`, because it's marked as `{}`.",
                parameter,
                usage.position(),
                interface,
                selector,
                mark.keyword(),
            ),
            UndeclaredVariance {
                interface,
                parameter,
                inferred,
            } => write!(
                f,
                "`{}` is only used in {} position of `{}`, so it could be marked as `{}`.",
                parameter,
                inferred.position(),
                interface,
                inferred.keyword(),
            ),
            MissingImplementation {
                binding,
                class,
                interface,
            } => write!(
                f,
                "`{}` cannot be bound to `{}`, because it doesn't implement `{}`.",
                binding, class, interface
            ),
            UnassignableType { assignability, .. } => write!(f, "{}", assignability),
            InvalidHierarchy { error, .. } => write!(f, "{}", error),
        }
    }
}
