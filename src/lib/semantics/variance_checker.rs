use crate::semantics::*;
use crate::*;

/// The two types of an assignment query don't belong to the same subtype
/// tree, so no variance can relate them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidHierarchy {
    pub source: Symbol,
    pub source_root: Symbol,
    pub target: Symbol,
    pub target_root: Symbol,
}

impl InvalidHierarchy {
    fn between(source: &Type, target: &Type) -> InvalidHierarchy {
        InvalidHierarchy {
            source: source.name.clone(),
            source_root: source.root_type().name.clone(),
            target: target.name.clone(),
            target_root: target.root_type().name.clone(),
        }
    }
}

impl fmt::Display for InvalidHierarchy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "`{}` and `{}` are unrelated, because they descend from `{}` and `{}`.",
            self.source, self.target, self.source_root, self.target_root
        )
    }
}

impl std::error::Error for InvalidHierarchy {}

/// Decides whether an instance of a generic interface parameterized by one
/// type argument may stand in for an instance parameterized by another.
///
/// For `I<S>` to be used where `I<T>` is expected:
///
/// - `out` (covariant): `S` must be `T` or a descendant of it,
/// - `in` (contravariant): `S` must be `T` or an ancestor of it,
/// - unmarked (invariant): `S` must be `T`.
///
/// ```
/// use variance::semantics::*;
///
/// let food = Type::root(Symbol::new("Food"));
/// let burger = Type::derived(Symbol::new("Burger"), &food);
///
/// assert_eq!(VarianceChecker::is_assignable(Variance::Covariant, &burger, &food), Ok(true));
/// assert_eq!(VarianceChecker::is_assignable(Variance::Contravariant, &burger, &food), Ok(false));
/// ```
pub struct VarianceChecker;

impl VarianceChecker {
    pub fn is_assignable(
        variance: Variance,
        source: &Type,
        target: &Type,
    ) -> Result<bool, InvalidHierarchy> {
        Ok(Self::argument_assignability(variance, source, target)?.is_valid())
    }

    /// Like [`is_assignable`](Self::is_assignable), but explains a rejection
    /// in terms of `interface<source>` and `interface<target>`.
    pub fn assignability(
        interface: &GenericInterface,
        source: &Type,
        target: &Type,
    ) -> Result<TypeAssignability, InvalidHierarchy> {
        let argument = Self::argument_assignability(interface.variance(), source, target)?;

        if argument.is_valid() {
            return Ok(argument);
        }

        Ok(TypeAssignability::Invalid {
            assignee: interface.instance(target),
            assigned: interface.instance(source),
            invariant: false,
            because: vec![argument],
        })
    }

    fn argument_assignability(
        variance: Variance,
        source: &Type,
        target: &Type,
    ) -> Result<TypeAssignability, InvalidHierarchy> {
        if !source.shares_root_with(target) {
            return Err(InvalidHierarchy::between(source, target));
        }

        Ok(match variance {
            Variance::Invariant => Self::check_argument(target, source, true),
            Variance::Covariant => Self::check_argument(target, source, false),
            Variance::Contravariant => Self::check_argument(source, target, false),
        })
    }

    fn check_argument(assignee: &Type, assigned: &Type, invariant: bool) -> TypeAssignability {
        let valid = if invariant {
            assigned == assignee
        } else {
            assigned.is_a(assignee)
        };

        if valid {
            TypeAssignability::Valid
        } else {
            TypeAssignability::Invalid {
                assignee: TypeExpression::reference(assignee.name.clone()),
                assigned: TypeExpression::reference(assigned.name.clone()),
                invariant,
                because: vec![],
            }
        }
    }
}
