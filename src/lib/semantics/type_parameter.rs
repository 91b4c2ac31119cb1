use crate::semantics::*;
use crate::*;

#[derive(Clone, Debug)]
pub struct TypeParameter {
    pub name: Symbol,
    pub variance: Variance,
}

/// The variance of a type parameter, or of the position a type occurs in.
///
/// Parameters are marked `out` (covariant) or `in` (contravariant); an
/// unmarked (or `inout`) parameter is invariant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumString)]
pub enum Variance {
    #[strum(serialize = "inout", serialize = "invariant")]
    Invariant,
    #[strum(serialize = "out", serialize = "covariant")]
    Covariant,
    #[strum(serialize = "in", serialize = "contravariant")]
    Contravariant,
}

impl Default for Variance {
    fn default() -> Variance {
        Variance::Invariant
    }
}

impl Variance {
    pub fn keyword(self) -> &'static str {
        match self {
            Variance::Invariant => "inout",
            Variance::Covariant => "out",
            Variance::Contravariant => "in",
        }
    }

    /// Describes this variance as a signature position.
    pub fn position(self) -> &'static str {
        match self {
            Variance::Invariant => "invariant",
            Variance::Covariant => "output",
            Variance::Contravariant => "input",
        }
    }

    pub fn invert(self) -> Variance {
        match self {
            Variance::Covariant => Variance::Contravariant,
            Variance::Contravariant => Variance::Covariant,
            Variance::Invariant => Variance::Invariant,
        }
    }

    /// The variance of a position nested as the argument of a parameter
    /// with variance `inner`, inside a position with variance `self`.
    pub fn compose(self, inner: Variance) -> Variance {
        match (self, inner) {
            (Variance::Invariant, _) | (_, Variance::Invariant) => Variance::Invariant,
            (Variance::Covariant, _) => inner,
            (Variance::Contravariant, _) => inner.invert(),
        }
    }

    /// The variance that admits both `self` and `other` usages.
    pub fn join(self, other: Variance) -> Variance {
        if self == other {
            self
        } else {
            Variance::Invariant
        }
    }

    /// Whether a parameter marked with this variance may occur in a
    /// position of variance `usage`.
    pub fn permits(self, usage: Variance) -> bool {
        self == Variance::Invariant || self == usage
    }
}

impl fmt::Display for Variance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Variance::Invariant => write!(f, "invariant"),
            Variance::Covariant => write!(f, "covariant"),
            Variance::Contravariant => write!(f, "contravariant"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::semantics::Variance::*;
    use std::str::FromStr;

    #[test]
    fn keywords() {
        assert_eq!(Variance::from_str("out").ok(), Some(Covariant));
        assert_eq!(Variance::from_str("in").ok(), Some(Contravariant));
        assert_eq!(Variance::from_str("inout").ok(), Some(Invariant));
        assert_eq!(Variance::from_str("contravariant").ok(), Some(Contravariant));
        assert!(Variance::from_str("sideways").is_err());

        assert_eq!(Covariant.keyword(), "out");
        assert_eq!(Contravariant.keyword(), "in");
        assert_eq!(Variance::default(), Invariant);
    }

    #[test]
    fn composition() {
        assert_eq!(Covariant.compose(Covariant), Covariant);
        assert_eq!(Covariant.compose(Contravariant), Contravariant);
        assert_eq!(Contravariant.compose(Contravariant), Covariant);
        assert_eq!(Contravariant.compose(Covariant), Contravariant);
        assert_eq!(Invariant.compose(Covariant), Invariant);
        assert_eq!(Covariant.compose(Invariant), Invariant);
    }

    #[test]
    fn join_and_permits() {
        assert_eq!(Covariant.join(Covariant), Covariant);
        assert_eq!(Covariant.join(Contravariant), Invariant);

        assert!(Invariant.permits(Covariant));
        assert!(Invariant.permits(Contravariant));
        assert!(Covariant.permits(Covariant));
        assert!(!Covariant.permits(Contravariant));
        assert!(!Contravariant.permits(Invariant));
    }

    #[test]
    fn display() {
        assert_eq!(Covariant.to_string(), "covariant");
        assert_eq!(Invariant.to_string(), "invariant");
    }
}
