use crate::semantics::*;
use crate::*;

#[derive(Clone)]
pub struct Signature {
    pub selector: Symbol,
    pub parameters: Vec<TypeExpression>,
    pub return_type: Option<TypeExpression>,
}

impl Signature {
    /// Every type expression of the signature, paired with the variance of
    /// the position it occurs in.
    pub fn positions(&self) -> Vec<(&TypeExpression, Variance)> {
        let mut positions = self
            .parameters
            .iter()
            .map(|p| (p, Variance::Contravariant))
            .collect::<Vec<_>>();

        if let Some(ref return_type) = self.return_type {
            positions.push((return_type, Variance::Covariant));
        }

        positions
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.selector)?;
        if !self.parameters.is_empty() {
            let parameters = self
                .parameters
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>();
            write!(f, "({})", parameters.join(", "))?;
        }
        if let Some(ref return_type) = self.return_type {
            write!(f, " -> {}", return_type)?;
        }
        Ok(())
    }
}
