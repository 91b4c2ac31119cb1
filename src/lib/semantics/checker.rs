use crate::semantics::*;
use crate::*;

pub trait Checker {
    fn name(&self) -> &'static str;

    fn check(&self, analysis: &Analysis, diagnostics: &mut Vec<Diagnostic>);
}
