use crate::semantics::*;
use crate::*;

/// `name: I<T> = C()` holds if `C` implements `I<S>` and `I<S>` can act as
/// `I<T>` under the variance of `I`'s parameter.
pub struct TypeAssignment;

impl TypeAssignment {
    fn check_binding(
        &self,
        binding: &Binding,
        analysis: &Analysis,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Option<()> {
        let class = analysis.class(binding.value.as_str())?;
        let interface_name = binding.declared.name();

        let implemented = match class.implementation_of(interface_name) {
            Some(implemented) => implemented,
            None => {
                diagnostics.push(Diagnostic::MissingImplementation {
                    binding: binding.name.clone(),
                    class: class.name.clone(),
                    interface: interface_name.clone(),
                });
                return None;
            }
        };

        let (interface, target) = analysis.instance_of(&binding.declared)?;
        let (_, source) = analysis.instance_of(implemented)?;

        match VarianceChecker::assignability(interface, source, target) {
            Ok(TypeAssignability::Valid) => {
                debug!("{} holds", binding);
            }
            Ok(assignability) => {
                diagnostics.push(Diagnostic::UnassignableType {
                    binding: binding.name.clone(),
                    assignability,
                });
            }
            Err(error) => diagnostics.push((binding.name.clone(), error).into()),
        }

        Some(())
    }
}

impl Checker for TypeAssignment {
    fn name(&self) -> &'static str {
        "TypeAssignment"
    }

    fn check(&self, analysis: &Analysis, diagnostics: &mut Vec<Diagnostic>) {
        for binding in analysis.bindings.iter() {
            self.check_binding(binding, analysis, diagnostics)
                .unwrap_or(());
        }
    }
}
