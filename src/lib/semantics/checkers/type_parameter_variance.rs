use crate::semantics::*;
use crate::*;

/// A parameter marked `out` may only occur in output position, one marked
/// `in` only in input position. An unmarked parameter that happens to be
/// used in one kind of position only is pointed out.
pub struct TypeParameterVariance;

impl TypeParameterVariance {
    fn usages_in_type(
        &self,
        interface: &GenericInterface,
        expression: &TypeExpression,
        position: Variance,
        analysis: &Analysis,
        usages: &mut Vec<Variance>,
    ) -> Option<()> {
        match expression {
            TypeExpression::Reference(name) => {
                if *name == interface.parameter.name {
                    usages.push(position);
                }
            }
            TypeExpression::Application(name, argument) => {
                let inner = analysis.interface(name.as_str())?;
                self.usages_in_type(
                    interface,
                    argument,
                    position.compose(inner.variance()),
                    analysis,
                    usages,
                )?;
            }
        }
        Some(())
    }

    fn check_interface(
        &self,
        interface: &GenericInterface,
        analysis: &Analysis,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        let mark = interface.variance();
        let mut all_usages = vec![];

        for method in interface.methods.iter() {
            let mut usages = vec![];
            for (expression, position) in method.positions() {
                self.usages_in_type(interface, expression, position, analysis, &mut usages)
                    .unwrap_or(());
            }

            let mut reported = vec![];
            for usage in usages.iter() {
                if mark.permits(*usage) || reported.contains(usage) {
                    continue;
                }
                diagnostics.push(Diagnostic::InvalidTypeParameterVarianceUsage {
                    interface: interface.name.clone(),
                    selector: method.selector.clone(),
                    parameter: interface.parameter.name.clone(),
                    usage: *usage,
                    mark,
                });
                reported.push(*usage);
            }

            all_usages.extend(usages);
        }

        if mark != Variance::Invariant {
            return;
        }

        let inferred = all_usages
            .into_iter()
            .fold(None, |joined: Option<Variance>, usage| {
                Some(joined.map_or(usage, |j| j.join(usage)))
            });

        if let Some(inferred) = inferred {
            if inferred != Variance::Invariant {
                info!("{} could be declared {}", interface, inferred);
                diagnostics.push(Diagnostic::UndeclaredVariance {
                    interface: interface.name.clone(),
                    parameter: interface.parameter.name.clone(),
                    inferred,
                });
            }
        }
    }
}

impl Checker for TypeParameterVariance {
    fn name(&self) -> &'static str {
        "TypeParameterVariance"
    }

    fn check(&self, analysis: &Analysis, diagnostics: &mut Vec<Diagnostic>) {
        for interface in analysis.interfaces.iter() {
            self.check_interface(interface, analysis, diagnostics);
        }
    }
}
