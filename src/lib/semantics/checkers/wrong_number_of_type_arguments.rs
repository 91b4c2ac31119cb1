use crate::semantics::*;
use crate::*;

/// Interfaces take exactly one type argument; hierarchy types and type
/// parameters take none.
pub struct WrongNumberOfTypeArguments;

impl WrongNumberOfTypeArguments {
    fn check_expression(
        analysis: &Analysis,
        expression: &TypeExpression,
        parameter: Option<&Symbol>,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Option<()> {
        let name = expression.name();
        let args = if expression.argument().is_some() { 1 } else { 0 };

        let params = if parameter == Some(name) || analysis.hierarchy.contains(name.as_str()) {
            Some(0)
        } else if analysis.interface(name.as_str()).is_some() {
            Some(1)
        } else {
            None
        };

        if let Some(params) = params {
            if params != args {
                diagnostics.push(Diagnostic::WrongNumberOfTypeArguments(
                    name.clone(),
                    params,
                    args,
                ));
            }
        }

        Self::check_expression(analysis, expression.argument()?, parameter, diagnostics)
    }
}

impl Checker for WrongNumberOfTypeArguments {
    fn name(&self) -> &'static str {
        "WrongNumberOfTypeArguments"
    }

    fn check(&self, analysis: &Analysis, diagnostics: &mut Vec<Diagnostic>) {
        for interface in analysis.interfaces.iter() {
            for method in interface.methods.iter() {
                for (expression, _) in method.positions() {
                    Self::check_expression(
                        analysis,
                        expression,
                        Some(&interface.parameter.name),
                        diagnostics,
                    )
                    .unwrap_or(());
                }
            }
        }

        let instances = analysis
            .classes
            .iter()
            .flat_map(|c| c.implements.iter())
            .chain(analysis.bindings.iter().map(|b| &b.declared));

        for expression in instances {
            Self::check_expression(analysis, expression, None, diagnostics).unwrap_or(());
        }
    }
}
