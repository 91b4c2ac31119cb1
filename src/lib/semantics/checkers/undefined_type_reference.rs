use crate::semantics::*;
use crate::*;

/// Every name must denote something. Inside an interface declaration that
/// includes the interface's own type parameter; interfaces in classes and
/// bindings can only be instantiated with hierarchy types, so an interface
/// or an application in argument position is reported as such.
pub struct UndefinedTypeReference;

impl UndefinedTypeReference {
    fn check_signature_expression(
        analysis: &Analysis,
        expression: &TypeExpression,
        parameter: &Symbol,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        let name = expression.name();
        if name != parameter
            && !analysis.hierarchy.contains(name.as_str())
            && analysis.interface(name.as_str()).is_none()
        {
            diagnostics.push(Diagnostic::UndefinedTypeReference(name.clone()));
        }

        if let Some(argument) = expression.argument() {
            Self::check_signature_expression(analysis, argument, parameter, diagnostics);
        }
    }

    fn check_instance_expression(
        analysis: &Analysis,
        expression: &TypeExpression,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        let name = expression.name();
        if analysis.interface(name.as_str()).is_none()
            && !analysis.hierarchy.contains(name.as_str())
        {
            diagnostics.push(Diagnostic::UndefinedTypeReference(name.clone()));
        }

        if let Some(argument) = expression.argument() {
            let name = argument.name();
            if argument.argument().is_some() || analysis.interface(name.as_str()).is_some() {
                diagnostics.push(Diagnostic::NonHierarchyTypeArgument(argument.clone()));
            } else if !analysis.hierarchy.contains(name.as_str()) {
                diagnostics.push(Diagnostic::UndefinedTypeReference(name.clone()));
            }
        }
    }
}

impl Checker for UndefinedTypeReference {
    fn name(&self) -> &'static str {
        "UndefinedTypeReference"
    }

    fn check(&self, analysis: &Analysis, diagnostics: &mut Vec<Diagnostic>) {
        for interface in analysis.interfaces.iter() {
            for method in interface.methods.iter() {
                for (expression, _) in method.positions() {
                    Self::check_signature_expression(
                        analysis,
                        expression,
                        &interface.parameter.name,
                        diagnostics,
                    );
                }
            }
        }

        for class in analysis.classes.iter() {
            for implemented in class.implements.iter() {
                Self::check_instance_expression(analysis, implemented, diagnostics);
            }
        }

        for binding in analysis.bindings.iter() {
            Self::check_instance_expression(analysis, &binding.declared, diagnostics);

            if analysis.class(binding.value.as_str()).is_none() {
                diagnostics.push(Diagnostic::UndefinedTypeReference(binding.value.clone()));
            }
        }
    }
}
