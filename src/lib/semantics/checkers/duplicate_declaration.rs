use crate::semantics::*;
use crate::*;

/// Interfaces, classes and hierarchy types share one namespace, bindings
/// live in another. Types count every time they were declared, including
/// repeats the hierarchy discarded.
pub struct DuplicateDeclaration;

impl DuplicateDeclaration {
    fn check_names<'a, I: Iterator<Item = &'a Symbol>>(
        names: I,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        let mut declarations_by_name: HashMap<&Symbol, Vec<&Symbol>> = HashMap::new();
        let mut order = vec![];

        for name in names {
            if !declarations_by_name.contains_key(name) {
                order.push(name);
            }
            declarations_by_name
                .entry(name)
                .or_insert_with(Vec::new)
                .push(name);
        }

        for name in order {
            let declarations = &declarations_by_name[name];
            let count = declarations.len();

            if count < 2 {
                continue;
            }

            for symbol in declarations {
                diagnostics.push(Diagnostic::DuplicatedDeclaration((*symbol).clone(), count));
            }
        }
    }
}

impl Checker for DuplicateDeclaration {
    fn name(&self) -> &'static str {
        "DuplicateDeclaration"
    }

    fn check(&self, analysis: &Analysis, diagnostics: &mut Vec<Diagnostic>) {
        Self::check_names(
            analysis
                .hierarchy
                .declarations()
                .chain(analysis.interfaces.iter().map(|i| &i.name))
                .chain(analysis.classes.iter().map(|c| &c.name)),
            diagnostics,
        );
        Self::check_names(analysis.bindings.iter().map(|b| &b.name), diagnostics);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::semantics::test_utils::*;

    #[test]
    fn namespaces() {
        let mut analysis = Analysis::new(practice_hierarchy());
        analysis
            .interfaces
            .push(interface("Food", "T", Variance::Covariant, |_| {}));
        analysis.classes.push(class("Store", &[]));
        analysis.classes.push(class("Store", &[]));
        analysis.bindings.push(Arc::new(binding("Store", "Production<Food>", "Store")));

        let mut diagnostics = vec![];
        DuplicateDeclaration.check(&analysis, &mut diagnostics);

        assert_eq!(
            messages(&diagnostics),
            vec![
                "`Food` is defined 2 times.",
                "`Food` is defined 2 times.",
                "`Store` is defined 2 times.",
                "`Store` is defined 2 times.",
            ]
        );
    }

    #[test]
    fn repeated_types_count_with_classes() {
        let (hierarchy, hierarchy_diagnostics) = Hierarchy::from_declarations(vec![
            (symbol("Food"), None),
            (symbol("Food"), None),
        ]);
        assert!(hierarchy_diagnostics.is_empty());

        let mut analysis = Analysis::new(hierarchy);
        analysis.classes.push(class("Food", &[]));

        let mut diagnostics = vec![];
        DuplicateDeclaration.check(&analysis, &mut diagnostics);

        assert_eq!(
            messages(&diagnostics),
            vec![
                "`Food` is defined 3 times.",
                "`Food` is defined 3 times.",
                "`Food` is defined 3 times.",
            ]
        );
    }
}
