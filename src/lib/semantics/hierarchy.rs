use crate::semantics::*;
use crate::*;

/// The named types of one or more subtype trees.
#[derive(Clone, Default)]
pub struct Hierarchy {
    types: Vec<Arc<Type>>,
    index: HashMap<Symbol, usize>,
    declarations: Vec<Symbol>,
}

impl Hierarchy {
    pub fn new() -> Hierarchy {
        Hierarchy::default()
    }

    pub fn declare_root(&mut self, name: Symbol) -> Result<Arc<Type>, Diagnostic> {
        if self.index.contains_key(&name) {
            return Err(Diagnostic::DuplicatedDeclaration(name, 2));
        }
        self.declarations.push(name.clone());
        Ok(self.insert(Type::root(name)))
    }

    pub fn declare(&mut self, name: Symbol, parent: &Symbol) -> Result<Arc<Type>, Diagnostic> {
        if self.index.contains_key(&name) {
            return Err(Diagnostic::DuplicatedDeclaration(name, 2));
        }
        let parent = match self.get(parent.as_str()) {
            Some(parent) => parent.clone(),
            None => return Err(Diagnostic::UndefinedTypeReference(parent.clone())),
        };
        self.declarations.push(name.clone());
        Ok(self.insert(Type::derived(name, &parent)))
    }

    /// Builds a hierarchy from `(name, parent)` declarations given in any
    /// order.
    ///
    /// Types that are declared more than once keep their first declaration.
    /// Repeats are not reported here; every declaration is remembered in
    /// [`declarations`](Self::declarations) and counted by the duplicate
    /// checker. Types whose ancestry cannot be resolved, because a parent is
    /// missing or because they inherit from themselves, are left out; a
    /// diagnostic is reported where the ancestry breaks, not for every
    /// descendant.
    pub fn from_declarations<I>(declarations: I) -> (Hierarchy, Vec<Diagnostic>)
    where
        I: IntoIterator<Item = (Symbol, Option<Symbol>)>,
    {
        let mut diagnostics = vec![];
        let mut order = vec![];
        let mut parents: HashMap<Symbol, Option<Symbol>> = HashMap::new();
        let mut hierarchy = Hierarchy::new();

        for (name, parent) in declarations {
            hierarchy.declarations.push(name.clone());

            if !parents.contains_key(&name) {
                order.push(name.clone());
                parents.insert(name, parent);
            }
        }

        let mut unresolvable = HashSet::new();

        for name in order.iter() {
            // Walk up until reaching a type that is already settled, then
            // build the walked path from the top down.
            let mut path: Vec<Symbol> = vec![];
            let mut current = name.clone();

            loop {
                if hierarchy.index.contains_key(&current) || unresolvable.contains(&current) {
                    break;
                }

                if let Some(at) = path.iter().position(|s| *s == current) {
                    for member in path.drain(at..) {
                        diagnostics.push(Diagnostic::CyclicInheritance(member.clone()));
                        unresolvable.insert(member);
                    }
                    break;
                }

                path.push(current.clone());

                match parents.get(&current) {
                    Some(Some(parent)) if parents.contains_key(parent) => current = parent.clone(),
                    Some(Some(parent)) => {
                        diagnostics.push(Diagnostic::UndefinedTypeReference(parent.clone()));
                        unresolvable.insert(current);
                        path.pop();
                        break;
                    }
                    _ => break,
                }
            }

            for member in path.into_iter().rev() {
                let (declared, parent) = match parents.get_key_value(&member) {
                    Some((declared, parent)) => (declared.clone(), parent),
                    None => continue,
                };

                let type_ = match parent {
                    None => Type::root(declared),
                    Some(parent) => match hierarchy.get(parent.as_str()) {
                        Some(parent) => Type::derived(declared, parent),
                        None => {
                            unresolvable.insert(member);
                            continue;
                        }
                    },
                };

                debug!("Declared {:?}", type_);
                hierarchy.insert(type_);
            }
        }

        (hierarchy, diagnostics)
    }

    fn insert(&mut self, type_: Arc<Type>) -> Arc<Type> {
        self.index.insert(type_.name.clone(), self.types.len());
        self.types.push(type_.clone());
        type_
    }

    pub fn get(&self, name: &str) -> Option<&Arc<Type>> {
        self.index.get(name).map(|i| &self.types[*i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All types, parents before their children.
    pub fn iter(&self) -> Iter<Arc<Type>> {
        self.types.iter()
    }

    /// Every declared name in declaration order, repeats and broken
    /// declarations included.
    pub fn declarations(&self) -> Iter<Symbol> {
        self.declarations.iter()
    }

    pub fn roots(&self) -> impl Iterator<Item = &Arc<Type>> {
        self.types.iter().filter(|t| t.parent.is_none())
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl fmt::Debug for Hierarchy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.types.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::semantics::test_utils::*;

    fn build(declarations: &[(&str, Option<&str>)]) -> (Hierarchy, Vec<String>) {
        let (hierarchy, diagnostics) = Hierarchy::from_declarations(
            declarations
                .iter()
                .map(|(name, parent)| (symbol(name), parent.map(symbol))),
        );
        (hierarchy, messages(&diagnostics))
    }

    #[test]
    fn declarations_in_any_order() {
        let (hierarchy, diagnostics) = build(&[
            ("Burger", Some("FastFood")),
            ("FastFood", Some("Food")),
            ("Food", None),
        ]);

        assert!(diagnostics.is_empty());
        assert_eq!(hierarchy.len(), 3);
        assert_eq!(
            format!("{:?}", hierarchy.get("Burger").unwrap()),
            "Burger < FastFood < Food"
        );

        let names = hierarchy
            .iter()
            .map(|t| t.name.to_string())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["Food", "FastFood", "Burger"]);
    }

    #[test]
    fn several_roots() {
        let hierarchy = practice_hierarchy();

        let roots = hierarchy
            .roots()
            .map(|t| t.name.to_string())
            .collect::<Vec<_>>();
        assert_eq!(roots, vec!["Food", "Gift"]);
        assert!(hierarchy.contains("Novel"));
        assert!(!hierarchy.contains("Pasta"));
    }

    #[test]
    fn undefined_parents_drop_the_subtree() {
        let (hierarchy, diagnostics) = build(&[
            ("Food", None),
            ("Burger", Some("FastFood")),
            ("Cheeseburger", Some("Burger")),
        ]);

        assert_eq!(diagnostics, vec!["`FastFood` is undefined."]);
        assert_eq!(hierarchy.len(), 1);
        assert!(hierarchy.get("Cheeseburger").is_none());
    }

    #[test]
    fn cycles_are_reported_per_member() {
        let (hierarchy, diagnostics) = build(&[
            ("Food", None),
            ("A", Some("B")),
            ("B", Some("A")),
            ("C", Some("A")),
            ("Self", Some("Self")),
        ]);

        assert_eq!(
            diagnostics,
            vec![
                "`A` inherits from itself.",
                "`B` inherits from itself.",
                "`Self` inherits from itself.",
            ]
        );
        assert_eq!(hierarchy.len(), 1);
        assert!(hierarchy.get("C").is_none());
    }

    #[test]
    fn duplicates_keep_the_first_declaration() {
        let (hierarchy, diagnostics) = build(&[
            ("Food", None),
            ("Gift", None),
            ("Book", Some("Gift")),
            ("Book", Some("Food")),
        ]);

        assert!(diagnostics.is_empty(), "{:?}", diagnostics);
        assert_eq!(hierarchy.len(), 3);
        assert_eq!(
            format!("{:?}", hierarchy.get("Book").unwrap()),
            "Book < Gift"
        );

        let declared = hierarchy
            .declarations()
            .map(|s| s.to_string())
            .collect::<Vec<_>>();
        assert_eq!(declared, vec!["Food", "Gift", "Book", "Book"]);
    }

    #[test]
    fn broken_declarations_are_remembered() {
        let (hierarchy, _) = build(&[("Burger", Some("FastFood")), ("Egg", Some("Egg"))]);

        assert!(hierarchy.is_empty());
        assert_eq!(hierarchy.declarations().count(), 2);
    }

    #[test]
    fn incremental_declaration() {
        let mut hierarchy = Hierarchy::new();
        let food = hierarchy.declare_root(symbol("Food")).unwrap();
        let burger = hierarchy.declare(symbol("Burger"), &symbol("Food")).unwrap();

        assert!(burger.is_a(&food));
        assert_eq!(hierarchy.declarations().count(), 2);
        assert_matches!(
            hierarchy.declare(symbol("Novel"), &symbol("Book")),
            Err(Diagnostic::UndefinedTypeReference(_))
        );
        assert_matches!(
            hierarchy.declare_root(symbol("Burger")),
            Err(Diagnostic::DuplicatedDeclaration(_, 2))
        );
    }
}
