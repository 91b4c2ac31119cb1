use crate::semantics::*;
use crate::*;

/// A type in a single-rooted subtype tree.
///
/// A type owns a reference to its immediate super type, so a tree can only
/// be built from the root downwards and is acyclic by construction.
#[derive(Clone, PartialEq, Eq)]
pub struct Type {
    pub name: Symbol,
    pub parent: Option<Arc<Type>>,
}

impl Type {
    pub fn root(name: Symbol) -> Arc<Type> {
        Arc::new(Type { name, parent: None })
    }

    pub fn derived(name: Symbol, parent: &Arc<Type>) -> Arc<Type> {
        Arc::new(Type {
            name,
            parent: Some(parent.clone()),
        })
    }

    /// This type followed by all of its ancestors, nearest first.
    pub fn super_types(&self) -> SuperTypes {
        SuperTypes { next: Some(self) }
    }

    pub fn root_type(&self) -> &Type {
        let mut type_ = self;
        while let Some(ref parent) = type_.parent {
            type_ = parent.as_ref();
        }
        type_
    }

    pub fn depth(&self) -> usize {
        self.super_types().count() - 1
    }

    /// Whether this type is `other` or one of its descendants.
    pub fn is_a(&self, other: &Type) -> bool {
        self.depth() >= other.depth() && self.super_types().any(|t| t == other)
    }

    pub fn shares_root_with(&self, other: &Type) -> bool {
        self.root_type() == other.root_type()
    }
}

pub struct SuperTypes<'a> {
    next: Option<&'a Type>,
}

impl<'a> Iterator for SuperTypes<'a> {
    type Item = &'a Type;

    fn next(&mut self) -> Option<&'a Type> {
        let current = self.next?;
        self.next = current.parent.as_ref().map(|p| p.as_ref());
        Some(current)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let names = self
            .super_types()
            .map(|t| t.name.to_string())
            .collect::<Vec<_>>();
        write!(f, "{}", names.join(" < "))
    }
}
