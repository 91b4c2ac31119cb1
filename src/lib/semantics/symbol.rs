use crate::*;

/// A declared name, remembering which manifest it was written in.
///
/// Equality and hashing only consider the name itself.
#[derive(Clone)]
pub struct Symbol(pub Option<URI>, pub String);

impl Symbol {
    pub fn new<S: Into<String>>(name: S) -> Symbol {
        Symbol(None, name.into())
    }

    pub fn declared_in<S: Into<String>>(uri: &URI, name: S) -> Symbol {
        Symbol(Some(uri.clone()), name.into())
    }

    pub fn origin(&self) -> Option<&URI> {
        self.0.as_ref()
    }

    pub fn as_str(&self) -> &str {
        self.1.as_str()
    }
}

impl std::hash::Hash for Symbol {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        let Symbol(_, s) = self;
        s.hash(state);
    }
}

impl Eq for Symbol {}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        let Symbol(_, lhs) = self;
        let Symbol(_, rhs) = other;
        lhs == rhs
    }
}

impl std::borrow::Borrow<str> for Symbol {
    fn borrow(&self) -> &str {
        self.1.as_str()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.1)
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.1)
    }
}
