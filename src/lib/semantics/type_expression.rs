use crate::semantics::*;
use crate::*;

/// A reference to a type as written in a declaration: either a plain name
/// (`Food`, or an interface's own parameter `T`) or an interface applied to
/// an argument (`Production<Food>`).
#[derive(Clone, PartialEq, Eq)]
pub enum TypeExpression {
    Reference(Symbol),
    Application(Symbol, Box<TypeExpression>),
}

impl TypeExpression {
    pub fn reference(name: Symbol) -> TypeExpression {
        TypeExpression::Reference(name)
    }

    pub fn application(name: Symbol, argument: TypeExpression) -> TypeExpression {
        TypeExpression::Application(name, Box::new(argument))
    }

    pub fn name(&self) -> &Symbol {
        match self {
            TypeExpression::Reference(name) | TypeExpression::Application(name, _) => name,
        }
    }

    pub fn argument(&self) -> Option<&TypeExpression> {
        match self {
            TypeExpression::Reference(_) => None,
            TypeExpression::Application(_, argument) => Some(argument),
        }
    }

    /// Reads the `Name` / `Name<Argument>` notation used in manifests. Names
    /// are attributed to the manifest at `origin`.
    pub fn from_notation(notation: &str, origin: Option<&URI>) -> Result<TypeExpression, String> {
        let notation = notation.trim();
        let symbol = |name: &str| Symbol(origin.cloned(), name.trim().into());

        match notation.find('<') {
            None => {
                if !is_identifier(notation) {
                    return Err(format!("`{}` is not a valid type name.", notation));
                }
                Ok(TypeExpression::reference(symbol(notation)))
            }
            Some(open) => {
                if !notation.ends_with('>') {
                    return Err(format!("`{}` is missing a closing `>`.", notation));
                }
                let name = notation[..open].trim();
                if !is_identifier(name) {
                    return Err(format!("`{}` is not a valid type name.", name));
                }
                let argument = &notation[open + 1..notation.len() - 1];
                let argument = TypeExpression::from_notation(argument, origin)?;
                Ok(TypeExpression::application(symbol(name), argument))
            }
        }
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

impl fmt::Display for TypeExpression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TypeExpression::Reference(name) => write!(f, "{}", name),
            TypeExpression::Application(name, argument) => write!(f, "{}<{}>", name, argument),
        }
    }
}

impl fmt::Debug for TypeExpression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "TypeExpression({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_references() {
        let expression = TypeExpression::from_notation(" Food ", None).unwrap();

        assert_matches!(expression, TypeExpression::Reference(_));
        assert_eq!(expression.name().as_str(), "Food");
        assert!(expression.argument().is_none());
    }

    #[test]
    fn nested_applications() {
        let expression =
            TypeExpression::from_notation("Production<Consumer<T>>", Some(&URI::Test)).unwrap();

        assert_eq!(expression.to_string(), "Production<Consumer<T>>");
        assert_eq!(expression.name().origin(), Some(&URI::Test));

        let argument = expression.argument().unwrap();
        assert_eq!(argument.name().as_str(), "Consumer");
        assert_eq!(argument.argument().unwrap().to_string(), "T");
    }

    #[test]
    fn malformed_notation() {
        assert!(TypeExpression::from_notation("Production<Food", None).is_err());
        assert!(TypeExpression::from_notation("<Food>", None).is_err());
        assert!(TypeExpression::from_notation("Fast Food", None).is_err());
        assert!(TypeExpression::from_notation("", None).is_err());
        assert!(TypeExpression::from_notation("Production<>", None).is_err());
    }
}
