use crate::semantics::*;
use crate::*;

/// A generic interface with exactly one type parameter.
pub struct GenericInterface {
    pub name: Symbol,
    pub parameter: TypeParameter,
    pub methods: Vec<Signature>,
}

impl GenericInterface {
    pub fn variance(&self) -> Variance {
        self.parameter.variance
    }

    /// The type expression of this interface applied to `argument`.
    pub fn instance(&self, argument: &Type) -> TypeExpression {
        TypeExpression::application(
            self.name.clone(),
            TypeExpression::reference(argument.name.clone()),
        )
    }
}

impl fmt::Display for GenericInterface {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.variance() {
            Variance::Invariant => write!(f, "{}<{}>", self.name, self.parameter.name),
            variance => write!(
                f,
                "{}<{} {}>",
                self.name,
                variance.keyword(),
                self.parameter.name
            ),
        }
    }
}

/// A class that implements interfaces at concrete type arguments, such as
/// `FoodStore: Production<Food>`.
pub struct Class {
    pub name: Symbol,
    pub implements: Vec<TypeExpression>,
}

impl Class {
    pub fn implementation_of(&self, interface: &Symbol) -> Option<&TypeExpression> {
        self.implements.iter().find(|e| e.name() == interface)
    }
}

/// `name: declared = value()`, where `declared` is an interface instance
/// and `value` is a class.
pub struct Binding {
    pub name: Symbol,
    pub declared: TypeExpression,
    pub value: Symbol,
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {} = {}()", self.name, self.declared, self.value)
    }
}
