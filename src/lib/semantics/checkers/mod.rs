use crate::semantics::Checker;

mod duplicate_declaration;
pub use self::duplicate_declaration::*;

mod undefined_type_reference;
pub use self::undefined_type_reference::*;

mod wrong_number_of_type_arguments;
pub use self::wrong_number_of_type_arguments::*;

mod type_parameter_variance;
pub use self::type_parameter_variance::*;

mod type_assignment;
pub use self::type_assignment::*;

const DUPLICATE_DECLARATION: DuplicateDeclaration = DuplicateDeclaration;
const UNDEFINED_TYPE_REFERENCE: UndefinedTypeReference = UndefinedTypeReference;
const WRONG_NUMBER_OF_TYPE_ARGUMENTS: WrongNumberOfTypeArguments = WrongNumberOfTypeArguments;
const TYPE_PARAMETER_VARIANCE: TypeParameterVariance = TypeParameterVariance;
const TYPE_ASSIGNMENT: TypeAssignment = TypeAssignment;

#[inline]
pub fn checkers() -> Vec<&'static dyn Checker> {
    vec![
        &DUPLICATE_DECLARATION,
        &UNDEFINED_TYPE_REFERENCE,
        &WRONG_NUMBER_OF_TYPE_ARGUMENTS,
        &TYPE_PARAMETER_VARIANCE,
        &TYPE_ASSIGNMENT,
    ]
}
