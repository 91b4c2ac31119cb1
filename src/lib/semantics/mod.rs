mod symbol;
pub use self::symbol::*;

mod type_parameter;
pub use self::type_parameter::*;

mod typ;
pub use self::typ::*;

mod hierarchy;
pub use self::hierarchy::*;

mod type_expression;
pub use self::type_expression::*;

mod signature;
pub use self::signature::*;

mod interface;
pub use self::interface::*;

mod type_assignability;
pub use self::type_assignability::*;

mod variance_checker;
pub use self::variance_checker::*;

mod analysis;
pub use self::analysis::*;

mod checker;
pub use self::checker::*;

pub mod checkers;

#[cfg(test)]
pub mod test_utils;
