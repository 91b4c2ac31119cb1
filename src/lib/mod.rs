#[macro_use]
extern crate log;

#[macro_use]
extern crate strum_macros;

#[cfg(test)]
#[macro_use]
extern crate matches;

pub use std::collections::HashMap;
pub use std::collections::HashSet;
pub use std::fmt;
pub use std::slice::Iter;
pub use std::sync::Arc;

mod source;
pub use self::source::*;

mod diagnostics;
pub use self::diagnostics::*;

pub mod semantics;

mod manifest;
pub use self::manifest::*;

#[cfg(test)]
mod fixture_tests;
