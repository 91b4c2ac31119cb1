mod uri;
pub use self::uri::*;

mod source;
pub use self::source::*;
