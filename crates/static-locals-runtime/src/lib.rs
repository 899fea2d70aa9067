//! Registry backing `static-locals`: type-erased cells over tracked statics,
//! keyed by declaring file, declaring function, and label.

mod cell;
mod error;
mod registry;

pub use self::cell::StaticCell;
pub use self::error::{LookupError, LookupKey};
pub use self::registry::Registry;
pub use static_locals_types::{Coordinates, FileName, FuncName, VarName};
