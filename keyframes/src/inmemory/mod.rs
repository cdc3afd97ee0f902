//!
//! A host that keeps its scene in memory
//!
//! This is used by the command line tools (which load and save scenes as JSON) and by
//! the tests. Everything here can be serialized with serde.
//!

mod layer;
mod object;
mod scene;

pub use self::layer::*;
pub use self::object::*;
pub use self::scene::*;
