//!
//! The commands the host offers for adding blank keyframes
//!
//! Each command is executed against a `KeyFrameContext` supplied by the host and returns
//! a status message to show to the user. Errors are never fatal: the host reports them
//! (as a warning if the command didn't apply to the current selection) and carries on.
//!

mod command;
mod status;
mod place;
mod add_fixed;
mod add_custom;
mod registry;

pub use self::command::*;
pub use self::status::*;
pub use self::add_fixed::*;
pub use self::add_custom::*;
pub use self::registry::*;
