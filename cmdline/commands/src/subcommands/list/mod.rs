mod list_commands;
mod list_layers;
mod list_keyframes;

pub use self::list_commands::*;
pub use self::list_layers::*;
pub use self::list_keyframes::*;
