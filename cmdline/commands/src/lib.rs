//!
//! # flo_keyframe_commands
//!
//! This provides a stream-based API for issuing scripting commands that edit a scene
//! with the FlowBetween keyframe tools.
//!

#[macro_use] extern crate log;

mod command;
mod error;
mod state;
mod command_runner;
mod output;
mod subcommands;

pub use self::command::*;
pub use self::error::*;
pub use self::state::*;
pub use self::command_runner::*;
pub use self::output::*;
