//!
//! # flo_keyframes
//!
//! Tools for appending evenly spaced blank keyframes to an animation layer, and for
//! describing where the playhead is in terms of seconds and frames.
//!
//! The host application (the thing that owns the objects, layers and timeline) is
//! reached through the traits in this crate: anything that implements `KeyFrameContext`
//! can run the keyframe commands. An in-memory host is supplied for tools and tests.
//!
#![warn(bare_trait_objects)]

#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate log;
extern crate serde;
extern crate itertools;

mod traits;
mod error;
mod settings;
mod placer;
mod time_readout;
pub mod commands;
pub mod inmemory;

#[cfg(test)] mod tests;

pub use self::traits::*;
pub use self::error::*;
pub use self::settings::*;
pub use self::placer::*;
pub use self::time_readout::*;
