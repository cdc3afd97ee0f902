mod layer;
mod active_object;
mod playhead;
mod scene_config;
mod context;

pub use self::layer::*;
pub use self::active_object::*;
pub use self::playhead::*;
pub use self::scene_config::*;
pub use self::context::*;
