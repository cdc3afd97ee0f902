use super::active_object::*;
use super::playhead::*;
use super::scene_config::*;

///
/// Everything a keyframe command needs from the host
///
pub trait KeyFrameContext : ActiveObjectProvider+PlayheadProvider+SceneConfigStore {
}

impl<T: ActiveObjectProvider+PlayheadProvider+SceneConfigStore> KeyFrameContext for T {
}
