use crate::settings::*;

///
/// The store for the scene-level keyframe settings that the user can edit
///
/// The host owns these settings for the duration of the session: commands read them at
/// the point they're executed.
///
pub trait SceneConfigStore {
    ///
    /// Retrieves the current keyframe settings
    ///
    fn keyframe_settings(&self) -> KeyFrameSettings;

    ///
    /// Replaces the keyframe settings
    ///
    fn set_keyframe_settings(&mut self, settings: KeyFrameSettings);
}
