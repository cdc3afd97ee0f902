use super::error::*;

///
/// The keyframe settings the user can edit for a scene
///
/// These are the values used by the 'Add Keyframes' command. Missing fields take their
/// default values when deserialized.
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyFrameSettings {
    /// The number of blank keyframes to add
    pub frame_count: u32,

    /// The number of frames between each keyframe
    pub spacing: u32,

    /// If true, keyframes start at the playhead rather than after the last keyframe in the layer
    pub start_from_playhead: bool
}

impl Default for KeyFrameSettings {
    fn default() -> KeyFrameSettings {
        KeyFrameSettings {
            frame_count:            5,
            spacing:                2,
            start_from_playhead:    false
        }
    }
}

impl KeyFrameSettings {
    ///
    /// Checks that these settings can be used to place keyframes
    ///
    pub fn validate(&self) -> Result<(), KeyFrameError> {
        if self.frame_count < 1 {
            Err(ConfigurationProblem::ZeroFrameCount.into())
        } else if self.spacing < 1 {
            Err(ConfigurationProblem::ZeroSpacing.into())
        } else {
            Ok(())
        }
    }
}
