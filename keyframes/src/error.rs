use std::fmt;
use std::error::Error;

///
/// Why a keyframe command could not be applied to the current selection
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum NotApplicableReason {
    /// Nothing is selected
    NoActiveObject,

    /// The selected object is not a drawing (contains the kind of object that was selected)
    IncompatibleObject(String),

    /// The selected drawing has no active layer
    NoActiveLayer
}

///
/// Numeric settings that can't be used
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum ConfigurationProblem {
    /// The timeline has a frame rate of 0
    ZeroFrameRate,

    /// Asked to add 0 keyframes
    ZeroFrameCount,

    /// Asked to space keyframes 0 frames apart
    ZeroSpacing,

    /// The keyframes (or the playhead after them) would land past the last representable frame
    FrameOutOfRange
}

///
/// Errors from the keyframe operations
///
/// None of these are fatal: each is reported to the user and the command is abandoned
/// without changing anything.
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum KeyFrameError {
    /// There's nothing selected that keyframes can be added to
    NotApplicable(NotApplicableReason),

    /// A setting has a value that can't be used
    ConfigurationError(ConfigurationProblem)
}

///
/// How serious a message to the user is
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum StatusLevel {
    Info,
    Warning,
    Error
}

impl KeyFrameError {
    ///
    /// The level at which this error should be reported to the user
    ///
    pub fn status_level(&self) -> StatusLevel {
        match self {
            KeyFrameError::NotApplicable(_)         => StatusLevel::Warning,
            KeyFrameError::ConfigurationError(_)    => StatusLevel::Error
        }
    }
}

impl fmt::Display for NotApplicableReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NotApplicableReason::NoActiveObject             => write!(f, "No active drawing selected."),
            NotApplicableReason::IncompatibleObject(kind)   => write!(f, "The active object is a {}, not a drawing.", kind),
            NotApplicableReason::NoActiveLayer              => write!(f, "No active drawing layer selected.")
        }
    }
}

impl fmt::Display for ConfigurationProblem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigurationProblem::ZeroFrameRate     => write!(f, "The frame rate must be at least 1 frame per second."),
            ConfigurationProblem::ZeroFrameCount    => write!(f, "The keyframe count must be at least 1."),
            ConfigurationProblem::ZeroSpacing       => write!(f, "The keyframe spacing must be at least 1."),
            ConfigurationProblem::FrameOutOfRange   => write!(f, "The keyframes would be placed past the last frame the timeline can hold.")
        }
    }
}

impl fmt::Display for KeyFrameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            KeyFrameError::NotApplicable(reason)            => write!(f, "{}", reason),
            KeyFrameError::ConfigurationError(problem)      => write!(f, "{}", problem)
        }
    }
}

impl Error for KeyFrameError { }

impl From<NotApplicableReason> for KeyFrameError {
    fn from(reason: NotApplicableReason) -> KeyFrameError {
        KeyFrameError::NotApplicable(reason)
    }
}

impl From<ConfigurationProblem> for KeyFrameError {
    fn from(problem: ConfigurationProblem) -> KeyFrameError {
        KeyFrameError::ConfigurationError(problem)
    }
}
