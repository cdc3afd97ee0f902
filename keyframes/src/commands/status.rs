use crate::error::*;

use std::fmt;

///
/// A message from a command to show to the user
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct StatusMessage {
    /// How important the message is
    pub level: StatusLevel,

    /// The text of the message
    pub message: String
}

impl StatusMessage {
    ///
    /// Creates an informational message
    ///
    pub fn info<Msg: Into<String>>(message: Msg) -> StatusMessage {
        StatusMessage { level: StatusLevel::Info, message: message.into() }
    }
}

impl From<&KeyFrameError> for StatusMessage {
    fn from(error: &KeyFrameError) -> StatusMessage {
        StatusMessage {
            level:      error.status_level(),
            message:    error.to_string()
        }
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
