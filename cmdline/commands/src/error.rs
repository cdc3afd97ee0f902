use std::fmt;
use std::error::Error;

///
/// Errors that stop a command stream
///
#[derive(Clone, PartialEq, Debug)]
pub enum CommandError {
    /// A scene file could not be loaded (path, reason)
    CouldNotReadScene(String, String),

    /// A scene file could not be written (path, reason)
    CouldNotWriteScene(String, String),

    /// There is no object with the specified name
    NoSuchObject(String),

    /// The selected object has no layer with the specified ID
    NoSuchLayer(u64),

    /// The command needs an object to be selected
    NoObjectSelected,

    /// There is no keyframe command with the specified ID
    UnknownCommand(String)
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::CommandError::*;

        match self {
            CouldNotReadScene(path, reason)     => write!(f, "Could not read the scene from '{}': {}", path, reason),
            CouldNotWriteScene(path, reason)    => write!(f, "Could not write the scene to '{}': {}", path, reason),
            NoSuchObject(name)                  => write!(f, "There is no object called '{}'", name),
            NoSuchLayer(layer_id)               => write!(f, "The selected object has no layer with ID {}", layer_id),
            NoObjectSelected                    => write!(f, "No object is selected"),
            UnknownCommand(command_id)          => write!(f, "'{}' is not a keyframe command (use 'ls-commands' to see the list)", command_id)
        }
    }
}

impl Error for CommandError { }
