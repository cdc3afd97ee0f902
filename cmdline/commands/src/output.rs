use super::state::*;
use super::error::*;
use super::command::*;

///
/// Possible types of output from a KeyFrameToolCommand
///
#[derive(Clone)]
pub enum KeyFrameToolOutput {
    /// A particular command has started running
    BeginCommand(KeyFrameToolCommand),

    /// Display a message to the user
    Message(String),

    /// Display a warning to the user (eg, a keyframe command that doesn't apply to the selection)
    Warning(String),

    /// Display an error message to the user
    Error(String),

    /// Retrieved the current state of the command line tool
    State(CommandState),

    /// Data to write to the output
    Output(String),

    /// A command has finished running
    FinishCommand(KeyFrameToolCommand),

    /// A command generated an error (this is generally the last item in the stream)
    Failure(CommandError)
}
