use crate::state::*;
use crate::error::*;
use crate::output::*;

use flo_stream::*;
use flo_keyframes::*;
use flo_keyframes::commands::*;

use futures::prelude::*;

///
/// Runs one of the keyframe commands against the scene
///
/// Keyframe errors are reported to the user as warnings or errors but don't stop the
/// command stream: only an unknown command ID does that.
///
pub fn run_keyframe_command<'a>(command_id: &'a str, output: &'a mut Publisher<KeyFrameToolOutput>, state: &'a mut CommandState) -> impl 'a+Future<Output=Result<(), CommandError>>+Send {
    async move {
        use self::KeyFrameToolOutput::*;

        let command = command_with_id(command_id).ok_or_else(|| CommandError::UnknownCommand(command_id.to_string()))?;
        let result  = command.execute(state.scene_mut());

        let message = match result {
            Ok(status)  => Message(status.message),
            Err(err)    => match err.status_level() {
                StatusLevel::Info       => Message(err.to_string()),
                StatusLevel::Warning    => Warning(err.to_string()),
                StatusLevel::Error      => Error(err.to_string())
            }
        };

        output.publish(message).await;

        Ok(())
    }
}
