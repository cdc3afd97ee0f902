use crate::output::*;

use flo_stream::*;
use flo_keyframes::commands::*;

use futures::prelude::*;

///
/// Writes out the keyframe commands that can be run
///
pub fn list_commands<'a>(output: &'a mut Publisher<KeyFrameToolOutput>) -> impl 'a+Future<Output=()>+Send {
    async move {
        use self::KeyFrameToolOutput::*;

        // Read the command descriptions before publishing anything
        let descriptions = all_commands().into_iter()
            .map(|command| format!("  {:<22} {:<14} {}", command.id(), command.label(), command.description()))
            .collect::<Vec<_>>();

        output.publish(Message("Keyframe commands:".to_string())).await;

        for description in descriptions {
            output.publish(Message(description)).await;
        }
    }
}
