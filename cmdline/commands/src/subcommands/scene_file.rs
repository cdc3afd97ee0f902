use crate::state::*;
use crate::error::*;
use crate::output::*;

use flo_stream::*;
use flo_keyframes::inmemory::*;

use futures::prelude::*;

use std::fs;

///
/// Replaces the scene in the state with one read from a JSON file
///
pub fn load_scene<'a>(path: &'a str, output: &'a mut Publisher<KeyFrameToolOutput>, state: &'a mut CommandState) -> impl 'a+Future<Output=Result<(), CommandError>>+Send {
    async move {
        let scene = fs::read_to_string(path)
            .map_err(|err| err.to_string())
            .and_then(|json| serde_json::from_str::<InMemoryScene>(&json).map_err(|err| err.to_string()));

        let scene = match scene {
            Ok(scene)   => scene,
            Err(reason) => {
                warn!("Rejected scene file {}: {}", path, reason);
                return Err(CommandError::CouldNotReadScene(path.to_string(), reason));
            }
        };

        *state = state.set_scene(scene);
        output.publish(KeyFrameToolOutput::Message(format!("Loaded scene from '{}'", path))).await;

        Ok(())
    }
}

///
/// Writes the scene in the state to a JSON file
///
pub fn save_scene<'a>(path: &'a str, output: &'a mut Publisher<KeyFrameToolOutput>, state: &'a mut CommandState) -> impl 'a+Future<Output=Result<(), CommandError>>+Send {
    async move {
        let json = serde_json::to_string_pretty(state.scene())
            .map_err(|err| CommandError::CouldNotWriteScene(path.to_string(), err.to_string()))?;

        fs::write(path, json)
            .map_err(|err| CommandError::CouldNotWriteScene(path.to_string(), err.to_string()))?;

        output.publish(KeyFrameToolOutput::Message(format!("Saved scene to '{}'", path))).await;

        Ok(())
    }
}

///
/// Sends the scene as JSON to the output
///
pub fn dump_scene<'a>(output: &'a mut Publisher<KeyFrameToolOutput>, state: &'a mut CommandState) -> impl 'a+Future<Output=Result<(), CommandError>>+Send {
    async move {
        let json = serde_json::to_string_pretty(state.scene())
            .map_err(|err| CommandError::CouldNotWriteScene("-".to_string(), err.to_string()))?;

        output.publish(KeyFrameToolOutput::Output(json)).await;
        output.publish(KeyFrameToolOutput::Output("\n".to_string())).await;

        Ok(())
    }
}
