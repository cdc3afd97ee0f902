use crate::state::*;
use crate::error::*;
use crate::output::*;

use flo_stream::*;
use flo_keyframes::inmemory::*;

use futures::prelude::*;

///
/// Adds a new drawing with a single empty layer to the scene and selects it
///
pub fn new_drawing<'a>(name: &'a str, output: &'a mut Publisher<KeyFrameToolOutput>, state: &'a mut CommandState) -> impl 'a+Future<Output=()>+Send {
    async move {
        let mut drawing = InMemoryObject::drawing(name);
        drawing.add_layer(Some("Layer 1".to_string()));

        state.scene_mut().add_object(drawing);

        output.publish(KeyFrameToolOutput::Message(format!("Created drawing '{}'", name))).await;
    }
}

///
/// Selects the object with the specified name
///
pub fn select_object(name: &str, state: &mut CommandState) -> Result<(), CommandError> {
    if state.scene_mut().select_object(Some(name)) {
        Ok(())
    } else {
        Err(CommandError::NoSuchObject(name.to_string()))
    }
}

///
/// Adds a new layer to the selected object
///
pub fn add_layer<'a>(name: &'a str, output: &'a mut Publisher<KeyFrameToolOutput>, state: &'a mut CommandState) -> impl 'a+Future<Output=Result<(), CommandError>>+Send {
    async move {
        let object      = state.scene_mut().selected_object_mut().ok_or(CommandError::NoObjectSelected)?;
        let layer_id    = object.add_layer(Some(name.to_string()));
        let msg         = format!("Added layer ({:02}) '{}' to '{}'", layer_id, name, object.name);

        output.publish(KeyFrameToolOutput::Message(msg)).await;

        Ok(())
    }
}

///
/// Makes a layer in the selected object the active layer
///
pub fn select_layer(layer_id: u64, state: &mut CommandState) -> Result<(), CommandError> {
    let object = state.scene_mut().selected_object_mut().ok_or(CommandError::NoObjectSelected)?;

    if object.select_layer(layer_id) {
        Ok(())
    } else {
        Err(CommandError::NoSuchLayer(layer_id))
    }
}
