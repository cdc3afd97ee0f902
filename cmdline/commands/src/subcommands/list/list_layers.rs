use crate::state::*;
use crate::output::*;

use flo_stream::*;
use flo_keyframes::*;

use futures::prelude::*;

///
/// Writes out a list of the layers in the selected object to the output
///
pub fn list_layers<'a>(output: &'a mut Publisher<KeyFrameToolOutput>, state: &'a mut CommandState) -> impl 'a+Future<Output=()>+Send {
    async move {
        use self::KeyFrameToolOutput::*;

        let object = match state.scene().selected_object() {
            Some(object)    => object.clone(),
            None            => {
                output.publish(Warning("No object is selected".to_string())).await;
                return;
            }
        };

        output.publish(Message(format!("Layers in '{}' ({}):", object.name, object.kind))).await;

        for layer in object.layers.iter() {
            // Display information on this layer
            let active      = if object.active_layer == Some(layer.id()) { "*" } else { " " };
            let layer_info  = format!(" {}Layer ({:02}): {} - {} keyframes", active, layer.id(), layer.name().unwrap_or("No name".to_string()), layer.frames().len());

            output.publish(Message(layer_info)).await;
        }
    }
}
