use crate::state::*;
use crate::output::*;

use flo_stream::*;
use flo_keyframes::*;

use itertools::*;
use futures::prelude::*;

///
/// Writes out the keyframes in the active layer of the selected object
///
pub fn list_keyframes<'a>(output: &'a mut Publisher<KeyFrameToolOutput>, state: &'a mut CommandState) -> impl 'a+Future<Output=()>+Send {
    async move {
        use self::KeyFrameToolOutput::*;

        let layer = state.scene().selected_object()
            .and_then(|object| object.active_layer())
            .cloned();

        match layer {
            None        => { output.publish(Warning("No active layer is selected".to_string())).await; }
            Some(layer) => {
                let frames = layer.frames();

                if frames.is_empty() {
                    output.publish(Message(format!("Layer ({:02}) has no keyframes", layer.id()))).await;
                } else {
                    output.publish(Message(format!("Keyframes in layer ({:02}): {}", layer.id(), frames.iter().join(", ")))).await;
                }
            }
        }
    }
}
