use crate::*;
use crate::inmemory::*;

mod time_readout;
mod commands;
mod settings;

///
/// Creates a scene where the selected drawing's active layer has keyframes at the specified frames
///
pub fn scene_with_frames(frames: Vec<i64>) -> InMemoryScene {
    let mut drawing = InMemoryObject::drawing("Drawing");
    drawing.layers.push(InMemoryLayer::with_frames(0, Some("Layer 1".to_string()), frames));
    drawing.active_layer = Some(0);

    let mut scene = InMemoryScene::empty();
    scene.add_object(drawing);

    scene
}

///
/// The frames in the active layer of a scene
///
pub fn active_frames(scene: &InMemoryScene) -> Vec<i64> {
    scene.selected_object()
        .and_then(|object| object.active_layer())
        .map(|layer| layer.frames())
        .unwrap_or_else(|| vec![])
}
