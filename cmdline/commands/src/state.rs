use flo_keyframes::inmemory::*;

use std::sync::*;

///
/// Represents the state of a command stream
///
#[derive(Clone)]
pub struct CommandState(Arc<StateValue>);

///
/// The internal value of a command state
///
#[derive(Clone)]
struct StateValue {
    /// The scene being edited
    scene: InMemoryScene
}

impl CommandState {
    ///
    /// Creates a new command state editing a new scene
    ///
    pub fn new() -> CommandState {
        Self::with_scene(InMemoryScene::new())
    }

    ///
    /// Creates a new command state editing the specified scene
    ///
    pub fn with_scene(scene: InMemoryScene) -> CommandState {
        CommandState(Arc::new(StateValue {
            scene: scene
        }))
    }

    ///
    /// The scene being edited
    ///
    pub fn scene(&self) -> &InMemoryScene {
        &self.0.scene
    }

    ///
    /// Retrieves the scene for editing (other copies of this state are unaffected)
    ///
    pub fn scene_mut(&mut self) -> &mut InMemoryScene {
        &mut Arc::make_mut(&mut self.0).scene
    }

    ///
    /// Returns a new state that edits a different scene
    ///
    pub fn set_scene(&self, scene: InMemoryScene) -> CommandState {
        let mut value   = (*self.0).clone();
        value.scene     = scene;

        CommandState(Arc::new(value))
    }
}
