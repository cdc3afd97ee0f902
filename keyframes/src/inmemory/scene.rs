use super::object::*;
use crate::traits::*;
use crate::settings::*;

///
/// A scene held in memory: a set of objects, a timeline and the keyframe settings
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct InMemoryScene {
    /// The objects in this scene
    #[serde(default)]
    pub objects: Vec<InMemoryObject>,

    /// The name of the selected object
    #[serde(default)]
    pub active_object: Option<String>,

    /// The frame the playhead is on
    #[serde(default)]
    pub current_frame: i64,

    /// The frame rate of the timeline
    #[serde(default = "default_frame_rate")]
    pub frame_rate: u32,

    /// The settings for the 'Add Keyframes' command
    #[serde(default)]
    pub settings: KeyFrameSettings
}

fn default_frame_rate() -> u32 { InMemoryScene::DEFAULT_FRAME_RATE }

impl Default for InMemoryScene {
    fn default() -> InMemoryScene {
        InMemoryScene::new()
    }
}

impl InMemoryScene {
    /// The frame rate of a new scene
    pub const DEFAULT_FRAME_RATE: u32 = 24;

    ///
    /// Creates a new scene containing a single drawing with a single layer, which is selected
    ///
    pub fn new() -> InMemoryScene {
        let mut drawing = InMemoryObject::drawing("Drawing");
        drawing.add_layer(Some("Layer 1".to_string()));

        InMemoryScene {
            objects:        vec![drawing],
            active_object:  Some("Drawing".to_string()),
            current_frame:  1,
            frame_rate:     Self::DEFAULT_FRAME_RATE,
            settings:       KeyFrameSettings::default()
        }
    }

    ///
    /// Creates a scene with no objects in it
    ///
    pub fn empty() -> InMemoryScene {
        InMemoryScene {
            objects:        vec![],
            active_object:  None,
            current_frame:  1,
            frame_rate:     Self::DEFAULT_FRAME_RATE,
            settings:       KeyFrameSettings::default()
        }
    }

    ///
    /// Adds an object to the scene and selects it
    ///
    pub fn add_object(&mut self, object: InMemoryObject) {
        self.active_object = Some(object.name.clone());
        self.objects.retain(|existing| existing.name != object.name);
        self.objects.push(object);
    }

    ///
    /// Retrieves the object with the specified name
    ///
    pub fn object(&self, name: &str) -> Option<&InMemoryObject> {
        self.objects.iter().find(|object| object.name == name)
    }

    ///
    /// Selects the object with the specified name (or clears the selection if the name is None).
    /// Returns false if there's no object with that name.
    ///
    pub fn select_object(&mut self, name: Option<&str>) -> bool {
        match name {
            None        => { self.active_object = None; true }
            Some(name)  => {
                if self.object(name).is_some() {
                    self.active_object = Some(name.to_string());
                    true
                } else {
                    false
                }
            }
        }
    }

    ///
    /// The selected object
    ///
    pub fn selected_object(&self) -> Option<&InMemoryObject> {
        let name = self.active_object.as_ref()?;
        self.object(name)
    }

    ///
    /// The selected object, for editing
    ///
    pub fn selected_object_mut(&mut self) -> Option<&mut InMemoryObject> {
        let name = self.active_object.clone()?;
        self.objects.iter_mut().find(|object| object.name == name)
    }
}

impl ActiveObjectProvider for InMemoryScene {
    fn active_object(&self) -> Option<ActiveObject> {
        self.selected_object()
            .map(|object| ActiveObject { name: object.name.clone(), kind: object.kind.clone() })
    }

    fn active_layer_mut(&mut self) -> Option<&mut dyn KeyFrameLayer> {
        let object = self.selected_object_mut()?;
        if !object.kind.has_frame_layers() { return None; }

        object.active_layer_mut().map(|layer| layer as &mut dyn KeyFrameLayer)
    }
}

impl PlayheadProvider for InMemoryScene {
    fn current_frame(&self) -> i64 {
        self.current_frame
    }

    fn set_current_frame(&mut self, frame: i64) {
        self.current_frame = frame;
    }

    fn frame_rate(&self) -> u32 {
        self.frame_rate
    }
}

impl SceneConfigStore for InMemoryScene {
    fn keyframe_settings(&self) -> KeyFrameSettings {
        self.settings
    }

    fn set_keyframe_settings(&mut self, settings: KeyFrameSettings) {
        self.settings = settings;
    }
}
