use super::layer::*;
use crate::traits::*;

///
/// An object in an in-memory scene
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct InMemoryObject {
    /// The name of this object (unique within a scene)
    pub name: String,

    /// What kind of object this is
    pub kind: ObjectKind,

    /// The animation layers belonging to this object
    #[serde(default)]
    pub layers: Vec<InMemoryLayer>,

    /// The ID of the layer that keyframes are added to
    #[serde(default)]
    pub active_layer: Option<u64>
}

impl InMemoryObject {
    ///
    /// Creates a drawing with no layers
    ///
    pub fn drawing(name: &str) -> InMemoryObject {
        InMemoryObject {
            name:           name.to_string(),
            kind:           ObjectKind::Drawing,
            layers:         vec![],
            active_layer:   None
        }
    }

    ///
    /// Creates an object that isn't a drawing (and so can't have keyframes added to it)
    ///
    pub fn other(name: &str, kind: &str) -> InMemoryObject {
        InMemoryObject {
            name:           name.to_string(),
            kind:           ObjectKind::Other(kind.to_string()),
            layers:         vec![],
            active_layer:   None
        }
    }

    ///
    /// Adds a new empty layer to this object and makes it the active layer, returning its ID
    ///
    pub fn add_layer(&mut self, name: Option<String>) -> u64 {
        let new_id = self.layers.iter().map(|layer| layer.id() + 1).max().unwrap_or(0);

        self.layers.push(InMemoryLayer::new(new_id, name));
        self.active_layer = Some(new_id);

        new_id
    }

    ///
    /// Retrieves the layer with the specified ID
    ///
    pub fn layer(&self, layer_id: u64) -> Option<&InMemoryLayer> {
        self.layers.iter().find(|layer| layer.id() == layer_id)
    }

    ///
    /// Retrieves the active layer, if there is one
    ///
    pub fn active_layer(&self) -> Option<&InMemoryLayer> {
        self.active_layer.and_then(|layer_id| self.layer(layer_id))
    }

    ///
    /// Retrieves the active layer for editing
    ///
    pub fn active_layer_mut(&mut self) -> Option<&mut InMemoryLayer> {
        let active_layer = self.active_layer?;
        self.layers.iter_mut().find(|layer| layer.id() == active_layer)
    }

    ///
    /// Makes the layer with the specified ID the active layer. Returns false if there's no such layer.
    ///
    pub fn select_layer(&mut self, layer_id: u64) -> bool {
        if self.layer(layer_id).is_some() {
            self.active_layer = Some(layer_id);
            true
        } else {
            false
        }
    }
}
