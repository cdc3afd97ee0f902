use super::layer::*;

use std::fmt;

///
/// The kinds of object that can be selected in the host
///
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum ObjectKind {
    /// A drawing made up of layers of frames (the only kind that can receive blank keyframes)
    Drawing,

    /// Any other kind of object (meshes, cameras, lights...), described by the host's name for it
    Other(String)
}

///
/// Describes the object that is currently selected in the host
///
#[derive(Clone, PartialEq, Debug)]
pub struct ActiveObject {
    /// The name of the object
    pub name: String,

    /// What kind of object this is
    pub kind: ObjectKind
}

impl ObjectKind {
    ///
    /// True if keyframes can be added to objects of this kind
    ///
    pub fn has_frame_layers(&self) -> bool {
        match self {
            ObjectKind::Drawing     => true,
            ObjectKind::Other(_)    => false
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ObjectKind::Drawing         => write!(f, "drawing"),
            ObjectKind::Other(kind)     => write!(f, "{}", kind)
        }
    }
}

///
/// Provides access to the object that is selected in the host and its active layer
///
pub trait ActiveObjectProvider {
    ///
    /// The currently selected object, or None if nothing is selected
    ///
    fn active_object(&self) -> Option<ActiveObject>;

    ///
    /// The active animation layer of the selected object, if it has one
    ///
    fn active_layer_mut(&mut self) -> Option<&mut dyn KeyFrameLayer>;
}
