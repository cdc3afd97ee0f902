use crate::traits::*;

use std::collections::BTreeSet;

///
/// A layer that stores the frame numbers of its keyframes in memory
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct InMemoryLayer {
    /// The ID of this layer
    id: u64,

    /// The name of this layer
    #[serde(default)]
    name: Option<String>,

    /// The frames that have keyframes in this layer
    #[serde(default)]
    frames: BTreeSet<i64>
}

impl InMemoryLayer {
    ///
    /// Creates a new layer with no keyframes
    ///
    pub fn new(id: u64, name: Option<String>) -> InMemoryLayer {
        InMemoryLayer {
            id:     id,
            name:   name,
            frames: BTreeSet::new()
        }
    }

    ///
    /// Creates a layer with keyframes at the specified frame numbers
    ///
    pub fn with_frames<Frames: IntoIterator<Item=i64>>(id: u64, name: Option<String>, frames: Frames) -> InMemoryLayer {
        InMemoryLayer {
            id:     id,
            name:   name,
            frames: frames.into_iter().collect()
        }
    }

    ///
    /// The frame numbers of the keyframes in this layer
    ///
    pub fn frames(&self) -> Vec<i64> {
        self.frames.iter().cloned().collect()
    }
}

impl KeyFrameLayer for InMemoryLayer {
    fn id(&self) -> u64 {
        self.id
    }

    fn name(&self) -> Option<String> {
        self.name.clone()
    }

    fn get_key_frames<'a>(&'a self) -> Box<dyn 'a+Iterator<Item=i64>> {
        Box::new(self.frames.iter().cloned())
    }

    fn has_key_frame(&self, frame_number: i64) -> bool {
        self.frames.contains(&frame_number)
    }

    fn add_key_frame(&mut self, frame_number: i64) {
        self.frames.insert(frame_number);
    }
}
