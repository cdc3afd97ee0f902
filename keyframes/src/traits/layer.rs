///
/// A layer is an ordered set of keyframes belonging to a drawable object
///
/// Keyframes are identified by their frame number: a layer never contains two keyframes
/// with the same number.
///
pub trait KeyFrameLayer {
    ///
    /// The ID of this layer
    ///
    fn id(&self) -> u64;

    ///
    /// The name of this layer, if it has one
    ///
    fn name(&self) -> Option<String>;

    ///
    /// Retrieves the frame numbers of the keyframes in this layer, in ascending order
    ///
    fn get_key_frames<'a>(&'a self) -> Box<dyn 'a+Iterator<Item=i64>>;

    ///
    /// Returns true if there is a keyframe at the specified frame number
    ///
    fn has_key_frame(&self, frame_number: i64) -> bool {
        self.get_key_frames().any(|existing| existing == frame_number)
    }

    ///
    /// Adds a new blank keyframe at the specified frame number
    ///
    /// Callers check `has_key_frame` first: what happens when a frame already exists is up
    /// to the host.
    ///
    fn add_key_frame(&mut self, frame_number: i64);
}
