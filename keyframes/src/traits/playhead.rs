///
/// Provides access to the playhead of the active timeline
///
pub trait PlayheadProvider {
    ///
    /// The frame the playhead is currently on
    ///
    fn current_frame(&self) -> i64;

    ///
    /// Moves the playhead to a new frame
    ///
    fn set_current_frame(&mut self, frame: i64);

    ///
    /// The number of frames per second in the timeline
    ///
    fn frame_rate(&self) -> u32;
}
