///
/// Command that can be issued to the keyframe tools
///
#[derive(Clone, PartialEq, Debug)]
pub enum KeyFrameToolCommand {
    /// Write out a message describing the version of the keyframe tools that this is
    Version,

    /// Lists the keyframe commands that can be run
    ListCommands,

    /// Sends the current state to the output
    ReadState,

    /// Writes the scene as JSON to the output
    DumpScene,

    /// Replaces the scene with one loaded from a JSON file
    LoadScene(String),

    /// Writes the scene as JSON to a file
    SaveScene(String),

    /// Adds a new drawing with a single layer and selects it
    NewDrawing(String),

    /// Selects the object with the specified name
    SelectObject(String),

    /// Adds a new layer to the selected object and makes it the active layer
    AddLayer(String),

    /// Makes the layer with the specified ID the active layer of the selected object
    SelectLayer(u64),

    /// Moves the playhead to the specified frame
    SetPlayhead(i64),

    /// Sets the number of frames per second in the timeline
    SetFrameRate(u32),

    /// Sets the number of keyframes the 'add custom' command will add
    SetFrameCount(u32),

    /// Sets the spacing used by the 'add custom' command
    SetSpacing(u32),

    /// Sets whether or not the 'add custom' command starts at the playhead
    SetStartFromPlayhead(bool),

    /// Runs the keyframe command with the specified ID
    Run(String),

    /// Writes out the position of the playhead in seconds and frames
    ShowTime,

    /// Lists the layers of the selected object
    ListLayers,

    /// Lists the keyframes in the active layer
    ListKeyFrames
}
