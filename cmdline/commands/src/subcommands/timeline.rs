use crate::state::*;
use crate::output::*;

use flo_stream::*;
use flo_keyframes::*;

use futures::prelude::*;

///
/// Moves the playhead
///
pub fn set_playhead(frame: i64, state: &mut CommandState) {
    state.scene_mut().set_current_frame(frame);
}

///
/// Changes the frame rate of the timeline
///
pub fn set_frame_rate(frame_rate: u32, state: &mut CommandState) {
    state.scene_mut().frame_rate = frame_rate;
}

///
/// Updates the keyframe settings stored in the scene
///
pub fn update_settings<UpdateFn: FnOnce(&mut KeyFrameSettings)>(state: &mut CommandState, update: UpdateFn) {
    let scene           = state.scene_mut();
    let mut settings    = scene.keyframe_settings();

    update(&mut settings);
    scene.set_keyframe_settings(settings);
}

///
/// Writes out the position of the playhead as seconds and frames
///
pub fn show_time<'a>(output: &'a mut Publisher<KeyFrameToolOutput>, state: &'a mut CommandState) -> impl 'a+Future<Output=()>+Send {
    async move {
        use self::KeyFrameToolOutput::*;

        match playhead_time_readout(state.scene()) {
            Ok(readout) => { output.publish(Message(readout.label())).await; }
            Err(err)    => { output.publish(Error(err.to_string())).await; }
        }
    }
}
