use super::status::*;
use crate::error::*;
use crate::placer::*;
use crate::traits::*;

use itertools::*;

///
/// Formats a list of frame numbers for a status message
///
fn frame_list(frames: &[i64]) -> String {
    format!("[{}]", frames.iter().join(", "))
}

///
/// Generates the message describing what happened when keyframes were applied to a layer
///
pub (super) fn applied_message(applied: &AppliedResult) -> String {
    let skipped = applied.skipped();

    if skipped.is_empty() {
        format!("Blank keyframes added at frames: {}", frame_list(&applied.inserted))
    } else if applied.inserted.is_empty() {
        format!("No blank keyframes added: frames {} already exist", frame_list(&skipped))
    } else {
        format!("Blank keyframes added at frames: {} (frames {} already exist)", frame_list(&applied.inserted), frame_list(&skipped))
    }
}

///
/// Adds keyframes to the active layer of the selected drawing, then moves the playhead to
/// one spacing after the last keyframe
///
/// Nothing is changed if the selection can't receive keyframes.
///
pub (super) fn place_on_active_layer(context: &mut dyn KeyFrameContext, count: u32, spacing: u32, start_from_playhead: bool) -> Result<StatusMessage, KeyFrameError> {
    // The selection must be a drawing
    let object = context.active_object().ok_or(NotApplicableReason::NoActiveObject)?;
    if !object.kind.has_frame_layers() {
        return Err(NotApplicableReason::IncompatibleObject(object.kind.to_string()).into());
    }

    // Place the keyframes on its active layer
    let current_frame           = context.current_frame();
    let (request, applied)      = {
        let layer = context.active_layer_mut().ok_or(NotApplicableReason::NoActiveLayer)?;
        add_keyframes(layer, current_frame, count, spacing, start_from_playhead)?
    };

    // Move the playhead past the new keyframes so that the next command carries on from there
    let next_frame = request.next_frame();
    info!("Moving playhead from frame {} to frame {}", current_frame, next_frame);
    context.set_current_frame(next_frame);

    Ok(StatusMessage::info(applied_message(&applied)))
}

///
/// Logs a command that couldn't be run
///
pub (super) fn log_failure(command_id: &str, result: Result<StatusMessage, KeyFrameError>) -> Result<StatusMessage, KeyFrameError> {
    if let Err(ref err) = result {
        warn!("{}: {}", command_id, err);
    }

    result
}
