use super::error::*;
use super::traits::*;

use std::fmt;

///
/// A playhead position expressed as whole seconds plus the frames into the following second
///
/// Displays as `SS:FF`.
///
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TimeReadout {
    /// Whole seconds since the start of the timeline
    pub seconds: i64,

    /// Frames since the start of the current second
    pub frames: i64
}

impl TimeReadout {
    ///
    /// Computes the readout for a frame at a particular frame rate
    ///
    pub fn for_frame(frame: i64, frame_rate: u32) -> Result<TimeReadout, KeyFrameError> {
        if frame_rate == 0 {
            return Err(ConfigurationProblem::ZeroFrameRate.into());
        }

        // Floor division, so frames before the start still have a remainder in 0..frame_rate
        let frame_rate = frame_rate as i64;

        Ok(TimeReadout {
            seconds:    frame.div_euclid(frame_rate),
            frames:     frame.rem_euclid(frame_rate)
        })
    }

    ///
    /// The text shown next to the keyframe buttons in the timeline
    ///
    pub fn label(&self) -> String {
        format!("Time: {}", self)
    }
}

impl fmt::Display for TimeReadout {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.seconds, self.frames)
    }
}

///
/// Formats a frame as `SS:FF` for the specified frame rate
///
pub fn format_time_readout(frame: i64, frame_rate: u32) -> Result<String, KeyFrameError> {
    Ok(TimeReadout::for_frame(frame, frame_rate)?.to_string())
}

///
/// Reads the current position of the playhead
///
pub fn playhead_time_readout<Playhead: ?Sized+PlayheadProvider>(playhead: &Playhead) -> Result<TimeReadout, KeyFrameError> {
    TimeReadout::for_frame(playhead.current_frame(), playhead.frame_rate())
}
