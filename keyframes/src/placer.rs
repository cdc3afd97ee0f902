//!
//! The frame placer works out where a run of blank keyframes should go and adds the
//! ones that are missing from a layer.
//!

use super::error::*;
use super::traits::*;

///
/// A request to place `count` keyframes, `spacing` frames apart, starting at `start_frame`
///
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PlacementRequest {
    /// The frame number of the first keyframe (always at least 1)
    pub start_frame: i64,

    /// The number of keyframes to place (always at least 1)
    pub count: u32,

    /// The distance between each keyframe (always at least 1)
    pub spacing: u32
}

///
/// The outcome of applying a set of target frames to a layer
///
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct AppliedResult {
    /// The frame numbers that were requested, in order
    pub requested: Vec<i64>,

    /// The frame numbers that were actually inserted, in order
    pub inserted: Vec<i64>
}

impl PlacementRequest {
    ///
    /// Creates a new placement request, clamping the start frame so that it's at least 1
    ///
    pub fn new(start_frame: i64, count: u32, spacing: u32) -> Result<PlacementRequest, KeyFrameError> {
        if count < 1 { return Err(ConfigurationProblem::ZeroFrameCount.into()); }
        if spacing < 1 { return Err(ConfigurationProblem::ZeroSpacing.into()); }

        let start_frame = start_frame.max(1);
        if frame_after(start_frame, count, spacing).is_none() { return Err(ConfigurationProblem::FrameOutOfRange.into()); }

        Ok(PlacementRequest {
            start_frame:    start_frame,
            count:          count,
            spacing:        spacing
        })
    }

    ///
    /// The frame numbers this request will place keyframes at
    ///
    pub fn targets(&self) -> Vec<i64> {
        compute_targets(self.start_frame, self.count, self.spacing)
    }

    ///
    /// The frame the playhead should move to after this request has been applied (one spacing after the last keyframe)
    ///
    pub fn next_frame(&self) -> i64 {
        frame_after(self.start_frame, self.count, self.spacing).unwrap_or(i64::MAX)
    }
}

///
/// The frame `count` spacings after `start_frame`, or None if that can't be represented
///
fn frame_after(start_frame: i64, count: u32, spacing: u32) -> Option<i64> {
    (count as i64).checked_mul(spacing as i64)
        .and_then(|length| start_frame.checked_add(length))
}

impl AppliedResult {
    ///
    /// The requested frames that were skipped because the layer already had a keyframe there
    ///
    pub fn skipped(&self) -> Vec<i64> {
        let mut skipped     = vec![];
        let mut inserted    = self.inserted.iter().peekable();

        // Inserted is an ordered subsequence of requested, and a frame appears in it at most once
        for frame in self.requested.iter() {
            if inserted.peek() == Some(&frame) {
                inserted.next();
            } else {
                skipped.push(*frame);
            }
        }

        skipped
    }
}

///
/// Works out the frame number where a run of keyframes should begin
///
/// When starting from the playhead, this is the playhead position. Otherwise it's one
/// spacing after the last existing keyframe, or frame 1 for an empty layer. The result
/// is never less than 1.
///
pub fn compute_start_frame<ExistingFrames>(existing_frame_numbers: ExistingFrames, current_playhead_frame: i64, spacing: u32, start_from_playhead: bool) -> i64
where ExistingFrames: IntoIterator<Item=i64> {
    let start_frame = if start_from_playhead {
        current_playhead_frame
    } else {
        existing_frame_numbers.into_iter()
            .max()
            .map(|last_frame| last_frame.saturating_add(spacing as i64))
            .unwrap_or(1)
    };

    start_frame.max(1)
}

///
/// Generates the frame numbers for `count` keyframes, `spacing` frames apart, beginning at `start_frame`
///
/// Frames past `i64::MAX` are not generated: `PlacementRequest::new` rejects requests that would need them.
///
pub fn compute_targets(start_frame: i64, count: u32, spacing: u32) -> Vec<i64> {
    debug_assert!(spacing >= 1);

    (0..(count as i64))
        .map_while(|index| index.checked_mul(spacing as i64).and_then(|offset| start_frame.checked_add(offset)))
        .collect()
}

///
/// Adds a blank keyframe to the layer for every target that isn't already there
///
/// Targets that already have a keyframe are left alone, so applying the same targets
/// twice only changes the layer the first time.
///
pub fn apply_targets(layer: &mut dyn KeyFrameLayer, targets: &[i64]) -> AppliedResult {
    let mut inserted = vec![];

    for frame_number in targets.iter().cloned() {
        if !layer.has_key_frame(frame_number) {
            layer.add_key_frame(frame_number);
            inserted.push(frame_number);
        }
    }

    AppliedResult {
        requested:  targets.to_vec(),
        inserted:   inserted
    }
}

///
/// Adds `count` blank keyframes, `spacing` frames apart, to a layer
///
/// Returns the placement that was used along with the frames that were added.
///
pub fn add_keyframes(layer: &mut dyn KeyFrameLayer, current_playhead_frame: i64, count: u32, spacing: u32, start_from_playhead: bool) -> Result<(PlacementRequest, AppliedResult), KeyFrameError> {
    let start_frame = compute_start_frame(layer.get_key_frames(), current_playhead_frame, spacing, start_from_playhead);
    let request     = PlacementRequest::new(start_frame, count, spacing)?;
    let targets     = request.targets();

    debug!("Placing keyframes on layer {} at {:?}", layer.id(), targets);

    let applied     = apply_targets(layer, &targets);

    if !applied.inserted.is_empty() {
        info!("Added {} blank keyframes to layer {}", applied.inserted.len(), layer.id());
    }

    Ok((request, applied))
}
