use super::place::*;
use super::status::*;
use super::command::*;
use crate::error::*;
use crate::traits::*;

///
/// Adds 5 blank keyframes, 2 frames apart, starting at the playhead
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct AddFixed5;

///
/// Adds 10 blank keyframes, 1 frame apart, starting at the playhead
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct AddFixed10;

impl AddFixed5 {
    pub const FRAME_COUNT: u32  = 5;
    pub const SPACING: u32      = 2;
}

impl AddFixed10 {
    pub const FRAME_COUNT: u32  = 10;
    pub const SPACING: u32      = 1;
}

impl KeyFrameCommand for AddFixed5 {
    fn id(&self) -> &'static str            { "keyframes.add_5" }
    fn label(&self) -> &'static str         { "+5" }
    fn description(&self) -> &'static str  { "Adds 5 blank keyframes spaced by 2 frames" }

    fn execute(&self, context: &mut dyn KeyFrameContext) -> Result<StatusMessage, KeyFrameError> {
        log_failure(self.id(), place_on_active_layer(context, Self::FRAME_COUNT, Self::SPACING, true))
    }
}

impl KeyFrameCommand for AddFixed10 {
    fn id(&self) -> &'static str            { "keyframes.add_10" }
    fn label(&self) -> &'static str         { "+10" }
    fn description(&self) -> &'static str  { "Adds 10 blank keyframes spaced by 1 frame" }

    fn execute(&self, context: &mut dyn KeyFrameContext) -> Result<StatusMessage, KeyFrameError> {
        log_failure(self.id(), place_on_active_layer(context, Self::FRAME_COUNT, Self::SPACING, true))
    }
}
