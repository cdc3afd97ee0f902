use super::place::*;
use super::status::*;
use super::command::*;
use crate::error::*;
use crate::traits::*;

///
/// Adds blank keyframes using the count, spacing and start position from the scene settings
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct AddCustom;

impl KeyFrameCommand for AddCustom {
    fn id(&self) -> &'static str            { "keyframes.add_custom" }
    fn label(&self) -> &'static str         { "Add Keyframes" }
    fn description(&self) -> &'static str  { "Adds blank keyframes based on the number and spacing defined in the scene settings" }

    fn execute(&self, context: &mut dyn KeyFrameContext) -> Result<StatusMessage, KeyFrameError> {
        let settings    = context.keyframe_settings();
        let result      = settings.validate()
            .and_then(|_| place_on_active_layer(context, settings.frame_count, settings.spacing, settings.start_from_playhead));

        log_failure(self.id(), result)
    }
}
