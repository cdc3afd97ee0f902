use super::status::*;
use crate::error::*;
use crate::traits::*;

///
/// A command that the user can invoke from the host to add keyframes
///
pub trait KeyFrameCommand : Send+Sync {
    ///
    /// The identifier the host uses to look up this command
    ///
    fn id(&self) -> &'static str;

    ///
    /// The text shown on the button for this command
    ///
    fn label(&self) -> &'static str;

    ///
    /// A description of what this command does (used as a tooltip)
    ///
    fn description(&self) -> &'static str;

    ///
    /// Runs this command against the host
    ///
    fn execute(&self, context: &mut dyn KeyFrameContext) -> Result<StatusMessage, KeyFrameError>;
}
