use super::command::*;
use super::add_fixed::*;
use super::add_custom::*;

///
/// Every keyframe command, in the order they're shown to the user
///
pub fn all_commands() -> Vec<Box<dyn KeyFrameCommand>> {
    let commands: Vec<Box<dyn KeyFrameCommand>> = vec![
        Box::new(AddFixed5),
        Box::new(AddFixed10),
        Box::new(AddCustom)
    ];

    commands
}

///
/// Finds the keyframe command with the specified ID
///
pub fn command_with_id(id: &str) -> Option<Box<dyn KeyFrameCommand>> {
    all_commands().into_iter()
        .find(|command| command.id() == id)
}
