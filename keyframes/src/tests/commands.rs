use super::*;
use crate::commands::*;

#[test]
fn add_5_from_playhead() {
    let mut scene = scene_with_frames(vec![]);
    scene.set_current_frame(10);

    let status = AddFixed5.execute(&mut scene).unwrap();

    assert!(active_frames(&scene) == vec![10, 12, 14, 16, 18]);
    assert!(scene.current_frame() == 20);
    assert!(status.level == StatusLevel::Info);
    assert!(status.message == "Blank keyframes added at frames: [10, 12, 14, 16, 18]");
}

#[test]
fn add_10_from_playhead() {
    let mut scene = scene_with_frames(vec![1]);
    scene.set_current_frame(20);

    AddFixed10.execute(&mut scene).unwrap();

    let mut expected = vec![1];
    expected.extend(20..30);

    assert!(active_frames(&scene) == expected);
    assert!(scene.current_frame() == 30);
}

#[test]
fn fixed_commands_ignore_scene_settings() {
    let mut scene = scene_with_frames(vec![50]);
    scene.set_current_frame(1);
    scene.set_keyframe_settings(KeyFrameSettings { frame_count: 2, spacing: 7, start_from_playhead: false });

    AddFixed5.execute(&mut scene).unwrap();

    assert!(active_frames(&scene) == vec![1, 3, 5, 7, 9, 50]);
    assert!(scene.current_frame() == 11);
}

#[test]
fn repeated_commands_chain_without_overlap() {
    let mut scene = scene_with_frames(vec![]);
    scene.set_current_frame(1);

    AddFixed5.execute(&mut scene).unwrap();
    AddFixed5.execute(&mut scene).unwrap();

    assert!(active_frames(&scene) == vec![1, 3, 5, 7, 9, 11, 13, 15, 17, 19]);
    assert!(scene.current_frame() == 21);
}

#[test]
fn playhead_at_zero_starts_at_frame_1() {
    let mut scene = scene_with_frames(vec![]);
    scene.set_current_frame(0);

    AddFixed10.execute(&mut scene).unwrap();

    assert!(active_frames(&scene) == (1..11).collect::<Vec<i64>>());
    assert!(scene.current_frame() == 11);
}

#[test]
fn add_custom_uses_settings() {
    let mut scene = scene_with_frames(vec![1, 5, 9]);
    scene.set_current_frame(2);
    scene.set_keyframe_settings(KeyFrameSettings { frame_count: 3, spacing: 2, start_from_playhead: false });

    let status = AddCustom.execute(&mut scene).unwrap();

    assert!(active_frames(&scene) == vec![1, 5, 9, 11, 13, 15]);
    assert!(scene.current_frame() == 17);
    assert!(status.message == "Blank keyframes added at frames: [11, 13, 15]");
}

#[test]
fn add_custom_defaults_on_empty_layer() {
    let mut scene = scene_with_frames(vec![]);
    scene.set_current_frame(30);

    AddCustom.execute(&mut scene).unwrap();

    assert!(active_frames(&scene) == vec![1, 3, 5, 7, 9]);
    assert!(scene.current_frame() == 11);
}

#[test]
fn add_custom_from_playhead() {
    let mut scene = scene_with_frames(vec![1]);
    scene.set_current_frame(8);
    scene.set_keyframe_settings(KeyFrameSettings { frame_count: 2, spacing: 4, start_from_playhead: true });

    AddCustom.execute(&mut scene).unwrap();

    assert!(active_frames(&scene) == vec![1, 8, 12]);
    assert!(scene.current_frame() == 16);
}

#[test]
fn skipped_frames_are_reported() {
    let mut scene = scene_with_frames(vec![3, 7]);
    scene.set_current_frame(1);

    let status = AddFixed5.execute(&mut scene).unwrap();

    assert!(active_frames(&scene) == vec![1, 3, 5, 7, 9]);
    assert!(status.message == "Blank keyframes added at frames: [1, 5, 9] (frames [3, 7] already exist)");
}

#[test]
fn nothing_new_is_reported() {
    let mut scene = scene_with_frames((1..11).collect());
    scene.set_current_frame(1);

    let status = AddFixed10.execute(&mut scene).unwrap();

    assert!(status.message == "No blank keyframes added: frames [1, 2, 3, 4, 5, 6, 7, 8, 9, 10] already exist");
    assert!(scene.current_frame() == 11);
}

#[test]
fn no_active_object_is_not_applicable() {
    let mut scene = scene_with_frames(vec![4]);
    scene.select_object(None);
    scene.set_current_frame(6);

    for command in all_commands() {
        let result = command.execute(&mut scene);

        assert!(result == Err(KeyFrameError::NotApplicable(NotApplicableReason::NoActiveObject)));
        assert!(result.unwrap_err().status_level() == StatusLevel::Warning);
    }

    assert!(scene.current_frame() == 6);
}

#[test]
fn incompatible_object_is_not_applicable() {
    let mut scene = scene_with_frames(vec![4]);
    scene.add_object(InMemoryObject::other("Cube", "mesh"));
    scene.set_current_frame(6);

    let result = AddFixed5.execute(&mut scene);

    assert!(result == Err(KeyFrameError::NotApplicable(NotApplicableReason::IncompatibleObject("mesh".to_string()))));
    assert!(scene.current_frame() == 6);
}

#[test]
fn no_active_layer_is_not_applicable() {
    let mut scene = scene_with_frames(vec![4]);
    scene.selected_object_mut().unwrap().active_layer = None;
    scene.set_current_frame(6);

    let result = AddCustom.execute(&mut scene);

    assert!(result == Err(KeyFrameError::NotApplicable(NotApplicableReason::NoActiveLayer)));
    assert!(scene.current_frame() == 6);
    assert!(scene.selected_object().unwrap().layers[0].frames() == vec![4]);
}

#[test]
fn zero_spacing_is_a_configuration_error() {
    let mut scene = scene_with_frames(vec![4]);
    scene.set_current_frame(6);
    scene.set_keyframe_settings(KeyFrameSettings { frame_count: 3, spacing: 0, start_from_playhead: true });

    let result = AddCustom.execute(&mut scene);

    assert!(result == Err(KeyFrameError::ConfigurationError(ConfigurationProblem::ZeroSpacing)));
    assert!(result.unwrap_err().status_level() == StatusLevel::Error);
    assert!(active_frames(&scene) == vec![4]);
    assert!(scene.current_frame() == 6);
}

#[test]
fn error_becomes_status_message() {
    let error   = KeyFrameError::NotApplicable(NotApplicableReason::NoActiveLayer);
    let status  = StatusMessage::from(&error);

    assert!(status.level == StatusLevel::Warning);
    assert!(status.message == "No active drawing layer selected.");
}

#[test]
fn configuration_error_becomes_error_status() {
    let error   = KeyFrameError::ConfigurationError(ConfigurationProblem::FrameOutOfRange);
    let status  = StatusMessage::from(&error);

    assert!(status.level == StatusLevel::Error);
    assert!(status.message == "The keyframes would be placed past the last frame the timeline can hold.");
}

#[test]
fn add_5_near_end_of_timeline_changes_nothing() {
    let mut scene = scene_with_frames(vec![2]);
    scene.set_current_frame(i64::MAX - 3);

    let result = AddFixed5.execute(&mut scene);

    assert!(result.err() == Some(KeyFrameError::ConfigurationError(ConfigurationProblem::FrameOutOfRange)));
    assert!(active_frames(&scene) == vec![2]);
    assert!(scene.current_frame() == i64::MAX - 3);
}

#[test]
fn find_commands_by_id() {
    assert!(command_with_id("keyframes.add_5").map(|command| command.label()) == Some("+5"));
    assert!(command_with_id("keyframes.add_10").map(|command| command.label()) == Some("+10"));
    assert!(command_with_id("keyframes.add_custom").map(|command| command.label()) == Some("Add Keyframes"));
    assert!(command_with_id("keyframes.add_6").is_none());
}

#[test]
fn command_ids_are_unique() {
    let commands    = all_commands();
    let mut ids     = commands.iter().map(|command| command.id()).collect::<Vec<_>>();

    ids.sort();
    ids.dedup();

    assert!(ids.len() == commands.len());
}
