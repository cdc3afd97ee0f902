use crate::*;
use crate::inmemory::*;

#[test]
fn frame_125_at_24_fps() {
    let readout = TimeReadout::for_frame(125, 24).unwrap();

    assert!(readout.seconds == 5);
    assert!(readout.frames == 5);
    assert!(readout.to_string() == "05:05");
}

#[test]
fn frame_0() {
    assert!(format_time_readout(0, 24).unwrap() == "00:00");
}

#[test]
fn exact_second() {
    assert!(format_time_readout(48, 24).unwrap() == "02:00");
}

#[test]
fn does_not_round_up() {
    assert!(format_time_readout(23, 24).unwrap() == "00:23");
}

#[test]
fn more_than_99_seconds_is_not_truncated() {
    assert!(format_time_readout(24 * 125 + 3, 24).unwrap() == "125:03");
}

#[test]
fn negative_frames_use_floor_division() {
    let readout = TimeReadout::for_frame(-1, 24).unwrap();

    assert!(readout.seconds == -1);
    assert!(readout.frames == 23);
}

#[test]
fn zero_frame_rate_is_a_configuration_error() {
    assert!(TimeReadout::for_frame(125, 0) == Err(KeyFrameError::ConfigurationError(ConfigurationProblem::ZeroFrameRate)));
}

#[test]
fn label_text() {
    assert!(TimeReadout::for_frame(30, 25).unwrap().label() == "Time: 01:05");
}

#[test]
fn read_from_playhead() {
    let mut scene = InMemoryScene::new();
    scene.set_current_frame(125);

    assert!(playhead_time_readout(&scene).unwrap().to_string() == "05:05");

    scene.frame_rate = 0;
    assert!(playhead_time_readout(&scene).is_err());
}
