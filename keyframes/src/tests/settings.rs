use crate::*;
use crate::inmemory::*;

#[test]
fn default_settings() {
    let settings = KeyFrameSettings::default();

    assert!(settings.frame_count == 5);
    assert!(settings.spacing == 2);
    assert!(settings.start_from_playhead == false);
    assert!(settings.validate().is_ok());
}

#[test]
fn missing_fields_use_defaults() {
    let settings: KeyFrameSettings = serde_json::from_str("{ \"spacing\": 4 }").unwrap();

    assert!(settings.frame_count == 5);
    assert!(settings.spacing == 4);
    assert!(settings.start_from_playhead == false);
}

#[test]
fn zero_values_are_rejected() {
    let no_frames   = KeyFrameSettings { frame_count: 0, ..KeyFrameSettings::default() };
    let no_spacing  = KeyFrameSettings { spacing: 0, ..KeyFrameSettings::default() };

    assert!(no_frames.validate() == Err(KeyFrameError::ConfigurationError(ConfigurationProblem::ZeroFrameCount)));
    assert!(no_spacing.validate() == Err(KeyFrameError::ConfigurationError(ConfigurationProblem::ZeroSpacing)));
}

#[test]
fn scene_keeps_settings() {
    let mut scene   = InMemoryScene::new();
    let settings    = KeyFrameSettings { frame_count: 3, spacing: 6, start_from_playhead: true };

    scene.set_keyframe_settings(settings);

    assert!(scene.keyframe_settings() == settings);
}

#[test]
fn scene_survives_json() {
    let mut scene = super::scene_with_frames(vec![1, 5, 9]);
    scene.add_object(InMemoryObject::other("Camera", "camera"));
    scene.select_object(Some("Drawing"));
    scene.current_frame = 12;

    let json        = serde_json::to_string(&scene).unwrap();
    let reloaded    = serde_json::from_str::<InMemoryScene>(&json).unwrap();

    assert!(reloaded == scene);
}

#[test]
fn sparse_scene_json_uses_defaults() {
    let scene = serde_json::from_str::<InMemoryScene>("{ \"objects\": [ { \"name\": \"Drawing\", \"kind\": \"Drawing\" } ] }").unwrap();

    assert!(scene.frame_rate == 24);
    assert!(scene.current_frame == 0);
    assert!(scene.active_object.is_none());
    assert!(scene.settings == KeyFrameSettings::default());
    assert!(scene.objects[0].layers.is_empty());
}
