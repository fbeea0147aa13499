use playprobe_core::mocks::MockPlayer;
use playprobe_core::media::CODEC_UNDETECTABLE;
use playprobe_core::*;
use serde_json::json;
use std::path::Path;
use std::time::Duration;

const NO_SETTLE: Duration = Duration::ZERO;

#[test]
fn test_probe_reads_full_descriptor() {
    let mut player = MockPlayer::new().with_file(
        "/media/clip.avi",
        [
            ("video-codec", json!("h263 (H.263 / H.263-1996)")),
            ("file-format", json!("avi")),
            ("video-params/w", json!(352)),
            ("video-params/h", json!(288)),
            ("container-fps", json!(25.0)),
            ("duration", json!(12.5)),
        ],
    );

    let result = probe_file(&mut player, Path::new("/media/clip.avi"), NO_SETTLE);

    assert!(result.succeeded);
    assert_eq!(result.error_message, None);
    let d = &result.descriptor;
    assert_eq!(d.codec.as_deref(), Some("h263"));
    assert_eq!(d.container.as_deref(), Some("avi"));
    assert_eq!(d.resolution(), Some((352, 288)));
    assert_eq!(d.frame_rate, Some(25.0));
    assert_eq!(d.duration_seconds, Some(12.5));
    assert_eq!(player.received_calls()[0], "load /media/clip.avi");
}

#[test]
fn test_frame_rate_falls_back_to_decoder_params() {
    let mut player = MockPlayer::new().with_file(
        "/media/stream.flv",
        [
            ("video-codec", json!("flv1")),
            ("video-params/fps", json!(29.97)),
        ],
    );

    let result = probe_file(&mut player, Path::new("/media/stream.flv"), NO_SETTLE);
    assert!(result.succeeded);
    assert_eq!(result.descriptor.frame_rate, Some(29.97));
}

#[test]
fn test_property_failures_are_independent() {
    // Only the codec and height are available; every other read fails.
    let mut player = MockPlayer::new().with_file(
        "/media/partial.mkv",
        [("video-codec", json!("vp8")), ("video-params/h", json!(480))],
    );

    let result = probe_file(&mut player, Path::new("/media/partial.mkv"), NO_SETTLE);

    assert!(result.succeeded);
    let d = &result.descriptor;
    assert_eq!(d.codec.as_deref(), Some("vp8"));
    assert_eq!(d.height, Some(480));
    assert_eq!(d.width, None);
    assert_eq!(d.container, None);
    assert_eq!(d.frame_rate, None);
    assert_eq!(d.duration_seconds, None);

    let reads = player
        .received_calls()
        .iter()
        .filter(|c| c.starts_with("get_property"))
        .count();
    // codec, format, w, h, container-fps, video-params/fps, duration
    assert_eq!(reads, 7);
}

#[test]
fn test_missing_codec_is_a_failed_probe() {
    let mut player = MockPlayer::new().with_file(
        "/media/audio-only.avi",
        [("file-format", json!("avi")), ("duration", json!(3.0))],
    );

    let result = probe_file(&mut player, Path::new("/media/audio-only.avi"), NO_SETTLE);

    assert!(!result.succeeded);
    assert_eq!(result.error_message.as_deref(), Some(CODEC_UNDETECTABLE));
    // What could be read is kept.
    assert_eq!(result.descriptor.container.as_deref(), Some("avi"));
}

#[test]
fn test_load_failure_is_captured_not_propagated() {
    let mut player =
        MockPlayer::new().with_load_failure("/media/broken.wmv", "unrecognized file format");

    let result = probe_file(&mut player, Path::new("/media/broken.wmv"), NO_SETTLE);

    assert!(!result.succeeded);
    let message = result.error_message.unwrap_or_default();
    assert!(message.contains("unrecognized file format"), "message: {message}");
    assert_eq!(result.descriptor, MediaDescriptor::default());
    assert_eq!(player.received_calls().len(), 1);
}

#[test]
fn test_settle_delay_counts_towards_load_time() {
    let mut player = MockPlayer::new().with_file("/media/a.mp4", [("video-codec", json!("h264"))]);
    let result = probe_file(&mut player, Path::new("/media/a.mp4"), Duration::from_millis(30));
    assert!(result.load_time_millis >= 30);
}

#[test]
fn test_non_numeric_and_non_positive_values_are_absent() {
    let mut player = MockPlayer::new().with_file(
        "/media/odd.mp4",
        [
            ("video-codec", json!("h264")),
            ("video-params/w", json!("wide")),
            ("video-params/h", json!(0)),
            ("container-fps", json!(0.0)),
            ("duration", json!(null)),
        ],
    );

    let result = probe_file(&mut player, Path::new("/media/odd.mp4"), NO_SETTLE);
    assert!(result.succeeded);
    assert_eq!(result.descriptor.width, None);
    assert_eq!(result.descriptor.height, None);
    assert_eq!(result.descriptor.frame_rate, None);
    assert_eq!(result.descriptor.duration_seconds, None);
}
