use playprobe_core::config::{
    DEFAULT_PROCESS_PATH, DEFAULT_REQUEST_TIMEOUT_MS, DEFAULT_SETTLE_DELAY_MS,
    DEFAULT_STARTUP_TIMEOUT_MS,
};
use playprobe_core::{CoreError, ProbeConfig, ProbeConfigBuilder};
use std::path::PathBuf;
use std::time::Duration;

#[test]
fn test_default_config() {
    let config = ProbeConfig::default();
    assert_eq!(config.process_path, PathBuf::from(DEFAULT_PROCESS_PATH));
    assert_eq!(config.startup_timeout, Duration::from_millis(DEFAULT_STARTUP_TIMEOUT_MS));
    assert_eq!(config.request_timeout, Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS));
    assert_eq!(config.settle_delay, Duration::from_millis(DEFAULT_SETTLE_DELAY_MS));
    assert!(config.pause_on_start);
    assert!(config.headless);
    assert!(config.validate().is_ok());

    let rules = config.rule_set();
    assert!(rules.matches_codec("H.263"));
    assert!(rules.matches_codec("wmv3"));
    assert!(rules.matches_extension("AVI"));
    assert!(!rules.matches_codec("h264"));
}

#[test]
fn test_builder_pattern() -> Result<(), Box<dyn std::error::Error>> {
    let config = ProbeConfigBuilder::new()
        .process_path("/opt/mpv/bin/mpv")
        .request_timeout(Duration::from_millis(750))
        .settle_delay(Duration::ZERO)
        .unsupported_codecs(["theora"])
        .unsupported_container_extensions([".ogv"])
        .pause_on_start(false)
        .headless(false)
        .extra_args(["--hwdec=auto"])
        .build()?;

    assert_eq!(config.process_path, PathBuf::from("/opt/mpv/bin/mpv"));
    assert_eq!(config.request_timeout, Duration::from_millis(750));
    assert_eq!(config.settle_delay, Duration::ZERO);
    assert_eq!(config.extra_args, vec!["--hwdec=auto".to_string()]);

    let options = config.session_options();
    assert!(!options.pause_on_start);
    assert!(!options.headless);
    assert_eq!(options.request_timeout, Duration::from_millis(750));

    let rules = config.rule_set();
    assert!(rules.matches_codec("theora"));
    assert!(!rules.matches_codec("h263"));
    assert!(rules.matches_extension(".OGV"));
    Ok(())
}

#[test]
fn test_builder_rejects_invalid_values() {
    let zero_timeout = ProbeConfigBuilder::new()
        .request_timeout(Duration::ZERO)
        .build();
    assert!(matches!(zero_timeout, Err(CoreError::Config(_))));

    let no_extensions = ProbeConfigBuilder::new()
        .media_extensions(Vec::<String>::new())
        .build();
    assert!(matches!(no_extensions, Err(CoreError::Config(_))));

    let missing_socket_dir = ProbeConfigBuilder::new()
        .socket_dir("/nonexistent/socket/dir")
        .build();
    assert!(matches!(missing_socket_dir, Err(CoreError::Config(_))));
}
