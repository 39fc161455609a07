//! Log file output. Installs the global subscriber, so it lives in its own test binary.

use roster_cli::logging::{LogConfig, LogFormat, REDACTED_VALUE, init_logging, redact_value};
use tracing::level_filters::LevelFilter;

#[test]
fn log_file_receives_json_events_with_redacted_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.log");
    let config = LogConfig {
        level_filter: LevelFilter::INFO,
        use_env_filter: false,
        format: LogFormat::Json,
        with_ansi: false,
        log_file: Some(path.clone()),
        ..LogConfig::default()
    };
    init_logging(&config).unwrap();

    tracing::info!(
        target: "roster_cli::session",
        value = redact_value("aaron@mailinator.com"),
        "draft input"
    );
    tracing::debug!(target: "roster_cli::session", "below the configured level");
    tracing::info!(target: "other_crate", "filtered out by the default directives");

    let written = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<serde_json::Value> = written
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 1, "unexpected log lines: {written}");
    assert_eq!(lines[0]["fields"]["message"], "draft input");
    assert_eq!(lines[0]["fields"]["value"], REDACTED_VALUE);
    assert!(!written.contains("aaron@mailinator.com"));
}
