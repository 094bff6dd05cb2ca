//! Tests for loading the TOML configuration.

use morpion::MorpionConfig;
use std::io::Write;
use std::time::Duration;

#[test]
fn test_from_file_reads_all_fields() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
computer_delay_ms = 250
opening_delay_ms = 10
log_file = "/tmp/morpion-test.log"
log_filter = "debug"
seed = 1234
"#
    )
    .unwrap();

    let config = MorpionConfig::from_file(file.path()).unwrap();
    assert_eq!(config.computer_delay(), Duration::from_millis(250));
    assert_eq!(config.opening_delay(), Duration::from_millis(10));
    assert_eq!(config.log_file().to_str(), Some("/tmp/morpion-test.log"));
    assert_eq!(config.log_filter(), "debug");
    assert_eq!(config.seed(), &Some(1234));
}

#[test]
fn test_empty_file_uses_defaults() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let config = MorpionConfig::from_file(file.path()).unwrap();
    assert_eq!(config, MorpionConfig::default());
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = MorpionConfig::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "computer_delay_ms = \"soon\"").unwrap();
    let err = MorpionConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_seeded_rngs_agree() {
    use rand::Rng;
    let config = MorpionConfig::default().with_seed(Some(5));
    let a: u64 = config.rng().r#gen();
    let b: u64 = config.rng().r#gen();
    assert_eq!(a, b);
}
