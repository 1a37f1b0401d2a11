// tests/config_tests.rs
use payload_codec::config::Config;
use payload_codec::enums::Mode;

#[test]
fn test_defaults() {
    let conf = Config::default();
    assert_eq!(conf.channel, "official");
    assert_eq!(conf.default_mode, Mode::Cbc);
}

#[test]
fn test_from_toml() {
    let conf = Config::from_toml("channel = \"beta\"\ndefault_mode = \"Ecb\"\n").unwrap();
    assert_eq!(conf.channel, "beta");
    assert_eq!(conf.default_mode, Mode::Ecb);

    // Partial documents fall back per-field
    let conf = Config::from_toml("channel = \"beta\"\n").unwrap();
    assert_eq!(conf.default_mode, Mode::Cbc);

    assert!(Config::from_toml("channel = 7\n").is_err());
}

// Everything touching the PAYLOAD_CHANNEL env var lives in one test so
// parallel test threads cannot race on process environment.
#[test]
fn test_load_file_defaults_and_env_override() {
    std::env::remove_var("PAYLOAD_CHANNEL");

    // Missing file is not an error
    let conf = Config::load("definitely/not/here.toml").unwrap();
    assert_eq!(conf, Config::default());

    // File contents win over defaults
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("payload.toml");
    std::fs::write(&path, "channel = \"beta\"\ndefault_mode = \"Ecb\"\n").unwrap();
    let conf = Config::load(&path).unwrap();
    assert_eq!(conf.channel, "beta");
    assert_eq!(conf.default_mode, Mode::Ecb);

    // Environment wins over the file
    std::env::set_var("PAYLOAD_CHANNEL", "store-x");
    let conf = Config::load(&path).unwrap();
    assert_eq!(conf.channel, "store-x");
    assert_eq!(conf.default_mode, Mode::Ecb);

    std::env::remove_var("PAYLOAD_CHANNEL");
}
