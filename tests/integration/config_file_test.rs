// Loading configuration from disk and building URLs from it

use std::io::Write;
use tempfile::NamedTempFile;
use thumbor_url::*;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write config");
    file
}

#[test]
fn test_signed_url_from_config_file() {
    let file = write_config("host: http://thumbor.example.com\nkey: test\n");
    let config = ThumborConfig::from_file(file.path()).unwrap();
    config.validate().unwrap();

    let url = Thumbor::from_config(&config)
        .unwrap()
        .build_image("a.com/b.png")
        .unwrap()
        .resize(40, 40)
        .unwrap()
        .to_url()
        .unwrap();
    assert_eq!(
        url,
        "http://thumbor.example.com/nX4KThLYD1SLUP-PHwY34PuQsjs=/40x40/a.com/b.png"
    );
}

#[test]
fn test_key_from_environment() {
    std::env::set_var("THUMBOR_URL_IT_KEY", "test");
    let file = write_config("key: ${THUMBOR_URL_IT_KEY}\n");

    let config = ThumborConfig::from_file(file.path()).unwrap();
    let thumbor = Thumbor::from_config(&config).unwrap();
    assert_eq!(thumbor.host(), "/");
    assert_eq!(thumbor.key().unwrap().as_bytes(), b"test");

    std::env::remove_var("THUMBOR_URL_IT_KEY");
}

#[test]
fn test_invalid_config_file_is_rejected() {
    let file = write_config("legacy: true\n");
    let config = ThumborConfig::from_file(file.path()).unwrap();
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    assert!(Thumbor::from_config(&config).is_err());
}

#[test]
fn test_empty_config_file_gives_unsafe_default() {
    let file = write_config("");
    let config = ThumborConfig::from_file(file.path()).unwrap();
    let url = Thumbor::from_config(&config)
        .unwrap()
        .build_image("a.png")
        .unwrap()
        .to_url()
        .unwrap();
    assert_eq!(url, "/unsafe/a.png");
}
