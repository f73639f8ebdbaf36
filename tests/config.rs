//! Configuration loading tests.

use std::path::Path;

use http_protocols::config::{load_config, read_config, ConfigError, LogFormat, ValidationError};

mod common;

#[test]
fn load_full_config_from_disk() {
    let file = common::write_temp_config(
        "full",
        r#"
        [server]
        protocols = ["HTTP1", "HTTP2"]

        [server.tls]
        cert_path = "/etc/proxy/cert.pem"
        key_path = "/etc/proxy/key.pem"

        [client]
        protocols = ["h2c"]

        [observability]
        log_level = "debug"
        log_format = "json"
        "#,
    );

    let config = load_config(file.path()).unwrap();

    assert_eq!(config.server.protocol_set().to_string(), "{HTTP1,HTTP2}");
    assert!(config.server.is_tls());
    assert_eq!(config.client.protocol_set().to_string(), "{UnencryptedHTTP2}");
    assert_eq!(config.observability.log_format, LogFormat::Json);
}

#[test]
fn missing_file_is_io_error() {
    let err = load_config(Path::new("/nonexistent/http-protocols.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn read_skips_validation_but_load_does_not() {
    let file = common::write_temp_config("empty-server", "[server]\nprotocols = []\n");

    let raw = read_config(file.path()).unwrap();
    assert!(raw.server.protocol_set().is_empty());

    let err = load_config(file.path()).unwrap_err();

    match err {
        ConfigError::Validation(errors) => assert_eq!(
            errors,
            vec![ValidationError::NoProtocols {
                endpoint: "server".into()
            }]
        ),
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn temp_config_is_removed_on_drop() {
    let file = common::write_temp_config("drop-guard", "");
    let path = file.path().to_path_buf();
    assert!(path.exists());

    drop(file);
    assert!(!path.exists());
}
