use super::*;

#[test]
fn from_vars_defaults_when_unset() {
    let cfg = ServerConfig::from_vars(None, None).unwrap();
    assert_eq!(cfg.host, DEFAULT_HOST);
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn from_vars_treats_blank_values_as_unset() {
    let cfg = ServerConfig::from_vars(Some("  "), Some("")).unwrap();
    assert_eq!(cfg, ServerConfig { host: DEFAULT_HOST, port: DEFAULT_PORT });
}

#[test]
fn from_vars_parses_overrides() {
    let cfg = ServerConfig::from_vars(Some("127.0.0.1"), Some(" 8080 ")).unwrap();
    assert_eq!(cfg.addr().to_string(), "127.0.0.1:8080");

    let cfg = ServerConfig::from_vars(Some("::1"), Some("443")).unwrap();
    assert_eq!(cfg.addr().to_string(), "[::1]:443");
}

#[test]
fn from_vars_rejects_malformed_port() {
    let err = ServerConfig::from_vars(None, Some("http")).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort { value: "http".into() });

    let err = ServerConfig::from_vars(None, Some("70000")).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { .. }));

    let err = ServerConfig::from_vars(None, Some("0")).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { .. }));
}

#[test]
fn from_vars_rejects_hostname_instead_of_ip() {
    let err = ServerConfig::from_vars(Some("localhost"), None).unwrap_err();
    assert_eq!(err, ConfigError::InvalidHost { value: "localhost".into() });
}

#[test]
fn config_error_messages_name_the_variable() {
    let msg = ConfigError::InvalidPort { value: "x".into() }.to_string();
    assert!(msg.contains("PORT"));
    let msg = ConfigError::InvalidHost { value: "x".into() }.to_string();
    assert!(msg.contains("HOST"));
}
