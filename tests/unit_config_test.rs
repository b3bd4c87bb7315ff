use std::fs;
use streamgrid::config::Config;

fn write_temp_config(name: &str, contents: &str) -> String {
    let path = std::env::temp_dir().join(format!("streamgrid-{name}-{}.toml", std::process::id()));
    fs::write(&path, contents).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.state_store, None);
    assert_eq!(config.servers, vec!["localhost"]);
    assert_eq!(config.port, 2181);
    assert_eq!(config.root, "");
    assert_eq!(config.session_timeout_ms, 20_000);
    assert_eq!(config.connection_timeout_ms, 15_000);
}

#[test]
fn test_from_file_with_partial_settings() {
    let path = write_temp_config(
        "partial",
        r#"
state_store = "zookeeper"
servers = ["zk1.internal", "zk2.internal"]
port = 2281
"#,
    );
    let config = Config::from_file(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(config.state_store.as_deref(), Some("zookeeper"));
    assert_eq!(config.servers, vec!["zk1.internal", "zk2.internal"]);
    assert_eq!(config.port, 2281);
    // Unset fields fall back to their defaults.
    assert_eq!(config.session_timeout_ms, 20_000);
    assert_eq!(config.auth_scheme, None);
}

#[test]
fn test_from_file_reports_parse_failures() {
    let path = write_temp_config("broken", "state_store = [not toml");
    let err = Config::from_file(&path).unwrap_err();
    fs::remove_file(&path).unwrap();
    assert!(err.to_string().contains("failed to parse config file"));
}

#[test]
fn test_from_file_reports_missing_files() {
    let err = Config::from_file("/nonexistent/streamgrid.toml").unwrap_err();
    assert!(err.to_string().contains("failed to read config file"));
}
