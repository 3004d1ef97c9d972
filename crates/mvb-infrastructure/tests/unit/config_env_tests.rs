//! Environment override tests
//!
//! These tests modify environment variables and must run sequentially:
//!
//! ```bash
//! cargo test -p mvb-infrastructure --test unit config_env -- --test-threads=1 --ignored
//! ```

use std::env;

use mvb_infrastructure::config::ConfigLoader;
use tempfile::TempDir;

fn set_env(key: &str, value: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::set_var(key, value);
    }
}

fn remove_env(key: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::remove_var(key);
    }
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_env_overrides_nested_keys() {
    let temp_dir = TempDir::new().unwrap();
    set_env("MVBTEST_MEDIATION__MAX_DEPTH", "12");
    set_env("MVBTEST_LOGGING__LEVEL", "debug");

    let result = ConfigLoader::new()
        .with_env_prefix("MVBTEST")
        .with_config_path(temp_dir.path().join("absent.toml"))
        .load();

    remove_env("MVBTEST_MEDIATION__MAX_DEPTH");
    remove_env("MVBTEST_LOGGING__LEVEL");

    let config = result.unwrap();
    assert_eq!(config.mediation.max_depth, 12);
    assert_eq!(config.logging.level, "debug");
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_env_overrides_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("mvb.toml");
    std::fs::write(&path, "[mediation]\nmax_depth = 5\n").unwrap();
    set_env("MVBTEST_MEDIATION__MAX_DEPTH", "9");

    let result = ConfigLoader::new()
        .with_env_prefix("MVBTEST")
        .with_config_path(&path)
        .load();

    remove_env("MVBTEST_MEDIATION__MAX_DEPTH");
    assert_eq!(result.unwrap().mediation.max_depth, 9);
}
