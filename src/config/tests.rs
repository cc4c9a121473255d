use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK.get_or_init(|| Mutex::new(())).lock().unwrap()
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_vibra_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("VIBRA_CONFIG_PATH", "/tmp/vibra-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/vibra-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("vibra")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("vibra")
            .join("config.toml")
    );
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[audio]
fade_ms = 0
fade_steps = 3
quit_fade_out_ms = 123
fetch_timeout_secs = 4

[catalog]
base_url = "http://localhost:9999"
lyrics_base_url = "http://localhost:9998/"
chart_limit = 7
timeout_secs = 2

[controls]
seek_step_percent = 10

[ui]
profile_name = "Tester"
header_text = "hello"

[storage]
data_dir = "/tmp/vibra-data"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("VIBRA_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("VIBRA__AUDIO__FADE_MS");

    let s = Settings::load().unwrap();
    assert_eq!(s.audio.fade_ms, 0);
    assert_eq!(s.audio.fade_steps, 3);
    assert_eq!(s.audio.quit_fade_out_ms, 123);
    assert_eq!(s.audio.fetch_timeout_secs, 4);
    assert_eq!(s.catalog.base_url, "http://localhost:9999");
    assert_eq!(s.catalog.lyrics_base_url, "http://localhost:9998/");
    assert_eq!(s.catalog.chart_limit, 7);
    assert_eq!(s.catalog.timeout_secs, 2);
    assert_eq!(s.controls.seek_step_percent, 10);
    assert_eq!(s.ui.profile_name, "Tester");
    assert_eq!(s.ui.header_text, "hello");
    assert_eq!(
        s.storage.data_dir.as_deref(),
        Some(std::path::Path::new("/tmp/vibra-data"))
    );
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[audio]
fade_ms = 250
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("VIBRA_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("VIBRA__AUDIO__FADE_MS", "0");

    let s = Settings::load().unwrap();
    assert_eq!(s.audio.fade_ms, 0);
}

#[test]
fn validate_rejects_degenerate_values() {
    let mut s = Settings::default();
    assert!(s.validate().is_ok());

    s.audio.fade_steps = 0;
    assert!(s.validate().is_err());
    s.audio.fade_steps = 10;

    s.controls.seek_step_percent = 0;
    assert!(s.validate().is_err());
    s.controls.seek_step_percent = 51;
    assert!(s.validate().is_err());
    s.controls.seek_step_percent = 5;

    s.catalog.chart_limit = 0;
    assert!(s.validate().is_err());
}
