use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};

use crate::config::types::{
    ENV_COMPLEXITY_THRESHOLD, ENV_FORMAT, ENV_HOME, ENV_MAX_INPUT_BYTES, ENV_QUIET,
    ENV_XDG_CONFIG_HOME,
};

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // The process working directory is global; tests using this are also #[serial].
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// Restores touched environment variables on drop. Callers must be #[serial].
pub(crate) struct EnvGuard {
    saved: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    /// Start from an environment with no `DIFFSUM_*` overrides and no
    /// reachable user config.
    pub(crate) fn clear_diffsum_vars() -> Self {
        let mut guard = Self { saved: Vec::new() };
        for key in [
            ENV_FORMAT,
            ENV_QUIET,
            ENV_COMPLEXITY_THRESHOLD,
            ENV_MAX_INPUT_BYTES,
            ENV_HOME,
            ENV_XDG_CONFIG_HOME,
        ] {
            guard.save(key);
            // SAFETY: env-mutating tests run under #[serial].
            unsafe { std::env::remove_var(key) };
        }
        guard
    }

    pub(crate) fn set(&mut self, key: &str, value: &str) {
        self.save(key);
        // SAFETY: env-mutating tests run under #[serial].
        unsafe { std::env::set_var(key, value) };
    }

    fn save(&mut self, key: &str) {
        if !self.saved.iter().any(|(k, _)| k == key) {
            self.saved.push((key.to_string(), std::env::var(key).ok()));
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in self.saved.drain(..).rev() {
            // SAFETY: env-mutating tests run under #[serial].
            unsafe {
                match value {
                    Some(v) => std::env::set_var(&key, v),
                    None => std::env::remove_var(&key),
                }
            }
        }
    }
}
