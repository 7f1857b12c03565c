use std::{
    env,
    ffi::OsString,
    sync::{Mutex, MutexGuard},
};

static ENV_LOCK: Mutex<()> = Mutex::new(());

pub fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().expect("env lock should not be poisoned")
}

/// Runs `body` with `key` set to `value`, restoring the previous value afterwards.
pub fn with_env_var<T>(key: &str, value: impl Into<OsString>, body: impl FnOnce() -> T) -> T {
    let _guard = env_lock();
    let previous = env::var_os(key);
    env::set_var(key, value.into());

    let result = body();

    match previous {
        Some(previous) => env::set_var(key, previous),
        None => env::remove_var(key),
    }
    result
}
