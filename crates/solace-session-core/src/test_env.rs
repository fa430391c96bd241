//! Serialized access to process environment variables in tests.

use std::env;
use std::sync::Mutex;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Run `f` with each `(name, value)` applied (`None` removes the variable),
/// restoring the previous values afterwards.
pub(crate) fn with_vars<F: FnOnce()>(vars: &[(&str, Option<&str>)], f: F) {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

    let previous: Vec<(&str, Option<String>)> = vars
        .iter()
        .map(|(name, _)| (*name, env::var(name).ok()))
        .collect();
    for (name, value) in vars {
        set_or_remove(name, *value);
    }

    f();

    for (name, value) in &previous {
        set_or_remove(name, value.as_deref());
    }
}

fn set_or_remove(name: &str, value: Option<&str>) {
    match value {
        Some(value) => env::set_var(name, value),
        None => env::remove_var(name),
    }
}
