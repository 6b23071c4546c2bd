use std::env;

use url::Url;

use crate::{
    DEBUG_PROD_ENV, DEFAULT_ENTRY_URL, DEV_MODE_ENV, ENTRY_URL_ENV, FORCE_DEVTOOLS_REFRESH_ENV,
    START_MINIMIZED_ENV,
};

/// Read-only startup configuration, resolved once from the environment.
#[derive(Debug, Clone)]
pub(crate) struct EnvConfig {
    /// Development behavior: dev-server entry content and debug tooling.
    pub(crate) dev_mode: bool,
    /// Suppress the initial focus and start the primary window minimized.
    pub(crate) start_minimized: bool,
    /// Bypass the cached devtools profile and re-install it from scratch.
    pub(crate) force_devtools_refresh: bool,
    /// Entry content for the primary window when running against a dev server.
    pub(crate) entry_url: Url,
}

fn flag_is_set(value: Option<String>) -> bool {
    matches!(value.as_deref().map(str::trim), Some("1") | Some("true"))
}

impl EnvConfig {
    pub(crate) fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok(), cfg!(debug_assertions))
    }

    /// Resolve configuration through a lookup closure so tests can supply
    /// environments without mutating process state.
    pub(crate) fn from_lookup<F>(lookup: F, default_dev_mode: bool) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let dev_mode = default_dev_mode
            || flag_is_set(lookup(DEV_MODE_ENV))
            || flag_is_set(lookup(DEBUG_PROD_ENV));

        let entry_url = lookup(ENTRY_URL_ENV)
            .and_then(|raw| Url::parse(raw.trim()).ok())
            .unwrap_or_else(|| {
                Url::parse(DEFAULT_ENTRY_URL).expect("default entry URL must parse")
            });

        Self {
            dev_mode,
            start_minimized: flag_is_set(lookup(START_MINIMIZED_ENV)),
            force_devtools_refresh: flag_is_set(lookup(FORCE_DEVTOOLS_REFRESH_ENV)),
            entry_url,
        }
    }
}
