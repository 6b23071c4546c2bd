use std::path::PathBuf;

use tauri::{path::BaseDirectory, AppHandle, Manager, WebviewUrl};
use url::Url;

use crate::{env_config::EnvConfig, PACKAGED_ENTRY_PAGE, SPLASH_PAGE};

/// Where the primary window's entry content comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum EntryContent {
    /// Development layout: a dev server URL.
    DevServer(Url),
    /// Packaged layout: a page inside the bundled ui directory.
    PackagedBundle(&'static str),
}

pub(crate) fn resolve_entry_content(config: &EnvConfig) -> EntryContent {
    if config.dev_mode {
        EntryContent::DevServer(config.entry_url.clone())
    } else {
        EntryContent::PackagedBundle(PACKAGED_ENTRY_PAGE)
    }
}

pub(crate) fn entry_webview_url(entry: &EntryContent) -> WebviewUrl {
    match entry {
        EntryContent::DevServer(url) => WebviewUrl::External(url.clone()),
        EntryContent::PackagedBundle(page) => WebviewUrl::App(PathBuf::from(page)),
    }
}

/// The splash page ships with the shell itself, so both layouts serve it from
/// the bundled ui directory.
pub(crate) fn splash_webview_url() -> WebviewUrl {
    WebviewUrl::App(PathBuf::from(SPLASH_PAGE))
}

/// Resolve a bundled asset (icons and similar) from the packaged resource
/// directory, falling back to the repository `assets/` layout in development.
/// Bundled resources keep their source-relative layout, so both branches
/// share the `assets/` prefix.
pub(crate) fn resolve_asset_path(app_handle: &AppHandle, relative_path: &str) -> Option<PathBuf> {
    let packaged = app_handle
        .path()
        .resolve(PathBuf::from("assets").join(relative_path), BaseDirectory::Resource)
        .ok()
        .filter(|path| path.is_file());
    if packaged.is_some() {
        return packaged;
    }

    let dev_candidate = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("assets")
        .join(relative_path);
    dev_candidate.is_file().then_some(dev_candidate)
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::{resolve_entry_content, EntryContent};
    use crate::env_config::EnvConfig;

    fn config(dev_mode: bool) -> EnvConfig {
        EnvConfig {
            dev_mode,
            start_minimized: false,
            force_devtools_refresh: false,
            entry_url: Url::parse("http://localhost:3000").expect("parse entry url"),
        }
    }

    #[test]
    fn dev_mode_resolves_to_dev_server() {
        match resolve_entry_content(&config(true)) {
            EntryContent::DevServer(url) => assert_eq!(url.as_str(), "http://localhost:3000/"),
            other => panic!("expected dev server entry, got {other:?}"),
        }
    }

    #[test]
    fn packaged_mode_resolves_to_bundled_page() {
        assert_eq!(
            resolve_entry_content(&config(false)),
            EntryContent::PackagedBundle("index.html")
        );
    }
}
