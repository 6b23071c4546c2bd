pub(crate) const SPLASH_WINDOW_LABEL: &str = "splash";
pub(crate) const PRIMARY_WINDOW_LABEL: &str = "main";

pub(crate) const SPLASH_WINDOW_SIZE: f64 = 400.0;
pub(crate) const PRIMARY_FALLBACK_WIDTH: f64 = 1280.0;
pub(crate) const PRIMARY_FALLBACK_HEIGHT: f64 = 800.0;

pub(crate) const SPLASH_PAGE: &str = "splash.html";
pub(crate) const PACKAGED_ENTRY_PAGE: &str = "index.html";
pub(crate) const DEFAULT_ENTRY_URL: &str = "http://localhost:3000";

pub(crate) const SHELL_ROOT_ENV: &str = "SKYLIGHT_ROOT";
pub(crate) const DEV_MODE_ENV: &str = "SKYLIGHT_DEV_MODE";
pub(crate) const DEBUG_PROD_ENV: &str = "SKYLIGHT_DEBUG_PROD";
pub(crate) const START_MINIMIZED_ENV: &str = "SKYLIGHT_START_MINIMIZED";
pub(crate) const FORCE_DEVTOOLS_REFRESH_ENV: &str = "SKYLIGHT_FORCE_DEVTOOLS_REFRESH";
pub(crate) const ENTRY_URL_ENV: &str = "SKYLIGHT_ENTRY_URL";

pub(crate) const HELP_URL: &str = "https://skylight.app/docs";

pub(crate) const DESKTOP_LOG_FILE: &str = "desktop.log";
pub(crate) const DOWNLOAD_PROGRESS_EVENT: &str = "download-progress";
