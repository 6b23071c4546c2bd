use tauri::{image::Image, AppHandle, WebviewWindow, WebviewWindowBuilder};
use url::Url;

use crate::{
    append_desktop_log, asset_resolver,
    asset_resolver::EntryContent,
    env_config::EnvConfig,
    menu_builder, navigation_policy, system_browser,
    window_host::{WindowCreationError, WindowHost, WindowKind},
    PRIMARY_FALLBACK_HEIGHT, PRIMARY_FALLBACK_WIDTH, PRIMARY_WINDOW_LABEL, SPLASH_WINDOW_LABEL,
    SPLASH_WINDOW_SIZE,
};

/// Production window host over the Tauri app handle.
#[derive(Clone)]
pub(crate) struct TauriWindowHost {
    app: AppHandle,
    entry: EntryContent,
}

impl TauriWindowHost {
    pub(crate) fn new(app: AppHandle, config: &EnvConfig) -> Self {
        Self {
            app,
            entry: asset_resolver::resolve_entry_content(config),
        }
    }

    fn entry_origin(&self) -> Url {
        match &self.entry {
            EntryContent::DevServer(url) => url.clone(),
            EntryContent::PackagedBundle(_) => {
                Url::parse("tauri://localhost").expect("shell origin URL must parse")
            }
        }
    }

    fn log_window_op_error(operation: &str, label: &str, error: tauri::Error) {
        append_desktop_log(&format!("failed to {operation} {label} window: {error}"));
    }

    /// Branding icon, shared by both windows. Missing or undecodable assets
    /// leave the platform default icon in place.
    fn window_icon(&self) -> Option<Image<'static>> {
        let path = asset_resolver::resolve_asset_path(&self.app, "icons/app.png")?;
        match Image::from_path(&path) {
            Ok(icon) => Some(icon),
            Err(error) => {
                append_desktop_log(&format!(
                    "failed to load window icon {}: {}",
                    path.display(),
                    error
                ));
                None
            }
        }
    }

    fn with_icon<'a>(
        &self,
        builder: WebviewWindowBuilder<'a, tauri::Wry, AppHandle>,
        kind: WindowKind,
    ) -> Result<WebviewWindowBuilder<'a, tauri::Wry, AppHandle>, WindowCreationError> {
        match self.window_icon() {
            Some(icon) => builder
                .icon(icon)
                .map_err(|error| WindowCreationError::new(kind, error.to_string())),
            None => Ok(builder),
        }
    }
}

impl WindowHost for TauriWindowHost {
    type Handle = WebviewWindow;

    fn create_splash(&self) -> Result<WebviewWindow, WindowCreationError> {
        WebviewWindowBuilder::new(
            &self.app,
            SPLASH_WINDOW_LABEL,
            asset_resolver::splash_webview_url(),
        )
        .title("Skylight")
        .inner_size(SPLASH_WINDOW_SIZE, SPLASH_WINDOW_SIZE)
        .decorations(false)
        .transparent(true)
        .always_on_top(true)
        .resizable(false)
        .skip_taskbar(true)
        .center()
        .visible(false)
        .build()
        .map_err(|error| WindowCreationError::new(WindowKind::Splash, error.to_string()))
    }

    fn create_primary(&self) -> Result<WebviewWindow, WindowCreationError> {
        let entry_origin = self.entry_origin();
        let builder = WebviewWindowBuilder::new(
            &self.app,
            PRIMARY_WINDOW_LABEL,
            asset_resolver::entry_webview_url(&self.entry),
        )
        .title("Skylight")
        .inner_size(PRIMARY_FALLBACK_WIDTH, PRIMARY_FALLBACK_HEIGHT)
        .visible(false)
        .on_navigation(move |url| {
            let decision = navigation_policy::classify_navigation(&entry_origin, url);
            navigation_policy::apply_navigation_decision(
                decision,
                url,
                system_browser::open_in_system_browser,
                append_desktop_log,
            )
        });
        let window = self
            .with_icon(builder, WindowKind::Primary)?
            .build()
            .map_err(|error| WindowCreationError::new(WindowKind::Primary, error.to_string()))?;

        // Fill the primary display's usable work area while staying a
        // normal, un-fullscreened window.
        if let Err(error) = window.maximize() {
            Self::log_window_op_error("maximize", PRIMARY_WINDOW_LABEL, error);
        }

        Ok(window)
    }

    fn show(&self, handle: &WebviewWindow) {
        if let Err(error) = handle.show() {
            Self::log_window_op_error("show", handle.label(), error);
        }
    }

    fn hide(&self, handle: &WebviewWindow) {
        if let Err(error) = handle.hide() {
            Self::log_window_op_error("hide", handle.label(), error);
        }
    }

    fn focus(&self, handle: &WebviewWindow) {
        if let Err(error) = handle.set_focus() {
            Self::log_window_op_error("focus", handle.label(), error);
        }
    }

    fn minimize(&self, handle: &WebviewWindow) {
        if let Err(error) = handle.minimize() {
            Self::log_window_op_error("minimize", handle.label(), error);
        }
    }

    fn destroy(&self, handle: &WebviewWindow) {
        if let Err(error) = handle.destroy() {
            Self::log_window_op_error("destroy", handle.label(), error);
        }
    }

    fn attach_menu(&self, _handle: &WebviewWindow) -> Result<(), String> {
        menu_builder::attach_app_menu(&self.app)
    }

    fn open_external(&self, url: &str) -> Result<(), String> {
        let parsed = navigation_policy::parse_openable_url(url)?;
        system_browser::open_in_system_browser(parsed.as_ref())
    }
}
