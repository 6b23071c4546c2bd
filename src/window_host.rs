use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WindowKind {
    Splash,
    Primary,
}

/// Refused window allocation is the only failure that aborts a launch
/// attempt; everything else the shell degrades around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct WindowCreationError {
    pub(crate) kind: WindowKind,
    pub(crate) reason: String,
}

impl WindowCreationError {
    pub(crate) fn new(kind: WindowKind, reason: impl Into<String>) -> Self {
        Self {
            kind,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for WindowCreationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            WindowKind::Splash => "splash",
            WindowKind::Primary => "primary",
        };
        write!(f, "failed to create {kind} window: {}", self.reason)
    }
}

impl std::error::Error for WindowCreationError {}

/// Boundary to the host windowing system. The production implementation
/// wraps the Tauri app handle; tests drive the lifecycle manager through an
/// in-memory fake.
pub(crate) trait WindowHost {
    type Handle: Clone;

    /// Allocate the frameless, always-on-top splash surface, hidden, with
    /// the bundled splash page loading.
    fn create_splash(&self) -> Result<Self::Handle, WindowCreationError>;

    /// Allocate the primary surface sized to the display work area, hidden,
    /// with the configured entry content loading.
    fn create_primary(&self) -> Result<Self::Handle, WindowCreationError>;

    fn show(&self, handle: &Self::Handle);
    fn hide(&self, handle: &Self::Handle);
    fn focus(&self, handle: &Self::Handle);
    fn minimize(&self, handle: &Self::Handle);
    fn destroy(&self, handle: &Self::Handle);

    /// Attach the custom application menu once the primary window exists.
    fn attach_menu(&self, handle: &Self::Handle) -> Result<(), String>;

    /// Hand a navigation target to the platform's default external handler.
    fn open_external(&self, url: &str) -> Result<(), String>;
}
