use crate::window_host::{WindowCreationError, WindowHost, WindowKind};

/// Per-window bookkeeping. The handle is cleared when the window is
/// destroyed so stale access shows up as a `None`, never a dangling handle.
#[derive(Debug)]
pub(crate) struct WindowState<H> {
    pub(crate) handle: Option<H>,
    pub(crate) visible: bool,
    pub(crate) loaded: bool,
}

impl<H> WindowState<H> {
    fn empty() -> Self {
        Self {
            handle: None,
            visible: false,
            loaded: false,
        }
    }
}

/// Owns creation, visibility transitions and teardown of the splash and
/// primary windows for one launch. Constructed once per launch by the
/// startup coordinator; there are no process-wide window globals.
pub(crate) struct WindowLifecycleManager<H: WindowHost> {
    host: H,
    splash: WindowState<H::Handle>,
    primary: WindowState<H::Handle>,
    /// Guards the one-time splash reveal against repeated load-start events.
    is_loading: bool,
    /// Join input: the update orchestrator reported no pending action.
    update_settled: bool,
    swapped: bool,
    start_minimized: bool,
}

impl<H: WindowHost> WindowLifecycleManager<H> {
    pub(crate) fn new(host: H, start_minimized: bool) -> Self {
        Self {
            host,
            splash: WindowState::empty(),
            primary: WindowState::empty(),
            is_loading: false,
            update_settled: false,
            swapped: false,
            start_minimized,
        }
    }

    /// At most one splash window may exist; a second creation request is a
    /// no-op while the first handle is live.
    pub(crate) fn create_splash<F>(&mut self, log: F) -> Result<(), WindowCreationError>
    where
        F: Fn(&str),
    {
        if self.splash.handle.is_some() {
            log("splash window already exists, skipping creation");
            return Ok(());
        }

        let handle = self.host.create_splash()?;
        self.splash = WindowState {
            handle: Some(handle),
            visible: false,
            loaded: false,
        };
        Ok(())
    }

    pub(crate) fn create_primary<F>(&mut self, log: F) -> Result<(), WindowCreationError>
    where
        F: Fn(&str),
    {
        if self.primary.handle.is_some() {
            log("primary window already exists, skipping creation");
            return Ok(());
        }

        let handle = self.host.create_primary()?;
        if let Err(error) = self.host.attach_menu(&handle) {
            // Menu failure is cosmetic; the window still ships without it.
            log(&format!("failed to attach application menu: {error}"));
        }
        self.primary = WindowState {
            handle: Some(handle),
            visible: false,
            loaded: false,
        };
        Ok(())
    }

    pub(crate) fn on_splash_finished_loading(&mut self) {
        self.splash.loaded = true;
    }

    /// Reveal the splash exactly once, no matter how many load-start events
    /// the primary content fires during navigation.
    pub(crate) fn on_primary_started_loading(&mut self) {
        if self.is_loading {
            return;
        }

        if let Some(handle) = &self.splash.handle {
            self.host.show(handle);
            self.splash.visible = true;
        }
        self.is_loading = true;
    }

    pub(crate) fn on_primary_finished_loading(&mut self) {
        self.primary.loaded = true;
    }

    pub(crate) fn on_update_settled(&mut self) {
        self.update_settled = true;
    }

    /// The splash-to-primary swap is a join: both the primary content and
    /// the update decision must be in, in either order.
    pub(crate) fn ready_to_swap(&self) -> bool {
        !self.swapped && self.primary.loaded && self.update_settled
    }

    /// Hide and destroy the splash, then reveal the primary. Safe to call
    /// again once the splash handle is cleared; the second call is a no-op.
    pub(crate) fn swap_to_primary<F>(&mut self, log: F)
    where
        F: Fn(&str),
    {
        if self.swapped {
            return;
        }
        self.swapped = true;

        if let Some(handle) = self.splash.handle.take() {
            self.host.hide(&handle);
            self.host.destroy(&handle);
            self.splash.visible = false;
        }

        let Some(handle) = &self.primary.handle else {
            log("swap requested but the primary window is gone");
            return;
        };
        if self.start_minimized {
            self.host.minimize(handle);
        } else {
            self.host.show(handle);
            self.host.focus(handle);
        }
        self.primary.visible = true;
    }

    /// Deny the in-app navigation and forward the target to the system
    /// handler, exactly once per request.
    pub(crate) fn handle_external_navigation<F>(&self, url: &str, log: F) -> Result<(), String>
    where
        F: Fn(&str),
    {
        if let Err(error) = self.host.open_external(url) {
            log(&format!("failed to open external target {url}: {error}"));
            return Err(error);
        }
        Ok(())
    }

    pub(crate) fn on_window_destroyed(&mut self, kind: WindowKind) {
        let state = match kind {
            WindowKind::Splash => &mut self.splash,
            WindowKind::Primary => &mut self.primary,
        };
        state.handle = None;
        state.visible = false;
        state.loaded = false;
    }

    pub(crate) fn has_primary(&self) -> bool {
        self.primary.handle.is_some()
    }

    pub(crate) fn all_windows_closed(&self) -> bool {
        self.splash.handle.is_none() && self.primary.handle.is_none()
    }

    /// Destroy any surface this manager still owns. Used when a relaunch
    /// replaces the per-launch manager.
    pub(crate) fn teardown(&mut self) {
        if let Some(handle) = self.splash.handle.take() {
            self.host.destroy(&handle);
        }
        if let Some(handle) = self.primary.handle.take() {
            self.host.destroy(&handle);
        }
        self.splash = WindowState::empty();
        self.primary = WindowState::empty();
    }

    #[cfg(test)]
    pub(crate) fn splash(&self) -> &WindowState<H::Handle> {
        &self.splash
    }

    #[cfg(test)]
    pub(crate) fn primary(&self) -> &WindowState<H::Handle> {
        &self.primary
    }
}
