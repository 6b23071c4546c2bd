use crate::{
    update_orchestrator::{
        UpdateCheckResult, UpdateDecision, UpdateFlowPhase, UpdateObserver, UpdateOrchestrator,
    },
    window_host::{WindowCreationError, WindowHost, WindowKind},
    window_lifecycle::WindowLifecycleManager,
};

/// Process-wide startup phase, owned by the coordinator. Monotonic within a
/// launch; re-entry to `Launching` happens only through reactivation after
/// all windows closed on a platform that keeps the process alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum AppLifecyclePhase {
    Launching,
    SplashVisible,
    CheckingForUpdate,
    Downloading,
    ReadyToSwap,
    PrimaryVisible,
    Terminated,
}

/// Top-level driver: wires the window lifecycle and the update flow together
/// and reacts to application-level activation and termination signals.
pub(crate) struct StartupCoordinator<H: WindowHost + Clone> {
    host: H,
    phase: AppLifecyclePhase,
    windows: WindowLifecycleManager<H>,
    updates: UpdateOrchestrator,
    start_minimized: bool,
    /// Platform convention: keep the process alive after the last window
    /// closes (macOS) or terminate (everywhere else).
    keep_alive_after_close: bool,
}

impl<H: WindowHost + Clone> StartupCoordinator<H> {
    pub(crate) fn new(host: H, start_minimized: bool, keep_alive_after_close: bool) -> Self {
        let windows = WindowLifecycleManager::new(host.clone(), start_minimized);
        Self {
            host,
            phase: AppLifecyclePhase::Launching,
            windows,
            updates: UpdateOrchestrator::new(),
            start_minimized,
            keep_alive_after_close,
        }
    }

    pub(crate) fn phase(&self) -> AppLifecyclePhase {
        self.phase
    }

    pub(crate) fn update_phase(&self) -> UpdateFlowPhase {
        self.updates.phase()
    }

    pub(crate) fn is_update_download_in_flight(&self) -> bool {
        self.updates.is_downloading()
    }

    pub(crate) fn set_update_observer(&mut self, observer: Box<dyn UpdateObserver + Send>) {
        self.updates.set_observer(observer);
    }

    fn advance(&mut self, next: AppLifecyclePhase) {
        if next > self.phase {
            self.phase = next;
        }
    }

    /// Create the splash and primary windows for a fresh launch. Window
    /// creation refusal is the one fatal startup failure.
    pub(crate) fn launch<F>(&mut self, log: F) -> Result<(), WindowCreationError>
    where
        F: Fn(&str) + Copy,
    {
        // Each launch gets its own lifecycle manager; a surface surviving
        // from a previous launch is torn down first.
        self.windows.teardown();
        self.windows = WindowLifecycleManager::new(self.host.clone(), self.start_minimized);
        self.updates.reset_for_launch();
        self.phase = AppLifecyclePhase::Launching;

        self.windows.create_splash(log)?;
        self.windows.create_primary(log)?;
        log("splash and primary windows created, waiting for content");
        Ok(())
    }

    pub(crate) fn on_primary_started_loading(&mut self) {
        self.windows.on_primary_started_loading();
        self.advance(AppLifecyclePhase::SplashVisible);
    }

    /// The splash content is up; this is the trigger for the update check.
    /// Returns whether the caller should start the check transport.
    pub(crate) fn on_splash_finished_loading(&mut self) -> bool {
        self.windows.on_splash_finished_loading();
        if !self.updates.begin_check() {
            return false;
        }
        self.advance(AppLifecyclePhase::CheckingForUpdate);
        true
    }

    pub(crate) fn on_primary_finished_loading<F>(&mut self, log: F)
    where
        F: Fn(&str),
    {
        self.windows.on_primary_finished_loading();
        self.try_complete_swap(log);
    }

    pub(crate) fn on_update_check_complete<F>(
        &mut self,
        check: Option<UpdateCheckResult>,
        log: F,
    ) -> UpdateDecision
    where
        F: Fn(&str),
    {
        let decision = self.updates.complete_check(check, &log);
        match decision {
            UpdateDecision::Download => self.advance(AppLifecyclePhase::Downloading),
            UpdateDecision::NoAction | UpdateDecision::AlreadyDownloading => {
                self.settle_update(log);
            }
        }
        decision
    }

    pub(crate) fn on_update_check_failed<F>(&mut self, cause: &str, log: F)
    where
        F: Fn(&str),
    {
        self.updates.fail_check(cause, &log);
        self.settle_update(log);
    }

    pub(crate) fn on_download_progress(&mut self, percent: f64) {
        self.updates.on_progress(percent);
    }

    /// Returns whether install-and-restart should proceed. Once it does,
    /// no further coordinator transitions are expected; the process exits.
    pub(crate) fn on_update_downloaded<F>(&mut self, log: F) -> bool
    where
        F: Fn(&str),
    {
        self.updates.on_downloaded(log)
    }

    /// A failed download leaves the application running unmodified and
    /// releases the splash like any other settled update path.
    pub(crate) fn on_download_error<F>(&mut self, cause: &str, log: F)
    where
        F: Fn(&str),
    {
        self.updates.on_download_error(cause, &log);
        self.settle_update(log);
    }

    fn settle_update<F>(&mut self, log: F)
    where
        F: Fn(&str),
    {
        self.windows.on_update_settled();
        self.try_complete_swap(log);
    }

    fn try_complete_swap<F>(&mut self, log: F)
    where
        F: Fn(&str),
    {
        if !self.windows.ready_to_swap() {
            return;
        }
        self.advance(AppLifecyclePhase::ReadyToSwap);
        self.windows.swap_to_primary(log);
        self.advance(AppLifecyclePhase::PrimaryVisible);
    }

    /// Deny an in-app navigation to an external target and forward it to
    /// the system handler.
    pub(crate) fn on_external_navigation<F>(&self, url: &str, log: F) -> Result<(), String>
    where
        F: Fn(&str),
    {
        self.windows.handle_external_navigation(url, log)
    }

    /// Returns whether the process should exit.
    pub(crate) fn on_window_destroyed<F>(&mut self, kind: WindowKind, log: F) -> bool
    where
        F: Fn(&str),
    {
        self.windows.on_window_destroyed(kind);
        if !self.windows.all_windows_closed() {
            return false;
        }
        self.on_all_windows_closed(log)
    }

    pub(crate) fn on_all_windows_closed<F>(&mut self, log: F) -> bool
    where
        F: Fn(&str),
    {
        self.phase = AppLifecyclePhase::Terminated;
        if self.keep_alive_after_close {
            log("all windows closed, keeping process alive per platform convention");
            false
        } else {
            log("all windows closed, terminating");
            true
        }
    }

    pub(crate) fn on_terminating(&mut self) {
        self.phase = AppLifecyclePhase::Terminated;
    }

    /// Desktop reactivation: re-run the launch sequence when no primary
    /// window exists. Returns whether a new launch was started.
    pub(crate) fn on_reactivate<F>(&mut self, log: F) -> Result<bool, WindowCreationError>
    where
        F: Fn(&str) + Copy,
    {
        if self.has_primary() {
            return Ok(false);
        }
        log("reactivated with no primary window, relaunching");
        self.launch(log)?;
        Ok(true)
    }

    pub(crate) fn has_primary(&self) -> bool {
        self.windows.has_primary()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::{AppLifecyclePhase, StartupCoordinator};
    use crate::update_orchestrator::{UpdateCheckResult, UpdateDecision, UpdateFlowPhase};
    use crate::window_host::WindowKind;
    use crate::window_lifecycle::test_host::{FakeHost, HostCall};

    fn no_log(_: &str) {}

    fn check(remote: &str, local: &str) -> Option<UpdateCheckResult> {
        Some(UpdateCheckResult {
            remote_version: remote.to_string(),
            local_version: local.to_string(),
            has_download_in_flight: false,
        })
    }

    fn launched(host: &FakeHost, keep_alive: bool) -> StartupCoordinator<FakeHost> {
        let mut coordinator = StartupCoordinator::new(host.clone(), false, keep_alive);
        coordinator.launch(no_log).expect("launch");
        coordinator
    }

    #[test]
    fn happy_path_walks_the_lifecycle_phases_in_order() {
        let host = FakeHost::default();
        let mut coordinator = launched(&host, false);
        assert_eq!(coordinator.phase(), AppLifecyclePhase::Launching);

        coordinator.on_primary_started_loading();
        assert_eq!(coordinator.phase(), AppLifecyclePhase::SplashVisible);

        assert!(coordinator.on_splash_finished_loading());
        assert_eq!(coordinator.phase(), AppLifecyclePhase::CheckingForUpdate);

        let decision = coordinator.on_update_check_complete(check("1.0.0", "1.0.0"), no_log);
        assert_eq!(decision, UpdateDecision::NoAction);
        // Update settled but the primary content is still loading.
        assert_eq!(coordinator.phase(), AppLifecyclePhase::CheckingForUpdate);

        coordinator.on_primary_finished_loading(no_log);
        assert_eq!(coordinator.phase(), AppLifecyclePhase::PrimaryVisible);
        assert_eq!(host.count(|c| matches!(c, HostCall::Focus(_))), 1);
    }

    #[test]
    fn swap_is_order_independent_when_load_finishes_first() {
        let host = FakeHost::default();
        let mut coordinator = launched(&host, false);
        coordinator.on_primary_started_loading();
        coordinator.on_splash_finished_loading();

        coordinator.on_primary_finished_loading(no_log);
        assert_ne!(coordinator.phase(), AppLifecyclePhase::PrimaryVisible);

        coordinator.on_update_check_complete(check("1.0.0", "1.0.0"), no_log);
        assert_eq!(coordinator.phase(), AppLifecyclePhase::PrimaryVisible);
    }

    #[test]
    fn update_check_failure_never_blocks_startup() {
        let host = FakeHost::default();
        let mut coordinator = launched(&host, false);
        coordinator.on_primary_started_loading();
        coordinator.on_splash_finished_loading();
        coordinator.on_primary_finished_loading(no_log);

        coordinator.on_update_check_failed("dns lookup failed", no_log);

        assert_eq!(coordinator.phase(), AppLifecyclePhase::PrimaryVisible);
    }

    #[test]
    fn download_keeps_the_splash_until_it_fails() {
        let host = FakeHost::default();
        let mut coordinator = launched(&host, false);
        coordinator.on_primary_started_loading();
        coordinator.on_splash_finished_loading();
        coordinator.on_primary_finished_loading(no_log);

        let decision = coordinator.on_update_check_complete(check("2.0.0", "1.0.0"), no_log);
        assert_eq!(decision, UpdateDecision::Download);
        assert_eq!(coordinator.phase(), AppLifecyclePhase::Downloading);
        assert_eq!(host.count(|c| matches!(c, HostCall::Destroy(_))), 0);

        coordinator.on_download_error("stream reset", no_log);
        assert_eq!(coordinator.phase(), AppLifecyclePhase::PrimaryVisible);
    }

    #[test]
    fn completed_download_proceeds_to_install_without_swapping() {
        let host = FakeHost::default();
        let mut coordinator = launched(&host, false);
        coordinator.on_primary_started_loading();
        coordinator.on_splash_finished_loading();
        coordinator.on_update_check_complete(check("2.0.0", "1.0.0"), no_log);

        coordinator.on_download_progress(40.0);
        assert!(coordinator.on_update_downloaded(no_log));

        // The process restarts into the new version; the splash never swaps.
        assert_eq!(coordinator.phase(), AppLifecyclePhase::Downloading);
        assert_eq!(host.count(|c| matches!(c, HostCall::Show(_))), 1);
    }

    #[test]
    fn install_failure_cause_reaches_the_log() {
        let host = FakeHost::default();
        let mut coordinator = launched(&host, false);
        coordinator.on_primary_started_loading();
        coordinator.on_splash_finished_loading();
        coordinator.on_update_check_complete(check("2.0.0", "1.0.0"), no_log);
        assert!(coordinator.on_update_downloaded(no_log));

        let logged = RefCell::new(Vec::new());
        coordinator.on_download_error("install failed: permission denied", |m| {
            logged.borrow_mut().push(m.to_string())
        });

        assert!(logged
            .borrow()
            .iter()
            .any(|m| m.contains("install failed: permission denied")));
        assert_eq!(coordinator.update_phase(), UpdateFlowPhase::Failed);
        // The app runs on; the user still reaches the primary window.
        coordinator.on_primary_finished_loading(no_log);
        assert_eq!(coordinator.phase(), AppLifecyclePhase::PrimaryVisible);
    }

    #[test]
    fn all_windows_closed_terminates_per_platform_policy() {
        let host = FakeHost::default();
        let mut coordinator = launched(&host, false);
        coordinator.on_window_destroyed(WindowKind::Splash, no_log);
        let should_exit = coordinator.on_window_destroyed(WindowKind::Primary, no_log);
        assert!(should_exit);
        assert_eq!(coordinator.phase(), AppLifecyclePhase::Terminated);

        let host = FakeHost::default();
        let mut coordinator = launched(&host, true);
        coordinator.on_window_destroyed(WindowKind::Splash, no_log);
        assert!(!coordinator.on_window_destroyed(WindowKind::Primary, no_log));
        assert_eq!(coordinator.phase(), AppLifecyclePhase::Terminated);
    }

    #[test]
    fn reactivation_creates_exactly_one_fresh_window_of_each_kind() {
        let host = FakeHost::default();
        let mut coordinator = launched(&host, true);
        coordinator.on_window_destroyed(WindowKind::Splash, no_log);
        coordinator.on_window_destroyed(WindowKind::Primary, no_log);
        assert!(!coordinator.has_primary());

        let relaunched = coordinator.on_reactivate(no_log).expect("reactivate");
        assert!(relaunched);
        assert_eq!(coordinator.phase(), AppLifecyclePhase::Launching);
        assert!(coordinator.has_primary());
        assert_eq!(host.count(|c| matches!(c, HostCall::CreateSplash(_))), 2);
        assert_eq!(host.count(|c| matches!(c, HostCall::CreatePrimary(_))), 2);
    }

    #[test]
    fn reactivation_with_a_live_primary_is_a_no_op() {
        let host = FakeHost::default();
        let mut coordinator = launched(&host, true);

        let relaunched = coordinator.on_reactivate(no_log).expect("reactivate");

        assert!(!relaunched);
        assert_eq!(host.count(|c| matches!(c, HostCall::CreatePrimary(_))), 1);
    }

    #[test]
    fn relaunch_during_a_download_swaps_without_waiting_for_it() {
        let host = FakeHost::default();
        let mut coordinator = launched(&host, true);
        coordinator.on_splash_finished_loading();
        coordinator.on_update_check_complete(check("2.0.0", "1.0.0"), no_log);
        assert!(coordinator.is_update_download_in_flight());

        coordinator.on_window_destroyed(WindowKind::Splash, no_log);
        coordinator.on_window_destroyed(WindowKind::Primary, no_log);
        coordinator.on_reactivate(no_log).expect("reactivate");

        // The new launch still checks; completion reports the running
        // download and settles immediately instead of holding the splash.
        assert!(coordinator.on_splash_finished_loading());
        let mut check = check("2.0.0", "1.0.0");
        if let Some(check) = check.as_mut() {
            check.has_download_in_flight = true;
        }
        let decision = coordinator.on_update_check_complete(check, no_log);
        assert_eq!(decision, UpdateDecision::AlreadyDownloading);
        assert!(coordinator.is_update_download_in_flight());

        coordinator.on_primary_finished_loading(no_log);
        assert_eq!(coordinator.phase(), AppLifecyclePhase::PrimaryVisible);
    }

    #[test]
    fn relaunch_runs_a_fresh_update_check() {
        let host = FakeHost::default();
        let mut coordinator = launched(&host, true);
        coordinator.on_splash_finished_loading();
        coordinator.on_update_check_complete(check("1.0.0", "1.0.0"), no_log);

        coordinator.on_window_destroyed(WindowKind::Splash, no_log);
        coordinator.on_window_destroyed(WindowKind::Primary, no_log);
        coordinator.on_reactivate(no_log).expect("reactivate");

        assert!(
            coordinator.on_splash_finished_loading(),
            "a relaunch checks for updates again"
        );
    }
}
