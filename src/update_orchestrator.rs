/// Result of one update check, produced once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct UpdateCheckResult {
    pub(crate) remote_version: String,
    pub(crate) local_version: String,
    pub(crate) has_download_in_flight: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UpdateDecision {
    NoAction,
    Download,
    AlreadyDownloading,
}

/// Ephemeral progress value; each emission supersedes the previous one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct UpdateProgress {
    pub(crate) percent: f64,
}

impl UpdateProgress {
    pub(crate) fn clamped(percent: f64) -> Self {
        Self {
            percent: percent.clamp(0.0, 100.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UpdateFlowPhase {
    Idle,
    Checking,
    /// Terminal for this launch: versions matched, metadata was missing, or
    /// the check failed and was recovered into a no-op.
    NoAction,
    Downloading,
    /// The artifact is on disk and install/restart is in motion; a failed
    /// install drops to `Failed`.
    Installing,
    /// Terminal for this launch: the download or install failed, the app
    /// runs on.
    Failed,
}

/// Explicit observer seam registered by the startup coordinator; there is no
/// ambient event bus between the update flow and the rest of the shell.
pub(crate) trait UpdateObserver {
    fn on_progress(&self, progress: UpdateProgress);
    fn on_downloaded(&self);
    fn on_error(&self, cause: &str);
}

/// Version comparison is exact string inequality, not a semantic-version
/// ordering. A check with no remote metadata never triggers a download.
pub(crate) fn decide(check: Option<&UpdateCheckResult>) -> UpdateDecision {
    let Some(check) = check else {
        return UpdateDecision::NoAction;
    };
    if check.remote_version == check.local_version {
        return UpdateDecision::NoAction;
    }
    if check.has_download_in_flight {
        return UpdateDecision::AlreadyDownloading;
    }
    UpdateDecision::Download
}

/// Drives check -> download -> install for one launch. One best-effort
/// attempt per launch; failures never block startup and are never retried.
pub(crate) struct UpdateOrchestrator {
    phase: UpdateFlowPhase,
    observer: Option<Box<dyn UpdateObserver + Send>>,
}

impl UpdateOrchestrator {
    pub(crate) fn new() -> Self {
        Self {
            phase: UpdateFlowPhase::Idle,
            observer: None,
        }
    }

    pub(crate) fn set_observer(&mut self, observer: Box<dyn UpdateObserver + Send>) {
        self.observer = Some(observer);
    }

    pub(crate) fn phase(&self) -> UpdateFlowPhase {
        self.phase
    }

    pub(crate) fn is_downloading(&self) -> bool {
        self.phase == UpdateFlowPhase::Downloading
    }

    /// A fresh launch restarts the flow unless a download from a previous
    /// launch attempt is still in flight; downloads are never cancelled.
    pub(crate) fn reset_for_launch(&mut self) {
        match self.phase {
            UpdateFlowPhase::Downloading | UpdateFlowPhase::Installing => {}
            _ => self.phase = UpdateFlowPhase::Idle,
        }
    }

    /// Start a check from idle. A relaunch may find a download from the
    /// previous launch still in flight; the check runs anyway and its
    /// completion reports `AlreadyDownloading` without touching the phase.
    pub(crate) fn begin_check(&mut self) -> bool {
        match self.phase {
            UpdateFlowPhase::Idle => {
                self.phase = UpdateFlowPhase::Checking;
                true
            }
            UpdateFlowPhase::Downloading => true,
            _ => false,
        }
    }

    pub(crate) fn complete_check<F>(
        &mut self,
        check: Option<UpdateCheckResult>,
        log: F,
    ) -> UpdateDecision
    where
        F: Fn(&str),
    {
        if self.phase == UpdateFlowPhase::Downloading {
            log("update check completed while a download is already in flight");
            return UpdateDecision::AlreadyDownloading;
        }
        if self.phase != UpdateFlowPhase::Checking {
            return UpdateDecision::NoAction;
        }

        let decision = decide(check.as_ref());
        match decision {
            UpdateDecision::Download => {
                self.phase = UpdateFlowPhase::Downloading;
                if let Some(check) = &check {
                    log(&format!(
                        "update available ({} -> {}), downloading now",
                        check.local_version, check.remote_version
                    ));
                }
            }
            UpdateDecision::NoAction | UpdateDecision::AlreadyDownloading => {
                self.phase = UpdateFlowPhase::NoAction;
                log("no update available or already downloaded");
            }
        }
        decision
    }

    /// Transport failures at the check stage are recovered into a no-op so
    /// an update fault can never keep the user away from the primary window.
    pub(crate) fn fail_check<F>(&mut self, cause: &str, log: F) -> UpdateDecision
    where
        F: Fn(&str),
    {
        if self.phase == UpdateFlowPhase::Checking {
            self.phase = UpdateFlowPhase::NoAction;
        }
        log(&format!("error checking for updates: {cause}"));
        UpdateDecision::NoAction
    }

    pub(crate) fn on_progress(&mut self, percent: f64) {
        if self.phase != UpdateFlowPhase::Downloading {
            return;
        }
        if let Some(observer) = &self.observer {
            observer.on_progress(UpdateProgress::clamped(percent));
        }
    }

    pub(crate) fn on_downloaded<F>(&mut self, log: F) -> bool
    where
        F: Fn(&str),
    {
        if self.phase != UpdateFlowPhase::Downloading {
            return false;
        }
        // Install and restart are in motion from here on; the only accepted
        // transition left is a failed install.
        self.phase = UpdateFlowPhase::Installing;
        log("update downloaded, will quit and install now");
        if let Some(observer) = &self.observer {
            observer.on_downloaded();
        }
        true
    }

    /// Covers both a mid-download transport error and a failed install of
    /// the downloaded artifact; the cause always reaches the log and the
    /// observer.
    pub(crate) fn on_download_error<F>(&mut self, cause: &str, log: F)
    where
        F: Fn(&str),
    {
        match self.phase {
            UpdateFlowPhase::Downloading | UpdateFlowPhase::Installing => {}
            _ => return,
        }
        self.phase = UpdateFlowPhase::Failed;
        log(&format!("update failed: {cause}"));
        if let Some(observer) = &self.observer {
            observer.on_error(cause);
        }
    }
}
