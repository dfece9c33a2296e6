use std::sync::atomic::{AtomicUsize, Ordering};

use crate::PlatformFamily;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ActivationDecision {
    CreateWindow,
    Ignore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AllWindowsClosedDecision {
    Quit,
    KeepRunning,
}

#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
fn decide_activation(open_windows: usize) -> ActivationDecision {
    if open_windows == 0 {
        ActivationDecision::CreateWindow
    } else {
        ActivationDecision::Ignore
    }
}

// macOS apps conventionally stay alive in the dock without windows.
fn decide_all_windows_closed(platform: PlatformFamily) -> AllWindowsClosedDecision {
    match platform {
        PlatformFamily::MacOs => AllWindowsClosedDecision::KeepRunning,
        PlatformFamily::Other => AllWindowsClosedDecision::Quit,
    }
}

/// Owns the shell's window bookkeeping. Registered as managed state and
/// consulted by the run-loop handlers instead of querying ambient globals.
#[derive(Debug)]
pub(crate) struct LifecycleController {
    platform: PlatformFamily,
    open_windows: AtomicUsize,
}

impl LifecycleController {
    pub(crate) fn new(platform: PlatformFamily) -> Self {
        Self {
            platform,
            open_windows: AtomicUsize::new(0),
        }
    }

    pub(crate) fn window_created(&self) -> usize {
        self.open_windows.fetch_add(1, Ordering::AcqRel) + 1
    }

    pub(crate) fn window_destroyed(&self) -> usize {
        let previous = self
            .open_windows
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |count| {
                Some(count.saturating_sub(1))
            })
            .unwrap_or(0);
        previous.saturating_sub(1)
    }

    pub(crate) fn open_window_count(&self) -> usize {
        self.open_windows.load(Ordering::Acquire)
    }

    #[cfg_attr(not(target_os = "macos"), allow(dead_code))]
    pub(crate) fn decide_activation(&self) -> ActivationDecision {
        decide_activation(self.open_window_count())
    }

    pub(crate) fn decide_all_windows_closed(&self) -> AllWindowsClosedDecision {
        decide_all_windows_closed(self.platform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activation_creates_window_only_when_none_open() {
        assert_eq!(decide_activation(0), ActivationDecision::CreateWindow);
        assert_eq!(decide_activation(1), ActivationDecision::Ignore);
        assert_eq!(decide_activation(3), ActivationDecision::Ignore);
    }

    #[test]
    fn all_windows_closed_quits_except_on_macos() {
        assert_eq!(
            decide_all_windows_closed(PlatformFamily::Other),
            AllWindowsClosedDecision::Quit
        );
        assert_eq!(
            decide_all_windows_closed(PlatformFamily::MacOs),
            AllWindowsClosedDecision::KeepRunning
        );
    }

    #[test]
    fn controller_tracks_window_count_across_activations() {
        let controller = LifecycleController::new(PlatformFamily::MacOs);
        assert_eq!(controller.decide_activation(), ActivationDecision::CreateWindow);

        assert_eq!(controller.window_created(), 1);
        assert_eq!(controller.decide_activation(), ActivationDecision::Ignore);

        assert_eq!(controller.window_destroyed(), 0);
        assert_eq!(controller.decide_activation(), ActivationDecision::CreateWindow);
    }

    #[test]
    fn controller_window_destroyed_never_underflows() {
        let controller = LifecycleController::new(PlatformFamily::Other);
        assert_eq!(controller.window_destroyed(), 0);
        assert_eq!(controller.open_window_count(), 0);
    }

    #[test]
    fn controller_uses_its_platform_for_quit_policy() {
        let mac = LifecycleController::new(PlatformFamily::MacOs);
        let other = LifecycleController::new(PlatformFamily::Other);
        assert_eq!(
            mac.decide_all_windows_closed(),
            AllWindowsClosedDecision::KeepRunning
        );
        assert_eq!(
            other.decide_all_windows_closed(),
            AllWindowsClosedDecision::Quit
        );
    }
}
