use tauri::{AppHandle, ExitRequestApi, Manager};

use crate::lifecycle::{AllWindowsClosedDecision, LifecycleController};

/// Dock activation: recreate the window only if none is open.
#[cfg(target_os = "macos")]
pub(crate) fn handle_activation<F>(app_handle: &AppHandle, config: &crate::ShellConfig, log: F)
where
    F: Fn(&str) + Copy + Send + Sync + 'static,
{
    use crate::lifecycle::ActivationDecision;

    let lifecycle = app_handle.state::<LifecycleController>();
    match lifecycle.decide_activation() {
        ActivationDecision::CreateWindow => {
            log("activation with no open windows; creating main window");
            crate::main_window::open_main_window(app_handle, config, &lifecycle, log);
        }
        ActivationDecision::Ignore => {}
    }
}

/// Tauri raises an exit request without a code once the last window closes.
/// Explicit exits carry a code and are never held back.
pub(crate) fn handle_exit_requested<F>(
    app_handle: &AppHandle,
    code: Option<i32>,
    api: &ExitRequestApi,
    log: F,
) where
    F: Fn(&str),
{
    if let Some(code) = code {
        log(&format!("exit requested with code {code}"));
        return;
    }

    let lifecycle = app_handle.state::<LifecycleController>();
    match lifecycle.decide_all_windows_closed() {
        AllWindowsClosedDecision::Quit => log("all windows closed; quitting"),
        AllWindowsClosedDecision::KeepRunning => {
            api.prevent_exit();
            log("all windows closed; staying resident");
        }
    }
}
