use tauri::{Manager, RunEvent, WindowEvent};

use crate::{
    append_desktop_log, lifecycle::LifecycleController, lifecycle_events, logging, main_window,
    ShellConfig, DESKTOP_LOG_FILE,
};

pub(crate) fn run() {
    let config = ShellConfig::detect();

    append_desktop_log(&format!(
        "desktop shell starting: launch_mode={} platform={}",
        config.launch_mode.as_str(),
        config.platform.as_str()
    ));
    append_desktop_log(&format!(
        "desktop log path: {}",
        logging::resolve_desktop_log_path(logging::default_log_root_dir(), DESKTOP_LOG_FILE)
            .display()
    ));

    tauri::Builder::default()
        .manage(LifecycleController::new(config.platform))
        .on_window_event(|window, event| {
            if let WindowEvent::Destroyed = event {
                let lifecycle = window.app_handle().state::<LifecycleController>();
                let remaining = lifecycle.window_destroyed();
                append_desktop_log(&format!(
                    "window destroyed: label={} open_windows={remaining}",
                    window.label()
                ));
            }
        })
        .setup(move |app| {
            let app_handle = app.handle();
            let lifecycle = app_handle.state::<LifecycleController>();
            main_window::open_main_window(app_handle, &config, &lifecycle, append_desktop_log);
            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(move |app_handle, event| match event {
            #[cfg(target_os = "macos")]
            RunEvent::Reopen { .. } => {
                lifecycle_events::handle_activation(app_handle, &config, append_desktop_log);
            }
            RunEvent::ExitRequested { code, api, .. } => {
                lifecycle_events::handle_exit_requested(app_handle, code, &api, append_desktop_log);
            }
            _ => {}
        });
}
