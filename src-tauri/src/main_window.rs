use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use tauri::{
    webview::{NewWindowResponse, PageLoadEvent},
    window::Color,
    AppHandle, WebviewUrl, WebviewWindowBuilder,
};

use crate::{
    desktop_bridge, external_links, lifecycle::LifecycleController, webui_paths, ShellConfig,
    MAIN_WINDOW_BACKGROUND_RGBA, MAIN_WINDOW_HEIGHT, MAIN_WINDOW_LABEL, MAIN_WINDOW_TITLE,
    MAIN_WINDOW_WIDTH,
};

fn background_color() -> Color {
    let (red, green, blue, alpha) = MAIN_WINDOW_BACKGROUND_RGBA;
    Color(red, green, blue, alpha)
}

/// Builds the single hidden window and points it at the web bundle. The
/// window is shown by the first finished page load; a bundle that never
/// finishes loading leaves it hidden.
pub(crate) fn create_main_window<F>(
    app_handle: &AppHandle,
    config: &ShellConfig,
    lifecycle: &LifecycleController,
    log: F,
) -> Result<(), String>
where
    F: Fn(&str) + Copy + Send + Sync + 'static,
{
    let index_path = webui_paths::resolve_web_index_for_app(app_handle, config.launch_mode)?;
    let index_url = webui_paths::index_path_to_url(&index_path)?;
    let bridge_script = desktop_bridge::render_bridge_script(config)?;

    log(&format!("loading: {}", index_path.display()));

    let shown = Arc::new(AtomicBool::new(false));
    let window = WebviewWindowBuilder::new(
        app_handle,
        MAIN_WINDOW_LABEL,
        WebviewUrl::External(index_url),
    )
    .title(MAIN_WINDOW_TITLE)
    .inner_size(MAIN_WINDOW_WIDTH, MAIN_WINDOW_HEIGHT)
    .visible(false)
    .background_color(background_color())
    .initialization_script(&bridge_script)
    .on_new_window(move |url, _features| {
        external_links::decide_new_window_request(
            url.as_str(),
            external_links::open_url_with_system_browser,
            log,
        );
        NewWindowResponse::Deny
    })
    .on_page_load(move |window, payload| {
        if !matches!(payload.event(), PageLoadEvent::Finished) {
            return;
        }
        if shown.swap(true, Ordering::AcqRel) {
            return;
        }
        if let Err(error) = window.show() {
            log(&format!("failed to show main window: {error}"));
        }
    })
    .build()
    .map_err(|error| format!("Failed to create main window: {error}"))?;

    #[cfg(not(target_os = "macos"))]
    if let Err(error) = window.remove_menu() {
        log(&format!("failed to remove main window menu: {error}"));
    }
    #[cfg(target_os = "macos")]
    let _ = window;

    let open_windows = lifecycle.window_created();
    log(&format!("main window created: open_windows={open_windows}"));
    Ok(())
}

pub(crate) fn open_main_window<F>(
    app_handle: &AppHandle,
    config: &ShellConfig,
    lifecycle: &LifecycleController,
    log: F,
) where
    F: Fn(&str) + Copy + Send + Sync + 'static,
{
    if let Err(error) = create_main_window(app_handle, config, lifecycle, log) {
        log(&format!("failed to open main window: {error}"));
    }
}
