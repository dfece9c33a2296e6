#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app_constants;
mod app_runtime;
mod app_types;
mod desktop_bridge;
mod external_links;
mod lifecycle;
mod lifecycle_events;
mod logging;
mod main_window;
mod webui_paths;

pub(crate) use app_constants::*;
pub(crate) use app_types::{LaunchMode, PlatformFamily, ShellConfig};
pub(crate) use logging::append_desktop_log;

fn main() {
    app_runtime::run();
}
