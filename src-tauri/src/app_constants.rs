pub(crate) const MAIN_WINDOW_LABEL: &str = "main";
pub(crate) const MAIN_WINDOW_TITLE: &str = "WebShell";
pub(crate) const MAIN_WINDOW_WIDTH: f64 = 1280.0;
pub(crate) const MAIN_WINDOW_HEIGHT: f64 = 720.0;
// Painted before the bundle renders its first frame.
pub(crate) const MAIN_WINDOW_BACKGROUND_RGBA: (u8, u8, u8, u8) = (0, 0, 0, 255);

pub(crate) const WEB_INDEX_FILE: &str = "index.html";
pub(crate) const PACKAGED_WEB_DIR: [&str; 2] = ["app", "web"];
pub(crate) const DEVELOPMENT_WEB_DIR: [&str; 2] = ["build", "web"];

pub(crate) const SHELL_DATA_DIR_NAME: &str = ".webshell-desktop";
pub(crate) const DESKTOP_LOG_FILE: &str = "desktop.log";
pub(crate) const CONSOLE_LOG_PREFIX: &str = "[webshell]";
