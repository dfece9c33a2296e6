use std::{
    env,
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use chrono::Local;

use crate::{CONSOLE_LOG_PREFIX, DESKTOP_LOG_FILE, SHELL_DATA_DIR_NAME};

pub(crate) fn default_log_root_dir() -> Option<PathBuf> {
    home::home_dir().map(|home| home.join(SHELL_DATA_DIR_NAME))
}

pub(crate) fn resolve_desktop_log_path(root_dir: Option<PathBuf>, log_file_name: &str) -> PathBuf {
    match root_dir {
        Some(root) => root.join("logs").join(log_file_name),
        None => env::temp_dir().join(log_file_name),
    }
}

fn format_log_line(timestamp: &str, message: &str) -> String {
    format!("[{timestamp}] {message}")
}

fn append_log_line(path: &Path, line: &str) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|error| {
            format!(
                "Failed to create log directory {}: {}",
                parent.display(),
                error
            )
        })?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|error| format!("Failed to open log file {}: {}", path.display(), error))?;
    writeln!(file, "{line}")
        .map_err(|error| format!("Failed to write log file {}: {}", path.display(), error))
}

pub(crate) fn append_desktop_log(message: &str) {
    println!("{CONSOLE_LOG_PREFIX} {message}");

    let path = resolve_desktop_log_path(default_log_root_dir(), DESKTOP_LOG_FILE);
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string();
    let _ = append_log_line(&path, &format_log_line(&timestamp, message));
}
