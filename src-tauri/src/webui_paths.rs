use std::path::{Path, PathBuf};

use tauri::{AppHandle, Manager};
use url::Url;

use crate::{LaunchMode, DEVELOPMENT_WEB_DIR, PACKAGED_WEB_DIR, WEB_INDEX_FILE};

fn join_all(base: &Path, segments: &[&str]) -> PathBuf {
    segments
        .iter()
        .fold(base.to_path_buf(), |path, segment| path.join(segment))
}

/// Packaged bundles carry the web build as a resource under `app/web`; source
/// checkouts keep it next to the host crate under `build/web`.
pub(crate) fn resolve_web_index_path(
    launch_mode: LaunchMode,
    resources_root: &Path,
    script_dir: &Path,
) -> PathBuf {
    let web_dir = match launch_mode {
        LaunchMode::Packaged => join_all(resources_root, &PACKAGED_WEB_DIR),
        LaunchMode::Development => join_all(script_dir, &DEVELOPMENT_WEB_DIR),
    };
    web_dir.join(WEB_INDEX_FILE)
}

pub(crate) fn host_script_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

pub(crate) fn resolve_web_index_for_app(
    app_handle: &AppHandle,
    launch_mode: LaunchMode,
) -> Result<PathBuf, String> {
    let resources_root = app_handle
        .path()
        .resource_dir()
        .map_err(|error| format!("Failed to resolve resource directory: {error}"))?;
    Ok(resolve_web_index_path(
        launch_mode,
        &resources_root,
        &host_script_dir(),
    ))
}

pub(crate) fn index_path_to_url(index_path: &Path) -> Result<Url, String> {
    Url::from_file_path(index_path).map_err(|()| {
        format!(
            "Web index path is not absolute: {}",
            index_path.display()
        )
    })
}
