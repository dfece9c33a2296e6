use std::{
    borrow::Cow,
    fs, io,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use regex::Regex;
use thiserror::Error;

pub const RELATIVE_BASE_TAG: &str = r#"<base href="./">"#;

static ROOT_BASE_HREF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<base\s+href="/"\s*/?>"#).expect("root base href pattern is valid")
});

#[derive(Debug, Error)]
pub enum PatchError {
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("no <base href=\"/\"> tag found in {}", .path.display())]
    BaseHrefNotFound { path: PathBuf },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchOutcome {
    pub path: PathBuf,
    pub replaced: bool,
}

pub fn contains_root_base_href(html: &str) -> bool {
    ROOT_BASE_HREF.is_match(html)
}

/// Replaces the first root `<base href="/">` with [`RELATIVE_BASE_TAG`].
/// Input without one comes back borrowed and untouched.
pub fn patch_base_href(html: &str) -> Cow<'_, str> {
    ROOT_BASE_HREF.replace(html, RELATIVE_BASE_TAG)
}

/// Rewrites `path` in place. The file is always written back unless `strict`
/// is set and there was nothing to replace.
pub fn patch_index_file(path: &Path, strict: bool) -> Result<PatchOutcome, PatchError> {
    let html = fs::read_to_string(path).map_err(|source| PatchError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let patched = patch_base_href(&html);
    let replaced = matches!(patched, Cow::Owned(_));
    if strict && !replaced {
        return Err(PatchError::BaseHrefNotFound {
            path: path.to_path_buf(),
        });
    }

    fs::write(path, patched.as_bytes()).map_err(|source| PatchError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(PatchOutcome {
        path: path.to_path_buf(),
        replaced,
    })
}
