use serde::Serialize;

/// Whether the shell runs from a finished bundle or from the source tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum LaunchMode {
    Packaged,
    Development,
}

impl LaunchMode {
    /// Dev runs are built without the `custom-protocol` feature.
    pub(crate) fn detect() -> Self {
        if tauri::is_dev() {
            Self::Development
        } else {
            Self::Packaged
        }
    }

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Packaged => "packaged",
            Self::Development => "development",
        }
    }
}

/// Only macOS changes shell behavior, everything else shares one policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum PlatformFamily {
    MacOs,
    Other,
}

impl PlatformFamily {
    pub(crate) fn detect() -> Self {
        if cfg!(target_os = "macos") {
            Self::MacOs
        } else {
            Self::Other
        }
    }

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::MacOs => "macos",
            Self::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ShellConfig {
    pub(crate) launch_mode: LaunchMode,
    pub(crate) platform: PlatformFamily,
}

impl ShellConfig {
    pub(crate) fn detect() -> Self {
        Self {
            launch_mode: LaunchMode::detect(),
            platform: PlatformFamily::detect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_config_serializes_with_lowercase_variants() {
        let config = ShellConfig {
            launch_mode: LaunchMode::Development,
            platform: PlatformFamily::MacOs,
        };

        let json = serde_json::to_string(&config).expect("config should serialize");
        assert_eq!(json, r#"{"launchMode":"development","platform":"macos"}"#);
    }

    #[test]
    fn platform_family_detect_matches_target_os() {
        let expected = if cfg!(target_os = "macos") {
            PlatformFamily::MacOs
        } else {
            PlatformFamily::Other
        };
        assert_eq!(PlatformFamily::detect(), expected);
    }

    #[test]
    fn as_str_matches_serialized_names() {
        assert_eq!(LaunchMode::Packaged.as_str(), "packaged");
        assert_eq!(PlatformFamily::Other.as_str(), "other");
    }
}
