use crate::ShellConfig;

const DESKTOP_BRIDGE_SCRIPT: &str = include_str!("../bridge/desktop-bridge.js");

/// Prefixes the bridge with its read-only descriptor. The bridge consumes and
/// deletes the global before page scripts run.
pub(crate) fn render_bridge_script(config: &ShellConfig) -> Result<String, String> {
    let descriptor = serde_json::to_string(config)
        .map_err(|error| format!("Failed to serialize desktop bridge descriptor: {error}"))?;
    Ok(format!(
        "globalThis.__WEBSHELL_DESKTOP__ = {descriptor};\n{DESKTOP_BRIDGE_SCRIPT}"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LaunchMode, PlatformFamily};

    #[test]
    fn render_bridge_script_embeds_descriptor_before_bridge() {
        let script = render_bridge_script(&ShellConfig {
            launch_mode: LaunchMode::Packaged,
            platform: PlatformFamily::Other,
        })
        .expect("bridge script should render");

        assert!(script.starts_with(
            r#"globalThis.__WEBSHELL_DESKTOP__ = {"launchMode":"packaged","platform":"other"};"#
        ));
        assert!(script.ends_with(DESKTOP_BRIDGE_SCRIPT));
    }

    #[test]
    fn bridge_script_exposes_frozen_descriptor_only() {
        assert!(DESKTOP_BRIDGE_SCRIPT.contains("webshellDesktop"));
        assert!(DESKTOP_BRIDGE_SCRIPT.contains("Object.freeze"));
        assert!(!DESKTOP_BRIDGE_SCRIPT.contains("__TAURI"));
    }
}
