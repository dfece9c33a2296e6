use std::process::{Command, Stdio};

/// Outcome of a content-initiated request for a new window. The shell never
/// hosts secondary windows, so every variant denies the in-app window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NewWindowDecision {
    DenyOpenedExternally,
    DenyExternalOpenFailed,
}

pub(crate) fn decide_new_window_request<O, F>(url: &str, open: O, log: F) -> NewWindowDecision
where
    O: FnOnce(&str) -> Result<(), String>,
    F: Fn(&str),
{
    match open(url) {
        Ok(()) => {
            log(&format!("opened new-window target externally: {url}"));
            NewWindowDecision::DenyOpenedExternally
        }
        Err(error) => {
            log(&format!(
                "failed to open new-window target externally: {url}: {error}"
            ));
            NewWindowDecision::DenyExternalOpenFailed
        }
    }
}

#[cfg(target_os = "macos")]
pub(crate) fn open_url_with_system_browser(url: &str) -> Result<(), String> {
    Command::new("open")
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
        .map_err(|error| format!("Failed to run 'open': {error}"))
}

#[cfg(target_os = "windows")]
pub(crate) fn open_url_with_system_browser(url: &str) -> Result<(), String> {
    Command::new("rundll32")
        .args(["url.dll,FileProtocolHandler", url])
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
        .map_err(|error| format!("Failed to run 'rundll32': {error}"))
}

#[cfg(all(unix, not(target_os = "macos")))]
pub(crate) fn open_url_with_system_browser(url: &str) -> Result<(), String> {
    Command::new("xdg-open")
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
        .map_err(|error| format!("Failed to run 'xdg-open': {error}"))
}

#[cfg(not(any(target_os = "macos", target_os = "windows", unix)))]
pub(crate) fn open_url_with_system_browser(_url: &str) -> Result<(), String> {
    Err("Opening external URLs is not supported on this platform.".to_string())
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    fn no_log(_: &str) {}

    #[test]
    fn decide_new_window_request_hands_exact_url_to_opener() {
        let targets = [
            "https://example.com/docs?page=2#intro",
            "http://127.0.0.1:8080/",
            "mailto:team@example.com",
            "file:///tmp/report.pdf",
        ];

        for target in targets {
            let opened = RefCell::new(Vec::new());
            let decision = decide_new_window_request(
                target,
                |url| {
                    opened.borrow_mut().push(url.to_string());
                    Ok(())
                },
                no_log,
            );

            assert_eq!(decision, NewWindowDecision::DenyOpenedExternally);
            assert_eq!(opened.into_inner(), vec![target.to_string()]);
        }
    }

    #[test]
    fn decide_new_window_request_still_denies_when_opener_fails() {
        let logs = RefCell::new(Vec::new());
        let decision = decide_new_window_request(
            "https://example.com",
            |_| Err("no handler".to_string()),
            |line| logs.borrow_mut().push(line.to_string()),
        );

        assert_eq!(decision, NewWindowDecision::DenyExternalOpenFailed);
        assert!(logs.borrow()[0].contains("no handler"));
    }
}
