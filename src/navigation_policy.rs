use url::Url;

/// What to do with a top-level navigation request raised by the primary
/// window's content. The primary window never hosts a second top-level
/// document: anything outside the entry origin is denied in-app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NavigationDecision {
    AllowInApp,
    /// Deny in-app and hand the target to the system browser.
    ForwardExternally,
    /// Deny in-app and drop the request (non-web scheme).
    Block,
}

fn is_shell_origin(target: &Url) -> bool {
    // Packaged content is served from the Tauri custom protocol, which
    // surfaces as tauri://localhost (or http(s)://tauri.localhost on
    // Windows).
    target.scheme() == "tauri"
        || matches!(target.host_str(), Some("tauri.localhost"))
}

fn same_origin(a: &Url, b: &Url) -> bool {
    a.scheme() == b.scheme() && a.host_str() == b.host_str() && a.port_or_known_default() == b.port_or_known_default()
}

pub(crate) fn classify_navigation(entry_url: &Url, target: &Url) -> NavigationDecision {
    if is_shell_origin(target) || same_origin(entry_url, target) {
        return NavigationDecision::AllowInApp;
    }
    match target.scheme() {
        "http" | "https" => NavigationDecision::ForwardExternally,
        _ => NavigationDecision::Block,
    }
}

/// Validate a raw URL handed over by web content before it can reach the
/// system browser. Only web URLs are openable.
pub(crate) fn parse_openable_url(raw_url: &str) -> Result<Url, String> {
    let trimmed = raw_url.trim();
    if trimmed.is_empty() {
        return Err("Missing external URL.".to_string());
    }

    let parsed = Url::parse(trimmed).map_err(|error| format!("Invalid URL: {error}"))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(format!(
            "Unsupported URL scheme '{scheme}', only http/https are allowed."
        )),
    }
}

/// Apply a navigation decision. Returns whether the in-app navigation may
/// proceed; a forwarded target reaches the external opener exactly once.
pub(crate) fn apply_navigation_decision<O, F>(
    decision: NavigationDecision,
    target: &Url,
    mut open_external: O,
    log: F,
) -> bool
where
    O: FnMut(&str) -> Result<(), String>,
    F: Fn(&str),
{
    match decision {
        NavigationDecision::AllowInApp => true,
        NavigationDecision::ForwardExternally => {
            if let Err(error) = open_external(target.as_str()) {
                log(&format!(
                    "failed to forward external navigation to {target}: {error}"
                ));
            }
            false
        }
        NavigationDecision::Block => {
            log(&format!("blocked navigation to unsupported target {target}"));
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use url::Url;

    use super::{
        apply_navigation_decision, classify_navigation, parse_openable_url, NavigationDecision,
    };

    fn entry() -> Url {
        Url::parse("http://localhost:3000").expect("parse entry url")
    }

    #[test]
    fn entry_origin_navigation_stays_in_app() {
        let target = Url::parse("http://localhost:3000/settings").expect("parse");
        assert_eq!(
            classify_navigation(&entry(), &target),
            NavigationDecision::AllowInApp
        );
    }

    #[test]
    fn packaged_shell_origin_stays_in_app() {
        for raw in ["tauri://localhost/index.html", "http://tauri.localhost/"] {
            let target = Url::parse(raw).expect("parse");
            assert_eq!(
                classify_navigation(&entry(), &target),
                NavigationDecision::AllowInApp,
                "{raw} must stay in-app"
            );
        }
    }

    #[test]
    fn external_web_targets_are_forwarded_and_others_blocked() {
        let external = Url::parse("https://example.com/docs").expect("parse");
        assert_eq!(
            classify_navigation(&entry(), &external),
            NavigationDecision::ForwardExternally
        );

        let mailto = Url::parse("mailto:team@example.com").expect("parse");
        assert_eq!(
            classify_navigation(&entry(), &mailto),
            NavigationDecision::Block
        );
    }

    #[test]
    fn forwarded_navigation_is_denied_in_app_and_opened_exactly_once() {
        let target = Url::parse("https://example.com/docs").expect("parse");
        let opened = RefCell::new(Vec::new());

        let allowed = apply_navigation_decision(
            NavigationDecision::ForwardExternally,
            &target,
            |url| {
                opened.borrow_mut().push(url.to_string());
                Ok(())
            },
            |_| {},
        );

        assert!(!allowed);
        assert_eq!(opened.borrow().as_slice(), ["https://example.com/docs"]);
    }

    #[test]
    fn failed_forwarding_still_denies_the_navigation() {
        let target = Url::parse("https://example.com").expect("parse");
        let logged = RefCell::new(Vec::new());

        let allowed = apply_navigation_decision(
            NavigationDecision::ForwardExternally,
            &target,
            |_| Err("no handler".to_string()),
            |m| logged.borrow_mut().push(m.to_string()),
        );

        assert!(!allowed);
        assert!(logged.borrow()[0].contains("failed to forward"));
    }

    #[test]
    fn parse_openable_url_accepts_only_web_schemes() {
        assert!(parse_openable_url("https://example.com").is_ok());
        assert!(parse_openable_url("  http://example.com  ").is_ok());
        assert!(parse_openable_url("").is_err());
        assert!(parse_openable_url("file:///etc/passwd").is_err());
        assert!(parse_openable_url("not a url").is_err());
    }
}
