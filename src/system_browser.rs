use std::process::{Command, Stdio};

/// Hand a URL to the platform's default browser. The caller is responsible
/// for validating the URL first (see `navigation_policy::parse_openable_url`).
pub(crate) fn open_in_system_browser(url: &str) -> Result<(), String> {
    let (program, args): (&str, Vec<&str>) = if cfg!(target_os = "macos") {
        ("open", vec![url])
    } else if cfg!(target_os = "windows") {
        ("rundll32", vec!["url.dll,FileProtocolHandler", url])
    } else if cfg!(unix) {
        ("xdg-open", vec![url])
    } else {
        return Err("Opening external URLs is not supported on this platform.".to_string());
    };

    Command::new(program)
        .args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
        .map_err(|error| format!("Failed to run '{program}': {error}"))
}
