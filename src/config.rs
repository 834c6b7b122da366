use web_sys::window;

/// Contact submissions post back to the hosting page's own path.
pub fn form_endpoint() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}
