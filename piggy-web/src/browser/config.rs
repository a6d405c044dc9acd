use piggy_shared::config::{ConfigError, FrontendConfig};

/// Id of the optional `<script type="application/json">` element holding
/// configuration overrides.
pub const CONFIG_ELEMENT_ID: &str = "piggy-config";

/// Reads the embedded configuration document, or the build defaults when the
/// page carries none.
pub fn load() -> Result<FrontendConfig, ConfigError> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    match document {
        Some(text) if !text.trim().is_empty() => FrontendConfig::from_json(&text),
        _ => Ok(FrontendConfig::default()),
    }
}
