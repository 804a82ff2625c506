use thiserror::Error;

/// Errors raised while wiring an effect onto the page.
///
/// None of these are fatal for the page as a whole: each initializer logs
/// its own failure and the remaining effects carry on.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("element `{0}` not found")]
    MissingElement(String),

    #[error("2d context unavailable on `{0}`")]
    NoContext(String),

    #[error("javascript error: {0}")]
    Js(String),

    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("typewriter needs at least one phrase")]
    NoPhrases,

    #[error("malformed data-count value {0:?}")]
    InvalidCount(String),

    #[error("frame scheduling failed: {0}")]
    Schedule(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for SiteError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        SiteError::Js(format!("{value:?}"))
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
