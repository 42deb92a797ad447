// SPDX-License-Identifier: MIT OR Apache-2.0
//! Browser binding errors.

use thiserror::Error;

/// Errors raised while binding the page to the browser
#[derive(Debug, Error)]
pub enum WebError {
    /// Not running in a window context
    #[error("No global window")]
    NoWindow,

    /// The window has no document
    #[error("Window has no document")]
    NoDocument,

    /// The document has no body
    #[error("Document has no body")]
    NoBody,

    /// A browser API the binding relies on is missing
    #[error("Browser API `{0}` is unavailable")]
    MissingApi(&'static str),

    /// A DOM call threw
    #[error("DOM error: {0}")]
    Js(String),
}

/// Result type for binding operations
pub type Result<T> = std::result::Result<T, WebError>;

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for WebError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[cfg(target_arch = "wasm32")]
impl From<WebError> for wasm_bindgen::JsValue {
    fn from(err: WebError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(WebError::NoBody.to_string(), "Document has no body");
        assert_eq!(
            WebError::Js("SyntaxError".to_string()).to_string(),
            "DOM error: SyntaxError"
        );
    }
}
