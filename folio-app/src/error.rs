//! Browser binding errors.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Result type for binding operations.
pub type AppResult<T> = Result<T, AppError>;

/// Errors raised while mounting onto the page.
///
/// Only mounting can fail. Once mounted, animation never reports errors;
/// anything that goes wrong leaves the element in its rendered end state.
#[derive(Debug, Error)]
pub enum AppError {
    /// No global `window`.
    #[error("No window object")]
    NoWindow,

    /// `window.document` is missing.
    #[error("No document object")]
    NoDocument,

    /// The mount selector matched nothing.
    #[error("Mount root '{0}' not found")]
    RootNotFound(String),

    /// `mount` called twice without `unmount`.
    #[error("Already mounted")]
    AlreadyMounted,

    /// A DOM call threw.
    #[error("DOM call failed: {0}")]
    Dom(String),
}

impl AppError {
    /// Wrap a thrown JS value.
    pub(crate) fn dom(value: &JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<AppError> for JsValue {
    fn from(err: AppError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
