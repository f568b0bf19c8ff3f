use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures talking to the browser environment.
///
/// Handlers log these and carry on; a missing element turns the feature into a no-op
/// instead of taking the page down.
#[derive(Debug, Error)]
pub enum UiError {
    #[error("No window object available")]
    NoWindow,

    #[error("No document object available")]
    NoDocument,

    #[error("Element not found: #{id}")]
    ElementMissing { id: String },

    #[error("Element #{id} is not the expected element type")]
    WrongElementType { id: String },

    #[error("Drop event carried no file list")]
    NoDropData,

    #[error("Navigation to {target} failed: {reason}")]
    Navigation { target: String, reason: String },

    #[error("Could not show message: {reason}")]
    Alert { reason: String },
}

impl UiError {
    pub fn navigation(target: &str, cause: JsValue) -> Self {
        UiError::Navigation {
            target: target.to_string(),
            reason: describe_js_value(&cause),
        }
    }

    pub fn alert(cause: JsValue) -> Self {
        UiError::Alert {
            reason: describe_js_value(&cause),
        }
    }

    /// The page is missing a piece it expected; as opposed to the browser refusing an action
    pub fn is_missing_element(&self) -> bool {
        matches!(
            self,
            UiError::ElementMissing { .. } | UiError::WrongElementType { .. }
        )
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Configuration rejected: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

fn describe_js_value(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

pub type UiResult<T> = Result<T, UiError>;
