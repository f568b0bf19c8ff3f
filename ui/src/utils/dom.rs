//! Element ids the pages render, and the few direct DOM calls Dioxus does not cover.

use wasm_bindgen::JsCast;
use web_sys::{Document, DragEvent, Element, FileList, HtmlElement, HtmlInputElement, Window};

use crate::services::errors::{UiError, UiResult};

pub const LOGIN_FORM_ID: &str = "loginForm";
pub const ERROR_MESSAGE_ID: &str = "error-message";
pub const LOGOUT_BUTTON_ID: &str = "logout-btn";
pub const UPLOAD_FORM_ID: &str = "uploadForm";
pub const DROP_ZONE_ID: &str = "dropZone";
pub const FILE_INPUT_ID: &str = "fileInput";
pub const FILE_NAME_ID: &str = "fileName";
pub const ANOMALY_TABLE_BODY_ID: &str = "anomalyTableBody";

pub fn window() -> UiResult<Window> {
    web_sys::window().ok_or(UiError::NoWindow)
}

pub fn document() -> UiResult<Document> {
    window()?.document().ok_or(UiError::NoDocument)
}

pub fn element_by_id(id: &str) -> UiResult<Element> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| UiError::ElementMissing { id: id.to_string() })
}

/// Text content of an element. An empty element gives `Some("")`, not `None`.
pub fn element_text(id: &str) -> UiResult<Option<String>> {
    Ok(element_by_id(id)?.text_content())
}

/// Fire a synthetic click, e.g. to open the file dialog behind a hidden input
pub fn click_element(id: &str) -> UiResult<()> {
    let element = element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| UiError::WrongElementType { id: id.to_string() })?;
    element.click();
    Ok(())
}

/// Replace the file list of the `<input type="file">` with this id
pub fn set_input_files(id: &str, files: &FileList) -> UiResult<()> {
    let input = element_by_id(id)?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| UiError::WrongElementType { id: id.to_string() })?;
    input.set_files(Some(files));
    Ok(())
}

/// Move the files carried by a drop into the file input, so a later dialog pick
/// of a different file still registers as a change
pub fn transfer_dropped_files(event: &DragEvent, input_id: &str) -> UiResult<()> {
    let files = event
        .data_transfer()
        .and_then(|transfer| transfer.files())
        .ok_or(UiError::NoDropData)?;
    set_input_files(input_id, &files)
}

/// Blocking modal message
pub fn show_alert(message: &str) -> UiResult<()> {
    window()?
        .alert_with_message(message)
        .map_err(UiError::alert)
}
