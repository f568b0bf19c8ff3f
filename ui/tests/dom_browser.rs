//! Browser tests for the DOM helpers: element text and moving dropped files into the
//! hidden file input.
//!
//! Run with `wasm-pack test --headless --chrome ui`.

#![cfg(target_arch = "wasm32")]

use rollcall_ui::services::UiError;
use rollcall_ui::utils::dom::{self, FILE_INPUT_ID};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{DataTransfer, File, FileList, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

fn file_list(names: &[&str]) -> FileList {
    let transfer = DataTransfer::new().unwrap();
    for name in names {
        let parts = js_sys::Array::of1(&"x".into());
        let file = File::new_with_str_sequence(&parts, name).unwrap();
        transfer.items().add_with_file(&file).unwrap();
    }
    transfer.files().unwrap()
}

fn mount(tag: &str, id: &str) -> web_sys::Element {
    let document = dom::document().unwrap();
    if let Some(old) = document.get_element_by_id(id) {
        old.remove();
    }
    let element = document.create_element(tag).unwrap();
    element.set_id(id);
    if tag == "input" {
        element.set_attribute("type", "file").unwrap();
    }
    document.body().unwrap().append_child(&element).unwrap();
    element
}

#[wasm_bindgen_test]
fn test_dropped_files_become_input_files() {
    let input = mount("input", FILE_INPUT_ID)
        .dyn_into::<HtmlInputElement>()
        .unwrap();

    dom::set_input_files(FILE_INPUT_ID, &file_list(&["B.png", "C.png"])).unwrap();

    let files = input.files().unwrap();
    assert_eq!(files.length(), 2);
    assert_eq!(files.item(0).unwrap().name(), "B.png");
    input.remove();
}

#[wasm_bindgen_test]
fn test_missing_input_is_reported() {
    let err = dom::set_input_files("noSuchInput", &file_list(&["B.png"])).unwrap_err();
    assert!(err.is_missing_element());
}

#[wasm_bindgen_test]
fn test_non_input_element_is_reported() {
    let div = mount("div", "notAnInput");
    let err = dom::set_input_files("notAnInput", &file_list(&["B.png"])).unwrap_err();
    assert!(matches!(err, UiError::WrongElementType { ref id } if id == "notAnInput"));
    div.remove();
}

#[wasm_bindgen_test]
fn test_empty_element_text_is_some_empty() {
    let script = mount("script", "emptyConfig");
    assert_eq!(dom::element_text("emptyConfig").unwrap(), Some(String::new()));

    script.set_text_content(Some(r#"{"routes": {}}"#));
    assert_eq!(
        dom::element_text("emptyConfig").unwrap().as_deref(),
        Some(r#"{"routes": {}}"#)
    );
    script.remove();
}
