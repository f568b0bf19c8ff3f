use dioxus::html::HasFileData;
use dioxus::prelude::*;

use crate::components::display::SelectedFileDisplay;
use crate::features::upload::{FileSelectionAction, FileSelectionState, SelectedFile};
use crate::services::AppConfig;
use crate::utils::dom::{self, DROP_ZONE_ID, FILE_INPUT_ID, UPLOAD_FORM_ID};
use crate::utils::drop_zone_class;
use crate::{console_debug, console_info, console_warn};

/// Drop zone plus hidden file input feeding one selection.
///
/// Clicking the zone opens the file dialog; dropping files onto it or picking them in
/// the dialog both replace the selection, and a drop also becomes the input's file
/// list. Submitting only acknowledges the file.
#[component]
pub fn UploadForm() -> Element {
    let config = use_context::<AppConfig>();
    let mut selection = use_signal(FileSelectionState::default);

    let dispatch = EventHandler::new(move |action: FileSelectionAction| {
        selection.with_mut(|s| {
            s.reduce_in_place(action);
        });
    });

    let accept = config.upload.accept_attribute();
    let hint = selection
        .read()
        .has_unsupported_file(&config.upload.accepted_extensions)
        .then(|| format!("Only {} files can be checked.", config.upload.accepted_label()));

    rsx! {
        form {
            id: UPLOAD_FORM_ID,
            class: "upload-form",
            onsubmit: move |event: FormEvent| {
                event.prevent_default();

                let notice = selection.read().submit();
                console_info!("[Upload] {:?}", notice);
                if let Err(e) = dom::show_alert(&notice.message()) {
                    console_warn!("[Upload] {}", e);
                }
            },

            div {
                id: DROP_ZONE_ID,
                class: drop_zone_class(selection.read().armed),
                onclick: move |_| {
                    if let Err(e) = dom::click_element(FILE_INPUT_ID) {
                        console_warn!("[Upload] Cannot open file dialog: {}", e);
                    }
                },
                ondragover: move |event: DragEvent| {
                    event.prevent_default();
                    // dragover fires continuously; only the first one changes anything
                    if !selection.peek().armed {
                        dispatch.call(FileSelectionAction::DragOver);
                    }
                },
                ondragleave: move |_| {
                    dispatch.call(FileSelectionAction::DragLeave);
                },
                ondrop: move |event: DragEvent| {
                    event.prevent_default();

                    // Keep #fileInput in step with the drop; otherwise re-picking the
                    // file it already holds fires no change event
                    let data = event.data();
                    match data.downcast::<web_sys::DragEvent>() {
                        Some(native) => {
                            if let Err(e) = dom::transfer_dropped_files(native, FILE_INPUT_ID) {
                                console_warn!("[Upload] File input not updated: {}", e);
                            }
                        }
                        None => {
                            console_warn!("[Upload] Drop has no browser event; file input not updated");
                        }
                    }

                    let files = event
                        .files()
                        .map(|engine| SelectedFile::from_names(engine.files()))
                        .unwrap_or_default();
                    console_debug!("[Upload] {} file(s) dropped", files.len());
                    dispatch.call(FileSelectionAction::Dropped(files));
                },

                p {
                    class: "drop-zone-text",
                    "Drag & drop an attendance sheet here, or click to browse"
                }
            }

            input {
                id: FILE_INPUT_ID,
                name: "file",
                r#type: "file",
                accept: "{accept}",
                style: "display: none;",
                onchange: move |event: FormEvent| {
                    let files = event
                        .files()
                        .map(|engine| SelectedFile::from_names(engine.files()))
                        .unwrap_or_default();
                    console_debug!("[Upload] {} file(s) picked", files.len());
                    dispatch.call(FileSelectionAction::DialogChanged(files));
                }
            }

            SelectedFileDisplay {
                text: selection.read().display(),
                hint: hint
            }

            div {
                class: "button-section",
                button {
                    class: "upload-button",
                    r#type: "submit",
                    "Check Attendance"
                }
            }
        }
    }
}
