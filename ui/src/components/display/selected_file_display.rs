use dioxus::prelude::*;

use crate::utils::dom::FILE_NAME_ID;

#[derive(Props, PartialEq, Clone)]
pub struct SelectedFileDisplayProps {
    /// `Selected file: ...` or empty
    pub text: String,
    /// Shown under the name when the file type will not be checked
    #[props(!optional)]
    pub hint: Option<String>,
}

#[component]
pub fn SelectedFileDisplay(props: SelectedFileDisplayProps) -> Element {
    rsx! {
        p {
            id: FILE_NAME_ID,
            class: "file-name",
            "{props.text}"
        }
        if let Some(hint) = props.hint {
            p {
                class: "file-hint",
                "⚠ {hint}"
            }
        }
    }
}
