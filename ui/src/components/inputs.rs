//! Form inputs bound to reducer state

use dioxus::prelude::*;

#[derive(PartialEq, Clone, Debug)]
pub enum InputType {
    Text,
    Password,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Password => "password",
        }
    }

    pub fn autocomplete(&self) -> &'static str {
        match self {
            InputType::Text => "username",
            InputType::Password => "current-password",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ValidatedInputProps {
    /// Form field name, also used as the element id
    pub name: String,
    pub value: String,
    pub placeholder: String,
    pub input_type: InputType,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn ValidatedInput(props: ValidatedInputProps) -> Element {
    rsx! {
        input {
            class: "input-field",
            id: "{props.name}",
            name: "{props.name}",
            r#type: "{props.input_type.as_str()}",
            autocomplete: "{props.input_type.autocomplete()}",
            value: "{props.value}",
            placeholder: "{props.placeholder}",
            oninput: move |event| props.on_change.call(event.value())
        }
    }
}
