use dioxus::prelude::*;

use crate::components::inputs::{InputType, ValidatedInput};
use crate::features::login::{LoginAction, LoginState};
use crate::services::AppConfig;
use crate::utils::dom::{ERROR_MESSAGE_ID, LOGIN_FORM_ID};
use crate::utils::{error_region_class, redirect};
use crate::{console_error, console_info};

#[derive(Props, PartialEq, Clone)]
pub struct LoginFormProps {
    pub state: Signal<LoginState>,
    pub dispatch: EventHandler<LoginAction>,
}

/// Username/password form with format checks on submit.
///
/// A rejected pair shows the reason under the button and stays on the page. An
/// accepted pair clears the reason and reloads into the dashboard.
#[component]
pub fn LoginForm(props: LoginFormProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let config = use_context::<AppConfig>();

    rsx! {
        form {
            id: LOGIN_FORM_ID,
            class: "login-form",
            onsubmit: move |event: FormEvent| {
                event.prevent_default();

                let outcome = state.read().submit_outcome();
                dispatch.call(outcome.action());

                if let Some(destination) = outcome.destination() {
                    console_info!("Login successful! Redirecting...");
                    if let Err(e) = redirect(destination, &config.routes) {
                        console_error!("[Login] {}", e);
                    }
                }
            },

            h2 {
                class: "form-title",
                "Sign in"
            }

            div {
                class: "input-section",
                label {
                    class: "input-label",
                    r#for: "username",
                    "Username:"
                }
                ValidatedInput {
                    name: "username".to_string(),
                    value: state.read().credentials.username.clone(),
                    placeholder: "6-15 letters and numbers".to_string(),
                    input_type: InputType::Text,
                    on_change: move |value: String| {
                        dispatch.call(LoginAction::SetUsername(value));
                    }
                }
            }

            div {
                class: "input-section",
                label {
                    class: "input-label",
                    r#for: "password",
                    "Password:"
                }
                ValidatedInput {
                    name: "password".to_string(),
                    value: state.read().credentials.password.clone(),
                    placeholder: "Enter your password".to_string(),
                    input_type: InputType::Password,
                    on_change: move |value: String| {
                        dispatch.call(LoginAction::SetPassword(value));
                    }
                }
            }

            div {
                class: "button-section",
                button {
                    class: "login-button",
                    r#type: "submit",
                    "Login"
                }
            }

            p {
                id: ERROR_MESSAGE_ID,
                class: error_region_class(state.read().error.is_some()),
                "{state.read().error_text()}"
            }
        }
    }
}
