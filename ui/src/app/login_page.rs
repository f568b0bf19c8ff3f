use dioxus::prelude::*;

use crate::components::forms::LoginForm;
use crate::features::login::{LoginAction, LoginState};

const LOGIN_CSS: Asset = asset!("/assets/styling/login.css");

#[component]
pub fn LoginPage() -> Element {
    let mut state = use_signal(LoginState::default);

    // Dispatch function for actions - using in-place reduction to preserve Dioxus Signal reactivity
    let dispatch = EventHandler::new(move |action: LoginAction| {
        state.with_mut(|s| {
            s.reduce_in_place(action);
        });
    });

    rsx! {
        document::Link { rel: "stylesheet", href: LOGIN_CSS }

        div {
            class: "login-container",

            div {
                class: "title-container",
                h1 {
                    class: "page-title",
                    "Attendance Anomaly Checker"
                }
                p {
                    class: "page-subtitle",
                    "Sign in to review attendance sheets"
                }
            }

            LoginForm {
                state: state,
                dispatch: dispatch
            }
        }
    }
}
