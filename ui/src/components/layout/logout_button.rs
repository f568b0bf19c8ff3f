use dioxus::prelude::*;

use crate::services::AppConfig;
use crate::utils::dom::LOGOUT_BUTTON_ID;
use crate::utils::{redirect, Destination};
use crate::{console_error, console_info};

/// Sends the browser back to the login page. There is no session to end.
#[component]
pub fn LogoutButton() -> Element {
    let config = use_context::<AppConfig>();

    rsx! {
        button {
            id: LOGOUT_BUTTON_ID,
            class: "logout-button",
            r#type: "button",
            onclick: move |_| {
                console_info!("Logging out...");
                if let Err(e) = redirect(Destination::Login, &config.routes) {
                    console_error!("[Logout] {}", e);
                }
            },
            "Logout"
        }
    }
}
