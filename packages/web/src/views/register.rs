//! Registration page view.

use dioxus::prelude::*;
use form::{AccountCreator, Credentials, NoopAccountCreator};
use ui::RegisterForm;

/// Register page component.
#[component]
pub fn Register() -> Element {
    let handle_submit = move |credentials: Credentials| {
        spawn(async move {
            if let Err(e) = NoopAccountCreator.create_account(&credentials).await {
                tracing::error!("Failed to create account for {}: {}", credentials.username, e);
            }
        });
    };

    rsx! {
        RegisterForm {
            on_submit: handle_submit,
            sign_in_href: "/login",
        }
    }
}
