//! Sign-in page view. Signing in is handled elsewhere; this screen only
//! closes the loop from the registration form.

use dioxus::prelude::*;

/// Login page component.
#[component]
pub fn Login() -> Element {
    rsx! {
        section {
            class: "register",

            h1 { "Sign in" }

            p { "Signing in is not available yet." }

            div {
                class: "sign-in-prompt",
                span { "Need an account?" }
                a {
                    href: "/",
                    "Register"
                }
            }
        }
    }
}
