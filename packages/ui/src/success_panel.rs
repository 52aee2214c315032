use dioxus::prelude::*;

/// Shown in place of the form once registration has been submitted.
#[component]
pub fn SuccessPanel(#[props(default = "/login".to_string())] sign_in_href: String) -> Element {
    rsx! {
        section {
            class: "register",
            h1 { "Success!" }
            p {
                a {
                    href: "{sign_in_href}",
                    "Sign in"
                }
            }
        }
    }
}
