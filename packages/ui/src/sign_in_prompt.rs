use dioxus::prelude::*;

/// "Already registered?" link to the sign-in screen.
#[component]
pub fn SignInPrompt(#[props(default = "/login".to_string())] href: String) -> Element {
    rsx! {
        div {
            class: "sign-in-prompt",
            span { "Already registered?" }
            a {
                href: "{href}",
                "Sign in!"
            }
        }
    }
}
