//! Registration form: wires the form engine to Dioxus signals.

use dioxus::prelude::*;
use form::{Credentials, FormConfig, FormState};

use crate::{FieldRow, SignInPrompt, SuccessPanel};

/// Create the form state for this component, honouring a [`FormConfig`]
/// provided through context (defaults otherwise).
pub fn use_register_form() -> Signal<FormState> {
    let config = try_use_context::<FormConfig>().unwrap_or_default();
    use_signal(move || FormState::with_config(&config))
}

/// Username/password sign-up form.
///
/// `on_submit` receives the credentials once the form has entered its
/// submitted state; from then on the form is replaced by a [`SuccessPanel`].
#[component]
pub fn RegisterForm(
    on_submit: EventHandler<Credentials>,
    #[props(default = "/login".to_string())] sign_in_href: String,
) -> Element {
    let mut state = use_register_form();
    let view = state.read().view();

    if view.submitted {
        return rsx! {
            SuccessPanel { sign_in_href }
        };
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let result = state.write().submit();
        match result {
            Ok(credentials) => on_submit.call(credentials),
            Err(e) => tracing::debug!("submit ignored: {}", e),
        }
    };

    rsx! {
        section {
            class: "register",

            if view.has_error() {
                p {
                    class: "register-error",
                    role: "alert",
                    "{view.error_message}"
                }
            }

            h1 { "Register" }

            form {
                class: "register-form",
                onsubmit: handle_submit,

                for field in view.fields.iter() {
                    FieldRow {
                        key: "{field.id:?}",
                        view: field.clone(),
                        form: state,
                    }
                }

                button {
                    class: "register-submit",
                    r#type: "submit",
                    disabled: !view.submit_enabled,
                    "Sign up"
                }
            }

            SignInPrompt { href: sign_in_href }
        }
    }
}
