//! One labelled input of the sign-up form, with its indicators and help text.

use dioxus::prelude::*;
use form::{descriptor, FieldEvent, FieldView, FormState};

use crate::icons::{FaCheck, FaCircleInfo, FaXmark};
use crate::Icon;

/// Renders the field described by `view.id`.
///
/// Presentation details come from the static descriptor table; everything that
/// changes per render comes from `view`. Input, focus and blur are forwarded to
/// `form` as [`FieldEvent`]s.
#[component]
pub fn FieldRow(view: FieldView, mut form: Signal<FormState>) -> Element {
    let field = descriptor(view.id);
    let id = view.id;
    let (first_line, other_lines) = match field.help.split_first() {
        Some((first, rest)) => (*first, rest),
        None => ("", &[][..]),
    };

    rsx! {
        div {
            class: "field-row",

            label {
                r#for: field.dom_id,
                class: "field-label",
                "{field.label}"
                span {
                    class: if view.show_tick { "indicator-tick" } else { "indicator-tick hidden" },
                    Icon { icon: FaCheck, width: 14, height: 14 }
                }
                span {
                    class: if view.show_cross { "indicator-cross" } else { "indicator-cross hidden" },
                    Icon { icon: FaXmark, width: 14, height: 14 }
                }
            }

            input {
                id: field.dom_id,
                class: "field-input",
                r#type: field.input.as_str(),
                name: field.name,
                value: "{view.value}",
                autocomplete: "off",
                required: true,
                aria_invalid: if view.invalid { "true" } else { "false" },
                aria_describedby: field.note_id,
                onfocus: move |_| {
                    form.write().handle(FieldEvent::Focus(id));
                },
                onblur: move |_| {
                    form.write().handle(FieldEvent::Blur(id));
                },
                oninput: move |evt: FormEvent| {
                    form.write().handle(FieldEvent::Input(id, evt.value()));
                },
            }

            p {
                id: field.note_id,
                class: if view.show_instructions { "field-note" } else { "field-note hidden" },
                span {
                    class: "field-note-line",
                    Icon { icon: FaCircleInfo, width: 12, height: 12 }
                    "{first_line}"
                }
                for line in other_lines.iter() {
                    span {
                        class: "field-note-line",
                        "{line}"
                    }
                }
            }
        }
    }
}
