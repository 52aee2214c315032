use dioxus::prelude::*;

use form::FormConfig;
use views::{Login, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Register {},
    #[route("/login")]
    Login {},
}

/// Form behaviour, baked in at build time.
const SIGNUP_TOML: &str = include_str!("../signup.toml");

fn main() {
    dioxus::logger::init(tracing::Level::INFO).expect("failed to initialise logger");
    dioxus::launch(App);
}

fn load_config() -> FormConfig {
    match FormConfig::from_toml(SIGNUP_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Invalid {}, using defaults: {}", FormConfig::filename(), e);
            FormConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    use_context_provider(load_config);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::REGISTER_CSS }

        Router::<Route> {}
    }
}
