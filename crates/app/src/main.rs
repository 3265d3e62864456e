use dioxus::prelude::*;
use shared_ui::Link;

mod config;

const LOGO: Asset = asset!("/assets/logo.svg");

fn main() {
    let app_config = config::load_app_config();
    let env_level = std::env::var(config::LOG_LEVEL_ENV).ok();
    let level = config::effective_level(app_config, env_level.as_deref());

    if let Err(e) = dioxus::logger::init(config::tracing_level(level)) {
        eprintln!("[logger] Subscriber already installed: {e}");
    }
    tracing::info!(platform = client_platform(), level = level.as_str(), "launching app");

    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else if cfg!(feature = "mobile") {
        "mobile"
    } else {
        "unknown"
    }
}

/// Root component: logo, a line of instructions and the getting-started link.
#[component]
fn App() -> Element {
    rsx! {
        div { class: "App",
            header { class: "App-header",
                img { src: "{LOGO}", class: "App-logo", alt: "logo" }
                p {
                    "Edit "
                    code { "src/main.rs" }
                    " and save to reload."
                }
                Link {
                    identifier: "myLink",
                    destination: "https://reactjs.org/docs/getting-started.html",
                    label: "Get Started",
                }
            }
        }
    }
}
