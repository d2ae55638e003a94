use dioxus::prelude::*;
use shared_ui::{Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle};

pub mod api;
mod components;
pub mod config;
pub mod notify;
pub mod onboarding;

use components::UserSetup;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
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

#[component]
fn App() -> Element {
    // The active user lives in memory only; a reload starts at onboarding.
    let mut current_user = use_signal(|| Option::<String>::None);

    use_hook(|| {
        tracing::info!(
            platform = client_platform(),
            create_user = %config::endpoints().create_user,
            "Runway & Rivets client starting"
        );
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        shared_ui::ToastProvider {
            if let Some(user_id) = current_user() {
                SignedIn {
                    user_id: user_id,
                    on_switch_user: move |_| current_user.set(None),
                }
            } else {
                UserSetup {
                    on_user_created: move |user_id: String| current_user.set(Some(user_id)),
                }
            }
        }
    }
}

/// Landing panel shown once onboarding has handed over a user id.
#[component]
fn SignedIn(user_id: String, on_switch_user: EventHandler<()>) -> Element {
    rsx! {
        div { class: "signed-in-page",
            Card { class: "signed-in-card",
                CardHeader {
                    CardTitle { "Signed in as {user_id}" }
                    CardDescription { "Your preferences and AI settings are saved under this ID." }
                }
                CardContent {
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| on_switch_user.call(()),
                        "Switch user"
                    }
                }
            }
        }
    }
}
