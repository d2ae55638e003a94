use crate::api::HttpUserApi;
use crate::notify::ToastNotifier;
use crate::{config, onboarding};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdArrowRight, LdUser};
use dioxus_free_icons::Icon;
use shared_ui::{
    use_toast, Button, ButtonType, Card, CardContent, CardDescription, CardHeader, CardIcon,
    CardTitle, FieldHint, Input, Label,
};

const NEXT_STEPS: &[&str] = &[
    "Set up your preferred AI provider",
    "Upload images of your items",
    "Generate AI-enhanced listings",
    "List directly to eBay",
];

/// Onboarding form: pick a user id and create (or resume) the account.
///
/// `on_user_created` fires once per successful submission with the trimmed
/// id. A 409 from the backend counts as success. The request runs on this
/// component's scope, so unmounting mid-request drops it and the callback
/// never fires.
#[component]
pub fn UserSetup(on_user_created: EventHandler<String>) -> Element {
    let mut user_id = use_signal(String::new);
    let mut is_loading = use_signal(|| false);
    let notifier = ToastNotifier::new(use_toast());

    let handle_submit = move |evt: FormEvent| async move {
        evt.prevent_default();
        let api = HttpUserApi::new(config::endpoints().create_user);
        let raw = user_id();

        let created =
            onboarding::submit(&api, &notifier, &raw, |busy| is_loading.set(busy)).await;
        if let Some(created) = created {
            on_user_created.call(created.into_inner());
        }
    };

    let submit_disabled = !onboarding::can_submit(&user_id.read(), is_loading());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./user_setup.css") }

        div { class: "setup-page",
            Card { class: "setup-card",
                CardHeader { class: "setup-header",
                    CardIcon {
                        Icon::<LdUser> { icon: LdUser, width: 24, height: 24 }
                    }
                    CardTitle { "Welcome to Runway & Rivets" }
                    CardDescription {
                        "Create your account to start listing vintage items with AI assistance"
                    }
                }

                CardContent {
                    form { class: "setup-form", onsubmit: handle_submit,
                        div { class: "setup-field",
                            Label { html_for: "userId", "Choose a User ID" }
                            Input {
                                id: "userId",
                                placeholder: "e.g., john_collector",
                                value: user_id(),
                                disabled: is_loading(),
                                on_input: move |e: FormEvent| user_id.set(e.value()),
                            }
                            FieldHint { "This will be used to save your preferences and AI settings" }
                        }

                        SubmitButton { is_loading: is_loading(), disabled: submit_disabled }
                    }

                    NextSteps {}
                }
            }
        }
    }
}

/// Full-width submit button; swaps to a spinner while a request is in flight.
#[component]
pub fn SubmitButton(is_loading: bool, disabled: bool) -> Element {
    rsx! {
        Button {
            class: "setup-submit",
            button_type: ButtonType::Submit,
            disabled: disabled,
            if is_loading {
                span { class: "setup-spinner", aria_hidden: "true" }
                "Creating Account..."
            } else {
                "Get Started"
                Icon::<LdArrowRight> { icon: LdArrowRight, width: 16, height: 16 }
            }
        }
    }
}

#[component]
fn NextSteps() -> Element {
    rsx! {
        div { class: "setup-next",
            h4 { "What's Next?" }
            ul {
                for step in NEXT_STEPS {
                    li { "{step}" }
                }
            }
        }
    }
}
