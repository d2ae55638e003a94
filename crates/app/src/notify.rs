use shared_ui::{ToastOptions, Toasts};

/// Fire-and-forget user notifications.
pub trait Notifier {
    fn success(&self, message: String);
    fn error(&self, message: String);
}

/// [`Notifier`] backed by the in-app toast stack.
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    toasts: Toasts,
}

impl ToastNotifier {
    pub fn new(toasts: Toasts) -> Self {
        Self { toasts }
    }
}

impl Notifier for ToastNotifier {
    fn success(&self, message: String) {
        self.toasts.success(message, ToastOptions::new());
    }

    fn error(&self, message: String) {
        self.toasts.error(message, ToastOptions::new());
    }
}

/// Greeting for a freshly created account.
pub fn welcome_message(user_id: &str) -> String {
    format!("Welcome, {user_id}! Your account has been created.")
}

/// Greeting for an account that already existed.
pub fn welcome_back_message(user_id: &str) -> String {
    format!("Welcome back, {user_id}!")
}
