//! Submission flow of the onboarding form, independent of rendering.
//!
//! The component owns the signals; this module owns the ordering:
//! validate, flip the loading flag, make one request, clear the flag,
//! emit one notification, and decide whether the parent hears about it.

use crate::api::{CreateUserOutcome, UserApi};
use crate::notify::{welcome_back_message, welcome_message, Notifier};
use shared_types::UserId;

/// Whether the submit button accepts a click.
pub fn can_submit(raw_user_id: &str, is_loading: bool) -> bool {
    !is_loading && !raw_user_id.trim().is_empty()
}

/// Run one submission.
///
/// `set_loading` receives `true` right before the request and `false` once
/// it settles, on every path that reaches the network. Empty input is
/// reported and returns before either call. Returns the id to hand to the
/// parent on a success-equivalent outcome.
pub async fn submit<A, N>(
    api: &A,
    notifier: &N,
    raw_user_id: &str,
    mut set_loading: impl FnMut(bool),
) -> Option<UserId>
where
    A: UserApi,
    N: Notifier,
{
    let user_id = match UserId::parse(raw_user_id) {
        Ok(user_id) => user_id,
        Err(err) => {
            notifier.error(err.message);
            return None;
        }
    };

    set_loading(true);
    let outcome = api.create_user(&user_id).await;
    set_loading(false);

    report(notifier, user_id, outcome)
}

/// Emit the notification for `outcome` and pass the id through when the
/// outcome is success-equivalent.
pub fn report<N: Notifier>(
    notifier: &N,
    user_id: UserId,
    outcome: CreateUserOutcome,
) -> Option<UserId> {
    match outcome {
        CreateUserOutcome::Created => {
            tracing::info!(user_id = %user_id, "User created");
            notifier.success(welcome_message(user_id.as_str()));
            Some(user_id)
        }
        CreateUserOutcome::AlreadyExists => {
            tracing::info!(user_id = %user_id, "User already exists, resuming");
            notifier.success(welcome_back_message(user_id.as_str()));
            Some(user_id)
        }
        CreateUserOutcome::Failed(err) => {
            notifier.error(err.message);
            None
        }
    }
}
