use shared_types::{ApiErrorBody, AppError, CreateUserRequest, UserId};

/// How the backend answered a create-user request.
///
/// `AlreadyExists` is not an error: the caller treats it exactly like
/// `Created` apart from the greeting.
#[derive(Debug, Clone, PartialEq)]
pub enum CreateUserOutcome {
    Created,
    AlreadyExists,
    Failed(AppError),
}

/// Backend operations used during onboarding.
#[allow(async_fn_in_trait)]
pub trait UserApi {
    /// Issue exactly one create-user request for `user_id`.
    async fn create_user(&self, user_id: &UserId) -> CreateUserOutcome;
}

/// [`UserApi`] over HTTP: `POST {endpoint}` with a JSON body.
#[derive(Clone)]
pub struct HttpUserApi {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpUserApi {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

impl UserApi for HttpUserApi {
    #[tracing::instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn create_user(&self, user_id: &UserId) -> CreateUserOutcome {
        let response = match self
            .client
            .post(&self.endpoint)
            .json(&CreateUserRequest::from(user_id))
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(error = %e, "Error creating user");
                return CreateUserOutcome::Failed(AppError::transport(e.to_string()));
            }
        };

        let status = response.status().as_u16();
        match response.text().await {
            Ok(body) => classify_response(status, &body),
            Err(e) => {
                tracing::error!(error = %e, status, "Error reading create-user response");
                CreateUserOutcome::Failed(AppError::transport(e.to_string()))
            }
        }
    }
}

/// Map a create-user response to an outcome.
///
/// The body must be JSON whatever the status; anything else is a transport
/// failure carrying the decoder's message. 2xx is `Created`, 409 is
/// `AlreadyExists`, every other status is a server error whose message
/// comes from the body's `error` field when present.
pub fn classify_response(status: u16, body: &str) -> CreateUserOutcome {
    let data: serde_json::Value = match serde_json::from_str(body) {
        Ok(data) => data,
        Err(e) => {
            tracing::error!(error = %e, status, "Error creating user: response was not JSON");
            return CreateUserOutcome::Failed(AppError::transport(e.to_string()));
        }
    };

    match status {
        200..=299 => CreateUserOutcome::Created,
        409 => CreateUserOutcome::AlreadyExists,
        _ => {
            let err = AppError::server(ApiErrorBody::message_from(&data));
            tracing::error!(status, error = %err, "Error creating user");
            CreateUserOutcome::Failed(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::post, Json, Router};
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};
    use shared_types::{AppErrorKind, CREATE_USER_FALLBACK};
    use std::sync::{Arc, Mutex};

    type Recorded = Arc<Mutex<Vec<Value>>>;

    /// Serve a fake backend on an ephemeral port. Every accepted request
    /// body is recorded and answered with `status` and `body`.
    async fn spawn_backend(status: StatusCode, body: &'static str) -> (String, Recorded) {
        let recorded: Recorded = Arc::new(Mutex::new(Vec::new()));
        let sink = recorded.clone();

        let app = Router::new().route(
            "/api/users",
            post(move |Json(payload): Json<Value>| {
                let sink = sink.clone();
                async move {
                    sink.lock().unwrap().push(payload);
                    (status, body)
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{addr}/api/users"), recorded)
    }

    fn id(raw: &str) -> UserId {
        UserId::parse(raw).unwrap()
    }

    // ── classify_response ────────────────────────────────────────────

    #[test]
    fn created_on_2xx() {
        assert_eq!(
            classify_response(200, r#"{"user_id":"alice"}"#),
            CreateUserOutcome::Created
        );
        assert_eq!(classify_response(201, "{}"), CreateUserOutcome::Created);
    }

    #[test]
    fn already_exists_on_409() {
        assert_eq!(
            classify_response(409, r#"{"error":"User already exists"}"#),
            CreateUserOutcome::AlreadyExists
        );
    }

    #[test]
    fn server_error_uses_body_message() {
        match classify_response(500, r#"{"error":"db down"}"#) {
            CreateUserOutcome::Failed(err) => {
                assert_eq!(err.kind, AppErrorKind::ServerError);
                assert_eq!(err.message, "db down");
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn server_error_without_message_falls_back() {
        match classify_response(400, r#"{"detail":"nope"}"#) {
            CreateUserOutcome::Failed(err) => assert_eq!(err.message, CREATE_USER_FALLBACK),
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn non_json_body_is_transport_failure_even_on_2xx() {
        for status in [200, 409, 502] {
            match classify_response(status, "<html>Bad Gateway</html>") {
                CreateUserOutcome::Failed(err) => {
                    assert_eq!(err.kind, AppErrorKind::TransportError);
                    assert!(!err.message.is_empty());
                }
                other => panic!("expected failure for {status}, got {other:?}"),
            }
        }
    }

    // ── HttpUserApi against a live socket ────────────────────────────

    #[tokio::test]
    async fn posts_trimmed_user_id_as_json() {
        let (endpoint, recorded) = spawn_backend(StatusCode::CREATED, r#"{"ok":true}"#).await;
        let api = HttpUserApi::new(endpoint);

        let outcome = api.create_user(&id("  alice  ")).await;

        assert_eq!(outcome, CreateUserOutcome::Created);
        let bodies = recorded.lock().unwrap().clone();
        assert_eq!(bodies, vec![json!({ "user_id": "alice" })]);
    }

    #[tokio::test]
    async fn conflict_maps_to_already_exists() {
        let (endpoint, recorded) =
            spawn_backend(StatusCode::CONFLICT, r#"{"error":"User already exists"}"#).await;
        let api = HttpUserApi::new(endpoint);

        assert_eq!(
            api.create_user(&id("bob")).await,
            CreateUserOutcome::AlreadyExists
        );
        assert_eq!(recorded.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn server_failure_surfaces_error_field() {
        let (endpoint, _) =
            spawn_backend(StatusCode::INTERNAL_SERVER_ERROR, r#"{"error":"db down"}"#).await;
        let api = HttpUserApi::new(endpoint);

        match api.create_user(&id("carol")).await {
            CreateUserOutcome::Failed(err) => assert_eq!(err.message, "db down"),
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unreachable_backend_is_transport_failure() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let api = HttpUserApi::new(format!("http://{addr}/api/users"));
        match api.create_user(&id("dave")).await {
            CreateUserOutcome::Failed(err) => {
                assert_eq!(err.kind, AppErrorKind::TransportError);
                assert!(!err.message.is_empty());
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }
}
