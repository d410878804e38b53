use axum::{
    extract::{Form, Query, State},
    response::{Html, IntoResponse},
};
use serde::{Deserialize, Serialize};

use crate::local_log;
use crate::navigation::{encoded_redirect, MessageKind, NavigationIntent, StatusQuery};
use crate::server::view;
use crate::utils::sleep;
use crate::WebApp;

#[derive(Debug, Clone, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthSnapshot {
    pub status: &'static str,
    pub environment: String,
    pub local_logging: bool,
    pub uptime_secs: u64,
}

pub async fn login_page(Query(query): Query<StatusQuery>) -> Html<String> {
    let status = query.into_message();
    Html(view::page("Sign in", status.as_ref(), view::login_form()))
}

pub async fn login_submit(
    State(app): State<WebApp>,
    Form(form): Form<LoginForm>,
) -> NavigationIntent {
    // Flat delay on every attempt, successful or not.
    sleep(app.config.app.login_delay_ms).await;

    let username = form.username.trim();
    if username.is_empty() || form.password.is_empty() {
        return encoded_redirect(
            MessageKind::Error,
            "/login",
            Some("Username and password are required"),
        );
    }

    if username == app.config.app.demo_username && form.password == app.config.app.demo_password {
        app.dev_log(&[&"login succeeded for", &username]);
        tracing::info!("User '{}' signed in", username);
        let welcome = format!("Welcome back, {}!", username);
        encoded_redirect(MessageKind::Success, "/dashboard", Some(&welcome))
    } else {
        app.dev_log(&[&"login failed for", &username]);
        tracing::debug!("Rejected sign-in for '{}'", username);
        encoded_redirect(MessageKind::Error, "/login", Some("Invalid credentials"))
    }
}

pub async fn logout(State(app): State<WebApp>) -> NavigationIntent {
    if let Err(e) = local_log!(app.logger, "logout") {
        tracing::warn!("Local log write failed: {}", e);
    }
    encoded_redirect(MessageKind::Success, "/login", Some("You have been signed out"))
}

pub async fn dashboard(Query(query): Query<StatusQuery>) -> Html<String> {
    let status = query.into_message();
    Html(view::page(
        "Dashboard",
        status.as_ref(),
        "<form method=\"post\" action=\"/logout\"><button type=\"submit\">Sign out</button></form>",
    ))
}

pub async fn health(State(app): State<WebApp>) -> impl IntoResponse {
    axum::Json(HealthSnapshot {
        status: "ok",
        environment: app.config.app.environment.to_string(),
        local_logging: app.logger.is_enabled(),
        uptime_secs: app.start_time.elapsed().as_secs(),
    })
}
