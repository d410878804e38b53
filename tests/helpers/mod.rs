#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{header, HeaderMap, Request, StatusCode};
use tower::ServiceExt;
use webkit_helpers::config::{AppEnvironment, Config};
use webkit_helpers::server::router;
use webkit_helpers::WebApp;

pub fn test_config(environment: &str) -> Config {
    let mut config = Config::default();
    config.app.environment = AppEnvironment::new(environment);
    config.app.login_delay_ms = 0;
    config
}

pub fn setup_app(environment: &str) -> WebApp {
    WebApp::new(test_config(environment))
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
    }
}

/// Drives one request through the full router (layers included) without a socket.
pub async fn send(app: &WebApp, method: &str, uri: &str, form: Option<&str>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match form {
        Some(form) => {
            builder = builder.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
            Body::from(form.to_string())
        }
        None => Body::empty(),
    };

    let response = router(app.clone())
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    TestResponse {
        status,
        headers,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}
