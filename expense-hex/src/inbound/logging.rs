//! Middleware that logs every request once its response is ready.

use std::net::SocketAddr;
use std::time::Instant;

use axum::{
    extract::{ConnectInfo, Request},
    http::header::USER_AGENT,
    middleware::Next,
    response::Response,
};

/// Logs method, path, status and duration at `info` for each request.
///
/// The remote address is only known when the server was started with
/// connect info; router-level tests run without it.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let remote_addr = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string());
    let user_agent = request
        .headers()
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);

    let start = Instant::now();
    let response = next.run(request).await;

    tracing::info!(
        %method,
        %path,
        status = response.status().as_u16(),
        duration_ms = start.elapsed().as_millis() as u64,
        remote_addr = remote_addr.as_deref().unwrap_or("-"),
        user_agent = user_agent.as_deref().unwrap_or("-"),
        "HTTP request completed"
    );

    response
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        middleware,
        routing::get,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn lines(&self) -> Vec<Value> {
            let bytes = self.0.lock().unwrap().clone();
            String::from_utf8(bytes)
                .unwrap()
                .lines()
                .map(|line| serde_json::from_str(line).unwrap())
                .collect()
        }
    }

    #[tokio::test]
    async fn test_completed_request_is_logged_with_status_and_duration() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .json()
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let app = Router::new()
            .route("/ping", get(|| async { "pong" }))
            .layer(middleware::from_fn(log_requests));

        let request = Request::builder()
            .uri("/ping")
            .header(USER_AGENT, "expense-cli")
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let request = Request::builder()
            .uri("/missing")
            .body(Body::empty())
            .unwrap();
        app.oneshot(request).await.unwrap();

        let lines: Vec<Value> = logs
            .lines()
            .into_iter()
            .filter(|line| line["fields"]["message"] == "HTTP request completed")
            .collect();
        assert_eq!(lines.len(), 2);

        let ok = &lines[0]["fields"];
        assert_eq!(ok["method"], "GET");
        assert_eq!(ok["path"], "/ping");
        assert_eq!(ok["status"], 200);
        assert!(ok["duration_ms"].is_u64());
        assert_eq!(ok["remote_addr"], "-");
        assert_eq!(ok["user_agent"], "expense-cli");

        let missing = &lines[1]["fields"];
        assert_eq!(missing["path"], "/missing");
        assert_eq!(missing["status"], 404);
    }
}
