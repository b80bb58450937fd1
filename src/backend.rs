use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue, Method, StatusCode, Uri},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::{
    path::PathBuf,
    sync::atomic::{AtomicU64, Ordering as AtomicOrdering},
    time::{Instant, SystemTime, UNIX_EPOCH},
};
use tower_http::services::{ServeDir, ServeFile};

const DEFAULT_STATIC_DIR: &str = "dist";
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;
const REQUEST_ID_HEADER: &str = "x-request-id";

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
enum LogLevel {
    Debug,
    Info,
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
        }
    }
}

#[derive(Clone)]
struct HostRuntimeConfig {
    static_dir: PathBuf,
    log_level: LogLevel,
}

impl HostRuntimeConfig {
    fn from_env() -> Self {
        let static_dir = parse_env_non_empty_string("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));
        let log_level = parse_log_level("LOG_LEVEL", DEFAULT_LOG_LEVEL);

        Self {
            static_dir,
            log_level,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    config: HostRuntimeConfig,
    started_at: Instant,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthPayload {
    ok: bool,
    uptime_seconds: u64,
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let port = std::env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let bind_address = format!("0.0.0.0:{port}");
    let config = HostRuntimeConfig::from_env();

    log_event(
        &config,
        LogLevel::Info,
        "host_started",
        serde_json::json!({
            "port": port,
            "static_dir": config.static_dir.display().to_string(),
            "log_level": config.log_level.as_str(),
        }),
    );

    let static_service = ServeDir::new(&config.static_dir)
        .not_found_service(ServeFile::new(config.static_dir.join("index.html")));

    let state = AppState {
        config,
        started_at: Instant::now(),
    };

    let app = Router::new()
        .route("/api/health", get(get_health))
        .fallback_service(static_service)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    println!("server listening on http://127.0.0.1:{port}");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn get_health(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> impl IntoResponse {
    let request_started_at = Instant::now();
    let request_id = resolve_request_id(&headers);

    let payload = HealthPayload {
        ok: true,
        uptime_seconds: state.started_at.elapsed().as_secs(),
    };

    log_event(
        &state.config,
        LogLevel::Info,
        "health_request_complete",
        serde_json::json!({
            "request_id": request_id.as_str(),
            "method": method.as_str(),
            "path": uri.path(),
            "status": StatusCode::OK.as_u16(),
            "duration_ms": request_started_at.elapsed().as_millis(),
        }),
    );

    json_response(StatusCode::OK, payload, cache_control("no-store"), &request_id)
}

fn json_response(
    status: StatusCode,
    payload: impl Serialize,
    cache_control: HeaderValue,
    request_id: &str,
) -> axum::response::Response {
    let mut headers = HeaderMap::new();
    headers.insert(header::CACHE_CONTROL, cache_control);

    if let Ok(request_id_header) = HeaderValue::from_str(request_id) {
        headers.insert(REQUEST_ID_HEADER, request_id_header);
    }

    (status, headers, Json(payload)).into_response()
}

fn cache_control(value: &str) -> HeaderValue {
    HeaderValue::from_str(value).unwrap_or_else(|_| HeaderValue::from_static("no-store"))
}

fn parse_env_non_empty_string(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_log_level(name: &str, default: LogLevel) -> LogLevel {
    parse_env_non_empty_string(name)
        .and_then(|value| parse_log_level_value(&value))
        .unwrap_or(default)
}

fn parse_log_level_value(value: &str) -> Option<LogLevel> {
    match value.to_ascii_lowercase().as_str() {
        "debug" => Some(LogLevel::Debug),
        "info" => Some(LogLevel::Info),
        _ => None,
    }
}

fn now_unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis())
        .unwrap_or(0)
}

fn generate_request_id() -> String {
    let counter = REQUEST_ID_COUNTER.fetch_add(1, AtomicOrdering::Relaxed);
    format!("req-{}-{counter}", now_unix_millis())
}

fn resolve_request_id(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|raw| raw.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
        .unwrap_or_else(generate_request_id)
}

fn log_event(config: &HostRuntimeConfig, level: LogLevel, event: &str, fields: serde_json::Value) {
    if level < config.log_level {
        return;
    }

    let mut payload = serde_json::Map::new();
    payload.insert(
        "ts_ms".to_string(),
        serde_json::Value::Number(serde_json::Number::from(now_unix_millis() as u64)),
    );
    payload.insert(
        "level".to_string(),
        serde_json::Value::String(level.as_str().to_string()),
    );
    payload.insert(
        "event".to_string(),
        serde_json::Value::String(event.to_string()),
    );

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    println!("{}", serde_json::Value::Object(payload));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_level_sorts_below_info() {
        assert!(LogLevel::Debug < LogLevel::Info);
    }

    #[test]
    fn log_level_values_parse_case_insensitively() {
        assert_eq!(parse_log_level_value("debug"), Some(LogLevel::Debug));
        assert_eq!(parse_log_level_value("INFO"), Some(LogLevel::Info));
        assert_eq!(parse_log_level_value("verbose"), None);
        assert_eq!(parse_log_level_value(""), None);
    }

    #[test]
    fn request_id_prefers_the_caller_supplied_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            REQUEST_ID_HEADER,
            HeaderValue::from_static("req-from-upstream"),
        );

        assert_eq!(resolve_request_id(&headers), "req-from-upstream");
    }

    #[test]
    fn request_id_is_generated_when_the_header_is_blank() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("   "));

        let generated = resolve_request_id(&headers);
        assert!(generated.starts_with("req-"));
        assert_ne!(generated.trim(), "");
    }

    #[test]
    fn cache_control_falls_back_to_no_store_on_invalid_input() {
        assert_eq!(
            cache_control("public, max-age=300"),
            HeaderValue::from_static("public, max-age=300")
        );
        assert_eq!(
            cache_control("bad\nvalue"),
            HeaderValue::from_static("no-store")
        );
    }

    #[test]
    fn health_payload_serializes_in_camel_case() {
        let payload = HealthPayload {
            ok: true,
            uptime_seconds: 42,
        };

        let encoded = serde_json::to_value(&payload).expect("payload serializes");
        assert_eq!(encoded["ok"], true);
        assert_eq!(encoded["uptimeSeconds"], 42);
    }
}
