pub mod mock;

use std::net::TcpListener;
use std::sync::Mutex;
use std::time::Duration;

use actix_web::http::StatusCode;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use brandkit::telemetry;
use mock::CannedResponse;
use payloads::GenAiClient;
use tracing_log::LogTracer;
use tracing_subscriber::util::SubscriberInitExt;

pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_MODEL: &str = "gemini-test";

/// One request as the stub model received it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub api_key: Option<String>,
    /// `Null` if the body was not JSON.
    pub body: serde_json::Value,
}

struct StubState {
    response: CannedResponse,
    requests: Mutex<Vec<RecordedRequest>>,
}

pub struct TestModel {
    pub port: u16,
    /// Client pointed at the stub with the test key and model.
    pub client: GenAiClient,
    state: web::Data<StubState>,
}

impl TestModel {
    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}/v1beta", self.port)
    }

    /// Another client for the stub, with a shorter timeout.
    pub fn client_with_timeout(&self, timeout: Duration) -> GenAiClient {
        GenAiClient::builder()
            .api_key(TEST_API_KEY)
            .base_url(self.base_url())
            .model(TEST_MODEL)
            .timeout(timeout)
            .build()
            .unwrap()
    }

    /// Everything received so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }
}

async fn answer(
    request: HttpRequest,
    body: web::Bytes,
    state: web::Data<StubState>,
) -> HttpResponse {
    let recorded = RecordedRequest {
        path: request.path().to_string(),
        api_key: request
            .headers()
            .get("x-goog-api-key")
            .and_then(|value| value.to_str().ok())
            .map(String::from),
        body: serde_json::from_slice(&body)
            .unwrap_or(serde_json::Value::Null),
    };
    tracing::debug!(path = %recorded.path, "stub model received request");
    state.requests.lock().unwrap().push(recorded);

    let canned = &state.response;
    if let Some(delay) = canned.delay {
        tokio::time::sleep(delay).await;
    }
    let status = StatusCode::from_u16(canned.status)
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    HttpResponse::build(status)
        .content_type("application/json")
        .body(canned.body.clone())
}

/// Start a stub model that gives `response` to every request.
pub async fn spawn_model(response: CannedResponse) -> TestModel {
    let subscriber = telemetry::get_subscriber("error".into());
    let _ = LogTracer::init();
    let _ = subscriber.try_init();

    let state = web::Data::new(StubState {
        response,
        requests: Mutex::new(Vec::new()),
    });

    // os-assigned port for parallel testing
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    let server_state = state.clone();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(server_state.clone())
            .app_data(web::PayloadConfig::new(8 * 1024 * 1024))
            .default_service(web::to(answer))
    })
    .workers(1)
    .listen(listener)
    .unwrap()
    .run();
    tokio::spawn(server);

    let client = GenAiClient::builder()
        .api_key(TEST_API_KEY)
        .base_url(format!("http://127.0.0.1:{port}/v1beta"))
        .model(TEST_MODEL)
        .build()
        .unwrap();

    TestModel {
        port,
        client,
        state,
    }
}

/// Assert that a client call failed with a specific API status.
pub fn assert_status_code<T: std::fmt::Debug>(
    result: Result<T, payloads::ClientError>,
    expected: u16,
) {
    match result {
        Err(payloads::ClientError::APIError(code, _)) => {
            assert_eq!(code.as_u16(), expected)
        }
        other => panic!("Expected APIError, got {other:?}"),
    };
}
