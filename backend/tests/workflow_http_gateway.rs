//! Reqwest workflow gateway against a stub service on an ephemeral port.

use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use actix_web::dev::ServerHandle;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use async_trait::async_trait;
use reqwest::Url;
use rstest::rstest;
use serde_json::{Value, json};
use worddee_backend::domain::ports::{WorkflowGateway, WorkflowGatewayError, WorkflowOperation};
use worddee_backend::domain::{FixedRetryPolicy, RetryingWorkflowGateway, Sleeper};
use worddee_backend::outbound::workflow::WorkflowHttpGateway;

#[derive(Default)]
struct StubRecord {
    hits: AtomicUsize,
    paths: Mutex<Vec<String>>,
    bodies: Mutex<Vec<Value>>,
}

impl StubRecord {
    fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

fn record(state: &StubRecord, req: &HttpRequest, body: &[u8]) {
    state.hits.fetch_add(1, Ordering::SeqCst);
    state
        .paths
        .lock()
        .expect("paths mutex")
        .push(req.path().to_owned());
    if let Ok(value) = serde_json::from_slice(body) {
        state.bodies.lock().expect("bodies mutex").push(value);
    }
}

async fn word_card(
    state: web::Data<StubRecord>,
    req: HttpRequest,
    body: web::Bytes,
) -> HttpResponse {
    record(&state, &req, &body);
    HttpResponse::Ok().json(json!({"word": "Lucid", "level": "Intermediate"}))
}

async fn verdict(state: web::Data<StubRecord>, req: HttpRequest, body: web::Bytes) -> HttpResponse {
    record(&state, &req, &body);
    HttpResponse::Ok().json(json!({"score": 8.5, "level": "B2"}))
}

async fn unavailable(
    state: web::Data<StubRecord>,
    req: HttpRequest,
    body: web::Bytes,
) -> HttpResponse {
    record(&state, &req, &body);
    HttpResponse::ServiceUnavailable().body("workflow paused")
}

async fn garbled(state: web::Data<StubRecord>, req: HttpRequest, body: web::Bytes) -> HttpResponse {
    record(&state, &req, &body);
    HttpResponse::Ok()
        .content_type("text/html")
        .body("<html>not json</html>")
}

async fn spawn_stub_service() -> (String, Arc<StubRecord>, ServerHandle) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub listener");
    let addr = listener.local_addr().expect("stub listener addr");
    let state = web::Data::new(StubRecord::default());
    let record = state.clone().into_inner();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/webhook/generate-word", web::post().to(word_card))
            .route("/webhook/validate-sentence", web::post().to(verdict))
            .route("/down/generate-word", web::post().to(unavailable))
            .route("/garbled/generate-word", web::post().to(garbled))
    })
    .disable_signals()
    .workers(1)
    .listen(listener)
    .expect("listen stub server")
    .run();

    let handle = server.handle();
    actix_web::rt::spawn(server);

    (format!("http://{addr}"), record, handle)
}

fn gateway_for(base: &str, path: &str) -> WorkflowHttpGateway {
    let url = Url::parse(&format!("{base}/{path}")).expect("stub base url");
    WorkflowHttpGateway::with_timeout(url, Duration::from_secs(5)).expect("build gateway")
}

#[derive(Default)]
struct CountingSleeper {
    delays: Mutex<Vec<Duration>>,
}

#[async_trait]
impl Sleeper for CountingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.delays.lock().expect("delays mutex").push(duration);
    }
}

#[rstest]
#[actix_web::test]
async fn posts_to_operation_paths_under_the_base_url() {
    let (base, record, handle) = spawn_stub_service().await;
    let gateway = gateway_for(&base, "webhook");

    let card = gateway
        .call(WorkflowOperation::GenerateWord, Value::Null)
        .await
        .expect("word card");
    let graded = gateway
        .call(
            WorkflowOperation::ValidateSentence,
            json!({"word": "Lucid", "sentence": "A lucid dream."}),
        )
        .await
        .expect("verdict");

    assert_eq!(card["word"], "Lucid");
    assert_eq!(graded["score"], 8.5);
    assert_eq!(
        *record.paths.lock().expect("paths mutex"),
        vec!["/webhook/generate-word", "/webhook/validate-sentence"]
    );
    assert_eq!(
        *record.bodies.lock().expect("bodies mutex"),
        vec![
            json!({}),
            json!({"word": "Lucid", "sentence": "A lucid dream."})
        ]
    );
    handle.stop(true).await;
}

#[rstest]
#[actix_web::test]
async fn trailing_slash_on_the_base_url_is_tolerated() {
    let (base, record, handle) = spawn_stub_service().await;
    let gateway = gateway_for(&base, "webhook/");

    gateway
        .call(WorkflowOperation::GenerateWord, json!({}))
        .await
        .expect("word card");

    assert_eq!(
        *record.paths.lock().expect("paths mutex"),
        vec!["/webhook/generate-word"]
    );
    handle.stop(true).await;
}

#[rstest]
#[actix_web::test]
async fn error_status_is_reported_and_not_retried() {
    let (base, record, handle) = spawn_stub_service().await;
    let sleeper = Arc::new(CountingSleeper::default());
    let gateway = RetryingWorkflowGateway::with_runtime(
        Arc::new(gateway_for(&base, "down")),
        FixedRetryPolicy::WORKFLOW,
        sleeper.clone(),
    );

    let err = gateway
        .call(WorkflowOperation::GenerateWord, json!({}))
        .await
        .expect_err("503 must fail");

    assert_eq!(err, WorkflowGatewayError::Status { status: 503 });
    assert_eq!(err.to_string(), "503: AI Service Error");
    assert_eq!(record.hits(), 1);
    assert!(sleeper.delays.lock().expect("delays mutex").is_empty());
    handle.stop(true).await;
}

#[rstest]
#[actix_web::test]
async fn non_json_success_body_is_a_decode_failure() {
    let (base, record, handle) = spawn_stub_service().await;
    let gateway = gateway_for(&base, "garbled");

    let err = gateway
        .call(WorkflowOperation::GenerateWord, json!({}))
        .await
        .expect_err("HTML body must fail");

    assert!(matches!(err, WorkflowGatewayError::Decode { .. }));
    assert_eq!(record.hits(), 1);
    handle.stop(true).await;
}

#[rstest]
#[actix_web::test]
async fn unreachable_service_is_retried_then_reported_as_transport() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").expect("reserve port");
        listener.local_addr().expect("reserved addr").port()
    };
    let sleeper = Arc::new(CountingSleeper::default());
    let gateway = RetryingWorkflowGateway::with_runtime(
        Arc::new(gateway_for(&format!("http://127.0.0.1:{port}"), "webhook")),
        FixedRetryPolicy::WORKFLOW,
        sleeper.clone(),
    );

    let err = gateway
        .call(WorkflowOperation::GenerateWord, json!({}))
        .await
        .expect_err("closed port must fail");

    assert!(err.is_retryable(), "expected transport failure, got {err:?}");
    assert_eq!(
        *sleeper.delays.lock().expect("delays mutex"),
        vec![Duration::from_secs(2); 2]
    );
}
