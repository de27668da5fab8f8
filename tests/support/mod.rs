//! In-process stand-in for the blog REST backend, plus helpers to mount the
//! admin app against it.

#![allow(dead_code)]

use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use blogsphere_admin::{helper::api_client::ApiClient, routes, store::UiStore, AppState};
use serde_json::{json, Map, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;
use tera::Tera;

pub const TIMESTAMP: &str = "2024-05-01T10:00:00Z";
/// How `TIMESTAMP` shows up in the date columns.
pub const TIMESTAMP_DISPLAY: &str = "10:00 05/01/2024";

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub headers: HashMap<String, String>,
    pub body: Option<Value>,
}

#[derive(Default)]
pub struct MockState {
    collections: Mutex<HashMap<String, Vec<Value>>>,
    next_id: AtomicU64,
    requests: Mutex<Vec<RecordedRequest>>,
    /// Makes every POST and PUT answer 500.
    pub fail_writes: AtomicBool,
    /// Serves lists newest first.
    pub reverse_lists: AtomicBool,
}

impl MockState {
    fn record(&self, req: &HttpRequest, body: Option<Value>) {
        let headers = req
            .headers()
            .iter()
            .map(|(name, value)| (name.as_str().to_string(), value.to_str().unwrap_or_default().to_string()))
            .collect();
        self.requests.lock().unwrap().push(RecordedRequest {
            method: req.method().to_string(),
            path: req.path().to_string(),
            headers,
            body,
        });
    }

    fn insert(&self, resource: &str, fields: Value) -> Value {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let mut record = match fields {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        record.insert("_id".to_string(), json!(id));
        record.insert("createdAt".to_string(), json!(TIMESTAMP));
        record.insert("updatedAt".to_string(), json!(TIMESTAMP));
        let record = Value::Object(record);
        self.collections
            .lock()
            .unwrap()
            .entry(resource.to_string())
            .or_default()
            .push(record.clone());
        record
    }
}

fn id_of(record: &Value) -> u64 {
    record["_id"].as_u64().unwrap_or_default()
}

// Passwords are accepted but never read back.
fn public_view(mut record: Value) -> Value {
    if let Value::Object(map) = &mut record {
        map.remove("password");
    }
    record
}

fn forced_failure() -> HttpResponse {
    HttpResponse::InternalServerError().json(json!({ "success": false, "error": "forced failure" }))
}

fn not_found(resource: &str, id: u64) -> HttpResponse {
    HttpResponse::NotFound().json(json!({ "success": false, "error": format!("{} {} not found", resource, id) }))
}

async fn list(req: HttpRequest, state: web::Data<MockState>, resource: web::Path<String>) -> HttpResponse {
    state.record(&req, None);
    let mut items: Vec<Value> = state
        .collections
        .lock()
        .unwrap()
        .get(resource.as_str())
        .cloned()
        .unwrap_or_default()
        .into_iter()
        .map(public_view)
        .collect();
    if state.reverse_lists.load(Ordering::SeqCst) {
        items.reverse();
    }
    HttpResponse::Ok().json(json!({ "success": true, "data": items }))
}

async fn create(
    req: HttpRequest,
    state: web::Data<MockState>,
    resource: web::Path<String>,
    body: web::Bytes,
) -> HttpResponse {
    let payload: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    state.record(&req, Some(payload.clone()));
    if state.fail_writes.load(Ordering::SeqCst) {
        return forced_failure();
    }
    let record = state.insert(&resource, payload);
    HttpResponse::Created().json(json!({ "success": true, "data": public_view(record) }))
}

async fn update(
    req: HttpRequest,
    state: web::Data<MockState>,
    path: web::Path<(String, u64)>,
    body: web::Bytes,
) -> HttpResponse {
    let (resource, id) = path.into_inner();
    let payload: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    state.record(&req, Some(payload.clone()));
    if state.fail_writes.load(Ordering::SeqCst) {
        return forced_failure();
    }

    let mut collections = state.collections.lock().unwrap();
    let record = collections
        .get_mut(&resource)
        .and_then(|items| items.iter_mut().find(|item| id_of(item) == id));
    match (record, payload) {
        (Some(Value::Object(existing)), Value::Object(changes)) => {
            existing.extend(changes);
            HttpResponse::Ok().json(json!({ "success": true, "message": "updated" }))
        }
        (Some(_), _) => HttpResponse::BadRequest().json(json!({ "success": false, "error": "expected an object" })),
        (None, _) => not_found(&resource, id),
    }
}

async fn delete(req: HttpRequest, state: web::Data<MockState>, path: web::Path<(String, u64)>) -> HttpResponse {
    let (resource, id) = path.into_inner();
    state.record(&req, None);

    let mut collections = state.collections.lock().unwrap();
    let items = collections.entry(resource.clone()).or_default();
    let before = items.len();
    items.retain(|item| id_of(item) != id);
    if items.len() == before {
        return not_found(&resource, id);
    }
    HttpResponse::NoContent().finish()
}

pub struct MockBackend {
    pub base_url: String,
    pub state: web::Data<MockState>,
}

impl MockBackend {
    /// Starts the backend on an ephemeral port. Must run inside an actix
    /// system, e.g. from `#[actix_web::test]`.
    pub fn start() -> Self {
        let state = web::Data::new(MockState::default());
        let data = state.clone();
        let server = HttpServer::new(move || {
            App::new().app_data(data.clone()).service(
                web::scope("/api")
                    .route("/{resource}", web::get().to(list))
                    .route("/{resource}", web::post().to(create))
                    .route("/{resource}/{id}", web::put().to(update))
                    .route("/{resource}/{id}", web::delete().to(delete)),
            )
        })
        .workers(1)
        .disable_signals()
        .bind(("127.0.0.1", 0))
        .expect("bind mock backend");
        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());

        MockBackend { base_url: format!("http://{}/api", addr), state }
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(&self.base_url).expect("mock base url")
    }

    /// Inserts a record directly, as if another client had created it.
    pub fn seed(&self, resource: &str, fields: Value) -> u64 {
        id_of(&self.state.insert(resource, fields))
    }

    /// Stored record including write-only fields.
    pub fn stored(&self, resource: &str, id: u64) -> Option<Value> {
        self.state
            .collections
            .lock()
            .unwrap()
            .get(resource)
            .and_then(|items| items.iter().find(|item| id_of(item) == id).cloned())
    }

    pub fn count(&self, resource: &str) -> usize {
        self.state.collections.lock().unwrap().get(resource).map(Vec::len).unwrap_or(0)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn requests_with_method(&self, method: &str) -> Vec<RecordedRequest> {
        self.requests().into_iter().filter(|r| r.method == method).collect()
    }

    pub fn fail_writes(&self, fail: bool) {
        self.state.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn reverse_lists(&self, reverse: bool) {
        self.state.reverse_lists.store(reverse, Ordering::SeqCst);
    }
}

/// Base URL nothing listens on.
pub const UNREACHABLE_API: &str = "http://127.0.0.1:9/api";

pub fn templates() -> Tera {
    Tera::new(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/**/*.html")).expect("templates parse")
}

/// Registers the admin routes and their shared data, talking to `base_url`.
pub fn admin(base_url: &str, app_state: web::Data<AppState>) -> impl FnOnce(&mut web::ServiceConfig) {
    let tera = web::Data::new(templates());
    let client = web::Data::new(ApiClient::new(base_url).expect("valid base url"));
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(tera)
            .app_data(client)
            .app_data(app_state)
            .configure(routes::config_routes);
    }
}

pub fn app_state() -> web::Data<AppState> {
    web::Data::new(AppState::new(UiStore::default()))
}
