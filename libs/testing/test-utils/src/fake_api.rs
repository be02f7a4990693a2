//! In-process stand-in for the remote events API
//!
//! Serves `/api/v1/{resource}` and `/api/v1/{resource}/{id}` from an
//! in-memory store on an ephemeral port. Resource names are matched
//! case-insensitively, so `/api/v1/Categories` and `/api/v1/categories` hit
//! the same collection.

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{Method, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use remote_api::{ApiClient, DecodeObserver};
use serde_json::{Map, Value, json};
use std::collections::{BTreeMap, HashMap};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

const PREFIX: &str = "/api/v1/";

/// Body shape used for collection reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListStyle {
    /// `[...]`
    #[default]
    Array,
    /// `{"items":[...],"page":1,"pageSize":n,"totalCount":n,"totalPages":1}`
    Items,
    /// `{"data":[...]}`
    Data,
    /// `{"results":[...]}`
    Results,
    /// `{"<resource>":[...]}`
    Collection,
    /// The first stored entity as a bare object
    Single,
}

/// Key casing applied to every response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyCase {
    /// Keys as stored (camelCase from the portal's serializer)
    #[default]
    Camel,
    /// `CategoryId`, `StartDate`, ...
    Pascal,
    /// `categoryid`, `startdate`, ...
    Lower,
}

/// One request seen by the fake.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

struct Scripted {
    status: StatusCode,
    body: String,
}

struct Inner {
    collections: HashMap<String, BTreeMap<i32, Value>>,
    next_id: i32,
    list_style: ListStyle,
    key_case: KeyCase,
    scripted: HashMap<(Method, String), Scripted>,
    requests: Vec<RecordedRequest>,
}

type Shared = Arc<Mutex<Inner>>;

/// Fake remote API server
///
/// The server task is aborted when this struct is dropped.
///
/// # Example
///
/// ```rust,no_run
/// use test_utils::FakeRemoteApi;
/// use serde_json::json;
///
/// # async fn example() {
/// let api = FakeRemoteApi::start().await;
/// let id = api.seed("categories", json!({"name": "Music"}));
/// let client = api.client();
/// # }
/// ```
pub struct FakeRemoteApi {
    addr: SocketAddr,
    inner: Shared,
    server: JoinHandle<()>,
}

impl FakeRemoteApi {
    pub async fn start() -> Self {
        let inner: Shared = Arc::new(Mutex::new(Inner {
            collections: HashMap::new(),
            next_id: 1,
            list_style: ListStyle::default(),
            key_case: KeyCase::default(),
            scripted: HashMap::new(),
            requests: Vec::new(),
        }));

        let app = Router::new().fallback(handle).with_state(inner.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake remote API");
        let addr = listener
            .local_addr()
            .expect("Failed to read fake remote API address");

        let server = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!("Fake remote API stopped: {}", e);
            }
        });

        tracing::debug!(%addr, "Fake remote API ready");

        Self {
            addr,
            inner,
            server,
        }
    }

    /// Origin to hand to `ApiClient`, e.g. `http://127.0.0.1:41234`
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Client with default decode options and the tracing observer.
    pub fn client(&self) -> ApiClient {
        ApiClient::new(&self.base_url()).expect("Fake remote API URL is valid")
    }

    pub fn client_with_observer(&self, observer: Arc<dyn DecodeObserver>) -> ApiClient {
        self.client().with_observer(observer)
    }

    /// Store an entity directly, bypassing HTTP. A positive `id` in the
    /// value is kept; otherwise one is assigned. Returns the id.
    pub fn seed(&self, resource: &str, entity: Value) -> i32 {
        let mut inner = self.lock();
        let requested = entity
            .get("id")
            .and_then(Value::as_i64)
            .and_then(|id| i32::try_from(id).ok())
            .filter(|id| *id > 0);

        let id = match requested {
            Some(id) => {
                inner.next_id = inner.next_id.max(id + 1);
                id
            }
            None => inner.allocate_id(),
        };

        let stored = with_id(entity, id);
        inner
            .collections
            .entry(resource.to_ascii_lowercase())
            .or_default()
            .insert(id, stored);
        id
    }

    pub fn set_list_style(&self, style: ListStyle) {
        self.lock().list_style = style;
    }

    pub fn set_key_case(&self, case: KeyCase) {
        self.lock().key_case = case;
    }

    /// Answer `method path` with exactly this status and body, ignoring
    /// the store. `path` is matched verbatim, e.g. `/api/v1/events/3`.
    pub fn script(&self, method: Method, path: &str, status: StatusCode, body: impl Into<String>) {
        self.lock().scripted.insert(
            (method, path.to_string()),
            Scripted {
                status,
                body: body.into(),
            },
        );
    }

    /// Entity as currently stored.
    pub fn stored(&self, resource: &str, id: i32) -> Option<Value> {
        self.lock()
            .collections
            .get(&resource.to_ascii_lowercase())
            .and_then(|items| items.get(&id).cloned())
    }

    pub fn count(&self, resource: &str) -> usize {
        self.lock()
            .collections
            .get(&resource.to_ascii_lowercase())
            .map_or(0, BTreeMap::len)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.lock().requests.clone()
    }

    /// Every request that was not a GET.
    pub fn writes(&self) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.method != Method::GET)
            .collect()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().expect("Fake remote API state poisoned")
    }
}

impl Drop for FakeRemoteApi {
    fn drop(&mut self) {
        self.server.abort();
    }
}

impl Inner {
    fn allocate_id(&mut self) -> i32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn render(&self, value: Value) -> Response {
        self.render_with(StatusCode::OK, value)
    }

    fn render_with(&self, status: StatusCode, value: Value) -> Response {
        let body = recase(value, self.key_case).to_string();
        (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
    }

    fn list(&self, resource: &str) -> Response {
        let items: Vec<Value> = self
            .collections
            .get(resource)
            .map(|items| items.values().cloned().collect())
            .unwrap_or_default();
        let total = items.len();

        let body = match self.list_style {
            ListStyle::Array => Value::Array(items),
            ListStyle::Items => json!({
                "items": items,
                "page": 1,
                "pageSize": total,
                "totalCount": total,
                "totalPages": 1,
            }),
            ListStyle::Data => json!({ "data": items }),
            ListStyle::Results => json!({ "results": items }),
            ListStyle::Collection => {
                let mut envelope = Map::new();
                envelope.insert(resource.to_string(), Value::Array(items));
                Value::Object(envelope)
            }
            ListStyle::Single => match items.into_iter().next() {
                Some(first) => first,
                None => return StatusCode::OK.into_response(),
            },
        };

        self.render(body)
    }
}

async fn handle(State(inner): State<Shared>, method: Method, uri: Uri, body: Bytes) -> Response {
    let path = uri.path().to_string();
    let payload = serde_json::from_slice::<Value>(&body).ok();

    let mut inner = match inner.lock() {
        Ok(inner) => inner,
        Err(_) => return StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    };

    inner.requests.push(RecordedRequest {
        method: method.clone(),
        path: path.clone(),
        body: payload.clone(),
    });

    if let Some(scripted) = inner.scripted.get(&(method.clone(), path.clone())) {
        return (scripted.status, scripted.body.clone()).into_response();
    }

    let Some((resource, id)) = route(&path) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    match (method, id) {
        (Method::GET, None) => inner.list(&resource),
        (Method::GET, Some(id)) => {
            match inner.collections.get(&resource).and_then(|c| c.get(&id)) {
                Some(entity) => inner.render(entity.clone()),
                None => StatusCode::NOT_FOUND.into_response(),
            }
        }
        (Method::POST, None) => {
            let Some(entity @ Value::Object(_)) = payload else {
                return StatusCode::BAD_REQUEST.into_response();
            };
            let id = inner.allocate_id();
            let stored = with_id(entity, id);
            inner
                .collections
                .entry(resource)
                .or_default()
                .insert(id, stored.clone());
            inner.render_with(StatusCode::CREATED, stored)
        }
        (Method::PUT, Some(id)) => {
            let exists = inner
                .collections
                .get(&resource)
                .is_some_and(|c| c.contains_key(&id));
            if !exists {
                return StatusCode::NOT_FOUND.into_response();
            }
            let Some(entity @ Value::Object(_)) = payload else {
                return StatusCode::BAD_REQUEST.into_response();
            };
            let stored = with_id(entity, id);
            inner
                .collections
                .entry(resource)
                .or_default()
                .insert(id, stored.clone());
            inner.render(stored)
        }
        (Method::DELETE, Some(id)) => {
            let removed = inner
                .collections
                .get_mut(&resource)
                .and_then(|c| c.remove(&id));
            match removed {
                Some(_) => StatusCode::NO_CONTENT.into_response(),
                None => StatusCode::NOT_FOUND.into_response(),
            }
        }
        _ => StatusCode::METHOD_NOT_ALLOWED.into_response(),
    }
}

/// `/api/v1/Events/3` → `("events", Some(3))`
fn route(path: &str) -> Option<(String, Option<i32>)> {
    let rest = path.strip_prefix(PREFIX)?;
    let mut segments = rest.trim_end_matches('/').split('/');
    let resource = segments.next().filter(|s| !s.is_empty())?.to_ascii_lowercase();

    let id = match segments.next() {
        Some(raw) => Some(raw.parse::<i32>().ok()?),
        None => None,
    };
    if segments.next().is_some() {
        return None;
    }

    Some((resource, id))
}

fn with_id(entity: Value, id: i32) -> Value {
    match entity {
        Value::Object(mut map) => {
            map.insert("id".to_string(), json!(id));
            Value::Object(map)
        }
        _ => json!({ "id": id }),
    }
}

fn recase(value: Value, case: KeyCase) -> Value {
    if case == KeyCase::Camel {
        return value;
    }
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (recase_key(&k, case), recase(v, case)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(|v| recase(v, case)).collect()),
        other => other,
    }
}

fn recase_key(key: &str, case: KeyCase) -> String {
    match case {
        KeyCase::Camel => key.to_string(),
        KeyCase::Lower => key.to_ascii_lowercase(),
        KeyCase::Pascal => {
            let mut chars = key.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        }
    }
}
