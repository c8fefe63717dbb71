//! In-process mock of the portal backend
//!
//! Serves a small fixed data set under `/api` and records what the client
//! sent so tests can assert on the wire format.

#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::{FromRequest, Multipart, Path, Request, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use oxy_client::{ClientConfig, NetworkHttpClient};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

pub const GOOD_TOKEN: &str = "tok-e7";

/// One received checklist submission
#[derive(Debug, Clone)]
pub struct ReceivedSubmission {
    pub multipart: bool,
    /// Part names in arrival order (multipart only)
    pub parts: Vec<String>,
    /// JSON body, or the text fields of the form with `responses` parsed
    pub body: Value,
}

/// One received multipart part
#[derive(Debug, Clone)]
pub struct ReceivedPart {
    pub name: String,
    pub file_name: Option<String>,
    pub text: Option<String>,
}

#[derive(Debug, Default)]
pub struct Received {
    pub submissions: Vec<ReceivedSubmission>,
    pub assign_calls: Vec<Value>,
    pub reports: Vec<Vec<ReceivedPart>>,
    pub customers: Vec<Value>,
    pub issues: Vec<Value>,
}

type Shared = Arc<Mutex<Received>>;

pub struct MockBackend {
    pub base_url: String,
    pub received: Shared,
}

impl MockBackend {
    pub fn client(&self) -> NetworkHttpClient {
        NetworkHttpClient::new(&ClientConfig::new(&self.base_url)).unwrap()
    }

    pub fn received(&self) -> std::sync::MutexGuard<'_, Received> {
        self.received.lock().unwrap()
    }
}

pub async fn spawn() -> MockBackend {
    let received: Shared = Arc::new(Mutex::new(Received {
        issues: vec![json!({
            "issueId": 5,
            "title": "Door seal leaking",
            "category": "Zip",
            "severity": "Urgent",
            "status": "New",
            "doNotOperateRecommended": true,
            "Chamber": {"id": 3, "serialNumber": "OX-3", "modelName": "Vitaeris 320"},
            "engineer": null
        })],
        ..Default::default()
    }));

    let app = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/me", get(me))
        .route("/api/ops/checklists/template/{check_type}", get(template))
        .route("/api/ops/checklists/submit", post(submit_checklist))
        .route("/api/ops/chambers/{id}", get(chamber))
        .route("/api/ops/issues", post(report_issue))
        .route("/api/ops/issues/my", get(my_issues))
        .route("/api/ops/issues/assign", post(assign_issue))
        .route("/api/admin/users/engineers", get(engineers))
        .route("/api/admin/customers", get(customers).post(create_customer))
        .route("/api/admin/customers/{id}", delete(delete_customer))
        .with_state(received.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockBackend {
        base_url: format!("http://{addr}/api"),
        received,
    }
}

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "message": message }))).into_response()
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {GOOD_TOKEN}"))
}

async fn login(Json(body): Json<Value>) -> Response {
    if body["password"] != "secret" {
        return error(StatusCode::UNAUTHORIZED, "Invalid credentials");
    }
    Json(json!({
        "token": GOOD_TOKEN,
        "user": {"id": 7, "username": "E7", "email": body["email"], "role": "Engineer"}
    }))
    .into_response()
}

async fn me(headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return error(StatusCode::UNAUTHORIZED, "Token is not valid");
    }
    Json(json!({
        "id": 7,
        "username": "E7",
        "email": "e7@oxy.example",
        "Role": {"name": "Engineer"}
    }))
    .into_response()
}

async fn template(Path(check_type): Path<String>) -> Response {
    Json(json!({
        "templateId": 1,
        "checkType": check_type,
        "name": format!("{check_type} inspection"),
        "ChecklistItems": [
            {"itemId": 1, "title": "Door seal", "instruction": "Inspect", "requiresPhotoOnFail": true},
            {"itemId": 2, "title": "Pressure gauge", "instruction": "Read", "requiresPhotoOnFail": false}
        ]
    }))
    .into_response()
}

async fn read_parts(mut multipart: Multipart) -> Vec<ReceivedPart> {
    let mut parts = Vec::new();
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let bytes = field.bytes().await.unwrap();
        let text = file_name
            .is_none()
            .then(|| String::from_utf8_lossy(&bytes).into_owned());
        parts.push(ReceivedPart {
            name,
            file_name,
            text,
        });
    }
    parts
}

async fn submit_checklist(State(received): State<Shared>, req: Request) -> Response {
    let multipart = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("multipart/"));

    let submission = if multipart {
        let form = match Multipart::from_request(req, &()).await {
            Ok(form) => form,
            Err(rejection) => return rejection.into_response(),
        };
        let parts = read_parts(form).await;
        let mut body = json!({});
        for part in &parts {
            if let Some(text) = &part.text {
                body[&part.name] = if part.name == "responses" {
                    serde_json::from_str(text).unwrap()
                } else {
                    Value::String(text.clone())
                };
            }
        }
        ReceivedSubmission {
            multipart: true,
            parts: parts.into_iter().map(|p| p.name).collect(),
            body,
        }
    } else {
        let Json(body) = match Json::<Value>::from_request(req, &()).await {
            Ok(body) => body,
            Err(rejection) => return rejection.into_response(),
        };
        ReceivedSubmission {
            multipart: false,
            parts: Vec::new(),
            body,
        }
    };

    received.lock().unwrap().submissions.push(submission);
    (
        StatusCode::CREATED,
        Json(json!({"message": "Checklist submitted", "submissionId": 41})),
    )
        .into_response()
}

async fn chamber(Path(id): Path<i64>) -> Response {
    if id == 99 {
        return error(StatusCode::FORBIDDEN, "Chamber not assigned to you");
    }
    Json(json!({"id": id, "serialNumber": format!("OX-{id}"), "modelName": "Vitaeris 320"}))
        .into_response()
}

async fn report_issue(State(received): State<Shared>, multipart: Multipart) -> Response {
    let parts = read_parts(multipart).await;
    received.lock().unwrap().reports.push(parts);
    (
        StatusCode::CREATED,
        Json(json!({"message": "Issue reported"})),
    )
        .into_response()
}

async fn my_issues(State(received): State<Shared>) -> Response {
    Json(Value::Array(received.lock().unwrap().issues.clone())).into_response()
}

async fn engineers() -> Response {
    Json(json!([
        {"id": 7, "username": "E7", "Role": {"name": "Engineer"}},
        {"id": 8, "username": "E8", "Role": {"name": "Engineer"}}
    ]))
    .into_response()
}

async fn assign_issue(State(received): State<Shared>, Json(body): Json<Value>) -> Response {
    let mut state = received.lock().unwrap();
    let engineer = match body["engineerId"].as_i64() {
        Some(7) => json!({"id": 7, "username": "E7"}),
        Some(8) => json!({"id": 8, "username": "E8"}),
        _ => return error(StatusCode::BAD_REQUEST, "Unknown engineer"),
    };
    let Some(issue) = state
        .issues
        .iter_mut()
        .find(|i| i["issueId"] == body["issueId"])
    else {
        return error(StatusCode::NOT_FOUND, "Issue not found");
    };
    issue["engineer"] = engineer;
    issue["status"] = json!("InProgress");
    state.assign_calls.push(body);
    Json(json!({"message": "Engineer assigned"})).into_response()
}

async fn customers(State(received): State<Shared>) -> Response {
    Json(Value::Array(received.lock().unwrap().customers.clone())).into_response()
}

async fn create_customer(State(received): State<Shared>, Json(mut body): Json<Value>) -> Response {
    let mut state = received.lock().unwrap();
    body["id"] = json!(state.customers.len() as i64 + 1);
    state.customers.push(body.clone());
    (StatusCode::CREATED, Json(body)).into_response()
}

async fn delete_customer(State(received): State<Shared>, Path(id): Path<i64>) -> Response {
    let mut state = received.lock().unwrap();
    let before = state.customers.len();
    state.customers.retain(|c| c["id"] != id);
    if state.customers.len() == before {
        return error(StatusCode::NOT_FOUND, "Customer not found");
    }
    StatusCode::NO_CONTENT.into_response()
}
