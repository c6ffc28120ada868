//! Recording stand-in for the Lipisha payment gateway.
//!
//! # Design
//! The real gateway accepts form-encoded POSTs on a fixed set of paths and
//! answers with a JSON `status`/`content` envelope, reporting business errors
//! inside HTTP 200 bodies. This mock mirrors that: every known endpoint is
//! routed to one handler that records the request (path plus decoded form
//! fields) and serves whatever canned [`Reply`] is currently configured.
//! Tests read back the recorded requests to assert on the exact wire fields,
//! and swap the reply to simulate gateway-side failures.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::IntoResponse,
    routing::post,
    Form, Router,
};
use tokio::net::TcpListener;

/// Every path the gateway serves, one per client operation.
pub const ENDPOINTS: &[&str] = &[
    "/get_balance",
    "/get_float",
    "/send_money",
    "/request_money",
    "/send_airtime",
    "/send_sms",
    "/authorize_card_transaction",
    "/complete_card_transaction",
    "/reverse_card_transaction",
    "/void_card_transaction",
    "/request_settlement",
    "/authorize_settlement",
    "/cancel_settlement",
    "/acknowledge_transaction",
    "/reconcile_transaction",
    "/reverse_transaction",
    "/get_transactions",
    "/get_customers",
    "/create_user",
    "/update_user",
    "/delete_user",
    "/get_users",
];

/// Default canned body, shaped like the gateway's success envelope.
pub const SUCCESS_BODY: &str = r#"{"status":{"status":"SUCCESS","status_code":0,"status_description":"Request accepted"},"content":{}}"#;

/// One observed request.
#[derive(Clone, Debug)]
pub struct Recorded {
    pub path: String,
    pub fields: HashMap<String, String>,
}

/// The response the mock currently serves.
#[derive(Clone, Debug)]
pub struct Reply {
    pub status: StatusCode,
    pub body: String,
}

impl Default for Reply {
    fn default() -> Self {
        Self {
            status: StatusCode::OK,
            body: SUCCESS_BODY.to_string(),
        }
    }
}

/// Shared mock state: the request log and the configured reply.
///
/// Locks are plain `std::sync` because no handler holds one across an await;
/// this keeps the accessors callable from both async tests and the blocking
/// client's test threads.
#[derive(Clone, Default)]
pub struct Gateway {
    requests: Arc<RwLock<Vec<Recorded>>>,
    reply: Arc<RwLock<Reply>>,
}

impl Gateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every request observed so far, in arrival order.
    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.read().unwrap().clone()
    }

    /// Replace the canned reply served to subsequent requests. Takes a bare
    /// status number so callers outside the axum ecosystem can use it.
    pub fn set_reply(&self, status: u16, body: &str) {
        *self.reply.write().unwrap() = Reply {
            status: StatusCode::from_u16(status).expect("valid status code"),
            body: body.to_string(),
        };
    }
}

pub fn app(gateway: Gateway) -> Router {
    let mut router = Router::new();
    for path in ENDPOINTS {
        router = router.route(path, post(handle));
    }
    router.with_state(gateway)
}

pub async fn run(listener: TcpListener, gateway: Gateway) -> Result<(), std::io::Error> {
    axum::serve(listener, app(gateway)).await
}

async fn handle(
    State(gateway): State<Gateway>,
    uri: Uri,
    Form(fields): Form<HashMap<String, String>>,
) -> impl IntoResponse {
    gateway.requests.write().unwrap().push(Recorded {
        path: uri.path().to_string(),
        fields,
    });
    let reply = gateway.reply.read().unwrap().clone();
    (
        reply.status,
        [(header::CONTENT_TYPE, "application/json")],
        reply.body,
    )
}
