//! Dispatch-level contracts: credential injection, status passthrough,
//! transport failures and the debug log side channel.

use std::sync::Mutex;

use lipisha_core::{Config, Error, Form, Lipisha};
use mock_server::{Gateway, SUCCESS_BODY};

fn start_gateway() -> (Gateway, String) {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    let gateway = Gateway::new();
    let state = gateway.clone();
    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener, state).await
        })
        .unwrap();
    });

    (gateway, format!("http://{addr}"))
}

#[test]
fn credentials_override_caller_supplied_fields() {
    let (gateway, base_url) = start_gateway();
    let client = Lipisha::with_base_url(Config::new("K", "S"), &base_url);

    let mut form = Form::new();
    form.set("api_key", "forged").set("api_signature", "forged");
    client.dispatch("/get_balance", form).unwrap();

    let request = &gateway.requests()[0];
    assert_eq!(request.fields["api_key"], "K");
    assert_eq!(request.fields["api_signature"], "S");
    assert_eq!(request.fields.len(), 2);
}

#[test]
fn server_error_status_with_readable_body_is_ok() {
    let (gateway, base_url) = start_gateway();
    gateway.set_reply(500, r#"{"status":"ERROR"}"#);

    let client = Lipisha::with_base_url(Config::new("K", "S"), &base_url);
    let body = client.send_money(15189, 254718353279, 1000, "KES", "1").unwrap();
    assert_eq!(body, r#"{"status":"ERROR"}"#);
}

#[test]
fn client_error_status_with_readable_body_is_ok() {
    let (gateway, base_url) = start_gateway();
    gateway.set_reply(
        403,
        r#"{"status":{"status":"FAIL","status_code":4000,"status_description":"Invalid API credentials"}}"#,
    );

    let client = Lipisha::with_base_url(Config::new("bad", "bad"), &base_url);
    let body = client.get_account_balance().unwrap();
    assert!(body.contains("Invalid API credentials"));
}

#[test]
fn raw_body_is_parseable_gateway_envelope_json() {
    let (_gateway, base_url) = start_gateway();
    let client = Lipisha::with_base_url(Config::new("K", "S"), &base_url);

    let body = client.get_account_balance().unwrap();
    let envelope: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(envelope["status"]["status"], "SUCCESS");
    assert!(envelope["content"].is_object());
}

#[test]
fn connection_failure_is_a_transport_error() {
    // Bind then drop to get a port with nothing listening. An elapsed
    // REQUEST_TIMEOUT surfaces through this same path: the agent's send
    // fails before a response exists, so it maps to Error::Transport with
    // no body. The 30 s deadline is fixed, so connection-refused stands in
    // for it here.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = Lipisha::with_base_url(Config::new("K", "S"), &format!("http://{addr}"));
    let err = client.get_account_balance().unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
}

// --- debug log side channel ---

struct Recorder;

static RECORDS: Mutex<Vec<String>> = Mutex::new(Vec::new());
static RECORDER: Recorder = Recorder;

impl log::Log for Recorder {
    fn enabled(&self, _: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        if record.target() == "lipisha" {
            RECORDS.lock().unwrap().push(record.args().to_string());
        }
    }

    fn flush(&self) {}
}

/// One test owns the global logger: first verifies a non-debug client stays
/// silent, then that a debug client emits URL, body and response in order.
#[test]
fn debug_flag_controls_the_log_side_channel() {
    log::set_logger(&RECORDER).unwrap();
    log::set_max_level(log::LevelFilter::Debug);

    let (_gateway, base_url) = start_gateway();

    let quiet = Lipisha::with_base_url(Config::new("K", "S"), &base_url);
    quiet.get_account_balance().unwrap();
    assert!(RECORDS.lock().unwrap().is_empty());

    let mut config = Config::new("K", "S");
    config.debug = true;
    let chatty = Lipisha::with_base_url(config, &base_url);
    chatty.get_account_balance().unwrap();

    let records = RECORDS.lock().unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0], format!("{base_url}/get_balance"));
    assert_eq!(records[1], "api_key=K&api_signature=S");
    assert_eq!(records[2], SUCCESS_BODY);
}
