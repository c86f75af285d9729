//! Actix-web server standing in for the remote list API.

use std::net::TcpListener;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, rt, web};
use serde_json::Value;

pub const LIST_PATH: &str = "/v1/object/get-list/notifications";

/// How the stub answers list requests.
pub enum Reply {
    Respond { status: u16, body: String },
    Hang(Duration),
}

/// Request captured by the stub.
#[derive(Debug)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Value,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

struct StubState {
    reply: Reply,
    requests: Sender<RecordedRequest>,
}

async fn get_list(
    req: HttpRequest,
    body: web::Json<Value>,
    state: web::Data<StubState>,
) -> HttpResponse {
    let headers = req
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                value.to_str().unwrap_or_default().to_string(),
            )
        })
        .collect();
    let _ = state.requests.send(RecordedRequest {
        method: req.method().as_str().to_string(),
        path: req.path().to_string(),
        headers,
        body: body.into_inner(),
    });

    match &state.reply {
        Reply::Respond { status, body } => {
            HttpResponse::build(StatusCode::from_u16(*status).expect("valid status"))
                .content_type(ContentType::json())
                .body(body.clone())
        }
        Reply::Hang(duration) => {
            rt::time::sleep(*duration).await;
            HttpResponse::Ok().finish()
        }
    }
}

pub struct StubServer {
    pub base_url: String,
    requests: Receiver<RecordedRequest>,
}

impl StubServer {
    /// Serves `reply` on an ephemeral port from a background actix system.
    pub fn start(reply: Reply) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub server");
        let addr = listener.local_addr().expect("stub address");
        let (tx, rx) = mpsc::channel();
        let state = web::Data::new(StubState {
            reply,
            requests: tx,
        });

        thread::spawn(move || {
            let served = rt::System::new().block_on(async move {
                HttpServer::new(move || {
                    App::new()
                        .app_data(state.clone())
                        .route(LIST_PATH, web::post().to(get_list))
                })
                .workers(1)
                .disable_signals()
                .listen(listener)?
                .run()
                .await
            });
            if let Err(e) = served {
                eprintln!("stub server stopped: {e}");
            }
        });

        Self {
            base_url: format!("http://{addr}"),
            requests: rx,
        }
    }

    /// Waits for the captured request.
    pub fn received(&self) -> RecordedRequest {
        self.requests
            .recv_timeout(Duration::from_secs(5))
            .expect("stub server received a request")
    }
}

/// Returns the base url of a port nothing listens on.
pub fn closed_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind free port");
    let addr = listener.local_addr().expect("free port address");
    drop(listener);
    format!("http://{addr}")
}
