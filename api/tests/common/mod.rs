//! Local HTTP stub for the dashboard endpoints. Also compiled into the `ui`
//! crate's integration tests, so not every helper is used by every test binary.
#![allow(dead_code)]

use axum::http::{header, StatusCode};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;

/// Canned responses keyed by request path. Unknown paths answer 404.
pub struct StubServer {
    base: String,
}

#[derive(Clone)]
pub struct Reply {
    pub status: StatusCode,
    pub body: String,
}

impl Reply {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            body: body.into(),
        }
    }

    pub fn status(code: u16) -> Self {
        Self {
            status: StatusCode::from_u16(code).expect("valid status code"),
            body: String::new(),
        }
    }
}

impl StubServer {
    /// Binds an ephemeral port and serves `routes` on the current runtime.
    pub async fn start(routes: Vec<(&'static str, Reply)>) -> Self {
        let app = routes
            .into_iter()
            .fold(Router::new(), |router, (path, reply)| {
                router.route(
                    path,
                    get(move || async move {
                        (
                            reply.status,
                            [(header::CONTENT_TYPE, "application/json")],
                            reply.body,
                        )
                    }),
                )
            });

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub listener");
        let base = format!("http://{}", listener.local_addr().expect("local addr"));
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("stub server");
        });

        Self { base }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }
}

/// An address nothing listens on.
pub fn closed_port_url(path: &str) -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind throwaway listener");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}{path}")
}

/// Client that never routes loopback requests through a configured proxy.
pub fn local_client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("build local client")
}

pub const PROFILE_JSON: &str = r#"{
    "firstName": "Oyatillo",
    "lastName": "Karimov",
    "fatherName": "Akmal o'g'li",
    "birthday": "12.04.1990",
    "address": "Toshkent",
    "position": "Bo'lim boshlig'i",
    "candidate": "Rahbar lavozimiga",
    "height": "180 sm",
    "weight": "78 kg",
    "index": "24.1",
    "imageUrl": "/portraits/oyatillo.jpg"
}"#;

pub const ASSESSMENT_JSON: &str = r##"{
    "semicharts": [
        { "label": "Mantiq", "percentage": 86, "color": "#22c55e" },
        { "label": "Huquq", "percentage": 45, "color": "#f59e0b" }
    ],
    "lineChart": { "labels": ["2021", "2022", "2023"], "data": [60, 72, 81] },
    "overall": "Yaxshi",
    "thanOthers": 68
}"##;
