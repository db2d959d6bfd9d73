//! The dashboard's load path (`fetch_both` reduced by `load_dashboard`)
//! against the same local HTTP stub the `api` crate tests with.

#[path = "../../api/tests/common/mod.rs"]
mod common;

use api::{EndpointConfig, RemoteDataSource};
use common::{local_client, Reply, StubServer, ASSESSMENT_JSON, PROFILE_JSON};
use ui::dashboard::config::DisplayConfig;
use ui::dashboard::layout::Screen;
use ui::dashboard::state::{load_dashboard, DashboardViewModel, PresentationState};

const FALLBACK: &str = "An unknown error occurred";

fn source_for(server: &StubServer) -> RemoteDataSource {
    RemoteDataSource::with_client(
        local_client(),
        EndpointConfig::new(server.url("/profile"), server.url("/assessment")),
    )
}

async fn settle_against(server: &StubServer) -> DashboardViewModel {
    let source = source_for(server);
    let mut view_model = DashboardViewModel::new();
    let next = load_dashboard(source.fetch_both(), FALLBACK).await;
    assert!(view_model.settle(next));
    view_model
}

#[tokio::test]
async fn both_endpoints_ok_renders_the_dashboard() {
    let server = StubServer::start(vec![
        ("/profile", Reply::ok(PROFILE_JSON)),
        ("/assessment", Reply::ok(ASSESSMENT_JSON)),
    ])
    .await;

    let view_model = settle_against(&server).await;
    assert!(!view_model.is_loading());

    let screen = Screen::from_state(view_model.state(), &DisplayConfig::default());
    let view = screen.dashboard().expect("dashboard screen");
    assert_eq!(view.profile.name, "Oyatillo Karimov");
    assert_eq!(view.scores.len(), 2);
    assert_eq!(view.scores[0].value_label, "86%");
    assert_eq!(view.trend.points.len(), 3);
    assert_eq!(view.summary.overall, "Yaxshi");
    assert_eq!(view.summary.better_than, "68");
}

#[tokio::test]
async fn assessment_server_error_shows_only_the_error_panel() {
    let server = StubServer::start(vec![
        ("/profile", Reply::ok(PROFILE_JSON)),
        ("/assessment", Reply::status(500)),
    ])
    .await;

    let view_model = settle_against(&server).await;
    let state = view_model.state();
    assert!(!state.is_loading());
    assert!(state.ready().is_none());

    let message = state.error_message().expect("error state");
    assert!(!message.trim().is_empty());
    assert!(message.contains("500"), "unexpected message: {message}");

    match Screen::from_state(state, &DisplayConfig::default()) {
        Screen::Error { message: shown } => assert_eq!(shown, message),
        other => panic!("expected error screen, got {other:?}"),
    }
}

#[tokio::test]
async fn settled_state_ignores_a_second_outcome() {
    let server = StubServer::start(vec![("/assessment", Reply::ok(ASSESSMENT_JSON))]).await;

    let mut view_model = settle_against(&server).await;
    assert!(matches!(view_model.state(), PresentationState::Error { .. }));

    let late = load_dashboard(source_for(&server).fetch_both(), FALLBACK).await;
    assert!(!view_model.settle(late));
}
