use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use rstest::{fixture, rstest};
use std::sync::Arc;
use tower::ServiceExt;

use crate::modules::activities::adapters::outbound::in_memory_activity_store::InMemoryActivityStore;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::activities::test_seed;
use crate::tests::fixtures::state::LANDING_PAGE;

#[fixture]
fn app() -> Router {
    let store = Arc::new(InMemoryActivityStore::new(test_seed()));
    router(AppState::in_memory(store, LANDING_PAGE))
}

async fn send(app: &Router, method: Method, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn participants(app: &Router, activity: &str) -> Vec<String> {
    let (_, json) = send(app, Method::GET, "/activities").await;
    serde_json::from_value(json[activity]["participants"].clone()).unwrap()
}

#[rstest]
#[tokio::test]
async fn signs_up_a_new_participant_for_chess_club(app: Router) {
    let (status, json) = send(
        &app,
        Method::POST,
        "/activities/Chess%20Club/signup?email=test@mergington.edu",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Signed up test@mergington.edu for Chess Club");
    let list = participants(&app, "Chess Club").await;
    assert_eq!(list.len(), 3);
    assert!(list.contains(&"test@mergington.edu".to_string()));
}

#[rstest]
#[tokio::test]
async fn rejects_a_second_sign_up_of_the_same_participant(app: Router) {
    let uri = "/activities/Chess%20Club/signup?email=twice@mergington.edu";
    let (first, _) = send(&app, Method::POST, uri).await;
    let (second, json) = send(&app, Method::POST, uri).await;

    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::BAD_REQUEST);
    assert!(json["detail"].as_str().unwrap().contains("already signed up"));
    assert_eq!(participants(&app, "Chess Club").await.len(), 3);
}

#[rstest]
#[tokio::test]
async fn unregisters_an_existing_participant(app: Router) {
    let (status, json) = send(
        &app,
        Method::DELETE,
        "/activities/Chess%20Club/unregister?email=michael@mergington.edu",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["message"].as_str().unwrap().contains("Unregistered"));
    let list = participants(&app, "Chess Club").await;
    assert_eq!(list, vec!["daniel@mergington.edu"]);
}

#[rstest]
#[tokio::test]
async fn leaves_the_roster_alone_when_unregistering_a_stranger(app: Router) {
    let before = participants(&app, "Chess Club").await;
    let (status, json) = send(
        &app,
        Method::DELETE,
        "/activities/Chess%20Club/unregister?email=stranger@mergington.edu",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["detail"].as_str().unwrap().contains("not registered"));
    assert_eq!(participants(&app, "Chess Club").await, before);
}

#[rstest]
#[case(Method::POST, "/activities/NonExistent/signup?email=x@y.edu")]
#[case(Method::POST, "/activities/NonExistent/signup?email=michael@mergington.edu")]
#[case(Method::DELETE, "/activities/NonExistent/unregister?email=x@y.edu")]
#[case(Method::POST, "/activities/chess%20club/signup?email=x@y.edu")]
#[tokio::test]
async fn answers_404_for_unknown_activities(
    app: Router,
    #[case] method: Method,
    #[case] uri: &str,
) {
    let (status, json) = send(&app, method, uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["detail"], "Activity not found");
}

#[rstest]
#[tokio::test]
async fn restores_the_seed_roster_after_sign_up_then_unregister(app: Router) {
    let activity = "Programming Class";
    let email = "flowtest@mergington.edu";
    let seed = participants(&app, activity).await;

    let (signed_up, _) = send(
        &app,
        Method::POST,
        &format!("/activities/Programming%20Class/signup?email={email}"),
    )
    .await;
    assert_eq!(signed_up, StatusCode::OK);
    assert!(participants(&app, activity).await.contains(&email.to_string()));

    let (unregistered, _) = send(
        &app,
        Method::DELETE,
        &format!("/activities/Programming%20Class/unregister?email={email}"),
    )
    .await;
    assert_eq!(unregistered, StatusCode::OK);
    assert_eq!(participants(&app, activity).await, seed);
}

#[rstest]
#[tokio::test]
async fn signs_one_participant_up_for_several_activities(app: Router) {
    let email = "multisport@mergington.edu";
    send(
        &app,
        Method::POST,
        &format!("/activities/Chess%20Club/signup?email={email}"),
    )
    .await;
    send(
        &app,
        Method::POST,
        &format!("/activities/Programming%20Class/signup?email={email}"),
    )
    .await;

    assert!(participants(&app, "Chess Club").await.contains(&email.to_string()));
    assert!(
        participants(&app, "Programming Class")
            .await
            .contains(&email.to_string())
    );
}

#[rstest]
#[tokio::test]
async fn keeps_state_isolated_between_routers(app: Router) {
    send(
        &app,
        Method::POST,
        "/activities/Chess%20Club/signup?email=isolated@mergington.edu",
    )
    .await;

    let fresh = self::app();
    assert_eq!(participants(&fresh, "Chess Club").await.len(), 2);
}
