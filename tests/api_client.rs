use studio_admin::domain::query::SearchQuery;
use studio_admin::domain::session::SessionState;
use studio_admin::repository::errors::ApiError;
use studio_admin::repository::{ApiClient, SearchBackend};
use studio_admin::services::ServiceError;
use studio_admin::services::session::{check_session, login, logout};

mod common;

#[actix_web::test]
async fn login_cookie_is_sent_with_later_requests() {
    let (base_url, received) = common::spawn_backend().unwrap();
    let api = ApiClient::new(&base_url).unwrap();

    assert_eq!(check_session(&api).await, SessionState::Unauthenticated);
    assert_eq!(
        login(&api, "admin", common::PASSWORD).await.unwrap(),
        SessionState::Authenticated
    );

    let body = api
        .find("clientele/find", SearchQuery::build([("last_name", "Doe")]))
        .await
        .unwrap();
    assert_eq!(body[0]["client_id"], "abc123");
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(received.queries(), vec!["last_name=Doe"]);
}

#[actix_web::test]
async fn query_values_are_form_encoded() {
    let (base_url, received) = common::spawn_backend().unwrap();
    let api = ApiClient::new(&base_url).unwrap();
    login(&api, "admin", common::PASSWORD).await.unwrap();

    let body = api
        .find(
            "clientele/find",
            SearchQuery::build([("first_name", "Mary Ann"), ("last_name", "O'Neil")]),
        )
        .await
        .unwrap();
    assert_eq!(body[0]["client_id"], "def456");
    assert_eq!(
        received.queries(),
        vec!["first_name=Mary+Ann&last_name=O%27Neil"]
    );
}

#[actix_web::test]
async fn wrong_password_is_rejected() {
    let (base_url, _) = common::spawn_backend().unwrap();
    let api = ApiClient::new(&base_url).unwrap();

    let result = login(&api, "admin", "guess").await;
    assert!(matches!(
        result,
        Err(ServiceError::Api(ApiError::Status(401)))
    ));
    assert_eq!(check_session(&api).await, SessionState::Unauthenticated);
}

#[actix_web::test]
async fn search_without_session_is_unauthorized() {
    let (base_url, received) = common::spawn_backend().unwrap();
    let api = ApiClient::new(&base_url).unwrap();

    let err = api
        .find("clientele/find", SearchQuery::build([("last_name", "Doe")]))
        .await
        .unwrap_err();
    assert!(err.is_unauthorized());
    assert!(received.queries().is_empty());
}

#[actix_web::test]
async fn error_status_and_bad_body_are_reported() {
    let (base_url, _) = common::spawn_backend().unwrap();
    let api = ApiClient::new(&base_url).unwrap();

    let err = api
        .find("invoicing/find", SearchQuery::build([("invoice_number", "7")]))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Status(500)));

    // A JSON object is valid JSON; rejecting it is the row decoder's job.
    let body = api
        .find("booking/find", SearchQuery::build([("booking_number", "7")]))
        .await
        .unwrap();
    assert!(body.is_object());
}

#[actix_web::test]
async fn logout_clears_the_session() {
    let (base_url, _) = common::spawn_backend().unwrap();
    let api = ApiClient::new(&base_url).unwrap();
    login(&api, "admin", common::PASSWORD).await.unwrap();

    assert_eq!(logout(&api).await.unwrap(), SessionState::Unauthenticated);
    assert_eq!(check_session(&api).await, SessionState::Unauthenticated);
}

#[actix_web::test]
async fn unreachable_backend_is_a_transport_error() {
    let api = ApiClient::new("http://127.0.0.1:9").unwrap();

    let err = api
        .find("clientele/find", SearchQuery::build([("last_name", "Doe")]))
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
    assert_eq!(check_session(&api).await, SessionState::Unauthenticated);
}
