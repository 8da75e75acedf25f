use axum::http::{header::CONTENT_LENGTH, HeaderValue};

use crate::helpers::spawn_app;

#[tokio::test]
async fn health_check_works() {
    let test_app = spawn_app().await;

    let response = test_app.get_page("/health").await;

    assert!(response.status().is_success());
    assert_eq!(
        response.headers().get(CONTENT_LENGTH),
        Some(&HeaderValue::from_str("0").unwrap())
    );
}
