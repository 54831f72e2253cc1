// --- File: crates/slotbook_directory/src/routes_test.rs ---
#[cfg(test)]
mod tests {
    use crate::handlers::DirectoryState;
    use crate::memory::InMemoryBookingDirectory;
    use crate::routes::routes;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use slotbook_config::BookingConfig;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn router(allow_past_dates: bool) -> Router {
        let booking = BookingConfig {
            allow_past_dates,
            ..BookingConfig::default()
        };
        routes(Arc::new(DirectoryState::new(
            Arc::new(InMemoryBookingDirectory::new()),
            booking,
        )))
    }

    fn post_booking(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/bookings")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_bookings(date: &str) -> Request<Body> {
        Request::builder()
            .uri(format!("/bookings?date={date}"))
            .body(Body::empty())
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let app = router(true);

        let response = app
            .clone()
            .oneshot(post_booking(json!({
                "date": "2025-03-10", "slot_id": "2", "time_label": "9:30 AM"
            })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = json_body(response).await;
        assert_eq!(created["slot_id"], "2");

        let response = app.oneshot(get_bookings("2025-03-10")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let listed = json_body(response).await;
        assert_eq!(listed["date"], "2025-03-10");
        assert_eq!(listed["bookings"].as_array().unwrap().len(), 1);
        assert_eq!(listed["bookings"][0]["id"], created["id"]);
    }

    #[tokio::test]
    async fn test_second_booking_of_slot_conflicts() {
        let app = router(true);
        let body = json!({"date": "2025-03-10", "slot_id": "4", "time_label": "5:00 PM"});

        let first = app.clone().oneshot(post_booking(body.clone())).await.unwrap();
        assert_eq!(first.status(), StatusCode::CREATED);

        let second = app.oneshot(post_booking(body)).await.unwrap();
        assert_eq!(second.status(), StatusCode::CONFLICT);
        let error = json_body(second).await;
        assert_eq!(error["error"]["code"], 409);
    }

    #[tokio::test]
    async fn test_unknown_slot_and_label_mismatch_are_rejected() {
        let app = router(true);

        let unknown = app
            .clone()
            .oneshot(post_booking(json!({
                "date": "2025-03-10", "slot_id": "9", "time_label": "9:00 AM"
            })))
            .await
            .unwrap();
        assert_eq!(unknown.status(), StatusCode::BAD_REQUEST);

        let mismatch = app
            .oneshot(post_booking(json!({
                "date": "2025-03-10", "slot_id": "1", "time_label": "9:30 AM"
            })))
            .await
            .unwrap();
        assert_eq!(mismatch.status(), StatusCode::BAD_REQUEST);
        let error = json_body(mismatch).await;
        assert!(error["error"]["message"]
            .as_str()
            .unwrap()
            .contains("does not match"));
    }

    #[tokio::test]
    async fn test_past_date_is_rejected_unless_allowed() {
        let body = json!({"date": "2000-01-03", "slot_id": "3", "time_label": "12:30 PM"});

        let strict = router(false).oneshot(post_booking(body.clone())).await.unwrap();
        assert_eq!(strict.status(), StatusCode::BAD_REQUEST);

        let relaxed = router(true).oneshot(post_booking(body)).await.unwrap();
        assert_eq!(relaxed.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_malformed_date_is_bad_request() {
        let response = router(true)
            .oneshot(get_bookings("10.03.2025"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error = json_body(response).await;
        assert_eq!(error["error"]["code"], 400);
    }

    #[cfg(feature = "openapi")]
    #[test]
    fn test_openapi_document_lists_bookings_path() {
        use utoipa::OpenApi;
        let doc = crate::doc::DirectoryApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/bookings"));
    }
}
