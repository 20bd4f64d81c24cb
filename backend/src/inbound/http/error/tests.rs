//! Tests for HTTP error mapping.

use super::*;
use crate::domain::{Error, TraceId};
use crate::middleware::Trace;
use actix_web::ResponseError;
use actix_web::body::to_bytes;
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use rstest::{fixture, rstest};
use serde::Deserialize;
use serde_json::{Value, json};

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

async fn body_bytes(error: &Error) -> (StatusCode, Option<String>, Vec<u8>) {
    let response = ResponseError::error_response(error);
    let status = response.status();
    let trace_id = response
        .headers()
        .get(TRACE_ID_HEADER)
        .map(|value| value.to_str().expect("trace id is ASCII").to_owned());
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    (status, trace_id, bytes.to_vec())
}

#[rstest]
#[case::invalid(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case::missing(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case::upstream(Error::upstream_unavailable("down"), StatusCode::BAD_GATEWAY)]
#[case::internal(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), status);
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted(expected_trace_id: String) {
    let error = Error::internal("lock poisoned in product table")
        .with_trace_id(expected_trace_id.clone())
        .with_details(json!({"secret": "x"}));

    let (status, trace_id, bytes) = body_bytes(&error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(trace_id.as_deref(), Some(expected_trace_id.as_str()));
    let payload: Error = serde_json::from_slice(&bytes).expect("error payload");
    assert_eq!(payload.message(), "Internal server error");
    assert_eq!(payload.trace_id(), Some(expected_trace_id.as_str()));
    assert!(payload.details().is_none());
}

#[rstest]
#[actix_web::test]
async fn client_errors_keep_message_and_details(expected_trace_id: String) {
    let error = Error::not_found("product 4 not found")
        .with_trace_id(expected_trace_id)
        .with_details(json!({"id": 4}));

    let (status, _, bytes) = body_bytes(&error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let payload: Value = serde_json::from_slice(&bytes).expect("error payload");
    assert_eq!(payload["code"], "not_found");
    assert_eq!(payload["message"], "product 4 not found");
    assert_eq!(payload["traceId"], TRACE_ID);
    assert_eq!(payload["details"]["id"], 4);
}

#[rstest]
#[actix_web::test]
async fn upstream_failures_have_empty_body_and_trace_header(expected_trace_id: String) {
    let error = Error::upstream_unavailable("users service unavailable")
        .with_trace_id(expected_trace_id.clone());

    let (status, trace_id, bytes) = body_bytes(&error).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(trace_id, Some(expected_trace_id));
    assert!(bytes.is_empty(), "502 responses carry no body");
}

#[actix_web::test]
async fn errors_outside_a_request_have_no_trace_header() {
    let (_, trace_id, _) = body_bytes(&Error::not_found("missing")).await;
    assert!(trace_id.is_none());
}

#[derive(Debug, Deserialize)]
struct Payload {
    #[expect(dead_code, reason = "only decoded to exercise the extractor")]
    name: String,
}

async fn echo(_payload: web::Json<Payload>, id: web::Path<i64>) -> HttpResponse {
    HttpResponse::Ok().body(id.into_inner().to_string())
}

#[rstest]
#[case::not_json("/items/1", "{not json", "invalid JSON body")]
#[case::missing_field("/items/1", "{}", "invalid JSON body")]
#[case::bad_id("/items/abc", "{\"name\":\"x\"}", "invalid path parameter")]
#[actix_web::test]
async fn extractor_failures_become_invalid_request(
    #[case] uri: &str,
    #[case] body: &'static str,
    #[case] message_prefix: &str,
) {
    let app = actix_test::init_service(
        App::new()
            .app_data(json_config())
            .app_data(path_config())
            .wrap(Trace)
            .route("/items/{id}", web::post().to(echo)),
    )
    .await;
    let request = actix_test::TestRequest::post()
        .uri(uri)
        .insert_header(("content-type", "application/json"))
        .set_payload(body)
        .to_request();

    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let header: TraceId = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse().ok())
        .expect("trace id header");
    let payload: Value = actix_test::read_body_json(response).await;
    assert_eq!(payload["code"], "invalid_request");
    assert_eq!(payload["traceId"], header.to_string());
    assert!(
        payload["message"]
            .as_str()
            .is_some_and(|message| message.starts_with(message_prefix)),
        "unexpected message: {payload}"
    );
}

#[rstest]
#[case::not_json("{not json", 1)]
#[case::missing_field("{}", 1)]
#[case::second_line("{\n  \"name\": 5\n}", 2)]
#[actix_web::test]
async fn decode_failures_report_their_location(#[case] body: &'static str, #[case] line: u64) {
    let app = actix_test::init_service(
        App::new()
            .app_data(json_config())
            .route("/items/{id}", web::post().to(echo)),
    )
    .await;
    let request = actix_test::TestRequest::post()
        .uri("/items/1")
        .insert_header(("content-type", "application/json"))
        .set_payload(body)
        .to_request();

    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload: Value = actix_test::read_body_json(response).await;
    assert_eq!(payload["details"]["line"], line);
    assert!(
        payload["details"]["column"].as_u64().is_some_and(|column| column > 0),
        "column missing: {payload}"
    );
}

#[actix_web::test]
async fn wrong_content_type_has_no_location() {
    let app = actix_test::init_service(
        App::new()
            .app_data(json_config())
            .route("/items/{id}", web::post().to(echo)),
    )
    .await;
    let request = actix_test::TestRequest::post()
        .uri("/items/1")
        .insert_header(("content-type", "text/plain"))
        .set_payload("{\"name\":\"x\"}")
        .to_request();

    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload: Value = actix_test::read_body_json(response).await;
    assert_eq!(payload["code"], "invalid_request");
    assert!(payload.get("details").is_none(), "unexpected details: {payload}");
}
