//! Integration tests for `SearchClient` using wiremock HTTP mocks.

use chrono::NaiveDate;
use tripfeed_search::{HotelQuery, LocalQuery, SearchClient, SearchError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server: &MockServer) -> SearchClient {
    SearchClient::with_base_url(
        "test-key",
        30,
        "tripfeed-test/0.1",
        &format!("{}/search.json", server.uri()),
    )
    .expect("client construction should not fail")
}

fn hotel_query() -> HotelQuery<'static> {
    HotelQuery {
        q: "North Goa",
        check_in: NaiveDate::from_ymd_opt(2026, 3, 8).unwrap(),
        check_out: NaiveDate::from_ymd_opt(2026, 3, 10).unwrap(),
        adults: 2,
        currency: "INR",
        country: "in",
        language: "en",
    }
}

#[tokio::test]
async fn search_hotels_sends_stay_parameters_and_parses_properties() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "search_metadata": { "status": "Success" },
        "properties": [
            {
                "type": "hotel",
                "name": "Taj Fort Aguada",
                "property_token": "tok_1",
                "overall_rating": 4.6,
                "reviews": 5820,
                "extracted_hotel_class": 5,
                "amenities": ["Free Wi-Fi", "Pool"],
                "rate_per_night": { "lowest": "₹28,500", "extracted_lowest": 28500 }
            },
            {
                "type": "vacation rental",
                "name": "Casa Anjuna"
            }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/search.json"))
        .and(query_param("engine", "google_hotels"))
        .and(query_param("q", "North Goa"))
        .and(query_param("check_in_date", "2026-03-08"))
        .and(query_param("check_out_date", "2026-03-10"))
        .and(query_param("adults", "2"))
        .and(query_param("currency", "INR"))
        .and(query_param("gl", "in"))
        .and(query_param("hl", "en"))
        .and(query_param("api_key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let properties = client
        .search_hotels(&hotel_query())
        .await
        .expect("should parse properties");

    assert_eq!(properties.len(), 2);
    assert_eq!(properties[0].name.as_deref(), Some("Taj Fort Aguada"));
    assert_eq!(properties[0].extracted_hotel_class, Some(5));
    assert_eq!(properties[1].kind.as_deref(), Some("vacation rental"));
}

#[tokio::test]
async fn search_restaurants_sends_map_center() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "local_results": [
            { "place_id": "p1", "title": "Gunpowder", "price": "$$", "type": "Goan" }
        ]
    });

    Mock::given(method("GET"))
        .and(query_param("engine", "google_local"))
        .and(query_param("q", "restaurants Goa"))
        .and(query_param("ll", "@15.2993,74.1240,14z"))
        .and(query_param("hl", "en"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let results = client
        .search_restaurants(&LocalQuery {
            q: "restaurants Goa",
            map_center: "@15.2993,74.1240,14z",
            language: "en",
        })
        .await
        .expect("should parse local results");

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title.as_deref(), Some("Gunpowder"));
    assert_eq!(results[0].price.as_deref(), Some("$$"));
}

#[tokio::test]
async fn missing_result_array_is_empty_not_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "search_metadata": {} })),
        )
        .mount(&server)
        .await;

    let client = test_client(&server);
    let properties = client.search_hotels(&hotel_query()).await.unwrap();
    assert!(properties.is_empty());
}

#[tokio::test]
async fn error_field_in_ok_body_is_provider_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "error": "Invalid API key." })),
        )
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client.search_hotels(&hotel_query()).await.unwrap_err();

    let msg = err.to_string();
    assert!(matches!(err, SearchError::Provider(_)));
    assert!(
        msg.contains("Invalid API key"),
        "expected error message to contain 'Invalid API key', got: {msg}"
    );
}

#[tokio::test]
async fn error_field_in_non_2xx_body_is_provider_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({ "error": "Invalid API key." })),
        )
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client.search_hotels(&hotel_query()).await.unwrap_err();
    assert!(matches!(err, SearchError::Provider(_)));
}

#[tokio::test]
async fn server_error_is_unexpected_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client.search_hotels(&hotel_query()).await.unwrap_err();
    assert!(matches!(err, SearchError::UnexpectedStatus { status: 503 }));
}

#[tokio::test]
async fn malformed_body_is_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client.search_hotels(&hotel_query()).await.unwrap_err();
    assert!(matches!(err, SearchError::Deserialize { .. }));
    assert!(!err.to_string().contains("test-key"));
}
