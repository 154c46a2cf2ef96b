use booking_slots::{BookingEngine, HttpBookingApi, SlotSelector};
use httpmock::prelude::*;

// When /api/services is down or broken the form degrades to the two built-in
// services instead of failing.

#[tokio::test]
async fn test_service_endpoint_failure_uses_fallback_catalog() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/services");
        then.status(500);
    });
    let slots_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/get_slots")
            .query_param("duration", "90");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!(["11:00"]));
    });

    let engine = BookingEngine::new(HttpBookingApi::new(server.base_url()));
    let report = engine
        .check_availability(
            "2099-01-01",
            &["tire-change".to_string(), "balancing".to_string()],
        )
        .await
        .unwrap();

    // Durations came from the fallback catalog: 60 + 30.
    slots_mock.assert();
    assert_eq!(report.total_duration, 90);
    assert_eq!(report.total_price, 250);

    let names: Vec<&str> = report.services.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["Schimb Anvelope Sezonier", "Echilibrare Roți"]);
}

#[tokio::test]
async fn test_malformed_service_payload_uses_fallback_catalog() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/services");
        then.status(200)
            .header("Content-Type", "application/json")
            .body("{\"not\": \"an array\"}");
    });
    server.mock(|when, then| {
        when.method(GET).path("/get_slots");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([]));
    });

    let engine = BookingEngine::new(HttpBookingApi::new(server.base_url()));
    let report = engine
        .check_availability("2099-01-01", &["balancing".to_string()])
        .await
        .unwrap();

    assert_eq!(report.total_duration, 30);
    assert_eq!(report.services[0].id, "balancing");
}

#[tokio::test]
async fn test_unknown_service_with_fallback_catalog_still_queries() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/services");
        then.status(500);
    });
    // Unknown id contributes nothing to the duration but still travels along.
    let slots_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/get_slots")
            .query_param("services", "oil-change,balancing")
            .query_param("duration", "30");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!(["12:00"]));
    });

    let engine = BookingEngine::new(HttpBookingApi::new(server.base_url()));
    let report = engine
        .check_availability(
            "2099-01-01",
            &["oil-change".to_string(), "balancing".to_string()],
        )
        .await
        .unwrap();

    slots_mock.assert();
    assert_eq!(report.total_duration, 30);
    match &report.selector {
        SlotSelector::Ready(options) => {
            assert!(options.iter().any(|o| o.id == "12:00" && o.selectable));
        }
        other => panic!("expected rendered options, got {:?}", other),
    }
}
