//! End-to-end booking flow: catalog, layout, cart, checkout with promo,
//! and ticket retrieval.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, seed_showtime};
use serde_json::json;

#[tokio::test]
async fn full_booking_flow_with_layout() {
    let app = common::build_test_app();

    let movie = body_json(
        post_json(
            &app,
            "/admin/movies",
            &json!({
                "title": "Interstellar",
                "synopsis": "Space and time",
                "duration_min": 169,
                "rating": "PG-13",
                "genre": "Sci-Fi"
            }),
        )
        .await,
    )
    .await;
    let movie_id = movie["id"].as_i64().unwrap();

    let showtime_id = seed_showtime(
        &app,
        movie_id,
        json!({
            "day": "2025-10-15",
            "time": "19:00",
            "studio": "Studio 1",
            "price": 50000.0,
            "rows": 2,
            "cols": 4,
            "screen_side": "top",
            "aisles_cols": [3],
            "vip_seats": ["A1", "A2"],
            "disabled_seats": ["B4"]
        }),
    )
    .await;

    // the front-end layout shows A1 as VIP and B4 as blocked
    let layout = body_json(get(&app, &format!("/showtimes/{showtime_id}/layout")).await).await;
    assert_eq!(layout["grid"][0][0]["seat_type"], "vip");
    assert_eq!(layout["grid"][1][3]["seat_type"], "blocked");

    let item = body_json(
        post_json(
            &app,
            "/cart/add",
            &json!({ "user_id": "alice", "showtime_id": showtime_id, "seats": ["A1", "A2"] }),
        )
        .await,
    )
    .await;
    assert_eq!(item["subtotal"], 100000.0);

    let seats = body_json(get(&app, &format!("/showtimes/{showtime_id}/seats")).await).await;
    assert_eq!(seats["A1"], "reserved");
    assert_eq!(seats["A2"], "reserved");

    let booking = body_json(
        post_json(
            &app,
            "/checkout",
            &json!({ "user_id": "alice", "promo_code": "DISCOUNT10" }),
        )
        .await,
    )
    .await;
    assert_eq!(booking["total_before_discount"], 100000.0);
    assert_eq!(booking["discount_amount"], 10000.0);
    assert_eq!(booking["total_paid"], 90000.0);
    let booking_code = booking["booking_code"].as_str().unwrap().to_string();
    assert!(booking_code.starts_with("BKG-"));

    let seats = body_json(get(&app, &format!("/showtimes/{showtime_id}/seats")).await).await;
    assert_eq!(seats["A1"], "booked");
    assert_eq!(seats["A2"], "booked");

    let cart = body_json(get(&app, "/cart/alice").await).await;
    assert_eq!(cart["items"], json!([]));

    // the booking is retrievable by code and listed under the user
    let ticket = body_json(get(&app, &format!("/tickets/{booking_code}")).await).await;
    assert_eq!(ticket["total_paid"], 90000.0);
    assert_eq!(ticket["user_id"], "alice");

    let tickets = body_json(get(&app, "/users/alice/tickets").await).await;
    assert_eq!(tickets.as_array().unwrap().len(), 1);
    assert_eq!(tickets[0]["booking_code"], booking_code.as_str());
}

#[tokio::test]
async fn unknown_promo_code_applies_no_discount() {
    let app = common::build_test_app();
    let movie_id = common::seed_movie(&app, "Dune").await;
    let showtime_id = seed_showtime(
        &app,
        movie_id,
        json!({
            "day": "2025-10-20", "time": "20:00", "studio": "S2",
            "price": 50000.0, "rows": 1, "cols": 4
        }),
    )
    .await;

    post_json(
        &app,
        "/cart/add",
        &json!({ "user_id": "bob", "showtime_id": showtime_id, "seats": ["A1", "A2"] }),
    )
    .await;

    let booking = body_json(
        post_json(
            &app,
            "/checkout",
            &json!({ "user_id": "bob", "promo_code": "WHO-DIS" }),
        )
        .await,
    )
    .await;
    assert_eq!(booking["total_before_discount"], 100000.0);
    assert_eq!(booking["discount_amount"], 0.0);
    assert_eq!(booking["total_paid"], 100000.0);
}

#[tokio::test]
async fn checkout_with_an_empty_cart_is_a_400() {
    let app = common::build_test_app();

    let response = post_json(&app, "/checkout", &json!({ "user_id": "nobody" })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Cart is empty");
}

#[tokio::test]
async fn unknown_ticket_is_a_404() {
    let app = common::build_test_app();

    assert_eq!(
        get(&app, "/tickets/BKG-DOESNOTEX").await.status(),
        StatusCode::NOT_FOUND
    );

    let tickets = body_json(get(&app, "/users/ghost/tickets").await).await;
    assert_eq!(tickets, json!([]));
}

#[tokio::test]
async fn health_and_root_respond() {
    let app = common::build_test_app();

    assert_eq!(get(&app, "/health").await.status(), StatusCode::OK);
    assert_eq!(get(&app, "/").await.status(), StatusCode::OK);
}
