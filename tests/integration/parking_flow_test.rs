//! End-to-end parking flows through the lot front door.

mod helpers;

use std::time::Duration;

use parkhub_core::config::AppConfig;
use parkhub_core::error::ErrorKind;
use parkhub_entity::{PaymentMode, SpotKind, TicketStatus};

use helpers::{TestLot, bike, car, ev, floor, truck, van};

#[tokio::test]
async fn test_enter_pay_exit_round_trip_reuses_spot() {
    let app = TestLot::new(vec![floor("F1", 0, 1, 0, 0)]).await;

    let first = app.park(&car(1)).await;
    assert_eq!(app.available().await, 0);

    app.clock.advance(Duration::from_secs(45 * 60));
    let receipt = app.lot.pay(&first, PaymentMode::Card).unwrap();
    assert_eq!(receipt.hold_units, 1);
    assert_eq!(receipt.amount, 4.0);
    assert_eq!(first.status(), TicketStatus::Paid);

    app.lot.exit(&first).await.unwrap();
    assert_eq!(app.available().await, 1);

    let second = app.park(&car(2)).await;
    assert_eq!(second.spot_id(), first.spot_id());
}

#[tokio::test]
async fn test_unpaid_exit_keeps_spot_occupied() {
    let app = TestLot::standard().await;
    let ticket = app.park(&truck(1)).await;

    let err = app.lot.exit(&ticket).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::PaymentRequired);
    assert_eq!(app.occupied().await, 1);
}

#[tokio::test]
async fn test_second_exit_is_conflict_and_leaves_new_holder_alone() {
    let app = TestLot::new(vec![floor("F1", 1, 0, 0, 0)]).await;

    let first = app.park(&bike(1)).await;
    app.lot.pay(&first, PaymentMode::Cash).unwrap();
    app.lot.exit(&first).await.unwrap();

    let second = app.park(&bike(2)).await;
    assert_eq!(second.spot_id(), first.spot_id());

    let err = app.lot.exit(&first).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Conflict);
    assert_eq!(app.occupied().await, 1);
}

#[tokio::test]
async fn test_paying_twice_is_conflict() {
    let app = TestLot::standard().await;
    let ticket = app.park(&van(1)).await;

    app.lot.pay(&ticket, PaymentMode::Card).unwrap();
    let err = app.lot.pay(&ticket, PaymentMode::Cash).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Conflict);
}

#[tokio::test]
async fn test_electric_then_car_take_matching_spots() {
    let app = TestLot::new(vec![floor("F1", 0, 1, 1, 0)]).await;

    let electric = app.park(&ev(1)).await;
    let compact = app.park(&car(1)).await;

    assert_eq!(electric.spot_kind(), SpotKind::Electric);
    assert_eq!(compact.spot_kind(), SpotKind::Compact);
    assert_eq!(app.available().await, 0);
}

#[tokio::test]
async fn test_truck_and_van_share_large_spots() {
    let app = TestLot::new(vec![floor("F1", 0, 0, 0, 1)]).await;

    let ticket = app.park(&truck(1)).await;
    let denied = app.lot.park_anywhere(&van(1)).await.unwrap();
    assert!(!denied.is_granted());

    app.lot.pay(&ticket, PaymentMode::Card).unwrap();
    app.lot.exit(&ticket).await.unwrap();
    assert_eq!(app.park(&van(1)).await.spot_kind(), SpotKind::Large);
}

#[tokio::test]
async fn test_charges_follow_tiers() {
    let app = TestLot::new(vec![floor("F1", 0, 4, 0, 0)]).await;
    let tickets = [
        app.park(&car(1)).await,
        app.park(&car(2)).await,
        app.park(&car(3)).await,
        app.park(&car(4)).await,
    ];

    // Hold units are whole elapsed hours plus one.
    let cases = [(0, 4.0), (1, 7.5), (2, 11.0), (4, 16.0)];
    let mut elapsed = 0;
    for (ticket, (hours, expected)) in tickets.iter().zip(cases) {
        app.clock.advance(Duration::from_secs((hours - elapsed) * 60 * 60));
        elapsed = hours;
        assert_eq!(app.lot.quote(ticket), expected);
    }
}

#[tokio::test]
async fn test_default_config_builds_demo_lot() {
    let config = AppConfig::default();
    let app = TestLot::new(config.layout.floors.clone()).await;

    assert_eq!(app.available().await, config.layout.total_spots());
    let names: Vec<String> = app.lot.status().await.into_iter().map(|f| f.name).collect();
    assert_eq!(names, vec!["F1", "F2"]);
}
