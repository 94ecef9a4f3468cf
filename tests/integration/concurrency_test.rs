//! Concurrent arrivals against shared pools.

mod helpers;

use futures::future::join_all;

use parkhub_alloc::AllocationResult;
use parkhub_entity::{PaymentMode, Vehicle};

use helpers::{TestLot, bike, car, floor};

async fn arrive_together(app: &TestLot, vehicles: Vec<Vehicle>) -> Vec<AllocationResult> {
    let handles = vehicles.into_iter().map(|vehicle| {
        let lot = app.lot.clone();
        tokio::spawn(async move { lot.park_anywhere(&vehicle).await.unwrap() })
    });

    join_all(handles)
        .await
        .into_iter()
        .map(|joined| joined.unwrap())
        .collect()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_three_cars_two_compact_spots() {
    let app = TestLot::new(vec![floor("F1", 0, 2, 0, 0)]).await;

    let results = arrive_together(&app, (1..=3).map(car).collect()).await;

    let granted = results.iter().filter(|r| r.is_granted()).count();
    assert_eq!(granted, 2);
    assert_eq!(results.len() - granted, 1);
    assert_eq!(app.available().await, 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_single_spot_has_single_winner() {
    let app = TestLot::new(vec![floor("F1", 1, 0, 0, 0)]).await;

    let results = arrive_together(&app, (1..=32).map(bike).collect()).await;

    assert_eq!(results.iter().filter(|r| r.is_granted()).count(), 1);
    assert_eq!(app.occupied().await, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_overflow_spills_across_floors() {
    let app = TestLot::new(vec![floor("F1", 0, 2, 0, 0), floor("F2", 0, 2, 0, 0)]).await;

    let results = arrive_together(&app, (1..=5).map(car).collect()).await;
    let tickets: Vec<_> = results.into_iter().filter_map(|r| r.into_ticket()).collect();

    assert_eq!(tickets.len(), 4);
    assert_eq!(tickets.iter().filter(|t| t.floor() == "F1").count(), 2);
    assert_eq!(tickets.iter().filter(|t| t.floor() == "F2").count(), 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_counts_stay_consistent_under_churn() {
    let app = TestLot::new(vec![floor("F1", 2, 3, 0, 0)]).await;

    let handles = (1..=40).map(|n| {
        let lot = app.lot.clone();
        tokio::spawn(async move {
            let vehicle = if n % 2 == 0 { car(n) } else { bike(n) };
            if let Some(ticket) = lot.park_anywhere(&vehicle).await.unwrap().into_ticket() {
                tokio::task::yield_now().await;
                lot.pay(&ticket, PaymentMode::Card).unwrap();
                lot.exit(&ticket).await.unwrap();
            }
        })
    });
    for joined in join_all(handles).await {
        joined.unwrap();
    }

    for status in app.lot.status().await {
        for pool in status.pools {
            assert_eq!(pool.available + pool.occupied, pool.total);
            assert_eq!(pool.occupied, 0);
        }
    }
}
