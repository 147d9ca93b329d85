use std::sync::{Arc, Barrier};
use std::thread;

use vehicle_store::{InMemoryVehicleStore, VehicleError, VehicleQueries, VehicleStore};

use crate::support::vehicle;

#[test]
fn racing_creates_with_same_id_have_exactly_one_winner() {
    for _ in 0..50 {
        let store = InMemoryVehicleStore::new();
        let barrier = Arc::new(Barrier::new(2));

        let handles: Vec<_> = ["Toyota", "Ford"]
            .into_iter()
            .map(|brand| {
                let store = store.clone();
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    (brand, store.create(vehicle(7, brand, "red", 2020)))
                })
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let winners: Vec<_> = results.iter().filter(|(_, r)| r.is_ok()).collect();
        let losers: Vec<_> = results.iter().filter(|(_, r)| r.is_err()).collect();

        assert_eq!(winners.len(), 1);
        assert_eq!(losers.len(), 1);
        assert_eq!(losers[0].1, Err(VehicleError::AlreadyExists(7)));

        let stored = store.find_by_id(7).unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].brand, winners[0].0);
    }
}

#[test]
fn concurrent_batches_never_interleave() {
    let store = InMemoryVehicleStore::new();
    let barrier = Arc::new(Barrier::new(4));

    // Every batch shares id 1000, so exactly one batch can land.
    let handles: Vec<_> = (0..4i64)
        .map(|n| {
            let store = store.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                let batch = (0..10)
                    .map(|i| vehicle(n * 100 + i + 1, "Kia", "red", 2021))
                    .chain(std::iter::once(vehicle(1000, "Kia", "red", 2021)))
                    .collect();
                barrier.wait();
                store.create_batch(batch)
            })
        })
        .collect();

    let successes = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|r| r.is_ok())
        .count();

    assert_eq!(successes, 1);
    assert_eq!(store.len().unwrap(), 11);
}

#[test]
fn readers_see_whole_records_during_updates() {
    let store = InMemoryVehicleStore::new();
    store
        .create_batch((1..=20).map(|id| vehicle(id, "Toyota", "red", 2020)).collect())
        .unwrap();

    let writer = {
        let store = store.clone();
        thread::spawn(move || {
            for round in 0..200 {
                for id in 1..=20 {
                    store.update_speed(id, f64::from(round)).unwrap();
                }
            }
        })
    };

    let readers: Vec<_> = (0..3)
        .map(|_| {
            let store = store.clone();
            thread::spawn(move || {
                for _ in 0..200 {
                    let all = store.find_all().unwrap();
                    assert_eq!(all.len(), 20);
                    let red = store.find_by_color("red").unwrap();
                    assert_eq!(red.len(), 20);
                    assert!(red.iter().all(|v| v.brand == "Toyota"));
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }
    assert!(store.find_all().unwrap().values().all(|v| v.max_speed == 199.0));
}
