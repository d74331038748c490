use std::sync::Arc;

use chrono::{Duration, Utc};
use rendezvous_core::{ConnectionId, RegisterResult, RoomId};
use rendezvous_server::{MemoryStore, Store};

use crate::integration::{create_test_endpoint, init_tracing, register_payload};

#[tokio::test]
async fn test_room_fills_then_rejects() {
    init_tracing();

    let store = MemoryStore::new();
    let (endpoint, push, mut push_rx) = create_test_endpoint(Arc::new(store.clone()));
    let t0 = Utc::now();
    let room_id = RoomId::from("r1");

    // First participant opens the room
    let conn1 = ConnectionId::from("conn1");
    let outcome = endpoint
        .handle(&conn1, &register_payload("r1", "c1"), t0)
        .await
        .expect("first join failed");
    assert!(outcome.accepted());
    assert!(!outcome.is_existing_client());

    let pushed = push_rx.recv().await.expect("no push for conn1");
    assert_eq!(pushed.connection_id, conn1);
    assert_eq!(pushed.result(), RegisterResult::new(true, false));

    let room = store.get_room(&room_id).await.unwrap().unwrap();
    assert_eq!(room.len(), 1);

    // Second participant finds the first one waiting
    let conn2 = ConnectionId::from("conn2");
    let outcome = endpoint
        .handle(&conn2, &register_payload("r1", "c2"), t0 + Duration::seconds(1))
        .await
        .expect("second join failed");
    assert!(outcome.accepted());
    assert!(outcome.is_existing_client());
    assert_eq!(push.results_for(&conn2).await, vec![RegisterResult::new(true, true)]);

    let room = store.get_room(&room_id).await.unwrap().unwrap();
    assert_eq!(room.len(), 2);

    // Third is turned away
    let conn3 = ConnectionId::from("conn3");
    let outcome = endpoint
        .handle(&conn3, &register_payload("r1", "c3"), t0 + Duration::seconds(2))
        .await
        .expect("third join failed");
    assert!(!outcome.accepted());
    assert!(outcome.is_existing_client());
    assert_eq!(push.results_for(&conn3).await, vec![RegisterResult::new(false, true)]);

    let room = store.get_room(&room_id).await.unwrap().unwrap();
    assert_eq!(room.len(), 2);
    assert_eq!(room.created_at, t0);
    assert_eq!(push.count().await, 3);
}
