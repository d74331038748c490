use chrono::Utc;
use rendezvous_core::{ConnectionId, RegisterResult, RoomId};
use rendezvous_server::{MemoryStore, Store};

use crate::integration::{create_test_endpoint, init_tracing, register_payload};
use crate::utils::GatedStore;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_simultaneous_first_joins() {
    init_tracing();

    let memory = MemoryStore::new();
    // Both joiners read the empty room before either commits.
    let gated = GatedStore::new(memory.clone(), 2);
    let (endpoint, push, _push_rx) = create_test_endpoint(gated.clone());

    let conn_a = ConnectionId::from("conn-a");
    let conn_b = ConnectionId::from("conn-b");

    let payload_a = register_payload("fresh", "a");
    let payload_b = register_payload("fresh", "b");

    let (res_a, res_b) = tokio::join!(
        endpoint.handle(&conn_a, &payload_a, Utc::now()),
        endpoint.handle(&conn_b, &payload_b, Utc::now()),
    );
    let res_a = res_a.expect("join a failed");
    let res_b = res_b.expect("join b failed");

    assert!(res_a.accepted());
    assert!(res_b.accepted());

    // Exactly one of them committed first.
    let mut flags = vec![res_a.is_existing_client(), res_b.is_existing_client()];
    flags.sort();
    assert_eq!(flags, vec![false, true]);
    assert_eq!(gated.conflicts(), 1, "the loser should have retried once");

    let room = memory.get_room(&RoomId::from("fresh")).await.unwrap().unwrap();
    assert_eq!(room.len(), 2);
    assert!(room.contains_connection(&conn_a));
    assert!(room.contains_connection(&conn_b));

    let mut pushed = push.results_for(&conn_a).await;
    pushed.extend(push.results_for(&conn_b).await);
    assert_eq!(pushed.len(), 2);
    assert!(pushed.contains(&RegisterResult::new(true, false)));
    assert!(pushed.contains(&RegisterResult::new(true, true)));
}
