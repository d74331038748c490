use std::sync::Arc;

use chrono::Utc;
use rendezvous_core::ConnectionId;
use rendezvous_server::{MemoryStore, RegistrationError};

use crate::integration::{create_test_endpoint, init_tracing};

#[tokio::test]
async fn test_malformed_command_is_dropped() {
    init_tracing();

    let store = MemoryStore::new();
    let (endpoint, push, _push_rx) = create_test_endpoint(Arc::new(store.clone()));
    let conn = ConnectionId::from("conn1");

    for payload in [
        "",
        "not json",
        r#"{"type":"register"}"#,
        r#"{"type":"register","roomId":42,"clientId":"c1"}"#,
    ] {
        let err = endpoint
            .handle(&conn, payload, Utc::now())
            .await
            .expect_err("payload should not decode");
        assert!(
            matches!(err, RegistrationError::Decode(_)),
            "unexpected error for {payload:?}: {err}"
        );
        assert!(!err.is_committed());
    }

    assert_eq!(push.count().await, 0);
    assert_eq!(store.room_count(), 0);
    assert_eq!(store.connection_count(), 0);
}
