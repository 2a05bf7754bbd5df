use dpai_backend::message::{HistoryEntry, HistoryRole};
use dpai_backend::services::session_manager::SessionManager;
use std::time::Duration;
use tokio::time::sleep;

#[tokio::test]
async fn basic_session_flow() {
    let mgr = SessionManager::new(Duration::from_secs(60), 20);
    let sid = mgr.create_session().await;
    assert!(!sid.is_empty());
    let len = mgr.append_message(&sid, HistoryRole::User, "hello").await;
    assert_eq!(len, 1);
    let history = mgr.get_history(&sid).await.unwrap();
    assert_eq!(history.len(), 1);
}

#[tokio::test]
async fn test_created_ids_are_unique() {
    let mgr = SessionManager::new(Duration::from_secs(60), 20);
    let a = mgr.create_session().await;
    let b = mgr.create_session().await;
    assert_ne!(a, b);
}

#[tokio::test]
async fn test_session_expiration() {
    let mgr = SessionManager::new(Duration::from_millis(10), 20);
    let sid = mgr.create_session().await;

    // Wait for expiration
    sleep(Duration::from_millis(20)).await;

    let removed_count = mgr.purge_expired().await;
    assert_eq!(removed_count, 1, "Should have removed 1 expired session");
    assert!(mgr.get_history(&sid).await.is_none(), "Session should already be gone");
}

#[tokio::test]
async fn test_activity_keeps_session_alive() {
    let mgr = SessionManager::new(Duration::from_millis(150), 20);
    let idle = mgr.create_session().await;
    let busy = mgr.create_session().await;

    sleep(Duration::from_millis(100)).await;
    mgr.append_message(&busy, HistoryRole::User, "still here").await;
    sleep(Duration::from_millis(100)).await;

    assert_eq!(mgr.purge_expired().await, 1);
    assert!(mgr.get_history(&idle).await.is_none());
    assert_eq!(
        mgr.get_history(&busy).await.unwrap(),
        vec![HistoryEntry::user("still here")]
    );
}

#[tokio::test]
async fn test_ensure_session_is_idempotent() {
    let mgr = SessionManager::new(Duration::from_secs(60), 20);

    mgr.ensure_session("client-chosen").await;
    mgr.append_message("client-chosen", HistoryRole::User, "flood?").await;
    mgr.append_message("client-chosen", HistoryRole::Assistant, "Move up.").await;
    mgr.ensure_session("client-chosen").await;

    assert_eq!(
        mgr.get_history("client-chosen").await.unwrap(),
        vec![HistoryEntry::user("flood?"), HistoryEntry::assistant("Move up.")]
    );
}
