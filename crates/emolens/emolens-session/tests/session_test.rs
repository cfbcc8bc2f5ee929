use emolens_core::errors::{EmolensError, SessionError};
use emolens_core::traits::ITrendTracker;
use emolens_session::{
    cleanup_stale_sessions, export_timeline, timeline_file_name, write_timeline, SessionContext,
    SessionManager,
};

#[test]
fn start_session_generates_unique_ids() {
    let manager = SessionManager::new();
    let a = manager.start_session();
    let b = manager.start_session();
    assert_ne!(a, b);
    assert_eq!(manager.session_count(), 2);
    assert!(uuid::Uuid::parse_str(&a).is_ok());
}

#[test]
fn create_session_rejects_duplicates() {
    let manager = SessionManager::new();
    manager.create_session("learner-1".to_string()).unwrap();
    let err = manager
        .create_session("learner-1".to_string())
        .unwrap_err();
    assert!(matches!(
        err,
        EmolensError::SessionError(SessionError::AlreadyExists { .. })
    ));
}

#[test]
fn new_session_history_is_bound_and_empty() {
    let manager = SessionManager::with_capacity(4);
    let sid = manager.create_session("s".to_string()).unwrap();
    let ctx = manager.get_session(&sid).unwrap();
    assert!(ctx.history.is_empty());
    assert_eq!(ctx.history.capacity(), 4);
    assert!(ctx.history.is_owned_by("s"));
}

#[test]
fn with_session_mutates_only_that_session() {
    let manager = SessionManager::new();
    manager.create_session("a".to_string()).unwrap();
    manager.create_session("b".to_string()).unwrap();

    for _ in 0..3 {
        manager
            .with_session("a", |ctx| ctx.history.update(0.8, 0.4))
            .unwrap();
    }
    manager
        .with_session("b", |ctx| ctx.history.update(-0.8, 0.4))
        .unwrap();

    let momentum_b = manager.with_session("b", |ctx| ctx.history.momentum()).unwrap();
    assert_eq!(momentum_b, 0.0);
    assert_eq!(manager.get_session("a").unwrap().history.len(), 3);
    assert_eq!(manager.get_session("b").unwrap().history.len(), 1);
}

#[test]
fn with_session_on_unknown_id_is_not_found() {
    let manager = SessionManager::new();
    let err = manager.with_session("ghost", |_| ()).unwrap_err();
    assert!(err.to_string().contains("ghost"));
}

#[test]
fn end_session_returns_final_context_and_removes_it() {
    let manager = SessionManager::new();
    let sid = manager.start_session();
    manager.with_session(&sid, |ctx| ctx.record_observation()).unwrap();

    let ctx = manager.end_session(&sid).unwrap();
    assert_eq!(ctx.observations_made, 1);
    assert!(!manager.contains(&sid));
    assert!(manager.end_session(&sid).is_err());
}

#[test]
fn cleanup_removes_idle_sessions() {
    let manager = SessionManager::new();
    manager.create_session("active".to_string()).unwrap();
    manager.create_session("stale".to_string()).unwrap();

    manager
        .with_session("stale", |ctx| {
            ctx.last_activity = chrono::Utc::now() - chrono::Duration::hours(3);
        })
        .unwrap();

    let removed = cleanup_stale_sessions(&manager, chrono::Duration::hours(1));
    assert_eq!(removed, 1);
    assert!(manager.contains("active"));
    assert!(!manager.contains("stale"));
}

#[test]
fn concurrent_updates_to_one_session_are_not_lost() {
    use std::sync::Arc;
    use std::thread;

    let manager = Arc::new(SessionManager::with_capacity(1000));
    manager.create_session("shared".to_string()).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let mgr = Arc::clone(&manager);
            thread::spawn(move || {
                for _ in 0..100 {
                    mgr.with_session("shared", |ctx| {
                        ctx.history.update(0.1, 0.1);
                        ctx.record_observation();
                    })
                    .unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let ctx = manager.get_session("shared").unwrap();
    assert_eq!(ctx.history.len(), 400);
    assert_eq!(ctx.observations_made, 400);
}

#[test]
fn concurrent_sessions_stay_isolated() {
    use std::sync::Arc;
    use std::thread;

    let manager = Arc::new(SessionManager::new());
    for i in 0..4 {
        manager.create_session(format!("sess{i}")).unwrap();
    }

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let mgr = Arc::clone(&manager);
            thread::spawn(move || {
                let sid = format!("sess{i}");
                let valence = i as f64 / 4.0;
                for _ in 0..50 {
                    mgr.with_session(&sid, |ctx| ctx.history.update(valence, 0.3))
                        .unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    for i in 0..4 {
        let ctx = manager.get_session(&format!("sess{i}")).unwrap();
        let expected = i as f64 / 4.0;
        assert!(ctx.history.valences().iter().all(|v| *v == expected));
    }
}

#[test]
fn empty_timeline_exports_as_empty_array() {
    let manager = SessionManager::new();
    let sid = manager.start_session();
    let ctx = manager.get_session(&sid).unwrap();
    let json = export_timeline(&ctx).unwrap();
    assert_eq!(json.trim(), "[]");
}

#[test]
fn timeline_file_name_is_path_safe() {
    assert_eq!(timeline_file_name("abc-123"), "session_abc-123.json");
    assert_eq!(timeline_file_name("../etc/x"), "session____etc_x.json");
}

#[test]
fn write_timeline_creates_session_file() {
    let dir = tempfile::tempdir().unwrap();
    let manager = SessionManager::new();
    manager.create_session("learner".to_string()).unwrap();
    let ctx = manager.get_session("learner").unwrap();

    let path = write_timeline(&ctx, dir.path()).unwrap();
    assert_eq!(path, dir.path().join("session_learner.json"));
    let written = std::fs::read_to_string(path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert!(parsed.as_array().unwrap().is_empty());
}

#[test]
fn reloaded_context_keeps_history_bounded() {
    let ctx = SessionContext::new("learner".into(), 4);
    let mut value = serde_json::to_value(&ctx).unwrap();
    value["history"]["capacity"] = serde_json::json!(0);

    let mut reloaded: SessionContext = serde_json::from_value(value).unwrap();
    for _ in 0..3 {
        reloaded.history.update(0.2, 0.4);
    }
    assert_eq!(reloaded.history.capacity(), 1);
    assert_eq!(reloaded.history.len(), 1);
}
