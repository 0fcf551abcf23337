use placement_session::{
    FileStorage, GuardState, Identity, IdentityResolver, PrincipalRecord, RecordingNavigator,
    RestoreOutcome, Role, RoleGuard, SessionState, SessionStore, StaticDirectory,
    DEFAULT_STORAGE_KEY, PUBLIC_ENTRY,
};
use std::path::Path;
use std::sync::Arc;

fn directory() -> Arc<StaticDirectory> {
    Arc::new(StaticDirectory::new(
        vec![
            PrincipalRecord::new("student_1", "arjun.kumar@college.edu", "Arjun Kumar"),
            PrincipalRecord::new("student_2", "priya.singh@college.edu", "Priya Singh"),
        ],
        vec![PrincipalRecord::new(
            "recruiter_1",
            "john.smith@techcorp.com",
            "John Smith",
        )],
    ))
}

/// A store over the given file, as a freshly started process would build it.
fn boot(path: &Path) -> SessionStore {
    SessionStore::new(
        IdentityResolver::new(directory()),
        Arc::new(FileStorage::new(path)),
        DEFAULT_STORAGE_KEY,
    )
}

#[tokio::test]
async fn test_login_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("local-storage.json");

    let first = boot(&path);
    assert_eq!(first.restore().await, RestoreOutcome::Empty);
    let identity = first
        .login("arjun.kumar@college.edu", "anything", Role::Student)
        .await
        .unwrap();
    drop(first);

    let second = boot(&path);
    assert_eq!(second.restore().await, RestoreOutcome::Restored);
    assert_eq!(second.current_identity(), Some(identity));
}

#[tokio::test]
async fn test_demo_identity_survives_restart_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("local-storage.json");

    let first = boot(&path);
    first.restore().await;
    let identity = first
        .login("nobody@x.com", "x", Role::Recruiter)
        .await
        .unwrap();

    let second = boot(&path);
    second.restore().await;
    let restored = second.current_identity().unwrap();
    assert_eq!(restored, identity);
    assert_eq!(restored.name(), "nobody");
}

#[tokio::test]
async fn test_logout_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("local-storage.json");

    let first = boot(&path);
    first.restore().await;
    first.login("root@college.edu", "x", Role::Admin).await.unwrap();
    first.logout().await.unwrap();

    let second = boot(&path);
    assert_eq!(second.restore().await, RestoreOutcome::Empty);
    assert_eq!(second.current_identity(), None);
}

#[tokio::test]
async fn test_corrupt_entry_restores_unauthenticated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("local-storage.json");
    let contents = serde_json::json!({ "placement_user": "{\"id\": 42" });
    std::fs::write(&path, contents.to_string()).unwrap();

    let store = boot(&path);
    assert_eq!(store.restore().await, RestoreOutcome::Discarded);
    assert_eq!(store.state(), SessionState::Ready(None));

    // The bad entry is gone for the next process too.
    let again = boot(&path);
    assert_eq!(again.restore().await, RestoreOutcome::Empty);
}

#[tokio::test]
async fn test_unreadable_file_restores_unauthenticated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("local-storage.json");
    std::fs::write(&path, "garbage").unwrap();

    let store = boot(&path);
    assert_eq!(store.restore().await, RestoreOutcome::Discarded);
    assert!(!store.is_authenticated());

    // Logging in replaces the unreadable file.
    let identity = store.login("root@college.edu", "x", Role::Admin).await.unwrap();
    let persisted: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let raw = persisted[DEFAULT_STORAGE_KEY].as_str().unwrap();
    assert_eq!(Identity::from_persisted(raw), Some(identity));
}

#[tokio::test]
async fn test_guard_waits_for_restore_then_follows_logout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("local-storage.json");

    let seed = boot(&path);
    seed.restore().await;
    seed.login("root@college.edu", "x", Role::Admin).await.unwrap();

    let store = Arc::new(boot(&path));
    let guard = RoleGuard::new(Role::Admin);
    let navigator = RecordingNavigator::new();
    let mut rx = store.subscribe();

    assert_eq!(guard.check(&store, &navigator), GuardState::Loading);

    let restorer = {
        let store = store.clone();
        tokio::spawn(async move { store.restore().await })
    };

    let decision = guard.when_ready(&mut rx, &navigator).await;
    assert!(matches!(decision, GuardState::Authorized(ref id) if id.id() == "admin_1"));
    assert_eq!(restorer.await.unwrap(), RestoreOutcome::Restored);
    assert!(navigator.visits().is_empty());

    store.logout().await.unwrap();
    let after_logout = guard.next_change(&mut rx, &navigator).await;
    assert_eq!(after_logout, Some(GuardState::Redirecting(PUBLIC_ENTRY)));
    assert_eq!(navigator.last().as_deref(), Some(PUBLIC_ENTRY));
}

#[tokio::test]
async fn test_every_role_gets_its_own_area_only() {
    let dir = tempfile::tempdir().unwrap();
    let store = boot(&dir.path().join("local-storage.json"));
    store.restore().await;
    let navigator = RecordingNavigator::new();

    for role in Role::ALL {
        store.login("someone@college.edu", "x", role).await.unwrap();
        for area in Role::ALL {
            let decision = RoleGuard::new(area).check(&store, &navigator);
            if area == role {
                assert!(matches!(decision, GuardState::Authorized(_)));
            } else {
                assert_eq!(decision, GuardState::Redirecting(PUBLIC_ENTRY));
            }
        }
    }
}
