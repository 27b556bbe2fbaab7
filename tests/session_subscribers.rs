
use std::sync::Arc;

use eduportald::session::{Identity, Role, SessionStore};
use eduportald::store::Kv;
use parking_lot::Mutex;
use test_support::temp_dir;

fn identity(email: &str, role: Role) -> Identity {
    Identity {
        id: "1".to_string(),
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        email: email.to_string(),
        role,
        profile_image: None,
        institution: None,
    }
}

#[test]
fn subscribers_observe_the_session_lifecycle() {
    let dir = temp_dir("eduportal-subscribers");
    let kv = Arc::new(Mutex::new(Kv::open(&dir).expect("open kv")));
    let store = SessionStore::new(kv);

    let seen: Arc<Mutex<Vec<Option<String>>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    store.subscribe(move |identity| {
        sink.lock().push(identity.map(|i| i.email.clone()));
    });

    store.load();
    store
        .set(identity("student@example.com", Role::Student))
        .expect("set identity");
    store.clear().expect("clear session");

    let events = seen.lock().clone();
    assert_eq!(
        events,
        vec![
            None,
            Some("student@example.com".to_string()),
            None,
        ]
    );
}

#[test]
fn loading_is_only_true_before_the_initial_load() {
    let dir = temp_dir("eduportal-loading-flag");
    let kv = Arc::new(Mutex::new(Kv::open(&dir).expect("open kv")));
    let store = SessionStore::new(kv);

    assert!(store.is_loading());
    store.load();
    assert!(!store.is_loading());

    store
        .set(identity("admin@example.com", Role::Admin))
        .expect("set identity");
    assert!(!store.is_loading());
}
