
use std::sync::Arc;
use std::time::{Duration, Instant};

use eduportald::auth::{AuthError, Authenticator};
use eduportald::session::SessionStore;
use eduportald::store::Kv;
use parking_lot::Mutex;
use test_support::temp_dir;

fn session_store(dir: &std::path::Path) -> Arc<SessionStore> {
    let kv = Arc::new(Mutex::new(Kv::open(dir).expect("open kv")));
    let store = Arc::new(SessionStore::new(kv));
    store.load();
    store
}

#[test]
fn cancelled_login_never_writes_the_session() {
    let dir = temp_dir("eduportal-cancel-login");
    let session = session_store(&dir);
    let auth = Authenticator::new(Arc::clone(&session)).with_delay(Duration::from_secs(5));

    let handle = auth.begin_login("student@example.com", "pw");
    handle.cancel();
    match handle.wait() {
        Err(AuthError::Cancelled) => {}
        other => panic!("expected cancelled login, got {:?}", other.map(|i| i.email)),
    }
    assert!(!session.is_authenticated());

    // Nothing was persisted either.
    let fresh = session_store(&dir);
    assert!(!fresh.is_authenticated());
}

#[test]
fn cancel_from_another_thread_interrupts_the_delay() {
    let dir = temp_dir("eduportal-cancel-thread");
    let session = session_store(&dir);
    let auth = Authenticator::new(Arc::clone(&session)).with_delay(Duration::from_secs(30));

    let handle = auth.begin_login("faculty@example.com", "pw");
    let token = handle.token();
    let canceller = std::thread::spawn(move || {
        std::thread::sleep(Duration::from_millis(20));
        token.cancel();
    });

    let started = Instant::now();
    let result = handle.wait();
    canceller.join().expect("canceller thread");

    assert!(matches!(result, Err(AuthError::Cancelled)));
    assert!(
        started.elapsed() < Duration::from_secs(5),
        "cancellation should interrupt the delay"
    );
    assert!(!session.is_authenticated());
}

#[test]
fn uncancelled_login_resolves_after_the_delay() {
    let dir = temp_dir("eduportal-delayed-login");
    let session = session_store(&dir);
    let auth = Authenticator::new(Arc::clone(&session)).with_delay(Duration::from_millis(50));

    let started = Instant::now();
    let identity = auth.login("student@example.com", "pw").expect("login");
    assert!(started.elapsed() >= Duration::from_millis(50));
    assert_eq!(identity.email, "student@example.com");
    assert!(session.is_authenticated());
}

#[test]
fn cancelled_signup_never_writes_the_session() {
    let dir = temp_dir("eduportal-cancel-signup");
    let session = session_store(&dir);
    let auth = Authenticator::new(Arc::clone(&session)).with_delay(Duration::from_secs(5));

    let handle = auth.begin_signup(eduportald::auth::SignupProfile {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        institution: None,
        requested_role: None,
    });
    handle.cancel();
    assert!(matches!(handle.wait(), Err(AuthError::Cancelled)));
    assert!(!session.is_authenticated());
}
