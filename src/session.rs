use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::store::Kv;

/// Key of the persisted session blob.
pub const SESSION_KEY: &str = "user";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Faculty,
    Admin,
    None,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Faculty => "faculty",
            Role::Admin => "admin",
            Role::None => "none",
        }
    }
}

/// The authenticated user's profile for the duration of a session. Fabricated
/// by the authenticator, owned by the session store; no other component
/// mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
}

type Subscriber = Box<dyn Fn(Option<&Identity>) + Send>;

/// Holds zero-or-one identity and persists it synchronously through the
/// key-value store. Constructed per portal instance so independent stores can
/// coexist; consumers that need to react to sign-in/sign-out register a
/// subscriber callback.
pub struct SessionStore {
    kv: Arc<Mutex<Kv>>,
    identity: Mutex<Option<Identity>>,
    loading: AtomicBool,
    subscribers: Mutex<Vec<Subscriber>>,
}

impl SessionStore {
    pub fn new(kv: Arc<Mutex<Kv>>) -> SessionStore {
        SessionStore {
            kv,
            identity: Mutex::new(None),
            loading: AtomicBool::new(true),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Reads the persisted blob. Called once when the portal storage opens; a
    /// missing or unparseable blob means no session, never an error.
    pub fn load(&self) {
        let raw = match self.kv.lock().get(SESSION_KEY) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(error = %e, "session read failed, starting signed out");
                None
            }
        };
        let identity = raw.and_then(|s| match serde_json::from_str::<Identity>(&s) {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::warn!(error = %e, "discarding corrupt session blob");
                None
            }
        });
        *self.identity.lock() = identity.clone();
        self.loading.store(false, Ordering::SeqCst);
        self.notify(identity.as_ref());
    }

    /// Replaces the current identity and persists it before returning.
    pub fn set(&self, identity: Identity) -> anyhow::Result<()> {
        let blob = serde_json::to_string(&identity)?;
        self.kv.lock().set(SESSION_KEY, &blob)?;
        *self.identity.lock() = Some(identity.clone());
        tracing::debug!(email = %identity.email, role = identity.role.as_str(), "session set");
        self.notify(Some(&identity));
        Ok(())
    }

    /// Removes the persisted blob and empties the identity.
    pub fn clear(&self) -> anyhow::Result<()> {
        self.kv.lock().delete(SESSION_KEY)?;
        *self.identity.lock() = None;
        tracing::debug!("session cleared");
        self.notify(None);
        Ok(())
    }

    pub fn identity(&self) -> Option<Identity> {
        self.identity.lock().clone()
    }

    pub fn role(&self) -> Role {
        self.identity.lock().as_ref().map(|i| i.role).unwrap_or(Role::None)
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.lock().is_some()
    }

    /// True only until the initial `load` has completed.
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    pub fn subscribe(&self, f: impl Fn(Option<&Identity>) + Send + 'static) {
        self.subscribers.lock().push(Box::new(f));
    }

    fn notify(&self, identity: Option<&Identity>) {
        for sub in self.subscribers.lock().iter() {
            sub(identity);
        }
    }
}
