use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

use crate::session::{Identity, Role, SessionStore};

pub const STUDENT_EMAIL: &str = "student@example.com";
pub const FACULTY_EMAIL: &str = "faculty@example.com";
pub const ADMIN_EMAIL: &str = "admin@example.com";

/// Default artificial latency applied to login/signup.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("operation cancelled")]
    Cancelled,
    #[error("session persistence failed: {0}")]
    Store(#[from] anyhow::Error),
}

/// Cooperative cancellation flag shared between the caller and the auth
/// worker thread. Tripping it wakes a worker that is still inside the
/// artificial delay.
#[derive(Clone)]
pub struct CancellationToken {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl CancellationToken {
    fn new() -> CancellationToken {
        CancellationToken {
            inner: Arc::new((Mutex::new(false), Condvar::new())),
        }
    }

    pub fn cancel(&self) {
        let (flag, cvar) = &*self.inner;
        *flag.lock() = true;
        cvar.notify_all();
    }

    pub fn is_cancelled(&self) -> bool {
        *self.inner.0.lock()
    }

    /// Blocks for up to `timeout`. Returns true if cancelled before the
    /// timeout elapsed.
    fn wait(&self, timeout: Duration) -> bool {
        let (flag, cvar) = &*self.inner;
        let deadline = Instant::now() + timeout;
        let mut cancelled = flag.lock();
        while !*cancelled {
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            if cvar.wait_for(&mut cancelled, deadline - now).timed_out() {
                break;
            }
        }
        *cancelled
    }
}

/// An in-flight login or signup. The session store is only written when the
/// operation resolves uncancelled, so a view that navigated away can trip the
/// token and never observe a late sign-in.
pub struct AuthHandle {
    token: CancellationToken,
    rx: mpsc::Receiver<Result<Identity, AuthError>>,
}

impl AuthHandle {
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Blocks until the operation resolves.
    pub fn wait(self) -> Result<Identity, AuthError> {
        self.rx.recv().unwrap_or(Err(AuthError::Cancelled))
    }
}

#[derive(Debug, Clone, Default)]
pub struct SignupProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub institution: Option<String>,
    /// Role the caller asked for. Currently not honored; see `resolve_signup`.
    pub requested_role: Option<Role>,
}

enum PendingOp {
    Login { email: String },
    Signup { profile: SignupProfile },
}

impl PendingOp {
    fn resolve(self) -> Result<Identity, AuthError> {
        match self {
            PendingOp::Login { email } => demo_identity(&email),
            PendingOp::Signup { profile } => Ok(resolve_signup(profile)),
        }
    }
}

/// Turns an (email, password) pair into an identity against the fixed demo
/// allow-list, or fabricates one for signup. Passwords are never checked.
pub struct Authenticator {
    session: Arc<SessionStore>,
    delay: Duration,
}

impl Authenticator {
    pub fn new(session: Arc<SessionStore>) -> Authenticator {
        Authenticator {
            session,
            delay: DEFAULT_DELAY,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Authenticator {
        self.delay = delay;
        self
    }

    /// Starts a login without blocking. The handle resolves after the
    /// artificial delay unless its token is tripped first.
    pub fn begin_login(&self, email: &str, _password: &str) -> AuthHandle {
        self.begin(PendingOp::Login {
            email: email.to_string(),
        })
    }

    /// Convenience wrapper that waits for the login to resolve.
    pub fn login(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        self.begin_login(email, password).wait()
    }

    pub fn begin_signup(&self, profile: SignupProfile) -> AuthHandle {
        self.begin(PendingOp::Signup { profile })
    }

    pub fn signup(&self, profile: SignupProfile) -> Result<Identity, AuthError> {
        self.begin_signup(profile).wait()
    }

    pub fn logout(&self) -> anyhow::Result<()> {
        self.session.clear()
    }

    fn begin(&self, op: PendingOp) -> AuthHandle {
        let token = CancellationToken::new();
        let worker_token = token.clone();
        let session = Arc::clone(&self.session);
        let delay = self.delay;
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            if worker_token.wait(delay) {
                let _ = tx.send(Err(AuthError::Cancelled));
                return;
            }
            let result = op.resolve().and_then(|identity| {
                // Late cancellation still wins over a resolved identity.
                if worker_token.is_cancelled() {
                    return Err(AuthError::Cancelled);
                }
                session.set(identity.clone())?;
                Ok(identity)
            });
            if let Err(e) = &result {
                tracing::debug!(error = %e, "auth operation failed");
            }
            let _ = tx.send(result);
        });
        AuthHandle { token, rx }
    }
}

fn demo_identity(email: &str) -> Result<Identity, AuthError> {
    match email {
        STUDENT_EMAIL => Ok(Identity {
            id: "1".to_string(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: STUDENT_EMAIL.to_string(),
            role: Role::Student,
            profile_image: Some("https://i.pravatar.cc/150?u=student".to_string()),
            institution: None,
        }),
        FACULTY_EMAIL => Ok(Identity {
            id: "2".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Smith".to_string(),
            email: FACULTY_EMAIL.to_string(),
            role: Role::Faculty,
            profile_image: Some("https://i.pravatar.cc/150?u=faculty".to_string()),
            institution: None,
        }),
        ADMIN_EMAIL => Ok(Identity {
            id: "3".to_string(),
            first_name: "Admin".to_string(),
            last_name: "User".to_string(),
            email: ADMIN_EMAIL.to_string(),
            role: Role::Admin,
            profile_image: Some("https://i.pravatar.cc/150?u=admin".to_string()),
            institution: Some("University of Example".to_string()),
        }),
        _ => Err(AuthError::InvalidCredentials),
    }
}

fn resolve_signup(profile: SignupProfile) -> Identity {
    // Signups always come out as admin accounts, whatever role was asked for.
    Identity {
        id: uuid::Uuid::new_v4().to_string(),
        first_name: profile.first_name,
        last_name: profile.last_name,
        email: profile.email,
        role: Role::Admin,
        profile_image: None,
        institution: profile.institution,
    }
}
