use serde_json::json;

use crate::auth::{AuthError, SignupProfile};
use crate::ipc::error::{err, no_portal, ok};
use crate::ipc::helpers::{opt_str, required_str};
use crate::ipc::types::{AppState, Request};
use crate::routes;
use crate::session::Role;

fn auth_err(id: &str, e: AuthError) -> serde_json::Value {
    let code = match e {
        AuthError::InvalidCredentials => "invalid_credentials",
        AuthError::Cancelled => "cancelled",
        AuthError::Store(_) => "store_failed",
    };
    err(id, code, e.to_string(), None)
}

fn handle_login(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(portal) = state.portal.as_ref() else {
        return no_portal(&req.id);
    };
    let email = match required_str(&req.params, "email") {
        Ok(v) => v,
        Err(e) => return e.response(&req.id),
    };
    let password = match required_str(&req.params, "password") {
        Ok(v) => v,
        Err(e) => return e.response(&req.id),
    };

    match portal.auth.login(&email, &password) {
        Ok(identity) => {
            tracing::info!(email = %identity.email, role = identity.role.as_str(), "signed in");
            let home = routes::tree_for(identity.role).home();
            ok(&req.id, json!({ "identity": identity, "home": home }))
        }
        Err(e) => auth_err(&req.id, e),
    }
}

fn handle_signup(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(portal) = state.portal.as_ref() else {
        return no_portal(&req.id);
    };
    let first_name = match required_str(&req.params, "firstName") {
        Ok(v) => v,
        Err(e) => return e.response(&req.id),
    };
    let last_name = match required_str(&req.params, "lastName") {
        Ok(v) => v,
        Err(e) => return e.response(&req.id),
    };
    let email = match required_str(&req.params, "email") {
        Ok(v) => v,
        Err(e) => return e.response(&req.id),
    };
    let requested_role = opt_str(&req.params, "role").and_then(|r| match r.as_str() {
        "student" => Some(Role::Student),
        "faculty" => Some(Role::Faculty),
        "admin" => Some(Role::Admin),
        _ => None,
    });

    let profile = SignupProfile {
        first_name,
        last_name,
        email,
        institution: opt_str(&req.params, "institution"),
        requested_role,
    };

    match portal.auth.signup(profile) {
        Ok(identity) => {
            tracing::info!(email = %identity.email, "account created");
            let home = routes::tree_for(identity.role).home();
            ok(&req.id, json!({ "identity": identity, "home": home }))
        }
        Err(e) => auth_err(&req.id, e),
    }
}

fn handle_logout(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(portal) = state.portal.as_ref() else {
        return no_portal(&req.id);
    };
    match portal.auth.logout() {
        Ok(()) => ok(
            &req.id,
            json!({ "isAuthenticated": false, "home": routes::tree_for(Role::None).home() }),
        ),
        Err(e) => err(&req.id, "store_failed", e.to_string(), None),
    }
}

fn handle_session(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(portal) = state.portal.as_ref() else {
        return no_portal(&req.id);
    };
    let identity = portal.session.identity();
    let authenticated = identity.is_some();
    let role = identity.as_ref().map(|i| i.role).unwrap_or(Role::None);
    ok(
        &req.id,
        json!({
            "identity": identity,
            "isAuthenticated": authenticated,
            "loading": portal.session.is_loading(),
            "home": routes::tree_for(role).home(),
        }),
    )
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "auth.login" => Some(handle_login(state, req)),
        "auth.signup" => Some(handle_signup(state, req)),
        "auth.logout" => Some(handle_logout(state, req)),
        "auth.session" => Some(handle_session(state, req)),
        _ => None,
    }
}
