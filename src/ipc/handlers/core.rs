use crate::ipc::error::{err, ok};
use crate::ipc::types::{AppState, Request};
use crate::portal::Portal;
use serde_json::json;
use std::path::PathBuf;
use std::time::Duration;

fn handle_health(state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(
        &req.id,
        json!({
            "version": env!("CARGO_PKG_VERSION"),
            "storagePath": state
                .portal
                .as_ref()
                .map(|p| p.storage_path().to_string_lossy().to_string())
        }),
    )
}

fn handle_portal_open(state: &mut AppState, req: &Request) -> serde_json::Value {
    let p = req
        .params
        .get("path")
        .and_then(|v| v.as_str())
        .map(PathBuf::from);
    let Some(path) = p else {
        return err(&req.id, "bad_params", "missing params.path", None);
    };
    let delay_ms = req
        .params
        .get("loginDelayMs")
        .and_then(|v| v.as_u64())
        .unwrap_or(1000);

    match Portal::open(&path, Duration::from_millis(delay_ms)) {
        Ok(portal) => {
            let storage_path = portal.storage_path();
            let authenticated = portal.session.is_authenticated();
            let role = portal.session.role();
            state.storage_dir = Some(path);
            state.portal = Some(portal);
            tracing::info!(path = %storage_path.display(), authenticated, "portal storage open");
            ok(
                &req.id,
                json!({
                    "storagePath": storage_path.to_string_lossy(),
                    "authenticated": authenticated,
                    "role": role.as_str(),
                }),
            )
        }
        Err(e) => err(&req.id, "db_open_failed", format!("{e:?}"), None),
    }
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "health" => Some(handle_health(state, req)),
        "portal.open" => Some(handle_portal_open(state, req)),
        _ => None,
    }
}
