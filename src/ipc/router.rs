use super::handlers;
use super::types::{AppState, Request};
use crate::ipc::error::{err, no_portal};
use crate::routes::{self, PortalTree};

pub fn handle_request(state: &mut AppState, req: Request) -> serde_json::Value {
    // Public surface: health, storage open, auth lifecycle.
    if let Some(resp) = handlers::core::try_handle(state, &req) {
        return resp;
    }
    if let Some(resp) = handlers::auth::try_handle(state, &req) {
        return resp;
    }

    // Everything else lives in a role tree.
    let Some(tree) = routes::required_tree(&req.method) else {
        return err(
            &req.id,
            "not_implemented",
            format!("unknown method: {}", req.method),
            None,
        );
    };
    let Some(portal) = state.portal.as_mut() else {
        return no_portal(&req.id);
    };

    let mounted = routes::tree_for(portal.session.role());
    if mounted != tree {
        return if mounted == PortalTree::Public {
            err(&req.id, "unauthorized", "sign in required", None)
        } else {
            err(
                &req.id,
                "forbidden",
                format!("{} is not available to this role", req.method),
                None,
            )
        };
    }

    let resp = match tree {
        PortalTree::Student => handlers::student::try_handle(portal, &req),
        PortalTree::Faculty => handlers::faculty::try_handle(portal, &req),
        PortalTree::Admin => handlers::admin::try_handle(portal, &req),
        PortalTree::Public => None,
    };
    resp.unwrap_or_else(|| {
        err(
            &req.id,
            "not_implemented",
            format!("unknown method: {}", req.method),
            None,
        )
    })
}
