use crate::session::Role;

/// The disjoint page trees a session can mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortalTree {
    Student,
    Faculty,
    Admin,
    Public,
}

impl PortalTree {
    /// Root path of the tree, matching the frontend routes.
    pub fn home(self) -> &'static str {
        match self {
            PortalTree::Student => "/student",
            PortalTree::Faculty => "/faculty",
            PortalTree::Admin => "/admin",
            PortalTree::Public => "/signin",
        }
    }
}

/// Which tree mounts for a given role. Adding a role forces a decision here.
pub fn tree_for(role: Role) -> PortalTree {
    match role {
        Role::Student => PortalTree::Student,
        Role::Faculty => PortalTree::Faculty,
        Role::Admin => PortalTree::Admin,
        Role::None => PortalTree::Public,
    }
}

/// The tree a method namespace belongs to, or `None` for the public surface.
pub fn required_tree(method: &str) -> Option<PortalTree> {
    match method.split('.').next().unwrap_or(method) {
        "student" => Some(PortalTree::Student),
        "faculty" => Some(PortalTree::Faculty),
        "admin" => Some(PortalTree::Admin),
        _ => None,
    }
}
