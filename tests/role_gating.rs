
use eduportald::ipc::AppState;
use eduportald::routes::{required_tree, tree_for, PortalTree};
use eduportald::session::Role;
use serde_json::json;
use test_support::{error_code, login, open_portal, request, temp_dir};

#[test]
fn every_role_mounts_exactly_one_tree() {
    assert_eq!(tree_for(Role::Student), PortalTree::Student);
    assert_eq!(tree_for(Role::Faculty), PortalTree::Faculty);
    assert_eq!(tree_for(Role::Admin), PortalTree::Admin);
    assert_eq!(tree_for(Role::None), PortalTree::Public);

    assert_eq!(tree_for(Role::Student).home(), "/student");
    assert_eq!(tree_for(Role::Faculty).home(), "/faculty");
    assert_eq!(tree_for(Role::Admin).home(), "/admin");
    assert_eq!(tree_for(Role::None).home(), "/signin");
}

#[test]
fn method_namespaces_map_to_trees() {
    assert_eq!(required_tree("student.courses.list"), Some(PortalTree::Student));
    assert_eq!(required_tree("faculty.dashboard"), Some(PortalTree::Faculty));
    assert_eq!(required_tree("admin.students.delete"), Some(PortalTree::Admin));
    assert_eq!(required_tree("auth.login"), None);
    assert_eq!(required_tree("health"), None);
}

#[test]
fn portal_methods_require_open_storage() {
    let mut state = AppState::default();
    let resp = request(&mut state, "1", "student.courses.list", json!({}));
    assert_eq!(error_code(&resp), Some("no_portal"));
}

#[test]
fn unauthenticated_calls_are_unauthorized() {
    let dir = temp_dir("eduportal-unauthorized");
    let mut state = AppState::default();
    open_portal(&mut state, &dir);

    let resp = request(&mut state, "1", "student.dashboard", json!({}));
    assert_eq!(error_code(&resp), Some("unauthorized"));
}

#[test]
fn role_mismatch_is_forbidden() {
    let dir = temp_dir("eduportal-forbidden");
    let mut state = AppState::default();
    open_portal(&mut state, &dir);
    login(&mut state, "student@example.com");

    let resp = request(&mut state, "1", "admin.students.list", json!({}));
    assert_eq!(error_code(&resp), Some("forbidden"));
    let resp = request(&mut state, "2", "faculty.classes.list", json!({}));
    assert_eq!(error_code(&resp), Some("forbidden"));

    let resp = request(&mut state, "3", "student.courses.list", json!({}));
    assert_eq!(resp["ok"], true);
}

#[test]
fn logout_drops_tree_access() {
    let dir = temp_dir("eduportal-logout-access");
    let mut state = AppState::default();
    open_portal(&mut state, &dir);
    login(&mut state, "admin@example.com");

    let resp = request(&mut state, "1", "admin.dashboard", json!({}));
    assert_eq!(resp["ok"], true);

    request(&mut state, "2", "auth.logout", json!({}));
    let resp = request(&mut state, "3", "admin.dashboard", json!({}));
    assert_eq!(error_code(&resp), Some("unauthorized"));
}

#[test]
fn unknown_methods_are_not_implemented() {
    let dir = temp_dir("eduportal-unknown-method");
    let mut state = AppState::default();
    open_portal(&mut state, &dir);

    let resp = request(&mut state, "1", "nonsense", json!({}));
    assert_eq!(error_code(&resp), Some("not_implemented"));

    login(&mut state, "student@example.com");
    let resp = request(&mut state, "2", "student.not.a.method", json!({}));
    assert_eq!(error_code(&resp), Some("not_implemented"));
}
