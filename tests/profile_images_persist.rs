
use eduportald::ipc::AppState;
use serde_json::json;
use test_support::{login, open_portal, request_ok, temp_dir};

const PNG_DATA_URL: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUg==";

#[test]
fn admin_profile_image_survives_reopen() {
    let dir = temp_dir("eduportal-admin-image");
    let mut state = AppState::default();
    open_portal(&mut state, &dir);
    login(&mut state, "admin@example.com");

    request_ok(
        &mut state,
        "1",
        "admin.profile.setImage",
        json!({ "dataUrl": PNG_DATA_URL }),
    );

    let mut fresh = AppState::default();
    open_portal(&mut fresh, &dir);
    let profile = request_ok(&mut fresh, "2", "admin.profile.get", json!({}));
    assert_eq!(profile["profile"]["profilePicture"], PNG_DATA_URL);
}

#[test]
fn student_profile_image_survives_reopen() {
    let dir = temp_dir("eduportal-student-image");
    let mut state = AppState::default();
    open_portal(&mut state, &dir);
    login(&mut state, "student@example.com");

    request_ok(
        &mut state,
        "1",
        "student.profile.setImage",
        json!({ "dataUrl": PNG_DATA_URL }),
    );

    let mut fresh = AppState::default();
    open_portal(&mut fresh, &dir);
    let profile = request_ok(&mut fresh, "2", "student.profile.get", json!({}));
    assert_eq!(profile["profile"]["profileImage"], PNG_DATA_URL);
}

#[test]
fn entity_mutations_do_not_survive_reopen() {
    let dir = temp_dir("eduportal-transient-entities");
    let mut state = AppState::default();
    open_portal(&mut state, &dir);
    login(&mut state, "admin@example.com");

    request_ok(
        &mut state,
        "1",
        "admin.courses.create",
        json!({ "name": "Linear Algebra", "code": "MATH210" }),
    );
    let listed = request_ok(&mut state, "2", "admin.courses.list", json!({}));
    assert_eq!(listed["courses"].as_array().unwrap().len(), 6);

    let mut fresh = AppState::default();
    open_portal(&mut fresh, &dir);
    let listed = request_ok(&mut fresh, "3", "admin.courses.list", json!({}));
    assert_eq!(listed["courses"].as_array().unwrap().len(), 5);
}

#[test]
fn health_reports_version_and_storage() {
    let dir = temp_dir("eduportal-health");
    let mut state = AppState::default();

    let before = request_ok(&mut state, "1", "health", json!({}));
    assert!(before["storagePath"].is_null());
    assert_eq!(before["version"], env!("CARGO_PKG_VERSION"));

    open_portal(&mut state, &dir);
    let after = request_ok(&mut state, "2", "health", json!({}));
    assert!(after["storagePath"]
        .as_str()
        .unwrap()
        .ends_with("eduportal.sqlite3"));
}
