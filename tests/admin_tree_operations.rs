
use eduportald::ipc::AppState;
use serde_json::json;
use test_support::{error_code, login, open_portal, request, request_ok, temp_dir};

fn admin_state() -> AppState {
    let dir = temp_dir("eduportal-admin-tree");
    let mut state = AppState::default();
    open_portal(&mut state, &dir);
    login(&mut state, "admin@example.com");
    state
}

#[test]
fn dashboard_reports_institution_statistics() {
    let mut state = admin_state();
    let result = request_ok(&mut state, "1", "admin.dashboard", json!({}));
    assert_eq!(result["statistics"]["students"], 1248);
    assert_eq!(result["statistics"]["faculty"], 86);
    assert_eq!(result["statistics"]["departments"], 7);
    assert_eq!(result["recentActivity"].as_array().unwrap().len(), 4);
}

#[test]
fn course_lifecycle_create_update_delete() {
    let mut state = admin_state();

    let missing = request(
        &mut state,
        "1",
        "admin.courses.create",
        json!({ "name": "Organic Chemistry" }),
    );
    assert_eq!(error_code(&missing), Some("bad_params"));

    // Forms submit credits as a string.
    let created = request_ok(
        &mut state,
        "2",
        "admin.courses.create",
        json!({
            "name": "Organic Chemistry",
            "code": "CHEM101",
            "department": "Chemistry",
            "credits": "4",
            "instructor": "Dr. Lee",
        }),
    );
    assert_eq!(created["course"]["credits"], 4);
    assert_eq!(created["course"]["students"], 0);
    assert_eq!(created["course"]["status"], "Active");
    let course_id = created["course"]["id"].as_str().unwrap().to_string();

    let listed = request_ok(&mut state, "3", "admin.courses.list", json!({}));
    assert_eq!(listed["courses"].as_array().unwrap().len(), 6);

    let updated = request_ok(
        &mut state,
        "4",
        "admin.courses.update",
        json!({ "id": course_id, "status": "Inactive", "credits": 3 }),
    );
    assert_eq!(updated["course"]["status"], "Inactive");
    assert_eq!(updated["course"]["credits"], 3);

    request_ok(
        &mut state,
        "5",
        "admin.courses.delete",
        json!({ "id": course_id }),
    );
    let listed = request_ok(&mut state, "6", "admin.courses.list", json!({}));
    assert_eq!(listed["courses"].as_array().unwrap().len(), 5);

    let gone = request(
        &mut state,
        "7",
        "admin.courses.delete",
        json!({ "id": course_id }),
    );
    assert_eq!(error_code(&gone), Some("not_found"));
}

#[test]
fn course_list_filters_by_query() {
    let mut state = admin_state();
    let result = request_ok(
        &mut state,
        "1",
        "admin.courses.list",
        json!({ "query": "psychology" }),
    );
    let courses = result["courses"].as_array().unwrap();
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0]["code"], "PSY101");
}

#[test]
fn students_create_with_defaults_and_filter() {
    let mut state = admin_state();

    let probation = request_ok(
        &mut state,
        "1",
        "admin.students.list",
        json!({ "status": "Probation" }),
    );
    assert_eq!(probation["students"].as_array().unwrap().len(), 1);

    let created = request_ok(
        &mut state,
        "2",
        "admin.students.create",
        json!({
            "firstName": "Noah",
            "lastName": "Patel",
            "email": "npatel@university.edu",
            "program": "Physics",
            "enrollmentYear": 2024,
        }),
    );
    assert_eq!(created["student"]["gpa"], 0.0);
    assert_eq!(created["student"]["status"], "Active");
    assert_eq!(
        created["student"]["image"],
        "https://i.pravatar.cc/150?u=noah"
    );

    let listed = request_ok(&mut state, "3", "admin.students.list", json!({}));
    assert_eq!(listed["students"].as_array().unwrap().len(), 6);

    let by_query = request_ok(
        &mut state,
        "4",
        "admin.students.list",
        json!({ "query": "patel" }),
    );
    assert_eq!(by_query["students"].as_array().unwrap().len(), 1);
}

#[test]
fn student_lookup_by_id() {
    let mut state = admin_state();
    let student = request_ok(&mut state, "1", "admin.students.get", json!({ "id": "3" }));
    assert_eq!(student["student"]["firstName"], "Sophia");

    let missing = request(&mut state, "2", "admin.students.get", json!({ "id": "99" }));
    assert_eq!(error_code(&missing), Some("not_found"));
}

#[test]
fn student_update_and_delete() {
    let mut state = admin_state();

    let updated = request_ok(
        &mut state,
        "1",
        "admin.students.update",
        json!({ "id": "4", "status": "Active" }),
    );
    assert_eq!(updated["student"]["status"], "Active");
    assert_eq!(updated["student"]["firstName"], "James");

    request_ok(
        &mut state,
        "2",
        "admin.students.delete",
        json!({ "id": "4" }),
    );
    let listed = request_ok(&mut state, "3", "admin.students.list", json!({}));
    assert_eq!(listed["students"].as_array().unwrap().len(), 4);

    let missing = request(
        &mut state,
        "4",
        "admin.students.update",
        json!({ "id": "4", "status": "Active" }),
    );
    assert_eq!(error_code(&missing), Some("not_found"));
}

#[test]
fn faculty_roster_create_and_delete() {
    let mut state = admin_state();

    let listed = request_ok(&mut state, "1", "admin.faculty.list", json!({}));
    assert_eq!(listed["faculty"].as_array().unwrap().len(), 4);

    let created = request_ok(
        &mut state,
        "2",
        "admin.faculty.create",
        json!({
            "firstName": "Sarah",
            "lastName": "Connor",
            "email": "sconnor@university.edu",
            "department": "Computer Science",
            "position": "Lecturer",
            "courses": ["CS105"],
        }),
    );
    assert_eq!(created["faculty"]["position"], "Lecturer");
    let id = created["faculty"]["id"].as_str().unwrap().to_string();

    let by_dept = request_ok(
        &mut state,
        "3",
        "admin.faculty.list",
        json!({ "query": "computer science" }),
    );
    assert_eq!(by_dept["faculty"].as_array().unwrap().len(), 2);

    request_ok(&mut state, "4", "admin.faculty.delete", json!({ "id": id }));
    let listed = request_ok(&mut state, "5", "admin.faculty.list", json!({}));
    assert_eq!(listed["faculty"].as_array().unwrap().len(), 4);
}

#[test]
fn departments_are_listed() {
    let mut state = admin_state();
    let result = request_ok(&mut state, "1", "admin.departments.list", json!({}));
    assert_eq!(result["departments"].as_array().unwrap().len(), 6);
}
