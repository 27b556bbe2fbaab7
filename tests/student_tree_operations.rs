
use eduportald::ipc::AppState;
use serde_json::json;
use test_support::{error_code, login, open_portal, request, request_ok, temp_dir};

fn student_state() -> AppState {
    let dir = temp_dir("eduportal-student-tree");
    let mut state = AppState::default();
    open_portal(&mut state, &dir);
    login(&mut state, "student@example.com");
    state
}

#[test]
fn dashboard_summarizes_the_seeded_term() {
    let mut state = student_state();
    let result = request_ok(&mut state, "1", "student.dashboard", json!({}));
    assert_eq!(result["courses"], 4);
    assert_eq!(result["upcomingAssessments"].as_array().unwrap().len(), 2);
    assert_eq!(result["pendingLeaves"], 1);
    assert_eq!(result["attendance"]["total"], 20);
}

#[test]
fn course_list_filters_by_query() {
    let mut state = student_state();
    let all = request_ok(&mut state, "1", "student.courses.list", json!({}));
    assert_eq!(all["courses"].as_array().unwrap().len(), 4);

    let result = request_ok(
        &mut state,
        "2",
        "student.courses.list",
        json!({ "query": "cs101" }),
    );
    let courses = result["courses"].as_array().unwrap();
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0]["code"], "CS101");

    let by_instructor = request_ok(
        &mut state,
        "3",
        "student.courses.list",
        json!({ "query": "johnson" }),
    );
    assert_eq!(by_instructor["courses"].as_array().unwrap().len(), 1);
}

#[test]
fn assessments_filter_by_status() {
    let mut state = student_state();
    let upcoming = request_ok(
        &mut state,
        "1",
        "student.assessments.list",
        json!({ "status": "upcoming" }),
    );
    assert_eq!(upcoming["assessments"].as_array().unwrap().len(), 2);

    let completed = request_ok(
        &mut state,
        "2",
        "student.assessments.list",
        json!({ "status": "completed" }),
    );
    let completed = completed["assessments"].as_array().unwrap();
    assert_eq!(completed.len(), 2);
    assert!(completed.iter().all(|a| a["score"].is_u64()));
}

#[test]
fn attendance_summary_counts_statuses() {
    let mut state = student_state();
    let all = request_ok(&mut state, "1", "student.attendance.list", json!({}));
    assert_eq!(all["summary"]["total"], 20);
    assert_eq!(all["summary"]["present"], 16);
    assert_eq!(all["summary"]["absent"], 3);
    assert_eq!(all["summary"]["late"], 1);
    assert_eq!(all["summary"]["rate"], 80.0);

    let calculus = request_ok(
        &mut state,
        "2",
        "student.attendance.list",
        json!({ "courseId": "2" }),
    );
    assert_eq!(calculus["records"].as_array().unwrap().len(), 5);
    assert_eq!(calculus["summary"]["late"], 1);
    assert_eq!(calculus["summary"]["absent"], 0);
}

#[test]
fn leave_requests_append_as_pending() {
    let mut state = student_state();

    let missing = request(
        &mut state,
        "1",
        "student.leaves.create",
        json!({ "reason": "Conference travel" }),
    );
    assert_eq!(error_code(&missing), Some("bad_params"));

    let created = request_ok(
        &mut state,
        "2",
        "student.leaves.create",
        json!({
            "reason": "Conference travel",
            "leaveType": "Academic",
            "fromDate": "2025-06-01",
            "toDate": "2025-06-03",
        }),
    );
    assert_eq!(created["leaveRequest"]["status"], "Pending");
    assert!(created["leaveRequest"]["submittedOn"].is_string());

    let listed = request_ok(&mut state, "3", "student.leaves.list", json!({}));
    assert_eq!(listed["leaveRequests"].as_array().unwrap().len(), 4);
}

#[test]
fn homework_submission_completes_the_assignment() {
    let mut state = student_state();

    let unknown = request(
        &mut state,
        "1",
        "student.homework.submit",
        json!({ "homeworkId": "999", "file": "late.pdf" }),
    );
    assert_eq!(error_code(&unknown), Some("not_found"));

    let result = request_ok(
        &mut state,
        "2",
        "student.homework.submit",
        json!({ "homeworkId": "2", "file": "problem_set_3.pdf" }),
    );
    assert_eq!(result["homework"]["status"], "completed");
    assert_eq!(result["homework"]["file"], "problem_set_3.pdf");
    assert!(result["homework"]["submissionDate"].is_string());

    let pending = request_ok(
        &mut state,
        "3",
        "student.homework.list",
        json!({ "status": "pending" }),
    );
    assert_eq!(pending["homework"].as_array().unwrap().len(), 0);
}

#[test]
fn materials_filter_by_course_and_type() {
    let mut state = student_state();
    let pdfs = request_ok(
        &mut state,
        "1",
        "student.materials.list",
        json!({ "type": "pdf" }),
    );
    assert_eq!(pdfs["materials"].as_array().unwrap().len(), 2);

    let cs_videos = request_ok(
        &mut state,
        "2",
        "student.materials.list",
        json!({ "courseId": "1", "type": "video" }),
    );
    let materials = cs_videos["materials"].as_array().unwrap();
    assert_eq!(materials.len(), 1);
    assert_eq!(materials[0]["title"], "Data Structures Tutorial");
}

#[test]
fn materials_sort_by_upload_date_or_name() {
    let mut state = student_state();
    let newest = request_ok(
        &mut state,
        "1",
        "student.materials.list",
        json!({ "sort": "newest" }),
    );
    let titles: Vec<&str> = newest["materials"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["title"].as_str().unwrap())
        .collect();
    assert_eq!(
        titles,
        vec![
            "Data Structures Tutorial",
            "Introduction to Algorithms",
            "Limits and Continuity",
            "Newton's Laws of Motion",
        ]
    );

    let by_name = request_ok(
        &mut state,
        "2",
        "student.materials.list",
        json!({ "sort": "name" }),
    );
    let first = &by_name["materials"].as_array().unwrap()[0];
    assert_eq!(first["title"], "Data Structures Tutorial");
}

#[test]
fn profile_edits_stay_in_memory() {
    let mut state = student_state();
    let updated = request_ok(
        &mut state,
        "1",
        "student.profile.update",
        json!({ "phone": "(555) 000-1111" }),
    );
    assert_eq!(updated["profile"]["phone"], "(555) 000-1111");
    assert_eq!(updated["profile"]["firstName"], "John");

    let fetched = request_ok(&mut state, "2", "student.profile.get", json!({}));
    assert_eq!(fetched["profile"]["phone"], "(555) 000-1111");
}
