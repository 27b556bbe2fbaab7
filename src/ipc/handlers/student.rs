use serde_json::{json, Value};

use crate::ipc::error::{ok, HandlerErr};
use crate::ipc::helpers::{matches_query, now_stamp, opt_str, required_str, today};
use crate::ipc::types::Request;
use crate::portal::{AttendanceRecord, LeaveRequest, Portal, STUDENT_IMAGE_KEY};

pub fn try_handle(portal: &mut Portal, req: &Request) -> Option<serde_json::Value> {
    let result = match req.method.as_str() {
        "student.dashboard" => dashboard(portal),
        "student.courses.list" => courses_list(portal, &req.params),
        "student.assessments.list" => assessments_list(portal, &req.params),
        "student.attendance.list" => attendance_list(portal, &req.params),
        "student.leaves.list" => leaves_list(portal),
        "student.leaves.create" => leaves_create(portal, &req.params),
        "student.homework.list" => homework_list(portal, &req.params),
        "student.homework.submit" => homework_submit(portal, &req.params),
        "student.materials.list" => materials_list(portal, &req.params),
        "student.profile.get" => profile_get(portal),
        "student.profile.update" => profile_update(portal, &req.params),
        "student.profile.setImage" => profile_set_image(portal, &req.params),
        _ => return None,
    };
    Some(match result {
        Ok(v) => ok(&req.id, v),
        Err(e) => e.response(&req.id),
    })
}

fn dashboard(portal: &Portal) -> Result<Value, HandlerErr> {
    let data = &portal.data.student;
    let upcoming: Vec<&_> = data
        .assessments
        .iter()
        .filter(|a| a.status == "upcoming")
        .collect();
    let pending_leaves = data.leaves.iter().filter(|l| l.status == "Pending").count();
    Ok(json!({
        "courses": data.courses.len(),
        "upcomingAssessments": upcoming,
        "attendance": attendance_summary(&data.attendance),
        "pendingLeaves": pending_leaves,
    }))
}

fn courses_list(portal: &Portal, params: &Value) -> Result<Value, HandlerErr> {
    let query = opt_str(params, "query");
    let courses: Vec<&_> = portal
        .data
        .student
        .courses
        .iter()
        .filter(|c| match &query {
            Some(q) => matches_query(q, &[&c.name, &c.code, &c.instructor]),
            None => true,
        })
        .collect();
    Ok(json!({ "courses": courses }))
}

fn assessments_list(portal: &Portal, params: &Value) -> Result<Value, HandlerErr> {
    let status = opt_str(params, "status");
    let assessments: Vec<&_> = portal
        .data
        .student
        .assessments
        .iter()
        .filter(|a| status.as_deref().map(|s| a.status == s).unwrap_or(true))
        .collect();
    Ok(json!({ "assessments": assessments }))
}

fn attendance_list(portal: &Portal, params: &Value) -> Result<Value, HandlerErr> {
    let course_id = opt_str(params, "courseId");
    let records: Vec<&AttendanceRecord> = portal
        .data
        .student
        .attendance
        .iter()
        .filter(|r| course_id.as_deref().map(|c| r.course_id == c).unwrap_or(true))
        .collect();
    let summary = attendance_summary(records.iter().copied());
    Ok(json!({
        "records": records,
        "summary": summary,
    }))
}

fn attendance_summary<'a, I: IntoIterator<Item = &'a AttendanceRecord>>(records: I) -> Value {
    let (mut present, mut absent, mut late, mut total) = (0usize, 0usize, 0usize, 0usize);
    for r in records {
        total += 1;
        match r.status.as_str() {
            "present" => present += 1,
            "absent" => absent += 1,
            "late" => late += 1,
            _ => {}
        }
    }
    let rate = if total == 0 {
        0.0
    } else {
        (present as f64 / total as f64 * 1000.0).round() / 10.0
    };
    json!({
        "present": present,
        "absent": absent,
        "late": late,
        "total": total,
        "rate": rate,
    })
}

fn leaves_list(portal: &Portal) -> Result<Value, HandlerErr> {
    Ok(json!({ "leaveRequests": portal.data.student.leaves }))
}

fn leaves_create(portal: &mut Portal, params: &Value) -> Result<Value, HandlerErr> {
    let reason = required_str(params, "reason")?;
    let from_date = required_str(params, "fromDate")?;
    let to_date = required_str(params, "toDate")?;
    let leave = LeaveRequest {
        id: uuid::Uuid::new_v4().to_string(),
        reason,
        leave_type: opt_str(params, "leaveType"),
        from_date,
        to_date,
        status: "Pending".to_string(),
        submitted_on: today(),
        description: opt_str(params, "description"),
        comment: None,
    };
    portal.data.student.leaves.push(leave.clone());
    Ok(json!({ "leaveRequest": leave }))
}

fn homework_list(portal: &Portal, params: &Value) -> Result<Value, HandlerErr> {
    let status = opt_str(params, "status");
    let homework: Vec<&_> = portal
        .data
        .student
        .homework
        .iter()
        .filter(|h| status.as_deref().map(|s| h.status == s).unwrap_or(true))
        .collect();
    Ok(json!({ "homework": homework }))
}

fn homework_submit(portal: &mut Portal, params: &Value) -> Result<Value, HandlerErr> {
    let homework_id = required_str(params, "homeworkId")?;
    let file = required_str(params, "file")?;
    let hw = portal
        .data
        .student
        .homework
        .iter_mut()
        .find(|h| h.id == homework_id)
        .ok_or_else(|| HandlerErr::not_found("homework not found"))?;
    hw.status = "completed".to_string();
    hw.submission_date = Some(now_stamp());
    hw.file = Some(file);
    Ok(json!({ "homework": hw.clone() }))
}

fn materials_list(portal: &Portal, params: &Value) -> Result<Value, HandlerErr> {
    let course_id = opt_str(params, "courseId");
    let kind = opt_str(params, "type");
    let query = opt_str(params, "query");
    let mut materials: Vec<&_> = portal
        .data
        .student
        .materials
        .iter()
        .filter(|m| course_id.as_deref().map(|c| m.course_id == c).unwrap_or(true))
        .filter(|m| kind.as_deref().map(|k| m.kind == k).unwrap_or(true))
        .filter(|m| match &query {
            Some(q) => matches_query(q, &[&m.title, &m.course_name]),
            None => true,
        })
        .collect();
    // Upload dates are ISO strings, so ordering them lexically orders by time.
    match opt_str(params, "sort").as_deref() {
        Some("newest") => materials.sort_by(|a, b| b.upload_date.cmp(&a.upload_date)),
        Some("oldest") => materials.sort_by(|a, b| a.upload_date.cmp(&b.upload_date)),
        Some("name") => materials.sort_by(|a, b| a.title.cmp(&b.title)),
        _ => {}
    }
    Ok(json!({ "materials": materials }))
}

fn profile_get(portal: &Portal) -> Result<Value, HandlerErr> {
    let mut profile = portal.data.student.profile.clone();
    if let Some(image) = portal.kv.lock().get(STUDENT_IMAGE_KEY)? {
        profile.profile_image = Some(image);
    }
    Ok(json!({ "profile": profile }))
}

fn profile_update(portal: &mut Portal, params: &Value) -> Result<Value, HandlerErr> {
    let profile = &mut portal.data.student.profile;
    if let Some(v) = opt_str(params, "firstName") {
        profile.first_name = v;
    }
    if let Some(v) = opt_str(params, "lastName") {
        profile.last_name = v;
    }
    if let Some(v) = opt_str(params, "email") {
        profile.email = v;
    }
    if let Some(v) = opt_str(params, "phone") {
        profile.phone = v;
    }
    if let Some(v) = opt_str(params, "address") {
        profile.address = v;
    }
    if let Some(v) = opt_str(params, "dateOfBirth") {
        profile.date_of_birth = v;
    }
    Ok(json!({ "profile": profile.clone() }))
}

fn profile_set_image(portal: &mut Portal, params: &Value) -> Result<Value, HandlerErr> {
    let data_url = required_str(params, "dataUrl")?;
    portal.kv.lock().set(STUDENT_IMAGE_KEY, &data_url)?;
    portal.data.student.profile.profile_image = Some(data_url.clone());
    Ok(json!({ "profileImage": data_url }))
}
