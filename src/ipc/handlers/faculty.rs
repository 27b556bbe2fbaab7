use std::collections::HashMap;

use serde_json::{json, Value};

use crate::ipc::error::{ok, HandlerErr};
use crate::ipc::helpers::{matches_query, opt_str, opt_u32, required_str, today};
use crate::ipc::types::Request;
use crate::portal::{ClassSession, FacultyAssessment, Portal};

pub fn try_handle(portal: &mut Portal, req: &Request) -> Option<serde_json::Value> {
    let result = match req.method.as_str() {
        "faculty.dashboard" => dashboard(portal),
        "faculty.classes.list" => classes_list(portal, &req.params),
        "faculty.students.list" => students_list(portal, &req.params),
        "faculty.students.get" => students_get(portal, &req.params),
        "faculty.sessions.list" => sessions_list(portal, &req.params),
        "faculty.sessions.create" => sessions_create(portal, &req.params),
        "faculty.sessions.update" => sessions_update(portal, &req.params),
        "faculty.attendance.open" => attendance_open(portal, &req.params),
        "faculty.attendance.record" => attendance_record(portal, &req.params),
        "faculty.assessments.list" => assessments_list(portal, &req.params),
        "faculty.assessments.create" => assessments_create(portal, &req.params),
        "faculty.assessments.publish" => assessments_publish(portal, &req.params),
        "faculty.submissions.list" => submissions_list(portal, &req.params),
        "faculty.submissions.grade" => submissions_grade(portal, &req.params),
        "faculty.leaves.list" => leaves_list(portal, &req.params),
        "faculty.leaves.respond" => leaves_respond(portal, &req.params),
        "faculty.profile.get" => profile_get(portal),
        "faculty.profile.update" => profile_update(portal, &req.params),
        _ => return None,
    };
    Some(match result {
        Ok(v) => ok(&req.id, v),
        Err(e) => e.response(&req.id),
    })
}

fn dashboard(portal: &Portal) -> Result<Value, HandlerErr> {
    let data = &portal.data.faculty;
    let total_students: u32 = data.classes.iter().map(|c| c.students).sum();
    let pending_leaves = data.leaves.iter().filter(|l| l.status == "pending").count();
    Ok(json!({
        "classes": data.classes.len(),
        "totalStudents": total_students,
        "upcomingSchedule": data.schedule,
        "pendingTasks": data.tasks,
        "pendingLeaves": pending_leaves,
    }))
}

fn classes_list(portal: &Portal, params: &Value) -> Result<Value, HandlerErr> {
    let query = opt_str(params, "query");
    let classes: Vec<&_> = portal
        .data
        .faculty
        .classes
        .iter()
        .filter(|c| match &query {
            Some(q) => matches_query(q, &[&c.name, &c.code, &c.room]),
            None => true,
        })
        .collect();
    Ok(json!({ "classes": classes }))
}

fn students_list(portal: &Portal, params: &Value) -> Result<Value, HandlerErr> {
    let query = opt_str(params, "query");
    let students: Vec<&_> = portal
        .data
        .faculty
        .roster
        .iter()
        .filter(|s| match &query {
            Some(q) => matches_query(q, &[&s.name, &s.email, &s.student_id]),
            None => true,
        })
        .collect();
    Ok(json!({ "students": students }))
}

fn students_get(portal: &Portal, params: &Value) -> Result<Value, HandlerErr> {
    let id = required_str(params, "id")?;
    let student = portal
        .data
        .faculty
        .roster
        .iter()
        .find(|s| s.id == id)
        .ok_or_else(|| HandlerErr::not_found("student not found"))?;
    Ok(json!({ "student": student }))
}

fn sessions_list(portal: &Portal, params: &Value) -> Result<Value, HandlerErr> {
    let course_id = opt_str(params, "courseId");
    let sessions: Vec<&_> = portal
        .data
        .faculty
        .sessions
        .iter()
        .filter(|s| course_id.as_deref().map(|c| s.course_id == c).unwrap_or(true))
        .collect();
    Ok(json!({
        "sessions": sessions,
        "courses": portal.data.faculty.course_filters,
    }))
}

fn sessions_create(portal: &mut Portal, params: &Value) -> Result<Value, HandlerErr> {
    let course_id = required_str(params, "courseId")?;
    let date = required_str(params, "date")?;
    let time = required_str(params, "time")?;
    let topic = required_str(params, "topic")?;

    let data = &mut portal.data.faculty;
    if !data.course_filters.iter().any(|c| c.id == course_id) {
        return Err(HandlerErr::not_found("course not found"));
    }
    // New sessions inherit the enrollment of the course's existing sheets.
    let total = data
        .sessions
        .iter()
        .find(|s| s.course_id == course_id)
        .map(|s| s.total)
        .unwrap_or(data.roster.len() as u32);
    let session = ClassSession {
        id: uuid::Uuid::new_v4().to_string(),
        course_id,
        date,
        time,
        topic,
        attendance_marked: false,
        present: 0,
        total,
    };
    data.sessions.push(session.clone());
    Ok(json!({ "session": session }))
}

fn sessions_update(portal: &mut Portal, params: &Value) -> Result<Value, HandlerErr> {
    let id = required_str(params, "id")?;
    let session = portal
        .data
        .faculty
        .sessions
        .iter_mut()
        .find(|s| s.id == id)
        .ok_or_else(|| HandlerErr::not_found("class session not found"))?;
    if let Some(v) = opt_str(params, "date") {
        session.date = v;
    }
    if let Some(v) = opt_str(params, "time") {
        session.time = v;
    }
    if let Some(v) = opt_str(params, "topic") {
        session.topic = v;
    }
    Ok(json!({ "session": session.clone() }))
}

fn attendance_open(portal: &Portal, params: &Value) -> Result<Value, HandlerErr> {
    let session_id = required_str(params, "sessionId")?;
    let data = &portal.data.faculty;
    let session = data
        .sessions
        .iter()
        .find(|s| s.id == session_id)
        .ok_or_else(|| HandlerErr::not_found("class session not found"))?;
    let sheet = data.sheets.get(&session_id);
    let students: Vec<Value> = data
        .roster
        .iter()
        .map(|s| {
            let present = sheet.and_then(|m| m.get(&s.id)).copied().unwrap_or(false);
            json!({
                "id": s.id,
                "name": s.name,
                "studentId": s.student_id,
                "present": present,
            })
        })
        .collect();
    Ok(json!({ "session": session, "students": students }))
}

fn attendance_record(portal: &mut Portal, params: &Value) -> Result<Value, HandlerErr> {
    let session_id = required_str(params, "sessionId")?;
    let entries = params
        .get("entries")
        .and_then(|v| v.as_array())
        .ok_or_else(|| HandlerErr::bad_params("missing entries"))?;

    let mut sheet: HashMap<String, bool> = HashMap::new();
    for entry in entries {
        let student_id = entry
            .get("studentId")
            .and_then(|v| v.as_str())
            .ok_or_else(|| HandlerErr::bad_params("entry missing studentId"))?;
        let present = entry.get("present").and_then(|v| v.as_bool()).unwrap_or(false);
        sheet.insert(student_id.to_string(), present);
    }

    let data = &mut portal.data.faculty;
    let session = data
        .sessions
        .iter_mut()
        .find(|s| s.id == session_id)
        .ok_or_else(|| HandlerErr::not_found("class session not found"))?;
    let present = sheet.values().filter(|p| **p).count() as u32;
    session.attendance_marked = true;
    session.present = present;
    data.sheets.insert(session_id, sheet);
    Ok(json!({
        "session": session,
        "present": present,
    }))
}

fn assessments_list(portal: &Portal, params: &Value) -> Result<Value, HandlerErr> {
    let status = opt_str(params, "status");
    let assessments: Vec<&_> = portal
        .data
        .faculty
        .assessments
        .iter()
        .filter(|a| status.as_deref().map(|s| a.status == s).unwrap_or(true))
        .collect();
    Ok(json!({ "assessments": assessments }))
}

fn assessments_create(portal: &mut Portal, params: &Value) -> Result<Value, HandlerErr> {
    let course_id = required_str(params, "courseId")?;
    let title = required_str(params, "title")?;
    let due_date = required_str(params, "dueDate")?;
    let kind = opt_str(params, "type").unwrap_or_else(|| "assignment".to_string());
    let max_score = opt_u32(params, "maxScore")?.unwrap_or(100);

    let data = &mut portal.data.faculty;
    let course_name = data
        .classes
        .iter()
        .find(|c| c.id == course_id)
        .map(|c| c.name.clone())
        .ok_or_else(|| HandlerErr::not_found("course not found"))?;
    let assessment = FacultyAssessment {
        id: uuid::Uuid::new_v4().to_string(),
        course_id,
        course_name,
        title,
        due_date,
        kind,
        max_score,
        created: today(),
        status: "scheduled".to_string(),
    };
    data.assessments.push(assessment.clone());
    Ok(json!({ "assessment": assessment }))
}

fn assessments_publish(portal: &mut Portal, params: &Value) -> Result<Value, HandlerErr> {
    let id = required_str(params, "id")?;
    let assessment = portal
        .data
        .faculty
        .assessments
        .iter_mut()
        .find(|a| a.id == id)
        .ok_or_else(|| HandlerErr::not_found("assessment not found"))?;
    assessment.status = "active".to_string();
    Ok(json!({ "assessment": assessment.clone() }))
}

fn submissions_list(portal: &Portal, params: &Value) -> Result<Value, HandlerErr> {
    let course_id = opt_str(params, "courseId");
    let graded = params.get("graded").and_then(|v| v.as_bool());
    let submissions: Vec<&_> = portal
        .data
        .faculty
        .submissions
        .iter()
        .filter(|s| course_id.as_deref().map(|c| s.course_id == c).unwrap_or(true))
        .filter(|s| graded.map(|g| s.grade.is_some() == g).unwrap_or(true))
        .collect();
    Ok(json!({ "submissions": submissions }))
}

fn submissions_grade(portal: &mut Portal, params: &Value) -> Result<Value, HandlerErr> {
    let id = required_str(params, "id")?;
    let grade = required_str(params, "grade")?;
    let submission = portal
        .data
        .faculty
        .submissions
        .iter_mut()
        .find(|s| s.id == id)
        .ok_or_else(|| HandlerErr::not_found("submission not found"))?;
    submission.grade = Some(grade);
    submission.feedback = opt_str(params, "feedback");
    Ok(json!({ "submission": submission.clone() }))
}

fn leaves_list(portal: &Portal, params: &Value) -> Result<Value, HandlerErr> {
    let status = opt_str(params, "status");
    let class_id = opt_str(params, "classId");
    let kind = opt_str(params, "type");
    let query = opt_str(params, "query");
    let requests: Vec<&_> = portal
        .data
        .faculty
        .leaves
        .iter()
        .filter(|l| status.as_deref().map(|s| l.status == s).unwrap_or(true))
        .filter(|l| class_id.as_deref().map(|c| l.class == c).unwrap_or(true))
        .filter(|l| kind.as_deref().map(|k| l.kind == k).unwrap_or(true))
        .filter(|l| match &query {
            Some(q) => matches_query(q, &[&l.student_name, &l.student_id, &l.kind]),
            None => true,
        })
        .collect();
    Ok(json!({
        "requests": requests,
        "classes": portal.data.faculty.course_filters,
    }))
}

fn leaves_respond(portal: &mut Portal, params: &Value) -> Result<Value, HandlerErr> {
    let id = required_str(params, "id")?;
    let action = required_str(params, "action")?;
    let status = match action.as_str() {
        "approve" => "approved",
        "reject" => "rejected",
        _ => return Err(HandlerErr::bad_params("action must be approve or reject")),
    };
    let request = portal
        .data
        .faculty
        .leaves
        .iter_mut()
        .find(|l| l.id == id)
        .ok_or_else(|| HandlerErr::not_found("leave request not found"))?;
    request.status = status.to_string();
    request.response_date = Some(today());
    request.response_reason = opt_str(params, "reason");
    Ok(json!({ "request": request.clone() }))
}

fn profile_get(portal: &Portal) -> Result<Value, HandlerErr> {
    Ok(json!({ "profile": portal.data.faculty.profile }))
}

fn profile_update(portal: &mut Portal, params: &Value) -> Result<Value, HandlerErr> {
    let profile = &mut portal.data.faculty.profile;
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
    if let Some(v) = opt_str(params, "specialization") {
        profile.specialization = v;
    }
    if let Some(v) = opt_str(params, "github") {
        profile.github = v;
    }
    if let Some(v) = opt_str(params, "linkedin") {
        profile.linkedin = v;
    }
    Ok(json!({ "profile": profile.clone() }))
}
