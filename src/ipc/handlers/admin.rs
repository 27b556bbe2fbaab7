use serde_json::{json, Value};

use crate::ipc::error::{ok, HandlerErr};
use crate::ipc::helpers::{matches_query, opt_str, opt_u32, required_str};
use crate::ipc::types::Request;
use crate::portal::{AdminCourse, AdminStudent, FacultyMember, Portal, ADMIN_IMAGE_KEY};

pub fn try_handle(portal: &mut Portal, req: &Request) -> Option<serde_json::Value> {
    let result = match req.method.as_str() {
        "admin.dashboard" => dashboard(portal),
        "admin.students.list" => students_list(portal, &req.params),
        "admin.students.get" => students_get(portal, &req.params),
        "admin.students.create" => students_create(portal, &req.params),
        "admin.students.update" => students_update(portal, &req.params),
        "admin.students.delete" => students_delete(portal, &req.params),
        "admin.faculty.list" => faculty_list(portal, &req.params),
        "admin.faculty.create" => faculty_create(portal, &req.params),
        "admin.faculty.delete" => faculty_delete(portal, &req.params),
        "admin.courses.list" => courses_list(portal, &req.params),
        "admin.courses.create" => courses_create(portal, &req.params),
        "admin.courses.update" => courses_update(portal, &req.params),
        "admin.courses.delete" => courses_delete(portal, &req.params),
        "admin.departments.list" => departments_list(portal),
        "admin.profile.get" => profile_get(portal),
        "admin.profile.update" => profile_update(portal, &req.params),
        "admin.profile.setImage" => profile_set_image(portal, &req.params),
        _ => return None,
    };
    Some(match result {
        Ok(v) => ok(&req.id, v),
        Err(e) => e.response(&req.id),
    })
}

fn dashboard(portal: &Portal) -> Result<Value, HandlerErr> {
    let data = &portal.data.admin;
    Ok(json!({
        "statistics": data.statistics,
        "recentActivity": data.recent_activity,
    }))
}

fn students_list(portal: &Portal, params: &Value) -> Result<Value, HandlerErr> {
    let query = opt_str(params, "query");
    let status = opt_str(params, "status");
    let students: Vec<&_> = portal
        .data
        .admin
        .students
        .iter()
        .filter(|s| status.as_deref().map(|v| s.status == v).unwrap_or(true))
        .filter(|s| match &query {
            Some(q) => matches_query(q, &[&s.first_name, &s.last_name, &s.email, &s.program]),
            None => true,
        })
        .collect();
    Ok(json!({ "students": students }))
}

fn students_get(portal: &Portal, params: &Value) -> Result<Value, HandlerErr> {
    let id = required_str(params, "id")?;
    let student = portal
        .data
        .admin
        .students
        .iter()
        .find(|s| s.id == id)
        .ok_or_else(|| HandlerErr::not_found("student not found"))?;
    Ok(json!({ "student": student }))
}

fn students_create(portal: &mut Portal, params: &Value) -> Result<Value, HandlerErr> {
    let first_name = required_str(params, "firstName")?;
    let last_name = required_str(params, "lastName")?;
    let email = required_str(params, "email")?;
    let student = AdminStudent {
        id: uuid::Uuid::new_v4().to_string(),
        image: format!("https://i.pravatar.cc/150?u={}", first_name.to_lowercase()),
        first_name,
        last_name,
        email,
        phone: opt_str(params, "phone").unwrap_or_default(),
        program: opt_str(params, "program").unwrap_or_default(),
        enrollment_year: opt_u32(params, "enrollmentYear")?.unwrap_or(2025),
        status: opt_str(params, "status").unwrap_or_else(|| "Active".to_string()),
        gpa: 0.0,
    };
    portal.data.admin.students.push(student.clone());
    Ok(json!({ "student": student }))
}

fn students_update(portal: &mut Portal, params: &Value) -> Result<Value, HandlerErr> {
    let id = required_str(params, "id")?;
    let enrollment_year = opt_u32(params, "enrollmentYear")?;
    let student = portal
        .data
        .admin
        .students
        .iter_mut()
        .find(|s| s.id == id)
        .ok_or_else(|| HandlerErr::not_found("student not found"))?;
    if let Some(v) = opt_str(params, "firstName") {
        student.first_name = v;
    }
    if let Some(v) = opt_str(params, "lastName") {
        student.last_name = v;
    }
    if let Some(v) = opt_str(params, "email") {
        student.email = v;
    }
    if let Some(v) = opt_str(params, "phone") {
        student.phone = v;
    }
    if let Some(v) = opt_str(params, "program") {
        student.program = v;
    }
    if let Some(v) = opt_str(params, "status") {
        student.status = v;
    }
    if let Some(v) = enrollment_year {
        student.enrollment_year = v;
    }
    Ok(json!({ "student": student.clone() }))
}

fn students_delete(portal: &mut Portal, params: &Value) -> Result<Value, HandlerErr> {
    let id = required_str(params, "id")?;
    let students = &mut portal.data.admin.students;
    let before = students.len();
    students.retain(|s| s.id != id);
    if students.len() == before {
        return Err(HandlerErr::not_found("student not found"));
    }
    Ok(json!({ "deleted": true }))
}

fn faculty_list(portal: &Portal, params: &Value) -> Result<Value, HandlerErr> {
    let query = opt_str(params, "query");
    let faculty: Vec<&_> = portal
        .data
        .admin
        .faculty
        .iter()
        .filter(|f| match &query {
            Some(q) => matches_query(q, &[&f.first_name, &f.last_name, &f.email, &f.department]),
            None => true,
        })
        .collect();
    Ok(json!({ "faculty": faculty }))
}

fn faculty_create(portal: &mut Portal, params: &Value) -> Result<Value, HandlerErr> {
    let first_name = required_str(params, "firstName")?;
    let last_name = required_str(params, "lastName")?;
    let email = required_str(params, "email")?;
    let courses = params
        .get("courses")
        .and_then(|v| v.as_array())
        .map(|items| {
            items
                .iter()
                .filter_map(|v| v.as_str().map(|s| s.to_string()))
                .collect()
        })
        .unwrap_or_default();
    let member = FacultyMember {
        id: uuid::Uuid::new_v4().to_string(),
        first_name,
        last_name,
        email,
        faculty_id: opt_str(params, "facultyId").unwrap_or_default(),
        department: opt_str(params, "department").unwrap_or_default(),
        position: opt_str(params, "position").unwrap_or_default(),
        courses,
    };
    portal.data.admin.faculty.push(member.clone());
    Ok(json!({ "faculty": member }))
}

fn faculty_delete(portal: &mut Portal, params: &Value) -> Result<Value, HandlerErr> {
    let id = required_str(params, "id")?;
    let faculty = &mut portal.data.admin.faculty;
    let before = faculty.len();
    faculty.retain(|f| f.id != id);
    if faculty.len() == before {
        return Err(HandlerErr::not_found("faculty member not found"));
    }
    Ok(json!({ "deleted": true }))
}

fn courses_list(portal: &Portal, params: &Value) -> Result<Value, HandlerErr> {
    let query = opt_str(params, "query");
    let courses: Vec<&_> = portal
        .data
        .admin
        .courses
        .iter()
        .filter(|c| match &query {
            Some(q) => matches_query(q, &[&c.name, &c.code, &c.department, &c.instructor]),
            None => true,
        })
        .collect();
    Ok(json!({ "courses": courses }))
}

fn courses_create(portal: &mut Portal, params: &Value) -> Result<Value, HandlerErr> {
    let name = required_str(params, "name")?;
    let code = required_str(params, "code")?;
    let course = AdminCourse {
        id: uuid::Uuid::new_v4().to_string(),
        name,
        code,
        department: opt_str(params, "department").unwrap_or_default(),
        credits: opt_u32(params, "credits")?.unwrap_or(0),
        instructor: opt_str(params, "instructor").unwrap_or_default(),
        students: 0,
        status: "Active".to_string(),
        term: opt_str(params, "term").unwrap_or_else(|| "Spring 2025".to_string()),
    };
    portal.data.admin.courses.push(course.clone());
    Ok(json!({ "course": course }))
}

fn courses_update(portal: &mut Portal, params: &Value) -> Result<Value, HandlerErr> {
    let id = required_str(params, "id")?;
    let credits = opt_u32(params, "credits")?;
    let course = portal
        .data
        .admin
        .courses
        .iter_mut()
        .find(|c| c.id == id)
        .ok_or_else(|| HandlerErr::not_found("course not found"))?;
    if let Some(v) = opt_str(params, "name") {
        course.name = v;
    }
    if let Some(v) = opt_str(params, "code") {
        course.code = v;
    }
    if let Some(v) = opt_str(params, "department") {
        course.department = v;
    }
    if let Some(v) = opt_str(params, "instructor") {
        course.instructor = v;
    }
    if let Some(v) = opt_str(params, "status") {
        course.status = v;
    }
    if let Some(v) = opt_str(params, "term") {
        course.term = v;
    }
    if let Some(v) = credits {
        course.credits = v;
    }
    Ok(json!({ "course": course.clone() }))
}

fn courses_delete(portal: &mut Portal, params: &Value) -> Result<Value, HandlerErr> {
    let id = required_str(params, "id")?;
    let courses = &mut portal.data.admin.courses;
    let before = courses.len();
    courses.retain(|c| c.id != id);
    if courses.len() == before {
        return Err(HandlerErr::not_found("course not found"));
    }
    Ok(json!({ "deleted": true }))
}

fn departments_list(portal: &Portal) -> Result<Value, HandlerErr> {
    Ok(json!({ "departments": portal.data.admin.departments }))
}

fn profile_get(portal: &Portal) -> Result<Value, HandlerErr> {
    let mut profile = portal.data.admin.profile.clone();
    if let Some(image) = portal.kv.lock().get(ADMIN_IMAGE_KEY)? {
        profile.profile_picture = Some(image);
    }
    Ok(json!({ "profile": profile }))
}

fn profile_update(portal: &mut Portal, params: &Value) -> Result<Value, HandlerErr> {
    let profile = &mut portal.data.admin.profile;
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
    if let Some(v) = opt_str(params, "department") {
        profile.department = v;
    }
    if let Some(v) = opt_str(params, "officeLocation") {
        profile.office_location = v;
    }
    Ok(json!({ "profile": profile.clone() }))
}

fn profile_set_image(portal: &mut Portal, params: &Value) -> Result<Value, HandlerErr> {
    let data_url = required_str(params, "dataUrl")?;
    portal.kv.lock().set(ADMIN_IMAGE_KEY, &data_url)?;
    portal.data.admin.profile.profile_picture = Some(data_url.clone());
    Ok(json!({ "profilePicture": data_url }))
}
