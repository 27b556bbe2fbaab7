mod seed;

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use serde::Serialize;

use crate::auth::Authenticator;
use crate::session::SessionStore;
use crate::store::Kv;

/// Keys of the cached demo profile images.
pub const ADMIN_IMAGE_KEY: &str = "adminProfilePic";
pub const STUDENT_IMAGE_KEY: &str = "studentProfilePic";

/// One open portal: the durable key-value store, the session it carries, the
/// authenticator bound to that session, and the transient per-tree sample
/// data every view operates on.
pub struct Portal {
    pub kv: Arc<Mutex<Kv>>,
    pub session: Arc<SessionStore>,
    pub auth: Authenticator,
    pub data: PortalData,
}

impl Portal {
    pub fn open(dir: &Path, login_delay: Duration) -> anyhow::Result<Portal> {
        let kv = Arc::new(Mutex::new(Kv::open(dir)?));
        let session = Arc::new(SessionStore::new(Arc::clone(&kv)));
        session.load();
        let auth = Authenticator::new(Arc::clone(&session)).with_delay(login_delay);
        Ok(Portal {
            kv,
            session,
            auth,
            data: PortalData::seed(),
        })
    }

    pub fn storage_path(&self) -> PathBuf {
        self.kv.lock().path().to_path_buf()
    }
}

/// Transient view data, reseeded on every open. The trees deliberately do not
/// share records; each mirrors what its own screens display.
pub struct PortalData {
    pub student: StudentData,
    pub faculty: FacultyData,
    pub admin: AdminData,
}

impl PortalData {
    pub fn seed() -> PortalData {
        PortalData {
            student: seed::student(),
            faculty: seed::faculty(),
            admin: seed::admin(),
        }
    }
}

// ---------------------------------------------------------------------------
// Student tree

pub struct StudentData {
    pub courses: Vec<Course>,
    pub assessments: Vec<Assessment>,
    pub attendance: Vec<AttendanceRecord>,
    pub leaves: Vec<LeaveRequest>,
    pub homework: Vec<Homework>,
    pub materials: Vec<LearningMaterial>,
    pub profile: StudentProfile,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub name: String,
    pub code: String,
    pub instructor: String,
    pub schedule: String,
    pub credits: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub id: String,
    pub course_id: String,
    pub course_name: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub due_date: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
    pub max_score: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portions: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub course_id: String,
    pub course_name: String,
    pub date: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    pub id: String,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leave_type: Option<String>,
    pub from_date: String,
    pub to_date: String,
    pub status: String,
    pub submitted_on: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Homework {
    pub id: String,
    pub course_id: String,
    pub course_name: String,
    pub title: String,
    pub due_date: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningMaterial {
    pub id: String,
    pub course_id: String,
    pub course_name: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub upload_date: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub student_id: String,
    pub department: String,
    pub year: u32,
    pub phone: String,
    pub address: String,
    pub date_of_birth: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

// ---------------------------------------------------------------------------
// Faculty tree

pub struct FacultyData {
    pub classes: Vec<FacultyClass>,
    pub course_filters: Vec<CourseRef>,
    pub sessions: Vec<ClassSession>,
    pub roster: Vec<RosterStudent>,
    /// Present flags per session, keyed by session id then student id.
    pub sheets: HashMap<String, HashMap<String, bool>>,
    pub assessments: Vec<FacultyAssessment>,
    pub submissions: Vec<Submission>,
    pub leaves: Vec<StudentLeave>,
    pub schedule: Vec<ScheduleItem>,
    pub tasks: Vec<PendingTask>,
    pub profile: FacultyProfile,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacultyClass {
    pub id: String,
    pub name: String,
    pub code: String,
    pub schedule: String,
    pub students: u32,
    pub room: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassSession {
    pub id: String,
    pub course_id: String,
    pub date: String,
    pub time: String,
    pub topic: String,
    pub attendance_marked: bool,
    pub present: u32,
    pub total: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterStudent {
    pub id: String,
    pub name: String,
    pub email: String,
    pub student_id: String,
    pub courses: Vec<String>,
    pub profile_image: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacultyAssessment {
    pub id: String,
    pub course_id: String,
    pub course_name: String,
    pub title: String,
    pub due_date: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub max_score: u32,
    pub created: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: String,
    pub student_id: String,
    pub student_name: String,
    pub course_id: String,
    pub course_name: String,
    pub assignment_title: String,
    pub submission_date: String,
    pub file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

/// A leave request as the faculty review screen sees it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentLeave {
    pub id: String,
    pub student_name: String,
    pub student_id: String,
    pub class: String,
    pub request_date: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub reason: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_reason: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleItem {
    pub id: String,
    pub class_name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub time: String,
    pub room: String,
    pub date: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingTask {
    pub id: String,
    pub task: String,
    pub class_name: String,
    pub deadline: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacultyProfile {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub faculty_id: String,
    pub department: String,
    pub position: String,
    pub phone: String,
    pub address: String,
    pub specialization: String,
    pub github: String,
    pub linkedin: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

// ---------------------------------------------------------------------------
// Admin tree

pub struct AdminData {
    pub students: Vec<AdminStudent>,
    pub faculty: Vec<FacultyMember>,
    pub courses: Vec<AdminCourse>,
    pub departments: Vec<Department>,
    pub statistics: Statistics,
    pub recent_activity: Vec<ActivityItem>,
    pub profile: AdminProfile,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStudent {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub program: String,
    pub enrollment_year: u32,
    pub status: String,
    pub gpa: f64,
    pub image: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacultyMember {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub faculty_id: String,
    pub department: String,
    pub position: String,
    pub courses: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminCourse {
    pub id: String,
    pub name: String,
    pub code: String,
    pub department: String,
    pub credits: u32,
    pub instructor: String,
    pub students: u32,
    pub status: String,
    pub term: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub students: u32,
    pub faculty: u32,
    pub courses: u32,
    pub departments: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityItem {
    pub id: String,
    pub action: String,
    pub time: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminProfile {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub department: String,
    pub join_date: String,
    pub office_location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
}
