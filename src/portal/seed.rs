//! Demo records every tree starts from, matching what the portal screens
//! display before any user action.

use std::collections::HashMap;

use super::*;

fn s(v: &str) -> String {
    v.to_string()
}

pub fn student() -> StudentData {
    StudentData {
        courses: vec![
            Course {
                id: s("1"),
                name: s("Introduction to Computer Science"),
                code: s("CS101"),
                instructor: s("Dr. Jane Smith"),
                schedule: s("Mon, Wed 10:00 - 11:30 AM"),
                credits: 3,
            },
            Course {
                id: s("2"),
                name: s("Calculus I"),
                code: s("MATH201"),
                instructor: s("Prof. Alan Johnson"),
                schedule: s("Tue, Thu 2:00 - 3:30 PM"),
                credits: 4,
            },
            Course {
                id: s("3"),
                name: s("Physics: Mechanics"),
                code: s("PHYS101"),
                instructor: s("Dr. Robert Brown"),
                schedule: s("Wed, Fri 9:00 - 10:30 AM"),
                credits: 4,
            },
            Course {
                id: s("4"),
                name: s("English Composition"),
                code: s("ENG105"),
                instructor: s("Prof. Emily Davis"),
                schedule: s("Mon, Fri 1:00 - 2:30 PM"),
                credits: 3,
            },
        ],
        assessments: vec![
            Assessment {
                id: s("1"),
                course_id: s("1"),
                course_name: s("Introduction to Computer Science"),
                title: s("Midterm Examination"),
                kind: s("midterm"),
                due_date: s("2025-06-15T14:00:00"),
                status: s("upcoming"),
                score: None,
                max_score: 100,
                portions: Some(s(
                    "Chapters 1-5: Data Structures, Algorithms, Programming Fundamentals",
                )),
            },
            Assessment {
                id: s("2"),
                course_id: s("2"),
                course_name: s("Calculus I"),
                title: s("Assignment #3: Integration"),
                kind: s("assignment"),
                due_date: s("2025-06-10T23:59:00"),
                status: s("upcoming"),
                score: None,
                max_score: 50,
                portions: Some(s(
                    "Integration techniques, U-substitution, Integration by parts",
                )),
            },
            Assessment {
                id: s("3"),
                course_id: s("3"),
                course_name: s("Physics: Mechanics"),
                title: s("Quiz on Newton's Laws"),
                kind: s("quiz"),
                due_date: s("2025-05-30T10:15:00"),
                status: s("completed"),
                score: Some(92),
                max_score: 100,
                portions: None,
            },
            Assessment {
                id: s("4"),
                course_id: s("4"),
                course_name: s("English Composition"),
                title: s("Essay Submission"),
                kind: s("assignment"),
                due_date: s("2025-05-20T23:59:00"),
                status: s("completed"),
                score: Some(85),
                max_score: 100,
                portions: None,
            },
        ],
        attendance: attendance_records(),
        leaves: vec![
            LeaveRequest {
                id: s("1"),
                reason: s("Medical Appointment"),
                leave_type: None,
                from_date: s("2025-05-20"),
                to_date: s("2025-05-21"),
                status: s("Approved"),
                submitted_on: s("2025-05-05"),
                description: None,
                comment: None,
            },
            LeaveRequest {
                id: s("2"),
                reason: s("Family Event"),
                leave_type: None,
                from_date: s("2025-06-10"),
                to_date: s("2025-06-15"),
                status: s("Pending"),
                submitted_on: s("2025-05-08"),
                description: None,
                comment: None,
            },
            LeaveRequest {
                id: s("3"),
                reason: s("Personal Emergency"),
                leave_type: None,
                from_date: s("2025-04-15"),
                to_date: s("2025-04-16"),
                status: s("Rejected"),
                submitted_on: s("2025-04-10"),
                description: None,
                comment: Some(s("Insufficient documentation provided")),
            },
        ],
        homework: vec![
            Homework {
                id: s("1"),
                course_id: s("1"),
                course_name: s("Introduction to Computer Science"),
                title: s("Programming Assignment #2"),
                due_date: s("2025-05-20T23:59:00"),
                status: s("completed"),
                submission_date: Some(s("2025-05-19T14:30:00")),
                grade: Some(s("A")),
                feedback: Some(s(
                    "Excellent work! Your code is well structured and efficient.",
                )),
                file: None,
            },
            Homework {
                id: s("2"),
                course_id: s("2"),
                course_name: s("Calculus I"),
                title: s("Problem Set #3"),
                due_date: s("2025-05-25T23:59:00"),
                status: s("pending"),
                submission_date: None,
                grade: None,
                feedback: None,
                file: None,
            },
            Homework {
                id: s("3"),
                course_id: s("3"),
                course_name: s("Physics: Mechanics"),
                title: s("Lab Report"),
                due_date: s("2025-05-15T23:59:00"),
                status: s("completed"),
                submission_date: Some(s("2025-05-15T22:45:00")),
                grade: Some(s("B+")),
                feedback: Some(s("Good analysis, but some calculations need correction.")),
                file: None,
            },
        ],
        materials: vec![
            LearningMaterial {
                id: s("1"),
                course_id: s("1"),
                course_name: s("Introduction to Computer Science"),
                title: s("Introduction to Algorithms"),
                kind: s("pdf"),
                upload_date: s("2025-04-10"),
                url: s("#"),
            },
            LearningMaterial {
                id: s("2"),
                course_id: s("1"),
                course_name: s("Introduction to Computer Science"),
                title: s("Data Structures Tutorial"),
                kind: s("video"),
                upload_date: s("2025-04-15"),
                url: s("#"),
            },
            LearningMaterial {
                id: s("3"),
                course_id: s("2"),
                course_name: s("Calculus I"),
                title: s("Limits and Continuity"),
                kind: s("slide"),
                upload_date: s("2025-04-05"),
                url: s("#"),
            },
            LearningMaterial {
                id: s("4"),
                course_id: s("3"),
                course_name: s("Physics: Mechanics"),
                title: s("Newton's Laws of Motion"),
                kind: s("pdf"),
                upload_date: s("2025-04-03"),
                url: s("#"),
            },
        ],
        profile: StudentProfile {
            id: s("1"),
            first_name: s("John"),
            last_name: s("Doe"),
            email: s("john.doe@university.edu"),
            student_id: s("S12345"),
            department: s("Computer Science"),
            year: 2,
            phone: s("(555) 123-4567"),
            address: s("123 University Ave, College Town, CT 12345"),
            date_of_birth: s("2000-06-15"),
            profile_image: None,
        },
    }
}

fn attendance_records() -> Vec<AttendanceRecord> {
    let rows: [(&str, &str, &str, &str); 20] = [
        ("1", "Introduction to Computer Science", "2025-05-05", "present"),
        ("1", "Introduction to Computer Science", "2025-05-07", "present"),
        ("1", "Introduction to Computer Science", "2025-05-12", "present"),
        ("1", "Introduction to Computer Science", "2025-05-14", "absent"),
        ("1", "Introduction to Computer Science", "2025-05-19", "present"),
        ("2", "Calculus I", "2025-05-04", "present"),
        ("2", "Calculus I", "2025-05-06", "late"),
        ("2", "Calculus I", "2025-05-11", "present"),
        ("2", "Calculus I", "2025-05-13", "present"),
        ("2", "Calculus I", "2025-05-18", "present"),
        ("3", "Physics: Mechanics", "2025-05-05", "present"),
        ("3", "Physics: Mechanics", "2025-05-07", "present"),
        ("3", "Physics: Mechanics", "2025-05-12", "absent"),
        ("3", "Physics: Mechanics", "2025-05-14", "present"),
        ("3", "Physics: Mechanics", "2025-05-19", "present"),
        ("4", "English Composition", "2025-05-03", "present"),
        ("4", "English Composition", "2025-05-07", "present"),
        ("4", "English Composition", "2025-05-10", "absent"),
        ("4", "English Composition", "2025-05-14", "present"),
        ("4", "English Composition", "2025-05-17", "present"),
    ];
    rows.iter()
        .map(|(course_id, course_name, date, status)| AttendanceRecord {
            course_id: s(course_id),
            course_name: s(course_name),
            date: s(date),
            status: s(status),
        })
        .collect()
}

pub fn faculty() -> FacultyData {
    FacultyData {
        classes: vec![
            FacultyClass {
                id: s("101"),
                name: s("Introduction to Computer Science"),
                code: s("CS101"),
                schedule: s("Mon, Wed 10:00 - 11:30 AM"),
                students: 35,
                room: s("Science Building 301"),
            },
            FacultyClass {
                id: s("102"),
                name: s("Data Structures and Algorithms"),
                code: s("CS201"),
                schedule: s("Tue, Thu 1:00 - 2:30 PM"),
                students: 28,
                room: s("Engineering Hall 105"),
            },
            FacultyClass {
                id: s("103"),
                name: s("Database Systems"),
                code: s("CS310"),
                schedule: s("Mon, Fri 3:00 - 4:30 PM"),
                students: 22,
                room: s("Computer Lab 204"),
            },
        ],
        course_filters: vec![
            CourseRef {
                id: s("cs101"),
                name: s("CS101 - Introduction to Computer Science"),
            },
            CourseRef {
                id: s("cs202"),
                name: s("CS202 - Data Structures and Algorithms"),
            },
            CourseRef {
                id: s("cs305"),
                name: s("CS305 - Database Systems"),
            },
        ],
        sessions: vec![
            ClassSession {
                id: s("1"),
                course_id: s("cs101"),
                date: s("2025-05-05"),
                time: s("9:00 AM - 10:15 AM"),
                topic: s("Introduction to Programming"),
                attendance_marked: true,
                present: 40,
                total: 45,
            },
            ClassSession {
                id: s("2"),
                course_id: s("cs101"),
                date: s("2025-05-07"),
                time: s("9:00 AM - 10:15 AM"),
                topic: s("Variables and Data Types"),
                attendance_marked: true,
                present: 42,
                total: 45,
            },
            ClassSession {
                id: s("3"),
                course_id: s("cs101"),
                date: s("2025-05-09"),
                time: s("9:00 AM - 10:15 AM"),
                topic: s("Control Structures"),
                attendance_marked: false,
                present: 0,
                total: 45,
            },
            ClassSession {
                id: s("4"),
                course_id: s("cs202"),
                date: s("2025-05-06"),
                time: s("11:00 AM - 12:30 PM"),
                topic: s("Arrays and Linked Lists"),
                attendance_marked: true,
                present: 35,
                total: 38,
            },
            ClassSession {
                id: s("5"),
                course_id: s("cs202"),
                date: s("2025-05-08"),
                time: s("11:00 AM - 12:30 PM"),
                topic: s("Stacks and Queues"),
                attendance_marked: false,
                present: 0,
                total: 38,
            },
            ClassSession {
                id: s("6"),
                course_id: s("cs305"),
                date: s("2025-05-05"),
                time: s("2:00 PM - 3:30 PM"),
                topic: s("Database Design"),
                attendance_marked: true,
                present: 26,
                total: 28,
            },
        ],
        roster: vec![
            RosterStudent {
                id: s("1"),
                name: s("John Doe"),
                email: s("john.doe@university.edu"),
                student_id: s("S12345"),
                courses: vec![s("CS101"), s("CS201")],
                profile_image: s("https://i.pravatar.cc/150?u=s1"),
            },
            RosterStudent {
                id: s("2"),
                name: s("Jane Smith"),
                email: s("jane.smith@university.edu"),
                student_id: s("S12346"),
                courses: vec![s("CS101")],
                profile_image: s("https://i.pravatar.cc/150?u=s2"),
            },
            RosterStudent {
                id: s("3"),
                name: s("Michael Johnson"),
                email: s("michael.j@university.edu"),
                student_id: s("S12347"),
                courses: vec![s("CS201"), s("CS310")],
                profile_image: s("https://i.pravatar.cc/150?u=s3"),
            },
            RosterStudent {
                id: s("4"),
                name: s("Emily Brown"),
                email: s("emily.b@university.edu"),
                student_id: s("S12348"),
                courses: vec![s("CS101"), s("CS310")],
                profile_image: s("https://i.pravatar.cc/150?u=s4"),
            },
        ],
        sheets: HashMap::new(),
        assessments: vec![
            FacultyAssessment {
                id: s("101"),
                course_id: s("101"),
                course_name: s("Introduction to Computer Science"),
                title: s("Midterm Examination"),
                due_date: s("2025-06-15T14:00:00"),
                kind: s("midterm"),
                max_score: 100,
                created: s("2025-05-01"),
                status: s("scheduled"),
            },
            FacultyAssessment {
                id: s("102"),
                course_id: s("102"),
                course_name: s("Data Structures and Algorithms"),
                title: s("Assignment #3: Trees and Graphs"),
                due_date: s("2025-05-25T23:59:00"),
                kind: s("assignment"),
                max_score: 50,
                created: s("2025-05-10"),
                status: s("active"),
            },
            FacultyAssessment {
                id: s("103"),
                course_id: s("103"),
                course_name: s("Database Systems"),
                title: s("Quiz on SQL"),
                due_date: s("2025-05-18T15:30:00"),
                kind: s("quiz"),
                max_score: 20,
                created: s("2025-05-05"),
                status: s("active"),
            },
        ],
        submissions: vec![
            Submission {
                id: s("201"),
                student_id: s("1"),
                student_name: s("John Doe"),
                course_id: s("101"),
                course_name: s("Introduction to Computer Science"),
                assignment_title: s("Programming Assignment #1"),
                submission_date: s("2025-05-05T14:30:00"),
                file: s("assignment1_johndoe.zip"),
                grade: Some(s("A")),
                feedback: Some(s("Excellent work!")),
            },
            Submission {
                id: s("202"),
                student_id: s("2"),
                student_name: s("Jane Smith"),
                course_id: s("101"),
                course_name: s("Introduction to Computer Science"),
                assignment_title: s("Programming Assignment #1"),
                submission_date: s("2025-05-06T09:15:00"),
                file: s("assignment1_janesmith.zip"),
                grade: Some(s("B+")),
                feedback: Some(s("Good work but could improve code efficiency")),
            },
            Submission {
                id: s("203"),
                student_id: s("4"),
                student_name: s("Emily Brown"),
                course_id: s("103"),
                course_name: s("Database Systems"),
                assignment_title: s("ER Diagram Project"),
                submission_date: s("2025-05-10T22:45:00"),
                file: s("erdiagram_emilybrown.pdf"),
                grade: None,
                feedback: None,
            },
        ],
        leaves: vec![
            StudentLeave {
                id: s("1"),
                student_name: s("Alex Johnson"),
                student_id: s("ST12345"),
                class: s("cs101"),
                request_date: s("2025-05-08"),
                start_date: s("2025-05-15"),
                end_date: s("2025-05-17"),
                kind: s("Medical"),
                reason: s("Doctor appointment for regular checkup"),
                status: s("pending"),
                response_date: None,
                response_reason: None,
            },
            StudentLeave {
                id: s("2"),
                student_name: s("Maria Garcia"),
                student_id: s("ST12346"),
                class: s("cs202"),
                request_date: s("2025-05-10"),
                start_date: s("2025-05-20"),
                end_date: s("2025-05-21"),
                kind: s("Personal"),
                reason: s("Family emergency"),
                status: s("pending"),
                response_date: None,
                response_reason: None,
            },
            StudentLeave {
                id: s("3"),
                student_name: s("John Smith"),
                student_id: s("ST12347"),
                class: s("cs101"),
                request_date: s("2025-05-05"),
                start_date: s("2025-05-12"),
                end_date: s("2025-05-14"),
                kind: s("Medical"),
                reason: s("Surgery recovery"),
                status: s("approved"),
                response_date: Some(s("2025-05-06")),
                response_reason: Some(s("Medical certificate verified")),
            },
            StudentLeave {
                id: s("4"),
                student_name: s("Emily Chen"),
                student_id: s("ST12348"),
                class: s("cs305"),
                request_date: s("2025-05-03"),
                start_date: s("2025-05-10"),
                end_date: s("2025-05-11"),
                kind: s("Personal"),
                reason: s("Religious observance"),
                status: s("rejected"),
                response_date: Some(s("2025-05-04")),
                response_reason: Some(s("Insufficient advance notice as per policy")),
            },
            StudentLeave {
                id: s("5"),
                student_name: s("Michael Brown"),
                student_id: s("ST12349"),
                class: s("cs202"),
                request_date: s("2025-05-12"),
                start_date: s("2025-05-22"),
                end_date: s("2025-05-24"),
                kind: s("Family"),
                reason: s("Sister's wedding"),
                status: s("pending"),
                response_date: None,
                response_reason: None,
            },
            StudentLeave {
                id: s("6"),
                student_name: s("Sarah Wilson"),
                student_id: s("ST12350"),
                class: s("cs305"),
                request_date: s("2025-05-01"),
                start_date: s("2025-05-16"),
                end_date: s("2025-05-18"),
                kind: s("Medical"),
                reason: s("Dental surgery"),
                status: s("approved"),
                response_date: Some(s("2025-05-02")),
                response_reason: Some(s("Medical certificate provided")),
            },
        ],
        schedule: vec![
            ScheduleItem {
                id: s("1"),
                class_name: s("CS101"),
                kind: s("Lecture"),
                time: s("09:00 - 10:30"),
                room: s("B-201"),
                date: s("2025-05-12"),
            },
            ScheduleItem {
                id: s("2"),
                class_name: s("MATH201"),
                kind: s("Tutorial"),
                time: s("13:00 - 14:30"),
                room: s("A-105"),
                date: s("2025-05-12"),
            },
        ],
        tasks: vec![
            PendingTask {
                id: s("1"),
                task: s("Grade Midterm Exams"),
                class_name: s("CS101"),
                deadline: s("2025-05-15"),
            },
            PendingTask {
                id: s("2"),
                task: s("Review Homework Submissions"),
                class_name: s("PHY105"),
                deadline: s("2025-05-13"),
            },
        ],
        profile: FacultyProfile {
            id: s("1"),
            first_name: s("Jane"),
            last_name: s("Smith"),
            email: s("jane.smith@university.edu"),
            faculty_id: s("F54321"),
            department: s("Computer Science"),
            position: s("Assistant Professor"),
            phone: s("(555) 987-6543"),
            address: s("456 Faculty Row, College Town, CT 12345"),
            specialization: s("Database Systems, Machine Learning"),
            github: s("https://github.com/janesmith"),
            linkedin: s("https://linkedin.com/in/janesmith"),
            profile_image: Some(s("https://i.pravatar.cc/300?u=faculty")),
        },
    }
}

pub fn admin() -> AdminData {
    AdminData {
        students: vec![
            AdminStudent {
                id: s("1"),
                first_name: s("Emma"),
                last_name: s("Thompson"),
                email: s("emma.t@university.edu"),
                phone: s("(555) 123-4567"),
                program: s("Computer Science"),
                enrollment_year: 2023,
                status: s("Active"),
                gpa: 3.8,
                image: s("https://i.pravatar.cc/150?u=emma"),
            },
            AdminStudent {
                id: s("2"),
                first_name: s("Michael"),
                last_name: s("Chen"),
                email: s("mchen@university.edu"),
                phone: s("(555) 234-5678"),
                program: s("Mathematics"),
                enrollment_year: 2022,
                status: s("Active"),
                gpa: 3.5,
                image: s("https://i.pravatar.cc/150?u=michael"),
            },
            AdminStudent {
                id: s("3"),
                first_name: s("Sophia"),
                last_name: s("Garcia"),
                email: s("sgarcia@university.edu"),
                phone: s("(555) 345-6789"),
                program: s("Psychology"),
                enrollment_year: 2023,
                status: s("Active"),
                gpa: 3.9,
                image: s("https://i.pravatar.cc/150?u=sophia"),
            },
            AdminStudent {
                id: s("4"),
                first_name: s("James"),
                last_name: s("Wilson"),
                email: s("jwilson@university.edu"),
                phone: s("(555) 456-7890"),
                program: s("Business Administration"),
                enrollment_year: 2021,
                status: s("Probation"),
                gpa: 2.4,
                image: s("https://i.pravatar.cc/150?u=james"),
            },
            AdminStudent {
                id: s("5"),
                first_name: s("Olivia"),
                last_name: s("Johnson"),
                email: s("ojohnson@university.edu"),
                phone: s("(555) 567-8901"),
                program: s("Engineering"),
                enrollment_year: 2022,
                status: s("Active"),
                gpa: 3.7,
                image: s("https://i.pravatar.cc/150?u=olivia"),
            },
        ],
        faculty: vec![
            FacultyMember {
                id: s("1"),
                first_name: s("Jane"),
                last_name: s("Smith"),
                email: s("jane.smith@university.edu"),
                faculty_id: s("F54321"),
                department: s("Computer Science"),
                position: s("Assistant Professor"),
                courses: vec![s("CS101"), s("CS201")],
            },
            FacultyMember {
                id: s("2"),
                first_name: s("Robert"),
                last_name: s("Brown"),
                email: s("robert.brown@university.edu"),
                faculty_id: s("F54322"),
                department: s("Physics"),
                position: s("Professor"),
                courses: vec![s("PHYS101"), s("PHYS201")],
            },
            FacultyMember {
                id: s("3"),
                first_name: s("Alan"),
                last_name: s("Johnson"),
                email: s("alan.j@university.edu"),
                faculty_id: s("F54323"),
                department: s("Mathematics"),
                position: s("Associate Professor"),
                courses: vec![s("MATH101"), s("MATH201")],
            },
            FacultyMember {
                id: s("4"),
                first_name: s("Emily"),
                last_name: s("Davis"),
                email: s("emily.davis@university.edu"),
                faculty_id: s("F54324"),
                department: s("English"),
                position: s("Professor"),
                courses: vec![s("ENG101"), s("ENG105")],
            },
        ],
        courses: vec![
            AdminCourse {
                id: s("1"),
                name: s("Introduction to Computer Science"),
                code: s("CS101"),
                department: s("Computer Science"),
                credits: 3,
                instructor: s("Dr. Smith"),
                students: 28,
                status: s("Active"),
                term: s("Spring 2025"),
            },
            AdminCourse {
                id: s("2"),
                name: s("Calculus I"),
                code: s("MATH201"),
                department: s("Mathematics"),
                credits: 4,
                instructor: s("Prof. Johnson"),
                students: 35,
                status: s("Active"),
                term: s("Spring 2025"),
            },
            AdminCourse {
                id: s("3"),
                name: s("Physics for Engineers"),
                code: s("PHY105"),
                department: s("Physics"),
                credits: 4,
                instructor: s("Dr. Williams"),
                students: 32,
                status: s("Active"),
                term: s("Spring 2025"),
            },
            AdminCourse {
                id: s("4"),
                name: s("English Composition"),
                code: s("ENG101"),
                department: s("English"),
                credits: 3,
                instructor: s("Prof. Davis"),
                students: 40,
                status: s("Active"),
                term: s("Spring 2025"),
            },
            AdminCourse {
                id: s("5"),
                name: s("Introduction to Psychology"),
                code: s("PSY101"),
                department: s("Psychology"),
                credits: 3,
                instructor: s("Dr. Wilson"),
                students: 45,
                status: s("Active"),
                term: s("Spring 2025"),
            },
        ],
        departments: vec![
            Department { id: s("1"), name: s("Computer Science") },
            Department { id: s("2"), name: s("Mathematics") },
            Department { id: s("3"), name: s("Physics") },
            Department { id: s("4"), name: s("Biology") },
            Department { id: s("5"), name: s("Chemistry") },
            Department { id: s("6"), name: s("English") },
        ],
        statistics: Statistics {
            students: 1248,
            faculty: 86,
            courses: 42,
            departments: 7,
        },
        recent_activity: vec![
            ActivityItem {
                id: s("1"),
                action: s("New student registration"),
                time: s("2 hours ago"),
            },
            ActivityItem {
                id: s("2"),
                action: s("Course schedule updated"),
                time: s("5 hours ago"),
            },
            ActivityItem {
                id: s("3"),
                action: s("Faculty meeting scheduled"),
                time: s("1 day ago"),
            },
            ActivityItem {
                id: s("4"),
                action: s("Semester grades submitted"),
                time: s("2 days ago"),
            },
        ],
        profile: AdminProfile {
            id: s("ADM12345"),
            first_name: s("James"),
            last_name: s("Wilson"),
            email: s("james.wilson@university.edu"),
            phone: s("+1 (555) 765-4321"),
            role: s("System Administrator"),
            department: s("IT Administration"),
            join_date: s("2020-03-10"),
            office_location: s("Admin Building, Room 101"),
            profile_picture: None,
        },
    }
}
