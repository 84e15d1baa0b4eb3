//! Unit tests for the domain store and its query helpers.

mod courses;
mod notifications;
mod partners;
mod queries;

use crate::model::{ApplicationDraft, Course, CourseMode, Partner};

fn course(id: &str, title: &str) -> Course {
    Course {
        id: id.to_string(),
        title: title.to_string(),
        institution: "Test University".to_string(),
        course_type: "B.Sc".to_string(),
        duration: "3 years".to_string(),
        mode: CourseMode::Online,
        description: "A test course.".to_string(),
        image: String::new(),
        featured: false,
    }
}

fn partner(id: &str, name: &str) -> Partner {
    Partner {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("contact@{}.example", id),
        phone: "+1-555-0000".to_string(),
        address: "1 Test Way".to_string(),
        profile_image: String::new(),
        description: None,
    }
}

fn draft(student_id: &str, course_id: &str) -> ApplicationDraft {
    ApplicationDraft {
        student_id: student_id.to_string(),
        course_id: course_id.to_string(),
        student_name: "Jordan Example".to_string(),
        student_email: "jordan@example.com".to_string(),
        student_phone: "+1-555-0199".to_string(),
        student_address: "42 Elm Street".to_string(),
        course_title: "Bachelor of Technology - Computer Science".to_string(),
        institution: "MIT University".to_string(),
    }
}
