//! The fixed catalog every session starts from.
//!
//! There is no persistence layer: a page load always begins with these six
//! courses and six partners, no applications, and no notifications.

use crate::model::{Course, CourseMode, Partner};

pub fn sample_courses() -> Vec<Course> {
    vec![
        Course {
            id: "1".to_string(),
            title: "Bachelor of Technology - Computer Science".to_string(),
            institution: "MIT University".to_string(),
            course_type: "B.Tech".to_string(),
            duration: "4 years".to_string(),
            mode: CourseMode::Online,
            description: "Comprehensive computer science program covering algorithms, data structures, software engineering, and modern technologies.".to_string(),
            image: "https://images.pexels.com/photos/3184460/pexels-photo-3184460.jpeg?auto=compress&cs=tinysrgb&w=500".to_string(),
            featured: true,
        },
        Course {
            id: "2".to_string(),
            title: "Bachelor of Education - Mathematics".to_string(),
            institution: "Stanford Education Institute".to_string(),
            course_type: "B.Ed".to_string(),
            duration: "2 years".to_string(),
            mode: CourseMode::Hybrid,
            description: "Professional teaching program focused on mathematics education, pedagogy, and classroom management.".to_string(),
            image: "https://images.pexels.com/photos/3184339/pexels-photo-3184339.jpeg?auto=compress&cs=tinysrgb&w=500".to_string(),
            featured: true,
        },
        Course {
            id: "3".to_string(),
            title: "Master of Business Administration".to_string(),
            institution: "Harvard Business School".to_string(),
            course_type: "MBA".to_string(),
            duration: "2 years".to_string(),
            mode: CourseMode::Online,
            description: "Advanced business administration program covering strategy, finance, marketing, and leadership.".to_string(),
            image: "https://images.pexels.com/photos/3184291/pexels-photo-3184291.jpeg?auto=compress&cs=tinysrgb&w=500".to_string(),
            featured: false,
        },
        Course {
            id: "4".to_string(),
            title: "Bachelor of Science - Data Science".to_string(),
            institution: "Tech Valley University".to_string(),
            course_type: "B.Sc".to_string(),
            duration: "3 years".to_string(),
            mode: CourseMode::Offline,
            description: "Cutting-edge data science program covering machine learning, statistics, and big data analytics.".to_string(),
            image: "https://images.pexels.com/photos/3184306/pexels-photo-3184306.jpeg?auto=compress&cs=tinysrgb&w=500".to_string(),
            featured: false,
        },
        Course {
            id: "5".to_string(),
            title: "Master of Education - Curriculum Design".to_string(),
            institution: "Global Education Academy".to_string(),
            course_type: "M.Ed".to_string(),
            duration: "1.5 years".to_string(),
            mode: CourseMode::Online,
            description: "Advanced education program focusing on curriculum development and educational leadership.".to_string(),
            image: "https://images.pexels.com/photos/3184465/pexels-photo-3184465.jpeg?auto=compress&cs=tinysrgb&w=500".to_string(),
            featured: false,
        },
        Course {
            id: "6".to_string(),
            title: "Bachelor of Arts - Digital Marketing".to_string(),
            institution: "Creative Institute".to_string(),
            course_type: "B.A".to_string(),
            duration: "3 years".to_string(),
            mode: CourseMode::Hybrid,
            description: "Modern marketing program covering digital strategies, social media, and content creation.".to_string(),
            image: "https://images.pexels.com/photos/3184418/pexels-photo-3184418.jpeg?auto=compress&cs=tinysrgb&w=500".to_string(),
            featured: false,
        },
    ]
}

pub fn sample_partners() -> Vec<Partner> {
    vec![
        Partner {
            id: "1".to_string(),
            name: "MIT University".to_string(),
            email: "partnerships@mit.edu".to_string(),
            phone: "+1-555-0123".to_string(),
            address: "77 Massachusetts Ave, Cambridge, MA 02139".to_string(),
            profile_image: "https://images.pexels.com/photos/256490/pexels-photo-256490.jpeg?auto=compress&cs=tinysrgb&w=300".to_string(),
            description: Some("Leading technology university with world-class engineering and computer science programs.".to_string()),
        },
        Partner {
            id: "2".to_string(),
            name: "Stanford Education Institute".to_string(),
            email: "info@stanford-edu.org".to_string(),
            phone: "+1-555-0456".to_string(),
            address: "450 Serra Mall, Stanford, CA 94305".to_string(),
            profile_image: "https://images.pexels.com/photos/207692/pexels-photo-207692.jpeg?auto=compress&cs=tinysrgb&w=300".to_string(),
            description: Some("Premier education institute specializing in teacher training and educational research.".to_string()),
        },
        Partner {
            id: "3".to_string(),
            name: "Harvard Business School".to_string(),
            email: "admissions@hbs.edu".to_string(),
            phone: "+1-555-0789".to_string(),
            address: "Soldiers Field, Boston, MA 02163".to_string(),
            profile_image: "https://images.pexels.com/photos/1595391/pexels-photo-1595391.jpeg?auto=compress&cs=tinysrgb&w=300".to_string(),
            description: Some("World-renowned business school offering top-tier MBA and executive education programs.".to_string()),
        },
        Partner {
            id: "4".to_string(),
            name: "Tech Valley University".to_string(),
            email: "contact@techvalley.edu".to_string(),
            phone: "+1-555-0321".to_string(),
            address: "1000 Innovation Blvd, San Jose, CA 95134".to_string(),
            profile_image: "https://images.pexels.com/photos/289737/pexels-photo-289737.jpeg?auto=compress&cs=tinysrgb&w=300".to_string(),
            description: Some("Modern university focused on technology, innovation, and practical skill development.".to_string()),
        },
        Partner {
            id: "5".to_string(),
            name: "Global Education Academy".to_string(),
            email: "partnerships@globaledu.org".to_string(),
            phone: "+1-555-0654".to_string(),
            address: "500 Learning Lane, Austin, TX 78701".to_string(),
            profile_image: "https://images.pexels.com/photos/1438081/pexels-photo-1438081.jpeg?auto=compress&cs=tinysrgb&w=300".to_string(),
            description: Some("International education provider with focus on online learning and global accessibility.".to_string()),
        },
        Partner {
            id: "6".to_string(),
            name: "Creative Institute".to_string(),
            email: "hello@creativeinstitute.com".to_string(),
            phone: "+1-555-0987".to_string(),
            address: "200 Design District, New York, NY 10001".to_string(),
            profile_image: "https://images.pexels.com/photos/1462630/pexels-photo-1462630.jpeg?auto=compress&cs=tinysrgb&w=300".to_string(),
            description: Some("Innovative institute specializing in creative arts, design, and digital marketing education.".to_string()),
        },
    ]
}
