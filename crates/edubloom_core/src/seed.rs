//! crates/edubloom_core/src/seed.rs
//!
//! Demo data loaded into a fresh store at startup: six categories, six
//! locations, seven users (one admin, six tutors), six tutor profiles and
//! twelve courses. Seeded records keep their fixed ids ("1", "2", ...).

use chrono::{DateTime, Utc};

use crate::domain::{
    Category, Coordinates, Course, CourseFormat, CourseLevel, CourseStatus, Location,
    LocationType, Preferences, Role, Tutor, TutorStatus, User,
};
use crate::store::EntityStore;

impl EntityStore {
    /// A store pre-populated with the demo catalog.
    pub fn seeded() -> Self {
        let now = Utc::now();
        let mut store = Self::new();
        store.load(categories(now));
        store.load(locations(now));
        store.load(users(now));
        store.load(tutors(now));
        store.load(courses(now));
        store
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn categories(now: DateTime<Utc>) -> Vec<Category> {
    [
        ("1", "Web Development", "Learn to build modern websites and web applications", "💻", "#3B82F6"),
        ("2", "Digital Marketing", "Master digital marketing strategies and grow your business", "📈", "#10B981"),
        ("3", "Mathematics", "Advanced mathematical concepts and problem-solving", "📐", "#8B5CF6"),
        ("4", "Data Science", "Analyze data and build machine learning models", "📊", "#F59E0B"),
        ("5", "Design", "Create beautiful and functional digital designs", "🎨", "#EF4444"),
        ("6", "Physics", "Explore the fundamental laws of the universe", "⚛️", "#06B6D4"),
    ]
    .into_iter()
    .map(|(id, name, description, icon, color)| Category {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        color: color.to_string(),
        parent_id: None,
        is_active: true,
        created_at: now,
        updated_at: now,
    })
    .collect()
}

fn locations(now: DateTime<Utc>) -> Vec<Location> {
    [
        ("1", "123 Education Street", "New York", "NY", "10001", 40.7128, -74.0060, "Downtown Manhattan location"),
        ("2", "456 Tech Avenue", "San Francisco", "CA", "94102", 37.7749, -122.4194, "Silicon Valley tech hub"),
        ("3", "789 Marketing Blvd", "Los Angeles", "CA", "90001", 34.0522, -118.2437, "LA creative district"),
        ("4", "321 Data Street", "Seattle", "WA", "98101", 47.6062, -122.3321, "Seattle tech corridor"),
        ("5", "567 Creative Lane", "Austin", "TX", "73301", 30.2672, -97.7431, "Austin creative hub"),
        ("6", "890 Science Park", "Boston", "MA", "02101", 42.3601, -71.0589, "Boston academic district"),
    ]
    .into_iter()
    .map(|(id, address, city, state, zip, latitude, longitude, description)| Location {
        id: id.to_string(),
        address: address.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        zip_code: zip.to_string(),
        country: "USA".to_string(),
        coordinates: Coordinates { latitude, longitude },
        location_type: LocationType::TutorLocation,
        description: Some(description.to_string()),
        created_at: now,
        updated_at: now,
    })
    .collect()
}

struct UserSeed {
    id: &'static str,
    email: &'static str,
    name: &'static str,
    role: Role,
    avatar: &'static str,
    phone: &'static str,
    address: &'static str,
    city: &'static str,
    state: &'static str,
    zip: &'static str,
    subjects: &'static [&'static str],
    learning_style: &'static str,
    availability: &'static [&'static str],
}

const AVATAR_A: &str =
    "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150&h=150&fit=crop&crop=face";
const AVATAR_B: &str =
    "https://images.unsplash.com/photo-1494790108755-2616b612b47c?w=150&h=150&fit=crop&crop=face";
const AVATAR_C: &str =
    "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=150&h=150&fit=crop&crop=face";
const AVATAR_D: &str =
    "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=150&h=150&fit=crop&crop=face";

const USERS: &[UserSeed] = &[
    UserSeed {
        id: "1",
        email: "admin@wetute.com",
        name: "Administrator",
        role: Role::Admin,
        avatar: AVATAR_A,
        phone: "+1-555-0123",
        address: "123 Admin Street",
        city: "New York",
        state: "NY",
        zip: "10001",
        subjects: &["All"],
        learning_style: "Administrative",
        availability: &["24/7"],
    },
    UserSeed {
        id: "2",
        email: "sarah.johnson@example.com",
        name: "Dr. Sarah Johnson",
        role: Role::Tutor,
        avatar: AVATAR_B,
        phone: "+1-555-0124",
        address: "123 Education Street",
        city: "New York",
        state: "NY",
        zip: "10001",
        subjects: &["Mathematics", "Calculus", "Algebra"],
        learning_style: "Interactive",
        availability: &["Monday-Friday 9AM-6PM", "Saturday 10AM-2PM"],
    },
    UserSeed {
        id: "3",
        email: "mike.chen@example.com",
        name: "Mike Chen",
        role: Role::Tutor,
        avatar: AVATAR_C,
        phone: "+1-555-0125",
        address: "456 Tech Avenue",
        city: "San Francisco",
        state: "CA",
        zip: "94102",
        subjects: &["Programming", "Web Development", "Data Science"],
        learning_style: "Hands-on",
        availability: &["Monday-Friday 10AM-8PM", "Sunday 2PM-6PM"],
    },
    UserSeed {
        id: "4",
        email: "emma.wilson@example.com",
        name: "Emma Wilson",
        role: Role::Tutor,
        avatar: AVATAR_D,
        phone: "+1-555-0126",
        address: "789 Creative Lane",
        city: "Los Angeles",
        state: "CA",
        zip: "90001",
        subjects: &["Design", "UI/UX", "Graphic Design"],
        learning_style: "Creative",
        availability: &["Tuesday-Thursday 1PM-9PM", "Saturday 11AM-5PM"],
    },
    UserSeed {
        id: "5",
        email: "david.kumar@example.com",
        name: "Dr. David Kumar",
        role: Role::Tutor,
        avatar: AVATAR_A,
        phone: "+1-555-0127",
        address: "321 Data Street",
        city: "Seattle",
        state: "WA",
        zip: "98101",
        subjects: &["Data Science", "Machine Learning", "Statistics"],
        learning_style: "Analytical",
        availability: &["Monday-Wednesday 9AM-5PM", "Friday 2PM-8PM"],
    },
    UserSeed {
        id: "6",
        email: "lisa.garcia@example.com",
        name: "Lisa Garcia",
        role: Role::Tutor,
        avatar: AVATAR_B,
        phone: "+1-555-0128",
        address: "567 Creative Lane",
        city: "Austin",
        state: "TX",
        zip: "73301",
        subjects: &["Physics", "Chemistry", "Biology"],
        learning_style: "Experimental",
        availability: &["Monday-Friday 3PM-9PM", "Saturday 9AM-3PM"],
    },
    UserSeed {
        id: "7",
        email: "james.lee@example.com",
        name: "James Lee",
        role: Role::Tutor,
        avatar: AVATAR_C,
        phone: "+1-555-0129",
        address: "890 Science Park",
        city: "Boston",
        state: "MA",
        zip: "02101",
        subjects: &["English", "Literature", "Writing"],
        learning_style: "Discussion-based",
        availability: &["Tuesday-Thursday 4PM-10PM", "Sunday 1PM-7PM"],
    },
];

fn users(now: DateTime<Utc>) -> Vec<User> {
    USERS
        .iter()
        .map(|seed| User {
            id: seed.id.to_string(),
            email: seed.email.to_string(),
            name: seed.name.to_string(),
            role: seed.role,
            avatar: Some(seed.avatar.to_string()),
            phone: Some(seed.phone.to_string()),
            address: Some(seed.address.to_string()),
            city: Some(seed.city.to_string()),
            state: Some(seed.state.to_string()),
            zip_code: Some(seed.zip.to_string()),
            country: Some("USA".to_string()),
            preferences: Preferences {
                subjects: strings(seed.subjects),
                learning_style: seed.learning_style.to_string(),
                availability: strings(seed.availability),
            },
            created_at: now,
            updated_at: now,
        })
        .collect()
}

struct TutorSeed {
    title: &'static str,
    experience: &'static str,
    bio: &'static str,
    subjects: &'static [&'static str],
    hourly_rate: f64,
    education: &'static [&'static str],
    certifications: &'static [&'static str],
    languages: &'static [&'static str],
    teaching_style: &'static str,
    specializations: &'static [&'static str],
    rating: f64,
    total_students: u32,
    total_reviews: u32,
}

const TUTORS: &[TutorSeed] = &[
    TutorSeed {
        title: "Senior Mathematics Professor",
        experience: "15+ years",
        bio: "Dr. Sarah is a passionate mathematics educator with over 15 years of experience teaching at university level.",
        subjects: &["Mathematics", "Calculus", "Algebra", "Statistics"],
        hourly_rate: 85.0,
        education: &["PhD Mathematics - MIT", "MSc Mathematics - Stanford"],
        certifications: &["Certified Mathematics Teacher", "Advanced Calculus Instructor"],
        languages: &["English", "Spanish"],
        teaching_style: "Interactive and problem-solving focused",
        specializations: &["Calculus", "Linear Algebra", "Mathematical Modeling"],
        rating: 4.9,
        total_students: 234,
        total_reviews: 45,
    },
    TutorSeed {
        title: "Full-Stack Web Developer & Instructor",
        experience: "8+ years",
        bio: "Mike is a passionate web developer who loves teaching others the art of coding and building amazing web applications.",
        subjects: &["Programming", "Web Development", "JavaScript", "React", "Node.js"],
        hourly_rate: 75.0,
        education: &["BSc Computer Science - UC Berkeley", "MSc Software Engineering - Stanford"],
        certifications: &["AWS Certified Developer", "Google Cloud Professional"],
        languages: &["English", "Mandarin"],
        teaching_style: "Hands-on project-based learning",
        specializations: &["React Development", "Full-Stack Applications", "API Design"],
        rating: 4.8,
        total_students: 156,
        total_reviews: 32,
    },
    TutorSeed {
        title: "Creative Design Director",
        experience: "12+ years",
        bio: "Emma is a creative design professional with expertise in UI/UX, graphic design, and digital art.",
        subjects: &["Design", "UI/UX", "Graphic Design", "Digital Art"],
        hourly_rate: 70.0,
        education: &["BFA Design - Parsons School", "MFA Digital Arts - UCLA"],
        certifications: &["Adobe Certified Expert", "Google UX Design Certificate"],
        languages: &["English", "French"],
        teaching_style: "Creative exploration and portfolio building",
        specializations: &["User Interface Design", "Brand Identity", "Digital Illustration"],
        rating: 4.7,
        total_students: 89,
        total_reviews: 18,
    },
    TutorSeed {
        title: "Data Science & AI Specialist",
        experience: "10+ years",
        bio: "Dr. David is a data science expert with deep knowledge in machine learning, AI, and statistical analysis.",
        subjects: &["Data Science", "Machine Learning", "Statistics", "Python"],
        hourly_rate: 90.0,
        education: &["PhD Computer Science - MIT", "MSc Statistics - Harvard"],
        certifications: &["TensorFlow Developer", "AWS Machine Learning Specialist"],
        languages: &["English", "Hindi"],
        teaching_style: "Data-driven problem solving and real-world applications",
        specializations: &["Deep Learning", "Natural Language Processing", "Predictive Analytics"],
        rating: 4.9,
        total_students: 203,
        total_reviews: 41,
    },
    TutorSeed {
        title: "Science Education Specialist",
        experience: "7+ years",
        bio: "Lisa is a dedicated science educator who makes complex scientific concepts accessible and engaging.",
        subjects: &["Physics", "Chemistry", "Biology", "Environmental Science"],
        hourly_rate: 65.0,
        education: &["MSc Physics - University of Texas", "BSc Chemistry - Rice University"],
        certifications: &["Certified Science Teacher", "STEM Education Specialist"],
        languages: &["English", "Spanish"],
        teaching_style: "Experimental and inquiry-based learning",
        specializations: &["AP Physics", "Chemistry Lab", "Biology Research"],
        rating: 4.6,
        total_students: 127,
        total_reviews: 28,
    },
    TutorSeed {
        title: "English Literature & Writing Coach",
        experience: "9+ years",
        bio: "James is an experienced English educator who helps students develop strong writing and critical thinking skills.",
        subjects: &["English", "Literature", "Writing", "Creative Writing"],
        hourly_rate: 60.0,
        education: &["MA English Literature - Boston University", "BA Creative Writing - Emerson College"],
        certifications: &["Certified English Teacher", "Writing Workshop Leader"],
        languages: &["English", "Korean"],
        teaching_style: "Discussion-based and writing-focused approach",
        specializations: &["Essay Writing", "Creative Writing", "Literature Analysis"],
        rating: 4.8,
        total_students: 94,
        total_reviews: 22,
    },
];

/// Tutor `n` (1-based) belongs to user `n + 1`, lives at location `n` and
/// keeps the same availability as that user's preferences.
fn tutors(now: DateTime<Utc>) -> Vec<Tutor> {
    TUTORS
        .iter()
        .zip(&USERS[1..])
        .enumerate()
        .map(|(index, (seed, user))| {
            let n = index + 1;
            Tutor {
                id: n.to_string(),
                user_id: user.id.to_string(),
                title: seed.title.to_string(),
                experience: seed.experience.to_string(),
                bio: seed.bio.to_string(),
                subjects: strings(seed.subjects),
                hourly_rate: seed.hourly_rate,
                availability: strings(user.availability),
                education: strings(seed.education),
                certifications: strings(seed.certifications),
                languages: strings(seed.languages),
                teaching_style: seed.teaching_style.to_string(),
                specializations: strings(seed.specializations),
                rating: seed.rating,
                total_students: seed.total_students,
                total_reviews: seed.total_reviews,
                status: TutorStatus::Verified,
                location_id: n.to_string(),
                created_at: now,
                updated_at: now,
            }
        })
        .collect()
}

struct CourseSeed {
    title: &'static str,
    description: &'static str,
    instructor_id: &'static str,
    category_id: &'static str,
    level: CourseLevel,
    duration: u32,
    price: f64,
    original_price: f64,
    image: &'static str,
    topics: &'static [&'static str],
    requirements: &'static [&'static str],
    outcomes: &'static [&'static str],
    schedule: &'static str,
    format: CourseFormat,
    max_students: u32,
    current_students: u32,
    rating: f64,
    total_reviews: u32,
}

const COURSES: &[CourseSeed] = &[
    CourseSeed {
        title: "Complete Web Development Bootcamp",
        description: "Learn web development from scratch with this comprehensive bootcamp covering HTML, CSS, JavaScript, React, and Node.js.",
        instructor_id: "2",
        category_id: "1",
        level: CourseLevel::Beginner,
        duration: 52,
        price: 89.99,
        original_price: 199.99,
        image: "photo-1516321318423-f06f85e504b3",
        topics: &["HTML & CSS", "JavaScript", "React", "Node.js", "Database Design"],
        requirements: &["Basic computer skills", "No prior programming experience needed"],
        outcomes: &["Build full-stack web applications", "Deploy projects to the web", "Understand modern web development"],
        schedule: "Monday, Wednesday, Friday 6PM-8PM",
        format: CourseFormat::Hybrid,
        max_students: 50,
        current_students: 23,
        rating: 4.9,
        total_reviews: 12,
    },
    CourseSeed {
        title: "Advanced React & TypeScript Mastery",
        description: "Master React with TypeScript, advanced patterns, and state management for professional applications.",
        instructor_id: "2",
        category_id: "1",
        level: CourseLevel::Advanced,
        duration: 32,
        price: 129.99,
        original_price: 249.99,
        image: "photo-1633356122544-f134324a6cee",
        topics: &["React Hooks", "TypeScript", "Redux Toolkit", "Testing", "Performance Optimization"],
        requirements: &["Basic JavaScript knowledge", "Understanding of React fundamentals"],
        outcomes: &["Build scalable React applications", "Implement TypeScript effectively", "Master state management"],
        schedule: "Tuesday, Thursday 7PM-9PM",
        format: CourseFormat::Online,
        max_students: 30,
        current_students: 18,
        rating: 4.8,
        total_reviews: 8,
    },
    CourseSeed {
        title: "UI/UX Design Fundamentals",
        description: "Learn the principles of user interface and user experience design for the web with hands-on projects.",
        instructor_id: "3",
        // Listed under Web Development, so the Design category starts empty.
        category_id: "1",
        level: CourseLevel::Beginner,
        duration: 24,
        price: 79.99,
        original_price: 159.99,
        image: "photo-1561070791-2526d30994b5",
        topics: &["Design Principles", "User Research", "Wireframing", "Prototyping", "Usability Testing"],
        requirements: &["Basic computer skills", "Creative mindset"],
        outcomes: &["Create user-centered designs", "Build interactive prototypes", "Conduct usability studies"],
        schedule: "Wednesday, Saturday 2PM-4PM",
        format: CourseFormat::Hybrid,
        max_students: 25,
        current_students: 15,
        rating: 4.7,
        total_reviews: 6,
    },
    CourseSeed {
        title: "Data Science & Machine Learning",
        description: "Comprehensive introduction to data science, statistics, and machine learning algorithms.",
        instructor_id: "4",
        category_id: "4",
        level: CourseLevel::Intermediate,
        duration: 40,
        price: 149.99,
        original_price: 299.99,
        image: "photo-1551288049-bebda4e38f71",
        topics: &["Python Programming", "Statistics", "Machine Learning", "Deep Learning", "Data Visualization"],
        requirements: &["Basic Python knowledge", "Understanding of mathematics"],
        outcomes: &["Build ML models", "Analyze complex datasets", "Create data visualizations"],
        schedule: "Monday, Friday 6PM-8PM",
        format: CourseFormat::Online,
        max_students: 35,
        current_students: 28,
        rating: 4.9,
        total_reviews: 15,
    },
    CourseSeed {
        title: "Calculus for Beginners",
        description: "Master the fundamentals of calculus with clear explanations and practical applications.",
        instructor_id: "1",
        category_id: "3",
        level: CourseLevel::Beginner,
        duration: 36,
        price: 69.99,
        original_price: 139.99,
        image: "photo-1635070041078-e363dbe005cb",
        topics: &["Limits", "Derivatives", "Integration", "Applications", "Problem Solving"],
        requirements: &["Basic algebra knowledge", "Understanding of functions"],
        outcomes: &["Solve calculus problems", "Understand mathematical concepts", "Apply calculus to real-world scenarios"],
        schedule: "Tuesday, Thursday 5PM-7PM",
        format: CourseFormat::InPerson,
        max_students: 20,
        current_students: 12,
        rating: 4.8,
        total_reviews: 9,
    },
    CourseSeed {
        title: "Physics: Mechanics & Motion",
        description: "Explore the fundamental principles of physics through interactive experiments and problem-solving.",
        instructor_id: "5",
        category_id: "6",
        level: CourseLevel::Intermediate,
        duration: 28,
        price: 59.99,
        original_price: 119.99,
        image: "photo-1506905925346-21bda4d32df4",
        topics: &["Kinematics", "Dynamics", "Energy", "Momentum", "Circular Motion"],
        requirements: &["Basic mathematics", "Understanding of algebra"],
        outcomes: &["Solve physics problems", "Understand motion principles", "Apply physics concepts"],
        schedule: "Monday, Wednesday 4PM-6PM",
        format: CourseFormat::Hybrid,
        max_students: 18,
        current_students: 14,
        rating: 4.6,
        total_reviews: 7,
    },
    CourseSeed {
        title: "Creative Writing Workshop",
        description: "Develop your creative writing skills through guided exercises and peer feedback.",
        instructor_id: "6",
        category_id: "2",
        level: CourseLevel::Beginner,
        duration: 20,
        price: 49.99,
        original_price: 99.99,
        image: "photo-1455390582262-044cdead277a",
        topics: &["Story Structure", "Character Development", "Dialogue", "Setting", "Revision"],
        requirements: &["Basic writing skills", "Creative imagination"],
        outcomes: &["Write compelling stories", "Develop unique characters", "Master narrative techniques"],
        schedule: "Thursday, Sunday 3PM-5PM",
        format: CourseFormat::Online,
        max_students: 15,
        current_students: 10,
        rating: 4.7,
        total_reviews: 5,
    },
    CourseSeed {
        title: "Advanced JavaScript Patterns",
        description: "Deep dive into advanced JavaScript concepts, design patterns, and modern ES6+ features.",
        instructor_id: "2",
        category_id: "1",
        level: CourseLevel::Advanced,
        duration: 18,
        price: 89.99,
        original_price: 179.99,
        image: "photo-1579468118864-1b9ea3c0db4a",
        topics: &["ES6+ Features", "Design Patterns", "Async Programming", "Functional Programming", "Performance"],
        requirements: &["Solid JavaScript fundamentals", "Understanding of programming concepts"],
        outcomes: &["Write clean, maintainable code", "Implement design patterns", "Optimize JavaScript performance"],
        schedule: "Friday 6PM-9PM",
        format: CourseFormat::Online,
        max_students: 22,
        current_students: 16,
        rating: 4.9,
        total_reviews: 11,
    },
    CourseSeed {
        title: "Digital Marketing Mastery",
        description: "Learn modern digital marketing strategies including SEO, social media, and content marketing.",
        instructor_id: "3",
        category_id: "2",
        level: CourseLevel::Intermediate,
        duration: 30,
        price: 99.99,
        original_price: 199.99,
        image: "photo-1460925895917-afdab827c52f",
        topics: &["SEO", "Social Media Marketing", "Content Strategy", "Analytics", "Email Marketing"],
        requirements: &["Basic computer skills", "Understanding of business concepts"],
        outcomes: &["Create marketing campaigns", "Analyze marketing data", "Develop content strategies"],
        schedule: "Tuesday, Saturday 1PM-3PM",
        format: CourseFormat::Hybrid,
        max_students: 30,
        current_students: 25,
        rating: 4.8,
        total_reviews: 13,
    },
    CourseSeed {
        title: "Python for Data Analysis",
        description: "Learn Python programming specifically for data analysis and manipulation.",
        instructor_id: "4",
        category_id: "4",
        level: CourseLevel::Beginner,
        duration: 26,
        price: 79.99,
        original_price: 159.99,
        image: "photo-1526379095098-d400fd0bf935",
        topics: &["Python Basics", "Pandas", "NumPy", "Matplotlib", "Data Cleaning"],
        requirements: &["Basic computer skills", "No prior programming experience needed"],
        outcomes: &["Analyze datasets", "Create data visualizations", "Clean and process data"],
        schedule: "Wednesday, Friday 5PM-7PM",
        format: CourseFormat::Online,
        max_students: 28,
        current_students: 20,
        rating: 4.7,
        total_reviews: 8,
    },
    CourseSeed {
        title: "Algebra & Pre-Calculus",
        description: "Build a strong foundation in algebra and prepare for calculus with comprehensive problem-solving.",
        instructor_id: "1",
        category_id: "3",
        level: CourseLevel::Intermediate,
        duration: 34,
        price: 74.99,
        original_price: 149.99,
        image: "photo-1509228468518-180dd4864904",
        topics: &["Linear Algebra", "Quadratic Functions", "Trigonometry", "Complex Numbers", "Functions"],
        requirements: &["Basic algebra knowledge", "Understanding of mathematical concepts"],
        outcomes: &["Solve complex equations", "Understand function behavior", "Prepare for calculus"],
        schedule: "Monday, Thursday 6PM-8PM",
        format: CourseFormat::InPerson,
        max_students: 24,
        current_students: 17,
        rating: 4.8,
        total_reviews: 10,
    },
    CourseSeed {
        title: "Chemistry Fundamentals",
        description: "Explore the fascinating world of chemistry through experiments and theoretical understanding.",
        instructor_id: "5",
        category_id: "6",
        level: CourseLevel::Beginner,
        duration: 22,
        price: 54.99,
        original_price: 109.99,
        image: "photo-1532187863486-abf9dbad1b69",
        topics: &["Atomic Structure", "Chemical Bonding", "Reactions", "Stoichiometry", "Solutions"],
        requirements: &["Basic mathematics", "Understanding of scientific method"],
        outcomes: &["Understand chemical concepts", "Perform calculations", "Conduct experiments safely"],
        schedule: "Tuesday, Friday 4PM-6PM",
        format: CourseFormat::Hybrid,
        max_students: 16,
        current_students: 11,
        rating: 4.6,
        total_reviews: 6,
    },
];

fn courses(now: DateTime<Utc>) -> Vec<Course> {
    COURSES
        .iter()
        .enumerate()
        .map(|(index, seed)| {
            let n = index + 1;
            Course {
                id: n.to_string(),
                title: seed.title.to_string(),
                description: seed.description.to_string(),
                instructor_id: seed.instructor_id.to_string(),
                category_id: seed.category_id.to_string(),
                level: seed.level,
                duration: seed.duration,
                price: seed.price,
                original_price: seed.original_price,
                image: format!(
                    "https://images.unsplash.com/{}?w=400&h=250&fit=crop",
                    seed.image
                ),
                video_url: Some(format!("https://example.com/course-preview-{n}")),
                topics: strings(seed.topics),
                requirements: strings(seed.requirements),
                outcomes: strings(seed.outcomes),
                schedule: vec![seed.schedule.to_string()],
                format: seed.format,
                max_students: seed.max_students,
                current_students: seed.current_students,
                rating: seed.rating,
                total_reviews: seed.total_reviews,
                status: CourseStatus::Active,
                created_at: now,
                updated_at: now,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_store_has_the_demo_counts() {
        let store = EntityStore::seeded();
        assert_eq!(store.len::<Category>(), 6);
        assert_eq!(store.len::<Location>(), 6);
        assert_eq!(store.len::<User>(), 7);
        assert_eq!(store.len::<Tutor>(), 6);
        assert_eq!(store.len::<Course>(), 12);
    }

    #[test]
    fn every_seeded_reference_resolves() {
        let store = EntityStore::seeded();
        for tutor in store.all::<Tutor>() {
            assert!(store.get_user_by_id(&tutor.user_id).is_some());
            assert!(store.get_location_by_id(&tutor.location_id).is_some());
        }
        for course in store.all::<Course>() {
            assert!(store.get_tutor_by_id(&course.instructor_id).is_some());
            assert!(store.get_by_id::<Category>(&course.category_id).is_some());
        }
    }
}
