//! crates/edubloom_core/src/domain.rs
//!
//! Defines the core records of the marketplace: users, tutors, courses,
//! locations, categories, enrollments and cart items, together with the
//! drafts used to create them.
//!
//! Field names serialize camelCase and enum values serialize to the exact
//! strings the front-end uses (`"In-Person"`, `"tutor_location"`, ...).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

//=========================================================================================
// Enumerations
//=========================================================================================

/// Returned when a string does not name a variant of one of the domain enums.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} value: '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// Implements `Display` and `FromStr` over the exact wire strings of an enum.
macro_rules! wire_enum {
    ($ty:ident, $kind:literal, { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $ty {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok(Self::$variant),)+
                    other => Err(UnknownVariant {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Tutor,
    Admin,
}
wire_enum!(Role, "role", { Student => "student", Tutor => "tutor", Admin => "admin" });

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TutorStatus {
    Active,
    Inactive,
    Verified,
}
wire_enum!(TutorStatus, "tutor status", {
    Active => "active",
    Inactive => "inactive",
    Verified => "verified",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourseLevel {
    Beginner,
    Intermediate,
    Advanced,
}
wire_enum!(CourseLevel, "course level", {
    Beginner => "Beginner",
    Intermediate => "Intermediate",
    Advanced => "Advanced",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourseFormat {
    Online,
    #[serde(rename = "In-Person")]
    InPerson,
    Hybrid,
}
wire_enum!(CourseFormat, "course format", {
    Online => "Online",
    InPerson => "In-Person",
    Hybrid => "Hybrid",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseStatus {
    Active,
    Draft,
    Archived,
}
wire_enum!(CourseStatus, "course status", {
    Active => "active",
    Draft => "draft",
    Archived => "archived",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationType {
    TutorLocation,
    CourseLocation,
    MeetingPoint,
}
wire_enum!(LocationType, "location type", {
    TutorLocation => "tutor_location",
    CourseLocation => "course_location",
    MeetingPoint => "meeting_point",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnrollmentStatus {
    Pending,
    Active,
    Completed,
    Cancelled,
}
wire_enum!(EnrollmentStatus, "enrollment status", {
    Pending => "pending",
    Active => "active",
    Completed => "completed",
    Cancelled => "cancelled",
});

//=========================================================================================
// Records
//=========================================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub subjects: Vec<String>,
    pub learning_style: String,
    pub availability: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub avatar: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
    pub preferences: Preferences,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A tutor profile. `user_id` and `location_id` are lookup-only references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tutor {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub experience: String,
    pub bio: String,
    pub subjects: Vec<String>,
    pub hourly_rate: f64,
    pub availability: Vec<String>,
    pub education: Vec<String>,
    pub certifications: Vec<String>,
    pub languages: Vec<String>,
    pub teaching_style: String,
    pub specializations: Vec<String>,
    pub rating: f64,
    pub total_students: u32,
    pub total_reviews: u32,
    pub status: TutorStatus,
    pub location_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A course listing. `instructor_id` points at a [`Tutor`], `category_id` at a [`Category`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub instructor_id: String,
    pub category_id: String,
    pub level: CourseLevel,
    /// Length of the course in hours.
    pub duration: u32,
    pub price: f64,
    pub original_price: f64,
    pub image: String,
    pub video_url: Option<String>,
    pub topics: Vec<String>,
    pub requirements: Vec<String>,
    pub outcomes: Vec<String>,
    pub schedule: Vec<String>,
    pub format: CourseFormat,
    pub max_students: u32,
    pub current_students: u32,
    pub rating: f64,
    pub total_reviews: u32,
    pub status: CourseStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub coordinates: Coordinates,
    #[serde(rename = "type")]
    pub location_type: LocationType,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub color: String,
    pub parent_id: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub id: String,
    pub user_id: String,
    pub course_id: String,
    pub status: EnrollmentStatus,
    pub enrolled_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    /// Completion percentage, 0 to 100.
    pub progress: u8,
    pub certificate_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: String,
    pub user_id: String,
    pub course_id: String,
    pub added_at: DateTime<Utc>,
}

//=========================================================================================
// Drafts (records before an id and timestamps are assigned)
//=========================================================================================

/// Turns a draft into a full record stamped at `now`. The id is left empty
/// for the store to assign.
pub trait Draft {
    type Record;

    fn into_record(self, now: DateTime<Utc>) -> Self::Record;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub role: Role,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip_code: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub preferences: Preferences,
}

impl Draft for NewUser {
    type Record = User;

    fn into_record(self, now: DateTime<Utc>) -> User {
        User {
            id: String::new(),
            email: self.email,
            name: self.name,
            role: self.role,
            avatar: self.avatar,
            phone: self.phone,
            address: self.address,
            city: self.city,
            state: self.state,
            zip_code: self.zip_code,
            country: self.country,
            preferences: self.preferences,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTutor {
    pub user_id: String,
    pub title: String,
    pub experience: String,
    pub bio: String,
    pub subjects: Vec<String>,
    pub hourly_rate: f64,
    pub availability: Vec<String>,
    pub education: Vec<String>,
    pub certifications: Vec<String>,
    pub languages: Vec<String>,
    pub teaching_style: String,
    pub specializations: Vec<String>,
    pub rating: f64,
    pub total_students: u32,
    pub total_reviews: u32,
    pub status: TutorStatus,
    pub location_id: String,
}

impl Draft for NewTutor {
    type Record = Tutor;

    fn into_record(self, now: DateTime<Utc>) -> Tutor {
        Tutor {
            id: String::new(),
            user_id: self.user_id,
            title: self.title,
            experience: self.experience,
            bio: self.bio,
            subjects: self.subjects,
            hourly_rate: self.hourly_rate,
            availability: self.availability,
            education: self.education,
            certifications: self.certifications,
            languages: self.languages,
            teaching_style: self.teaching_style,
            specializations: self.specializations,
            rating: self.rating,
            total_students: self.total_students,
            total_reviews: self.total_reviews,
            status: self.status,
            location_id: self.location_id,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCourse {
    pub title: String,
    pub description: String,
    pub instructor_id: String,
    pub category_id: String,
    pub level: CourseLevel,
    pub duration: u32,
    pub price: f64,
    pub original_price: f64,
    pub image: String,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub outcomes: Vec<String>,
    #[serde(default)]
    pub schedule: Vec<String>,
    pub format: CourseFormat,
    pub max_students: u32,
    #[serde(default)]
    pub current_students: u32,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub total_reviews: u32,
    pub status: CourseStatus,
}

impl Draft for NewCourse {
    type Record = Course;

    fn into_record(self, now: DateTime<Utc>) -> Course {
        Course {
            id: String::new(),
            title: self.title,
            description: self.description,
            instructor_id: self.instructor_id,
            category_id: self.category_id,
            level: self.level,
            duration: self.duration,
            price: self.price,
            original_price: self.original_price,
            image: self.image,
            video_url: self.video_url,
            topics: self.topics,
            requirements: self.requirements,
            outcomes: self.outcomes,
            schedule: self.schedule,
            format: self.format,
            max_students: self.max_students,
            current_students: self.current_students,
            rating: self.rating,
            total_reviews: self.total_reviews,
            status: self.status,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLocation {
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub coordinates: Coordinates,
    #[serde(rename = "type")]
    pub location_type: LocationType,
    #[serde(default)]
    pub description: Option<String>,
}

impl Draft for NewLocation {
    type Record = Location;

    fn into_record(self, now: DateTime<Utc>) -> Location {
        Location {
            id: String::new(),
            address: self.address,
            city: self.city,
            state: self.state,
            zip_code: self.zip_code,
            country: self.country,
            coordinates: self.coordinates,
            location_type: self.location_type,
            description: self.description,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub name: String,
    pub description: String,
    pub icon: String,
    pub color: String,
    #[serde(default)]
    pub parent_id: Option<String>,
    pub is_active: bool,
}

impl Draft for NewCategory {
    type Record = Category;

    fn into_record(self, now: DateTime<Utc>) -> Category {
        Category {
            id: String::new(),
            name: self.name,
            description: self.description,
            icon: self.icon,
            color: self.color,
            parent_id: self.parent_id,
            is_active: self.is_active,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enums_use_the_exact_wire_strings() {
        assert_eq!(
            serde_json::to_string(&CourseFormat::InPerson).unwrap(),
            "\"In-Person\""
        );
        assert_eq!(
            serde_json::to_string(&LocationType::MeetingPoint).unwrap(),
            "\"meeting_point\""
        );
        assert_eq!("Beginner".parse::<CourseLevel>(), Ok(CourseLevel::Beginner));
        assert!("beginner".parse::<CourseLevel>().is_err());
    }

    #[test]
    fn location_type_field_is_named_type() {
        let location = NewLocation {
            address: "1 Main St".to_string(),
            city: "Austin".to_string(),
            state: "TX".to_string(),
            zip_code: "73301".to_string(),
            country: "USA".to_string(),
            coordinates: Coordinates {
                latitude: 30.2672,
                longitude: -97.7431,
            },
            location_type: LocationType::CourseLocation,
            description: None,
        }
        .into_record(Utc::now());

        let json = serde_json::to_value(&location).unwrap();
        assert_eq!(json["type"], "course_location");
        assert_eq!(json["zipCode"], "73301");
    }
}
