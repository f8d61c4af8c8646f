pub mod analytics;
pub mod auth;
pub mod catalog;
pub mod distance;
pub mod domain;
pub mod enrich;
pub mod filter;
pub mod matching;
pub mod patch;
pub mod ports;
pub mod search;
pub mod seed;
pub mod store;

pub use analytics::{CategoryCount, PlatformAnalytics};
pub use auth::{AuthSession, AuthUser, AuthView, KeyValueStore, MemoryKeyValueStore};
pub use distance::{DistanceEstimator, DistanceMode, HaversineDistance, Place, SyntheticDistance};
pub use domain::{
    CartItem, Category, Course, CourseFormat, CourseLevel, CourseStatus, Enrollment,
    EnrollmentStatus, Location, Role, Tutor, User,
};
pub use enrich::{CourseDetail, EnrichedCourse, JoinIndex, TutorWithLocation};
pub use matching::{find_nearby, NearbyUser, Viewer};
pub use ports::{PortError, PortResult, TextToSpeechService};
pub use search::{AdminCourseCriteria, CourseCriteria, Criteria, NearbyCriteria, Selection};
pub use store::{Entity, EntityKind, EntityStore};
