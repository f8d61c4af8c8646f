//! crates/edubloom_core/src/matching.rs
//!
//! Who the location page shows to whom: students see tutors, tutors see
//! students, admins see nobody.

use serde::Serialize;

use crate::distance::{DistanceEstimator, Place};
use crate::domain::{Role, Tutor, User};
use crate::enrich::JoinIndex;
use crate::filter::UserFilter;
use crate::store::EntityStore;

/// Assumed when the viewer or a student has no city on file.
pub const DEFAULT_CITY: &str = "New York";
/// Assumed when the viewer or a student has no state on file.
pub const DEFAULT_STATE: &str = "NY";
/// Shown for a student's missing city or state.
pub const UNKNOWN: &str = "Unknown";

/// One card on the nearby page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyUser {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub avatar: Option<String>,
    pub city: String,
    pub state: String,
    pub distance: f64,
    pub rating: Option<f64>,
    pub subjects: Vec<String>,
    pub hourly_rate: Option<f64>,
    pub experience: Option<String>,
    pub bio: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// The person looking at the page.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewer {
    pub role: Role,
    pub city: Option<String>,
    pub state: Option<String>,
}

impl Viewer {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            city: None,
            state: None,
        }
    }

    /// Uses the stored user's role, city and state.
    pub fn from_user(user: &User) -> Self {
        Self {
            role: user.role,
            city: user.city.clone(),
            state: user.state.clone(),
        }
    }

    fn place(&self, store: &EntityStore) -> Place {
        let city = self.city.as_deref().unwrap_or(DEFAULT_CITY);
        let state = self.state.as_deref().unwrap_or(DEFAULT_STATE);
        Place::resolve(store, city, state)
    }
}

/// Candidates for `viewer`, in store order, each with a distance from the viewer.
pub fn find_nearby(
    store: &EntityStore,
    viewer: &Viewer,
    estimator: &mut dyn DistanceEstimator,
) -> Vec<NearbyUser> {
    let origin = viewer.place(store);
    match viewer.role {
        Role::Student => nearby_tutors(store, &origin, estimator),
        Role::Tutor => nearby_students(store, &origin, estimator),
        Role::Admin => Vec::new(),
    }
}

fn nearby_tutors(
    store: &EntityStore,
    origin: &Place,
    estimator: &mut dyn DistanceEstimator,
) -> Vec<NearbyUser> {
    let index = JoinIndex::build(store);
    store
        .all::<Tutor>()
        .iter()
        .filter_map(|tutor| {
            // A tutor without a resolvable user or location is left out.
            let user = index.user(&tutor.user_id)?;
            let location = index.location(&tutor.location_id)?;
            let distance = estimator.estimate(origin, &Place::from_location(location));

            Some(NearbyUser {
                id: tutor.id.clone(),
                name: user.name.clone(),
                role: Role::Tutor,
                avatar: user.avatar.clone(),
                city: location.city.clone(),
                state: location.state.clone(),
                distance,
                rating: Some(tutor.rating),
                subjects: tutor.subjects.clone(),
                hourly_rate: Some(tutor.hourly_rate),
                experience: Some(tutor.experience.clone()),
                bio: Some(tutor.bio.clone()),
                phone: user.phone.clone(),
                email: Some(user.email.clone()),
            })
        })
        .collect()
}

fn nearby_students(
    store: &EntityStore,
    origin: &Place,
    estimator: &mut dyn DistanceEstimator,
) -> Vec<NearbyUser> {
    store
        .get_users(&UserFilter::new().role(Role::Student))
        .into_iter()
        .map(|student| {
            let place = Place::resolve(
                store,
                student.city.as_deref().unwrap_or(DEFAULT_CITY),
                student.state.as_deref().unwrap_or(DEFAULT_STATE),
            );
            let distance = estimator.estimate(origin, &place);

            NearbyUser {
                id: student.id,
                name: student.name,
                role: Role::Student,
                avatar: student.avatar,
                city: student.city.unwrap_or_else(|| UNKNOWN.to_string()),
                state: student.state.unwrap_or_else(|| UNKNOWN.to_string()),
                distance,
                rating: None,
                subjects: student.preferences.subjects,
                hourly_rate: None,
                experience: None,
                bio: None,
                phone: student.phone,
                email: Some(student.email),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::HaversineDistance;
    use crate::domain::{NewUser, Preferences};

    fn student(store: &mut EntityStore, name: &str, city: Option<&str>, state: Option<&str>) -> User {
        store.create_user(NewUser {
            email: format!("{}@example.com", name.to_lowercase()),
            name: name.to_string(),
            role: Role::Student,
            avatar: None,
            phone: None,
            address: None,
            city: city.map(str::to_string),
            state: state.map(str::to_string),
            zip_code: None,
            country: None,
            preferences: Preferences {
                subjects: vec!["Mathematics".to_string()],
                learning_style: "visual".to_string(),
                availability: Vec::new(),
            },
        })
    }

    #[test]
    fn students_see_every_complete_tutor() {
        let store = EntityStore::seeded();
        let viewer = Viewer::new(Role::Student);
        let found = find_nearby(&store, &viewer, &mut HaversineDistance);

        assert_eq!(found.len(), 6);
        assert!(found.iter().all(|u| u.role == Role::Tutor));
        // Tutor 1 teaches at the New York location, the default viewer city.
        assert_eq!(found[0].name, "Dr. Sarah Johnson");
        assert_eq!(found[0].distance, 0.0);
        assert!(found[1].distance > 2000.0);
    }

    #[test]
    fn tutors_with_dangling_users_are_dropped() {
        let mut store = EntityStore::seeded();
        store.delete_user("2");
        let found = find_nearby(&store, &Viewer::new(Role::Student), &mut HaversineDistance);
        assert_eq!(found.len(), 5);
        assert!(found.iter().all(|u| u.name != "Dr. Sarah Johnson"));
    }

    #[test]
    fn tutors_see_students_with_unknown_placeholders() {
        let mut store = EntityStore::seeded();
        let anna = student(&mut store, "Anna", Some("Boston"), Some("MA"));
        student(&mut store, "Ben", None, None);

        let viewer = Viewer {
            role: Role::Tutor,
            city: Some("Boston".to_string()),
            state: Some("MA".to_string()),
        };
        let found = find_nearby(&store, &viewer, &mut HaversineDistance);

        assert_eq!(found.len(), 2);
        assert_eq!(found[0].id, anna.id);
        assert_eq!(found[0].distance, 0.0);
        assert_eq!(found[0].subjects, ["Mathematics"]);
        assert_eq!(found[1].city, UNKNOWN);
        assert_eq!(found[1].state, UNKNOWN);
        // Ben is placed in New York for distance purposes.
        assert!((150.0..250.0).contains(&found[1].distance));
    }

    #[test]
    fn admins_see_nobody() {
        let store = EntityStore::seeded();
        let found = find_nearby(&store, &Viewer::new(Role::Admin), &mut HaversineDistance);
        assert!(found.is_empty());
    }
}
