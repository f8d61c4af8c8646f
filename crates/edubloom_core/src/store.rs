//! crates/edubloom_core/src/store.rs
//!
//! The in-memory Entity Store: one ordered sequence per entity kind.
//!
//! The store is a plain value. The application builds one at startup and
//! hands it to whoever needs it; tests build their own. References between
//! records (`instructor_id`, `location_id`, ...) are ids only: nothing
//! cascades and nothing checks that the target exists.

use chrono::Utc;
use rand::distr::Alphanumeric;
use rand::Rng;
use std::fmt;
use tracing::debug;

use crate::domain::{CartItem, Category, Course, Enrollment, Location, Tutor, User};
use crate::filter::{
    CartItemFilter, CategoryFilter, CourseFilter, EnrollmentFilter, Filter, LocationFilter,
    TutorFilter, UserFilter,
};
use crate::patch::{
    CartItemPatch, CategoryPatch, CoursePatch, EnrollmentPatch, LocationPatch, Patch, TutorPatch,
    UserPatch,
};

const ID_LEN: usize = 9;

/// The named record categories held by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Users,
    Courses,
    Tutors,
    Locations,
    Categories,
    Enrollments,
    Cart,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Users => "users",
            EntityKind::Courses => "courses",
            EntityKind::Tutors => "tutors",
            EntityKind::Locations => "locations",
            EntityKind::Categories => "categories",
            EntityKind::Enrollments => "enrollments",
            EntityKind::Cart => "cart",
        };
        f.write_str(name)
    }
}

/// A record type that lives in the [`EntityStore`].
pub trait Entity: Clone + Send + Sync + 'static {
    const KIND: EntityKind;
    type Filter: Filter<Self>;
    type Patch: Patch<Self>;

    fn id(&self) -> &str;
    fn assign_id(&mut self, id: String);

    #[doc(hidden)]
    fn table(store: &EntityStore) -> &Vec<Self>;
    #[doc(hidden)]
    fn table_mut(store: &mut EntityStore) -> &mut Vec<Self>;
}

macro_rules! entity {
    ($ty:ty, $kind:expr, $field:ident, $filter:ty, $patch:ty) => {
        impl Entity for $ty {
            const KIND: EntityKind = $kind;
            type Filter = $filter;
            type Patch = $patch;

            fn id(&self) -> &str {
                &self.id
            }

            fn assign_id(&mut self, id: String) {
                self.id = id;
            }

            fn table(store: &EntityStore) -> &Vec<Self> {
                &store.$field
            }

            fn table_mut(store: &mut EntityStore) -> &mut Vec<Self> {
                &mut store.$field
            }
        }
    };
}

entity!(User, EntityKind::Users, users, UserFilter, UserPatch);
entity!(Course, EntityKind::Courses, courses, CourseFilter, CoursePatch);
entity!(Tutor, EntityKind::Tutors, tutors, TutorFilter, TutorPatch);
entity!(Location, EntityKind::Locations, locations, LocationFilter, LocationPatch);
entity!(Category, EntityKind::Categories, categories, CategoryFilter, CategoryPatch);
entity!(Enrollment, EntityKind::Enrollments, enrollments, EnrollmentFilter, EnrollmentPatch);
entity!(CartItem, EntityKind::Cart, cart, CartItemFilter, CartItemPatch);

//=========================================================================================
// The Store
//=========================================================================================

#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    users: Vec<User>,
    courses: Vec<Course>,
    tutors: Vec<Tutor>,
    locations: Vec<Location>,
    categories: Vec<Category>,
    enrollments: Vec<Enrollment>,
    cart: Vec<CartItem>,
}

impl EntityStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `record` under a freshly generated id and returns the stored copy.
    ///
    /// Whatever id the record carried is overwritten. Collisions are not checked.
    pub fn insert<T: Entity>(&mut self, mut record: T) -> T {
        record.assign_id(generate_id());
        debug!(kind = %T::KIND, id = record.id(), "record inserted");
        T::table_mut(self).push(record.clone());
        record
    }

    /// Merges `patch` into the first record with the given id.
    ///
    /// Returns `None` when no record has that id.
    pub fn update<T: Entity>(&mut self, id: &str, patch: T::Patch) -> Option<T> {
        let record = T::table_mut(self).iter_mut().find(|r| r.id() == id)?;
        patch.apply_to(record, Utc::now());
        debug!(kind = %T::KIND, id, "record updated");
        Some(record.clone())
    }

    /// Removes the first record with the given id. Returns whether one was removed.
    pub fn delete<T: Entity>(&mut self, id: &str) -> bool {
        let table = T::table_mut(self);
        match table.iter().position(|r| r.id() == id) {
            Some(index) => {
                table.remove(index);
                debug!(kind = %T::KIND, id, "record deleted");
                true
            }
            None => false,
        }
    }

    /// Every record matching `filter`, in insertion order.
    ///
    /// A full linear scan; fine for the tens of records the store is meant for.
    pub fn query<T: Entity>(&self, filter: &T::Filter) -> Vec<T> {
        T::table(self)
            .iter()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect()
    }

    /// The first record with the given id. Uniqueness is a convention, not a guarantee.
    pub fn get_by_id<T: Entity>(&self, id: &str) -> Option<T> {
        let filter = <T::Filter as Filter<T>>::with_id(id);
        T::table(self).iter().find(|r| filter.matches(r)).cloned()
    }

    /// Borrowed view over every record of a kind, in insertion order.
    pub fn all<T: Entity>(&self) -> &[T] {
        T::table(self)
    }

    pub fn len<T: Entity>(&self) -> usize {
        T::table(self).len()
    }

    /// Appends records as-is, keeping their ids. Used for seeding.
    pub(crate) fn load<T: Entity>(&mut self, records: Vec<T>) {
        T::table_mut(self).extend(records);
    }
}

fn generate_id() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(ID_LEN)
        .map(|b| char::from(b).to_ascii_lowercase())
        .collect()
}
