//! crates/edubloom_core/src/catalog.rs
//!
//! The typed query and mutation surface used by every page and handler.
//!
//! These are thin wrappers over [`EntityStore`]: creation stamps timestamps
//! before delegating to `insert`, updates and deletes delegate directly, and
//! lookups are exact-match filters. Missing ids come back as `None` / `false`.

use chrono::Utc;

use crate::domain::{
    CartItem, Category, Course, Draft, Enrollment, EnrollmentStatus, Location, NewCourse,
    NewLocation, NewTutor, NewUser, Tutor, User,
};
use crate::filter::{CartItemFilter, CategoryFilter, CourseFilter, LocationFilter, TutorFilter, UserFilter};
use crate::patch::{CoursePatch, UserPatch};
use crate::store::{Entity, EntityStore};

impl EntityStore {
    //=====================================================================================
    // Generic operations
    //=====================================================================================

    /// Stamps `created_at`/`updated_at` on a draft and inserts it.
    pub fn create<D>(&mut self, draft: D) -> D::Record
    where
        D: Draft,
        D::Record: Entity,
    {
        self.insert(draft.into_record(Utc::now()))
    }

    //=====================================================================================
    // Users
    //=====================================================================================

    pub fn get_users(&self, filter: &UserFilter) -> Vec<User> {
        self.query(filter)
    }

    pub fn get_user_by_id(&self, id: &str) -> Option<User> {
        self.get_by_id(id)
    }

    pub fn create_user(&mut self, user: NewUser) -> User {
        self.create(user)
    }

    pub fn update_user(&mut self, id: &str, patch: UserPatch) -> Option<User> {
        self.update(id, patch)
    }

    pub fn delete_user(&mut self, id: &str) -> bool {
        self.delete::<User>(id)
    }

    //=====================================================================================
    // Courses
    //=====================================================================================

    pub fn get_courses(&self, filter: &CourseFilter) -> Vec<Course> {
        self.query(filter)
    }

    pub fn get_course_by_id(&self, id: &str) -> Option<Course> {
        self.get_by_id(id)
    }

    pub fn create_course(&mut self, course: NewCourse) -> Course {
        self.create(course)
    }

    pub fn update_course(&mut self, id: &str, patch: CoursePatch) -> Option<Course> {
        self.update(id, patch)
    }

    pub fn delete_course(&mut self, id: &str) -> bool {
        self.delete::<Course>(id)
    }

    //=====================================================================================
    // Tutors, locations and categories
    //=====================================================================================

    pub fn get_tutors(&self, filter: &TutorFilter) -> Vec<Tutor> {
        self.query(filter)
    }

    pub fn get_tutor_by_id(&self, id: &str) -> Option<Tutor> {
        self.get_by_id(id)
    }

    pub fn create_tutor(&mut self, tutor: NewTutor) -> Tutor {
        self.create(tutor)
    }

    pub fn get_locations(&self, filter: &LocationFilter) -> Vec<Location> {
        self.query(filter)
    }

    pub fn get_location_by_id(&self, id: &str) -> Option<Location> {
        self.get_by_id(id)
    }

    pub fn create_location(&mut self, location: NewLocation) -> Location {
        self.create(location)
    }

    pub fn get_categories(&self, filter: &CategoryFilter) -> Vec<Category> {
        self.query(filter)
    }

    //=====================================================================================
    // Enrollments and cart
    //=====================================================================================

    /// Enrolls a user: status `active`, progress 0, enrolled now.
    pub fn enroll_user(&mut self, user_id: &str, course_id: &str) -> Enrollment {
        self.insert(Enrollment {
            id: String::new(),
            user_id: user_id.to_string(),
            course_id: course_id.to_string(),
            status: EnrollmentStatus::Active,
            enrolled_at: Utc::now(),
            completed_at: None,
            progress: 0,
            certificate_url: None,
        })
    }

    pub fn add_to_cart(&mut self, user_id: &str, course_id: &str) -> CartItem {
        self.insert(CartItem {
            id: String::new(),
            user_id: user_id.to_string(),
            course_id: course_id.to_string(),
            added_at: Utc::now(),
        })
    }

    pub fn get_cart(&self, user_id: &str) -> Vec<CartItem> {
        self.query(&CartItemFilter::new().user_id(user_id))
    }

    pub fn remove_from_cart(&mut self, cart_item_id: &str) -> bool {
        self.delete::<CartItem>(cart_item_id)
    }
}
