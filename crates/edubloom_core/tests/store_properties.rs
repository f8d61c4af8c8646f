//! Behavioural properties of the store, the enrichment layer and the search filters,
//! exercised against the seeded demo data.

use edubloom_core::domain::{CourseStatus, NewCourse};
use edubloom_core::enrich::{enrich_courses, JoinIndex, PLACEHOLDER, PLACEHOLDER_AVATAR};
use edubloom_core::filter::CourseFilter;
use edubloom_core::patch::CoursePatch;
use edubloom_core::search::{CourseCriteria, Criteria, NearbyCriteria, Selection};
use edubloom_core::{Course, CourseFormat, CourseLevel, EntityStore, NearbyUser, Role};

fn draft() -> NewCourse {
    NewCourse {
        title: "Rust for Web Developers".to_string(),
        description: "Ownership, traits and async, from a JavaScript background.".to_string(),
        instructor_id: "2".to_string(),
        category_id: "1".to_string(),
        level: CourseLevel::Intermediate,
        duration: 20,
        price: 59.99,
        original_price: 119.99,
        image: "https://example.com/rust.png".to_string(),
        video_url: None,
        topics: vec!["Ownership".to_string(), "Traits".to_string()],
        requirements: Vec::new(),
        outcomes: Vec::new(),
        schedule: vec!["Saturday 10AM-12PM".to_string()],
        format: CourseFormat::Online,
        max_students: 30,
        current_students: 0,
        rating: 0.0,
        total_reviews: 0,
        status: CourseStatus::Active,
    }
}

// ---------------------------------------------------------------------------
// Query / mutation
// ---------------------------------------------------------------------------

#[test]
fn category_query_returns_the_four_web_courses_in_order() {
    let store = EntityStore::seeded();
    let ids: Vec<_> = store
        .get_courses(&CourseFilter::new().category_id("1"))
        .into_iter()
        .map(|c| c.id)
        .collect();

    assert_eq!(ids, ["1", "2", "3", "8"]);
}

#[test]
fn level_filter_is_exact() {
    let store = EntityStore::seeded();
    let beginner = store.get_courses(&CourseFilter::new().level(CourseLevel::Beginner));

    assert!(!beginner.is_empty());
    assert!(beginner.iter().all(|c| c.level == CourseLevel::Beginner));
    let expected = store
        .all::<Course>()
        .iter()
        .filter(|c| c.level == CourseLevel::Beginner)
        .count();
    assert_eq!(beginner.len(), expected);

    // The wire value is case-sensitive, so "beginner" never becomes a filter.
    assert!("beginner".parse::<CourseLevel>().is_err());
}

#[test]
fn created_course_reads_back_equal() {
    let mut store = EntityStore::seeded();
    let created = store.create_course(draft());
    let fetched = store.get_course_by_id(&created.id).unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched.title, "Rust for Web Developers");
    assert_eq!(fetched.created_at, fetched.updated_at);
    assert_eq!(store.len::<Course>(), 13);
}

#[test]
fn update_changes_only_the_named_field() {
    let mut store = EntityStore::seeded();
    let before = store.get_course_by_id("4").unwrap();
    let after = store
        .update_course(
            "4",
            CoursePatch {
                price: Some(10.0),
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(after.price, 10.0);
    assert!(after.updated_at >= before.updated_at);
    let restored = Course {
        price: before.price,
        updated_at: before.updated_at,
        ..after
    };
    assert_eq!(restored, before);
}

#[test]
fn deleting_twice_reports_not_found_the_second_time() {
    let mut store = EntityStore::seeded();

    assert!(store.delete_course("5"));
    assert_eq!(store.len::<Course>(), 11);
    assert!(!store.delete_course("5"));
    assert_eq!(store.len::<Course>(), 11);
    assert!(store.get_course_by_id("5").is_none());
}

#[test]
fn missing_targets_are_sentinels() {
    let mut store = EntityStore::seeded();
    assert!(store.get_course_by_id("nope").is_none());
    assert!(store.update_course("nope", CoursePatch::default()).is_none());
    assert!(!store.remove_from_cart("nope"));
}

#[test]
fn cart_and_enrollment_flow() {
    let mut store = EntityStore::seeded();
    let item = store.add_to_cart("u1", "1");
    store.add_to_cart("u2", "2");
    store.add_to_cart("u1", "3");

    let mine: Vec<_> = store.get_cart("u1").into_iter().map(|i| i.course_id).collect();
    assert_eq!(mine, ["1", "3"]);

    assert!(store.remove_from_cart(&item.id));
    assert_eq!(store.get_cart("u1").len(), 1);

    let enrollment = store.enroll_user("u1", "3");
    assert_eq!(enrollment.progress, 0);
    assert_eq!(enrollment.status.as_str(), "active");
}

// ---------------------------------------------------------------------------
// Enrichment
// ---------------------------------------------------------------------------

#[test]
fn dangling_instructor_yields_placeholders() {
    let mut store = EntityStore::seeded();
    let mut orphan = draft();
    orphan.instructor_id = "no-such-tutor".to_string();
    let course = store.create_course(orphan);

    let enriched = JoinIndex::build(&store).enrich_course(&course);
    assert_eq!(enriched.instructor_name, PLACEHOLDER);
    assert_eq!(enriched.instructor_title, PLACEHOLDER);
    assert_eq!(enriched.instructor_avatar, PLACEHOLDER_AVATAR);
    assert_eq!(enriched.instructor_hourly_rate, None);
    assert_eq!(enriched.location_city, PLACEHOLDER);
    assert_eq!(enriched.category_name, "Web Development");
    assert_eq!(enriched.course, course);
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[test]
fn catalog_filters_combine_with_and() {
    let mut store = EntityStore::seeded();
    store.update_course(
        "2",
        CoursePatch {
            title: Some("Complete Web Development Bootcamp".to_string()),
            level: Some(CourseLevel::Advanced),
            ..Default::default()
        },
    );
    let catalog = enrich_courses(&store, store.all::<Course>());

    let criteria = CourseCriteria {
        search: "web".to_string(),
        category: Selection::Only("Web Development".to_string()),
        level: Selection::Only(CourseLevel::Beginner),
        format: Selection::All,
    };
    let ids: Vec<_> = criteria
        .apply(&catalog)
        .into_iter()
        .map(|c| c.course.id)
        .collect();
    assert!(ids.contains(&"1".to_string()));
    assert!(!ids.contains(&"2".to_string()));

    let single = |c: CourseCriteria| -> Vec<String> {
        c.apply(&catalog).into_iter().map(|e| e.course.id).collect()
    };
    let by_search = single(CourseCriteria {
        search: "web".to_string(),
        ..Default::default()
    });
    let by_category = single(CourseCriteria {
        category: Selection::Only("Web Development".to_string()),
        ..Default::default()
    });
    let by_level = single(CourseCriteria {
        level: Selection::Only(CourseLevel::Beginner),
        ..Default::default()
    });
    let intersection: Vec<_> = by_search
        .into_iter()
        .filter(|id| by_category.contains(id) && by_level.contains(id))
        .collect();
    assert_eq!(ids, intersection);
}

#[test]
fn distance_threshold_boundary() {
    let candidate = |distance: f64| NearbyUser {
        id: "t".to_string(),
        name: "Tutor".to_string(),
        role: Role::Tutor,
        avatar: None,
        city: "Austin".to_string(),
        state: "TX".to_string(),
        distance,
        rating: Some(4.5),
        subjects: Vec::new(),
        hourly_rate: Some(40.0),
        experience: None,
        bio: None,
        phone: None,
        email: None,
    };
    let criteria = NearbyCriteria {
        max_distance: 25.0,
        ..Default::default()
    };

    assert!(criteria.matches(&candidate(25.0)));
    assert!(!criteria.matches(&candidate(26.0)));
}
