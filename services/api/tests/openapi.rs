//! Checks on the generated OpenAPI document.

use api_lib::web::rest::ApiDoc;
use utoipa::OpenApi;

fn document() -> serde_json::Value {
    let json = ApiDoc::openapi().to_pretty_json().unwrap();
    serde_json::from_str(&json).unwrap()
}

#[test]
fn every_router_path_is_documented() {
    let doc = document();
    let paths = doc["paths"].as_object().unwrap();

    for path in [
        "/api/health",
        "/api/locations",
        "/api/courses/{id}",
        "/api/cart/{id}",
        "/api/admin/courses",
        "/api/admin/courses/{id}",
        "/auth/session",
    ] {
        assert!(paths.contains_key(path), "{path} missing");
    }
}

#[test]
fn admin_course_writes_declare_a_json_body() {
    let doc = document();
    let create = &doc["paths"]["/api/admin/courses"]["post"]["requestBody"];
    let update = &doc["paths"]["/api/admin/courses/{id}"]["put"]["requestBody"];

    for body in [create, update] {
        assert!(body["content"]["application/json"].is_object(), "{body}");
    }
}
