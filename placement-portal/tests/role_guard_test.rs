mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;

const AREAS: [(&str, &str); 3] = [
    ("student", "/dashboard/student"),
    ("recruiter", "/dashboard/recruiter"),
    ("admin", "/dashboard/admin"),
];

#[tokio::test]
async fn test_anonymous_visitor_is_redirected_from_every_area() {
    let app = TestApp::spawn().await;

    for (_, root) in AREAS {
        let res = app.get(root).await;
        assert_eq!(res.status, StatusCode::SEE_OTHER, "{root}");
        assert_eq!(res.location(), Some("/"));
    }
}

#[tokio::test]
async fn test_each_role_only_enters_its_own_area() {
    let app = TestApp::spawn().await;

    for (role, own_root) in AREAS {
        app.login(&format!("someone@{role}.test"), role).await;

        for (_, root) in AREAS {
            let res = app.get(root).await;
            if root == own_root {
                assert_eq!(res.status, StatusCode::OK, "{role} at {root}");
            } else {
                assert_eq!(res.status, StatusCode::SEE_OTHER, "{role} at {root}");
                assert_eq!(res.location(), Some("/"));
            }
        }
    }
}

#[tokio::test]
async fn test_admin_guard_redirects_student_and_admits_admin() {
    let app = TestApp::spawn().await;

    app.login("arjun.kumar@college.edu", "student").await;
    let res = app.get("/dashboard/admin/students").await;
    assert_eq!(res.status, StatusCode::SEE_OTHER);
    assert_eq!(res.location(), Some("/"));

    app.login("admin@college.edu", "admin").await;
    let res = app.get("/dashboard/admin/students").await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_logout_revokes_access_on_next_request() {
    let app = TestApp::spawn().await;
    app.login("john.smith@techcorp.com", "recruiter").await;
    assert_eq!(app.get("/dashboard/recruiter").await.status, StatusCode::OK);

    app.post("/auth/logout", json!({})).await;

    let res = app.get("/dashboard/recruiter/jobs").await;
    assert_eq!(res.status, StatusCode::SEE_OTHER);
    assert_eq!(res.location(), Some("/"));
}

#[tokio::test]
async fn test_areas_answer_unavailable_until_restored() {
    let app = TestApp::unrestored();

    let res = app.get("/dashboard/student").await;
    assert_eq!(res.status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(res.headers.contains_key("retry-after"));
    assert_eq!(res.body, serde_json::Value::Null);

    assert_eq!(app.get("/").await.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(app.get("/auth/me").await.status, StatusCode::SERVICE_UNAVAILABLE);

    app.state.session.restore().await;
    let res = app.get("/dashboard/student").await;
    assert_eq!(res.status, StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_entry_point_forwards_session_to_its_dashboard() {
    let app = TestApp::spawn().await;

    let landing = app.get("/").await;
    assert_eq!(landing.status, StatusCode::OK);
    assert_eq!(landing.body["roles"], json!(["student", "recruiter", "admin"]));
    assert_eq!(
        landing.body["demo_accounts"][0]["email"],
        "arjun.kumar@college.edu"
    );

    app.login("sarah.johnson@innovate.com", "recruiter").await;
    let res = app.get("/").await;
    assert_eq!(res.status, StatusCode::SEE_OTHER);
    assert_eq!(res.location(), Some("/dashboard/recruiter"));
}
