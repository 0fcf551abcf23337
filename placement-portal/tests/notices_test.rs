mod common;

use axum::http::{Method, StatusCode};
use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn test_student_marks_own_notification_read() {
    let app = TestApp::spawn().await;
    app.login("arjun.kumar@college.edu", "student").await;

    let res = app
        .post("/dashboard/student/notifications/notif_1/read", json!({}))
        .await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["id"], "notif_1");
    assert_eq!(res.body["read"], true);

    let feed = app.get("/dashboard/student/notifications").await;
    assert_eq!(feed.body["unread"], 0);
    assert_eq!(feed.body["notifications"][0]["read"], true);
}

#[tokio::test]
async fn test_student_cannot_touch_another_students_notification() {
    let app = TestApp::spawn().await;
    app.login("arjun.kumar@college.edu", "student").await;

    let res = app
        .post("/dashboard/student/notifications/notif_2/read", json!({}))
        .await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.body["error"], "Notification not found");

    let res = app
        .send(Method::DELETE, "/dashboard/student/notifications/notif_2", None)
        .await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);

    app.login("priya.singh@college.edu", "student").await;
    let feed = app.get("/dashboard/student/notifications").await;
    assert_eq!(feed.body["unread"], 1);
}

#[tokio::test]
async fn test_student_deletes_notification_once() {
    let app = TestApp::spawn().await;
    app.login("arjun.kumar@college.edu", "student").await;

    let res = app
        .send(Method::DELETE, "/dashboard/student/notifications/notif_1", None)
        .await;
    assert_eq!(res.status, StatusCode::NO_CONTENT);

    let feed = app.get("/dashboard/student/notifications").await;
    assert_eq!(feed.body["notifications"].as_array().unwrap().len(), 0);
    assert_eq!(feed.body["unread"], 0);

    let res = app
        .send(Method::DELETE, "/dashboard/student/notifications/notif_1", None)
        .await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_notification_actions_require_student_session() {
    let app = TestApp::spawn().await;

    let res = app
        .post("/dashboard/student/notifications/notif_1/read", json!({}))
        .await;
    assert_eq!(res.status, StatusCode::SEE_OTHER);
    assert_eq!(res.location(), Some("/"));

    app.login("admin@college.edu", "admin").await;
    let res = app
        .send(Method::DELETE, "/dashboard/student/notifications/notif_1", None)
        .await;
    assert_eq!(res.status, StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_admin_lists_seeded_announcements() {
    let app = TestApp::spawn().await;
    app.login("admin@college.edu", "admin").await;

    let res = app.get("/dashboard/admin/announcements").await;

    assert_eq!(res.status, StatusCode::OK);
    let list = res.body.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["id"], "1");
    assert_eq!(list[0]["type"], "important");
    assert_eq!(list[1]["type"], "deadline");
}

#[tokio::test]
async fn test_admin_publishes_announcement_at_front() {
    let app = TestApp::spawn().await;
    app.login("admin@college.edu", "admin").await;

    let res = app
        .post(
            "/dashboard/admin/announcements",
            json!({ "title": "Pre-placement talk", "message": "Hall B at 10am", "type": "general" }),
        )
        .await;

    assert_eq!(res.status, StatusCode::CREATED);
    let id = res.body["id"].as_str().unwrap().to_string();
    assert!(id.starts_with("announcement_"), "unexpected id {id}");
    assert_eq!(res.body["title"], "Pre-placement talk");
    assert!(res.body["date"].is_string());

    let list = app.get("/dashboard/admin/announcements").await;
    assert_eq!(list.body.as_array().unwrap().len(), 3);
    assert_eq!(list.body[0]["id"], id.as_str());
}

#[tokio::test]
async fn test_announcement_type_defaults_to_general() {
    let app = TestApp::spawn().await;
    app.login("admin@college.edu", "admin").await;

    let res = app
        .post(
            "/dashboard/admin/announcements",
            json!({ "title": "Reminder", "message": "Update your resume" }),
        )
        .await;

    assert_eq!(res.status, StatusCode::CREATED);
    assert_eq!(res.body["type"], "general");
}

#[tokio::test]
async fn test_announcement_without_title_is_rejected() {
    let app = TestApp::spawn().await;
    app.login("admin@college.edu", "admin").await;

    let res = app
        .post(
            "/dashboard/admin/announcements",
            json!({ "title": "", "message": "Body only" }),
        )
        .await;
    assert_eq!(res.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(res.body["error"], "Validation error");

    let res = app
        .post("/dashboard/admin/announcements", json!({ "title": "No body" }))
        .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);

    let list = app.get("/dashboard/admin/announcements").await;
    assert_eq!(list.body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_admin_deletes_announcement() {
    let app = TestApp::spawn().await;
    app.login("admin@college.edu", "admin").await;

    let res = app
        .send(Method::DELETE, "/dashboard/admin/announcements/1", None)
        .await;
    assert_eq!(res.status, StatusCode::NO_CONTENT);

    let list = app.get("/dashboard/admin/announcements").await;
    assert_eq!(list.body.as_array().unwrap().len(), 1);
    assert_eq!(list.body[0]["id"], "2");

    let res = app
        .send(Method::DELETE, "/dashboard/admin/announcements/1", None)
        .await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.body["error"], "Announcement not found");
}

#[tokio::test]
async fn test_announcements_are_admin_only() {
    let app = TestApp::spawn().await;
    app.login("arjun.kumar@college.edu", "student").await;

    let res = app.get("/dashboard/admin/announcements").await;
    assert_eq!(res.status, StatusCode::SEE_OTHER);
    assert_eq!(res.location(), Some("/"));

    let res = app
        .post(
            "/dashboard/admin/announcements",
            json!({ "title": "Spoof", "message": "Should not land" }),
        )
        .await;
    assert_eq!(res.status, StatusCode::SEE_OTHER);

    app.login("admin@college.edu", "admin").await;
    let list = app.get("/dashboard/admin/announcements").await;
    assert_eq!(list.body.as_array().unwrap().len(), 2);
}
