//! HTTP API 端到端测试
//!
//! 用 tower::oneshot 直接驱动完整的 Router (含认证中间件)，覆盖
//! 预订 → 排队 → 取消 → 员工改状态 → 管理员清理 的全流程。

use axum::Router;
use axum::body::Body;
use booking_server::core::{Config, Server, ServerState};
use booking_server::auth::{JwtConfig, JwtService};
use booking_server::db::DbService;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

const BRANCH: i64 = 1;
const TABLE_TYPE: i64 = 10;

const CUSTOMER_A: i64 = 1001;
const CUSTOMER_B: i64 = 1002;
const EMPLOYEE: i64 = 2001;
const ADMIN: i64 = 3001;

struct TestApp {
    _dir: TempDir,
    router: Router,
    state: ServerState,
}

impl TestApp {
    async fn new() -> Self {
        let dir = TempDir::new().expect("temp dir");
        let db_path = dir.path().join("api.db");
        let db = DbService::new(&db_path.to_string_lossy())
            .await
            .expect("db init");

        let jwt_service = Arc::new(JwtService::with_config(JwtConfig {
            secret: "api-flow-test-secret-at-least-32-chars!!".to_string(),
            expiration_minutes: 60,
            issuer: "dineup-auth".to_string(),
            audience: "dineup-clients".to_string(),
        }));

        let config = Config::with_overrides(dir.path().to_string_lossy().to_string(), 0);
        let state = ServerState::new(config, db.pool, jwt_service);
        let router = Server::build_router(state.clone());

        Self {
            _dir: dir,
            router,
            state,
        }
    }

    async fn seed_catalog(&self, total_slots: i64) {
        let now = shared::util::now_millis();
        let pool = &self.state.pool;
        sqlx::query("INSERT INTO brand (id, name, logo_url, created_at) VALUES (1, 'DineUp', NULL, ?)")
            .bind(now)
            .execute(pool)
            .await
            .unwrap();
        sqlx::query(
            "INSERT INTO branch (id, brand_id, name, address, phone, image_url, created_at) \
             VALUES (?, 1, 'Central', NULL, NULL, NULL, ?)",
        )
        .bind(BRANCH)
        .bind(now)
        .execute(pool)
        .await
        .unwrap();
        sqlx::query(
            "INSERT INTO table_type (id, name, min_capacity, max_capacity, min_spend, created_at) \
             VALUES (?, 'Booth', 2, 8, 0, ?)",
        )
        .bind(TABLE_TYPE)
        .bind(now)
        .execute(pool)
        .await
        .unwrap();
        sqlx::query(
            "INSERT INTO branch_table_type (branch_id, type_id, total_slots) VALUES (?, ?, ?)",
        )
        .bind(BRANCH)
        .bind(TABLE_TYPE)
        .bind(total_slots)
        .execute(pool)
        .await
        .unwrap();
    }

    async fn assign_employee(&self, user_id: i64, branch_id: i64) {
        sqlx::query("INSERT INTO employee_branch (user_id, branch_id) VALUES (?, ?)")
            .bind(user_id)
            .bind(branch_id)
            .execute(&self.state.pool)
            .await
            .unwrap();
    }

    fn token(&self, user_id: i64, role: &str) -> String {
        self.state
            .jwt_service
            .generate_token(user_id, &format!("user{user_id}"), role)
            .expect("token generation")
    }

    async fn send(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(json_body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json_body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router call");
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }
}

fn booking_body(time: &str) -> Value {
    json!({
        "branch_id": BRANCH,
        "type_id": TABLE_TYPE,
        "date": "2024-01-01",
        "time": time,
        "duration": 120,
        "guest_count": 4
    })
}

#[tokio::test]
async fn healthz_is_public() {
    let app = TestApp::new().await;
    let (status, body) = app.send("GET", "/healthz", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn booking_requires_authentication() {
    let app = TestApp::new().await;
    app.seed_catalog(1).await;

    let (status, _) = app
        .send("POST", "/api/appointments", None, Some(booking_body("18:00")))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app
        .send(
            "POST",
            "/api/appointments",
            Some("not.a.token"),
            Some(booking_body("18:00")),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn catalog_is_public() {
    let app = TestApp::new().await;
    app.seed_catalog(2).await;

    let (status, body) = app.send("GET", "/api/catalog/branches", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["branches"][0]["name"], "Central");
    assert_eq!(body["branches"][0]["brand_name"], "DineUp");

    let (status, body) = app
        .send(
            "GET",
            &format!("/api/availability/remaining?branch_id={BRANCH}&type_id={TABLE_TYPE}&date=2024-01-01&time=18:00&duration=120"),
            None,
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);
    assert_eq!(body["booked"], 0);
    assert_eq!(body["remaining"], 2);
}

#[tokio::test]
async fn full_booking_queue_and_cancel_flow() {
    let app = TestApp::new().await;
    app.seed_catalog(1).await;

    let token_a = app.token(CUSTOMER_A, "customer");
    let token_b = app.token(CUSTOMER_B, "customer");

    // First party is seated immediately
    let (status, body) = app
        .send(
            "POST",
            "/api/appointments",
            Some(&token_a),
            Some(booking_body("18:00")),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["queue_no"].is_null());
    let first_id = body["appointment_id"].as_i64().unwrap();

    tokio::time::sleep(std::time::Duration::from_millis(5)).await;

    // Second overlapping party queues at position 1
    let (status, body) = app
        .send(
            "POST",
            "/api/appointments",
            Some(&token_b),
            Some(booking_body("18:30")),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["queue_no"], 1);

    // Listing reflects the queue; exact-slot queues_before is 0 because the
    // parties booked different times
    let (status, body) = app
        .send("GET", "/api/appointments/my", Some(&token_b), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["appointments"][0]["queue_no"], 1);
    assert_eq!(body["appointments"][0]["queues_before"], 0);

    // Owner cancels; a second cancel is a 404
    let (status, body) = app
        .send(
            "PATCH",
            &format!("/api/appointments/{first_id}/cancel"),
            Some(&token_a),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["canceled"], true);

    let (status, _) = app
        .send(
            "PATCH",
            &format!("/api/appointments/{first_id}/cancel"),
            Some(&token_a),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn booking_validation_errors_are_400() {
    let app = TestApp::new().await;
    app.seed_catalog(1).await;
    let token = app.token(CUSTOMER_A, "customer");

    // Missing guest_count
    let mut body = booking_body("18:00");
    body.as_object_mut().unwrap().remove("guest_count");
    let (status, _) = app
        .send("POST", "/api/appointments", Some(&token), Some(body))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Unknown branch is also a bad request (creation-time reference)
    let mut body = booking_body("18:00");
    body["branch_id"] = json!(999);
    let (status, _) = app
        .send("POST", "/api/appointments", Some(&token), Some(body))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Negative deposit
    let mut body = booking_body("18:00");
    body["deposit_amount"] = json!(-1.0);
    let (status, _) = app
        .send("POST", "/api/appointments", Some(&token), Some(body))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Nothing was inserted
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM appointment")
        .fetch_one(&app.state.pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn employee_status_change_is_branch_scoped() {
    let app = TestApp::new().await;
    app.seed_catalog(2).await;

    let customer = app.token(CUSTOMER_A, "customer");
    let employee = app.token(EMPLOYEE, "employee");

    let (_, body) = app
        .send(
            "POST",
            "/api/appointments",
            Some(&customer),
            Some(booking_body("18:00")),
        )
        .await;
    let id = body["appointment_id"].as_i64().unwrap();

    // Customers cannot reach the employee surface at all
    let (status, _) = app
        .send(
            "PATCH",
            &format!("/api/employee/appointments/{id}/status"),
            Some(&customer),
            Some(json!({"status": "confirmed"})),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Employee without a branch assignment is rejected
    let (status, _) = app
        .send(
            "PATCH",
            &format!("/api/employee/appointments/{id}/status"),
            Some(&employee),
            Some(json!({"status": "confirmed"})),
        )
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Assigned employee can move pending → confirmed
    app.assign_employee(EMPLOYEE, BRANCH).await;
    let (status, body) = app
        .send(
            "PATCH",
            &format!("/api/employee/appointments/{id}/status"),
            Some(&employee),
            Some(json!({"status": "confirmed"})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "confirmed");

    // Backward transition is a conflict
    let (status, _) = app
        .send(
            "PATCH",
            &format!("/api/employee/appointments/{id}/status"),
            Some(&employee),
            Some(json!({"status": "pending"})),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    // The staff queue listing shows the appointment
    let (status, body) = app
        .send(
            "GET",
            "/api/employee/appointments?status=confirmed",
            Some(&employee),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["appointments"][0]["id"].as_i64().unwrap(), id);
}

#[tokio::test]
async fn admin_surface_requires_admin_role() {
    let app = TestApp::new().await;
    app.seed_catalog(1).await;

    let customer = app.token(CUSTOMER_A, "customer");
    let admin = app.token(ADMIN, "admin");

    let (status, _) = app
        .send("GET", "/api/admin/appointments", Some(&customer), None)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Book then cancel so the purge has something to remove
    app.send(
        "POST",
        "/api/appointments",
        Some(&customer),
        Some(booking_body("18:00")),
    )
    .await;
    let (_, body) = app
        .send("GET", "/api/appointments/my", Some(&customer), None)
        .await;
    let id = body["appointments"][0]["id"].as_i64().unwrap();
    app.send(
        "PATCH",
        &format!("/api/appointments/{id}/cancel"),
        Some(&customer),
        None,
    )
    .await;

    let (status, body) = app
        .send(
            "DELETE",
            "/api/admin/appointments/purge?statuses=canceled",
            Some(&admin),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["removed"], 1);

    // Bogus status list is rejected
    let (status, _) = app
        .send(
            "DELETE",
            "/api/admin/appointments/purge?statuses=seated,unknown",
            Some(&admin),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Manual retention run: nothing qualifies (remaining rows are not
    // terminal or not past-dated)
    let (status, body) = app
        .send(
            "POST",
            "/api/admin/appointments/purge-daily-run",
            Some(&admin),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["removed"], 0);
}
