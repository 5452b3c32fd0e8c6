// Copyright (C) 2026 Servis Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use servis::{BookingLifecycle, CoreError, StatusChange, Warning};
use servis_domain::{BookingDetail, BookingRequest, BookingStatus};
use servis_store::{Store, StoreError};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

mod catalog;
mod live;

use live::{LiveEvent, LiveEventBroadcaster, live_events_handler};

/// Servis Server - HTTP backend for the printer-repair admin dashboard
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    /// The store wrapped in a Mutex to allow safe concurrent access.
    store: Arc<Mutex<Store>>,
    /// The live change broadcaster for WebSocket clients.
    live: Arc<LiveEventBroadcaster>,
}

/// Request body for creating a booking.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct CreateBookingApiRequest {
    /// The customer's name.
    customer_name: String,
    /// The customer's phone number.
    phone: String,
    /// The customer's email (optional).
    #[serde(default)]
    email: String,
    /// The customer's address (optional).
    #[serde(default)]
    address: String,
    /// The printer brand name as selected on the form.
    #[serde(default)]
    printer_brand: String,
    /// The printer model name as selected on the form.
    #[serde(default)]
    printer_model: String,
    /// The problem category name as selected on the form.
    #[serde(default)]
    problem_category: String,
    /// Free-text problem description.
    #[serde(default)]
    problem_description: String,
    /// Appointment date (display text).
    #[serde(default)]
    appointment_date: String,
    /// Appointment time (display text).
    #[serde(default)]
    appointment_time: String,
    /// Free-text notes.
    #[serde(default)]
    notes: String,
}

impl From<CreateBookingApiRequest> for BookingRequest {
    fn from(req: CreateBookingApiRequest) -> Self {
        Self {
            customer_name: req.customer_name,
            phone: req.phone,
            email: req.email,
            address: req.address,
            printer_brand: req.printer_brand,
            printer_model: req.printer_model,
            problem_category: req.problem_category,
            problem_description: req.problem_description,
            appointment_date: req.appointment_date,
            appointment_time: req.appointment_time,
            notes: req.notes,
        }
    }
}

/// Request body for a status change.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct UpdateStatusRequest {
    /// The target status (e.g. "confirmed").
    status: String,
}

/// Request body for technician assignment.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct AssignTechnicianRequest {
    /// The technician row ID.
    technician_id: i64,
}

/// Request body for recording the actual cost.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct UpdateCostRequest {
    /// The actual cost (display text).
    actual_cost: String,
}

/// API response for booking creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CreateBookingResponse {
    /// Success indicator.
    success: bool,
    /// The generated booking identifier.
    booking_id: String,
    /// Non-fatal degradations collected during creation.
    warnings: Vec<Warning>,
}

/// API response for a status change.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct UpdateStatusResponse {
    /// Success indicator.
    success: bool,
    /// Whether the status actually changed (false on a no-op).
    changed: bool,
    /// Non-fatal degradations collected during the change.
    warnings: Vec<Warning>,
}

/// API response for technician assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct AssignTechnicianResponse {
    /// Success indicator.
    success: bool,
    /// The assigned technician's display name.
    technician: String,
    /// Non-fatal degradations collected during assignment.
    warnings: Vec<Warning>,
}

/// API response for generic write operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct WriteResponse {
    /// Success indicator.
    success: bool,
    /// Optional message.
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl WriteResponse {
    fn ok(message: &str) -> Self {
        Self {
            success: true,
            message: Some(message.to_string()),
        }
    }
}

/// API response for writes that create a row.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct IdResponse {
    /// Success indicator.
    success: bool,
    /// The created row ID.
    id: i64,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl HttpError {
    const fn bad_request(message: String) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::BookingNotFound(_) => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            CoreError::TransitionDenied { .. } | CoreError::DomainViolation(_) => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: err.to_string(),
            },
            CoreError::Store(_) => {
                error!(error = %err, "Store error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                }
            }
        }
    }
}

impl From<StoreError> for HttpError {
    fn from(err: StoreError) -> Self {
        error!(error = %err, "Store error");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("Store error: {err}"),
        }
    }
}

/// Handler for POST `/bookings`.
///
/// Creates a booking: upserts the customer, resolves catalog names,
/// estimates the cost, auto-assigns an available technician and
/// records the initial timeline entry.
async fn handle_create_booking(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateBookingApiRequest>,
) -> Result<Json<CreateBookingResponse>, HttpError> {
    info!(customer = %req.customer_name, "Handling create_booking request");

    let request: BookingRequest = req.into();
    let mut store = app_state.store.lock().await;
    let outcome = BookingLifecycle::new(&mut *store).create_booking(&request)?;
    drop(store);

    info!(booking_id = %outcome.value, "Successfully created booking");
    app_state
        .live
        .broadcast(&LiveEvent::changed("bookings", "created"));

    Ok(Json(CreateBookingResponse {
        success: true,
        booking_id: outcome.value,
        warnings: outcome.warnings,
    }))
}

/// Handler for GET `/bookings`.
///
/// Lists every booking with active catalog references, newest first.
async fn handle_list_bookings(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<BookingDetail>>, HttpError> {
    let mut store = app_state.store.lock().await;
    let bookings = BookingLifecycle::new(&mut *store).bookings()?;
    drop(store);

    Ok(Json(bookings))
}

/// Handler for GET `/bookings/{id}`.
///
/// Fetches one booking with all joins; the identifier is
/// case-insensitive.
async fn handle_get_booking(
    AxumState(app_state): AxumState<AppState>,
    Path(booking_id): Path<String>,
) -> Result<Json<BookingDetail>, HttpError> {
    let mut store = app_state.store.lock().await;
    let detail = BookingLifecycle::new(&mut *store).booking(&booking_id)?;
    drop(store);

    Ok(Json(detail))
}

/// Handler for POST `/bookings/{id}/status`.
async fn handle_update_status(
    AxumState(app_state): AxumState<AppState>,
    Path(booking_id): Path<String>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<Json<UpdateStatusResponse>, HttpError> {
    info!(booking_id = %booking_id, status = %req.status, "Handling update_status request");

    let status: BookingStatus = req
        .status
        .parse()
        .map_err(|_| HttpError::bad_request(format!("Invalid status: '{}'", req.status)))?;

    let mut store = app_state.store.lock().await;
    let outcome = BookingLifecycle::new(&mut *store).set_status(&booking_id, status)?;
    drop(store);

    let changed = outcome.value == StatusChange::Applied;
    if changed {
        app_state
            .live
            .broadcast(&LiveEvent::changed("bookings", "updated"));
    }

    Ok(Json(UpdateStatusResponse {
        success: true,
        changed,
        warnings: outcome.warnings,
    }))
}

/// Handler for POST `/bookings/{id}/technician`.
async fn handle_assign_technician(
    AxumState(app_state): AxumState<AppState>,
    Path(booking_id): Path<String>,
    Json(req): Json<AssignTechnicianRequest>,
) -> Result<Json<AssignTechnicianResponse>, HttpError> {
    info!(
        booking_id = %booking_id,
        technician_id = req.technician_id,
        "Handling assign_technician request"
    );

    let mut store = app_state.store.lock().await;
    let outcome =
        BookingLifecycle::new(&mut *store).assign_technician(&booking_id, req.technician_id)?;
    drop(store);

    app_state
        .live
        .broadcast(&LiveEvent::changed("bookings", "updated"));

    Ok(Json(AssignTechnicianResponse {
        success: true,
        technician: outcome.value,
        warnings: outcome.warnings,
    }))
}

/// Handler for POST `/bookings/{id}/cost`.
async fn handle_update_cost(
    AxumState(app_state): AxumState<AppState>,
    Path(booking_id): Path<String>,
    Json(req): Json<UpdateCostRequest>,
) -> Result<Json<WriteResponse>, HttpError> {
    info!(booking_id = %booking_id, "Handling update_cost request");

    let mut store = app_state.store.lock().await;
    BookingLifecycle::new(&mut *store).record_actual_cost(&booking_id, &req.actual_cost)?;
    drop(store);

    app_state
        .live
        .broadcast(&LiveEvent::changed("bookings", "updated"));

    Ok(Json(WriteResponse::ok("Actual cost recorded")))
}

/// Handler for DELETE `/bookings/{id}`.
///
/// Deletes the booking and its timeline.
async fn handle_delete_booking(
    AxumState(app_state): AxumState<AppState>,
    Path(booking_id): Path<String>,
) -> Result<Json<WriteResponse>, HttpError> {
    info!(booking_id = %booking_id, "Handling delete_booking request");

    let mut store = app_state.store.lock().await;
    BookingLifecycle::new(&mut *store).delete_booking(&booking_id)?;
    drop(store);

    app_state
        .live
        .broadcast(&LiveEvent::changed("bookings", "deleted"));

    Ok(Json(WriteResponse::ok("Booking deleted")))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/bookings",
            get(handle_list_bookings).post(handle_create_booking),
        )
        .route(
            "/bookings/{id}",
            get(handle_get_booking).delete(handle_delete_booking),
        )
        .route("/bookings/{id}/status", post(handle_update_status))
        .route("/bookings/{id}/technician", post(handle_assign_technician))
        .route("/bookings/{id}/cost", post(handle_update_cost))
        .route(
            "/brands",
            get(catalog::handle_list_brands).post(catalog::handle_add_brand),
        )
        .route(
            "/brands/{id}",
            axum::routing::put(catalog::handle_rename_brand).delete(catalog::handle_delete_brand),
        )
        .route("/models", post(catalog::handle_add_model))
        .route(
            "/models/{id}",
            axum::routing::put(catalog::handle_update_model).delete(catalog::handle_delete_model),
        )
        .route(
            "/categories",
            get(catalog::handle_list_categories).post(catalog::handle_add_category),
        )
        .route(
            "/categories/{id}",
            axum::routing::put(catalog::handle_update_category)
                .delete(catalog::handle_delete_category),
        )
        .route("/problems", post(catalog::handle_add_problem))
        .route(
            "/problems/{id}",
            axum::routing::put(catalog::handle_update_problem)
                .delete(catalog::handle_delete_problem),
        )
        .route(
            "/technicians",
            get(catalog::handle_list_technicians).post(catalog::handle_add_technician),
        )
        .route(
            "/technicians/{id}",
            axum::routing::put(catalog::handle_update_technician)
                .delete(catalog::handle_delete_technician),
        )
        .route(
            "/gallery",
            get(catalog::handle_list_gallery).post(catalog::handle_add_gallery_image),
        )
        .route(
            "/gallery/{id}",
            axum::routing::put(catalog::handle_update_gallery_image)
                .delete(catalog::handle_delete_gallery_image),
        )
        .route("/live", get(live_events_handler))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Servis Server");

    // Initialize the store (in-memory or file-based based on CLI argument)
    let store: Store = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Store::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Store::new_in_memory()?
    };

    let app_state: AppState = AppState {
        store: Arc::new(Mutex::new(store)),
        live: Arc::new(LiveEventBroadcaster::new()),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode as HttpStatusCode},
    };
    use tower::ServiceExt;

    /// Helper to create test app state with an in-memory store.
    fn create_test_app_state() -> AppState {
        let store: Store = Store::new_in_memory().expect("Failed to create in-memory store");
        AppState {
            store: Arc::new(Mutex::new(store)),
            live: Arc::new(LiveEventBroadcaster::new()),
        }
    }

    fn post_json<T: Serialize>(uri: &str, body: &T) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(body).unwrap()))
            .unwrap()
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn read_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body_bytes).unwrap()
    }

    /// Seeds a brand, category and technician over HTTP, returning
    /// the technician ID.
    async fn seed_catalog(app: &Router) -> i64 {
        let brand: IdResponse = read_json(
            app.clone()
                .oneshot(post_json(
                    "/brands",
                    &serde_json::json!({"name": "Canon"}),
                ))
                .await
                .unwrap(),
        )
        .await;
        app.clone()
            .oneshot(post_json(
                "/models",
                &serde_json::json!({
                    "brand_id": brand.id,
                    "name": "PIXMA G2020",
                    "model_type": "inkjet"
                }),
            ))
            .await
            .unwrap();
        app.clone()
            .oneshot(post_json(
                "/categories",
                &serde_json::json!({"name": "Masalah Kertas", "icon": "paper"}),
            ))
            .await
            .unwrap();
        let technician: IdResponse = read_json(
            app.clone()
                .oneshot(post_json(
                    "/technicians",
                    &serde_json::json!({
                        "name": "Budi Santoso",
                        "phone": "081234567890",
                        "specialization": ["inkjet"],
                        "experience": 5,
                        "rating": 4.8
                    }),
                ))
                .await
                .unwrap(),
        )
        .await;
        technician.id
    }

    fn sample_booking_request() -> CreateBookingApiRequest {
        CreateBookingApiRequest {
            customer_name: String::from("Siti Rahma"),
            phone: String::from("081298765432"),
            email: String::from("siti@customer.example"),
            address: String::from("Jl. Merdeka 10, Bandung"),
            printer_brand: String::from("Canon"),
            printer_model: String::from("PIXMA G2020"),
            problem_category: String::from("Masalah Kertas"),
            problem_description: String::from("Kertas macet terus"),
            appointment_date: String::from("2026-09-01"),
            appointment_time: String::from("10:00"),
            notes: String::new(),
        }
    }

    #[tokio::test]
    async fn test_create_booking_succeeds() {
        let app: Router = build_router(create_test_app_state());
        seed_catalog(&app).await;

        let response = app
            .clone()
            .oneshot(post_json("/bookings", &sample_booking_request()))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);

        let created: CreateBookingResponse = read_json(response).await;
        assert!(created.success);
        assert!(created.booking_id.starts_with("SRV-"));
        assert!(created.warnings.is_empty(), "{:?}", created.warnings);

        let detail: BookingDetail = read_json(
            app.oneshot(get_req(&format!("/bookings/{}", created.booking_id)))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(detail.status, "pending");
        assert_eq!(detail.estimated_cost, "Rp 30.000 - 120.000");
        assert_eq!(detail.technician, "Budi Santoso");
        assert_eq!(detail.timeline.len(), 1);
    }

    #[tokio::test]
    async fn test_create_booking_without_phone_fails() {
        let app: Router = build_router(create_test_app_state());
        seed_catalog(&app).await;

        let mut req = sample_booking_request();
        req.phone = String::new();
        let response = app.oneshot(post_json("/bookings", &req)).await.unwrap();

        assert_eq!(response.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);
        let err: ErrorResponse = read_json(response).await;
        assert!(err.error);
        assert!(err.message.contains("phone"));
    }

    #[tokio::test]
    async fn test_status_update_and_dedup() {
        let app: Router = build_router(create_test_app_state());
        seed_catalog(&app).await;

        let created: CreateBookingResponse = read_json(
            app.clone()
                .oneshot(post_json("/bookings", &sample_booking_request()))
                .await
                .unwrap(),
        )
        .await;

        let uri = format!("/bookings/{}/status", created.booking_id);
        let confirm = serde_json::json!({"status": "confirmed"});
        let first: UpdateStatusResponse = read_json(
            app.clone().oneshot(post_json(&uri, &confirm)).await.unwrap(),
        )
        .await;
        assert!(first.changed);

        // Repeating the same status is a no-op.
        let second: UpdateStatusResponse = read_json(
            app.clone().oneshot(post_json(&uri, &confirm)).await.unwrap(),
        )
        .await;
        assert!(!second.changed);

        let detail: BookingDetail = read_json(
            app.oneshot(get_req(&format!("/bookings/{}", created.booking_id)))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(detail.status, "confirmed");
        let confirmed = detail
            .timeline
            .iter()
            .filter(|event| event.status == "confirmed")
            .count();
        assert_eq!(confirmed, 1);
    }

    #[tokio::test]
    async fn test_invalid_status_is_rejected() {
        let app: Router = build_router(create_test_app_state());
        seed_catalog(&app).await;

        let created: CreateBookingResponse = read_json(
            app.clone()
                .oneshot(post_json("/bookings", &sample_booking_request()))
                .await
                .unwrap(),
        )
        .await;

        let response = app
            .oneshot(post_json(
                &format!("/bookings/{}/status", created.booking_id),
                &serde_json::json!({"status": "teleported"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_booking_returns_not_found() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .oneshot(get_req("/bookings/SRV-DEADBEEF"))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_assignment_and_cost_round_trip() {
        let app: Router = build_router(create_test_app_state());
        let technician_id = seed_catalog(&app).await;

        let created: CreateBookingResponse = read_json(
            app.clone()
                .oneshot(post_json("/bookings", &sample_booking_request()))
                .await
                .unwrap(),
        )
        .await;

        let assigned: AssignTechnicianResponse = read_json(
            app.clone()
                .oneshot(post_json(
                    &format!("/bookings/{}/technician", created.booking_id),
                    &serde_json::json!({"technician_id": technician_id}),
                ))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(assigned.technician, "Budi Santoso");

        app.clone()
            .oneshot(post_json(
                &format!("/bookings/{}/cost", created.booking_id),
                &serde_json::json!({"actual_cost": "Rp 85.000"}),
            ))
            .await
            .unwrap();

        let detail: BookingDetail = read_json(
            app.oneshot(get_req(&format!("/bookings/{}", created.booking_id)))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(detail.actual_cost, "Rp 85.000");
        assert!(
            detail
                .timeline
                .iter()
                .any(|event| event.status == "cost_updated")
        );
    }

    #[tokio::test]
    async fn test_delete_booking_removes_it_from_the_list() {
        let app: Router = build_router(create_test_app_state());
        seed_catalog(&app).await;

        let created: CreateBookingResponse = read_json(
            app.clone()
                .oneshot(post_json("/bookings", &sample_booking_request()))
                .await
                .unwrap(),
        )
        .await;

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/bookings/{}", created.booking_id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);

        let listed: Vec<BookingDetail> =
            read_json(app.oneshot(get_req("/bookings")).await.unwrap()).await;
        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn test_catalog_listings() {
        let app: Router = build_router(create_test_app_state());
        seed_catalog(&app).await;

        let brands: Vec<servis_domain::BrandWithModels> =
            read_json(app.clone().oneshot(get_req("/brands")).await.unwrap()).await;
        assert_eq!(brands.len(), 1);
        assert_eq!(brands[0].name, "Canon");
        assert_eq!(brands[0].models.len(), 1);

        let technicians: Vec<servis_domain::TechnicianRecord> =
            read_json(app.oneshot(get_req("/technicians")).await.unwrap()).await;
        assert_eq!(technicians.len(), 1);
        assert!(technicians[0].is_available);
    }

    #[tokio::test]
    async fn test_soft_deleted_brand_hides_bookings_from_list() {
        let app: Router = build_router(create_test_app_state());
        seed_catalog(&app).await;

        let created: CreateBookingResponse = read_json(
            app.clone()
                .oneshot(post_json("/bookings", &sample_booking_request()))
                .await
                .unwrap(),
        )
        .await;

        let brands: Vec<servis_domain::BrandWithModels> =
            read_json(app.clone().oneshot(get_req("/brands")).await.unwrap()).await;
        app.clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/brands/{}", brands[0].id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let listed: Vec<BookingDetail> =
            read_json(app.clone().oneshot(get_req("/bookings")).await.unwrap()).await;
        assert!(listed.is_empty());

        // The detail endpoint still reaches the booking.
        let response = app
            .oneshot(get_req(&format!("/bookings/{}", created.booking_id)))
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);
        let detail: BookingDetail = read_json(response).await;
        assert_eq!(detail.printer_brand, "");
    }
}
