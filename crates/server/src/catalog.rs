// Copyright (C) 2026 Servis Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Catalog administration handlers: brands, models, categories,
//! problems, technicians, gallery images.
//!
//! Deletion endpoints soft-delete; the row survives for historical
//! bookings. Every successful write broadcasts a change event.

use axum::{
    Json,
    extract::{Path, State as AxumState},
};
use serde::{Deserialize, Serialize};
use servis_domain::{
    BrandWithModels, CategoryWithProblems, GalleryImageRecord, TechnicianRecord,
};
use servis_store::{GalleryImageChanges, TechnicianChanges};
use tracing::info;

use crate::live::LiveEvent;
use crate::{AppState, HttpError, IdResponse, WriteResponse};

/// Request body for creating a printer brand.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BrandRequest {
    /// The brand name.
    pub name: String,
}

/// Request body for creating or updating a printer model.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModelRequest {
    /// The owning brand (required on create, ignored on update).
    #[serde(default)]
    pub brand_id: Option<i64>,
    /// The model name.
    pub name: String,
    /// The model type (e.g. "inkjet", "laser").
    pub model_type: String,
}

/// Request body for creating or updating a problem category.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CategoryRequest {
    /// The category name.
    pub name: String,
    /// The icon identifier shown on the booking form.
    pub icon: String,
}

/// Request body for creating or updating a problem.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProblemRequest {
    /// The owning category (required on create, ignored on update).
    #[serde(default)]
    pub category_id: Option<i64>,
    /// The problem name.
    pub name: String,
    /// A customer-facing description.
    pub description: String,
    /// Severity label (free text).
    pub severity: String,
    /// Estimated repair time (display text).
    pub estimated_time: String,
    /// Estimated cost range (display text).
    pub estimated_cost: String,
}

/// Request body for creating a technician.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateTechnicianRequest {
    /// The technician's name.
    pub name: String,
    /// The technician's phone number.
    pub phone: String,
    /// The technician's email, if any.
    #[serde(default)]
    pub email: Option<String>,
    /// Specialization tags.
    #[serde(default)]
    pub specialization: Vec<String>,
    /// Years of experience.
    #[serde(default)]
    pub experience: i32,
    /// Customer rating, 0.0 to 5.0.
    #[serde(default)]
    pub rating: f32,
}

/// Request body for a partial technician update.
///
/// Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UpdateTechnicianRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub specialization: Option<Vec<String>>,
    #[serde(default)]
    pub experience: Option<i32>,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub is_available: Option<bool>,
}

/// Request body for creating a gallery image.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateGalleryImageRequest {
    pub title: String,
    pub alt_text: String,
    pub image_url: String,
    pub category: String,
    #[serde(default)]
    pub sort_order: i32,
}

/// Request body for a partial gallery image update.
///
/// Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UpdateGalleryImageRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub alt_text: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub sort_order: Option<i32>,
}

/// Handler for GET `/brands`.
///
/// Lists active brands with their active models, ordered by name.
pub async fn handle_list_brands(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<BrandWithModels>>, HttpError> {
    let mut store = app_state.store.lock().await;
    let brands = store.list_brands()?;
    drop(store);
    Ok(Json(brands))
}

/// Handler for POST `/brands`.
pub async fn handle_add_brand(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<BrandRequest>,
) -> Result<Json<IdResponse>, HttpError> {
    let mut store = app_state.store.lock().await;
    let id = store.add_brand(&req.name)?;
    drop(store);

    info!(brand_id = id, name = %req.name, "Added printer brand");
    app_state
        .live
        .broadcast(&LiveEvent::changed("printer_brands", "created"));
    Ok(Json(IdResponse { success: true, id }))
}

/// Handler for PUT `/brands/{id}`.
pub async fn handle_rename_brand(
    AxumState(app_state): AxumState<AppState>,
    Path(brand_id): Path<i64>,
    Json(req): Json<BrandRequest>,
) -> Result<Json<WriteResponse>, HttpError> {
    let mut store = app_state.store.lock().await;
    store.rename_brand(brand_id, &req.name)?;
    drop(store);

    app_state
        .live
        .broadcast(&LiveEvent::changed("printer_brands", "updated"));
    Ok(Json(WriteResponse::ok("Brand updated")))
}

/// Handler for DELETE `/brands/{id}` (soft delete).
pub async fn handle_delete_brand(
    AxumState(app_state): AxumState<AppState>,
    Path(brand_id): Path<i64>,
) -> Result<Json<WriteResponse>, HttpError> {
    let mut store = app_state.store.lock().await;
    store.deactivate_brand(brand_id)?;
    drop(store);

    app_state
        .live
        .broadcast(&LiveEvent::changed("printer_brands", "deleted"));
    Ok(Json(WriteResponse::ok("Brand deactivated")))
}

/// Handler for POST `/models`.
pub async fn handle_add_model(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<ModelRequest>,
) -> Result<Json<IdResponse>, HttpError> {
    let brand_id = req.brand_id.ok_or_else(|| {
        HttpError::bad_request(String::from("brand_id is required to create a model"))
    })?;

    let mut store = app_state.store.lock().await;
    let id = store.add_model(brand_id, &req.name, &req.model_type)?;
    drop(store);

    info!(model_id = id, name = %req.name, "Added printer model");
    app_state
        .live
        .broadcast(&LiveEvent::changed("printer_models", "created"));
    Ok(Json(IdResponse { success: true, id }))
}

/// Handler for PUT `/models/{id}`.
pub async fn handle_update_model(
    AxumState(app_state): AxumState<AppState>,
    Path(model_id): Path<i64>,
    Json(req): Json<ModelRequest>,
) -> Result<Json<WriteResponse>, HttpError> {
    let mut store = app_state.store.lock().await;
    store.update_model(model_id, &req.name, &req.model_type)?;
    drop(store);

    app_state
        .live
        .broadcast(&LiveEvent::changed("printer_models", "updated"));
    Ok(Json(WriteResponse::ok("Model updated")))
}

/// Handler for DELETE `/models/{id}` (soft delete).
pub async fn handle_delete_model(
    AxumState(app_state): AxumState<AppState>,
    Path(model_id): Path<i64>,
) -> Result<Json<WriteResponse>, HttpError> {
    let mut store = app_state.store.lock().await;
    store.deactivate_model(model_id)?;
    drop(store);

    app_state
        .live
        .broadcast(&LiveEvent::changed("printer_models", "deleted"));
    Ok(Json(WriteResponse::ok("Model deactivated")))
}

/// Handler for GET `/categories`.
///
/// Lists active categories with their active problems, ordered by
/// name.
pub async fn handle_list_categories(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<CategoryWithProblems>>, HttpError> {
    let mut store = app_state.store.lock().await;
    let categories = store.list_categories()?;
    drop(store);
    Ok(Json(categories))
}

/// Handler for POST `/categories`.
pub async fn handle_add_category(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CategoryRequest>,
) -> Result<Json<IdResponse>, HttpError> {
    let mut store = app_state.store.lock().await;
    let id = store.add_category(&req.name, &req.icon)?;
    drop(store);

    info!(category_id = id, name = %req.name, "Added problem category");
    app_state
        .live
        .broadcast(&LiveEvent::changed("problem_categories", "created"));
    Ok(Json(IdResponse { success: true, id }))
}

/// Handler for PUT `/categories/{id}`.
pub async fn handle_update_category(
    AxumState(app_state): AxumState<AppState>,
    Path(category_id): Path<i64>,
    Json(req): Json<CategoryRequest>,
) -> Result<Json<WriteResponse>, HttpError> {
    let mut store = app_state.store.lock().await;
    store.update_category(category_id, &req.name, &req.icon)?;
    drop(store);

    app_state
        .live
        .broadcast(&LiveEvent::changed("problem_categories", "updated"));
    Ok(Json(WriteResponse::ok("Category updated")))
}

/// Handler for DELETE `/categories/{id}` (soft delete).
pub async fn handle_delete_category(
    AxumState(app_state): AxumState<AppState>,
    Path(category_id): Path<i64>,
) -> Result<Json<WriteResponse>, HttpError> {
    let mut store = app_state.store.lock().await;
    store.deactivate_category(category_id)?;
    drop(store);

    app_state
        .live
        .broadcast(&LiveEvent::changed("problem_categories", "deleted"));
    Ok(Json(WriteResponse::ok("Category deactivated")))
}

/// Handler for POST `/problems`.
pub async fn handle_add_problem(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<ProblemRequest>,
) -> Result<Json<IdResponse>, HttpError> {
    let category_id = req.category_id.ok_or_else(|| {
        HttpError::bad_request(String::from("category_id is required to create a problem"))
    })?;

    let mut store = app_state.store.lock().await;
    let id = store.add_problem(
        category_id,
        &req.name,
        &req.description,
        &req.severity,
        &req.estimated_time,
        &req.estimated_cost,
    )?;
    drop(store);

    info!(problem_id = id, name = %req.name, "Added problem");
    app_state
        .live
        .broadcast(&LiveEvent::changed("problems", "created"));
    Ok(Json(IdResponse { success: true, id }))
}

/// Handler for PUT `/problems/{id}`.
pub async fn handle_update_problem(
    AxumState(app_state): AxumState<AppState>,
    Path(problem_id): Path<i64>,
    Json(req): Json<ProblemRequest>,
) -> Result<Json<WriteResponse>, HttpError> {
    let mut store = app_state.store.lock().await;
    store.update_problem(
        problem_id,
        &req.name,
        &req.description,
        &req.severity,
        &req.estimated_time,
        &req.estimated_cost,
    )?;
    drop(store);

    app_state
        .live
        .broadcast(&LiveEvent::changed("problems", "updated"));
    Ok(Json(WriteResponse::ok("Problem updated")))
}

/// Handler for DELETE `/problems/{id}` (soft delete).
pub async fn handle_delete_problem(
    AxumState(app_state): AxumState<AppState>,
    Path(problem_id): Path<i64>,
) -> Result<Json<WriteResponse>, HttpError> {
    let mut store = app_state.store.lock().await;
    store.deactivate_problem(problem_id)?;
    drop(store);

    app_state
        .live
        .broadcast(&LiveEvent::changed("problems", "deleted"));
    Ok(Json(WriteResponse::ok("Problem deactivated")))
}

/// Handler for GET `/technicians`.
pub async fn handle_list_technicians(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<TechnicianRecord>>, HttpError> {
    let mut store = app_state.store.lock().await;
    let technicians = store.list_technicians()?;
    drop(store);
    Ok(Json(technicians))
}

/// Handler for POST `/technicians`.
pub async fn handle_add_technician(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateTechnicianRequest>,
) -> Result<Json<IdResponse>, HttpError> {
    let mut store = app_state.store.lock().await;
    let id = store.add_technician(
        &req.name,
        &req.phone,
        req.email.as_deref(),
        &req.specialization,
        req.experience,
        req.rating,
    )?;
    drop(store);

    info!(technician_id = id, name = %req.name, "Added technician");
    app_state
        .live
        .broadcast(&LiveEvent::changed("technicians", "created"));
    Ok(Json(IdResponse { success: true, id }))
}

/// Handler for PUT `/technicians/{id}` (partial update).
pub async fn handle_update_technician(
    AxumState(app_state): AxumState<AppState>,
    Path(technician_id): Path<i64>,
    Json(req): Json<UpdateTechnicianRequest>,
) -> Result<Json<WriteResponse>, HttpError> {
    let specialization = match &req.specialization {
        Some(tags) => Some(serde_json::to_string(tags).map_err(|e| {
            HttpError::bad_request(format!("Invalid specialization list: {e}"))
        })?),
        None => None,
    };
    let changes = TechnicianChanges {
        name: req.name,
        phone: req.phone,
        email: req.email,
        specialization,
        experience: req.experience,
        rating: req.rating,
        is_available: req.is_available.map(i32::from),
    };

    let mut store = app_state.store.lock().await;
    store.update_technician(technician_id, &changes)?;
    drop(store);

    app_state
        .live
        .broadcast(&LiveEvent::changed("technicians", "updated"));
    Ok(Json(WriteResponse::ok("Technician updated")))
}

/// Handler for DELETE `/technicians/{id}` (soft delete).
pub async fn handle_delete_technician(
    AxumState(app_state): AxumState<AppState>,
    Path(technician_id): Path<i64>,
) -> Result<Json<WriteResponse>, HttpError> {
    let mut store = app_state.store.lock().await;
    store.deactivate_technician(technician_id)?;
    drop(store);

    app_state
        .live
        .broadcast(&LiveEvent::changed("technicians", "deleted"));
    Ok(Json(WriteResponse::ok("Technician deactivated")))
}

/// Handler for GET `/gallery`.
///
/// Lists active gallery images by sort order.
pub async fn handle_list_gallery(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<GalleryImageRecord>>, HttpError> {
    let mut store = app_state.store.lock().await;
    let images = store.list_gallery_images()?;
    drop(store);
    Ok(Json(images))
}

/// Handler for POST `/gallery`.
pub async fn handle_add_gallery_image(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateGalleryImageRequest>,
) -> Result<Json<IdResponse>, HttpError> {
    let mut store = app_state.store.lock().await;
    let id = store.add_gallery_image(
        &req.title,
        &req.alt_text,
        &req.image_url,
        &req.category,
        req.sort_order,
    )?;
    drop(store);

    info!(image_id = id, title = %req.title, "Added gallery image");
    app_state
        .live
        .broadcast(&LiveEvent::changed("gallery_images", "created"));
    Ok(Json(IdResponse { success: true, id }))
}

/// Handler for PUT `/gallery/{id}` (partial update).
pub async fn handle_update_gallery_image(
    AxumState(app_state): AxumState<AppState>,
    Path(image_id): Path<i64>,
    Json(req): Json<UpdateGalleryImageRequest>,
) -> Result<Json<WriteResponse>, HttpError> {
    let changes = GalleryImageChanges {
        title: req.title,
        alt_text: req.alt_text,
        image_url: req.image_url,
        category: req.category,
        sort_order: req.sort_order,
    };

    let mut store = app_state.store.lock().await;
    store.update_gallery_image(image_id, &changes)?;
    drop(store);

    app_state
        .live
        .broadcast(&LiveEvent::changed("gallery_images", "updated"));
    Ok(Json(WriteResponse::ok("Gallery image updated")))
}

/// Handler for DELETE `/gallery/{id}` (soft delete).
pub async fn handle_delete_gallery_image(
    AxumState(app_state): AxumState<AppState>,
    Path(image_id): Path<i64>,
) -> Result<Json<WriteResponse>, HttpError> {
    let mut store = app_state.store.lock().await;
    store.deactivate_gallery_image(image_id)?;
    drop(store);

    app_state
        .live
        .broadcast(&LiveEvent::changed("gallery_images", "deleted"));
    Ok(Json(WriteResponse::ok("Gallery image deactivated")))
}
