// Copyright (C) 2026 Servis Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Catalog writes: brands, models, categories, problems, technicians,
//! gallery images.
//!
//! Deletion is always a soft delete (`is_active = 0`). Rows are never
//! removed, so historical bookings keep valid references after a
//! brand or technician is retired.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::info;

use crate::backend::get_last_insert_rowid;
use crate::error::StoreError;
use crate::schema::{
    gallery_images, printer_brands, printer_models, problem_categories, problems, technicians,
};

/// Partial update for a technician row.
///
/// `None` fields are left untouched.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = technicians)]
pub struct TechnicianChanges {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    /// JSON-encoded specialization list.
    pub specialization: Option<String>,
    pub experience: Option<i32>,
    pub rating: Option<f32>,
    pub is_available: Option<i32>,
}

/// Partial update for a gallery image row.
///
/// `None` fields are left untouched.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = gallery_images)]
pub struct GalleryImageChanges {
    pub title: Option<String>,
    pub alt_text: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub sort_order: Option<i32>,
}

/// Inserts a printer brand.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn add_brand(conn: &mut SqliteConnection, name: &str) -> Result<i64, StoreError> {
    diesel::insert_into(printer_brands::table)
        .values(printer_brands::name.eq(name))
        .execute(conn)?;
    get_last_insert_rowid(conn)
}

/// Renames a printer brand.
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn rename_brand(conn: &mut SqliteConnection, brand_id: i64, name: &str) -> Result<(), StoreError> {
    diesel::update(printer_brands::table.filter(printer_brands::brand_id.eq(brand_id)))
        .set(printer_brands::name.eq(name))
        .execute(conn)?;
    Ok(())
}

/// Soft-deletes a printer brand.
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn deactivate_brand(conn: &mut SqliteConnection, brand_id: i64) -> Result<(), StoreError> {
    diesel::update(printer_brands::table.filter(printer_brands::brand_id.eq(brand_id)))
        .set(printer_brands::is_active.eq(0))
        .execute(conn)?;
    info!(brand_id, "Soft-deleted printer brand");
    Ok(())
}

/// Inserts a printer model under a brand.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn add_model(
    conn: &mut SqliteConnection,
    brand_id: i64,
    name: &str,
    model_type: &str,
) -> Result<i64, StoreError> {
    diesel::insert_into(printer_models::table)
        .values((
            printer_models::brand_id.eq(brand_id),
            printer_models::name.eq(name),
            printer_models::model_type.eq(model_type),
        ))
        .execute(conn)?;
    get_last_insert_rowid(conn)
}

/// Updates a printer model's name and type.
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn update_model(
    conn: &mut SqliteConnection,
    model_id: i64,
    name: &str,
    model_type: &str,
) -> Result<(), StoreError> {
    diesel::update(printer_models::table.filter(printer_models::model_id.eq(model_id)))
        .set((
            printer_models::name.eq(name),
            printer_models::model_type.eq(model_type),
        ))
        .execute(conn)?;
    Ok(())
}

/// Soft-deletes a printer model.
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn deactivate_model(conn: &mut SqliteConnection, model_id: i64) -> Result<(), StoreError> {
    diesel::update(printer_models::table.filter(printer_models::model_id.eq(model_id)))
        .set(printer_models::is_active.eq(0))
        .execute(conn)?;
    info!(model_id, "Soft-deleted printer model");
    Ok(())
}

/// Inserts a problem category.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn add_category(conn: &mut SqliteConnection, name: &str, icon: &str) -> Result<i64, StoreError> {
    diesel::insert_into(problem_categories::table)
        .values((
            problem_categories::name.eq(name),
            problem_categories::icon.eq(icon),
        ))
        .execute(conn)?;
    get_last_insert_rowid(conn)
}

/// Updates a problem category's name and icon.
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn update_category(
    conn: &mut SqliteConnection,
    category_id: i64,
    name: &str,
    icon: &str,
) -> Result<(), StoreError> {
    diesel::update(
        problem_categories::table.filter(problem_categories::category_id.eq(category_id)),
    )
    .set((
        problem_categories::name.eq(name),
        problem_categories::icon.eq(icon),
    ))
    .execute(conn)?;
    Ok(())
}

/// Soft-deletes a problem category.
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn deactivate_category(
    conn: &mut SqliteConnection,
    category_id: i64,
) -> Result<(), StoreError> {
    diesel::update(
        problem_categories::table.filter(problem_categories::category_id.eq(category_id)),
    )
    .set(problem_categories::is_active.eq(0))
    .execute(conn)?;
    info!(category_id, "Soft-deleted problem category");
    Ok(())
}

/// Inserts a problem under a category.
///
/// # Errors
///
/// Returns an error if the insert fails.
#[allow(clippy::too_many_arguments)]
pub fn add_problem(
    conn: &mut SqliteConnection,
    category_id: i64,
    name: &str,
    description: &str,
    severity: &str,
    estimated_time: &str,
    estimated_cost: &str,
) -> Result<i64, StoreError> {
    diesel::insert_into(problems::table)
        .values((
            problems::category_id.eq(category_id),
            problems::name.eq(name),
            problems::description.eq(description),
            problems::severity.eq(severity),
            problems::estimated_time.eq(estimated_time),
            problems::estimated_cost.eq(estimated_cost),
        ))
        .execute(conn)?;
    get_last_insert_rowid(conn)
}

/// Updates a problem's descriptive fields.
///
/// # Errors
///
/// Returns an error if the update fails.
#[allow(clippy::too_many_arguments)]
pub fn update_problem(
    conn: &mut SqliteConnection,
    problem_id: i64,
    name: &str,
    description: &str,
    severity: &str,
    estimated_time: &str,
    estimated_cost: &str,
) -> Result<(), StoreError> {
    diesel::update(problems::table.filter(problems::problem_id.eq(problem_id)))
        .set((
            problems::name.eq(name),
            problems::description.eq(description),
            problems::severity.eq(severity),
            problems::estimated_time.eq(estimated_time),
            problems::estimated_cost.eq(estimated_cost),
        ))
        .execute(conn)?;
    Ok(())
}

/// Soft-deletes a problem.
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn deactivate_problem(conn: &mut SqliteConnection, problem_id: i64) -> Result<(), StoreError> {
    diesel::update(problems::table.filter(problems::problem_id.eq(problem_id)))
        .set(problems::is_active.eq(0))
        .execute(conn)?;
    info!(problem_id, "Soft-deleted problem");
    Ok(())
}

/// Inserts a technician, active and available by default.
///
/// # Errors
///
/// Returns an error if serialization or the insert fails.
pub fn add_technician(
    conn: &mut SqliteConnection,
    name: &str,
    phone: &str,
    email: Option<&str>,
    specialization: &[String],
    experience: i32,
    rating: f32,
) -> Result<i64, StoreError> {
    let specialization_json = serde_json::to_string(specialization)?;
    diesel::insert_into(technicians::table)
        .values((
            technicians::name.eq(name),
            technicians::phone.eq(phone),
            technicians::email.eq(email),
            technicians::specialization.eq(specialization_json),
            technicians::experience.eq(experience),
            technicians::rating.eq(rating),
            technicians::is_available.eq(1),
            technicians::is_active.eq(1),
        ))
        .execute(conn)?;
    get_last_insert_rowid(conn)
}

/// Applies a partial update to a technician.
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn update_technician(
    conn: &mut SqliteConnection,
    technician_id: i64,
    changes: &TechnicianChanges,
) -> Result<(), StoreError> {
    diesel::update(technicians::table.filter(technicians::technician_id.eq(technician_id)))
        .set(changes)
        .execute(conn)?;
    Ok(())
}

/// Soft-deletes a technician.
///
/// Historical bookings keep the reference; the roster and the
/// available-technician pool stop seeing the row.
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn deactivate_technician(
    conn: &mut SqliteConnection,
    technician_id: i64,
) -> Result<(), StoreError> {
    diesel::update(technicians::table.filter(technicians::technician_id.eq(technician_id)))
        .set(technicians::is_active.eq(0))
        .execute(conn)?;
    info!(technician_id, "Soft-deleted technician");
    Ok(())
}

/// Inserts a gallery image.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn add_gallery_image(
    conn: &mut SqliteConnection,
    title: &str,
    alt_text: &str,
    image_url: &str,
    category: &str,
    sort_order: i32,
) -> Result<i64, StoreError> {
    diesel::insert_into(gallery_images::table)
        .values((
            gallery_images::title.eq(title),
            gallery_images::alt_text.eq(alt_text),
            gallery_images::image_url.eq(image_url),
            gallery_images::category.eq(category),
            gallery_images::sort_order.eq(sort_order),
        ))
        .execute(conn)?;
    get_last_insert_rowid(conn)
}

/// Applies a partial update to a gallery image.
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn update_gallery_image(
    conn: &mut SqliteConnection,
    image_id: i64,
    changes: &GalleryImageChanges,
) -> Result<(), StoreError> {
    diesel::update(gallery_images::table.filter(gallery_images::image_id.eq(image_id)))
        .set(changes)
        .execute(conn)?;
    Ok(())
}

/// Soft-deletes a gallery image.
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn deactivate_gallery_image(
    conn: &mut SqliteConnection,
    image_id: i64,
) -> Result<(), StoreError> {
    diesel::update(gallery_images::table.filter(gallery_images::image_id.eq(image_id)))
        .set(gallery_images::is_active.eq(0))
        .execute(conn)?;
    info!(image_id, "Soft-deleted gallery image");
    Ok(())
}
