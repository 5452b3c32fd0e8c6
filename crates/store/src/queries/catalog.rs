// Copyright (C) 2026 Servis Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Catalog reads: brands, models, categories, problems, technicians,
//! gallery images, and the name-resolution lookups used at booking
//! creation time.
//!
//! All reads filter on `is_active`; soft-deleted rows never appear.

use diesel::prelude::*;
use diesel::SqliteConnection;
use servis_domain::{
    BrandWithModels, CategoryWithProblems, GalleryImageRecord, ModelSummary, ProblemSummary,
    TechnicianRecord,
};

use crate::error::StoreError;
use crate::schema::{
    gallery_images, printer_brands, printer_models, problem_categories, problems, technicians,
};

/// Lists active printer brands with their active models, ordered by name.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_brands(conn: &mut SqliteConnection) -> Result<Vec<BrandWithModels>, StoreError> {
    let brands = printer_brands::table
        .filter(printer_brands::is_active.eq(1))
        .order(printer_brands::name.asc())
        .select((printer_brands::brand_id, printer_brands::name))
        .load::<(i64, String)>(conn)?;

    let models = printer_models::table
        .filter(printer_models::is_active.eq(1))
        .order(printer_models::name.asc())
        .select((
            printer_models::model_id,
            printer_models::brand_id,
            printer_models::name,
            printer_models::model_type,
        ))
        .load::<(i64, i64, String, String)>(conn)?;

    Ok(brands
        .into_iter()
        .map(|(id, name)| BrandWithModels {
            id,
            name,
            models: models
                .iter()
                .filter(|(_, brand_id, _, _)| *brand_id == id)
                .map(|(model_id, _, model_name, model_type)| ModelSummary {
                    id: *model_id,
                    name: model_name.clone(),
                    model_type: model_type.clone(),
                })
                .collect(),
        })
        .collect())
}

/// Lists active problem categories with their active problems,
/// ordered by name.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_categories(
    conn: &mut SqliteConnection,
) -> Result<Vec<CategoryWithProblems>, StoreError> {
    let categories = problem_categories::table
        .filter(problem_categories::is_active.eq(1))
        .order(problem_categories::name.asc())
        .select((
            problem_categories::category_id,
            problem_categories::name,
            problem_categories::icon,
        ))
        .load::<(i64, String, String)>(conn)?;

    let problem_rows = problems::table
        .filter(problems::is_active.eq(1))
        .order(problems::name.asc())
        .select((
            problems::problem_id,
            problems::category_id,
            problems::name,
            problems::description,
            problems::severity,
            problems::estimated_time,
            problems::estimated_cost,
        ))
        .load::<(i64, i64, String, String, String, String, String)>(conn)?;

    Ok(categories
        .into_iter()
        .map(|(id, name, icon)| CategoryWithProblems {
            id,
            name,
            icon,
            problems: problem_rows
                .iter()
                .filter(|(_, category_id, ..)| *category_id == id)
                .map(
                    |(problem_id, _, name, description, severity, time, cost)| ProblemSummary {
                        id: *problem_id,
                        name: name.clone(),
                        description: description.clone(),
                        severity: severity.clone(),
                        estimated_time: time.clone(),
                        estimated_cost: cost.clone(),
                    },
                )
                .collect(),
        })
        .collect())
}

/// Lists active technicians, ordered by name.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_technicians(conn: &mut SqliteConnection) -> Result<Vec<TechnicianRecord>, StoreError> {
    let rows = technicians::table
        .filter(technicians::is_active.eq(1))
        .order(technicians::name.asc())
        .select((
            technicians::technician_id,
            technicians::name,
            technicians::phone,
            technicians::email,
            technicians::specialization,
            technicians::experience,
            technicians::rating,
            technicians::is_available,
        ))
        .load::<(i64, String, String, Option<String>, String, i32, f32, i32)>(conn)?;

    Ok(rows
        .into_iter()
        .map(
            |(id, name, phone, email, specialization, experience, rating, is_available)| {
                TechnicianRecord {
                    id,
                    name,
                    phone,
                    email,
                    // Tolerate malformed rows rather than failing the list.
                    specialization: serde_json::from_str(&specialization).unwrap_or_default(),
                    experience,
                    rating,
                    is_available: is_available != 0,
                }
            },
        )
        .collect())
}

/// Lists active gallery images ordered by `sort_order`.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_gallery_images(
    conn: &mut SqliteConnection,
) -> Result<Vec<GalleryImageRecord>, StoreError> {
    let rows = gallery_images::table
        .filter(gallery_images::is_active.eq(1))
        .order(gallery_images::sort_order.asc())
        .select((
            gallery_images::image_id,
            gallery_images::title,
            gallery_images::alt_text,
            gallery_images::image_url,
            gallery_images::category,
            gallery_images::sort_order,
        ))
        .load::<(i64, String, String, String, String, i32)>(conn)?;

    Ok(rows
        .into_iter()
        .map(
            |(id, title, alt_text, image_url, category, sort_order)| GalleryImageRecord {
                id,
                title,
                alt_text,
                image_url,
                category,
                sort_order,
            },
        )
        .collect())
}

/// Resolves an active printer brand by exact name.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn find_brand_id_by_name(
    conn: &mut SqliteConnection,
    name: &str,
) -> Result<Option<i64>, StoreError> {
    Ok(printer_brands::table
        .filter(printer_brands::name.eq(name))
        .filter(printer_brands::is_active.eq(1))
        .select(printer_brands::brand_id)
        .first::<i64>(conn)
        .optional()?)
}

/// Resolves an active printer model by exact name.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn find_active_model_id_by_name(
    conn: &mut SqliteConnection,
    name: &str,
) -> Result<Option<i64>, StoreError> {
    Ok(printer_models::table
        .filter(printer_models::name.eq(name))
        .filter(printer_models::is_active.eq(1))
        .select(printer_models::model_id)
        .first::<i64>(conn)
        .optional()?)
}

/// Resolves an active problem category by exact name.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn find_category_id_by_name(
    conn: &mut SqliteConnection,
    name: &str,
) -> Result<Option<i64>, StoreError> {
    Ok(problem_categories::table
        .filter(problem_categories::name.eq(name))
        .filter(problem_categories::is_active.eq(1))
        .select(problem_categories::category_id)
        .first::<i64>(conn)
        .optional()?)
}

/// Picks one active, available technician.
///
/// First match of an unordered query; there is deliberately no
/// ranking.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn find_available_technician_id(
    conn: &mut SqliteConnection,
) -> Result<Option<i64>, StoreError> {
    Ok(technicians::table
        .filter(technicians::is_active.eq(1))
        .filter(technicians::is_available.eq(1))
        .select(technicians::technician_id)
        .first::<i64>(conn)
        .optional()?)
}

/// Looks up an active technician's display name.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn technician_name(
    conn: &mut SqliteConnection,
    technician_id: i64,
) -> Result<Option<String>, StoreError> {
    Ok(technicians::table
        .filter(technicians::technician_id.eq(technician_id))
        .filter(technicians::is_active.eq(1))
        .select(technicians::name)
        .first::<String>(conn)
        .optional()?)
}
