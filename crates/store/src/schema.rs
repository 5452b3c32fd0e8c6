// Copyright (C) 2026 Servis Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

diesel::table! {
    customers (customer_id) {
        customer_id -> BigInt,
        name -> Text,
        phone -> Text,
        email -> Nullable<Text>,
        address -> Nullable<Text>,
        created_at -> Text,
    }
}

diesel::table! {
    printer_brands (brand_id) {
        brand_id -> BigInt,
        name -> Text,
        is_active -> Integer,
    }
}

diesel::table! {
    printer_models (model_id) {
        model_id -> BigInt,
        brand_id -> BigInt,
        name -> Text,
        model_type -> Text,
        is_active -> Integer,
    }
}

diesel::table! {
    problem_categories (category_id) {
        category_id -> BigInt,
        name -> Text,
        icon -> Text,
        is_active -> Integer,
    }
}

diesel::table! {
    problems (problem_id) {
        problem_id -> BigInt,
        category_id -> BigInt,
        name -> Text,
        description -> Text,
        severity -> Text,
        estimated_time -> Text,
        estimated_cost -> Text,
        is_active -> Integer,
    }
}

diesel::table! {
    technicians (technician_id) {
        technician_id -> BigInt,
        name -> Text,
        phone -> Text,
        email -> Nullable<Text>,
        specialization -> Text,
        experience -> Integer,
        rating -> Float,
        is_available -> Integer,
        is_active -> Integer,
    }
}

diesel::table! {
    gallery_images (image_id) {
        image_id -> BigInt,
        title -> Text,
        alt_text -> Text,
        image_url -> Text,
        category -> Text,
        sort_order -> Integer,
        is_active -> Integer,
    }
}

diesel::table! {
    bookings (booking_id) {
        booking_id -> Text,
        customer_id -> BigInt,
        brand_id -> Nullable<BigInt>,
        model_id -> Nullable<BigInt>,
        category_id -> Nullable<BigInt>,
        technician_id -> Nullable<BigInt>,
        problem_description -> Text,
        service_type -> Text,
        appointment_date -> Text,
        appointment_time -> Text,
        status -> Text,
        estimated_cost -> Text,
        actual_cost -> Nullable<Text>,
        notes -> Text,
        created_at -> Text,
        updated_at -> Text,
    }
}

diesel::table! {
    booking_timeline (entry_id) {
        entry_id -> BigInt,
        booking_id -> Text,
        status -> Text,
        title -> Text,
        description -> Text,
        completed -> Integer,
        completed_at -> Nullable<Text>,
        created_at -> Text,
    }
}

diesel::joinable!(printer_models -> printer_brands (brand_id));
diesel::joinable!(problems -> problem_categories (category_id));
diesel::joinable!(bookings -> customers (customer_id));
diesel::joinable!(bookings -> printer_brands (brand_id));
diesel::joinable!(bookings -> printer_models (model_id));
diesel::joinable!(bookings -> problem_categories (category_id));
diesel::joinable!(bookings -> technicians (technician_id));
diesel::joinable!(booking_timeline -> bookings (booking_id));

diesel::allow_tables_to_appear_in_same_query!(
    booking_timeline,
    bookings,
    customers,
    gallery_images,
    printer_brands,
    printer_models,
    problem_categories,
    problems,
    technicians,
);
