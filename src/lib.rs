//! # SGC Rust Backend
//!
//! Grade and GPA computation engine for the Software Engineering program.
//!
//! This crate provides a Rust-based backend for the Student Grade Calculator (SGC),
//! converting raw course marks into letter grades, credit-weighted grade points,
//! and semester/cumulative averages. The backend exposes a REST API via Axum for
//! the web frontend.
//!
//! ## Features
//!
//! - **Grading**: Percentage resolution from component or direct marks, fixed
//!   threshold grade mapping, theory/lab credit weighting
//! - **Aggregation**: Semester GPA and overall CGPA folding in prior academic history
//! - **Prediction**: What-if CGPA projection for a single hypothetical course
//! - **Course Catalog**: Immutable per-semester course reference data with TOML overrides
//! - **Persistence**: Saved marks keyed by semester and course, in-memory or JSON file
//! - **Reports**: Plain-text and CSV grade report rendering
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Data Transfer Objects (DTOs) for API responses
//! - [`models`]: Mark input parsing and catalog/saved-marks merging
//! - [`catalog`]: Course reference data loaded once at process start
//! - [`services`]: Grade computation, aggregation, prediction, and report rendering
//! - [`db`]: Repository pattern and persistence layer for saved marks
//! - [`http`]: Axum-based HTTP server and request handlers
//! - [`routes`]: Route-specific data types

pub mod api;

pub mod catalog;
pub mod db;
pub mod models;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
