//! Core business logic for Wardbook.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `fiscal` - Fiscal year management and the update workflow

pub mod fiscal;
