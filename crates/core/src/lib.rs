//! Core transaction-entry engine for Kasira.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. All domain types, coercion rules, and calculations live here.
//!
//! # Modules
//!
//! - `catalog` - Pre-loaded product/customer/supplier lookups
//! - `entry` - Line items, totals, payment state, and the entry session

pub mod catalog;
pub mod entry;
