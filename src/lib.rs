//! # Catalog Manager
//!
//! Catalog page management for content admin screens.
//!
//! Catalog pages are content records organised below parent records
//! (products below categories and brands, for example). Rather than editing
//! them through the page tree, each catalog content type gets an admin screen
//! that lists its records, lets editors reorder and publish them, and warns
//! when no parent record exists yet.
//!
//! ## Feature Flags
//!
//! - `admin` - Admin edit surfaces ([`admin`])
//! - `full` (default) - All features enabled

#[cfg(feature = "admin")]
pub mod admin;
