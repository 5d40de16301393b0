//! Headless-CMS access for job collections.
//!
//! This crate provides:
//! - `JobSource` trait for anything that can hand out per-locale summary and
//!   detail collections
//! - `CmsClient`, a reqwest implementation against a Strapi-style REST API
//! - `StaticSource`, an in-memory source for fixtures and tests
//! - Envelope parsing shared by the client and local JSON files

pub mod client;
pub mod envelope;
pub mod error;
pub mod source;

pub use client::CmsClient;
pub use envelope::parse_collection;
pub use error::{truncate_body, CmsError};
pub use source::{JobSource, StaticSource};
