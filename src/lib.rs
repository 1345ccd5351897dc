//! Pre-publish validation for the coal tracker's website datasets.
//!
//! The generation pipeline (external to this crate) writes a set of JSON
//! dataset files plus a registry describing them. This crate declares the
//! expected shape of each file and checks candidate payloads against those
//! declarations before a release is published: structural shape, field
//! types, enumerated values, and cross-file referential integrity against
//! the ISO country lookup.

pub mod cli;
pub mod data;
pub mod parallel;
pub mod schema;
