//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of domain vocabulary:
//! - Entity / value object capabilities and the entity lifecycle
//! - The closed domain error taxonomy and the boundary error type
//! - Outcome helpers and paginated outcomes
//! - Typed identifiers and the response envelope
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod domain {
    pub mod entity;
    pub mod lifecycle;
    pub mod value_object;
}
pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod domain_error;
    pub mod field_errors;
    pub mod kind;
}
pub mod id;
pub mod outcome;
pub mod pagination;
pub mod response;
