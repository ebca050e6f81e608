//! Value Object Module

pub mod email;
pub mod person_name;
pub mod user_id;

pub use email::Email;
pub use person_name::PersonName;
pub use user_id::UserId;
