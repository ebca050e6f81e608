//! Infrastructure Layer
//!
//! Storage adapters implementing the domain repository port.

pub mod memory;

pub use memory::InMemoryUserRepository;
