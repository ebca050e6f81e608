//! Entity capabilities: identity plus continuity across state changes.

use std::fmt::Debug;
use std::hash::Hash;

use chrono::{DateTime, Utc};

use super::lifecycle::Lifecycle;

/// Anything with a durable, comparison-defining identity.
pub trait Identifiable {
    /// Strongly-typed identifier
    type Id: Clone + Eq + Hash + Debug;

    fn id(&self) -> &Self::Id;

    /// Identity equality, ignoring every other field
    fn same_identity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

/// Identifiable object with a lifecycle.
///
/// Implementors keep their fields private and mutate only through their own
/// methods, each of which refreshes the lifecycle.
pub trait Entity: Identifiable {
    fn lifecycle(&self) -> &Lifecycle;

    fn created_at(&self) -> DateTime<Utc> {
        self.lifecycle().created_at()
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.lifecycle().updated_at()
    }

    fn is_deleted(&self) -> bool {
        self.lifecycle().is_deleted()
    }
}
