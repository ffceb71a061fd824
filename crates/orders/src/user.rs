use serde::Serialize;

use tally_core::{Entity, UserId, impl_identity_eq};

/// A buyer.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    id: UserId,
    name: String,
    age: u32,
}

impl_identity_eq!(User);

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl User {
    /// Create a user with a fresh id. No validation is applied to the name.
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            id: UserId::new(),
            name: name.into(),
            age,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }
}

impl core::fmt::Display for User {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} ({})", self.name, self.age)
    }
}
