//! Entity trait: identity + continuity across the catalog.

/// Entity marker + minimal interface.
///
/// Users, products and orders compare and hash by this identifier only. Two
/// entities built separately from the same field values are still different
/// entities; a clone is the same entity.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// Implements `PartialEq`, `Eq` and `Hash` for an [`Entity`] in terms of its id.
#[macro_export]
macro_rules! impl_identity_eq {
    ($t:ty) => {
        impl PartialEq for $t {
            fn eq(&self, other: &Self) -> bool {
                $crate::Entity::id(self) == $crate::Entity::id(other)
            }
        }

        impl Eq for $t {}

        impl core::hash::Hash for $t {
            fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
                core::hash::Hash::hash($crate::Entity::id(self), state);
            }
        }
    };
}
