//! Activation code registry.
//!
//! There is exactly one registry per process. It is built on first access and never
//! reset; after construction it is read-only, so sharing the `&'static` handle
//! across threads needs no further locking. Code that needs it takes a
//! `&CodeRegistry` argument instead of reaching for the global itself.

use std::collections::HashMap;
use std::sync::OnceLock;

use tally_core::{CatalogError, CatalogResult};

static REGISTRY: OnceLock<CodeRegistry> = OnceLock::new();

/// Known activation codes and whether each has been redeemed.
#[derive(Debug)]
pub struct CodeRegistry {
    codes: HashMap<&'static str, bool>,
}

impl CodeRegistry {
    /// Process-wide registry, initialised on first call.
    pub fn global() -> &'static CodeRegistry {
        REGISTRY.get_or_init(|| {
            tracing::debug!("initialising activation code registry");
            CodeRegistry::known()
        })
    }

    fn known() -> Self {
        Self {
            codes: HashMap::from([("xxx", true), ("yyy", false)]),
        }
    }

    /// Whether `code` has been used.
    ///
    /// Only exact matches of the known codes are recognised; anything else is an
    /// [`CatalogError::InvalidArgument`].
    pub fn is_code_used(&self, code: &str) -> CatalogResult<bool> {
        self.codes
            .get(code)
            .copied()
            .ok_or_else(|| CatalogError::invalid_argument(format!("invalid code {code:?}")))
    }
}
