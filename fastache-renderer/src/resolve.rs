//! Identifier resolution against a scope chain.
//!
//! Only the first path segment is searched through enclosing frames; every
//! later segment must be a key of the exact mapping found for the previous
//! one. Resolution is pure: it never reports anything, the caller decides.

use fastache_core::Value;

use crate::ident::Identifier;
use crate::scope::ScopeChain;

/// Resolution failed at segment `failed_at` (0-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotFound {
    pub failed_at: usize,
}

impl NotFound {
    /// Whether the path continues past the failing segment.
    pub fn is_intermediate(&self, identifier: &Identifier) -> bool {
        self.failed_at + 1 < identifier.len()
    }
}

pub fn resolve<'v>(
    identifier: &Identifier,
    scopes: &ScopeChain<'v>,
) -> Result<&'v Value, NotFound> {
    let segments = match identifier {
        Identifier::Current => return Ok(scopes.current()),
        Identifier::Path(segments) => segments,
    };
    let Some((first, rest)) = segments.split_first() else {
        return Err(NotFound { failed_at: 0 });
    };
    let mut value = scopes.find(first).ok_or(NotFound { failed_at: 0 })?;
    for (offset, segment) in rest.iter().enumerate() {
        value = value.get(segment).ok_or(NotFound {
            failed_at: offset + 1,
        })?;
    }
    Ok(value)
}
