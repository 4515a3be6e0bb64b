//! Ownership policy applied to every user-owned document.
//!
//! The gate is pure policy: callers fetch (or filter at the query level)
//! and then ask the policy whether the caller may see what came back.

use crate::error::CoreError;
use crate::types::UserId;

/// How an ownership mismatch is reported to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnershipPolicy {
    /// Report a foreign document exactly like a missing one.
    HideExistence,
    /// Report a foreign document as [`CoreError::Forbidden`].
    DistinguishForbidden,
}

/// Policy used by the project service unless overridden.
///
/// Confirming that another user's project exists leaks information, so
/// mismatches are folded into "not found".
pub const OWNERSHIP_POLICY: OwnershipPolicy = OwnershipPolicy::HideExistence;

/// A document with a single owning user.
pub trait Owned {
    fn owner(&self) -> UserId;
}

impl OwnershipPolicy {
    /// Decide what `caller` sees for a fetched document.
    ///
    /// `doc` is the result of a lookup by `id`; `None` means no document.
    pub fn admit<T: Owned>(
        self,
        caller: UserId,
        entity: &'static str,
        id: &str,
        doc: Option<T>,
    ) -> Result<T, CoreError> {
        match doc {
            Some(doc) if doc.owner() == caller => Ok(doc),
            Some(_) => Err(self.mismatch(entity, id)),
            None => Err(CoreError::not_found(entity, id)),
        }
    }

    /// The error for a document that exists but belongs to someone else.
    pub fn mismatch(self, entity: &'static str, id: &str) -> CoreError {
        match self {
            OwnershipPolicy::HideExistence => CoreError::not_found(entity, id),
            OwnershipPolicy::DistinguishForbidden => {
                CoreError::Forbidden(format!("{entity} {id} belongs to another user"))
            }
        }
    }
}

/// Drop every document not owned by `caller`.
///
/// Returns the retained documents and how many were dropped, so a store
/// whose owner filter misbehaved can be reported.
pub fn retain_owned<T: Owned>(caller: UserId, docs: Vec<T>) -> (Vec<T>, usize) {
    let total = docs.len();
    let kept: Vec<T> = docs.into_iter().filter(|d| d.owner() == caller).collect();
    let dropped = total - kept.len();
    (kept, dropped)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use uuid::Uuid;

    use super::*;

    #[derive(Debug)]
    struct Doc(UserId);

    impl Owned for Doc {
        fn owner(&self) -> UserId {
            self.0
        }
    }

    #[test]
    fn owner_is_admitted() {
        let me = Uuid::now_v7();
        let doc = OWNERSHIP_POLICY.admit(me, "Project", "p", Some(Doc(me)));
        assert!(doc.is_ok());
    }

    #[test]
    fn hide_existence_folds_mismatch_into_not_found() {
        let policy = OwnershipPolicy::HideExistence;
        let foreign = policy.admit(Uuid::now_v7(), "Project", "p", Some(Doc(Uuid::now_v7())));
        let missing = policy.admit::<Doc>(Uuid::now_v7(), "Project", "p", None);

        assert_matches!(foreign, Err(CoreError::NotFound { entity: "Project", .. }));
        assert_matches!(missing, Err(CoreError::NotFound { entity: "Project", .. }));
        // Same message, so nothing distinguishes the two cases.
        assert_eq!(
            foreign.err().unwrap().to_string(),
            missing.err().unwrap().to_string()
        );
    }

    #[test]
    fn distinguish_forbidden_reports_mismatch() {
        let policy = OwnershipPolicy::DistinguishForbidden;
        let foreign = policy.admit(Uuid::now_v7(), "Project", "p", Some(Doc(Uuid::now_v7())));
        assert_matches!(foreign, Err(CoreError::Forbidden(_)));

        let missing = policy.admit::<Doc>(Uuid::now_v7(), "Project", "p", None);
        assert_matches!(missing, Err(CoreError::NotFound { .. }));
    }

    #[test]
    fn retain_owned_drops_foreign_documents() {
        let me = Uuid::now_v7();
        let other = Uuid::now_v7();
        let (kept, dropped) = retain_owned(me, vec![Doc(me), Doc(other), Doc(me)]);
        assert_eq!(kept.len(), 2);
        assert_eq!(dropped, 1);
        assert!(kept.iter().all(|d| d.owner() == me));
    }
}
