use super::account::AccountId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnershipDecision {
    Allowed,
    Denied,
}

impl OwnershipDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, OwnershipDecision::Allowed)
    }
}

/// Decides whether the acting principal is the owner of the target account.
///
/// The guard has no side effects and never blocks an operation on its own; the
/// withdrawal flow uses it to decide whether the caller's session cookie must be
/// cleared after the account is gone.
#[derive(Debug, Clone, Copy, Default)]
pub struct OwnershipGuard;

impl OwnershipGuard {
    pub fn authorize(acting_principal: &AccountId, target: &AccountId) -> OwnershipDecision {
        if acting_principal == target {
            OwnershipDecision::Allowed
        } else {
            OwnershipDecision::Denied
        }
    }
}
