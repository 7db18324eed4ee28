//! Admin identity for review operations.

use crewline_shared::AdminId;

/// Identity of the admin performing a review operation.
///
/// Every coordinator method takes the context explicitly so the audit
/// trail always records who decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminContext {
    /// The acting admin.
    pub admin_id: AdminId,
}

impl AdminContext {
    /// Creates a context for the given admin.
    #[must_use]
    pub const fn new(admin_id: AdminId) -> Self {
        Self { admin_id }
    }
}
