//! HTTP boundary: one audit endpoint plus a health check

pub mod error;
pub mod handlers;
pub mod router;

pub use router::build_router;

use std::sync::Arc;

use crate::audit::Auditor;
use crate::client::AuditProvider;

/// Shared state handed to every handler
pub struct AppState<P: AuditProvider> {
    pub auditor: Arc<Auditor<P>>,
}

// Manual impl: a derive would require `P: Clone`
impl<P: AuditProvider> Clone for AppState<P> {
    fn clone(&self) -> Self {
        Self {
            auditor: Arc::clone(&self.auditor),
        }
    }
}
