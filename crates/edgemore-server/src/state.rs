use std::sync::Arc;

use edgemore_mail::mailer::SmtpMailer;

/// Shared application state, injected into route handlers via Axum state.
///
/// Read-only after startup; requests share nothing else.
#[derive(Clone)]
pub struct AppState {
    pub mailer: Arc<SmtpMailer>,
}

impl AppState {
    pub fn new(mailer: SmtpMailer) -> Self {
        Self {
            mailer: Arc::new(mailer),
        }
    }
}
