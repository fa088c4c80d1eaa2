use serde::Serialize;
use utoipa::ToSchema;

/// Error envelope shared by every route: `{ "ok": false, "err": { "message" } }`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorEnvelope {
    pub ok: bool,
    pub err: ErrorDetail,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorDetail {
    pub message: String,
}

impl ErrorEnvelope {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            err: ErrorDetail {
                message: message.into(),
            },
        }
    }
}
