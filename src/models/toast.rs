use serde::{Deserialize, Serialize};

pub const TOAST_BOTTOM: &str = "toast-bottom";

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Warning,
}

/// User-visible notification emitted by a screen action
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, utoipa::ToSchema)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub position: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
            position: TOAST_BOTTOM.to_string(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Warning,
            message: message.into(),
            position: TOAST_BOTTOM.to_string(),
        }
    }
}
