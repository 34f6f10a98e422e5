use crate::config::UIConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Aviso transitorio (toast)
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
    pub duration_ms: u32,
}

impl Notice {
    pub fn info(message: impl Into<String>, ui: &UIConfig) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Info,
            duration_ms: ui.toast_duration_ms,
        }
    }

    pub fn error(message: impl Into<String>, ui: &UIConfig) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Error,
            duration_ms: ui.error_toast_duration_ms,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

pub trait Notifier {
    fn notify(&self, notice: Notice);
}
