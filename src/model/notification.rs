/// Visual variant of a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Destructive,
}

/// Transient notification shown by the page that raised it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn error(description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Destructive,
            title: "Ошибка".to_string(),
            description: description.into(),
        }
    }

    /// Raised when an action requiring a session is attempted without one.
    pub fn authentication_required() -> Self {
        Self::error("Необходимо авторизоваться")
    }
}
