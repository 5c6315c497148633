/// Requests the presentation layer sends to the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterCommand {
    AddMember { name: String, post: String },
    RecordAttendance { names: Vec<String>, is_present: bool },
    ResetBlacklist { name: String },
    DeleteMember { name: String },
    EditMember { old_name: String, new_name: String, new_post: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

/// One line of feedback for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Success, text: text.into() }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Warning, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, text: text.into() }
    }
}
