use std::fmt;

/// How picked files become photo references.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum UploadMode {
    /// Reference the picked file directly.
    #[default]
    Files,
    /// Ignore the file and use the configured placeholder.
    Placeholders,
}

impl UploadMode {
    pub const ALL: &[Self] = &[Self::Files, Self::Placeholders];
}

impl fmt::Display for UploadMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Files => write!(f, "Local files"),
            Self::Placeholders => write!(f, "Placeholders"),
        }
    }
}

/// Overall UI state that is not part of the session.
#[derive(Default)]
pub struct UIState {
    pub upload_mode: UploadMode,

    /// Last validation message shown under the generate button.
    pub notice: Option<String>,

    /// Log messages.
    pub log_messages: Vec<String>,

    pub show_about: bool,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }

    pub fn set_notice(&mut self, msg: impl Into<String>) {
        self.notice = Some(msg.into());
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }
}
