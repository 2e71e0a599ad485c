//! Transient page notices.
//!
//! Notices stack at the top of the page, newest first. Each one can be
//! dismissed by the user or expire on a timer; whichever happens second
//! finds nothing to remove.

use crate::types::NoticeLevel;

/// Identifier handed out by [`NoticeBoard::push`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NoticeId(u64);

/// A single notice.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: NoticeId,
    pub level: NoticeLevel,
    pub message: String,
    /// Timestamp string (HH:MM:SS)
    pub timestamp: String,
}

/// The visible notice stack.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NoticeBoard {
    notices: Vec<Notice>,
    next_id: u64,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a notice on top of the stack.
    pub fn push(&mut self, message: impl Into<String>, level: NoticeLevel) -> NoticeId {
        let id = NoticeId(self.next_id);
        self.next_id += 1;

        self.notices.insert(
            0,
            Notice {
                id,
                level,
                message: message.into(),
                timestamp: chrono::Local::now().format("%H:%M:%S").to_string(),
            },
        );
        id
    }

    /// Remove a notice. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: NoticeId) -> bool {
        let before = self.notices.len();
        self.notices.retain(|notice| notice.id != id);
        self.notices.len() != before
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_notice_first() {
        let mut board = NoticeBoard::new();
        board.push("first", NoticeLevel::Info);
        board.push("second", NoticeLevel::Warning);

        let messages: Vec<_> = board.notices().iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["second", "first"]);
        assert_eq!(board.notices()[0].level, NoticeLevel::Warning);
    }

    #[test]
    fn test_dismiss_is_idempotent() {
        let mut board = NoticeBoard::new();
        let id = board.push("Download the file to listen", NoticeLevel::Info);

        // User closes it, then the timer fires
        assert!(board.dismiss(id));
        assert!(!board.dismiss(id));
        assert!(board.is_empty());
    }

    #[test]
    fn test_dismiss_only_removes_target() {
        let mut board = NoticeBoard::new();
        let keep = board.push("keep", NoticeLevel::Success);
        let drop = board.push("drop", NoticeLevel::Error);

        assert!(board.dismiss(drop));
        assert_eq!(board.notices().len(), 1);
        assert_eq!(board.notices()[0].id, keep);
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut board = NoticeBoard::new();
        let a = board.push("a", NoticeLevel::Info);
        board.dismiss(a);
        let b = board.push("b", NoticeLevel::Info);
        assert_ne!(a, b);
    }

    #[test]
    fn test_timestamp_format() {
        let mut board = NoticeBoard::new();
        board.push("tick", NoticeLevel::Info);
        let timestamp = &board.notices()[0].timestamp;
        assert_eq!(timestamp.len(), 8);
        assert_eq!(timestamp.matches(':').count(), 2);
    }
}
