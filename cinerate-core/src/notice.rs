//! The shared user-facing message region.

/// Which condition a notice reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Genre selection limit reached or violated.
    SelectionLimit,
    /// Not enough movies rated yet.
    RatingShortfall,
    /// Manual search failed.
    SearchFailure,
}

/// A message occupying the shared region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    SelectionLimit(String),
    RatingShortfall(String),
    SearchFailure(String),
}

impl Notice {
    pub fn kind(&self) -> NoticeKind {
        match self {
            Notice::SelectionLimit(_) => NoticeKind::SelectionLimit,
            Notice::RatingShortfall(_) => NoticeKind::RatingShortfall,
            Notice::SearchFailure(_) => NoticeKind::SearchFailure,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Notice::SelectionLimit(text)
            | Notice::RatingShortfall(text)
            | Notice::SearchFailure(text) => text,
        }
    }
}

/// The single message region every warning shares.
///
/// Occupancy is mutually exclusive: showing a notice replaces whatever was
/// displayed. Each producer clears its own kind once its condition
/// resolves, and never someone else's.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageRegion {
    current: Option<Notice>,
}

impl MessageRegion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, notice: Notice) {
        self.current = Some(notice);
    }

    /// Clear the region, but only when it currently shows `kind`.
    pub fn resolve(&mut self, kind: NoticeKind) {
        if self.current.as_ref().is_some_and(|n| n.kind() == kind) {
            self.current = None;
        }
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }
}
