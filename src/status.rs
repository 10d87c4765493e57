#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    Ready,
    InProgress,
    PathFound,
    NoPathExists,
}

impl SearchStatus {
    pub fn is_terminal(self) -> bool {
        match self {
            SearchStatus::PathFound | SearchStatus::NoPathExists => true,
            SearchStatus::Ready | SearchStatus::InProgress => false,
        }
    }
}
