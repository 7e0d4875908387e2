use url::Url;

use crate::HistoryState;

/// Work the host performs after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Rewrite the current history entry (initial canonical URL).
    ReplaceHistory { state: HistoryState, url: Url },
    /// Add a history entry for a user-initiated category change.
    PushHistory { state: HistoryState, url: Url },
    /// Page changed; bring the top of the gallery into view.
    ScrollToGalleryTop,
}
