use url::Url;

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Manifest fetched and decoded. `location` is the page URL at that time.
    ManifestLoaded {
        manifest: crate::Manifest,
        location: Url,
    },
    /// Manifest could not be fetched or decoded.
    LoadFailed { reason: String },
    /// User picked a category in the navigation.
    CategoryClicked(String),
    /// User clicked the previous-page button.
    PrevPageClicked,
    /// User clicked the next-page button.
    NextPageClicked,
    /// Browser back/forward restored another history entry.
    HistoryPopped {
        state: Option<crate::HistoryState>,
        location: Url,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}
