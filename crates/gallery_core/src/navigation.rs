//! Two-way binding between the selected category and the page URL / history.
//!
//! The selected slug lives in the `category` query parameter and in the
//! history entry state. Nothing here touches a real browser; the host applies
//! the produced [`HistoryEntry`] values and reports pops back.

use url::Url;

use crate::Effect;

pub const CATEGORY_PARAM: &str = "category";

/// State object stored with each history entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryState {
    pub category: String,
}

impl HistoryState {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryMode {
    /// New entry, reachable with back.
    Push,
    /// Rewrite the current entry in place.
    Replace,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub mode: HistoryMode,
    pub state: HistoryState,
    pub url: Url,
}

impl From<HistoryEntry> for Effect {
    fn from(entry: HistoryEntry) -> Self {
        match entry.mode {
            HistoryMode::Push => Effect::PushHistory {
                state: entry.state,
                url: entry.url,
            },
            HistoryMode::Replace => Effect::ReplaceHistory {
                state: entry.state,
                url: entry.url,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationSync {
    location: Url,
}

impl NavigationSync {
    pub fn new(location: Url) -> Self {
        Self { location }
    }

    /// Page URL as last written or restored.
    pub fn location(&self) -> &Url {
        &self.location
    }

    /// Slug named by the current URL, if any.
    pub fn requested_slug(&self) -> Option<String> {
        slug_from_location(&self.location)
    }

    /// Write `slug` into the URL and describe the history entry to create.
    pub fn record(&mut self, slug: &str, mode: HistoryMode) -> HistoryEntry {
        self.location = location_with_category(&self.location, slug);
        HistoryEntry {
            mode,
            state: HistoryState::new(slug),
            url: self.location.clone(),
        }
    }

    /// Adopt the URL restored by back/forward and return the slug it names.
    ///
    /// The entry state wins; without one the URL is parsed instead.
    pub fn restore(&mut self, state: Option<&HistoryState>, location: Url) -> Option<String> {
        self.location = location;
        state
            .map(|s| s.category.clone())
            .filter(|slug| !slug.is_empty())
            .or_else(|| self.requested_slug())
    }
}

/// Non-empty value of the `category` query parameter.
pub fn slug_from_location(location: &Url) -> Option<String> {
    query_param(location, CATEGORY_PARAM)
}

/// Non-empty value of the first `name` query parameter.
pub fn query_param(location: &Url, name: &str) -> Option<String> {
    location
        .query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// `location` with `category=<slug>`: the first existing occurrence is
/// replaced and later ones dropped, otherwise the pair is appended.
pub fn location_with_category(location: &Url, slug: &str) -> Url {
    let mut pairs: Vec<(String, String)> = Vec::new();
    let mut replaced = false;
    for (key, value) in location.query_pairs() {
        if key == CATEGORY_PARAM {
            if !replaced {
                pairs.push((key.into_owned(), slug.to_string()));
                replaced = true;
            }
        } else {
            pairs.push((key.into_owned(), value.into_owned()));
        }
    }
    if !replaced {
        pairs.push((CATEGORY_PARAM.to_string(), slug.to_string()));
    }

    let mut url = location.clone();
    url.query_pairs_mut().clear().extend_pairs(pairs);
    url
}
