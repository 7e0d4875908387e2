//! In-memory stand-in for the browser session history.

use gallery_core::HistoryState;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRecord {
    pub url: Url,
    pub state: Option<HistoryState>,
}

/// Entries plus a cursor; pushing drops everything ahead of the cursor.
#[derive(Debug, Clone)]
pub struct BrowserHistory {
    entries: Vec<HistoryRecord>,
    index: usize,
}

impl BrowserHistory {
    pub fn new(url: Url) -> Self {
        Self {
            entries: vec![HistoryRecord { url, state: None }],
            index: 0,
        }
    }

    pub fn current(&self) -> &HistoryRecord {
        &self.entries[self.index]
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    pub fn push(&mut self, state: HistoryState, url: Url) {
        self.entries.truncate(self.index + 1);
        self.entries.push(HistoryRecord {
            url,
            state: Some(state),
        });
        self.index = self.entries.len() - 1;
    }

    pub fn replace(&mut self, state: HistoryState, url: Url) {
        self.entries[self.index] = HistoryRecord {
            url,
            state: Some(state),
        };
    }

    /// Step back; `None` at the oldest entry.
    pub fn back(&mut self) -> Option<HistoryRecord> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        Some(self.current().clone())
    }

    /// Step forward; `None` at the newest entry.
    pub fn forward(&mut self) -> Option<HistoryRecord> {
        if self.index + 1 >= self.entries.len() {
            return None;
        }
        self.index += 1;
        Some(self.current().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(raw: &str) -> Url {
        Url::parse(raw).unwrap()
    }

    #[test]
    fn replace_keeps_length() {
        let mut history = BrowserHistory::new(url("https://x.test/"));
        history.replace(HistoryState::new("a"), url("https://x.test/?category=a"));
        assert_eq!(history.depth(), 1);
        assert_eq!(history.current().state, Some(HistoryState::new("a")));
        assert_eq!(history.back(), None);
        assert_eq!(history.forward(), None);
    }

    #[test]
    fn back_and_forward_walk_entries() {
        let mut history = BrowserHistory::new(url("https://x.test/?category=a"));
        history.push(HistoryState::new("b"), url("https://x.test/?category=b"));
        history.push(HistoryState::new("c"), url("https://x.test/?category=c"));

        let popped = history.back().unwrap();
        assert_eq!(popped.state, Some(HistoryState::new("b")));
        let popped = history.back().unwrap();
        assert_eq!(popped.state, None);
        assert_eq!(popped.url.as_str(), "https://x.test/?category=a");
        assert_eq!(history.back(), None);

        let popped = history.forward().unwrap();
        assert_eq!(popped.state, Some(HistoryState::new("b")));
    }

    #[test]
    fn push_discards_forward_entries() {
        let mut history = BrowserHistory::new(url("https://x.test/"));
        history.push(HistoryState::new("b"), url("https://x.test/?category=b"));
        history.push(HistoryState::new("c"), url("https://x.test/?category=c"));
        history.back();
        history.push(HistoryState::new("d"), url("https://x.test/?category=d"));

        assert_eq!(history.depth(), 3);
        assert_eq!(history.forward(), None);
        assert_eq!(history.current().url.as_str(), "https://x.test/?category=d");
    }
}
