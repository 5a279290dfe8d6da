/// An append-only list of visited locations plus a cursor pointing at the
/// entry currently on screen. Duplicates are allowed; repeated visits to the
/// same address each produce a new entry.
pub struct History {
    entries: Vec<String>,
    cursor: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        History {
            entries: Vec::new(),
            cursor: None,
        }
    }

    /// Appends a visit and moves the cursor to it.
    pub fn record(&mut self, location: String) {
        self.entries.push(location);
        self.cursor = Some(self.entries.len() - 1);
    }

    pub fn can_go_back(&self) -> bool {
        matches!(self.cursor, Some(i) if i > 0)
    }

    /// Steps the cursor back one entry. No-op (returns None) at the first
    /// entry or when the history is empty.
    pub fn back(&mut self) -> Option<&str> {
        match self.cursor {
            Some(i) if i > 0 => {
                self.cursor = Some(i - 1);
                self.entries.get(i - 1).map(String::as_str)
            }
            _ => None,
        }
    }

    pub fn can_go_forward(&self) -> bool {
        matches!(self.cursor, Some(i) if i + 1 < self.entries.len())
    }

    /// Steps the cursor forward one entry. No-op (returns None) at the last
    /// entry or when the history is empty.
    pub fn forward(&mut self) -> Option<&str> {
        match self.cursor {
            Some(i) if i + 1 < self.entries.len() => {
                self.cursor = Some(i + 1);
                self.entries.get(i + 1).map(String::as_str)
            }
            _ => None,
        }
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// History plus the pending-navigation flag, kept free of any toolkit types
/// so the replay semantics can be tested on their own.
///
/// A completed page load is recorded as a new entry only when it was the
/// result of direct navigation. Back and forward clear the flag before
/// requesting their target, so the replayed load (or help-screen display)
/// leaves the list untouched.
pub struct Navigator {
    history: History,
    record_next: bool,
}

impl Navigator {
    pub fn new() -> Self {
        Navigator {
            history: History::new(),
            record_next: true,
        }
    }

    /// Called when a location has finished displaying, whether a page load
    /// reported by the engine or the help screen. Records the visit unless
    /// it was a back/forward replay, and re-arms the flag either way.
    /// Returns whether the visit was recorded.
    pub fn page_loaded(&mut self, location: &str) -> bool {
        let recorded = self.record_next;
        if recorded {
            self.history.record(location.to_string());
        }
        self.record_next = true;
        recorded
    }

    /// Steps back and returns the target location, or None if there is
    /// nothing behind the cursor. The caller decides how to display the
    /// target; the upcoming completion will not be recorded.
    pub fn back(&mut self) -> Option<String> {
        let target = self.history.back()?.to_string();
        self.record_next = false;
        Some(target)
    }

    /// Symmetric to `back`.
    pub fn forward(&mut self) -> Option<String> {
        let target = self.history.forward()?.to_string();
        self.record_next = false;
        Some(target)
    }

    pub fn history(&self) -> &History {
        &self.history
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::location::HELP_URI;

    #[test]
    pub fn test_record_moves_cursor_to_last() {
        let mut history = History::new();
        assert_eq!(history.cursor(), None);
        for n in 1..=5 {
            history.record(format!("http://www.example.com/{}", n));
            assert_eq!(history.len(), n);
            assert_eq!(history.cursor(), Some(n - 1));
        }
    }

    #[test]
    pub fn test_back_then_forward_restores_position() {
        let mut history = History::new();
        history.record("http://www.one.com".to_string());
        history.record("http://www.two.com".to_string());
        let before = history.cursor();

        assert_eq!(history.back(), Some("http://www.one.com"));
        assert_eq!(history.forward(), Some("http://www.two.com"));
        assert_eq!(history.cursor(), before);
    }

    #[test]
    pub fn test_back_at_first_entry_is_noop() {
        let mut history = History::new();
        assert_eq!(history.back(), None);

        history.record("http://www.example.com".to_string());
        assert_eq!(history.back(), None);
        assert_eq!(history.cursor(), Some(0));
        assert_eq!(history.len(), 1);
    }

    #[test]
    pub fn test_forward_at_last_entry_is_noop() {
        let mut history = History::new();
        assert_eq!(history.forward(), None);

        history.record("http://www.example.com".to_string());
        assert_eq!(history.forward(), None);
        assert_eq!(history.cursor(), Some(0));
    }

    #[test]
    pub fn test_duplicate_visits_each_get_an_entry() {
        let mut history = History::new();
        history.record("http://www.example.com".to_string());
        history.record("http://www.example.com".to_string());
        assert_eq!(history.len(), 2);
        assert_eq!(history.cursor(), Some(1));
    }

    #[test]
    pub fn test_direct_navigation_is_recorded() {
        let mut nav = Navigator::new();
        assert!(nav.page_loaded("http://www.example.com"));
        assert_eq!(nav.history().len(), 1);
        assert_eq!(nav.history().cursor(), Some(0));
    }

    #[test]
    pub fn test_replayed_load_is_not_recorded() {
        let mut nav = Navigator::new();
        nav.page_loaded("http://www.one.com");
        nav.page_loaded("http://www.two.com");

        let target = nav.back().unwrap();
        assert_eq!(target, "http://www.one.com");

        // The engine finishes loading the replayed entry.
        assert!(!nav.page_loaded(&target));
        assert_eq!(nav.history().len(), 2);
        assert_eq!(nav.history().cursor(), Some(0));

        // The flag is re-armed afterwards.
        assert!(nav.page_loaded("http://www.three.com"));
        assert_eq!(nav.history().len(), 3);
    }

    #[test]
    pub fn test_back_across_help_returns_previous_address() {
        let mut nav = Navigator::new();
        nav.page_loaded("http://www.example.com");
        nav.page_loaded(HELP_URI);

        assert_eq!(nav.back(), Some("http://www.example.com".to_string()));
        assert!(!nav.page_loaded("http://www.example.com"));
        assert_eq!(nav.history().len(), 2);
    }

    #[test]
    pub fn test_help_replay_does_not_duplicate_entry() {
        let mut nav = Navigator::new();
        nav.page_loaded(HELP_URI);
        nav.page_loaded("http://www.example.com");

        assert_eq!(nav.back(), Some(HELP_URI.to_string()));
        // The help view re-enters through page_loaded, like any display.
        assert!(!nav.page_loaded(HELP_URI));
        assert_eq!(nav.history().len(), 2);

        assert_eq!(nav.forward(), Some("http://www.example.com".to_string()));
    }

    #[test]
    pub fn test_back_with_empty_history_is_noop() {
        let mut nav = Navigator::new();
        assert_eq!(nav.back(), None);
        assert_eq!(nav.forward(), None);
        // A no-op must not disarm recording.
        assert!(nav.page_loaded("http://www.example.com"));
    }
}
