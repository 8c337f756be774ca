/// Maximum number of entries kept by a [`HistoryBuffer`].
pub const MAX_HISTORY: usize = 50;

/// Bounded log of submitted input lines with a recall cursor.
///
/// The cursor ranges over `0..=len`; `len` is the live edit slot, i.e. the
/// user is typing a fresh line rather than recalling an old one.
#[derive(Debug, Default, Clone)]
pub struct HistoryBuffer {
    /// Entries, oldest first.
    entries: Vec<String>,
    /// Recall position. Equal to `entries.len()` when not recalling.
    cursor: usize,
}

impl HistoryBuffer {
    /// Creates a new empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a confirmed entry and moves the cursor back to the live slot.
    ///
    /// Empty text and repeats of the most recent entry are ignored entirely,
    /// the cursor included. Only the immediate predecessor is compared, older
    /// duplicates are kept.
    pub fn commit(&mut self, text: &str) {
        let repeated = self.entries.last().is_some_and(|last| last == text);
        if !text.is_empty() && !repeated {
            self.entries.push(text.to_string());
            if self.entries.len() > MAX_HISTORY {
                self.entries.remove(0);
            }
            self.cursor = self.entries.len();
        }
    }

    /// Steps back to the previous (older) entry.
    ///
    /// Returns `None` when there is nothing older to show.
    pub fn recall_previous(&mut self) -> Option<&str> {
        if self.entries.is_empty() || self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor).map(String::as_str)
    }

    /// Steps forward to the next (newer) entry.
    ///
    /// Stepping past the newest entry returns `""` and lands on the live slot.
    /// Returns `None` when already at the live slot.
    pub fn recall_next(&mut self) -> Option<&str> {
        let len = self.entries.len();
        if len == 0 || self.cursor >= len {
            return None;
        }
        self.cursor += 1;
        if self.cursor == len {
            Some("")
        } else {
            self.entries.get(self.cursor).map(String::as_str)
        }
    }

    /// Leaves recall mode without touching the entries.
    pub fn reset_cursor(&mut self) {
        self.cursor = self.entries.len();
    }

    /// True while the cursor points at a stored entry.
    pub fn is_recalling(&self) -> bool {
        self.cursor < self.entries.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns a slice of all entries, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history_of(items: &[&str]) -> HistoryBuffer {
        let mut history = HistoryBuffer::new();
        for item in items {
            history.commit(item);
        }
        history
    }

    #[test]
    fn test_commit_appends_in_order() {
        let history = history_of(&["one", "two"]);
        assert_eq!(history.entries(), &["one", "two"]);
        assert_eq!(history.cursor(), 2);
    }

    #[test]
    fn test_commit_empty_ignored() {
        let mut history = history_of(&["one"]);
        history.commit("");
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_commit_adjacent_duplicate_collapsed() {
        let mut history = history_of(&["refresh"]);
        history.commit("refresh");
        assert_eq!(history.entries(), &["refresh"]);
    }

    #[test]
    fn test_commit_non_adjacent_duplicate_kept() {
        let history = history_of(&["refresh", "clear", "refresh"]);
        assert_eq!(history.entries(), &["refresh", "clear", "refresh"]);
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_commit_evicts_oldest() {
        let mut history = HistoryBuffer::new();
        for i in 0..=MAX_HISTORY {
            history.commit(&format!("entry_{i}"));
        }
        assert_eq!(history.len(), MAX_HISTORY);
        assert_eq!(history.entries()[0], "entry_1");
        assert_eq!(history.entries()[MAX_HISTORY - 1], format!("entry_{MAX_HISTORY}"));
    }

    #[test]
    fn test_length_never_exceeds_bound() {
        let mut history = HistoryBuffer::new();
        for i in 0..200 {
            // Repeat every value twice so some commits collapse
            history.commit(&format!("cmd {}", i / 2));
            assert!(history.len() <= MAX_HISTORY);
        }
    }

    #[test]
    fn test_commit_resets_cursor_after_recall() {
        let mut history = history_of(&["a", "b", "c"]);
        history.recall_previous();
        history.recall_previous();
        history.commit("x");
        assert_eq!(history.cursor(), history.len());
        assert!(!history.is_recalling());
    }

    #[test]
    fn test_ignored_commit_keeps_cursor() {
        let mut history = history_of(&["a", "b"]);
        history.recall_previous();
        assert_eq!(history.cursor(), 1);

        history.commit("b");
        assert_eq!(history.cursor(), 1);
        history.commit("");
        assert_eq!(history.cursor(), 1);
        assert_eq!(history.entries(), &["a", "b"]);
    }

    #[test]
    fn test_recall_previous_from_empty() {
        let mut history = HistoryBuffer::new();
        assert_eq!(history.recall_previous(), None);
        assert_eq!(history.cursor(), 0);
    }

    #[test]
    fn test_recall_previous_stops_at_oldest() {
        let mut history = history_of(&["a", "b", "c"]);
        assert_eq!(history.recall_previous(), Some("c"));
        assert_eq!(history.recall_previous(), Some("b"));
        assert_eq!(history.recall_previous(), Some("a"));
        assert_eq!(history.recall_previous(), None);
        assert_eq!(history.cursor(), 0);
    }

    #[test]
    fn test_recall_next_returns_blank_past_newest() {
        let mut history = history_of(&["a", "b"]);
        history.recall_previous();
        history.recall_previous();
        assert_eq!(history.recall_next(), Some("b"));
        assert_eq!(history.recall_next(), Some(""));
        assert!(!history.is_recalling());
        assert_eq!(history.recall_next(), None);
    }

    #[test]
    fn test_recall_next_at_live_slot_is_noop() {
        let mut history = history_of(&["a"]);
        assert_eq!(history.recall_next(), None);
        assert_eq!(history.cursor(), 1);
    }

    #[test]
    fn test_recall_round_trip_restores_position() {
        let mut history = history_of(&["a", "b", "c", "d"]);
        history.recall_previous();
        let start_cursor = history.cursor();
        let start_value = history.entries()[start_cursor].clone();

        for _ in 0..2 {
            history.recall_previous();
        }
        let mut shown = String::new();
        for _ in 0..2 {
            shown = history.recall_next().unwrap_or_default().to_string();
        }

        assert_eq!(history.cursor(), start_cursor);
        assert_eq!(shown, start_value);
    }

    #[test]
    fn test_reset_cursor() {
        let mut history = history_of(&["a", "b"]);
        history.recall_previous();
        history.recall_previous();
        history.reset_cursor();
        assert_eq!(history.recall_previous(), Some("b"));
    }
}
