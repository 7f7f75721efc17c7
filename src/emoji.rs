// src/emoji.rs - Emoji catalog and picker state

/// Number of emoji per row in the picker grid
pub const COLUMNS: usize = 8;

/// A catalog entry: the emoji and space-separated search keywords (first keyword is its name)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmojiEntry {
    pub emoji: &'static str,
    pub keywords: &'static str,
}

impl EmojiEntry {
    const fn new(emoji: &'static str, keywords: &'static str) -> Self {
        Self { emoji, keywords }
    }

    pub fn name(&self) -> &'static str {
        self.keywords.split_whitespace().next().unwrap_or("")
    }

    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty() || self.keywords.contains(&query)
    }
}

pub const CATALOG: &[EmojiEntry] = &[
    // Faces
    EmojiEntry::new("😀", "grinning face smile happy joy"),
    EmojiEntry::new("😂", "joy tears laugh lol funny"),
    EmojiEntry::new("🙂", "slight smile happy"),
    EmojiEntry::new("😉", "wink flirt"),
    EmojiEntry::new("😍", "heart eyes love crush"),
    EmojiEntry::new("🤩", "star struck excited wow"),
    EmojiEntry::new("🤔", "thinking hmm consider"),
    EmojiEntry::new("😎", "sunglasses cool"),
    EmojiEntry::new("😅", "sweat smile relief nervous"),
    EmojiEntry::new("😭", "crying sob sad"),
    EmojiEntry::new("😮", "surprised wow open mouth"),
    EmojiEntry::new("🥳", "party celebrate birthday"),
    EmojiEntry::new("😴", "sleeping tired zzz"),
    EmojiEntry::new("🤯", "mind blown exploding head shocked"),
    EmojiEntry::new("🙃", "upside down silly irony"),
    EmojiEntry::new("😇", "innocent halo angel"),
    // Hands and people
    EmojiEntry::new("👍", "thumbs up like yes approve"),
    EmojiEntry::new("👎", "thumbs down dislike no"),
    EmojiEntry::new("👏", "clap applause congrats"),
    EmojiEntry::new("🙌", "raised hands celebrate hooray"),
    EmojiEntry::new("🙏", "pray thanks please grateful"),
    EmojiEntry::new("👋", "wave hello hi bye"),
    EmojiEntry::new("🤝", "handshake deal agreement partner"),
    EmojiEntry::new("💪", "muscle strong flex strength"),
    EmojiEntry::new("👉", "point right next"),
    EmojiEntry::new("👇", "point down below"),
    EmojiEntry::new("✌️", "victory peace"),
    EmojiEntry::new("🫶", "heart hands love support"),
    // Hearts and symbols
    EmojiEntry::new("❤️", "red heart love"),
    EmojiEntry::new("💙", "blue heart love"),
    EmojiEntry::new("💚", "green heart love"),
    EmojiEntry::new("💜", "purple heart love"),
    EmojiEntry::new("🔥", "fire hot lit trending"),
    EmojiEntry::new("✨", "sparkles shiny new magic"),
    EmojiEntry::new("⭐", "star favorite"),
    EmojiEntry::new("💯", "hundred perfect score"),
    EmojiEntry::new("✅", "check done yes complete"),
    EmojiEntry::new("❌", "cross no wrong cancel"),
    EmojiEntry::new("⚠️", "warning caution alert"),
    EmojiEntry::new("❓", "question ask help"),
    EmojiEntry::new("❗", "exclamation important alert"),
    EmojiEntry::new("➡️", "arrow right next"),
    EmojiEntry::new("⬆️", "arrow up increase"),
    EmojiEntry::new("⬇️", "arrow down decrease"),
    // Work and tech
    EmojiEntry::new("🚀", "rocket launch ship startup"),
    EmojiEntry::new("🎉", "tada party celebrate congrats"),
    EmojiEntry::new("🎯", "target goal bullseye focus"),
    EmojiEntry::new("💡", "bulb idea tip insight"),
    EmojiEntry::new("📈", "chart up growth increase"),
    EmojiEntry::new("📉", "chart down decline decrease"),
    EmojiEntry::new("📊", "bar chart stats data"),
    EmojiEntry::new("📌", "pin pushpin important"),
    EmojiEntry::new("📣", "megaphone announce announcement"),
    EmojiEntry::new("📢", "loudspeaker announce news"),
    EmojiEntry::new("📝", "memo note write"),
    EmojiEntry::new("📅", "calendar date schedule event"),
    EmojiEntry::new("⏰", "alarm clock time deadline"),
    EmojiEntry::new("💼", "briefcase work job business"),
    EmojiEntry::new("💻", "laptop computer code work"),
    EmojiEntry::new("🛠️", "tools build fix hammer wrench"),
    EmojiEntry::new("🔗", "link chain url"),
    EmojiEntry::new("🔒", "lock secure private security"),
    EmojiEntry::new("🧠", "brain smart think learn"),
    EmojiEntry::new("📚", "books read learn study"),
    EmojiEntry::new("🎓", "graduation cap degree school"),
    EmojiEntry::new("🏆", "trophy win award champion"),
    EmojiEntry::new("🥇", "gold medal first winner"),
    EmojiEntry::new("💰", "money bag rich cash"),
    // Nature and misc
    EmojiEntry::new("🌍", "globe earth world international"),
    EmojiEntry::new("☀️", "sun sunny weather"),
    EmojiEntry::new("🌈", "rainbow pride colorful"),
    EmojiEntry::new("🌱", "seedling grow growth plant start"),
    EmojiEntry::new("☕", "coffee hot drink morning"),
    EmojiEntry::new("🍕", "pizza food"),
    EmojiEntry::new("🎵", "music note song"),
    EmojiEntry::new("📷", "camera photo picture"),
    EmojiEntry::new("🎁", "gift present surprise"),
    EmojiEntry::new("👀", "eyes look watching"),
];

/// State of the emoji picker overlay
#[derive(Debug, Clone)]
pub struct EmojiPickerState {
    pub query: String,
    pub filtered: Vec<EmojiEntry>,
    pub selected_index: usize,
    /// First visible grid row
    pub scroll_row: usize,
}

impl Default for EmojiPickerState {
    fn default() -> Self {
        Self::new()
    }
}

impl EmojiPickerState {
    pub fn new() -> Self {
        Self::with_query("")
    }

    pub fn with_query(query: &str) -> Self {
        let mut state = Self {
            query: query.to_string(),
            filtered: Vec::new(),
            selected_index: 0,
            scroll_row: 0,
        };
        state.update_filter();
        state
    }

    pub fn update_filter(&mut self) {
        self.filtered = CATALOG
            .iter()
            .filter(|entry| entry.matches(&self.query))
            .copied()
            .collect();
        self.selected_index = 0;
        self.scroll_row = 0;
    }

    pub fn push_query(&mut self, c: char) {
        self.query.push(c);
        self.update_filter();
    }

    pub fn pop_query(&mut self) {
        self.query.pop();
        self.update_filter();
    }

    pub fn selected(&self) -> Option<&EmojiEntry> {
        self.filtered.get(self.selected_index)
    }

    pub fn move_right(&mut self) {
        if self.selected_index + 1 < self.filtered.len() {
            self.selected_index += 1;
        }
    }

    pub fn move_left(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        let target = self.selected_index + COLUMNS;
        if target < self.filtered.len() {
            self.selected_index = target;
        }
    }

    pub fn move_up(&mut self) {
        if self.selected_index >= COLUMNS {
            self.selected_index -= COLUMNS;
        }
    }

    pub fn row_count(&self) -> usize {
        self.filtered.len().div_ceil(COLUMNS)
    }

    /// Keep the selected row within `visible_rows` rows starting at `scroll_row`
    pub fn scroll_into_view(&mut self, visible_rows: usize) {
        let row = self.selected_index / COLUMNS;
        if row < self.scroll_row {
            self.scroll_row = row;
        } else if visible_rows > 0 && row >= self.scroll_row + visible_rows {
            self.scroll_row = row + 1 - visible_rows;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_well_formed() {
        assert!(CATALOG.len() > COLUMNS * 4);
        for entry in CATALOG {
            assert!(!entry.emoji.is_empty());
            assert!(!entry.name().is_empty());
            assert_eq!(entry.keywords, entry.keywords.to_lowercase());
        }
    }

    #[test]
    fn test_empty_query_shows_everything() {
        let state = EmojiPickerState::new();
        assert_eq!(state.filtered.len(), CATALOG.len());
        assert_eq!(state.selected().unwrap().emoji, CATALOG[0].emoji);
    }

    #[test]
    fn test_filter_by_keyword() {
        let state = EmojiPickerState::with_query("Rocket");
        assert_eq!(state.filtered.len(), 1);
        assert_eq!(state.selected().unwrap().emoji, "🚀");

        let hearts = EmojiPickerState::with_query("heart");
        assert!(hearts.filtered.len() > 3);
        assert!(hearts.filtered.iter().all(|e| e.keywords.contains("heart")));
    }

    #[test]
    fn test_no_match() {
        let state = EmojiPickerState::with_query("zzzzqqq");
        assert!(state.filtered.is_empty());
        assert!(state.selected().is_none());
        assert_eq!(state.row_count(), 0);
    }

    #[test]
    fn test_query_editing_resets_selection() {
        let mut state = EmojiPickerState::new();
        state.move_right();
        state.move_down();
        assert_eq!(state.selected_index, COLUMNS + 1);
        state.push_query('f');
        assert_eq!(state.selected_index, 0);
        state.pop_query();
        assert_eq!(state.query, "");
        assert_eq!(state.filtered.len(), CATALOG.len());
    }

    #[test]
    fn test_grid_navigation_stays_in_bounds() {
        let mut state = EmojiPickerState::new();
        state.move_left();
        state.move_up();
        assert_eq!(state.selected_index, 0);

        for _ in 0..CATALOG.len() * 2 {
            state.move_right();
        }
        assert_eq!(state.selected_index, CATALOG.len() - 1);
        state.move_down();
        assert_eq!(state.selected_index, CATALOG.len() - 1);
        state.move_up();
        assert_eq!(state.selected_index, CATALOG.len() - 1 - COLUMNS);
    }

    #[test]
    fn test_scroll_into_view() {
        let mut state = EmojiPickerState::new();
        for _ in 0..4 {
            state.move_down();
        }
        state.scroll_into_view(2);
        assert_eq!(state.scroll_row, 3);
        state.move_up();
        state.move_up();
        state.move_up();
        state.scroll_into_view(2);
        assert_eq!(state.scroll_row, 1);
    }
}
