/// What happens when the cursor is pushed past an end of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeBehavior {
    /// Stay on the boundary item.
    Clamp,
    /// Hand control back to the owner of the level; navigation returns
    /// `None` and the owner decides where focus goes.
    Escape,
}

/// An ordered list of selectable items with a cursor.
///
/// The cursor is always in `[0, len)` while the list is non-empty.
/// Navigation never wraps: each end either clamps or escapes to the owner.
pub struct MenuLevel<T> {
    items: Vec<T>,
    cursor: usize,
    top_edge: EdgeBehavior,
    bottom_edge: EdgeBehavior,
}

impl<T> MenuLevel<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            cursor: 0,
            top_edge: EdgeBehavior::Clamp,
            bottom_edge: EdgeBehavior::Clamp,
        }
    }

    pub fn with_top_edge(mut self, behavior: EdgeBehavior) -> Self {
        self.top_edge = behavior;
        self
    }

    pub fn with_bottom_edge(mut self, behavior: EdgeBehavior) -> Self {
        self.bottom_edge = behavior;
        self
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current(&self) -> Option<&T> {
        self.items.get(self.cursor)
    }

    pub fn current_mut(&mut self) -> Option<&mut T> {
        self.items.get_mut(self.cursor)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn advance(&mut self) -> Option<&T> {
        if self.items.is_empty() {
            return None;
        }
        if self.cursor + 1 < self.items.len() {
            self.cursor += 1;
            return self.current();
        }
        match self.bottom_edge {
            EdgeBehavior::Clamp => self.current(),
            EdgeBehavior::Escape => None,
        }
    }

    pub fn retreat(&mut self) -> Option<&T> {
        if self.items.is_empty() {
            return None;
        }
        if self.cursor > 0 {
            self.cursor -= 1;
            return self.current();
        }
        match self.top_edge {
            EdgeBehavior::Clamp => self.current(),
            EdgeBehavior::Escape => None,
        }
    }

    /// Drop every item `keep` rejects. The cursor is clamped back into
    /// range; callers must check `is_empty` and transition away themselves.
    pub fn retain(&mut self, keep: impl FnMut(&T) -> bool) {
        self.items.retain(keep);
        if self.cursor >= self.items.len() {
            self.cursor = self.items.len().saturating_sub(1);
        }
    }
}

/// The user's decision for one misspelling. `NoAction` leaves the word
/// as-is on commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserChoice {
    NoAction,
    AcceptSuggestion(String),
    IgnoreForSession,
    AddToPersonalDictionary,
}

/// A flagged word plus the user's mutable decision about it.
#[derive(Debug, Clone)]
pub struct Misspelling {
    word: String,
    suggestions: Option<Vec<String>>,
    choice: UserChoice,
}

impl Misspelling {
    pub fn new(word: &str) -> Self {
        Self {
            word: word.to_string(),
            suggestions: None,
            choice: UserChoice::NoAction,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn choice(&self) -> &UserChoice {
        &self.choice
    }

    /// Announcement text for the recorded choice, if any.
    pub fn description(&self) -> Option<String> {
        match &self.choice {
            UserChoice::NoAction => None,
            UserChoice::AcceptSuggestion(text) => Some(format!("accepted: {text}")),
            UserChoice::IgnoreForSession => Some("ignored for this session".to_string()),
            UserChoice::AddToPersonalDictionary => {
                Some("added to personal dictionary".to_string())
            }
        }
    }
}

/// One entry of the suggestion level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionEntry {
    /// Disabled placeholder shown when the engine produced nothing.
    NoSuggestions,
    Suggestion(String),
    IgnoreForSession,
    AddToPersonalDictionary,
}

impl SuggestionEntry {
    pub fn label(&self) -> &str {
        match self {
            SuggestionEntry::NoSuggestions => "No suggestions",
            SuggestionEntry::Suggestion(text) => text,
            SuggestionEntry::IgnoreForSession => "Ignore for this session",
            SuggestionEntry::AddToPersonalDictionary => "Add to personal dictionary",
        }
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self, SuggestionEntry::NoSuggestions)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuFocus {
    Misspellings,
    Suggestions,
    Dismissed,
}

/// What the host should announce after a navigation or commit step.
/// Indices are 1-based, ready for "item 1 of 2" phrasing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEvent {
    FocusedMisspelling {
        word: String,
        description: Option<String>,
        index: usize,
        count: usize,
    },
    FocusedSuggestion {
        label: String,
        enabled: bool,
        index: usize,
        count: usize,
    },
    ChoiceMade {
        word: String,
        choice: UserChoice,
    },
    Dismissed,
}

/// Two-level menu over the live misspellings of one session.
///
/// Level one lists misspellings; entering an item builds level two with the
/// engine's suggestions plus the fixed trailing entries. The suggestion
/// level escapes at its top edge back to the misspelling level; every other
/// edge clamps.
pub struct SpellMenu {
    misspellings: MenuLevel<Misspelling>,
    suggestions: Option<MenuLevel<SuggestionEntry>>,
    focus: MenuFocus,
}

impl SpellMenu {
    pub fn new(misspellings: Vec<Misspelling>) -> Self {
        Self {
            misspellings: MenuLevel::new(misspellings),
            suggestions: None,
            focus: MenuFocus::Misspellings,
        }
    }

    pub fn focus(&self) -> MenuFocus {
        self.focus
    }

    pub fn is_empty(&self) -> bool {
        self.misspellings.is_empty()
    }

    /// The live misspellings, in document order.
    pub fn live(&self) -> impl Iterator<Item = &Misspelling> {
        self.misspellings.items().iter()
    }

    pub fn current_misspelling(&self) -> Option<&Misspelling> {
        self.misspellings.current()
    }

    fn misspelling_event(&self) -> MenuEvent {
        match self.misspellings.current() {
            None => MenuEvent::Dismissed,
            Some(item) => MenuEvent::FocusedMisspelling {
                word: item.word.clone(),
                description: item.description(),
                index: self.misspellings.cursor() + 1,
                count: self.misspellings.len(),
            },
        }
    }

    fn suggestion_event(&self) -> MenuEvent {
        let level = match &self.suggestions {
            None => return MenuEvent::Dismissed,
            Some(level) => level,
        };
        match level.current() {
            None => MenuEvent::Dismissed,
            Some(entry) => MenuEvent::FocusedSuggestion {
                label: entry.label().to_string(),
                enabled: entry.is_enabled(),
                index: level.cursor() + 1,
                count: level.len(),
            },
        }
    }

    pub fn next(&mut self) -> MenuEvent {
        match self.focus {
            MenuFocus::Misspellings => {
                self.misspellings.advance();
                self.misspelling_event()
            }
            MenuFocus::Suggestions => {
                if let Some(level) = &mut self.suggestions {
                    level.advance();
                }
                self.suggestion_event()
            }
            MenuFocus::Dismissed => MenuEvent::Dismissed,
        }
    }

    pub fn prev(&mut self) -> MenuEvent {
        match self.focus {
            MenuFocus::Misspellings => {
                self.misspellings.retreat();
                self.misspelling_event()
            }
            MenuFocus::Suggestions => {
                let escaped = match &mut self.suggestions {
                    None => return MenuEvent::Dismissed,
                    Some(level) => level.retreat().is_none(),
                };
                if escaped {
                    // Top edge of the suggestion level: back to the parent
                    return self.leave_suggestions();
                }
                self.suggestion_event()
            }
            MenuFocus::Dismissed => MenuEvent::Dismissed,
        }
    }

    /// Open the suggestion level for the current misspelling. `suggest` is
    /// only called the first time this misspelling is entered; the result
    /// is cached on the item.
    pub fn enter_suggestions(
        &mut self,
        suggest: impl FnOnce(&str) -> Vec<String>,
    ) -> MenuEvent {
        if self.focus != MenuFocus::Misspellings {
            return self.event_for_focus();
        }
        let item = match self.misspellings.current_mut() {
            None => return MenuEvent::Dismissed,
            Some(item) => item,
        };
        if item.suggestions.is_none() {
            item.suggestions = Some(suggest(&item.word));
        }
        let cached = item
            .suggestions
            .as_ref()
            .expect("suggestions were just cached");
        let mut entries = Vec::new();
        if cached.is_empty() {
            entries.push(SuggestionEntry::NoSuggestions);
        } else {
            entries.extend(cached.iter().cloned().map(SuggestionEntry::Suggestion));
        }
        entries.push(SuggestionEntry::IgnoreForSession);
        entries.push(SuggestionEntry::AddToPersonalDictionary);

        self.suggestions =
            Some(MenuLevel::new(entries).with_top_edge(EdgeBehavior::Escape));
        self.focus = MenuFocus::Suggestions;
        self.suggestion_event()
    }

    pub fn leave_suggestions(&mut self) -> MenuEvent {
        if self.focus == MenuFocus::Suggestions {
            self.suggestions = None;
            self.focus = MenuFocus::Misspellings;
        }
        self.event_for_focus()
    }

    /// Commit the currently focused suggestion entry onto the originating
    /// misspelling.
    ///
    /// Focus returns to the misspelling level, except that ignoring the
    /// last live word dismisses the whole menu. Choosing the disabled
    /// placeholder does nothing.
    pub fn choose_current(&mut self) -> MenuEvent {
        if self.focus != MenuFocus::Suggestions {
            return self.event_for_focus();
        }
        let entry = match self.suggestions.as_ref().and_then(|level| level.current()) {
            None => return MenuEvent::Dismissed,
            Some(entry) => entry.clone(),
        };
        let word = match self.misspellings.current() {
            None => return MenuEvent::Dismissed,
            Some(item) => item.word.clone(),
        };
        let choice = match entry {
            SuggestionEntry::NoSuggestions => return self.suggestion_event(),
            SuggestionEntry::Suggestion(text) => UserChoice::AcceptSuggestion(text),
            SuggestionEntry::IgnoreForSession => UserChoice::IgnoreForSession,
            SuggestionEntry::AddToPersonalDictionary => UserChoice::AddToPersonalDictionary,
        };

        self.suggestions = None;
        self.focus = MenuFocus::Misspellings;

        if choice == UserChoice::IgnoreForSession {
            // Every occurrence of the word form goes away together
            self.misspellings.retain(|m| m.word != word);
            if self.misspellings.is_empty() {
                self.focus = MenuFocus::Dismissed;
            }
        } else if let Some(item) = self.misspellings.current_mut() {
            item.choice = choice.clone();
        }

        MenuEvent::ChoiceMade { word, choice }
    }

    /// Reset the current misspelling to `NoAction` (the "reject choice"
    /// key on the misspelling level).
    pub fn clear_current_choice(&mut self) -> MenuEvent {
        if self.focus == MenuFocus::Misspellings {
            if let Some(item) = self.misspellings.current_mut() {
                item.choice = UserChoice::NoAction;
            }
        }
        self.event_for_focus()
    }

    /// Explicit dismissal; terminal.
    pub fn dismiss(&mut self) -> MenuEvent {
        self.focus = MenuFocus::Dismissed;
        self.suggestions = None;
        MenuEvent::Dismissed
    }

    fn event_for_focus(&self) -> MenuEvent {
        match self.focus {
            MenuFocus::Misspellings => self.misspelling_event(),
            MenuFocus::Suggestions => self.suggestion_event(),
            MenuFocus::Dismissed => MenuEvent::Dismissed,
        }
    }
}
