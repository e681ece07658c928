//! Game listing filter state.

use std::collections::{BTreeMap, BTreeSet};
use std::num::NonZeroU32;

use super::api::Game;

/// Filter sections shown in the game listing sidebar.
///
/// The query key of each section is what appears in the URL
/// (`?category=slots&provider=pragmatic`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterSection {
    Category,
    Provider,
    Volatility,
    Feature,
    Theme,
}

impl FilterSection {
    /// Every known section, in sidebar order.
    pub const ALL: [FilterSection; 5] = [
        Self::Category,
        Self::Provider,
        Self::Volatility,
        Self::Feature,
        Self::Theme,
    ];

    /// Query-string key for this section.
    pub fn key(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Provider => "provider",
            Self::Volatility => "volatility",
            Self::Feature => "feature",
            Self::Theme => "theme",
        }
    }

    /// Look up a section by its query key. Unknown keys yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.key() == key)
    }

    /// Sidebar heading.
    pub fn label(self) -> &'static str {
        match self {
            Self::Category => "Category",
            Self::Provider => "Provider",
            Self::Volatility => "Volatility",
            Self::Feature => "Features",
            Self::Theme => "Theme",
        }
    }

    /// Distinct values a catalog offers for this section, sorted.
    pub fn options(self, games: &[Game]) -> Vec<String> {
        games
            .iter()
            .flat_map(|game| self.game_values(game))
            .map(str::to_string)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Values of this section carried by a game.
    fn game_values(self, game: &Game) -> Vec<&str> {
        match self {
            Self::Category => vec![game.category.as_str()],
            Self::Provider => vec![game.provider.as_str()],
            Self::Volatility => game.volatility.as_deref().into_iter().collect(),
            Self::Feature => game.features.iter().map(String::as_str).collect(),
            Self::Theme => game.theme.as_deref().into_iter().collect(),
        }
    }
}

/// Selected filter values plus the pagination cursor of a game listing.
///
/// Sections never map to an empty set: deselecting the last value removes
/// the section entirely.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    selections: BTreeMap<FilterSection, BTreeSet<String>>,
    page: Option<NonZeroU32>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected values of a section, sorted.
    pub fn selected(&self, section: FilterSection) -> impl Iterator<Item = &str> {
        self.selections
            .get(&section)
            .into_iter()
            .flat_map(|values| values.iter().map(String::as_str))
    }

    pub fn is_selected(&self, section: FilterSection, value: &str) -> bool {
        self.selections
            .get(&section)
            .is_some_and(|values| values.contains(value))
    }

    /// Sections with at least one selected value.
    pub fn sections(&self) -> impl Iterator<Item = FilterSection> + '_ {
        self.selections.keys().copied()
    }

    /// Total number of selected values across sections.
    pub fn active_count(&self) -> usize {
        self.selections.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty() && self.page.is_none()
    }

    /// Add a value to a section. Empty values are ignored.
    pub fn select(&mut self, section: FilterSection, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            return;
        }
        if self.selections.entry(section).or_default().insert(value) {
            self.page = None;
        }
    }

    /// Remove a value from a section.
    pub fn deselect(&mut self, section: FilterSection, value: &str) {
        let Some(values) = self.selections.get_mut(&section) else {
            return;
        };
        if values.remove(value) {
            self.page = None;
        }
        if values.is_empty() {
            self.selections.remove(&section);
        }
    }

    /// Flip a value's selection.
    pub fn toggle(&mut self, section: FilterSection, value: &str) {
        if self.is_selected(section, value) {
            self.deselect(section, value);
        } else {
            self.select(section, value);
        }
    }

    pub fn clear_section(&mut self, section: FilterSection) {
        if self.selections.remove(&section).is_some() {
            self.page = None;
        }
    }

    /// Drop every selection and return to the first page.
    pub fn clear(&mut self) {
        self.selections.clear();
        self.page = None;
    }

    /// Current 1-based page.
    pub fn page(&self) -> u32 {
        self.page.map_or(1, NonZeroU32::get)
    }

    /// Explicit pagination cursor, `None` when the URL carries no page.
    pub fn page_cursor(&self) -> Option<NonZeroU32> {
        self.page
    }

    /// Move the cursor. Page `0` resets to the implicit first page.
    pub fn set_page(&mut self, page: u32) {
        self.page = NonZeroU32::new(page);
    }

    /// Whether a game passes every active section.
    ///
    /// Within a section any selected value matches; across sections all
    /// must match.
    pub fn matches(&self, game: &Game) -> bool {
        self.selections.iter().all(|(section, wanted)| {
            section
                .game_values(game)
                .into_iter()
                .any(|value| wanted.contains(value))
        })
    }
}

/// Slice a filtered list down to one listing page.
pub fn paginate<T>(items: &[T], page: u32, page_size: usize) -> &[T] {
    let page = page.max(1) as usize;
    let start = (page - 1).saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Number of pages needed for `total` items (at least one).
pub fn page_count(total: usize, page_size: usize) -> u32 {
    if page_size == 0 {
        return 1;
    }
    total.div_ceil(page_size).max(1) as u32
}
