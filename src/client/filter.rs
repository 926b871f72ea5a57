use tracing::debug;

pub const ALL_CATEGORIES: &str = "all";
pub const ACTIVE_CLASSES: [&str; 2] = ["active", "btn-success"];
pub const INACTIVE_CLASS: &str = "btn-outline-success";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Category(String),
}

impl CategoryFilter {
    /// A missing key behaves like the `all` sentinel.
    pub fn from_key(key: Option<&str>) -> Self {
        match key {
            None | Some(ALL_CATEGORIES) => Self::All,
            Some(tag) => Self::Category(tag.to_string()),
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Category(tag) => tag,
        }
    }

    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Category(tag) => category == Some(tag.as_str()),
        }
    }
}

/// A filter button on the page.
pub trait FilterControl {
    fn filter_key(&self) -> Option<String>;
    fn set_active(&self, active: bool);
}

/// An item card that can be shown or hidden.
pub trait ItemCard {
    fn category(&self) -> Option<String>;
    fn set_visible(&self, visible: bool);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSummary {
    pub filter: CategoryFilter,
    pub shown: usize,
    pub hidden: usize,
}

/// Marks `clicked` as the only active control and shows exactly the cards the
/// clicked control's filter matches.
pub fn select_filter<C, K>(controls: &[C], clicked: &C, cards: &[K]) -> FilterSummary
where
    C: FilterControl,
    K: ItemCard,
{
    for control in controls {
        control.set_active(false);
    }
    clicked.set_active(true);

    let filter = CategoryFilter::from_key(clicked.filter_key().as_deref());
    let mut shown = 0;
    for card in cards {
        let visible = filter.matches(card.category().as_deref());
        card.set_visible(visible);
        if visible {
            shown += 1;
        }
    }

    let summary = FilterSummary {
        hidden: cards.len() - shown,
        shown,
        filter,
    };
    debug!(filter = summary.filter.key(), shown = summary.shown, hidden = summary.hidden, "filter applied");
    summary
}
