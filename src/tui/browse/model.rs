//! ProductBrowser model types for testable state management
//!
//! State ([`BrowseState`]) is separate from view ([`BrowseViewModel`]).
//! All transitions go through [`reduce_browse_state`], and key presses are
//! mapped to actions by [`key_to_action`], so the whole interaction can be
//! exercised without the iocraft framework.

use iocraft::prelude::{KeyCode, KeyModifiers};

use crate::catalog::{CatalogLoader, Product};
use crate::error::Result;
use crate::likes::{Clock, LikeTracker, SystemClock};
use crate::tui::components::{
    EmptyStateKind, Shortcut, filter_shortcuts, list_shortcuts, search_shortcuts,
    visible_window,
};
use crate::tui::theme::toggle_label;
use crate::view::{NameOrder, PriceOrder, RatingOrder, ViewController};

// ============================================================================
// State Types
// ============================================================================

/// Which control receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Search,
    Name,
    Price,
    Rating,
    List,
}

impl Focus {
    const ORDER: [Focus; 5] = [
        Focus::Search,
        Focus::Name,
        Focus::Price,
        Focus::Rating,
        Focus::List,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }

    /// The sort control this focus belongs to, if any
    pub fn control(self) -> Option<FilterControl> {
        match self {
            Focus::Name => Some(FilterControl::Name),
            Focus::Price => Some(FilterControl::Price),
            Focus::Rating => Some(FilterControl::Rating),
            Focus::Search | Focus::List => None,
        }
    }
}

/// One of the three sort controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterControl {
    Name,
    Price,
    Rating,
}

impl FilterControl {
    pub const ALL: [FilterControl; 3] = [
        FilterControl::Name,
        FilterControl::Price,
        FilterControl::Rating,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FilterControl::Name => "Name",
            FilterControl::Price => "Price",
            FilterControl::Rating => "Rating",
        }
    }

    pub fn focus(self) -> Focus {
        match self {
            FilterControl::Name => Focus::Name,
            FilterControl::Price => Focus::Price,
            FilterControl::Rating => Focus::Rating,
        }
    }
}

/// Raw state that changes during user interaction
#[derive(Debug, Clone)]
pub struct BrowseState<C: Clock = SystemClock> {
    pub loader: CatalogLoader,
    pub view: ViewController,
    pub likes: LikeTracker<C>,
    pub dark_mode: bool,
    pub focus: Focus,
    pub selected_index: usize,
    pub scroll_offset: usize,
    pub should_exit: bool,
}

impl<C: Clock> BrowseState<C> {
    /// Fresh state: loading, empty filters, search box focused
    pub fn new(loader: CatalogLoader, likes: LikeTracker<C>, dark_mode: bool) -> Self {
        Self {
            loader,
            view: ViewController::new(),
            likes,
            dark_mode,
            focus: Focus::Search,
            selected_index: 0,
            scroll_offset: 0,
            should_exit: false,
        }
    }

    pub fn display_list(&self) -> Vec<&Product> {
        self.view.display_list(self.loader.catalog())
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.display_list().get(self.selected_index).copied()
    }
}

/// Everything that can happen to the browser
#[derive(Debug)]
pub enum BrowseAction {
    // Search
    SearchChanged(String),
    ClearSearch,

    // Focus
    FocusNext,
    FocusPrev,
    FocusSearch,
    FocusList,

    // Sort controls
    CycleOrder {
        control: FilterControl,
        forward: bool,
    },

    // Navigation
    MoveUp,
    MoveDown,
    GoToTop,
    GoToBottom,
    PageUp,
    PageDown,

    // Likes
    LikeSelected,
    ExpireLikes,

    // Theme
    ToggleTheme,
    SetDarkMode(bool),

    // Catalog
    Reload,
    CatalogLoaded(Result<Vec<Product>>),

    Quit,
}

// ============================================================================
// Reducer
// ============================================================================

/// Adjust scroll offset so the selected row is drawn.
///
/// Uses the same window as the list component, so the "more above/below"
/// indicator lines are accounted for.
pub fn adjust_scroll(
    scroll_offset: usize,
    selected_index: usize,
    total: usize,
    list_height: usize,
) -> usize {
    if list_height == 0 || total == 0 {
        return 0;
    }

    let selected_index = selected_index.min(total - 1);
    let mut offset = scroll_offset.min(selected_index);
    while visible_window(offset, total, list_height).1 <= selected_index {
        offset += 1;
    }
    offset
}

fn reset_selection<C: Clock>(state: &mut BrowseState<C>) {
    state.selected_index = 0;
    state.scroll_offset = 0;
}

fn select<C: Clock>(state: &mut BrowseState<C>, index: usize, list_height: usize) {
    let total = state.display_list().len();
    state.selected_index = index;
    state.scroll_offset = adjust_scroll(state.scroll_offset, index, total, list_height);
}

/// Apply `action` to `state` (pure apart from the like clock)
pub fn reduce_browse_state<C: Clock>(
    mut state: BrowseState<C>,
    action: BrowseAction,
    list_height: usize,
) -> BrowseState<C> {
    let count = state.display_list().len();
    let last = count.saturating_sub(1);
    let page = (list_height / 2).max(1);

    match action {
        BrowseAction::SearchChanged(text) => {
            if text != state.view.filters().search_term {
                state.view.set_search(text);
                reset_selection(&mut state);
            }
        }
        BrowseAction::ClearSearch => {
            state.view.set_search("");
            state.focus = Focus::List;
            reset_selection(&mut state);
        }

        BrowseAction::FocusNext => state.focus = state.focus.next(),
        BrowseAction::FocusPrev => state.focus = state.focus.prev(),
        BrowseAction::FocusSearch => state.focus = Focus::Search,
        BrowseAction::FocusList => state.focus = Focus::List,

        BrowseAction::CycleOrder { control, forward } => {
            match control {
                FilterControl::Name => state.view.cycle_name_order(forward),
                FilterControl::Price => state.view.cycle_price_order(forward),
                FilterControl::Rating => state.view.cycle_rating_order(forward),
            }
            reset_selection(&mut state);
        }

        BrowseAction::MoveUp => {
            let index = state.selected_index.saturating_sub(1);
            select(&mut state, index, list_height);
        }
        BrowseAction::MoveDown => {
            let index = (state.selected_index + 1).min(last);
            select(&mut state, index, list_height);
        }
        BrowseAction::GoToTop => select(&mut state, 0, list_height),
        BrowseAction::GoToBottom => select(&mut state, last, list_height),
        BrowseAction::PageUp => {
            let index = state.selected_index.saturating_sub(page);
            select(&mut state, index, list_height);
        }
        BrowseAction::PageDown => {
            let index = (state.selected_index + page).min(last);
            select(&mut state, index, list_height);
        }

        BrowseAction::LikeSelected => {
            if let Some(id) = state.selected_product().map(|p| p.id) {
                state.likes.like(id);
            }
        }
        BrowseAction::ExpireLikes => {
            state.likes.expire();
        }

        BrowseAction::ToggleTheme => state.dark_mode = !state.dark_mode,
        BrowseAction::SetDarkMode(dark) => state.dark_mode = dark,

        BrowseAction::Reload => state.loader.begin(),
        BrowseAction::CatalogLoaded(result) => {
            state.loader.finish(result);
            let count = state.display_list().len();
            if state.selected_index >= count {
                reset_selection(&mut state);
            }
        }

        BrowseAction::Quit => state.should_exit = true,
    }

    state
}

// ============================================================================
// Key mapping
// ============================================================================

/// Convert a key event to a BrowseAction (pure function)
///
/// Characters typed while the search box has focus are handled by the
/// text input itself, so they map to `None` here.
pub fn key_to_action<C: Clock>(
    code: KeyCode,
    modifiers: KeyModifiers,
    state: &BrowseState<C>,
) -> Option<BrowseAction> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('q') | KeyCode::Char('c') => Some(BrowseAction::Quit),
            KeyCode::Char('t') => Some(BrowseAction::ToggleTheme),
            KeyCode::Char('r') => Some(BrowseAction::Reload),
            _ => None,
        };
    }

    match code {
        KeyCode::Tab => return Some(BrowseAction::FocusNext),
        KeyCode::BackTab => return Some(BrowseAction::FocusPrev),
        _ => {}
    }

    match state.focus {
        Focus::Search => match code {
            KeyCode::Esc => Some(BrowseAction::ClearSearch),
            KeyCode::Enter | KeyCode::Down => Some(BrowseAction::FocusList),
            _ => None,
        },
        Focus::Name | Focus::Price | Focus::Rating => {
            let control = state.focus.control()?;
            match code {
                KeyCode::Left | KeyCode::Char('h') => Some(BrowseAction::CycleOrder {
                    control,
                    forward: false,
                }),
                KeyCode::Right | KeyCode::Char('l') | KeyCode::Enter | KeyCode::Char(' ') => {
                    Some(BrowseAction::CycleOrder {
                        control,
                        forward: true,
                    })
                }
                KeyCode::Down | KeyCode::Char('j') => Some(BrowseAction::FocusList),
                _ => common_key_to_action(code),
            }
        }
        Focus::List => match code {
            KeyCode::Char('j') | KeyCode::Down => Some(BrowseAction::MoveDown),
            KeyCode::Char('k') | KeyCode::Up => Some(BrowseAction::MoveUp),
            KeyCode::Char('g') | KeyCode::Home => Some(BrowseAction::GoToTop),
            KeyCode::Char('G') | KeyCode::End => Some(BrowseAction::GoToBottom),
            KeyCode::PageUp => Some(BrowseAction::PageUp),
            KeyCode::PageDown => Some(BrowseAction::PageDown),
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('b') => {
                Some(BrowseAction::LikeSelected)
            }
            _ => common_key_to_action(code),
        },
    }
}

/// Keys shared by every control except the search box
fn common_key_to_action(code: KeyCode) -> Option<BrowseAction> {
    match code {
        KeyCode::Char('/') => Some(BrowseAction::FocusSearch),
        KeyCode::Char('t') => Some(BrowseAction::ToggleTheme),
        KeyCode::Char('r') => Some(BrowseAction::Reload),
        KeyCode::Char('q') | KeyCode::Esc => Some(BrowseAction::Quit),
        _ => None,
    }
}

// ============================================================================
// View Model
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderViewModel {
    pub theme_label: &'static str,
    pub like_count: u64,
    pub shown: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterViewModel {
    pub control: FilterControl,
    pub label: &'static str,
    pub value: &'static str,
    pub has_focus: bool,
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductRowViewModel {
    pub id: u64,
    pub title: String,
    pub price_text: String,
    pub rating_text: String,
    pub liked: bool,
    pub action_label: &'static str,
    pub action_icon: &'static str,
    pub is_selected: bool,
}

/// Everything the ProductBrowser component renders
#[derive(Debug, Clone)]
pub struct BrowseViewModel {
    pub header: HeaderViewModel,
    pub search_focused: bool,
    pub filters: Vec<FilterViewModel>,
    pub rows: Vec<ProductRowViewModel>,
    pub list_focused: bool,
    pub scroll_offset: usize,
    pub is_loading: bool,
    pub empty_state: Option<EmptyStateKind>,
    pub shortcuts: Vec<Shortcut>,
}

fn row_view_model<C: Clock>(
    product: &Product,
    likes: &LikeTracker<C>,
    is_selected: bool,
) -> ProductRowViewModel {
    let liked = likes.is_liked(product.id);
    ProductRowViewModel {
        id: product.id,
        title: product.title.clone(),
        price_text: format!("Price: {}", product.price_label()),
        rating_text: format!("Rating: {}", product.rating_label()),
        liked,
        action_label: if liked { "buyed" } else { "buy" },
        action_icon: if liked { "✓" } else { "+" },
        is_selected,
    }
}

/// Compute the view model from state (pure function)
pub fn compute_browse_view_model<C: Clock>(state: &BrowseState<C>) -> BrowseViewModel {
    let display = state.display_list();
    let filters = state.view.filters();
    let is_loading = state.loader.is_loading();

    let filter_vms = FilterControl::ALL
        .iter()
        .map(|&control| {
            let (value, is_active) = match control {
                FilterControl::Name => (
                    filters.name_order.label(),
                    filters.name_order != NameOrder::All,
                ),
                FilterControl::Price => (
                    filters.price_order.label(),
                    filters.price_order != PriceOrder::Default,
                ),
                FilterControl::Rating => (
                    filters.rating_order.label(),
                    filters.rating_order != RatingOrder::Default,
                ),
            };
            FilterViewModel {
                control,
                label: control.label(),
                value,
                has_focus: state.focus == control.focus(),
                is_active,
            }
        })
        .collect();

    let rows: Vec<ProductRowViewModel> = if is_loading {
        Vec::new()
    } else {
        display
            .iter()
            .enumerate()
            .map(|(i, p)| row_view_model(p, &state.likes, i == state.selected_index))
            .collect()
    };

    let empty_state = if is_loading {
        Some(EmptyStateKind::Loading)
    } else if state.loader.catalog().is_empty() {
        Some(EmptyStateKind::NoProducts)
    } else if rows.is_empty() {
        Some(EmptyStateKind::NoSearchResults)
    } else {
        None
    };

    let shortcuts = match state.focus {
        Focus::Search => search_shortcuts(),
        Focus::List => list_shortcuts(),
        Focus::Name | Focus::Price | Focus::Rating => filter_shortcuts(),
    };

    BrowseViewModel {
        header: HeaderViewModel {
            theme_label: toggle_label(state.dark_mode),
            like_count: state.likes.like_count(),
            shown: display.len(),
            total: state.loader.catalog().len(),
        },
        search_focused: state.focus == Focus::Search,
        filters: filter_vms,
        rows,
        list_focused: state.focus == Focus::List,
        scroll_offset: state.scroll_offset,
        is_loading,
        empty_state,
        shortcuts,
    }
}
