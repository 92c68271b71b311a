//! Key-driven scenarios for the product browser, run through the public
//! reducer without a terminal.

use std::time::Duration;

use iocraft::prelude::{KeyCode, KeyModifiers};

use storefront::catalog::{CatalogLoader, Product};
use storefront::likes::{LikeTracker, ManualClock};
use storefront::tui::browse::{
    BrowseAction, BrowseState, Focus, compute_browse_view_model, key_to_action,
    reduce_browse_state,
};
use storefront::tui::components::{EmptyStateKind, visible_window};

const LIST_HEIGHT: usize = 3;

struct Session {
    clock: ManualClock,
    state: BrowseState<ManualClock>,
}

impl Session {
    fn new() -> Self {
        let clock = ManualClock::new();
        let likes = LikeTracker::with_window(clock.clone(), Duration::from_secs(3));
        let state = BrowseState::new(CatalogLoader::new(194), likes, false);
        Session { clock, state }
    }

    fn loaded() -> Self {
        let mut session = Self::new();
        session.dispatch(BrowseAction::CatalogLoaded(Ok(catalog())));
        session
    }

    fn dispatch(&mut self, action: BrowseAction) {
        let state = self.state.clone();
        self.state = reduce_browse_state(state, action, LIST_HEIGHT);
    }

    /// Press a key; returns whether it mapped to an action
    fn press(&mut self, code: KeyCode) -> bool {
        self.press_with(code, KeyModifiers::NONE)
    }

    fn press_with(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        match key_to_action(code, modifiers, &self.state) {
            Some(action) => {
                self.dispatch(action);
                true
            }
            None => false,
        }
    }

    fn titles(&self) -> Vec<String> {
        compute_browse_view_model(&self.state)
            .rows
            .into_iter()
            .map(|r| r.title)
            .collect()
    }
}

fn catalog() -> Vec<Product> {
    vec![
        Product::new(1, "iPhone 9", 549.0, 4.69),
        Product::new(2, "Essence Mascara", 9.99, 4.94),
        Product::new(3, "apple airpods", 129.0, 4.69),
        Product::new(4, "Samsung Universe", 1249.0, 4.09),
        Product::new(5, "Calvin Klein", 9.99, 4.0),
        Product::new(6, "Phone Stand", 9.99, 4.94),
    ]
}

#[test]
fn test_startup_shows_loader_until_catalog_arrives() {
    let mut session = Session::new();
    let vm = compute_browse_view_model(&session.state);
    assert!(vm.is_loading);
    assert_eq!(vm.empty_state, Some(EmptyStateKind::Loading));

    session.dispatch(BrowseAction::CatalogLoaded(Ok(catalog())));
    let vm = compute_browse_view_model(&session.state);
    assert!(!vm.is_loading);
    assert_eq!(vm.rows.len(), 6);
    assert_eq!((vm.header.shown, vm.header.total), (6, 6));
}

#[test]
fn test_failed_fetch_leaves_empty_catalog() {
    let mut session = Session::new();
    session.dispatch(BrowseAction::CatalogLoaded(Err(
        storefront::StorefrontError::Api("boom".to_string()),
    )));

    let vm = compute_browse_view_model(&session.state);
    assert!(!vm.is_loading);
    assert!(vm.rows.is_empty());
    assert_eq!(vm.empty_state, Some(EmptyStateKind::NoProducts));
}

#[test]
fn test_tab_through_sort_controls_and_cycle() {
    let mut session = Session::loaded();
    assert_eq!(session.state.focus, Focus::Search);

    // Search -> Name -> Price
    session.press(KeyCode::Tab);
    session.press(KeyCode::Tab);
    assert_eq!(session.state.focus, Focus::Price);

    // Right cycles Default -> Low to High
    session.press(KeyCode::Right);
    let vm = compute_browse_view_model(&session.state);
    assert_eq!(vm.filters[1].value, "Low to High(price)");
    assert!(vm.filters[1].is_active);
    assert_eq!(
        session.titles(),
        [
            "Essence Mascara",
            "Calvin Klein",
            "Phone Stand",
            "apple airpods",
            "iPhone 9",
            "Samsung Universe"
        ]
    );

    // Left twice wraps to High to Low
    session.press(KeyCode::Left);
    session.press(KeyCode::Left);
    let vm = compute_browse_view_model(&session.state);
    assert_eq!(vm.filters[1].value, "High to Low(price)");
    assert_eq!(session.titles()[0], "Samsung Universe");
}

#[test]
fn test_all_three_criteria_via_keys() {
    let mut session = Session::loaded();

    session.press(KeyCode::Tab); // Name
    session.press(KeyCode::Right); // A-Z
    session.press(KeyCode::Tab); // Price
    session.press(KeyCode::Right); // Low to High
    session.press(KeyCode::Tab); // Rating
    session.press(KeyCode::Right); // 1 to 5
    session.press(KeyCode::Right); // 5 to 1

    assert_eq!(
        session.titles(),
        [
            "Essence Mascara",
            "Phone Stand",
            "apple airpods",
            "iPhone 9",
            "Samsung Universe",
            "Calvin Klein"
        ]
    );
}

#[test]
fn test_typed_search_narrows_and_escape_clears() {
    let mut session = Session::loaded();

    // Characters go to the text input, not the key map
    assert!(!session.press(KeyCode::Char('p')));
    session.dispatch(BrowseAction::SearchChanged("phone".to_string()));
    assert_eq!(session.titles(), ["iPhone 9", "Phone Stand"]);

    session.dispatch(BrowseAction::SearchChanged("zzz".to_string()));
    let vm = compute_browse_view_model(&session.state);
    assert_eq!(vm.empty_state, Some(EmptyStateKind::NoSearchResults));
    assert_eq!((vm.header.shown, vm.header.total), (0, 6));

    session.press(KeyCode::Esc);
    assert_eq!(session.state.view.filters().search_term, "");
    assert_eq!(session.titles().len(), 6);
}

#[test]
fn test_list_navigation_scrolls() {
    let mut session = Session::loaded();
    session.press(KeyCode::Enter);
    assert_eq!(session.state.focus, Focus::List);

    for _ in 0..4 {
        session.press(KeyCode::Char('j'));
    }
    assert_eq!(session.state.selected_index, 4);
    // Three lines: "more above" plus the last two rows
    assert_eq!(session.state.scroll_offset, 4);

    session.press(KeyCode::Char('G'));
    assert_eq!(session.state.selected_index, 5);
    assert_eq!(session.state.scroll_offset, 4);
    session.press(KeyCode::Char('j'));
    assert_eq!(session.state.selected_index, 5);

    session.press(KeyCode::Char('g'));
    assert_eq!(session.state.selected_index, 0);
    assert_eq!(session.state.scroll_offset, 0);
}

#[test]
fn test_selected_row_is_never_hidden_behind_indicators() {
    let mut session = Session::loaded();
    session.press(KeyCode::Enter);

    let total = session.titles().len();
    let keys = std::iter::repeat_n(KeyCode::Char('j'), total)
        .chain(std::iter::repeat_n(KeyCode::Char('k'), total));
    for key in keys {
        session.press(key);
        let (start, end) = visible_window(session.state.scroll_offset, total, LIST_HEIGHT);
        assert!(
            (start..end).contains(&session.state.selected_index),
            "selected {} outside ({start}, {end})",
            session.state.selected_index
        );
    }
}

#[test]
fn test_buy_marks_row_for_the_like_window() {
    let mut session = Session::loaded();
    session.press(KeyCode::Enter); // focus list
    session.press(KeyCode::Char('j'));
    session.press(KeyCode::Char('b'));

    let vm = compute_browse_view_model(&session.state);
    let row = &vm.rows[1];
    assert!(row.liked);
    assert_eq!((row.action_icon, row.action_label), ("✓", "buyed"));
    assert_eq!(vm.header.like_count, 1);

    session.clock.advance(Duration::from_millis(2999));
    session.dispatch(BrowseAction::ExpireLikes);
    assert!(compute_browse_view_model(&session.state).rows[1].liked);

    session.clock.advance(Duration::from_millis(1));
    session.dispatch(BrowseAction::ExpireLikes);
    let vm = compute_browse_view_model(&session.state);
    assert!(!vm.rows[1].liked);
    assert_eq!(vm.rows[1].action_label, "buy");
    // The counter only ever grows
    assert_eq!(vm.header.like_count, 1);
}

#[test]
fn test_rebuy_restarts_window() {
    let mut session = Session::loaded();
    session.press(KeyCode::Enter);
    session.press(KeyCode::Char(' '));

    session.clock.advance(Duration::from_secs(2));
    session.press(KeyCode::Char(' '));

    session.clock.advance(Duration::from_secs(2));
    session.dispatch(BrowseAction::ExpireLikes);
    let vm = compute_browse_view_model(&session.state);
    assert!(vm.rows[0].liked);
    assert_eq!(vm.header.like_count, 2);
}

#[test]
fn test_theme_toggle_and_quit_keys() {
    let mut session = Session::loaded();
    assert_eq!(compute_browse_view_model(&session.state).header.theme_label, "☾ Dark");

    session.press_with(KeyCode::Char('t'), KeyModifiers::CONTROL);
    assert!(session.state.dark_mode);
    assert_eq!(compute_browse_view_model(&session.state).header.theme_label, "☀ Light");

    session.press(KeyCode::Tab);
    session.press(KeyCode::Char('q'));
    assert!(session.state.should_exit);
}
