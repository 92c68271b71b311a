//! Product browser view (`storefront browse`)
//!
//! Owns a single [`BrowseState`] and routes every change through
//! [`reduce_browse_state`]. Side effects live here: the catalog fetch,
//! the deferred like expiry, and persisting the theme preference.

use iocraft::prelude::*;

use crate::catalog::{CatalogLoader, CatalogSource, HttpCatalogSource};
use crate::config::Config;
use crate::likes::{LikeTracker, SystemClock};
use crate::prefs::{FileStore, ThemePreference};
use crate::tui::components::{
    EmptyState, EmptyStateKind, Footer, Header, ProductList, SearchBox, Select,
};
use crate::tui::theme::{set_dark_mode, theme};

use super::model::{
    BrowseAction, BrowseState, FilterControl, compute_browse_view_model, key_to_action,
    reduce_browse_state,
};

/// Header (1) + search box (3) + sort controls (1) + list borders (2) + footer (1)
const CHROME_HEIGHT: u16 = 8;

fn dispatch(state: &mut State<BrowseState>, action: BrowseAction, list_height: usize) {
    let current = state.read().clone();
    state.set(reduce_browse_state(current, action, list_height));
}

fn load_config() -> Config {
    Config::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {e}");
        Config::default()
    })
}

fn load_theme() -> ThemePreference {
    let mut store = FileStore::open_default();
    ThemePreference::load_and_normalize(&mut store).unwrap_or_else(|e| {
        tracing::warn!("Failed to read theme preference: {e}");
        ThemePreference::default()
    })
}

/// Flip the theme, persist it and switch the global palette
fn toggle_theme(theme_pref: &mut State<ThemePreference>) -> bool {
    let mut pref = theme_pref.get();
    let mut store = FileStore::open_default();
    if let Err(e) = pref.toggle(&mut store) {
        tracing::warn!("Failed to persist theme preference: {e}");
    }
    set_dark_mode(pref.is_dark());
    theme_pref.set(pref);
    pref.is_dark()
}

/// Props for the ProductBrowser component
#[derive(Default, Props)]
pub struct ProductBrowserProps {}

/// Main product browser component
///
/// Layout:
/// ```text
/// +------------------------------------------+
/// | Header            ☾ Dark  ♥ 2  4/194     |
/// | SearchBox                                |
/// | Name: ◀ All ▶  Price: ◀ .. ▶  Rating: .. |
/// | ProductList / Loader / EmptyState        |
/// | Footer                                   |
/// +------------------------------------------+
/// ```
#[component]
pub fn ProductBrowser<'a>(
    _props: &ProductBrowserProps,
    mut hooks: Hooks,
) -> impl Into<AnyElement<'a>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();

    let config: State<Config> = hooks.use_state(load_config);
    let mut theme_pref: State<ThemePreference> = hooks.use_state(|| {
        let pref = load_theme();
        set_dark_mode(pref.is_dark());
        pref
    });
    let mut state: State<BrowseState> = hooks.use_state(|| {
        let config = config.read();
        BrowseState::new(
            CatalogLoader::new(config.limit),
            LikeTracker::with_window(SystemClock, config.like_window()),
            theme_pref.get().is_dark(),
        )
    });
    let mut search_query = hooks.use_state(String::new);

    let list_height = height.saturating_sub(CHROME_HEIGHT) as usize;

    // Async fetch handler; failures are logged and swallowed by the loader
    let fetch_handler: Handler<()> = hooks.use_async_handler({
        let state_setter = state;
        let config = config;

        move |()| {
            let mut state_setter = state_setter;
            let config = config.read().clone();

            async move {
                let result = match HttpCatalogSource::from_config(&config) {
                    Ok(source) => source.fetch_products(config.limit).await,
                    Err(e) => Err(e),
                };
                dispatch(&mut state_setter, BrowseAction::CatalogLoaded(result), 0);
            }
        }
    });

    // Deferred like expiry: sleep until the earliest deadline, prune, and
    // repeat while likes are pending. A newer like on the same id moved its
    // deadline, so it survives the prune.
    let expire_handler: Handler<()> = hooks.use_async_handler({
        let state_setter = state;

        move |()| {
            let mut state_setter = state_setter;

            async move {
                loop {
                    let pending = state_setter.read().likes.until_next_expiry();
                    let Some(delay) = pending else {
                        break;
                    };
                    tokio::time::sleep(delay).await;
                    dispatch(&mut state_setter, BrowseAction::ExpireLikes, 0);
                }
            }
        }
    });

    let theme_click_handler: Handler<()> = hooks.use_async_handler({
        let theme_pref_setter = theme_pref;
        let state_setter = state;

        move |()| {
            let mut theme_pref_setter = theme_pref_setter;
            let mut state_setter = state_setter;
            let dark = toggle_theme(&mut theme_pref_setter);
            dispatch(&mut state_setter, BrowseAction::SetDarkMode(dark), 0);
            async {}
        }
    });

    let scroll_up_handler: Handler<()> = hooks.use_async_handler({
        let state_setter = state;
        move |()| {
            let mut state_setter = state_setter;
            dispatch(&mut state_setter, BrowseAction::MoveUp, list_height);
            async {}
        }
    });

    let scroll_down_handler: Handler<()> = hooks.use_async_handler({
        let state_setter = state;
        move |()| {
            let mut state_setter = state_setter;
            dispatch(&mut state_setter, BrowseAction::MoveDown, list_height);
            async {}
        }
    });

    // One (prev, next) pair per sort control, in display order
    let cycle_handlers: Vec<(Handler<()>, Handler<()>)> = FilterControl::ALL
        .iter()
        .map(|&control| {
            let mut cycle = |forward: bool| -> Handler<()> {
                let state_setter = state;
                hooks.use_async_handler(move |()| {
                    let mut state_setter = state_setter;
                    dispatch(
                        &mut state_setter,
                        BrowseAction::CycleOrder { control, forward },
                        list_height,
                    );
                    async {}
                })
            };
            (cycle(false), cycle(true))
        })
        .collect();

    // Trigger initial fetch on startup
    let mut fetch_started = hooks.use_state(|| false);
    if !fetch_started.get() {
        fetch_started.set(true);
        fetch_handler.clone()(());
    }

    // Keep the filter in sync with the text input
    let query = search_query.to_string();
    if query != state.read().view.filters().search_term {
        dispatch(&mut state, BrowseAction::SearchChanged(query.clone()), list_height);
    }

    hooks.use_terminal_events({
        let fetch_handler = fetch_handler.clone();
        let expire_handler = expire_handler.clone();

        move |event| match event {
            TerminalEvent::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) if kind != KeyEventKind::Release => {
                let Some(action) = key_to_action(code, modifiers, &state.read()) else {
                    return;
                };

                match action {
                    BrowseAction::ToggleTheme => {
                        let dark = toggle_theme(&mut theme_pref);
                        dispatch(&mut state, BrowseAction::SetDarkMode(dark), list_height);
                    }
                    BrowseAction::ClearSearch => {
                        search_query.set(String::new());
                        dispatch(&mut state, BrowseAction::ClearSearch, list_height);
                    }
                    BrowseAction::Reload => {
                        dispatch(&mut state, BrowseAction::Reload, list_height);
                        fetch_handler(());
                    }
                    BrowseAction::LikeSelected => {
                        dispatch(&mut state, BrowseAction::LikeSelected, list_height);
                        expire_handler(());
                    }
                    action => dispatch(&mut state, action, list_height),
                }
            }
            _ => {}
        }
    });

    if state.read().should_exit {
        system.exit();
    }

    let vm = compute_browse_view_model(&state.read());
    let theme = theme();

    let filter_controls = vm
        .filters
        .iter()
        .zip(cycle_handlers)
        .map(|(filter, (prev, next))| {
            element! {
                Select(
                    label: filter.label.to_string(),
                    value: filter.value.to_string(),
                    has_focus: filter.has_focus,
                    is_active: filter.is_active,
                    on_prev: Some(prev),
                    on_next: Some(next),
                )
            }
        });

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
        ) {
            Header(
                theme_label: vm.header.theme_label.to_string(),
                like_count: vm.header.like_count,
                product_count: if vm.is_loading { None } else { Some((vm.header.shown, vm.header.total)) },
                on_toggle_theme: Some(theme_click_handler.clone()),
            )

            View(width: 100pct, padding_left: 1, padding_right: 1) {
                SearchBox(
                    value: Some(search_query),
                    has_focus: vm.search_focused,
                )
            }

            View(
                width: 100pct,
                height: 1,
                flex_direction: FlexDirection::Row,
                padding_left: 2,
                column_gap: 4,
            ) {
                #(filter_controls)
            }

            View(flex_grow: 1.0, width: 100pct, padding_left: 1, padding_right: 1) {
                #(match vm.empty_state {
                    Some(kind) => element! {
                        View(
                            width: 100pct,
                            height: 100pct,
                            border_style: BorderStyle::Round,
                            border_color: theme.border,
                        ) {
                            EmptyState(
                                kind,
                                search_query: if kind == EmptyStateKind::NoSearchResults {
                                    Some(query.clone())
                                } else {
                                    None
                                },
                            )
                        }
                    }
                    .into_any(),
                    None => element! {
                        ProductList(
                            rows: vm.rows.clone(),
                            scroll_offset: vm.scroll_offset,
                            has_focus: vm.list_focused,
                            visible_height: list_height,
                            on_scroll_up: Some(scroll_up_handler.clone()),
                            on_scroll_down: Some(scroll_down_handler.clone()),
                        )
                    }
                    .into_any(),
                })
            }

            Footer(shortcuts: vm.shortcuts.clone())
        }
    }
}
