//! Keyboard shortcuts bar component

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// A single keyboard shortcut entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    /// The key or key combination (e.g., "q", "C-t", "Tab")
    pub key: String,
    /// Description of the action
    pub action: String,
}

impl Shortcut {
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Props for the Footer component
#[derive(Default, Props)]
pub struct FooterProps {
    pub shortcuts: Vec<Shortcut>,
}

/// Keyboard shortcuts bar at the bottom of the screen
#[component]
pub fn Footer(props: &FooterProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            min_height: 1,
            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::Wrap,
            flex_shrink: 0.0,
            padding_left: 1,
            padding_right: 1,
            column_gap: 2,
            background_color: theme.bar,
        ) {
            #(props.shortcuts.iter().map(|shortcut| {
                let key = shortcut.key.clone();
                let action = shortcut.action.clone();
                element! {
                    View(flex_direction: FlexDirection::Row) {
                        Text(
                            content: format!("[{}]", key),
                            color: theme.highlight,
                            weight: Weight::Bold,
                        )
                        Text(
                            content: format!(" {}", action),
                            color: theme.text,
                        )
                    }
                }
            }))
        }
    }
}

/// Shortcuts while typing in the search box
pub fn search_shortcuts() -> Vec<Shortcut> {
    vec![
        Shortcut::new("Enter", "Results"),
        Shortcut::new("Tab", "Next Control"),
        Shortcut::new("Esc", "Clear"),
        Shortcut::new("C-t", "Theme"),
        Shortcut::new("C-q", "Quit"),
    ]
}

/// Shortcuts while a sort control has focus
pub fn filter_shortcuts() -> Vec<Shortcut> {
    vec![
        Shortcut::new("←/→", "Change"),
        Shortcut::new("Tab", "Next Control"),
        Shortcut::new("/", "Search"),
        Shortcut::new("t", "Theme"),
        Shortcut::new("r", "Reload"),
        Shortcut::new("q", "Quit"),
    ]
}

/// Shortcuts while the product list has focus
pub fn list_shortcuts() -> Vec<Shortcut> {
    vec![
        Shortcut::new("j/k", "Up/Down"),
        Shortcut::new("g/G", "Top/Bottom"),
        Shortcut::new("Enter", "Buy"),
        Shortcut::new("/", "Search"),
        Shortcut::new("Tab", "Next Control"),
        Shortcut::new("t", "Theme"),
        Shortcut::new("r", "Reload"),
        Shortcut::new("q", "Quit"),
    ]
}
