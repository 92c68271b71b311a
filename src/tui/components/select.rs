//! Compact inline selector for the sort controls
//!
//! Renders as: `Label: ◀ value ▶`. The arrows are clickable.

use iocraft::prelude::*;

use crate::tui::components::Clickable;
use crate::tui::theme::theme;

/// Props for the Select component
#[derive(Default, Props)]
pub struct SelectProps {
    pub label: String,
    pub value: String,
    pub has_focus: bool,
    /// Whether the option differs from its neutral default
    pub is_active: bool,
    /// Handler invoked when left arrow is clicked (cycle backward)
    pub on_prev: Option<Handler<()>>,
    /// Handler invoked when right arrow is clicked (cycle forward)
    pub on_next: Option<Handler<()>>,
}

#[component]
pub fn Select(props: &SelectProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let accent = if props.has_focus {
        theme.border_focused
    } else {
        theme.text_dimmed
    };
    let value_color = if props.is_active {
        theme.highlight
    } else {
        theme.text
    };

    element! {
        View(flex_direction: FlexDirection::Row, gap: 1) {
            Text(
                content: format!("{}:", props.label),
                color: accent,
                weight: if props.has_focus { Weight::Bold } else { Weight::Normal },
            )
            Clickable(on_click: props.on_prev.clone()) {
                Text(content: "◀", color: accent)
            }
            Text(content: props.value.clone(), color: value_color)
            Clickable(on_click: props.on_next.clone()) {
                Text(content: "▶", color: accent)
            }
        }
    }
}
