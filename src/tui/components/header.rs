//! App header bar component
//!
//! Title on the left; theme toggle, like counter and product count on the
//! right.

use iocraft::prelude::*;

use super::Clickable;
use crate::tui::theme::theme;

/// Props for the Header component
#[derive(Default, Props)]
pub struct HeaderProps {
    /// Theme toggle label (`☀ Light` / `☾ Dark`)
    pub theme_label: String,
    /// Session like counter
    pub like_count: u64,
    /// Products shown / products in the catalog
    pub product_count: Option<(usize, usize)>,
    /// Handler invoked when the theme toggle is clicked
    pub on_toggle_theme: Option<Handler<()>>,
}

#[component]
pub fn Header(props: &HeaderProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            height: 1,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
            justify_content: JustifyContent::SpaceBetween,
            padding_left: 1,
            padding_right: 1,
            background_color: theme.bar,
        ) {
            Text(
                content: "Storefront",
                color: theme.text,
                weight: Weight::Bold,
            )
            View(flex_direction: FlexDirection::Row, gap: 2) {
                #(props.product_count.map(|(shown, total)| element! {
                    Text(
                        content: format!("{}/{} products", shown, total),
                        color: theme.text_dimmed,
                    )
                }))
                Text(
                    content: format!("♥ {}", props.like_count),
                    color: theme.liked,
                    weight: Weight::Bold,
                )
                Clickable(on_click: props.on_toggle_theme.clone()) {
                    Text(
                        content: props.theme_label.clone(),
                        color: theme.highlight,
                    )
                }
            }
        }
    }
}
