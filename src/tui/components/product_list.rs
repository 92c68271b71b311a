//! Scrollable product list component

use iocraft::prelude::*;

use super::Clickable;
use crate::tui::browse::ProductRowViewModel;
use crate::tui::theme::theme;

/// Props for the ProductList component
#[derive(Default, Props)]
pub struct ProductListProps {
    pub rows: Vec<ProductRowViewModel>,
    /// Current scroll offset (first visible row index)
    pub scroll_offset: usize,
    pub has_focus: bool,
    /// Number of visible rows, needed for the "more above/below" lines
    pub visible_height: usize,
    pub on_scroll_up: Option<Handler<()>>,
    pub on_scroll_down: Option<Handler<()>>,
}

/// Window of `total` rows starting at `start` that fits in `height`
/// lines, leaving room for the scroll indicators. At least one row is
/// always drawn when `height > 0`.
pub fn visible_window(start: usize, total: usize, height: usize) -> (usize, usize) {
    let start = start.min(total);
    if height == 0 {
        return (start, start);
    }
    let above = usize::from(start > 0);
    let tentative_end = (start + height.saturating_sub(above).max(1)).min(total);
    let below = usize::from(tentative_end < total);
    let rows = height.saturating_sub(above + below).max(1);
    (start, (start + rows).min(total))
}

#[component]
pub fn ProductList(props: &ProductListProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let border_color = if props.has_focus {
        theme.border_focused
    } else {
        theme.border
    };

    let total = props.rows.len();
    let (start, end) = visible_window(props.scroll_offset, total, props.visible_height);
    let visible_rows: Vec<_> = props.rows[start..end].to_vec();

    element! {
        Clickable(
            on_scroll_up: props.on_scroll_up.clone(),
            on_scroll_down: props.on_scroll_down.clone(),
        ) {
            View(
                width: 100pct,
                height: 100pct,
                flex_direction: FlexDirection::Column,
                border_style: BorderStyle::Round,
                border_color: border_color,
            ) {
                #(if start > 0 {
                    Some(element! {
                        View(height: 1, padding_left: 1) {
                            Text(
                                content: format!("  {} more above", start),
                                color: theme.text_dimmed,
                            )
                        }
                    })
                } else {
                    None
                })

                #(visible_rows.into_iter().map(|row| {
                    let has_focus = props.has_focus;
                    element! {
                        ProductRow(row: row, has_focus: has_focus)
                    }
                }))

                #(if end < total {
                    Some(element! {
                        View(height: 1, padding_left: 1) {
                            Text(
                                content: format!("  {} more below", total - end),
                                color: theme.text_dimmed,
                            )
                        }
                    })
                } else {
                    None
                })
            }
        }
    }
}

/// Props for a single product row
#[derive(Default, Props)]
pub struct ProductRowProps {
    pub row: ProductRowViewModel,
    pub has_focus: bool,
}

/// `title   Price: 9.99$   Rating: 4.9 ★   [+ buy]`
#[component]
pub fn ProductRow(props: &ProductRowProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let row = &props.row;

    let background = if row.is_selected && props.has_focus {
        Some(theme.selection)
    } else {
        None
    };
    let marker = if row.is_selected { "›" } else { " " };
    let action_color = if row.liked { theme.liked } else { theme.highlight };

    element! {
        View(
            height: 1,
            width: 100pct,
            flex_direction: FlexDirection::Row,
            padding_left: 1,
            padding_right: 1,
            gap: 2,
            background_color: background,
        ) {
            View(width: 1, flex_shrink: 0.0) {
                Text(content: marker, color: theme.highlight, weight: Weight::Bold)
            }
            // Title takes remaining space and truncates via overflow
            View(flex_grow: 1.0, overflow: Overflow::Hidden) {
                Text(
                    content: row.title.clone(),
                    color: theme.text,
                    weight: if row.is_selected { Weight::Bold } else { Weight::Normal },
                )
            }
            View(flex_shrink: 0.0) {
                Text(content: row.price_text.clone(), color: theme.price)
            }
            View(flex_shrink: 0.0) {
                Text(content: row.rating_text.clone(), color: theme.rating)
            }
            View(width: 10, flex_shrink: 0.0) {
                Text(
                    content: format!("[{} {}]", row.action_icon, row.action_label),
                    color: action_color,
                    weight: Weight::Bold,
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_window_fits_everything() {
        assert_eq!(visible_window(0, 5, 10), (0, 5));
    }

    #[test]
    fn test_visible_window_reserves_indicator_lines() {
        // 1 line for "more below"
        assert_eq!(visible_window(0, 20, 10), (0, 9));
        // 1 line each for "more above" and "more below"
        assert_eq!(visible_window(5, 20, 10), (5, 13));
        // at the bottom only "more above" is needed
        assert_eq!(visible_window(15, 20, 10), (15, 20));
    }

    #[test]
    fn test_visible_window_keeps_one_row_when_cramped() {
        assert_eq!(visible_window(5, 20, 2), (5, 6));
        assert_eq!(visible_window(5, 20, 1), (5, 6));
        assert_eq!(visible_window(5, 20, 0), (5, 5));
    }

    #[test]
    fn test_visible_window_clamps_offset() {
        assert_eq!(visible_window(30, 3, 10), (3, 3));
        assert_eq!(visible_window(0, 0, 10), (0, 0));
    }
}
