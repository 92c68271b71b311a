//! Placeholder shown in the list area when there is nothing to list

use iocraft::prelude::*;

use crate::tui::theme::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyStateKind {
    /// Catalog fetch in flight
    #[default]
    Loading,
    /// Catalog is empty (or the fetch failed)
    NoProducts,
    /// No products match the search term
    NoSearchResults,
}

impl EmptyStateKind {
    /// (icon, title, hint)
    pub fn text(self) -> (&'static str, &'static str, &'static str) {
        match self {
            EmptyStateKind::Loading => ("~", "Loading products...", ""),
            EmptyStateKind::NoProducts => (
                "i",
                "No Products",
                "The catalog is empty. Press 'r' to reload.",
            ),
            EmptyStateKind::NoSearchResults => (
                "?",
                "No Results",
                "Try a different search term, or press Esc to clear.",
            ),
        }
    }
}

/// Props for the EmptyState component
#[derive(Default, Props)]
pub struct EmptyStateProps {
    pub kind: EmptyStateKind,
    /// Search term (for NoSearchResults)
    pub search_query: Option<String>,
}

#[component]
pub fn EmptyState(props: &EmptyStateProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let (icon, title, hint) = props.kind.text();

    element! {
        View(
            width: 100pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            padding: 2,
        ) {
            View(
                width: 5,
                height: 3,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border_style: BorderStyle::Round,
                border_color: theme.border,
                margin_bottom: 1,
            ) {
                Text(content: icon, color: theme.text_dimmed, weight: Weight::Bold)
            }

            Text(content: title, color: theme.text, weight: Weight::Bold)

            #(props.search_query.clone().filter(|_| props.kind == EmptyStateKind::NoSearchResults).map(|query| element! {
                View(margin_top: 1) {
                    Text(
                        content: format!("Search: \"{}\"", query),
                        color: theme.search_match,
                    )
                }
            }))

            #(if hint.is_empty() {
                None
            } else {
                Some(element! {
                    View(margin_top: 1) {
                        Text(content: hint, color: theme.text_dimmed)
                    }
                })
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_state_kind_default() {
        assert_eq!(EmptyStateKind::default(), EmptyStateKind::Loading);
    }

    #[test]
    fn test_loading_has_no_hint() {
        let (_, title, hint) = EmptyStateKind::Loading.text();
        assert_eq!(title, "Loading products...");
        assert!(hint.is_empty());
    }
}
