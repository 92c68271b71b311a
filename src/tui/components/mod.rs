//! Shared TUI components

pub mod clickable;
pub mod empty_state;
pub mod footer;
pub mod header;
pub mod product_list;
pub mod search_box;
pub mod select;

pub use clickable::{Clickable, ClickableProps};
pub use empty_state::{EmptyState, EmptyStateKind, EmptyStateProps};
pub use footer::{
    Footer, FooterProps, Shortcut, filter_shortcuts, list_shortcuts, search_shortcuts,
};
pub use header::{Header, HeaderProps};
pub use product_list::{ProductList, ProductListProps, ProductRow, ProductRowProps, visible_window};
pub use search_box::{SearchBox, SearchBoxProps};
pub use select::{Select, SelectProps};
