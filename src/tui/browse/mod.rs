//! Product browser: reducer-driven state in [`model`], iocraft rendering in [`view`]

pub mod model;
pub mod view;

pub use model::{
    BrowseAction, BrowseState, BrowseViewModel, FilterControl, FilterViewModel, Focus,
    HeaderViewModel, ProductRowViewModel, adjust_scroll, compute_browse_view_model,
    key_to_action, reduce_browse_state,
};
pub use view::{ProductBrowser, ProductBrowserProps};
