pub mod bulk_select;
pub mod selection;
pub mod widget;

pub use widget::ArtworkList;
