pub mod add_popup;
pub mod details;
pub mod line_item;
pub mod list;
pub mod new;
