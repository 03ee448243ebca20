//! Tab management
//!
//! - `page` wraps a tab's content and toggles its visibility
//! - `registry` maps tab keys to views
//! - `tab_labels` holds the titles shown in the menu and the tab strip

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::{detail_tab_label, tab_label_for_key};
