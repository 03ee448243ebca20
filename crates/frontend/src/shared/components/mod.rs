pub mod pagination_controls;
pub mod searchable_dropdown;

pub use pagination_controls::PaginationControls;
pub use searchable_dropdown::SearchableDropdown;
