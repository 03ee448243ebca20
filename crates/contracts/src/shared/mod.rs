pub mod dropdown;
pub mod polling;
pub mod search;
