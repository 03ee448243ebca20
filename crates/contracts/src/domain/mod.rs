pub mod a101_material_catalog;
pub mod a102_purchase_order;
pub mod a103_upcoming_delivery;
pub mod a104_branch;
pub mod common;
