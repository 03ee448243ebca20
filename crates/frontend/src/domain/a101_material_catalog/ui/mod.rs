pub mod table;
pub mod upload;
