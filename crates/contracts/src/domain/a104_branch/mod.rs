pub mod aggregate;

pub use aggregate::{site_names, Branch};
