pub mod aggregate;
pub mod taxonomy;

pub use aggregate::{catalog_table_rows, MaterialCatalogItem, UploadResult, CATALOG_COLUMNS};
pub use taxonomy::{Taxonomy, TaxonomyNode};
