mod api_response;

pub use api_response::{ApiResponse, Pagination};
