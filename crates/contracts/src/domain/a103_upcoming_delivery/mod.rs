pub mod aggregate;
pub mod billing;
pub mod grn_filter;
pub mod receipt;

pub use aggregate::{
    format_quantity, transferred_only, upcoming_only, Attachment, Delivery, DeliveryItem,
    DeliveryStatus, DeliveryType,
};
pub use billing::{Billing, BillingField, BillingForm};
pub use grn_filter::GrnFilter;
pub use receipt::{receipt_lines, toggle_line, ReceiptLine, ReceiveDeliveryRequest};
