pub mod aggregate;
pub mod line_item;

pub use aggregate::{CreatePurchaseOrderRequest, IntentStatus, MaterialLine, PurchaseOrder};
pub use line_item::{LineItemField, LineItemList, LineItemRow, LineItemView, MaterialLineItem};
