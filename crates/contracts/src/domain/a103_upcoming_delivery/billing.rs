//! Billing details of a goods receipt note and the form used to edit them.

use super::aggregate::format_quantity;
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Billing {
    #[serde(default)]
    pub invoice_number: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub bill_date: Option<String>,
    #[serde(default)]
    pub discount: f64,
    #[serde(default)]
    pub amount: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillingField {
    InvoiceNumber,
    Price,
    BillDate,
    Discount,
}

/// Editable copy of [`Billing`]. Numeric inputs are kept as typed;
/// `amount` is derived as price minus discount.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BillingForm {
    pub invoice_number: String,
    pub price: String,
    pub bill_date: String,
    pub discount: String,
    pub amount: f64,
}

fn parse_number(raw: &str) -> f64 {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// Normalises a stored bill date to `YYYY-MM-DD` for a date input.
pub fn to_date_input(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.date_naive().format("%Y-%m-%d").to_string();
    }
    let head = raw.get(..10).unwrap_or(raw);
    match NaiveDate::parse_from_str(head, "%Y-%m-%d") {
        Ok(date) => date.format("%Y-%m-%d").to_string(),
        Err(_) => String::new(),
    }
}

impl BillingForm {
    pub fn from_billing(billing: Option<&Billing>) -> Self {
        match billing {
            Some(b) => Self {
                invoice_number: b.invoice_number.clone(),
                price: format_quantity(b.price),
                bill_date: b.bill_date.as_deref().map(to_date_input).unwrap_or_default(),
                discount: format_quantity(b.discount),
                amount: b.amount,
            },
            None => Self {
                price: "0".to_string(),
                discount: "0".to_string(),
                ..Default::default()
            },
        }
    }

    pub fn set_field(&mut self, field: BillingField, value: &str) {
        match field {
            BillingField::InvoiceNumber => self.invoice_number = value.to_string(),
            BillingField::BillDate => self.bill_date = value.to_string(),
            BillingField::Price => {
                self.price = value.to_string();
                self.recalculate();
            }
            BillingField::Discount => {
                self.discount = value.to_string();
                self.recalculate();
            }
        }
    }

    fn recalculate(&mut self) {
        self.amount = parse_number(&self.price) - parse_number(&self.discount);
    }

    pub fn to_billing(&self) -> Billing {
        Billing {
            invoice_number: self.invoice_number.trim().to_string(),
            price: parse_number(&self.price),
            bill_date: if self.bill_date.is_empty() {
                None
            } else {
                Some(self.bill_date.clone())
            },
            discount: parse_number(&self.discount),
            amount: self.amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_follows_price_and_discount() {
        let mut form = BillingForm::from_billing(None);
        assert_eq!(form.amount, 0.0);
        form.set_field(BillingField::Price, "1200");
        assert_eq!(form.amount, 1200.0);
        form.set_field(BillingField::Discount, "150.5");
        assert_eq!(form.amount, 1049.5);
        form.set_field(BillingField::InvoiceNumber, "INV-7");
        assert_eq!(form.amount, 1049.5);
    }

    #[test]
    fn test_unparsable_numbers_count_as_zero() {
        let mut form = BillingForm::from_billing(None);
        form.set_field(BillingField::Price, "abc");
        form.set_field(BillingField::Discount, "20");
        assert_eq!(form.amount, -20.0);
        form.set_field(BillingField::Discount, "");
        assert_eq!(form.amount, 0.0);
    }

    #[test]
    fn test_seed_from_existing_billing() {
        let billing = Billing {
            invoice_number: "INV-1".into(),
            price: 1000.0,
            bill_date: Some("2024-03-10T00:00:00.000Z".into()),
            discount: 50.0,
            amount: 950.0,
        };
        let form = BillingForm::from_billing(Some(&billing));
        assert_eq!(form.price, "1000");
        assert_eq!(form.discount, "50");
        assert_eq!(form.bill_date, "2024-03-10");
        assert_eq!(form.amount, 950.0);
        assert_eq!(form.to_billing().price, 1000.0);
    }

    #[test]
    fn test_to_date_input() {
        assert_eq!(to_date_input("2024-03-10"), "2024-03-10");
        assert_eq!(to_date_input("2024-03-10T18:30:00+00:00"), "2024-03-10");
        assert_eq!(to_date_input("garbage"), "");
    }

    #[test]
    fn test_to_billing_drops_empty_date() {
        let form = BillingForm::from_billing(None);
        assert_eq!(form.to_billing().bill_date, None);
    }
}
