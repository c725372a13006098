//! CSV export for spreadsheet hand-off
//!
//! Orders are denormalized to one row per line item, so a sheet can
//! pivot on items without joins. Headers are always written, even for
//! an empty export.

use serde::Serialize;
use thiserror::Error;

use crate::models::{Customer, Order};
use crate::money;
use crate::util;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Encoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub type ExportResult<T> = Result<T, ExportError>;

pub const ORDER_HEADERS: [&str; 13] = [
    "Invoice ID",
    "Date",
    "Customer Name",
    "Customer Phone",
    "Customer Address",
    "Order Type",
    "Item Name",
    "Quantity",
    "Price Per Item",
    "Item Subtotal",
    "Total Bill Amount",
    "Customer ID",
    "Menu Item ID",
];

pub const CUSTOMER_HEADERS: [&str; 4] = ["Customer ID", "Name", "Phone Number", "Address"];

/// Field order must match [`ORDER_HEADERS`]
#[derive(Debug, Serialize)]
struct OrderCsvRow<'a> {
    invoice_id: &'a str,
    date: String,
    customer_name: &'a str,
    customer_phone: &'a str,
    customer_address: &'a str,
    order_type: &'static str,
    item_name: &'a str,
    quantity: i32,
    price_per_item: String,
    item_subtotal: String,
    total_bill_amount: String,
    customer_id: &'a str,
    menu_item_id: &'a str,
}

/// Render orders as CSV text, one row per line item
pub fn orders_to_csv(orders: &[Order]) -> ExportResult<String> {
    let mut buf = Vec::new();
    {
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(&mut buf);
        wtr.write_record(ORDER_HEADERS)?;
        for order in orders {
            for item in &order.items {
                let subtotal = money::to_f64(money::line_subtotal(item));
                wtr.serialize(OrderCsvRow {
                    invoice_id: &order.id,
                    date: util::format_millis(order.created_at),
                    customer_name: &order.customer_name,
                    customer_phone: &order.customer_phone,
                    customer_address: &order.customer_address,
                    order_type: order.order_type.label(),
                    item_name: &item.name_at_order,
                    quantity: item.quantity,
                    price_per_item: format!("{:.2}", item.price_at_order),
                    item_subtotal: format!("{subtotal:.2}"),
                    total_bill_amount: format!("{:.2}", order.total_amount),
                    customer_id: &order.customer_id,
                    menu_item_id: &item.menu_item_id,
                })?;
            }
        }
        wtr.flush()?;
    }
    Ok(String::from_utf8(buf)?)
}

/// Render the customer directory as CSV text
pub fn customers_to_csv(customers: &[Customer]) -> ExportResult<String> {
    let mut buf = Vec::new();
    {
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(&mut buf);
        wtr.write_record(CUSTOMER_HEADERS)?;
        for customer in customers {
            wtr.write_record([
                customer.id.as_str(),
                customer.name.as_str(),
                customer.phone.as_str(),
                customer.address.as_str(),
            ])?;
        }
        wtr.flush()?;
    }
    Ok(String::from_utf8(buf)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OrderItem, OrderType};

    fn sample_order() -> Order {
        Order {
            id: "ord-1".to_string(),
            customer_id: "cust-1".to_string(),
            customer_name: "Asha Verma".to_string(),
            customer_phone: "9876543210".to_string(),
            customer_address: "12 MG Road".to_string(),
            order_type: OrderType::Takeaway,
            items: vec![
                OrderItem {
                    menu_item_id: "m1".to_string(),
                    name_at_order: "Veg Burger".to_string(),
                    price_at_order: 80.0,
                    quantity: 2,
                },
                OrderItem {
                    menu_item_id: "m4".to_string(),
                    name_at_order: "French Fries".to_string(),
                    price_at_order: 60.0,
                    quantity: 1,
                },
            ],
            total_amount: 220.0,
            created_at: 1_700_000_000_000,
        }
    }

    #[test]
    fn empty_order_export_is_header_only() {
        let csv = orders_to_csv(&[]).unwrap();
        assert_eq!(csv.lines().count(), 1);
        assert_eq!(csv.lines().next().unwrap(), ORDER_HEADERS.join(","));
    }

    #[test]
    fn orders_export_one_row_per_line_item() {
        let csv = orders_to_csv(&[sample_order()]).unwrap();
        assert_eq!(csv.lines().count(), 3);
        assert_eq!(
            csv.lines().nth(1).unwrap(),
            "ord-1,2023-11-14 22:13:20,Asha Verma,9876543210,12 MG Road,\
             Takeaway,Veg Burger,2,80.00,160.00,220.00,cust-1,m1"
        );
        assert_eq!(
            csv.lines().nth(2).unwrap(),
            "ord-1,2023-11-14 22:13:20,Asha Verma,9876543210,12 MG Road,\
             Takeaway,French Fries,1,60.00,60.00,220.00,cust-1,m4"
        );
    }

    #[test]
    fn customers_export_includes_header_and_quotes_commas() {
        let customers = vec![
            Customer {
                id: "c1".to_string(),
                name: "Asha Verma".to_string(),
                phone: "9876543210".to_string(),
                address: "Flat 4, Green Residency".to_string(),
            },
            Customer {
                id: "c2".to_string(),
                name: "Walk In".to_string(),
                phone: "9000000001".to_string(),
                address: String::new(),
            },
        ];

        let csv = customers_to_csv(&customers).unwrap();
        assert_eq!(csv.lines().count(), 3);
        assert_eq!(csv.lines().next().unwrap(), CUSTOMER_HEADERS.join(","));
        assert!(csv.contains("\"Flat 4, Green Residency\""));
        assert!(csv.contains("c2,Walk In,9000000001,"));
    }

    #[test]
    fn empty_customer_export_is_header_only() {
        let csv = customers_to_csv(&[]).unwrap();
        assert_eq!(csv, format!("{}\n", CUSTOMER_HEADERS.join(",")));
    }
}
