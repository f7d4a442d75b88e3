use crate::data::models::address::Address;
use crate::data::models::schema::{order_items, orders};
use bigdecimal::BigDecimal;
use diesel::prelude::*;
use std::fmt;
use std::str::FromStr;

/// Closed order lifecycle. Stored as its lowercase string form.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Forward progression plus cancellation from any non-terminal state.
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        matches!(
            (self, next),
            (Pending, Processing)
                | (Processing, Shipped)
                | (Shipped, Delivered)
                | (Pending | Processing | Shipped, Cancelled)
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl FromStr for OrderStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "processing" => Ok(OrderStatus::Processing),
            "shipped" => Ok(OrderStatus::Shipped),
            "delivered" => Ok(OrderStatus::Delivered),
            "cancelled" => Ok(OrderStatus::Cancelled),
            _ => Err(()),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const PAYMENT_PENDING: &str = "pending";

#[derive(Queryable, Selectable, Insertable, Identifiable, Clone, PartialEq, Debug)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct Order {
    pub id: String,
    pub user_id: String,
    pub subtotal: BigDecimal,
    pub discount: BigDecimal,
    pub total: BigDecimal,
    pub status: String,
    pub payment_status: String,
    pub ship_full_name: String,
    pub ship_phone: String,
    pub ship_address_line1: String,
    pub ship_address_line2: Option<String>,
    pub ship_city: String,
    pub ship_state: String,
    pub ship_zip_code: String,
    pub ship_country: String,
    pub created_at: chrono::NaiveDateTime,
}

impl Order {
    /// Copies the chosen shipping address into the order row. The copy
    /// is frozen: later edits to the address book do not touch it.
    pub fn embed_address(&mut self, address: &Address) {
        self.ship_full_name = address.full_name.clone();
        self.ship_phone = address.phone.clone();
        self.ship_address_line1 = address.address_line1.clone();
        self.ship_address_line2 = address.address_line2.clone();
        self.ship_city = address.city.clone();
        self.ship_state = address.state.clone();
        self.ship_zip_code = address.zip_code.clone();
        self.ship_country = address.country.clone();
    }
}

/// Point-in-time snapshot of one cart line at checkout.
#[derive(Queryable, Selectable, Insertable, Clone, PartialEq, Debug)]
#[diesel(table_name = order_items)]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct OrderItem {
    pub order_id: String,
    pub product_id: String,
    pub product_name: String,
    pub product_image: String,
    pub price: BigDecimal,
    pub quantity: i32,
}

#[cfg(test)]
mod tests {
    use super::OrderStatus::*;

    #[test]
    fn forward_transitions_are_allowed() {
        assert!(Pending.can_transition_to(Processing));
        assert!(Processing.can_transition_to(Shipped));
        assert!(Shipped.can_transition_to(Delivered));
    }

    #[test]
    fn cancellation_only_before_delivery() {
        assert!(Pending.can_transition_to(Cancelled));
        assert!(Shipped.can_transition_to(Cancelled));
        assert!(!Delivered.can_transition_to(Cancelled));
        assert!(!Cancelled.can_transition_to(Pending));
    }

    #[test]
    fn no_skipping_states() {
        assert!(!Pending.can_transition_to(Shipped));
        assert!(!Pending.can_transition_to(Delivered));
        assert!(!Delivered.can_transition_to(Pending));
    }
}
