use crate::data::models::schema::discount_codes;
use bigdecimal::BigDecimal;
use diesel::prelude::*;
use std::str::FromStr;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DiscountType {
    Percentage,
    Fixed,
}

impl DiscountType {
    pub fn as_str(self) -> &'static str {
        match self {
            DiscountType::Percentage => "percentage",
            DiscountType::Fixed => "fixed",
        }
    }
}

impl FromStr for DiscountType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "percentage" => Ok(DiscountType::Percentage),
            "fixed" => Ok(DiscountType::Fixed),
            _ => Err(()),
        }
    }
}

#[derive(Queryable, Selectable, Insertable, Identifiable, Clone, PartialEq, Debug)]
#[diesel(table_name = discount_codes)]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct DiscountCode {
    pub id: String,
    /// Stored upper-cased; lookups normalize the same way.
    pub code: String,
    pub discount_type: String,
    pub discount_value: BigDecimal,
    pub is_active: bool,
    pub created_at: chrono::NaiveDateTime,
}
