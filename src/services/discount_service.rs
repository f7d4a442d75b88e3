use crate::data::models::discount_code::{DiscountCode, DiscountType};
use crate::data::repos::traits::DiscountStore;
use crate::services::errors::ServiceError;
use bigdecimal::{BigDecimal, RoundingMode};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

/// Outcome of evaluating a code against a subtotal. An unknown or
/// inactive code is a normal `valid = false` outcome, not a failure.
#[derive(Clone, Debug, PartialEq)]
pub struct DiscountOutcome {
    pub valid: bool,
    pub discount: BigDecimal,
    pub message: String,
}

/// Percentage codes take `subtotal * value / 100`, fixed codes take
/// `value`; either way the result is capped at the subtotal and
/// rounded half-up to two decimals.
pub fn compute_discount(code: &DiscountCode, subtotal: &BigDecimal) -> BigDecimal {
    let raw = match DiscountType::from_str(&code.discount_type) {
        Ok(DiscountType::Percentage) => {
            (subtotal * &code.discount_value) / BigDecimal::from(100)
        }
        Ok(DiscountType::Fixed) => code.discount_value.clone(),
        Err(()) => BigDecimal::from(0),
    };

    raw.min(subtotal.clone()).with_scale_round(2, RoundingMode::HalfUp)
}

#[derive(Clone)]
pub struct DiscountService {
    discounts: Arc<dyn DiscountStore>,
}

impl DiscountService {
    pub fn new(discounts: Arc<dyn DiscountStore>) -> Self {
        DiscountService { discounts }
    }

    pub async fn apply(
        &self,
        code: &str,
        subtotal: &BigDecimal,
    ) -> Result<DiscountOutcome, ServiceError> {
        if *subtotal < BigDecimal::from(0) {
            return Err(ServiceError::Validation(
                "Subtotal must not be negative".into(),
            ));
        }

        let normalized = code.to_uppercase();
        let Some(found) = self.discounts.get_active_by_code(&normalized).await? else {
            return Ok(DiscountOutcome {
                valid: false,
                discount: BigDecimal::from(0),
                message: "Invalid discount code".into(),
            });
        };

        Ok(DiscountOutcome {
            valid: true,
            discount: compute_discount(&found, subtotal),
            message: format!("Discount code applied: {}", found.code),
        })
    }

    pub async fn create(
        &self,
        code: &str,
        discount_type: &str,
        discount_value: BigDecimal,
    ) -> Result<DiscountCode, ServiceError> {
        if DiscountType::from_str(discount_type).is_err() {
            return Err(ServiceError::Validation(
                "Discount type must be 'percentage' or 'fixed'".into(),
            ));
        }
        if code.trim().is_empty() {
            return Err(ServiceError::Validation("Code is required".into()));
        }
        if discount_value < BigDecimal::from(0) {
            return Err(ServiceError::Validation(
                "Discount value must not be negative".into(),
            ));
        }

        let record = DiscountCode {
            id: Uuid::new_v4().to_string(),
            code: code.to_uppercase(),
            discount_type: discount_type.to_string(),
            discount_value,
            is_active: true,
            created_at: chrono::Utc::now().naive_utc(),
        };

        self.discounts.insert(record.clone()).await?;
        Ok(record)
    }

    pub async fn list(&self) -> Result<Vec<DiscountCode>, ServiceError> {
        Ok(self.discounts.list().await?)
    }
}
