use crate::data::models::schema::products;
use bigdecimal::BigDecimal;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Insertable, Identifiable, Clone, PartialEq, Debug)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub category: String,
    pub brand: String,
    /// JSON-encoded list of image URIs.
    pub images: String,
    pub stock: i32,
    pub rating: f64,
    pub review_count: i32,
    pub created_at: chrono::NaiveDateTime,
}

impl Product {
    pub fn image_list(&self) -> Vec<String> {
        serde_json::from_str(&self.images).unwrap_or_default()
    }

    pub fn first_image(&self) -> String {
        self.image_list().into_iter().next().unwrap_or_default()
    }
}

/// Partial update form for a product. `None` fields are left untouched.
#[derive(AsChangeset, Clone, Default, PartialEq, Debug)]
#[diesel(table_name = products)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<BigDecimal>,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub images: Option<String>,
    pub stock: Option<i32>,
}

impl ProductChanges {
    pub fn is_empty(&self) -> bool {
        *self == ProductChanges::default()
    }

    /// Applies the changeset to an owned product. Used by stores that
    /// are not backed by SQL.
    pub fn apply_to(&self, product: &mut Product) {
        if let Some(v) = &self.name {
            product.name = v.clone();
        }
        if let Some(v) = &self.description {
            product.description = v.clone();
        }
        if let Some(v) = &self.price {
            product.price = v.clone();
        }
        if let Some(v) = &self.category {
            product.category = v.clone();
        }
        if let Some(v) = &self.brand {
            product.brand = v.clone();
        }
        if let Some(v) = &self.images {
            product.images = v.clone();
        }
        if let Some(v) = self.stock {
            product.stock = v;
        }
    }
}

/// Catalog list filter. When `ids` is present every other criterion is
/// ignored and exactly the matching subset is returned.
#[derive(Clone, Default, Debug)]
pub struct ProductFilter {
    pub category: Option<String>,
    pub brand: Option<String>,
    pub search: Option<String>,
    pub min_price: Option<BigDecimal>,
    pub max_price: Option<BigDecimal>,
    pub min_rating: Option<f64>,
    pub ids: Option<Vec<String>>,
}
