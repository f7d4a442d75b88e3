use crate::api::errors::ApiError;
use crate::api::extractors::{AdminUser, CurrentUser};
use crate::api::request::{
    CreateProductRequest, CreateReviewRequest, ProductQuery, UpdateProductRequest,
};
use crate::api::response::{MessageResponse, ProductResponse, ReviewResponse};
use crate::api::state::AppState;
use crate::data::models::product::{ProductChanges, ProductFilter};
use crate::services::catalog_service::NewProductFields;
use axum::Json;
use axum::extract::{Path, Query, State};
use bigdecimal::{BigDecimal, FromPrimitive};
use serde_json::json;
use std::sync::Arc;

fn decimal(value: f64, field: &str) -> Result<BigDecimal, ApiError> {
    BigDecimal::from_f64(value)
        .ok_or_else(|| ApiError::Validation(format!("{field} is not a valid number")))
}

impl ProductQuery {
    fn into_filter(self) -> Result<ProductFilter, ApiError> {
        Ok(ProductFilter {
            category: self.category,
            brand: self.brand,
            search: self.search,
            min_price: self.min_price.map(|p| decimal(p, "min_price")).transpose()?,
            max_price: self.max_price.map(|p| decimal(p, "max_price")).transpose()?,
            min_rating: self.min_rating,
            ids: self.ids.map(|raw| {
                raw.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            }),
        })
    }
}

pub async fn get_products(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ProductQuery>,
) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let filter = query.into_filter()?;
    let products = state.catalog.list(filter).await?;

    Ok(Json(
        products
            .into_iter()
            .map(|(product, reviews)| ProductResponse::from_parts(product, reviews))
            .collect(),
    ))
}

pub async fn get_product_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ProductResponse>, ApiError> {
    let (product, reviews) = state.catalog.get(&id).await?;
    Ok(Json(ProductResponse::from_parts(product, reviews)))
}

pub async fn create_product(
    State(state): State<Arc<AppState>>,
    AdminUser(_admin): AdminUser,
    Json(body): Json<CreateProductRequest>,
) -> Result<Json<ProductResponse>, ApiError> {
    let fields = NewProductFields {
        name: body.name,
        description: body.description,
        price: decimal(body.price, "price")?,
        category: body.category,
        brand: body.brand,
        images: body.images,
        stock: body.stock,
    };

    let product = state.catalog.create(fields).await?;
    Ok(Json(ProductResponse::from_parts(product, Vec::new())))
}

pub async fn update_product(
    State(state): State<Arc<AppState>>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<String>,
    Json(body): Json<UpdateProductRequest>,
) -> Result<Json<ProductResponse>, ApiError> {
    let changes = ProductChanges {
        name: body.name,
        description: body.description,
        price: body.price.map(|p| decimal(p, "price")).transpose()?,
        category: body.category,
        brand: body.brand,
        images: body
            .images
            .map(|imgs| serde_json::to_string(&imgs).unwrap_or_else(|_| String::from("[]"))),
        stock: body.stock,
    };

    let (product, reviews) = state.catalog.update(&id, changes).await?;
    Ok(Json(ProductResponse::from_parts(product, reviews)))
}

pub async fn delete_product(
    State(state): State<Arc<AppState>>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.catalog.delete(&id).await?;
    Ok(Json(MessageResponse::new("Product deleted")))
}

pub async fn add_review(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
    Json(body): Json<CreateReviewRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let (review, _product) = state
        .catalog
        .add_review(&id, &user, body.rating, body.comment)
        .await?;

    Ok(Json(json!({
        "message": "Review added",
        "review": ReviewResponse::from(review),
    })))
}
