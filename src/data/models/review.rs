use crate::data::models::schema::reviews;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Insertable, Identifiable, Clone, PartialEq, Debug)]
#[diesel(table_name = reviews)]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct Review {
    pub id: String,
    pub product_id: String,
    pub user_id: String,
    pub user_name: String,
    pub rating: i32,
    pub comment: String,
    pub created_at: chrono::NaiveDateTime,
}

/// Arithmetic mean of the given ratings, rounded to one decimal place.
/// An empty slice yields 0.0.
pub fn average_rating(ratings: &[i32]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }
    let sum: i32 = ratings.iter().sum();
    let mean = f64::from(sum) / ratings.len() as f64;
    (mean * 10.0).round() / 10.0
}
