use crate::data::models::schema::cart_items;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Insertable, Identifiable, Clone, PartialEq, Debug)]
#[diesel(table_name = cart_items)]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct CartItem {
    pub id: String,
    pub user_id: String,
    pub product_id: String,
    pub quantity: i32,
    pub created_at: chrono::NaiveDateTime,
}
