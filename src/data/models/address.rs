use crate::data::models::schema::addresses;
use diesel::prelude::*;

#[derive(Queryable, Selectable, Insertable, Identifiable, Clone, PartialEq, Debug)]
#[diesel(table_name = addresses)]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct Address {
    pub id: String,
    pub user_id: String,
    pub full_name: String,
    pub phone: String,
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub is_default: bool,
}
