use bson::DateTime;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct HotelFindEntity {
    pub _id: i64,
    pub name: String,
    pub image: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}
