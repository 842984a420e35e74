use crate::repository::hotels_repository::entity::HotelFindEntity;
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq)]
pub struct Hotel {
    pub id: i64,
    pub name: String,
    pub image: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl From<HotelFindEntity> for Hotel {
    fn from(value: HotelFindEntity) -> Self {
        Self {
            id: value._id,
            name: value.name,
            image: value.image,
            created_at: value.created_at.into(),
            updated_at: value.updated_at.into(),
        }
    }
}
