use super::{
    entity::{HotelFindEntity, RoomFindEntity},
    Hotel, HotelWithRooms, HotelsRepository, Room,
};
use crate::repository;
use axum::async_trait;
use bson::{doc, Document};
use futures_util::TryStreamExt;
use mongodb::{options::IndexOptions, Database, IndexModel};

const HOTELS: &str = "hotels";
const ROOMS: &str = "rooms";
const INDEX_NAME_HOTEL_ID: &str = "index_hotel_id";

pub struct HotelsRepositoryImpl {
    database: Database,
}

impl HotelsRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        database
            .collection::<Document>(ROOMS)
            .create_index(
                IndexModel::builder()
                    .keys(doc! {
                        "hotel_id": 1,
                    })
                    .options(
                        IndexOptions::builder()
                            .name(INDEX_NAME_HOTEL_ID.to_string())
                            .build(),
                    )
                    .build(),
            )
            .await?;
        tracing::debug!(collection = ROOMS, index = INDEX_NAME_HOTEL_ID, "created index");

        Ok(Self { database })
    }
}

#[async_trait]
impl HotelsRepository for HotelsRepositoryImpl {
    async fn find_all(&self) -> Result<Vec<Hotel>, repository::Error> {
        let hotels = self
            .database
            .collection::<HotelFindEntity>(HOTELS)
            .find(doc! {})
            .sort(doc! { "_id": 1 })
            .await?
            .map_ok(Hotel::from)
            .try_collect()
            .await?;

        Ok(hotels)
    }

    async fn find_with_rooms(&self, id: i64) -> Result<Option<HotelWithRooms>, repository::Error> {
        let hotel = self
            .database
            .collection::<HotelFindEntity>(HOTELS)
            .find_one(doc! {
                "_id": id,
            })
            .await?;
        let Some(hotel) = hotel else {
            return Ok(None);
        };

        let rooms = self
            .database
            .collection::<RoomFindEntity>(ROOMS)
            .find(doc! {
                "hotel_id": id,
            })
            .sort(doc! { "_id": 1 })
            .await?
            .map_ok(Room::from)
            .try_collect()
            .await?;

        Ok(Some(HotelWithRooms {
            hotel: hotel.into(),
            rooms,
        }))
    }
}
