use super::HotelsService;
use crate::{
    dto::output, error::Error, repository::HotelsRepository,
    service::entitlements_service::EntitlementsService,
};
use axum::async_trait;
use std::sync::Arc;

pub struct HotelsServiceImpl {
    entitlements_service: Arc<dyn EntitlementsService>,
    repository: Arc<dyn HotelsRepository>,
}

impl HotelsServiceImpl {
    pub fn new(
        entitlements_service: Arc<dyn EntitlementsService>,
        repository: Arc<dyn HotelsRepository>,
    ) -> Self {
        Self {
            entitlements_service,
            repository,
        }
    }
}

#[async_trait]
impl HotelsService for HotelsServiceImpl {
    async fn find_hotels(&self, user_id: i64) -> Result<Vec<output::Hotel>, Error> {
        self.entitlements_service
            .check_hotel_entitlement(user_id)
            .await?;

        tracing::info!("finding hotels");

        let hotels = self.repository.find_all().await?;
        tracing::info!(count = hotels.len(), "found hotels");

        if hotels.is_empty() {
            return Err(Error::HotelsNotExist);
        }

        let hotels = hotels.into_iter().map(output::Hotel::from).collect();

        Ok(hotels)
    }

    async fn find_hotel_with_rooms(
        &self,
        user_id: i64,
        hotel_id: i64,
    ) -> Result<output::HotelWithRooms, Error> {
        self.entitlements_service
            .check_hotel_entitlement(user_id)
            .await?;

        tracing::info!(hotel_id, "finding hotel");

        let hotel = self
            .repository
            .find_with_rooms(hotel_id)
            .await?
            .ok_or(Error::HotelNotExist)?;

        tracing::info!(rooms = hotel.rooms.len(), "found hotel");

        Ok(hotel.into())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        repository::{self, Hotel, HotelWithRooms, MockHotelsRepository, Room},
        service::entitlements_service::MockEntitlementsService,
    };
    use time::macros::datetime;

    const USER_ID: i64 = 14;

    fn hotel(id: i64) -> Hotel {
        Hotel {
            id,
            name: format!("hotel {id}"),
            image: "https://example.com/hotel.png".to_string(),
            created_at: datetime!(2024-01-21 19:06:25 UTC),
            updated_at: datetime!(2024-02-01 08:00:00 UTC),
        }
    }

    fn room(id: i64, hotel_id: i64) -> Room {
        Room {
            id,
            name: format!("room {id}"),
            capacity: 2,
            hotel_id,
            created_at: datetime!(2024-01-21 19:06:25 UTC),
            updated_at: datetime!(2024-01-22 19:06:25 UTC),
        }
    }

    fn entitled() -> MockEntitlementsService {
        let mut entitlements_service = MockEntitlementsService::new();
        entitlements_service
            .expect_check_hotel_entitlement()
            .withf(|user_id| *user_id == USER_ID)
            .returning(|_| Ok(()));

        entitlements_service
    }

    fn not_entitled(error: fn() -> Error) -> MockEntitlementsService {
        let mut entitlements_service = MockEntitlementsService::new();
        entitlements_service
            .expect_check_hotel_entitlement()
            .returning(move |_| Err(error()));

        entitlements_service
    }

    fn service(
        entitlements_service: MockEntitlementsService,
        repository: MockHotelsRepository,
    ) -> HotelsServiceImpl {
        HotelsServiceImpl::new(Arc::new(entitlements_service), Arc::new(repository))
    }

    async fn find_hotels_not_entitled(error: fn() -> Error) -> Result<Vec<output::Hotel>, Error> {
        let mut repository = MockHotelsRepository::new();
        repository.expect_find_all().never();

        service(not_entitled(error), repository)
            .find_hotels(USER_ID)
            .await
    }

    #[tokio::test]
    async fn find_hotels_enrollment_not_exist() {
        let result = find_hotels_not_entitled(|| Error::EnrollmentNotExist).await;

        assert!(matches!(result, Err(Error::EnrollmentNotExist)));
    }

    #[tokio::test]
    async fn find_hotels_ticket_not_exist() {
        let result = find_hotels_not_entitled(|| Error::TicketNotExist).await;

        assert!(matches!(result, Err(Error::TicketNotExist)));
    }

    #[tokio::test]
    async fn find_hotels_payment_required() {
        let result = find_hotels_not_entitled(|| Error::PaymentRequired("ticket not paid")).await;

        assert!(matches!(result, Err(Error::PaymentRequired(_))));
    }

    #[tokio::test]
    async fn find_hotels_empty() {
        let mut repository = MockHotelsRepository::new();
        repository.expect_find_all().return_once(|| Ok(Vec::new()));

        let result = service(entitled(), repository).find_hotels(USER_ID).await;

        assert!(matches!(result, Err(Error::HotelsNotExist)));
    }

    #[tokio::test]
    async fn find_hotels_ok() {
        let mut repository = MockHotelsRepository::new();
        repository
            .expect_find_all()
            .return_once(|| Ok(vec![hotel(1), hotel(2)]));

        let hotels = service(entitled(), repository)
            .find_hotels(USER_ID)
            .await
            .unwrap();

        assert_eq!(hotels.len(), 2);
        assert_eq!(hotels[0].id, 1);
        assert_eq!(hotels[0].name, "hotel 1");
        assert_eq!(hotels[1].id, 2);
    }

    #[tokio::test]
    async fn find_hotels_idempotent() {
        let mut repository = MockHotelsRepository::new();
        repository
            .expect_find_all()
            .times(2)
            .returning(|| Ok(vec![hotel(1)]));
        let service = service(entitled(), repository);

        let first = service.find_hotels(USER_ID).await.unwrap();
        let second = service.find_hotels(USER_ID).await.unwrap();

        assert_eq!(
            serde_json::to_value(first).unwrap(),
            serde_json::to_value(second).unwrap()
        );
    }

    #[tokio::test]
    async fn find_hotel_with_rooms_entitlement_error_propagated() {
        let mut repository = MockHotelsRepository::new();
        repository.expect_find_with_rooms().never();

        let result = service(
            not_entitled(|| Error::PaymentRequired("ticket type is remote")),
            repository,
        )
        .find_hotel_with_rooms(USER_ID, 1)
        .await;

        assert!(matches!(result, Err(Error::PaymentRequired(_))));
    }

    #[tokio::test]
    async fn find_hotel_with_rooms_not_exist() {
        let mut repository = MockHotelsRepository::new();
        repository
            .expect_find_with_rooms()
            .withf(|id| *id == 2)
            .return_once(|_| Ok(None));

        let result = service(entitled(), repository)
            .find_hotel_with_rooms(USER_ID, 2)
            .await;

        assert!(matches!(result, Err(Error::HotelNotExist)));
    }

    #[tokio::test]
    async fn find_hotel_with_rooms_no_rooms() {
        let mut repository = MockHotelsRepository::new();
        repository.expect_find_with_rooms().return_once(|id| {
            Ok(Some(HotelWithRooms {
                hotel: hotel(id),
                rooms: Vec::new(),
            }))
        });

        let hotel = service(entitled(), repository)
            .find_hotel_with_rooms(USER_ID, 1)
            .await
            .unwrap();

        assert_eq!(hotel.id, 1);
        assert!(hotel.rooms.is_empty());
    }

    #[tokio::test]
    async fn find_hotel_with_rooms_ok() {
        let mut repository = MockHotelsRepository::new();
        repository.expect_find_with_rooms().return_once(|id| {
            Ok(Some(HotelWithRooms {
                hotel: hotel(id),
                rooms: (1..=5).map(|room_id| room(room_id, id)).collect(),
            }))
        });

        let hotel = service(entitled(), repository)
            .find_hotel_with_rooms(USER_ID, 1)
            .await
            .unwrap();

        assert_eq!(hotel.rooms.len(), 5);
        assert!(hotel.rooms.iter().all(|room| room.hotel_id == 1));
        let ids = hotel.rooms.iter().map(|room| room.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn find_hotel_with_rooms_database_error() {
        let mut repository = MockHotelsRepository::new();
        repository.expect_find_with_rooms().return_once(|_| {
            Err(repository::Error::Mongo(
                mongodb::error::ErrorKind::Custom(Arc::new("connection lost")).into(),
            ))
        });

        let result = service(entitled(), repository)
            .find_hotel_with_rooms(USER_ID, 1)
            .await;

        assert!(matches!(result, Err(Error::Database(_))));
    }
}
