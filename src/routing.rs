use crate::{
    application::ApplicationState,
    auth::{JwtAuthLayer, User},
    dto::output,
    error::Error,
    service::hotels_service::HotelsService,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};
use std::sync::Arc;

pub fn routing(auth: JwtAuthLayer) -> Router<ApplicationState> {
    Router::new()
        .route("/hotels", get(get_hotels))
        .route("/hotels/:hotel_id", get(get_hotel_with_rooms))
        .route_layer(auth)
}

async fn get_hotels(
    State(hotels_service): State<Arc<dyn HotelsService>>,
    Extension(user): Extension<User>,
) -> Result<(StatusCode, Json<Vec<output::Hotel>>), Error> {
    let hotels = hotels_service.find_hotels(user.id).await?;

    Ok((StatusCode::OK, Json(hotels)))
}

async fn get_hotel_with_rooms(
    State(hotels_service): State<Arc<dyn HotelsService>>,
    Extension(user): Extension<User>,
    Path(hotel_id): Path<i64>,
) -> Result<(StatusCode, Json<output::HotelWithRooms>), Error> {
    let hotel = hotels_service
        .find_hotel_with_rooms(user.id, hotel_id)
        .await?;

    Ok((StatusCode::OK, Json(hotel)))
}
