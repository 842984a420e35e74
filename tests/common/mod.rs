#![allow(dead_code)]

use bson::{doc, DateTime, Document};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use mongodb::{options::ClientOptions, Client, Database};
use serde_json::json;
use std::{
    str::FromStr,
    sync::{
        atomic::{AtomicI64, Ordering},
        Once,
    },
};
use time::{macros::datetime, OffsetDateTime};

static INIT_ENV_ONCE: Once = Once::new();
static NEXT_ID: AtomicI64 = AtomicI64::new(1);

const COLLECTIONS: [&str; 6] = [
    "sessions",
    "enrollments",
    "tickets",
    "ticket_types",
    "hotels",
    "rooms",
];

pub fn init_env() {
    INIT_ENV_ONCE.call_once(|| {
        let _ = dotenvy::dotenv();
    });
}

pub fn address() -> String {
    std::env::var("HOTELS_API_BIND_ADDRESS").unwrap()
}

pub fn next_id() -> i64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

///
/// Connects to the same database the server reads from
/// and removes all documents left by previous tests
///
pub async fn clean_database() -> Database {
    let connection_string = std::env::var("HOTELS_API_DB_CONNECTION_STRING").unwrap();
    let db_name = std::env::var("HOTELS_API_DB_NAME").unwrap();

    let db_client_options = ClientOptions::parse(connection_string).await.unwrap();
    let db_client = Client::with_options(db_client_options).unwrap();
    let db = db_client.database(&db_name);

    for collection in COLLECTIONS {
        db.collection::<Document>(collection)
            .delete_many(doc! {})
            .await
            .unwrap();
    }

    db
}

pub fn create_jwt(user_id: i64) -> String {
    let jwt_algorithms = std::env::var("HOTELS_API_JWT_ALGORITHMS").unwrap();
    let jwt_key = std::env::var("HOTELS_API_JWT_TEST_ENCODE_KEY").unwrap();

    let jwt_algorithm = jwt_algorithms
        .split(',')
        .next()
        .map(|algorithm| Algorithm::from_str(algorithm.trim()).unwrap())
        .unwrap();
    let jwt_key_bytes = jwt_key.as_bytes();
    let jwt_key = match jwt_algorithm {
        Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => {
            EncodingKey::from_secret(jwt_key_bytes)
        }
        Algorithm::ES256 | Algorithm::ES384 => EncodingKey::from_ec_pem(jwt_key_bytes).unwrap(),
        Algorithm::EdDSA => EncodingKey::from_ed_pem(jwt_key_bytes).unwrap(),
        _ => EncodingKey::from_rsa_pem(jwt_key_bytes).unwrap(),
    };

    jsonwebtoken::encode(
        &Header::new(jwt_algorithm),
        &json!({ "userId": user_id }),
        &jwt_key,
    )
    .unwrap()
}

///
/// Creates user with an active session
///
/// ### Returns
/// (user_id, token)
///
pub async fn create_user_with_session(db: &Database) -> (i64, String) {
    let user_id = next_id();
    let token = create_jwt(user_id);

    db.collection::<Document>("sessions")
        .insert_one(doc! {
            "_id": next_id(),
            "user_id": user_id,
            "token": &token,
        })
        .await
        .unwrap();

    (user_id, token)
}

pub async fn create_enrollment(db: &Database, user_id: i64) -> i64 {
    let id = next_id();

    db.collection::<Document>("enrollments")
        .insert_one(doc! {
            "_id": id,
            "user_id": user_id,
            "name": "Jane Doe",
            "cpf": "00000000000",
            "birthday": DateTime::from(datetime!(1990-05-17 00:00 UTC)),
            "phone": "(21) 98999-9999",
        })
        .await
        .unwrap();

    id
}

pub async fn create_ticket_type(db: &Database, is_remote: bool, includes_hotel: bool) -> i64 {
    let id = next_id();

    db.collection::<Document>("ticket_types")
        .insert_one(doc! {
            "_id": id,
            "name": format!("ticket type {id}"),
            "price": 600,
            "is_remote": is_remote,
            "includes_hotel": includes_hotel,
        })
        .await
        .unwrap();

    id
}

pub async fn create_ticket(
    db: &Database,
    enrollment_id: i64,
    ticket_type_id: i64,
    status: &str,
) -> i64 {
    let id = next_id();

    db.collection::<Document>("tickets")
        .insert_one(doc! {
            "_id": id,
            "enrollment_id": enrollment_id,
            "ticket_type_id": ticket_type_id,
            "status": status,
        })
        .await
        .unwrap();

    id
}

///
/// Creates user with enrollment and a ticket of new ticket type
///
/// ### Returns
/// token of the user
///
pub async fn create_user_with_ticket(
    db: &Database,
    is_remote: bool,
    includes_hotel: bool,
    status: &str,
) -> String {
    let (user_id, token) = create_user_with_session(db).await;
    let enrollment_id = create_enrollment(db, user_id).await;
    let ticket_type_id = create_ticket_type(db, is_remote, includes_hotel).await;
    create_ticket(db, enrollment_id, ticket_type_id, status).await;

    token
}

pub struct CreatedHotel {
    pub id: i64,
    pub name: String,
    pub image: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

pub async fn create_hotel(db: &Database) -> CreatedHotel {
    let hotel = CreatedHotel {
        id: next_id(),
        name: "Driven Resort".to_string(),
        image: "https://example.com/resort.png".to_string(),
        created_at: datetime!(2024-01-21 19:06:25.123 UTC),
        updated_at: datetime!(2024-03-02 11:30:00 UTC),
    };

    db.collection::<Document>("hotels")
        .insert_one(doc! {
            "_id": hotel.id,
            "name": &hotel.name,
            "image": &hotel.image,
            "created_at": DateTime::from(hotel.created_at),
            "updated_at": DateTime::from(hotel.updated_at),
        })
        .await
        .unwrap();

    hotel
}

pub async fn create_room(db: &Database, hotel_id: i64) -> i64 {
    let id = next_id();

    db.collection::<Document>("rooms")
        .insert_one(doc! {
            "_id": id,
            "name": format!("room {id}"),
            "capacity": 3,
            "hotel_id": hotel_id,
            "created_at": DateTime::from(datetime!(2024-01-21 19:06:25 UTC)),
            "updated_at": DateTime::from(datetime!(2024-01-22 19:06:25 UTC)),
        })
        .await
        .unwrap();

    id
}
