use super::ApplicationEnv;
use crate::{
    repository::{
        EnrollmentsRepositoryImpl, HotelsRepositoryImpl, SessionsRepository,
        SessionsRepositoryImpl, TicketsRepositoryImpl,
    },
    service::{
        entitlements_service::EntitlementsServiceImpl,
        hotels_service::{HotelsService, HotelsServiceImpl},
    },
};
use axum::extract::FromRef;
use mongodb::{options::ClientOptions, Client};
use std::sync::Arc;

#[derive(Clone, FromRef)]
pub struct ApplicationState {
    pub hotels_service: Arc<dyn HotelsService>,
    pub sessions_repository: Arc<dyn SessionsRepository>,
}

pub struct ApplicationStateToClose {
    pub db_client: Client,
}

pub async fn create_state(
    env: &ApplicationEnv,
) -> anyhow::Result<(ApplicationState, ApplicationStateToClose)> {
    tracing::info!("connecting to database");
    let db_client_options = ClientOptions::parse(&env.db_connection_string).await?;
    let db_client = Client::with_options(db_client_options)?;
    let db = db_client.database(&env.db_name);

    tracing::info!("creating repositories");
    let sessions_repository = SessionsRepositoryImpl::new(db.clone()).await?;
    let sessions_repository = Arc::new(sessions_repository);

    let enrollments_repository = EnrollmentsRepositoryImpl::new(db.clone()).await?;
    let enrollments_repository = Arc::new(enrollments_repository);

    let tickets_repository = TicketsRepositoryImpl::new(db.clone()).await?;
    let tickets_repository = Arc::new(tickets_repository);

    let hotels_repository = HotelsRepositoryImpl::new(db).await?;
    let hotels_repository = Arc::new(hotels_repository);

    tracing::info!("creating services");
    let entitlements_service =
        EntitlementsServiceImpl::new(enrollments_repository, tickets_repository);
    let entitlements_service = Arc::new(entitlements_service);

    let hotels_service = HotelsServiceImpl::new(entitlements_service, hotels_repository);
    let hotels_service = Arc::new(hotels_service);

    Ok((
        ApplicationState {
            hotels_service,
            sessions_repository,
        },
        ApplicationStateToClose { db_client },
    ))
}
