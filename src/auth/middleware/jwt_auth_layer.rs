use super::jwt_auth_service::JwtAuthService;
use crate::repository::SessionsRepository;
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use std::sync::Arc;
use tower::Layer;

///
/// Middleware that validates JWT in Authorization header
/// and checks that the token belongs to an active session.
/// If Authorization is correct [crate::auth::User] is added to request extensions,
/// otherwise request is rejected with 401.
///
#[derive(Clone)]
pub struct JwtAuthLayer {
    validation: Arc<Validation>,
    key: Arc<DecodingKey>,
    sessions_repository: Arc<dyn SessionsRepository>,
}

impl JwtAuthLayer {
    pub fn new(
        key: DecodingKey,
        algorithms: Vec<Algorithm>,
        sessions_repository: Arc<dyn SessionsRepository>,
    ) -> Self {
        let mut validation = Validation::default();
        validation.algorithms = algorithms;
        // tokens of the sign-in flow don't have to expire
        validation.required_spec_claims.clear();

        Self {
            validation: Arc::new(validation),
            key: Arc::new(key),
            sessions_repository,
        }
    }
}

impl<S> Layer<S> for JwtAuthLayer {
    type Service = JwtAuthService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        JwtAuthService::new(
            inner,
            self.validation.clone(),
            self.key.clone(),
            self.sessions_repository.clone(),
        )
    }
}
