use super::{ApplicationEnv, ApplicationState};
use crate::auth::JwtAuthLayer;
use tower_http::trace::{HttpMakeClassifier, TraceLayer};

pub struct ApplicationMiddleware {
    pub auth: JwtAuthLayer,
    pub trace: TraceLayer<HttpMakeClassifier>,
}

pub fn create_middleware(env: &ApplicationEnv, state: &ApplicationState) -> ApplicationMiddleware {
    let auth = JwtAuthLayer::new(
        env.jwt_key.clone(),
        env.jwt_algorithms.clone(),
        state.sessions_repository.clone(),
    );

    let trace = TraceLayer::new_for_http();

    ApplicationMiddleware { auth, trace }
}
