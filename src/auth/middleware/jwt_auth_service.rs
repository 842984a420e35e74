use crate::{
    auth::dto::{JwtClaims, User},
    repository::SessionsRepository,
};
use anyhow::anyhow;
use axum::{
    extract::Request,
    http::{header::AUTHORIZATION, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use futures_util::future::BoxFuture;
use jsonwebtoken::{DecodingKey, Validation};
use std::{
    sync::Arc,
    task::{Context, Poll},
};
use tower::Service;
use tracing::Instrument;

#[derive(Clone)]
pub struct JwtAuthService<S> {
    inner: S,
    validation: Arc<Validation>,
    key: Arc<DecodingKey>,
    sessions_repository: Arc<dyn SessionsRepository>,
}

impl<S> JwtAuthService<S> {
    pub fn new(
        inner: S,
        validation: Arc<Validation>,
        key: Arc<DecodingKey>,
        sessions_repository: Arc<dyn SessionsRepository>,
    ) -> Self {
        Self {
            inner,
            validation,
            key,
            sessions_repository,
        }
    }

    ///
    /// Returns the raw token together with its verified claims
    ///
    fn parse_authorization_header(
        &self,
        authorization_header: Option<&HeaderValue>,
    ) -> anyhow::Result<(String, JwtClaims)> {
        let Some(authorization_header) = authorization_header else {
            return Err(anyhow!("missing Authorization header"));
        };
        let Ok(authorization_value) = authorization_header.to_str() else {
            return Err(anyhow!("illegal character in Authorization header"));
        };
        let Some(token) = authorization_value.strip_prefix("Bearer ") else {
            return Err(anyhow!("unsupported authorization type"));
        };
        let token_data = jsonwebtoken::decode::<JwtClaims>(token, &self.key, &self.validation)
            .map_err(|err| anyhow!("invalid jwt: {err}"))?;

        Ok((token.to_string(), token_data.claims))
    }
}

///
/// Token is accepted only while its session exists.
///
async fn authorize(
    sessions_repository: Arc<dyn SessionsRepository>,
    authorization: anyhow::Result<(String, JwtClaims)>,
) -> Result<User, StatusCode> {
    let (token, claims) = authorization.map_err(|err| {
        tracing::warn!(%err, "auth error");
        StatusCode::UNAUTHORIZED
    })?;

    let session = sessions_repository
        .find_by_token(&token)
        .await
        .map_err(|err| {
            tracing::error!(%err, "failed to find session");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    if session.is_none() {
        tracing::warn!(user_id = claims.user_id, "auth error: no active session");
        return Err(StatusCode::UNAUTHORIZED);
    }

    Ok(User::new(claims.user_id))
}

impl<S> Service<Request> for JwtAuthService<S>
where
    S: Service<Request, Response = Response> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request) -> Self::Future {
        let authorization = self.parse_authorization_header(req.headers().get(AUTHORIZATION));
        let sessions_repository = self.sessions_repository.clone();

        // inner was polled ready, the clone left behind was not
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        Box::pin(async move {
            match authorize(sessions_repository, authorization).await {
                Ok(user) => {
                    // span that holds user information
                    let span = tracing::info_span!("user", id = user.id);

                    req.extensions_mut().insert(user);

                    inner.call(req).instrument(span).await
                }
                Err(status) => Ok(status.into_response()),
            }
        })
    }
}
