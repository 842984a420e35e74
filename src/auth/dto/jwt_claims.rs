use serde::Deserialize;

///
/// Claims of tokens issued by the sign-in flow.
/// Expiration is optional and validated only when present.
///
#[derive(Deserialize)]
pub struct JwtClaims {
    #[serde(rename = "userId")]
    pub user_id: i64,
}
