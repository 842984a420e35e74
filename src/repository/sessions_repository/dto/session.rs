use crate::repository::sessions_repository::entity::SessionFindEntity;

#[derive(Debug, Clone)]
pub struct Session {
    pub id: i64,
    pub user_id: i64,
    pub token: String,
}

impl From<SessionFindEntity> for Session {
    fn from(value: SessionFindEntity) -> Self {
        Self {
            id: value._id,
            user_id: value.user_id,
            token: value.token,
        }
    }
}
