use serde::Deserialize;

#[derive(Deserialize)]
pub struct SessionFindEntity {
    pub _id: i64,
    pub user_id: i64,
    pub token: String,
}
