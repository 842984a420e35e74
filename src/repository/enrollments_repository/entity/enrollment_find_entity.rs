use serde::Deserialize;

///
/// Only fields needed to reach user's ticket,
/// address and personal data are skipped
///
#[derive(Deserialize)]
pub struct EnrollmentFindEntity {
    pub _id: i64,
    pub user_id: i64,
}
