use crate::repository::enrollments_repository::entity::EnrollmentFindEntity;

#[derive(Debug, Clone)]
pub struct Enrollment {
    pub id: i64,
    pub user_id: i64,
}

impl From<EnrollmentFindEntity> for Enrollment {
    fn from(value: EnrollmentFindEntity) -> Self {
        Self {
            id: value._id,
            user_id: value.user_id,
        }
    }
}
