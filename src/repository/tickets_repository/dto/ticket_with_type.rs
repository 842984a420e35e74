use crate::repository::tickets_repository::entity::{
    TicketTypeFindEntity, TicketWithTypeFindEntity,
};

///
/// Ticket joined with its ticket type.
///
/// Status is kept as stored so values other than
/// [super::TicketStatus] variants are not rejected.
///
#[derive(Debug, Clone)]
pub struct TicketWithType {
    pub id: i64,
    pub enrollment_id: i64,
    pub status: String,
    pub ticket_type: TicketType,
}

#[derive(Debug, Clone)]
pub struct TicketType {
    pub id: i64,
    pub is_remote: bool,
    pub includes_hotel: bool,
}

impl From<TicketWithTypeFindEntity> for TicketWithType {
    fn from(value: TicketWithTypeFindEntity) -> Self {
        Self {
            id: value._id,
            enrollment_id: value.enrollment_id,
            status: value.status,
            ticket_type: value.ticket_type.into(),
        }
    }
}

impl From<TicketTypeFindEntity> for TicketType {
    fn from(value: TicketTypeFindEntity) -> Self {
        Self {
            id: value._id,
            is_remote: value.is_remote,
            includes_hotel: value.includes_hotel,
        }
    }
}
