use serde::Deserialize;

#[derive(Deserialize)]
pub struct TicketWithTypeFindEntity {
    pub _id: i64,
    pub enrollment_id: i64,
    pub status: String,

    /// joined from ticket_types by ticket_type_id
    pub ticket_type: TicketTypeFindEntity,
}

#[derive(Deserialize)]
pub struct TicketTypeFindEntity {
    pub _id: i64,
    pub is_remote: bool,
    pub includes_hotel: bool,
}
