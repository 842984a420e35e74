///
/// User whose JWT was verified and whose session is active.
///
#[derive(Debug, Clone, Copy)]
pub struct User {
    pub id: i64,
}

impl User {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}
