use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row of the `usuarios` table. Both columns are nullable: registration
/// forwards absent body fields as SQL NULL.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbUser {
    pub usuario: Option<String>,
    pub contra: Option<String>,
}
