use serde::{Deserialize, Serialize};

use crate::roles::Role;

#[derive(Debug, Deserialize)]
pub struct AdvisorRequest {
    pub role: Role,
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct AdvisorResponse {
    pub success: bool,
    pub answer: String,
    pub role: Role,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}
