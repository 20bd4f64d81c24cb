//! DTOs for decoding users service responses.

use serde::Deserialize;

use crate::domain::{UserId, UserSummary};

/// Wire shape of `GET /api/users/{id}`.
#[derive(Debug, Deserialize)]
pub(super) struct UserSummaryDto {
    pub(super) id: i64,
    pub(super) name: String,
    pub(super) email: String,
}

impl From<UserSummaryDto> for UserSummary {
    fn from(dto: UserSummaryDto) -> Self {
        Self {
            id: UserId::new(dto.id),
            name: dto.name,
            email: dto.email,
        }
    }
}
