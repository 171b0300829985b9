use uuid::Uuid;

use crate::error::ApiError;
use crate::models::members;

/// Reject access to another member's account data.
pub fn verify_account_owner(member: &members::Model, account_id: Uuid) -> Result<(), ApiError> {
    if member.id == account_id {
        Ok(())
    } else {
        Err(ApiError::Forbidden(
            "You can only view your own account".to_string(),
        ))
    }
}

/// Reject request bodies that claim to act for a different member.
///
/// Clients may still send the identity they remember; it must match the token.
pub fn verify_claimed_identity(
    member: &members::Model,
    claimed_id: Option<Uuid>,
    claimed_username: Option<&str>,
) -> Result<(), ApiError> {
    if claimed_id.is_some_and(|id| id != member.id) {
        return Err(ApiError::Forbidden(
            "You can only act on behalf of your own account".to_string(),
        ));
    }

    if claimed_username.is_some_and(|name| name != member.username) {
        return Err(ApiError::Forbidden(
            "Username does not match the logged-in member".to_string(),
        ));
    }

    Ok(())
}
