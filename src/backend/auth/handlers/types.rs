/**
 * Authentication Handler Types
 *
 * Request and response types shared by the signup, login and me handlers.
 */

use serde::{Deserialize, Serialize};

use crate::backend::auth::users::User;
use crate::shared::Role;

/// Sign up request
#[derive(Deserialize, Serialize, Debug)]
pub struct SignupRequest {
    /// Display name (1-80 chars)
    pub name: String,
    /// User's email address
    pub email: String,
    /// User's password (will be hashed before storage)
    pub password: String,
    /// Requested role; defaults to STUDENT. ADMIN is refused.
    #[serde(default)]
    pub role: Option<Role>,
}

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    /// Verified against the stored bcrypt hash
    pub password: String,
}

/// Auth response
///
/// Returned by signup and login. The same token is also set as the
/// session cookie.
#[derive(Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserResponse,
}

/// User response (without sensitive data)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserResponse {
    /// User's unique ID (UUID)
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub team_id: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name,
            email: user.email,
            role: user.role,
            team_id: user.team_id.map(|id| id.to_string()),
        }
    }
}
