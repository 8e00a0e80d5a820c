//! Session user model

use serde::{Deserialize, Serialize};

/// The signed-in dashboard user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionUser {
    pub id: u64,
    pub name: String,
    pub email: String,
    /// Role label, e.g. "manager"
    pub role: String,
    /// Branch the user manages
    pub branch: String,
}
