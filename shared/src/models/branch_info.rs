//! Branch Info Model

use serde::{Deserialize, Serialize};

/// Branch profile (singleton per dashboard)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BranchInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
    /// Name of the branch administrator
    #[serde(default)]
    pub admin_name: String,
    /// Contact phone, free-form
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub total_staff: i32,
    #[serde(default)]
    pub established_year: i32,
    /// Areas the branch delivers to
    #[serde(default)]
    pub deliverable_areas: Vec<String>,
    pub updated_at: Option<i64>,
}

/// Update branch info payload.
///
/// Only the populated fields are written; everything else keeps its
/// current value.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BranchInfoUpdate {
    pub name: Option<String>,
    pub location: Option<String>,
    pub admin_name: Option<String>,
    pub contact: Option<String>,
    pub email: Option<String>,
    pub total_staff: Option<i32>,
    pub established_year: Option<i32>,
    pub deliverable_areas: Option<Vec<String>>,
}

impl BranchInfoUpdate {
    /// Merge the populated fields into `info`.
    pub fn apply_to(self, info: &mut BranchInfo) {
        if let Some(name) = self.name {
            info.name = name;
        }
        if let Some(location) = self.location {
            info.location = location;
        }
        if let Some(admin_name) = self.admin_name {
            info.admin_name = admin_name;
        }
        if let Some(contact) = self.contact {
            info.contact = contact;
        }
        if let Some(email) = self.email {
            info.email = email;
        }
        if let Some(total_staff) = self.total_staff {
            info.total_staff = total_staff;
        }
        if let Some(established_year) = self.established_year {
            info.established_year = established_year;
        }
        if let Some(deliverable_areas) = self.deliverable_areas {
            info.deliverable_areas = deliverable_areas;
        }
    }
}
