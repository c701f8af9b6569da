//! Example request bodies, shaped like the API's request DTOs.

use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateTreeRequest {
    pub tree_name: String,
    pub description: String,
    pub root_person: RootPerson,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RootPerson {
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AddMemberRequest {
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    /// ISO-8601 date, `YYYY-MM-DD`.
    pub birth_date: String,
}

#[derive(Serialize, Debug, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub struct AddRelationshipRequest {
    pub related_member_id: u64,
}
