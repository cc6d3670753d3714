use serde::Serialize;

/// JSON body for the signup endpoint.
///
/// Field names follow the backend's camelCase convention. Optional fields
/// are omitted from the serialized body entirely when unset — the backend
/// treats an explicit `null` differently from an absent key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub college_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}
