use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// A single violated constraint.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ViolationDto {
    /// `The property "<field>" with value "<value>" violated a requirement (<reason>)`
    pub message: String,
}

/// Validation failure body, keyed by the name of the offending field.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(transparent)]
pub struct ValidationErrorsDto(pub BTreeMap<String, ViolationDto>);
