use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Bare error body used by the university endpoints.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Error body carried by every enveloped endpoint.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ApiErrorDto {
    pub success: bool,
    pub error: String,
}

/// Date window echoed back by the applicants-by-date endpoint.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PeriodDto {
    pub start_date: String,
    pub end_date: String,
}

/// Request body for the status patch endpoints.
#[derive(Serialize, Deserialize, Default, ToSchema)]
pub struct StatusUpdateDto {
    pub status: Option<String>,
}

/// Uniform response envelope.
///
/// Only `success` is always present; every other member is omitted from the JSON
/// body when unset.
#[derive(Serialize, Deserialize, Debug)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<serde_json::Value>,
    #[serde(rename = "searchTerm", skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<PeriodDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub university_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Successful envelope carrying `data`.
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            count: None,
            filters: None,
            search_term: None,
            period: None,
            university_id: None,
            status: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_filters(mut self, filters: serde_json::Value) -> Self {
        self.filters = Some(filters);
        self
    }

    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }

    pub fn with_period(mut self, period: PeriodDto) -> Self {
        self.period = Some(period);
        self
    }

    pub fn with_university_id(mut self, university_id: Option<i32>) -> Self {
        self.university_id = university_id;
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// Successful envelope carrying a list and its `count`.
    pub fn list(data: Vec<T>) -> Self {
        let count = data.len();
        let mut response = Self::data(data);
        response.count = Some(count);
        response
    }
}

impl ApiResponse<()> {
    /// Successful envelope with only a message, used by deletes.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
            count: None,
            filters: None,
            search_term: None,
            period: None,
            university_id: None,
            status: None,
        }
    }
}
