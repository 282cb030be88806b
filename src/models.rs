//! Data models and DTOs (Data Transfer Objects)
//!
//! Contains all request/response structures used by the API.

pub mod artist;
pub mod auth;
pub mod listener;
pub mod song;

// Re-export commonly used types
pub use artist::*;
pub use auth::*;
pub use listener::*;
pub use song::*;

use serde::Serialize;

/// Success response carrying a `data` payload
#[derive(Serialize)]
pub struct DataResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn data_response_nests_payload_under_data() {
        let body = serde_json::to_value(DataResponse::new(vec![1, 2, 3])).unwrap();
        assert_eq!(body, serde_json::json!({"success": true, "data": [1, 2, 3]}));
    }
}
