//! Artist-related models and DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Query parameters for the artist profile endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistQuery {
    pub artist_id: Option<String>,
}

/// Artist profile row as served to the dashboard.
///
/// Field casing matches the store's column naming, which the pages
/// already consume.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ArtistProfile {
    pub stage_name: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "DOB")]
    pub dob: Option<NaiveDate>,
    pub listener_count: i64,
    pub follower_count: i64,
    pub minutes_listened_to: i64,
}

/// One row of the favorite-artist chart
#[derive(Debug, Serialize)]
pub struct TopArtistEntry {
    #[serde(rename = "ArtistID")]
    pub artist_id: i32,
    #[serde(rename = "StageName")]
    pub stage_name: String,
    #[serde(rename = "FavoriteCount")]
    pub favorite_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn artist_profile_keeps_store_casing_on_the_wire() {
        let profile = ArtistProfile {
            stage_name: "Nova".to_string(),
            first_name: Some("Ana".to_string()),
            last_name: Some("Reyes".to_string()),
            email: Some("nova@example.com".to_string()),
            dob: NaiveDate::from_ymd_opt(1994, 3, 12),
            listener_count: 120,
            follower_count: 80,
            minutes_listened_to: 4500,
        };
        let body = serde_json::to_value(&profile).unwrap();
        assert_eq!(body["StageName"], "Nova");
        assert_eq!(body["DOB"], "1994-03-12");
        assert_eq!(body["MinutesListenedTo"], 4500);
    }

    #[test]
    fn chart_entry_keeps_store_casing_on_the_wire() {
        let entry = TopArtistEntry {
            artist_id: 4,
            stage_name: "Nova".to_string(),
            favorite_count: 17,
        };
        let body = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"ArtistID": 4, "StageName": "Nova", "FavoriteCount": 17})
        );
    }
}
