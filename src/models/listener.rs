//! Listener-related models and DTOs

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

static USERNAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new("^[A-Za-z0-9]+$").unwrap());

/// Query parameters for the listener profile endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListenerQuery {
    pub user_id: Option<String>,
}

/// Listener profile row plus the resolved favorite song name.
///
/// Field casing matches the store's column naming, which the pages
/// already consume.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListenerProfile {
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
    pub minutes_listened: i64,
    #[serde(rename = "FavoriteSongID")]
    pub favorite_song_id: Option<i32>,
    pub favorite_genre: Option<String>,
    #[serde(rename = "FavoriteArtistID")]
    pub favorite_artist_id: Option<i32>,
    pub subscription_type: Option<String>,
    pub join_date: NaiveDate,
    pub favorite_song_name: Option<String>,
}

/// Account registration request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateListenerRequest {
    #[validate(
        length(min = 1, message = "Missing username"),
        regex(path = *USERNAME_RE, message = "Username must contain only letters and digits")
    )]
    pub username: String,

    #[validate(length(min = 1, message = "Missing firstname"))]
    pub firstname: String,

    #[validate(length(min = 1, message = "Missing lastname"))]
    pub lastname: String,

    #[validate(length(min = 1, message = "Missing subType"))]
    pub sub_type: String,

    #[validate(length(min = 1, message = "Missing password"))]
    pub password: String,
}

/// Account registration response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateListenerResponse {
    pub success: bool,
    pub message: String,
    pub user_id: i32,
}

/// Favorite-song update request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteSongRequest {
    #[validate(range(min = 1, message = "userId must be a positive integer"))]
    pub user_id: i32,

    #[validate(range(min = 1, message = "songId must be a positive integer"))]
    pub song_id: i32,
}

/// Favorite-song update response, echoing the resolved song name
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteSongResponse {
    pub success: bool,
    pub message: String,
    pub song_name: String,
}

/// Favorite-artist update request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteArtistRequest {
    #[validate(range(min = 1, message = "userId must be a positive integer"))]
    pub user_id: i32,

    #[validate(range(min = 1, message = "artistId must be a positive integer"))]
    pub artist_id: i32,
}

/// Favorite-artist update response, echoing the resolved stage name
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteArtistResponse {
    pub success: bool,
    pub message: String,
    pub artist_name: String,
}

/// Query parameters for the loyalty endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoyaltyQuery {
    pub user_id: Option<String>,
}

/// Loyalty tier response
#[derive(Debug, Serialize)]
pub struct LoyaltyResponse {
    pub success: bool,
    pub level: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn registration(username: &str) -> CreateListenerRequest {
        CreateListenerRequest {
            username: username.to_string(),
            firstname: "Ada".to_string(),
            lastname: "Loveless".to_string(),
            sub_type: "Premium".to_string(),
            password: "hunter2".to_string(),
        }
    }

    #[test]
    fn alphanumeric_usernames_pass() {
        assert!(registration("ab12").validate().is_ok());
    }

    #[test]
    fn punctuated_usernames_fail() {
        assert!(registration("ab-12").validate().is_err());
        assert!(registration("ab 12").validate().is_err());
        assert!(registration("").validate().is_err());
    }

    #[test]
    fn registration_requires_every_field() {
        let mut req = registration("ab12");
        req.password = String::new();
        assert!(req.validate().is_err());
    }

    #[test]
    fn favorite_requests_reject_non_positive_ids() {
        let req = FavoriteSongRequest {
            user_id: 1,
            song_id: 0,
        };
        assert!(req.validate().is_err());

        let req = FavoriteSongRequest {
            user_id: 1,
            song_id: 42,
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn listener_profile_keeps_store_casing_on_the_wire() {
        let profile = ListenerProfile {
            first_name: "Ada".to_string(),
            last_name: "Loveless".to_string(),
            user_name: "ada99".to_string(),
            minutes_listened: 250,
            favorite_song_id: Some(7),
            favorite_genre: Some("House".to_string()),
            favorite_artist_id: None,
            subscription_type: Some("Premium".to_string()),
            join_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            favorite_song_name: Some("Midnight Run".to_string()),
        };
        let body = serde_json::to_value(&profile).unwrap();
        assert_eq!(body["UserName"], "ada99");
        assert_eq!(body["FavoriteSongID"], 7);
        assert_eq!(body["FavoriteArtistID"], serde_json::Value::Null);
        assert_eq!(body["FavoriteSongName"], "Midnight Run");
        assert_eq!(body["JoinDate"], "2024-01-15");
    }
}
