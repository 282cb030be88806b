//! Song-related models and DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Song registration request; the song id is caller-supplied
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddSongRequest {
    #[validate(length(min = 1, message = "Missing songName"))]
    pub song_name: String,

    #[validate(length(min = 1, message = "Missing genre"))]
    pub genre: String,

    #[validate(range(min = 1, message = "length must be a positive integer"))]
    pub length: i32,

    #[validate(range(min = 1, message = "artistId must be a positive integer"))]
    pub artist_id: i32,

    #[validate(range(min = 1, message = "songId must be a positive integer"))]
    pub song_id: i32,
}

/// Song registration response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddSongResponse {
    pub success: bool,
    pub message: String,
    pub new_song_id: i32,
}

/// Play-count update request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PlayRequest {
    #[validate(range(min = 1, message = "songId must be a positive integer"))]
    pub song_id: i32,
}

/// Play-count update response, echoing the resolved song name
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayResponse {
    pub success: bool,
    pub message: String,
    pub song_name: String,
}

/// One row of the favorite-song chart
#[derive(Debug, Serialize)]
pub struct TopSongEntry {
    #[serde(rename = "SongID")]
    pub song_id: i32,
    #[serde(rename = "SongName")]
    pub song_name: String,
    #[serde(rename = "FavoriteCount")]
    pub favorite_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn add_song() -> AddSongRequest {
        AddSongRequest {
            song_name: "Midnight Run".to_string(),
            genre: "House".to_string(),
            length: 215,
            artist_id: 4,
            song_id: 42,
        }
    }

    #[test]
    fn well_formed_request_passes() {
        assert!(add_song().validate().is_ok());
    }

    #[test]
    fn non_positive_integers_fail() {
        let mut req = add_song();
        req.length = 0;
        assert!(req.validate().is_err());

        let mut req = add_song();
        req.artist_id = -3;
        assert!(req.validate().is_err());

        let mut req = add_song();
        req.song_id = 0;
        assert!(req.validate().is_err());
    }

    #[test]
    fn empty_names_fail() {
        let mut req = add_song();
        req.song_name = String::new();
        assert!(req.validate().is_err());
    }

    #[test]
    fn chart_entry_keeps_store_casing_on_the_wire() {
        let entry = TopSongEntry {
            song_id: 42,
            song_name: "Midnight Run".to_string(),
            favorite_count: 9,
        };
        let body = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"SongID": 42, "SongName": "Midnight Run", "FavoriteCount": 9})
        );
    }
}
