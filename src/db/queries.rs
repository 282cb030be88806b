//! SQL query constants
//!
//! Contains all SQL queries used by the application.

/// Fetch an artist profile by primary key
pub const GET_ARTIST_PROFILE: &str = r#"
    SELECT stage_name, first_name, last_name, email, dob,
           listener_count, follower_count, minutes_listened_to
    FROM artist
    WHERE artist_id = $1
"#;

/// Fetch a listener profile by primary key
pub const GET_LISTENER_PROFILE: &str = r#"
    SELECT first_name, last_name, user_name, minutes_listened,
           favorite_song_id, favorite_genre, favorite_artist_id,
           subscription_type, join_date
    FROM listener
    WHERE user_id = $1
"#;

/// Resolve a song name for display
pub const GET_SONG_NAME: &str = r#"
    SELECT song_name FROM song WHERE song_id = $1
"#;

/// Resolve an artist stage name for display
pub const GET_STAGE_NAME: &str = r#"
    SELECT stage_name FROM artist WHERE artist_id = $1
"#;

/// Fetch a login row with both nullable account links
pub const GET_LOGIN: &str = r#"
    SELECT login_id, password, user_id, artist_id
    FROM login
    WHERE login_id = $1
"#;

/// First step of account creation; the store assigns user_id
pub const INSERT_LISTENER: &str = r#"
    INSERT INTO listener (first_name, last_name, user_name, subscription_type)
    VALUES ($1, $2, $3, $4)
    RETURNING user_id
"#;

/// Second step of account creation, linked by the fresh user_id
pub const INSERT_LOGIN: &str = r#"
    INSERT INTO login (password, user_id)
    VALUES ($1, $2)
    RETURNING login_id
"#;

/// Song registration; song_id is caller-supplied, release date is today
pub const INSERT_SONG: &str = r#"
    INSERT INTO song (song_id, song_name, genre, artist_id, length, release_date)
    VALUES ($1, $2, $3, $4, $5, CURRENT_DATE)
    RETURNING song_id
"#;

/// Point a listener at a favorite song
pub const SET_FAVORITE_SONG: &str = r#"
    UPDATE listener SET favorite_song_id = $2 WHERE user_id = $1
"#;

/// Point a listener at a favorite artist
pub const SET_FAVORITE_ARTIST: &str = r#"
    UPDATE listener SET favorite_artist_id = $2 WHERE user_id = $1
"#;

/// Bump a song's play counter
pub const RECORD_PLAY: &str = r#"
    UPDATE song SET listen_count = listen_count + 1 WHERE song_id = $1
"#;

/// Store-side loyalty tier over a listener's engagement
pub const GET_LOYALTY_LEVEL: &str = r#"
    SELECT CASE
        WHEN minutes_listened >= 5000 THEN 'Platinum'
        WHEN minutes_listened >= 1000 THEN 'Gold'
        WHEN minutes_listened >= 100 THEN 'Silver'
        ELSE 'Bronze'
    END AS level
    FROM listener
    WHERE user_id = $1
"#;

/// Artists ranked by how many listeners hold them as favorite
pub const TOP_ARTISTS: &str = r#"
    SELECT a.artist_id, a.stage_name, COUNT(*) AS favorite_count
    FROM listener l
    JOIN artist a ON a.artist_id = l.favorite_artist_id
    GROUP BY a.artist_id, a.stage_name
    ORDER BY favorite_count DESC
    LIMIT 5
"#;

/// Songs ranked by how many listeners hold them as favorite
pub const TOP_SONGS: &str = r#"
    SELECT s.song_id, s.song_name, COUNT(*) AS favorite_count
    FROM listener l
    JOIN song s ON s.song_id = l.favorite_song_id
    GROUP BY s.song_id, s.song_name
    ORDER BY favorite_count DESC
    LIMIT 5
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_charts_are_bounded_and_descending() {
        for query in [TOP_ARTISTS, TOP_SONGS] {
            assert!(query.contains("LIMIT 5"));
            assert!(query.contains("DESC"));
        }
    }

    #[test]
    fn account_creation_steps_return_generated_ids() {
        assert!(INSERT_LISTENER.contains("RETURNING user_id"));
        assert!(INSERT_LOGIN.contains("RETURNING login_id"));
    }

    #[test]
    fn song_registration_uses_todays_date() {
        assert!(INSERT_SONG.contains("CURRENT_DATE"));
    }
}
