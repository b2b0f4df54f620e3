use crate::{Client, Result};

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Number;

/// A club as stored by the backend.
///
/// Every field is optional on the wire. Missing and `null` fields decode to their empty value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Club {
    #[serde(deserialize_with = "null_as_default")]
    pub club_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_count: Option<MemberCount>,
}

impl Club {
    /// Returns `true` if the lowercased name or category of the `Club` contains `query`.
    ///
    /// `query` is not normalized and must already be lowercase to match case-insensitively.
    pub fn matches(&self, query: &str) -> bool {
        self.club_name.to_lowercase().contains(query) || self.category.to_lowercase().contains(query)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// The number of members of a [`Club`].
///
/// The backend does not enforce a type, so both numbers and strings are accepted and displayed
/// as they were received.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MemberCount {
    Number(Number),
    Text(String),
}

impl Display for MemberCount {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => n.fmt(f),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for MemberCount {
    fn from(n: i64) -> Self {
        Self::Number(n.into())
    }
}

#[derive(Copy, Clone, Debug)]
pub struct ClubsClient<'a> {
    client: &'a Client,
}

impl<'a> ClubsClient<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Returns a list of all [`Club`]s in the order the backend returns them.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the response has a non-2xx status code or the
    /// body is not a list of clubs.
    pub async fn list(&self) -> Result<Vec<Club>> {
        let req = self.client.request().uri("/club/").build();

        let resp = self.client.send(req).await?.error_for_status()?;
        let clubs: Vec<Club> = resp.json().await?;

        log::debug!("Received {} clubs", clubs.len());

        Ok(clubs)
    }
}

#[cfg(test)]
mod tests {
    use super::{Club, MemberCount};

    use serde_test::{assert_ser_tokens, Token};

    fn chess_club() -> Club {
        Club {
            club_name: String::from("Chess Club"),
            category: String::from("Games"),
            description: String::from("Weekly blitz tournaments"),
            member_count: Some(MemberCount::from(12)),
        }
    }

    #[test]
    fn test_club_serialize() {
        assert_ser_tokens(
            &chess_club(),
            &[
                Token::Struct {
                    name: "Club",
                    len: 4,
                },
                Token::Str("clubName"),
                Token::Str("Chess Club"),
                Token::Str("category"),
                Token::Str("Games"),
                Token::Str("description"),
                Token::Str("Weekly blitz tournaments"),
                Token::Str("memberCount"),
                Token::Some,
                Token::U64(12),
                Token::StructEnd,
            ],
        );

        assert_ser_tokens(
            &Club::default(),
            &[
                Token::Struct {
                    name: "Club",
                    len: 3,
                },
                Token::Str("clubName"),
                Token::Str(""),
                Token::Str("category"),
                Token::Str(""),
                Token::Str("description"),
                Token::Str(""),
                Token::StructEnd,
            ],
        );
    }

    #[test]
    fn test_club_from_json() {
        let clubs: Vec<Club> = serde_json::from_str(
            r#"[
                {"clubName": "Chess Club", "category": "Games", "description": "Weekly blitz tournaments", "memberCount": 12},
                {"clubName": "Debate Team", "category": "Speech", "memberCount": "8", "_id": "abc"}
            ]"#,
        )
        .unwrap();

        assert_eq!(clubs[0], chess_club());
        assert_eq!(clubs[1].club_name, "Debate Team");
        assert_eq!(clubs[1].description, "");
        assert_eq!(
            clubs[1].member_count,
            Some(MemberCount::Text(String::from("8")))
        );
    }

    #[test]
    fn test_club_missing_fields() {
        let club: Club = serde_json::from_str(r#"{"clubName": "Debate Team"}"#).unwrap();

        assert_eq!(
            club,
            Club {
                club_name: String::from("Debate Team"),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_club_null_fields() {
        let clubs: Vec<Club> = serde_json::from_str(
            r#"[
                {"clubName": "Chess Club", "category": null, "description": null, "memberCount": null},
                {"clubName": null, "category": "Games", "description": "Go and shogi"}
            ]"#,
        )
        .unwrap();

        assert_eq!(
            clubs[0],
            Club {
                club_name: String::from("Chess Club"),
                ..Default::default()
            }
        );
        assert_eq!(clubs[1].club_name, "");
        assert_eq!(clubs[1].category, "Games");
        assert_eq!(clubs[1].member_count, None);
    }

    #[test]
    fn test_member_count_float() {
        let club: Club = serde_json::from_str(r#"{"clubName": "Rowing", "memberCount": 12.5}"#).unwrap();

        let members = club.member_count.unwrap();
        assert!(matches!(members, MemberCount::Number(_)));
        assert_eq!(members.to_string(), "12.5");
    }

    #[test]
    fn test_member_count_display() {
        assert_eq!(MemberCount::from(12).to_string(), "12");
        assert_eq!(MemberCount::from(-3).to_string(), "-3");
        assert_eq!(MemberCount::Text(String::from("20+")).to_string(), "20+");
    }

    #[test]
    fn test_club_matches() {
        let club = chess_club();

        assert!(club.matches("ch"));
        assert!(club.matches("chess club"));
        assert!(club.matches("game"));
        assert!(club.matches(""));
        assert!(!club.matches("speech"));
        // The query is not normalized.
        assert!(!club.matches("Chess"));
    }
}
