use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Creator {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub followers: u64,
}

/// One entry of the feed. Supplied by the feed-data collaborator at
/// construction and never mutated afterwards; the engagement counters are
/// display-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MediaItem {
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub title: String,
    pub creator: Creator,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub comments: u64,
    #[serde(default)]
    pub shares: u64,
    #[serde(default)]
    pub boosts: u64,
}

/// Outbound command to the payment collaborator. The amount is passed through
/// as entered; validation beyond representability happens on the other side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoostRequest {
    pub id: String,
    pub creator_id: String,
    pub amount: f64,
}

impl BoostRequest {
    pub fn new(creator_id: String, amount: f64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            creator_id,
            amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boost_requests_carry_a_fresh_id() {
        let a = BoostRequest::new("creator1".to_string(), 5.0);
        let b = BoostRequest::new("creator1".to_string(), 5.0);
        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
        assert_eq!(a.creator_id, "creator1");
        assert_eq!(a.amount, 5.0);
    }

    #[test]
    fn media_items_deserialize_with_missing_counters() {
        let item: MediaItem = serde_json::from_str(
            r#"{
                "id": "42",
                "url": "https://example.com/clip.mp4",
                "creator": { "id": "c1", "username": "someone" }
            }"#,
        )
        .expect("valid item");
        assert_eq!(item.likes, 0);
        assert_eq!(item.creator.username, "someone");
    }
}
