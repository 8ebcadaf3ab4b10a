//! Demo feed catalog, standing in for the external feed-data collaborator.
//! The core treats the returned list as read-only; position in the list is
//! the scroll index.

use once_cell::sync::Lazy;

use crate::api::models::{Creator, MediaItem};

static FEED: Lazy<Vec<MediaItem>> = Lazy::new(|| {
    vec![
        entry(
            "1",
            "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4",
            "https://i.ytimg.com/vi/aqz-KE-bpKQ/maxresdefault.jpg",
            "Mastering the Future: How I Built a $1M Tech Startup in 90 Days | Full Journey Breakdown",
            ("creator1", "TwiineDeEnock", "https://i.pravatar.cc/150?img=1", 125_000),
            [1_200_000, 4_500, 23_000, 1_250],
        ),
        entry(
            "2",
            "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ElephantsDream.mp4",
            "https://i.ytimg.com/vi/_d6fuiJeXIo/maxresdefault.jpg",
            "Creating Award-Winning Digital Art: The Complete Process from Concept to Final Masterpiece",
            ("creator2", "creativemind", "https://i.pravatar.cc/150?img=12", 89_000),
            [32_000, 890, 450, 890],
        ),
        entry(
            "3",
            "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ForBiggerBlazes.mp4",
            "https://i.ytimg.com/vi/4zH5iWG4Ilc/maxresdefault.jpg",
            "Revolutionary Art Technique That Changed Everything: Step-by-Step Tutorial for Professional Artists",
            ("creator3", "artlover", "https://i.pravatar.cc/150?img=33", 250_000),
            [78_000, 2_100, 1_200, 3_200],
        ),
        entry(
            "4",
            "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ForBiggerEscapes.mp4",
            "https://i.ytimg.com/vi/x-T9Ys3-scg/maxresdefault.jpg",
            "Choreography Breakdown: How I Created a Viral Dance That Got 50M Views | Behind the Scenes",
            ("creator4", "dancepro", "https://i.pravatar.cc/150?img=45", 450_000),
            [125_000, 3_500, 2_100, 5_800],
        ),
        entry(
            "5",
            "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ForBiggerFun.mp4",
            "https://i.ytimg.com/vi/3x1a5fT_6yI/maxresdefault.jpg",
            "Michelin-Star Chef Secrets: The Ultimate Gourmet Recipe That Takes Your Cooking to the Next Level",
            ("creator5", "foodie", "https://i.pravatar.cc/150?img=51", 320_000),
            [95_000, 2_800, 1_500, 4_100],
        ),
        entry(
            "6",
            "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ForBiggerJoyrides.mp4",
            "https://i.ytimg.com/vi/4zH5iWG4Ilc/maxresdefault.jpg",
            "Conquering Mount Everest: My Complete Journey - Training, Challenges, and Lessons Learned",
            ("creator6", "adventure", "https://i.pravatar.cc/150?img=68", 180_000),
            [67_000, 1_900, 1_100, 2_400],
        ),
        entry(
            "7",
            "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ForBiggerMeltdowns.mp4",
            "https://i.ytimg.com/vi/x-T9Ys3-scg/maxresdefault.jpg",
            "Wildlife Conservation Success Story: How We Saved 10,000 Endangered Species | Impact Report",
            ("creator7", "naturelover", "https://i.pravatar.cc/150?img=47", 290_000),
            [89_000, 2_400, 1_300, 3_600],
        ),
        entry(
            "8",
            "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/Sintel.mp4",
            "https://i.ytimg.com/vi/5Peo-ivmupE/maxresdefault.jpg",
            "How I Taught 1 Million Students to Code: The Complete Learning System That Actually Works",
            ("creator8", "education", "https://i.pravatar.cc/150?img=15", 520_000),
            [850_000, 8_900, 5_600, 12_400],
        ),
    ]
});

fn entry(
    id: &str,
    url: &str,
    thumbnail: &str,
    title: &str,
    (creator_id, username, avatar, followers): (&str, &str, &str, u64),
    [likes, comments, shares, boosts]: [u64; 4],
) -> MediaItem {
    MediaItem {
        id: id.to_string(),
        url: url.to_string(),
        thumbnail: thumbnail.to_string(),
        title: title.to_string(),
        creator: Creator {
            id: creator_id.to_string(),
            username: username.to_string(),
            avatar: avatar.to_string(),
            followers,
        },
        likes,
        comments,
        shares,
        boosts,
    }
}

/// The ordered feed, as handed over by the collaborator.
pub fn demo_feed() -> &'static [MediaItem] {
    &FEED
}
