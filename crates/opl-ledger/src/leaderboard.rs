use serde::{Deserialize, Serialize};

/// One ranked row of the standings served to the game's front end.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub id: String,
    pub username: String,
    pub total_score: u64,
    pub level: u32,
    pub reputation: u64,
    pub rank: u32,
}

/// Built-in sample standings.
///
/// Real cross-player ranking over the record store is not implemented; the
/// boundary serves this fixed set so the game works with no database behind
/// it. The rows (names, scores, levels) are the ones the game shipped with.
pub fn sample_leaderboard() -> Vec<LeaderboardEntry> {
    vec![
        LeaderboardEntry {
            id: "1".into(),
            username: "UrbanLegend".into(),
            total_score: 8900,
            level: 7,
            reputation: 2200,
            rank: 1,
        },
        LeaderboardEntry {
            id: "2".into(),
            username: "StreetKing".into(),
            total_score: 5500,
            level: 5,
            reputation: 1500,
            rank: 2,
        },
        LeaderboardEntry {
            id: "3".into(),
            username: "CityBoss".into(),
            total_score: 3200,
            level: 4,
            reputation: 1100,
            rank: 3,
        },
        LeaderboardEntry {
            id: "4".into(),
            username: "NightRider".into(),
            total_score: 2800,
            level: 3,
            reputation: 800,
            rank: 4,
        },
        LeaderboardEntry {
            id: "5".into(),
            username: "ShadowRunner".into(),
            total_score: 1200,
            level: 2,
            reputation: 400,
            rank: 5,
        },
    ]
}
