use crate::models::StatsSnapshot;
use crate::stats::day_labels;
use serde_json::json;

/// Demo dataset served in place of live stats when the API cannot be reached.
pub fn fallback_snapshot() -> StatsSnapshot {
    let facebook = [820, 845, 790, 910, 960, 1005, 980, 1040, 1120, 1080, 1150, 1210, 1190, 1260];
    let twitter = [540, 560, 610, 580, 620, 655, 700, 690, 720, 760, 740, 790, 815, 830];
    let instagram = [1450, 1520, 1490, 1600, 1680, 1720, 1810, 1790, 1860, 1930, 2010, 1980, 2070, 2150];
    let linkedin = [310, 325, 300, 340, 355, 370, 365, 390, 410, 405, 430, 445, 460, 475];

    let labels = day_labels(facebook.len());

    StatsSnapshot::from_value(json!({
        "facebook": {
            "followers": 12500,
            "engagement": 3.2,
            "posts": 245,
            "likes": 8900,
            "comments": 1230,
            "shares": 560,
            "dailyStats": facebook,
        },
        "twitter": {
            "followers": 8700,
            "engagement": 2.8,
            "tweets": 1240,
            "likes": 5600,
            "retweets": 980,
            "dailyStats": twitter,
        },
        "instagram": {
            "followers": 22300,
            "engagement": 4.5,
            "posts": 380,
            "likes": 15400,
            "comments": 2100,
            "dailyStats": instagram,
        },
        "linkedin": {
            "followers": 5400,
            "engagement": 2.1,
            "posts": 120,
            "likes": 2300,
            "comments": 340,
            "shares": 210,
            "dailyStats": linkedin,
        },
        "engagementData": {
            "labels": labels,
            "datasets": [
                { "label": "Facebook", "data": facebook },
                { "label": "Twitter", "data": twitter },
                { "label": "Instagram", "data": instagram },
                { "label": "LinkedIn", "data": linkedin },
            ],
        },
    }))
}
