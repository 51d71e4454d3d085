// crates/travelmap-core/src/defaults.rs

//! The built-in three-day Taipei itinerary used to seed a missing or broken
//! store file.

use crate::model::{Location, Photo, Point, Route, TravelData};

const UNSPLASH: &str = "https://images.unsplash.com";

/// Thumbnail (150x150) and full-size (800x600) crops of one Unsplash photo.
fn unsplash(photo_id: &str, caption: &str) -> Photo {
    Photo {
        thumbnail: format!("{UNSPLASH}/{photo_id}?w=150&h=150&fit=crop"),
        full: format!("{UNSPLASH}/{photo_id}?w=800&h=600&fit=crop"),
        caption: caption.to_string(),
    }
}

fn location(
    id: i64,
    name: &str,
    (lat, lng): (f64, f64),
    description: &str,
    day: u32,
    photos: Vec<Photo>,
) -> Location {
    Location {
        id,
        name: name.to_string(),
        lat,
        lng,
        description: description.to_string(),
        photos,
        day,
    }
}

fn route(name: &str, color: &str, day: u32, points: &[(f64, f64)]) -> Route {
    Route {
        points: points.iter().map(|&(lat, lng)| Point { lat, lng }).collect(),
        color: color.to_string(),
        name: name.to_string(),
        day,
    }
}

impl TravelData {
    /// The default dataset: 5 locations, 3 routes, 3 days.
    pub fn defaults() -> Self {
        const TAIPEI_101: (f64, f64) = (25.0340, 121.5645);
        const CKS_MEMORIAL: (f64, f64) = (25.0408, 121.5188);
        const XIMENDING: (f64, f64) = (25.0421, 121.5069);
        const SHILIN: (f64, f64) = (25.0878, 121.5241);
        const TAMSUI: (f64, f64) = (25.1677, 121.4425);

        TravelData {
            total_days: 3,
            locations: vec![
                location(
                    1,
                    "台北101",
                    TAIPEI_101,
                    "台北最著名的地標建築",
                    1,
                    vec![
                        unsplash("photo-1566022671514-a2e75cec97eb", "台北101外觀"),
                        unsplash("photo-1570994728901-3ad0cf27bafb", "台北101夜景"),
                    ],
                ),
                location(
                    2,
                    "中正紀念堂",
                    CKS_MEMORIAL,
                    "台灣重要的歷史文化地標",
                    1,
                    vec![unsplash("photo-1587139223577-f48c6cd8b6c4", "中正紀念堂正面")],
                ),
                location(
                    3,
                    "西門町",
                    XIMENDING,
                    "台北熱鬧的購物商圈",
                    2,
                    vec![unsplash("photo-1536098561742-ca998e48cbcc", "西門町街景")],
                ),
                location(
                    4,
                    "士林夜市",
                    SHILIN,
                    "台北最大的夜市之一",
                    2,
                    vec![unsplash("photo-1555939594-58d7cb561ad1", "士林夜市美食")],
                ),
                location(
                    5,
                    "淡水老街",
                    TAMSUI,
                    "欣賞淡水河夕陽的好地方",
                    3,
                    vec![unsplash("photo-1590736969955-71cc94901144", "淡水夕陽")],
                ),
            ],
            routes: vec![
                route("第一天 - 市區景點", "#3388ff", 1, &[TAIPEI_101, CKS_MEMORIAL]),
                route("第二天 - 購物美食", "#ff6b6b", 2, &[XIMENDING, SHILIN]),
                // Day 3 leaves from the night market, not from Ximending.
                route("第三天 - 淡水之旅", "#4ecdc4", 3, &[SHILIN, TAMSUI]),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::TravelData;

    #[test]
    fn defaults_satisfy_invariants() {
        let data = TravelData::defaults();
        data.validate().expect("default itinerary is valid");
        assert_eq!(data.total_days, data.max_day());
    }

    #[test]
    fn defaults_shape() {
        let data = TravelData::defaults();
        assert_eq!(data.locations.len(), 5);
        assert_eq!(data.routes.len(), 3);
        let ids: Vec<i64> = data.locations.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(data.routes[1].color, "#ff6b6b");
    }

    #[test]
    fn photo_urls_are_unsplash_crops() {
        let data = TravelData::defaults();
        let photo = &data.locations[2].photos[0];
        assert_eq!(
            photo.thumbnail,
            "https://images.unsplash.com/photo-1536098561742-ca998e48cbcc?w=150&h=150&fit=crop"
        );
        assert_eq!(
            photo.full,
            "https://images.unsplash.com/photo-1536098561742-ca998e48cbcc?w=800&h=600&fit=crop"
        );
    }
}
