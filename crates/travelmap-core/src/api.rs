// crates/travelmap-core/src/api.rs

//! Small JSON views over [`TravelData`](crate::TravelData) that are not the
//! stored entities themselves.

use serde::Serialize;

/// Body of the days endpoint: `{"totalDays": 3}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DaysView {
    #[serde(rename = "totalDays")]
    pub total_days: u32,
}

/// Aggregate counts for an itinerary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ItineraryStats {
    pub total_days: u32,
    pub locations: usize,
    pub routes: usize,
    pub photos: usize,
    pub route_points: usize,
}

impl From<&crate::TravelData> for DaysView {
    fn from(data: &crate::TravelData) -> Self {
        DaysView {
            total_days: data.total_days,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TravelData;

    #[test]
    fn days_view_uses_camel_case_key() {
        let view = DaysView::from(&TravelData::defaults());
        assert_eq!(serde_json::to_string(&view).unwrap(), r#"{"totalDays":3}"#);
    }

    #[test]
    fn stats_of_default_itinerary() {
        let stats = TravelData::defaults().stats();
        assert_eq!(
            stats,
            ItineraryStats {
                total_days: 3,
                locations: 5,
                routes: 3,
                photos: 6,
                route_points: 6,
            }
        );
    }
}
