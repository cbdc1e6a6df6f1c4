//! Read-only traffic summary rendered in the back office.

use crate::{ApiClient, Error};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnalyticsRange {
    #[serde(rename = "7d")]
    Week,
    #[default]
    #[serde(rename = "30d")]
    Month,
    #[serde(rename = "90d")]
    Quarter,
}

impl AnalyticsRange {
    pub const ALL: [Self; 3] = [Self::Week, Self::Month, Self::Quarter];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Week => "7d",
            Self::Month => "30d",
            Self::Quarter => "90d",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Week => "Last 7 days",
            Self::Month => "Last 30 days",
            Self::Quarter => "Last 90 days",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|range| range.as_str() == value)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TopPage {
    pub path: String,
    pub views: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DailyPoint {
    pub date: String,
    pub visitors: u64,
    pub page_views: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    #[serde(default)]
    pub range: String,
    pub visitors: u64,
    pub page_views: u64,
    pub leads: u64,
    /// Fraction in `0.0..=1.0`.
    pub conversion_rate: f64,
    #[serde(default)]
    pub top_pages: Vec<TopPage>,
    #[serde(default)]
    pub daily: Vec<DailyPoint>,
}

impl AnalyticsSummary {
    #[must_use]
    pub fn conversion_percent(&self) -> String {
        format!("{:.1}%", self.conversion_rate * 100.0)
    }

    /// Bar heights (percent of the busiest day) for the daily page-view chart.
    #[must_use]
    pub fn daily_bar_heights(&self) -> Vec<(String, u8)> {
        let max = self.daily.iter().map(|p| p.page_views).max().unwrap_or(0);
        self.daily
            .iter()
            .map(|point| {
                let height = if max == 0 {
                    0
                } else {
                    u8::try_from(point.page_views * 100 / max).unwrap_or(100)
                };
                (point.date.clone(), height)
            })
            .collect()
    }
}

impl ApiClient {
    /// # Errors
    /// Returns transport, HTTP or decoding errors.
    pub async fn analytics_summary(&self, range: AnalyticsRange) -> Result<AnalyticsSummary, Error> {
        let query = [("range".to_string(), range.as_str().to_string())];
        self.get_with_query("/analytics/summary", &query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(date: &str, page_views: u64) -> DailyPoint {
        DailyPoint {
            date: date.to_string(),
            visitors: page_views / 2,
            page_views,
        }
    }

    #[test]
    fn bar_heights_scale_to_busiest_day() {
        let summary = AnalyticsSummary {
            range: "7d".to_string(),
            visitors: 10,
            page_views: 30,
            leads: 2,
            conversion_rate: 0.125,
            top_pages: Vec::new(),
            daily: vec![point("2026-10-01", 50), point("2026-10-02", 200), point("2026-10-03", 0)],
        };
        let heights: Vec<u8> = summary.daily_bar_heights().into_iter().map(|(_, h)| h).collect();
        assert_eq!(heights, vec![25, 100, 0]);
        assert_eq!(summary.conversion_percent(), "12.5%");
    }

    #[test]
    fn range_wire_names() -> Result<(), serde_json::Error> {
        assert_eq!(serde_json::to_string(&AnalyticsRange::Quarter)?, r#""90d""#);
        assert_eq!(AnalyticsRange::parse("7d"), Some(AnalyticsRange::Week));
        assert_eq!(AnalyticsRange::parse("1y"), None);
        Ok(())
    }
}
