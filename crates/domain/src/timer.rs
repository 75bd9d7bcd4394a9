use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A countdown `Timer` configured by a shop. The window `[start_ts, end_ts]`
/// is in unix millis and is inclusive at both ends.
#[derive(Debug, Clone)]
pub struct Timer {
    pub id: ID,
    pub shop: String,
    pub title: String,
    pub description: String,
    pub start_ts: i64,
    pub end_ts: i64,
    pub is_active: bool,
    pub display_options: DisplayOptions,
    pub urgency_settings: UrgencySettings,
    pub target_products: TargetProducts,
    pub product_ids: Vec<String>,
    pub views: i64,
    pub clicks: i64,
    pub created: i64,
    pub updated: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimerPosition {
    Top,
    Bottom,
    AbovePrice,
    BelowTitle,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    Medium,
    Large,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplayOptions {
    pub position: TimerPosition,
    pub background_color: String,
    pub text_color: String,
    pub font_size: FontSize,
    pub show_days: bool,
    pub show_hours: bool,
    pub show_minutes: bool,
    pub show_seconds: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            position: TimerPosition::AbovePrice,
            background_color: "#FF0000".to_string(),
            text_color: "#FFFFFF".to_string(),
            font_size: FontSize::Medium,
            show_days: true,
            show_hours: true,
            show_minutes: true,
            show_seconds: true,
        }
    }
}

pub const MIN_URGENCY_THRESHOLD_MINUTES: i64 = 1;
pub const MAX_URGENCY_THRESHOLD_MINUTES: i64 = 60;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UrgencySettings {
    pub enabled: bool,
    pub threshold_minutes: i64,
    pub pulse_effect: bool,
    pub show_banner: bool,
    pub banner_text: String,
}

impl Default for UrgencySettings {
    fn default() -> Self {
        Self {
            enabled: true,
            threshold_minutes: 5,
            pulse_effect: true,
            show_banner: true,
            banner_text: "Hurry! Offer ending soon!".to_string(),
        }
    }
}

impl UrgencySettings {
    pub fn is_valid(&self) -> bool {
        self.threshold_minutes >= MIN_URGENCY_THRESHOLD_MINUTES
            && self.threshold_minutes <= MAX_URGENCY_THRESHOLD_MINUTES
    }

    pub fn threshold_millis(&self) -> i64 {
        self.threshold_minutes * 60 * 1000
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetProducts {
    All,
    Specific,
}

impl Default for TargetProducts {
    fn default() -> Self {
        Self::All
    }
}

impl TargetProducts {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Specific => "specific",
        }
    }
}

impl FromStr for TargetProducts {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "specific" => Ok(Self::Specific),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerStatus {
    Inactive,
    Scheduled,
    Active,
    Expired,
}

impl Timer {
    pub fn new(shop: &str, start_ts: i64, end_ts: i64, now: i64) -> Self {
        Self {
            id: Default::default(),
            shop: shop.to_string(),
            title: Default::default(),
            description: Default::default(),
            start_ts,
            end_ts,
            is_active: true,
            display_options: Default::default(),
            urgency_settings: Default::default(),
            target_products: Default::default(),
            product_ids: Default::default(),
            views: 0,
            clicks: 0,
            created: now,
            updated: now,
        }
    }

    pub fn has_valid_window(&self) -> bool {
        self.end_ts > self.start_ts
    }

    /// Where the timer is on its lifecycle at the given instant. The
    /// active flag dominates the window.
    pub fn status(&self, now: i64) -> TimerStatus {
        if !self.is_active {
            TimerStatus::Inactive
        } else if now < self.start_ts {
            TimerStatus::Scheduled
        } else if now <= self.end_ts {
            TimerStatus::Active
        } else {
            TimerStatus::Expired
        }
    }

    pub fn is_running(&self, now: i64) -> bool {
        self.status(now) == TimerStatus::Active
    }

    /// Whether the timer is inside its urgency threshold. Expired timers
    /// are never urgent.
    pub fn is_urgent(&self, now: i64) -> bool {
        if !self.urgency_settings.enabled {
            return false;
        }
        let time_left = self.end_ts - now;
        time_left > 0 && time_left <= self.urgency_settings.threshold_millis()
    }

    pub fn targets_product(&self, product_id: Option<&str>) -> bool {
        match (self.target_products, product_id) {
            (TargetProducts::All, _) => true,
            (TargetProducts::Specific, Some(product_id)) => {
                self.product_ids.iter().any(|id| id == product_id)
            }
            (TargetProducts::Specific, None) => false,
        }
    }
}

impl Entity for Timer {
    fn id(&self) -> &ID {
        &self.id
    }
}

/// Picks the timer to display out of the in-window candidates for a shop.
/// Most recently created eligible timer wins.
pub fn select_displayable(
    candidates: Vec<Timer>,
    product_id: Option<&str>,
    now: i64,
) -> Option<Timer> {
    candidates
        .into_iter()
        .filter(|timer| timer.is_running(now) && timer.targets_product(product_id))
        .max_by_key(|timer| timer.created)
}

#[cfg(test)]
mod test {
    use super::*;

    fn timer(start_ts: i64, end_ts: i64) -> Timer {
        Timer::new("demo.myshopify.com", start_ts, end_ts, 0)
    }

    #[test]
    fn status_partitions_the_timeline() {
        let t = timer(1000, 2000);
        assert_eq!(t.status(999), TimerStatus::Scheduled);
        assert_eq!(t.status(1000), TimerStatus::Active);
        assert_eq!(t.status(1500), TimerStatus::Active);
        assert_eq!(t.status(2000), TimerStatus::Active);
        assert_eq!(t.status(2001), TimerStatus::Expired);
    }

    #[test]
    fn inactive_dominates_the_window() {
        let mut t = timer(1000, 2000);
        t.is_active = false;
        for now in [999, 1000, 1500, 2000, 2001] {
            assert_eq!(t.status(now), TimerStatus::Inactive);
        }
    }

    #[test]
    fn urgency_respects_threshold() {
        let mut t = timer(0, 10 * 60 * 1000);
        t.urgency_settings.threshold_minutes = 5;
        // 4 minutes left
        let now = 6 * 60 * 1000;
        assert!(t.is_urgent(now));

        t.urgency_settings.threshold_minutes = 3;
        assert!(!t.is_urgent(now));
    }

    #[test]
    fn urgency_boundary_is_inclusive() {
        let mut t = timer(0, 10 * 60 * 1000);
        t.urgency_settings.threshold_minutes = 5;
        // exactly 5 minutes left
        assert!(t.is_urgent(5 * 60 * 1000));
        // one milli over the threshold
        assert!(!t.is_urgent(5 * 60 * 1000 - 1));
    }

    #[test]
    fn disabled_or_expired_timers_are_never_urgent() {
        let mut t = timer(0, 1000);
        assert!(!t.is_urgent(2000));

        t.urgency_settings.enabled = false;
        assert!(!t.is_urgent(500));
    }

    #[test]
    fn targeting_all_matches_any_context() {
        let t = timer(0, 1000);
        assert!(t.targets_product(None));
        assert!(t.targets_product(Some("p1")));
    }

    #[test]
    fn specific_targeting_requires_a_matching_product() {
        let mut t = timer(0, 1000);
        t.target_products = TargetProducts::Specific;
        t.product_ids = vec!["p1".to_string(), "p2".to_string()];
        assert!(t.targets_product(Some("p1")));
        assert!(!t.targets_product(Some("p3")));
        assert!(!t.targets_product(None));
    }

    #[test]
    fn select_displayable_prefers_latest_created() {
        let mut older = timer(0, 10_000);
        older.created = 1;
        let mut newer = timer(0, 10_000);
        newer.created = 2;
        let picked = select_displayable(vec![older, newer.clone()], None, 5000)
            .expect("One eligible timer");
        assert_eq!(picked.id, newer.id);
    }

    #[test]
    fn select_displayable_skips_ineligible_candidates() {
        let mut inactive = timer(0, 10_000);
        inactive.is_active = false;
        let mut targeted = timer(0, 10_000);
        targeted.target_products = TargetProducts::Specific;
        targeted.product_ids = vec!["p1".to_string()];

        assert!(select_displayable(vec![inactive], None, 5000).is_none());
        assert!(select_displayable(vec![targeted.clone()], None, 5000).is_none());
        assert!(select_displayable(vec![targeted], Some("p1"), 5000).is_some());
    }
}
