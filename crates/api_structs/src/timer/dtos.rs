use hurry_domain::{DisplayOptions, TargetProducts, Timer, TimerStatus, UrgencySettings, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TimerDTO {
    pub id: ID,
    pub title: String,
    pub description: String,
    pub start_date: i64,
    pub end_date: i64,
    pub is_active: bool,
    pub status: TimerStatus,
    pub display_options: DisplayOptions,
    pub urgency_settings: UrgencySettings,
    pub target_products: TargetProducts,
    pub product_ids: Vec<String>,
    pub views: i64,
    pub clicks: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

impl TimerDTO {
    pub fn new(timer: Timer, now: i64) -> Self {
        let status = timer.status(now);
        Self {
            id: timer.id.clone(),
            title: timer.title,
            description: timer.description,
            start_date: timer.start_ts,
            end_date: timer.end_ts,
            is_active: timer.is_active,
            status,
            display_options: timer.display_options,
            urgency_settings: timer.urgency_settings,
            target_products: timer.target_products,
            product_ids: timer.product_ids,
            views: timer.views,
            clicks: timer.clicks,
            created_at: timer.created,
            updated_at: timer.updated,
        }
    }
}
