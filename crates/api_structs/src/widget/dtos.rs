use hurry_domain::{DisplayOptions, TargetProducts, Timer, UrgencySettings, ID};
use serde::{Deserialize, Serialize};

/// Public rendition of a timer for the storefront widget. Leaves out the
/// owning shop and the analytics counters.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct WidgetTimerDTO {
    pub id: ID,
    pub title: String,
    pub description: String,
    pub start_date: i64,
    pub end_date: i64,
    pub is_urgent: bool,
    pub display_options: DisplayOptions,
    pub urgency_settings: UrgencySettings,
    pub target_products: TargetProducts,
    pub product_ids: Vec<String>,
}

impl WidgetTimerDTO {
    pub fn new(timer: Timer, now: i64) -> Self {
        Self {
            id: timer.id.clone(),
            is_urgent: timer.is_urgent(now),
            title: timer.title,
            description: timer.description,
            start_date: timer.start_ts,
            end_date: timer.end_ts,
            display_options: timer.display_options,
            urgency_settings: timer.urgency_settings,
            target_products: timer.target_products,
            product_ids: timer.product_ids,
        }
    }
}
