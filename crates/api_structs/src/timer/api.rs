use serde::{Deserialize, Serialize};

use crate::dtos::TimerDTO;
use hurry_domain::{DisplayOptions, TargetProducts, Timer, UrgencySettings, ID};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerResponse {
    pub timer: TimerDTO,
}

impl TimerResponse {
    pub fn new(timer: Timer, now: i64) -> Self {
        Self {
            timer: TimerDTO::new(timer, now),
        }
    }
}

pub mod create_timer {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub title: String,
        #[serde(default)]
        pub description: Option<String>,
        pub start_date: i64,
        pub end_date: i64,
        #[serde(default)]
        pub is_active: Option<bool>,
        #[serde(default)]
        pub display_options: Option<DisplayOptions>,
        #[serde(default)]
        pub urgency_settings: Option<UrgencySettings>,
        #[serde(default)]
        pub target_products: Option<TargetProducts>,
        #[serde(default)]
        pub product_ids: Option<Vec<String>>,
    }

    pub type APIResponse = TimerResponse;
}

pub mod get_timers {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub timers: Vec<TimerDTO>,
    }

    impl APIResponse {
        pub fn new(timers: Vec<Timer>, now: i64) -> Self {
            Self {
                timers: timers
                    .into_iter()
                    .map(|timer| TimerDTO::new(timer, now))
                    .collect(),
            }
        }
    }
}

pub mod get_timer {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub timer_id: ID,
    }

    pub type APIResponse = TimerResponse;
}

pub mod update_timer {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub timer_id: ID,
    }

    #[derive(Debug, Deserialize, Serialize, Default)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        #[serde(default)]
        pub title: Option<String>,
        #[serde(default)]
        pub description: Option<String>,
        #[serde(default)]
        pub start_date: Option<i64>,
        #[serde(default)]
        pub end_date: Option<i64>,
        #[serde(default)]
        pub is_active: Option<bool>,
        #[serde(default)]
        pub display_options: Option<DisplayOptions>,
        #[serde(default)]
        pub urgency_settings: Option<UrgencySettings>,
        #[serde(default)]
        pub target_products: Option<TargetProducts>,
        #[serde(default)]
        pub product_ids: Option<Vec<String>>,
    }

    pub type APIResponse = TimerResponse;
}

pub mod delete_timer {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub timer_id: ID,
    }

    pub type APIResponse = TimerResponse;
}

pub mod toggle_timer {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub timer_id: ID,
    }

    pub type APIResponse = TimerResponse;
}
