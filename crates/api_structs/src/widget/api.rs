use serde::{Deserialize, Serialize};

use crate::dtos::WidgetTimerDTO;
use hurry_domain::ID;

pub mod get_active_timer {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct QueryParams {
        pub shop: String,
        pub product_id: Option<String>,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub timer: Option<WidgetTimerDTO>,
        pub timestamp: String,
    }
}

pub mod record_timer_click {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub timer_id: ID,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub success: bool,
    }
}
