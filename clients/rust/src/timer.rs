use crate::{APIResponse, BaseClient};
use hurry_api_structs::*;
use hurry_domain::{DisplayOptions, TargetProducts, UrgencySettings, ID};
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct TimerClient {
    base: Arc<BaseClient>,
}

pub struct CreateTimerInput {
    pub title: String,
    pub description: Option<String>,
    pub start_date: i64,
    pub end_date: i64,
    pub is_active: Option<bool>,
    pub display_options: Option<DisplayOptions>,
    pub urgency_settings: Option<UrgencySettings>,
    pub target_products: Option<TargetProducts>,
    pub product_ids: Option<Vec<String>>,
}

#[derive(Default)]
pub struct UpdateTimerInput {
    pub timer_id: ID,
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<i64>,
    pub end_date: Option<i64>,
    pub is_active: Option<bool>,
    pub display_options: Option<DisplayOptions>,
    pub urgency_settings: Option<UrgencySettings>,
    pub target_products: Option<TargetProducts>,
    pub product_ids: Option<Vec<String>>,
}

impl TimerClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(&self, input: CreateTimerInput) -> APIResponse<create_timer::APIResponse> {
        let body = create_timer::RequestBody {
            title: input.title,
            description: input.description,
            start_date: input.start_date,
            end_date: input.end_date,
            is_active: input.is_active,
            display_options: input.display_options,
            urgency_settings: input.urgency_settings,
            target_products: input.target_products,
            product_ids: input.product_ids,
        };
        self.base
            .post(body, "timers".into(), StatusCode::CREATED)
            .await
    }

    pub async fn get_all(&self) -> APIResponse<get_timers::APIResponse> {
        self.base.get("timers".into(), StatusCode::OK).await
    }

    pub async fn get(&self, timer_id: ID) -> APIResponse<get_timer::APIResponse> {
        self.base
            .get(format!("timers/{}", timer_id), StatusCode::OK)
            .await
    }

    pub async fn update(&self, input: UpdateTimerInput) -> APIResponse<update_timer::APIResponse> {
        let body = update_timer::RequestBody {
            title: input.title,
            description: input.description,
            start_date: input.start_date,
            end_date: input.end_date,
            is_active: input.is_active,
            display_options: input.display_options,
            urgency_settings: input.urgency_settings,
            target_products: input.target_products,
            product_ids: input.product_ids,
        };
        self.base
            .put(body, format!("timers/{}", input.timer_id), StatusCode::OK)
            .await
    }

    pub async fn delete(&self, timer_id: ID) -> APIResponse<delete_timer::APIResponse> {
        self.base
            .delete(format!("timers/{}", timer_id), StatusCode::OK)
            .await
    }

    pub async fn toggle(&self, timer_id: ID) -> APIResponse<toggle_timer::APIResponse> {
        self.base
            .patch((), format!("timers/{}/toggle", timer_id), StatusCode::OK)
            .await
    }
}
