use crate::{
    error::HurryError,
    shared::auth::protect_shop_route,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use hurry_api_structs::create_timer::{APIResponse, RequestBody};
use hurry_domain::{DisplayOptions, TargetProducts, Timer, UrgencySettings};
use hurry_infra::HurryContext;

fn handle_error(e: UseCaseError) -> HurryError {
    match e {
        UseCaseError::EmptyTitle => HurryError::BadClientData("title cannot be empty".into()),
        UseCaseError::InvalidTimeWindow => {
            HurryError::BadClientData("endDate must be after startDate".into())
        }
        UseCaseError::InvalidUrgencyThreshold(threshold) => HurryError::BadClientData(format!(
            "urgencySettings.thresholdMinutes: {} must be between 1 and 60",
            threshold
        )),
        UseCaseError::StorageError => HurryError::InternalError,
    }
}

pub async fn create_timer_controller(
    http_req: HttpRequest,
    ctx: web::Data<HurryContext>,
    body: web::Json<RequestBody>,
) -> Result<HttpResponse, HurryError> {
    let shop = protect_shop_route(&http_req, &ctx).await?;

    let body = body.0;
    let usecase = CreateTimerUseCase {
        shop: shop.domain,
        title: body.title,
        description: body.description.unwrap_or_default(),
        start_ts: body.start_date,
        end_ts: body.end_date,
        is_active: body.is_active.unwrap_or(true),
        display_options: body.display_options.unwrap_or_default(),
        urgency_settings: body.urgency_settings.unwrap_or_default(),
        target_products: body.target_products.unwrap_or_default(),
        product_ids: body.product_ids.unwrap_or_default(),
    };

    let now = ctx.sys.get_timestamp_millis();
    execute(usecase, &ctx)
        .await
        .map(|timer| HttpResponse::Created().json(APIResponse::new(timer, now)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct CreateTimerUseCase {
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
}

#[derive(Debug)]
pub enum UseCaseError {
    EmptyTitle,
    InvalidTimeWindow,
    InvalidUrgencyThreshold(i64),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateTimerUseCase {
    type Response = Timer;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateTimer";

    async fn execute(&mut self, ctx: &HurryContext) -> Result<Self::Response, Self::Error> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(UseCaseError::EmptyTitle);
        }
        if self.end_ts <= self.start_ts {
            return Err(UseCaseError::InvalidTimeWindow);
        }
        if !self.urgency_settings.is_valid() {
            return Err(UseCaseError::InvalidUrgencyThreshold(
                self.urgency_settings.threshold_minutes,
            ));
        }

        let mut timer = Timer::new(
            &self.shop,
            self.start_ts,
            self.end_ts,
            ctx.sys.get_timestamp_millis(),
        );
        timer.title = title;
        timer.description = self.description.trim().to_string();
        timer.is_active = self.is_active;
        timer.display_options = self.display_options.clone();
        timer.urgency_settings = self.urgency_settings.clone();
        timer.target_products = self.target_products;
        timer.product_ids = self.product_ids.clone();

        let res = ctx.repos.timers.insert(&timer).await;

        res.map(|_| timer).map_err(|_| UseCaseError::StorageError)
    }
}
