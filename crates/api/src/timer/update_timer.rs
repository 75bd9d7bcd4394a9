use crate::{
    error::HurryError,
    shared::auth::protect_shop_route,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use hurry_api_structs::update_timer::{APIResponse, PathParams, RequestBody};
use hurry_domain::{DisplayOptions, TargetProducts, Timer, UrgencySettings, ID};
use hurry_infra::HurryContext;

fn handle_error(e: UseCaseError) -> HurryError {
    match e {
        UseCaseError::NotFound(timer_id) => {
            HurryError::NotFound(format!("The timer with id: {}, was not found.", timer_id))
        }
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

pub async fn update_timer_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    path_params: web::Path<PathParams>,
    ctx: web::Data<HurryContext>,
) -> Result<HttpResponse, HurryError> {
    let shop = protect_shop_route(&http_req, &ctx).await?;

    let body = body.0;
    let usecase = UpdateTimerUseCase {
        shop: shop.domain,
        timer_id: path_params.timer_id.clone(),
        title: body.title,
        description: body.description,
        start_ts: body.start_date,
        end_ts: body.end_date,
        is_active: body.is_active,
        display_options: body.display_options,
        urgency_settings: body.urgency_settings,
        target_products: body.target_products,
        product_ids: body.product_ids,
    };

    let now = ctx.sys.get_timestamp_millis();
    execute(usecase, &ctx)
        .await
        .map(|timer| HttpResponse::Ok().json(APIResponse::new(timer, now)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct UpdateTimerUseCase {
    pub shop: String,
    pub timer_id: ID,
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_ts: Option<i64>,
    pub end_ts: Option<i64>,
    pub is_active: Option<bool>,
    pub display_options: Option<DisplayOptions>,
    pub urgency_settings: Option<UrgencySettings>,
    pub target_products: Option<TargetProducts>,
    pub product_ids: Option<Vec<String>>,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
    EmptyTitle,
    InvalidTimeWindow,
    InvalidUrgencyThreshold(i64),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateTimerUseCase {
    type Response = Timer;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateTimer";

    async fn execute(&mut self, ctx: &HurryContext) -> Result<Self::Response, Self::Error> {
        let mut timer = match ctx.repos.timers.find(&self.timer_id).await {
            Some(timer) if timer.shop == self.shop => timer,
            _ => return Err(UseCaseError::NotFound(self.timer_id.clone())),
        };

        if let Some(title) = &self.title {
            let title = title.trim();
            if title.is_empty() {
                return Err(UseCaseError::EmptyTitle);
            }
            timer.title = title.to_string();
        }
        if let Some(description) = &self.description {
            timer.description = description.trim().to_string();
        }

        let start_ts = self.start_ts.unwrap_or(timer.start_ts);
        let end_ts = self.end_ts.unwrap_or(timer.end_ts);
        if end_ts <= start_ts {
            return Err(UseCaseError::InvalidTimeWindow);
        }
        timer.start_ts = start_ts;
        timer.end_ts = end_ts;

        if let Some(is_active) = self.is_active {
            timer.is_active = is_active;
        }
        if let Some(display_options) = &self.display_options {
            timer.display_options = display_options.clone();
        }
        if let Some(urgency_settings) = &self.urgency_settings {
            if !urgency_settings.is_valid() {
                return Err(UseCaseError::InvalidUrgencyThreshold(
                    urgency_settings.threshold_minutes,
                ));
            }
            timer.urgency_settings = urgency_settings.clone();
        }
        if let Some(target_products) = self.target_products {
            timer.target_products = target_products;
        }
        if let Some(product_ids) = &self.product_ids {
            timer.product_ids = product_ids.clone();
        }

        timer.updated = ctx.sys.get_timestamp_millis();

        ctx.repos
            .timers
            .save(&timer)
            .await
            .map(|_| timer)
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn patch(shop: &str, timer_id: ID) -> UpdateTimerUseCase {
        UpdateTimerUseCase {
            shop: shop.into(),
            timer_id,
            title: None,
            description: None,
            start_ts: None,
            end_ts: None,
            is_active: None,
            display_options: None,
            urgency_settings: None,
            target_products: None,
            product_ids: None,
        }
    }

    #[actix_web::main]
    #[test]
    async fn update_nonexisting_timer() {
        let ctx = HurryContext::create_inmemory();
        let mut usecase = patch("demo.myshopify.com", Default::default());
        usecase.title = Some("New title".into());
        assert!(usecase.execute(&ctx).await.is_err());
    }

    #[actix_web::main]
    #[test]
    async fn partial_update_keeps_other_fields() {
        let ctx = HurryContext::create_inmemory();
        let mut timer = Timer::new("demo.myshopify.com", 100, 200, 50);
        timer.title = "Original".into();
        assert!(ctx.repos.timers.insert(&timer).await.is_ok());

        let mut usecase = patch("demo.myshopify.com", timer.id.clone());
        usecase.is_active = Some(false);
        let updated = usecase.execute(&ctx).await.expect("To update timer");
        assert_eq!(updated.title, "Original");
        assert!(!updated.is_active);
        assert_eq!(updated.start_ts, 100);
        assert_eq!(updated.end_ts, 200);
    }

    #[actix_web::main]
    #[test]
    async fn validates_date_order_when_both_dates_present() {
        let ctx = HurryContext::create_inmemory();
        let timer = Timer::new("demo.myshopify.com", 100, 200, 50);
        assert!(ctx.repos.timers.insert(&timer).await.is_ok());

        let mut usecase = patch("demo.myshopify.com", timer.id.clone());
        usecase.start_ts = Some(500);
        usecase.end_ts = Some(400);
        assert!(usecase.execute(&ctx).await.is_err());

        // patching one date is validated against the stored other date
        let mut usecase = patch("demo.myshopify.com", timer.id.clone());
        usecase.end_ts = Some(50);
        assert!(usecase.execute(&ctx).await.is_err());

        let stored = ctx.repos.timers.find(&timer.id).await.unwrap();
        assert_eq!(stored.start_ts, 100);
        assert_eq!(stored.end_ts, 200);
    }

    #[actix_web::main]
    #[test]
    async fn revalidates_urgency_threshold() {
        let ctx = HurryContext::create_inmemory();
        let timer = Timer::new("demo.myshopify.com", 100, 200, 50);
        assert!(ctx.repos.timers.insert(&timer).await.is_ok());

        let mut usecase = patch("demo.myshopify.com", timer.id);
        let mut urgency = UrgencySettings::default();
        urgency.threshold_minutes = 0;
        usecase.urgency_settings = Some(urgency);
        assert!(usecase.execute(&ctx).await.is_err());
    }
}
