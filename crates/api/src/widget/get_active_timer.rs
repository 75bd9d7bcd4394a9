use crate::{
    error::HurryError,
    shared::usecase::{execute, Subscriber, UseCase},
};
use actix_web::{web, HttpResponse};
use chrono::{SecondsFormat, TimeZone, Utc};
use hurry_api_structs::dtos::WidgetTimerDTO;
use hurry_api_structs::get_active_timer::{APIResponse, QueryParams};
use hurry_domain::{select_displayable, Timer};
use hurry_infra::HurryContext;
use tracing::error;

pub async fn get_active_timer_controller(
    query_params: web::Query<QueryParams>,
    ctx: web::Data<HurryContext>,
) -> Result<HttpResponse, HurryError> {
    let query = query_params.0;
    if query.shop.trim().is_empty() {
        return Err(HurryError::BadClientData(
            "shop query parameter is required".into(),
        ));
    }

    let usecase = GetActiveTimerUseCase {
        shop: query.shop,
        product_id: query.product_id,
        now: ctx.sys.get_timestamp_millis(),
    };

    execute(usecase, &ctx)
        .await
        .map(|selection| {
            let now = selection.now;
            let timestamp = Utc
                .timestamp_millis_opt(now)
                .single()
                .unwrap_or_else(Utc::now)
                .to_rfc3339_opts(SecondsFormat::Millis, true);
            HttpResponse::Ok().json(APIResponse {
                timer: selection
                    .timer
                    .map(|timer| WidgetTimerDTO::new(timer, now)),
                timestamp,
            })
        })
        .map_err(HurryError::from)
}

#[derive(Debug)]
pub struct GetActiveTimerUseCase {
    pub shop: String,
    pub product_id: Option<String>,
    pub now: i64,
}

/// The displayable timer for the widget, if any, evaluated at `now`.
#[derive(Debug)]
pub struct TimerSelection {
    pub timer: Option<Timer>,
    pub now: i64,
}

#[derive(Debug)]
pub enum UseCaseError {}

impl From<UseCaseError> for HurryError {
    fn from(e: UseCaseError) -> Self {
        match e {}
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetActiveTimerUseCase {
    type Response = TimerSelection;

    type Error = UseCaseError;

    const NAME: &'static str = "GetActiveTimer";

    async fn execute(&mut self, ctx: &HurryContext) -> Result<Self::Response, Self::Error> {
        let candidates = ctx.repos.timers.find_in_window(&self.shop, self.now).await;
        let timer = select_displayable(candidates, self.product_id.as_deref(), self.now);

        Ok(TimerSelection {
            timer,
            now: self.now,
        })
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(IncrementViewsOnSelection)]
    }
}

/// Counts a widget impression whenever a timer is selected for display.
/// Failures are logged and never reach the widget.
pub struct IncrementViewsOnSelection;

#[async_trait::async_trait(?Send)]
impl Subscriber<GetActiveTimerUseCase> for IncrementViewsOnSelection {
    async fn notify(&self, selection: &TimerSelection, ctx: &HurryContext) {
        if let Some(timer) = &selection.timer {
            if let Err(e) = ctx.repos.timers.increment_views(&timer.id).await {
                error!(
                    "Unable to increment views for timer with id: {}. Error: {:?}",
                    timer.id, e
                );
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[actix_web::main]
    #[test]
    async fn no_candidates_is_an_empty_selection() {
        let ctx = HurryContext::create_inmemory();
        let mut usecase = GetActiveTimerUseCase {
            shop: "demo.myshopify.com".into(),
            product_id: None,
            now: 1000,
        };
        let selection = usecase.execute(&ctx).await.expect("To select");
        assert!(selection.timer.is_none());
    }

    #[actix_web::main]
    #[test]
    async fn selection_counts_a_view() {
        let ctx = HurryContext::create_inmemory();
        let timer = Timer::new("demo.myshopify.com", 100, 200, 50);
        assert!(ctx.repos.timers.insert(&timer).await.is_ok());

        let usecase = GetActiveTimerUseCase {
            shop: "demo.myshopify.com".into(),
            product_id: None,
            now: 150,
        };
        let selection = execute(usecase, &ctx).await.expect("To select");
        assert!(selection.timer.is_some());

        let stored = ctx.repos.timers.find(&timer.id).await.unwrap();
        assert_eq!(stored.views, 1);
    }

    #[actix_web::main]
    #[test]
    async fn empty_selection_counts_nothing() {
        let ctx = HurryContext::create_inmemory();
        let timer = Timer::new("demo.myshopify.com", 100, 200, 50);
        assert!(ctx.repos.timers.insert(&timer).await.is_ok());

        let usecase = GetActiveTimerUseCase {
            shop: "demo.myshopify.com".into(),
            product_id: None,
            now: 1000,
        };
        let selection = execute(usecase, &ctx).await.expect("To select");
        assert!(selection.timer.is_none());

        let stored = ctx.repos.timers.find(&timer.id).await.unwrap();
        assert_eq!(stored.views, 0);
    }
}
