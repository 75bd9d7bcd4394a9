use crate::{
    error::HurryError,
    shared::auth::protect_shop_route,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use hurry_api_structs::toggle_timer::{APIResponse, PathParams};
use hurry_domain::{Timer, ID};
use hurry_infra::HurryContext;

pub async fn toggle_timer_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<HurryContext>,
) -> Result<HttpResponse, HurryError> {
    let shop = protect_shop_route(&http_req, &ctx).await?;

    let usecase = ToggleTimerUseCase {
        shop: shop.domain,
        timer_id: path_params.timer_id.clone(),
    };

    let now = ctx.sys.get_timestamp_millis();
    execute(usecase, &ctx)
        .await
        .map(|timer| HttpResponse::Ok().json(APIResponse::new(timer, now)))
        .map_err(HurryError::from)
}

#[derive(Debug)]
pub struct ToggleTimerUseCase {
    pub shop: String,
    pub timer_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
    StorageError,
}

impl From<UseCaseError> for HurryError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(timer_id) => {
                Self::NotFound(format!("The timer with id: {}, was not found.", timer_id))
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for ToggleTimerUseCase {
    type Response = Timer;

    type Error = UseCaseError;

    const NAME: &'static str = "ToggleTimer";

    async fn execute(&mut self, ctx: &HurryContext) -> Result<Self::Response, Self::Error> {
        let mut timer = match ctx.repos.timers.find(&self.timer_id).await {
            Some(timer) if timer.shop == self.shop => timer,
            _ => return Err(UseCaseError::NotFound(self.timer_id.clone())),
        };

        timer.is_active = !timer.is_active;
        timer.updated = ctx.sys.get_timestamp_millis();

        ctx.repos
            .timers
            .save(&timer)
            .await
            .map(|_| timer)
            .map_err(|_| UseCaseError::StorageError)
    }
}
