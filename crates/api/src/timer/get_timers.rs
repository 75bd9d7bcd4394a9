use crate::{
    error::HurryError,
    shared::auth::protect_shop_route,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use hurry_api_structs::get_timers::APIResponse;
use hurry_domain::Timer;
use hurry_infra::HurryContext;

pub async fn get_timers_controller(
    http_req: HttpRequest,
    ctx: web::Data<HurryContext>,
) -> Result<HttpResponse, HurryError> {
    let shop = protect_shop_route(&http_req, &ctx).await?;

    let usecase = GetTimersUseCase { shop: shop.domain };

    let now = ctx.sys.get_timestamp_millis();
    execute(usecase, &ctx)
        .await
        .map(|timers| HttpResponse::Ok().json(APIResponse::new(timers, now)))
        .map_err(HurryError::from)
}

#[derive(Debug)]
pub struct GetTimersUseCase {
    pub shop: String,
}

#[derive(Debug)]
pub enum UseCaseError {}

impl From<UseCaseError> for HurryError {
    fn from(e: UseCaseError) -> Self {
        match e {}
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetTimersUseCase {
    type Response = Vec<Timer>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetTimers";

    async fn execute(&mut self, ctx: &HurryContext) -> Result<Self::Response, Self::Error> {
        Ok(ctx.repos.timers.find_by_shop(&self.shop).await)
    }
}
