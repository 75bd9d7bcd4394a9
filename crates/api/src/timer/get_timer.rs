use crate::{
    error::HurryError,
    shared::auth::protect_shop_route,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use hurry_api_structs::get_timer::{APIResponse, PathParams};
use hurry_domain::{Timer, ID};
use hurry_infra::HurryContext;

pub async fn get_timer_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<HurryContext>,
) -> Result<HttpResponse, HurryError> {
    let shop = protect_shop_route(&http_req, &ctx).await?;

    let usecase = GetTimerUseCase {
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
pub struct GetTimerUseCase {
    pub shop: String,
    pub timer_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
}

impl From<UseCaseError> for HurryError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(timer_id) => {
                Self::NotFound(format!("The timer with id: {}, was not found.", timer_id))
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetTimerUseCase {
    type Response = Timer;

    type Error = UseCaseError;

    const NAME: &'static str = "GetTimer";

    async fn execute(&mut self, ctx: &HurryContext) -> Result<Self::Response, Self::Error> {
        match ctx.repos.timers.find(&self.timer_id).await {
            Some(timer) if timer.shop == self.shop => Ok(timer),
            _ => Err(UseCaseError::NotFound(self.timer_id.clone())),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[actix_web::main]
    #[test]
    async fn timer_of_another_shop_is_not_found() {
        let ctx = HurryContext::create_inmemory();
        let timer = Timer::new("owner.myshopify.com", 100, 200, 50);
        assert!(ctx.repos.timers.insert(&timer).await.is_ok());

        let mut usecase = GetTimerUseCase {
            shop: "other.myshopify.com".into(),
            timer_id: timer.id.clone(),
        };
        assert!(usecase.execute(&ctx).await.is_err());

        let mut usecase = GetTimerUseCase {
            shop: "owner.myshopify.com".into(),
            timer_id: timer.id,
        };
        assert!(usecase.execute(&ctx).await.is_ok());
    }
}
