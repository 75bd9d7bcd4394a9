use crate::{
    error::HurryError,
    shared::auth::protect_shop_route,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use hurry_api_structs::delete_timer::{APIResponse, PathParams};
use hurry_domain::{Timer, ID};
use hurry_infra::HurryContext;

pub async fn delete_timer_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<HurryContext>,
) -> Result<HttpResponse, HurryError> {
    let shop = protect_shop_route(&http_req, &ctx).await?;

    let usecase = DeleteTimerUseCase {
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
pub struct DeleteTimerUseCase {
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
impl UseCase for DeleteTimerUseCase {
    type Response = Timer;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteTimer";

    async fn execute(&mut self, ctx: &HurryContext) -> Result<Self::Response, Self::Error> {
        match ctx.repos.timers.find(&self.timer_id).await {
            Some(timer) if timer.shop == self.shop => ctx
                .repos
                .timers
                .delete(&self.timer_id)
                .await
                .ok_or(UseCaseError::StorageError),
            _ => Err(UseCaseError::NotFound(self.timer_id.clone())),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[actix_web::main]
    #[test]
    async fn delete_is_scoped_to_owning_shop() {
        let ctx = HurryContext::create_inmemory();
        let timer = Timer::new("owner.myshopify.com", 100, 200, 50);
        assert!(ctx.repos.timers.insert(&timer).await.is_ok());

        let mut usecase = DeleteTimerUseCase {
            shop: "other.myshopify.com".into(),
            timer_id: timer.id.clone(),
        };
        assert!(usecase.execute(&ctx).await.is_err());
        assert!(ctx.repos.timers.find(&timer.id).await.is_some());

        let mut usecase = DeleteTimerUseCase {
            shop: "owner.myshopify.com".into(),
            timer_id: timer.id.clone(),
        };
        assert!(usecase.execute(&ctx).await.is_ok());
        assert!(ctx.repos.timers.find(&timer.id).await.is_none());
    }
}
