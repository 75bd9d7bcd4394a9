use crate::{
    error::HurryError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use hurry_api_structs::record_timer_click::{APIResponse, PathParams};
use hurry_domain::ID;
use hurry_infra::HurryContext;

pub async fn record_timer_click_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<HurryContext>,
) -> Result<HttpResponse, HurryError> {
    let usecase = RecordTimerClickUseCase {
        timer_id: path_params.timer_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|_| HttpResponse::Ok().json(APIResponse { success: true }))
        .map_err(HurryError::from)
}

#[derive(Debug)]
pub struct RecordTimerClickUseCase {
    pub timer_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

impl From<UseCaseError> for HurryError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for RecordTimerClickUseCase {
    type Response = ();

    type Error = UseCaseError;

    const NAME: &'static str = "RecordTimerClick";

    // A click on an id that matches no timer is still a success, the
    // widget fires these beacons without knowing whether the timer was
    // deleted in the meantime.
    async fn execute(&mut self, ctx: &HurryContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .timers
            .increment_clicks(&self.timer_id)
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
