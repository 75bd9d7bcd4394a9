use crate::{error::HurryError, shared::auth::protect_shop_route};
use actix_web::{web, HttpRequest, HttpResponse};
use hurry_api_structs::get_shop::APIResponse;
use hurry_infra::HurryContext;

pub async fn get_shop_controller(
    http_req: HttpRequest,
    ctx: web::Data<HurryContext>,
) -> Result<HttpResponse, HurryError> {
    let shop = protect_shop_route(&http_req, &ctx).await?;

    Ok(HttpResponse::Ok().json(APIResponse::new(shop)))
}
