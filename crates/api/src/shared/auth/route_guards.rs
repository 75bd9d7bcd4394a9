use crate::error::HurryError;
use actix_web::HttpRequest;
use hurry_domain::Shop;
use hurry_infra::HurryContext;

/// Resolves the `Shop` from the `Authorization` api key header on
/// admin routes.
pub async fn protect_shop_route(
    req: &HttpRequest,
    ctx: &HurryContext,
) -> Result<Shop, HurryError> {
    let api_key = match req.headers().get("Authorization") {
        Some(api_key) => match api_key.to_str() {
            Ok(api_key) => api_key,
            Err(_) => {
                return Err(HurryError::Unauthorized(
                    "Malformed api key provided".to_string(),
                ))
            }
        },
        None => {
            return Err(HurryError::Unauthorized(
                "Unable to find api-key in Authorization header".to_string(),
            ))
        }
    };

    ctx.repos
        .shops
        .find_by_apikey(api_key)
        .await
        .ok_or_else(|| HurryError::Unauthorized("Invalid api-key provided".to_string()))
}
