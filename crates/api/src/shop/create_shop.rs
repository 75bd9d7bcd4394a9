use crate::{
    error::HurryError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use hurry_api_structs::create_shop::{APIResponse, RequestBody};
use hurry_domain::Shop;
use hurry_infra::HurryContext;

pub async fn create_shop_controller(
    ctx: web::Data<HurryContext>,
    body: web::Json<RequestBody>,
) -> Result<HttpResponse, HurryError> {
    let usecase = CreateShopUseCase {
        code: body.0.code,
        domain: body.0.domain,
    };
    execute(usecase, &ctx)
        .await
        .map(|shop| HttpResponse::Created().json(APIResponse::new(shop)))
        .map_err(HurryError::from)
}

#[derive(Debug)]
struct CreateShopUseCase {
    code: String,
    domain: String,
}

#[derive(Debug)]
enum UseCaseError {
    StorageError,
    InvalidCreateShopCode,
    InvalidDomain,
    DomainTaken(String),
}

impl From<UseCaseError> for HurryError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidCreateShopCode => Self::Unauthorized("Invalid code provided".into()),
            UseCaseError::InvalidDomain => Self::BadClientData("domain cannot be empty".into()),
            UseCaseError::DomainTaken(domain) => Self::BadClientData(format!(
                "A shop with domain: {} already exists",
                domain
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateShopUseCase {
    type Response = Shop;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateShop";

    async fn execute(&mut self, ctx: &HurryContext) -> Result<Self::Response, Self::Error> {
        if self.code != ctx.config.create_shop_secret_code {
            return Err(UseCaseError::InvalidCreateShopCode);
        }
        let domain = self.domain.trim().to_lowercase();
        if domain.is_empty() {
            return Err(UseCaseError::InvalidDomain);
        }
        if ctx.repos.shops.find_by_domain(&domain).await.is_some() {
            return Err(UseCaseError::DomainTaken(domain));
        }

        let shop = Shop::new(&domain);
        let res = ctx.repos.shops.insert(&shop).await;

        res.map(|_| shop).map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::main]
    #[test]
    async fn rejects_invalid_create_shop_code() {
        let ctx = HurryContext::create_inmemory();
        let mut usecase = CreateShopUseCase {
            code: format!("{}-wrong", ctx.config.create_shop_secret_code),
            domain: "demo.myshopify.com".into(),
        };
        assert!(usecase.execute(&ctx).await.is_err());
    }

    #[actix_web::main]
    #[test]
    async fn rejects_duplicate_domain() {
        let ctx = HurryContext::create_inmemory();
        let code = ctx.config.create_shop_secret_code.clone();
        let mut usecase = CreateShopUseCase {
            code: code.clone(),
            domain: "demo.myshopify.com".into(),
        };
        assert!(usecase.execute(&ctx).await.is_ok());

        let mut usecase = CreateShopUseCase {
            code,
            domain: "Demo.MyShopify.com ".into(),
        };
        assert!(usecase.execute(&ctx).await.is_err());
    }
}
