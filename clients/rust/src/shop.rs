use crate::{APIResponse, BaseClient};
use hurry_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct ShopClient {
    base: Arc<BaseClient>,
}

impl ShopClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn get(&self) -> APIResponse<get_shop::APIResponse> {
        self.base.get("shops/me".into(), StatusCode::OK).await
    }

    pub async fn create(&self, code: &str, domain: &str) -> APIResponse<create_shop::APIResponse> {
        let body = create_shop::RequestBody {
            code: code.into(),
            domain: domain.into(),
        };
        self.base
            .post(body, "shops".into(), StatusCode::CREATED)
            .await
    }
}
