use crate::dtos::ShopDTO;
use hurry_domain::Shop;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopResponse {
    pub shop: ShopDTO,
}

impl ShopResponse {
    pub fn new(shop: Shop) -> Self {
        Self {
            shop: ShopDTO::new(&shop),
        }
    }
}

pub mod create_shop {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub code: String,
        pub domain: String,
    }

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub shop: ShopDTO,
        pub secret_api_key: String,
    }

    impl APIResponse {
        pub fn new(shop: Shop) -> Self {
            Self {
                shop: ShopDTO::new(&shop),
                secret_api_key: shop.secret_api_key,
            }
        }
    }
}

pub mod get_shop {
    use super::*;

    pub type APIResponse = ShopResponse;
}
