use hurry_domain::{Shop, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ShopDTO {
    pub id: ID,
    pub domain: String,
}

impl ShopDTO {
    pub fn new(shop: &Shop) -> Self {
        Self {
            id: shop.id.clone(),
            domain: shop.domain.clone(),
        }
    }
}
