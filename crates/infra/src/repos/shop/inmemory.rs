use super::IShopRepo;
use crate::repos::shared::inmemory_repo::*;
use hurry_domain::{Shop, ID};
use std::sync::Mutex;

pub struct InMemoryShopRepo {
    shops: Mutex<Vec<Shop>>,
}

impl InMemoryShopRepo {
    pub fn new() -> Self {
        Self {
            shops: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IShopRepo for InMemoryShopRepo {
    async fn insert(&self, shop: &Shop) -> anyhow::Result<()> {
        insert(shop, &self.shops);
        Ok(())
    }

    async fn find(&self, shop_id: &ID) -> Option<Shop> {
        find(shop_id, &self.shops)
    }

    async fn find_by_domain(&self, domain: &str) -> Option<Shop> {
        find_by(&self.shops, |shop| shop.domain == domain)
            .into_iter()
            .next()
    }

    async fn find_by_apikey(&self, api_key: &str) -> Option<Shop> {
        find_by(&self.shops, |shop| shop.secret_api_key == api_key)
            .into_iter()
            .next()
    }
}
