mod inmemory;
mod postgres;

use hurry_domain::{Shop, ID};
pub use inmemory::InMemoryShopRepo;
pub use postgres::PostgresShopRepo;

#[async_trait::async_trait]
pub trait IShopRepo: Send + Sync {
    async fn insert(&self, shop: &Shop) -> anyhow::Result<()>;
    async fn find(&self, shop_id: &ID) -> Option<Shop>;
    async fn find_by_domain(&self, domain: &str) -> Option<Shop>;
    async fn find_by_apikey(&self, api_key: &str) -> Option<Shop>;
}

#[cfg(test)]
mod tests {
    use crate::HurryContext;
    use hurry_domain::{Entity, Shop};

    #[tokio::test]
    async fn create_and_find() {
        let ctx = HurryContext::create_inmemory();
        let shop = Shop::new("demo.myshopify.com");

        // Insert
        assert!(ctx.repos.shops.insert(&shop).await.is_ok());

        // Different find methods
        let res = ctx.repos.shops.find(&shop.id).await.unwrap();
        assert!(res.eq(&shop));
        let res = ctx
            .repos
            .shops
            .find_by_domain("demo.myshopify.com")
            .await
            .unwrap();
        assert!(res.eq(&shop));
        let res = ctx
            .repos
            .shops
            .find_by_apikey(&shop.secret_api_key)
            .await
            .unwrap();
        assert!(res.eq(&shop));
    }

    #[tokio::test]
    async fn unknown_api_key_matches_nothing() {
        let ctx = HurryContext::create_inmemory();
        let shop = Shop::new("demo.myshopify.com");
        assert!(ctx.repos.shops.insert(&shop).await.is_ok());

        assert!(ctx.repos.shops.find_by_apikey("sk_nope").await.is_none());
        assert!(ctx
            .repos
            .shops
            .find_by_domain("other.myshopify.com")
            .await
            .is_none());
    }
}
