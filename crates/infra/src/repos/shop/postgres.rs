use super::IShopRepo;
use hurry_domain::{Shop, ID};
use sqlx::{types::Uuid, FromRow, PgPool};
use tracing::error;

pub struct PostgresShopRepo {
    pool: PgPool,
}

impl PostgresShopRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ShopRaw {
    shop_uid: Uuid,
    domain: String,
    secret_api_key: String,
}

impl From<ShopRaw> for Shop {
    fn from(e: ShopRaw) -> Self {
        Self {
            id: e.shop_uid.into(),
            domain: e.domain,
            secret_api_key: e.secret_api_key,
        }
    }
}

#[async_trait::async_trait]
impl IShopRepo for PostgresShopRepo {
    async fn insert(&self, shop: &Shop) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO shops(shop_uid, domain, secret_api_key)
            VALUES($1, $2, $3)
            "#,
        )
        .bind(shop.id.inner_ref())
        .bind(&shop.domain)
        .bind(&shop.secret_api_key)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to insert shop: {:?}. DB returned error: {:?}",
                shop, e
            );
            e
        })?;
        Ok(())
    }

    async fn find(&self, shop_id: &ID) -> Option<Shop> {
        let res: Option<ShopRaw> = sqlx::query_as(
            r#"
            SELECT * FROM shops
            WHERE shop_uid = $1
            "#,
        )
        .bind(shop_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find shop with id: {:?} failed. DB returned error: {:?}",
                shop_id, e
            );
            e
        })
        .ok()?;
        res.map(|shop| shop.into())
    }

    async fn find_by_domain(&self, domain: &str) -> Option<Shop> {
        let res: Option<ShopRaw> = sqlx::query_as(
            r#"
            SELECT * FROM shops
            WHERE domain = $1
            "#,
        )
        .bind(domain)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find shop with domain: {:?} failed. DB returned error: {:?}",
                domain, e
            );
            e
        })
        .ok()?;
        res.map(|shop| shop.into())
    }

    async fn find_by_apikey(&self, api_key: &str) -> Option<Shop> {
        let res: Option<ShopRaw> = sqlx::query_as(
            r#"
            SELECT * FROM shops
            WHERE secret_api_key = $1
            "#,
        )
        .bind(api_key)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find shop with api_key: {:?} failed. DB returned error: {:?}",
                api_key, e
            );
            e
        })
        .ok()?;
        res.map(|shop| shop.into())
    }
}
