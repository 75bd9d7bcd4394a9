use super::ITimerRepo;
use hurry_domain::{DisplayOptions, TargetProducts, Timer, UrgencySettings, ID};
use sqlx::{
    types::{Json, Uuid},
    FromRow, PgPool,
};
use tracing::{debug, error};

pub struct PostgresTimerRepo {
    pool: PgPool,
}

impl PostgresTimerRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TimerRaw {
    timer_uid: Uuid,
    shop: String,
    title: String,
    description: String,
    start_ts: i64,
    end_ts: i64,
    is_active: bool,
    display_options: Json<DisplayOptions>,
    urgency_settings: Json<UrgencySettings>,
    target_products: String,
    product_ids: Json<Vec<String>>,
    views: i64,
    clicks: i64,
    created: i64,
    updated: i64,
}

impl From<TimerRaw> for Timer {
    fn from(e: TimerRaw) -> Self {
        Self {
            id: e.timer_uid.into(),
            shop: e.shop,
            title: e.title,
            description: e.description,
            start_ts: e.start_ts,
            end_ts: e.end_ts,
            is_active: e.is_active,
            display_options: e.display_options.0,
            urgency_settings: e.urgency_settings.0,
            target_products: e.target_products.parse().unwrap_or_default(),
            product_ids: e.product_ids.0,
            views: e.views,
            clicks: e.clicks,
            created: e.created,
            updated: e.updated,
        }
    }
}

#[async_trait::async_trait]
impl ITimerRepo for PostgresTimerRepo {
    async fn insert(&self, timer: &Timer) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO timers(
                timer_uid, shop, title, description, start_ts, end_ts, is_active,
                display_options, urgency_settings, target_products, product_ids,
                views, clicks, created, updated
            )
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            "#,
        )
        .bind(timer.id.inner_ref())
        .bind(&timer.shop)
        .bind(&timer.title)
        .bind(&timer.description)
        .bind(timer.start_ts)
        .bind(timer.end_ts)
        .bind(timer.is_active)
        .bind(Json(&timer.display_options))
        .bind(Json(&timer.urgency_settings))
        .bind(timer.target_products.as_str())
        .bind(Json(&timer.product_ids))
        .bind(timer.views)
        .bind(timer.clicks)
        .bind(timer.created)
        .bind(timer.updated)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to insert timer: {:?}. DB returned error: {:?}",
                timer, e
            );
            e
        })?;
        Ok(())
    }

    async fn save(&self, timer: &Timer) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE timers
            SET title = $2,
            description = $3,
            start_ts = $4,
            end_ts = $5,
            is_active = $6,
            display_options = $7,
            urgency_settings = $8,
            target_products = $9,
            product_ids = $10,
            updated = $11
            WHERE timer_uid = $1
            "#,
        )
        .bind(timer.id.inner_ref())
        .bind(&timer.title)
        .bind(&timer.description)
        .bind(timer.start_ts)
        .bind(timer.end_ts)
        .bind(timer.is_active)
        .bind(Json(&timer.display_options))
        .bind(Json(&timer.urgency_settings))
        .bind(timer.target_products.as_str())
        .bind(Json(&timer.product_ids))
        .bind(timer.updated)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to save timer: {:?}. DB returned error: {:?}",
                timer, e
            );
            e
        })?;
        Ok(())
    }

    async fn find(&self, timer_id: &ID) -> Option<Timer> {
        let res: Option<TimerRaw> = sqlx::query_as(
            r#"
            SELECT * FROM timers
            WHERE timer_uid = $1
            "#,
        )
        .bind(timer_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find timer with id: {:?} failed. DB returned error: {:?}",
                timer_id, e
            );
            e
        })
        .ok()?;
        res.map(|timer| timer.into())
    }

    async fn find_by_shop(&self, shop: &str) -> Vec<Timer> {
        let timers_raw: Vec<TimerRaw> = sqlx::query_as(
            r#"
            SELECT * FROM timers
            WHERE shop = $1
            ORDER BY created DESC
            "#,
        )
        .bind(shop)
        .fetch_all(&self.pool)
        .await
        .unwrap_or_else(|e| {
            error!(
                "Find timers for shop: {:?} failed. DB returned error: {:?}",
                shop, e
            );
            Vec::new()
        });
        timers_raw.into_iter().map(|timer| timer.into()).collect()
    }

    async fn find_in_window(&self, shop: &str, ts: i64) -> Vec<Timer> {
        let timers_raw: Vec<TimerRaw> = sqlx::query_as(
            r#"
            SELECT * FROM timers
            WHERE shop = $1 AND
            is_active = TRUE AND
            start_ts <= $2 AND
            end_ts >= $2
            ORDER BY created DESC
            "#,
        )
        .bind(shop)
        .bind(ts)
        .fetch_all(&self.pool)
        .await
        .unwrap_or_else(|e| {
            error!(
                "Find timers in window for shop: {:?} at ts: {} failed. DB returned error: {:?}",
                shop, ts, e
            );
            Vec::new()
        });
        timers_raw.into_iter().map(|timer| timer.into()).collect()
    }

    async fn delete(&self, timer_id: &ID) -> Option<Timer> {
        let res: Option<TimerRaw> = sqlx::query_as(
            r#"
            DELETE FROM timers
            WHERE timer_uid = $1
            RETURNING *
            "#,
        )
        .bind(timer_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Delete timer with id: {:?} failed. DB returned error: {:?}",
                timer_id, e
            );
            e
        })
        .ok()?;
        res.map(|timer| timer.into())
    }

    async fn increment_views(&self, timer_id: &ID) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE timers
            SET views = views + 1
            WHERE timer_uid = $1
            "#,
        )
        .bind(timer_id.inner_ref())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Increment views for timer with id: {:?} failed. DB returned error: {:?}",
                timer_id, e
            );
            e
        })?;
        Ok(())
    }

    async fn increment_clicks(&self, timer_id: &ID) -> anyhow::Result<()> {
        let res = sqlx::query(
            r#"
            UPDATE timers
            SET clicks = clicks + 1
            WHERE timer_uid = $1
            "#,
        )
        .bind(timer_id.inner_ref())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Increment clicks for timer with id: {:?} failed. DB returned error: {:?}",
                timer_id, e
            );
            e
        })?;
        if res.rows_affected() == 0 {
            debug!("Click recorded for unknown timer id: {:?}", timer_id);
        }
        Ok(())
    }
}
