mod inmemory;
mod postgres;

use hurry_domain::{Timer, ID};
pub use inmemory::InMemoryTimerRepo;
pub use postgres::PostgresTimerRepo;

#[async_trait::async_trait]
pub trait ITimerRepo: Send + Sync {
    async fn insert(&self, timer: &Timer) -> anyhow::Result<()>;
    async fn save(&self, timer: &Timer) -> anyhow::Result<()>;
    async fn find(&self, timer_id: &ID) -> Option<Timer>;
    /// All timers belonging to the shop, newest created first
    async fn find_by_shop(&self, shop: &str) -> Vec<Timer>;
    /// Active timers for the shop whose window contains the given instant
    async fn find_in_window(&self, shop: &str, ts: i64) -> Vec<Timer>;
    async fn delete(&self, timer_id: &ID) -> Option<Timer>;
    async fn increment_views(&self, timer_id: &ID) -> anyhow::Result<()>;
    async fn increment_clicks(&self, timer_id: &ID) -> anyhow::Result<()>;
}

#[cfg(test)]
mod tests {
    use crate::HurryContext;
    use hurry_domain::{Entity, Timer};

    const SHOP: &str = "demo.myshopify.com";

    #[tokio::test]
    async fn create_and_delete() {
        let ctx = HurryContext::create_inmemory();
        let timer = Timer::new(SHOP, 100, 200, 50);

        // Insert
        assert!(ctx.repos.timers.insert(&timer).await.is_ok());

        // Different find methods
        let res = ctx.repos.timers.find(&timer.id).await.unwrap();
        assert!(res.eq(&timer));
        let res = ctx.repos.timers.find_by_shop(SHOP).await;
        assert!(res[0].eq(&timer));

        // Delete
        let res = ctx.repos.timers.delete(&timer.id).await;
        assert!(res.is_some());
        assert!(res.unwrap().eq(&timer));

        // Find
        assert!(ctx.repos.timers.find(&timer.id).await.is_none());
    }

    #[tokio::test]
    async fn update() {
        let ctx = HurryContext::create_inmemory();
        let mut timer = Timer::new(SHOP, 100, 200, 50);

        assert!(ctx.repos.timers.insert(&timer).await.is_ok());

        timer.title = "Summer sale".into();
        timer.is_active = false;

        // Save
        assert!(ctx.repos.timers.save(&timer).await.is_ok());

        // Find
        let res = ctx.repos.timers.find(&timer.id).await.unwrap();
        assert_eq!(res.title, "Summer sale");
        assert!(!res.is_active);
    }

    #[tokio::test]
    async fn window_query_is_scoped_and_ordered() {
        let ctx = HurryContext::create_inmemory();

        let mut in_window_old = Timer::new(SHOP, 100, 200, 1);
        in_window_old.created = 1;
        let mut in_window_new = Timer::new(SHOP, 100, 200, 2);
        in_window_new.created = 2;
        let outside_window = Timer::new(SHOP, 300, 400, 3);
        let mut inactive = Timer::new(SHOP, 100, 200, 4);
        inactive.is_active = false;
        let other_shop = Timer::new("other.myshopify.com", 100, 200, 5);

        for timer in [
            &in_window_old,
            &in_window_new,
            &outside_window,
            &inactive,
            &other_shop,
        ] {
            assert!(ctx.repos.timers.insert(timer).await.is_ok());
        }

        let res = ctx.repos.timers.find_in_window(SHOP, 150).await;
        assert_eq!(res.len(), 2);
        assert!(res[0].eq(&in_window_new));
        assert!(res[1].eq(&in_window_old));

        // Window bounds are inclusive
        assert_eq!(ctx.repos.timers.find_in_window(SHOP, 100).await.len(), 2);
        assert_eq!(ctx.repos.timers.find_in_window(SHOP, 200).await.len(), 2);
        assert_eq!(ctx.repos.timers.find_in_window(SHOP, 99).await.len(), 0);
    }

    #[tokio::test]
    async fn counters_increment_atomically() {
        let ctx = HurryContext::create_inmemory();
        let timer = Timer::new(SHOP, 100, 200, 50);
        assert!(ctx.repos.timers.insert(&timer).await.is_ok());

        assert!(ctx.repos.timers.increment_views(&timer.id).await.is_ok());
        assert!(ctx.repos.timers.increment_views(&timer.id).await.is_ok());
        assert!(ctx.repos.timers.increment_clicks(&timer.id).await.is_ok());

        let res = ctx.repos.timers.find(&timer.id).await.unwrap();
        assert_eq!(res.views, 2);
        assert_eq!(res.clicks, 1);
    }

    #[tokio::test]
    async fn click_on_unknown_timer_is_not_an_error() {
        let ctx = HurryContext::create_inmemory();
        let timer = Timer::new(SHOP, 100, 200, 50);
        // never inserted
        assert!(ctx.repos.timers.increment_clicks(&timer.id).await.is_ok());
    }
}
