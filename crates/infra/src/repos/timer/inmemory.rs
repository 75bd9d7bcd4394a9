use super::ITimerRepo;
use crate::repos::shared::inmemory_repo::*;
use hurry_domain::{Timer, ID};
use std::cmp::Reverse;
use std::sync::Mutex;

pub struct InMemoryTimerRepo {
    timers: Mutex<Vec<Timer>>,
}

impl InMemoryTimerRepo {
    pub fn new() -> Self {
        Self {
            timers: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl ITimerRepo for InMemoryTimerRepo {
    async fn insert(&self, timer: &Timer) -> anyhow::Result<()> {
        insert(timer, &self.timers);
        Ok(())
    }

    async fn save(&self, timer: &Timer) -> anyhow::Result<()> {
        save(timer, &self.timers);
        Ok(())
    }

    async fn find(&self, timer_id: &ID) -> Option<Timer> {
        find(timer_id, &self.timers)
    }

    async fn find_by_shop(&self, shop: &str) -> Vec<Timer> {
        let mut timers = find_by(&self.timers, |timer| timer.shop == shop);
        timers.sort_by_key(|timer| Reverse(timer.created));
        timers
    }

    async fn find_in_window(&self, shop: &str, ts: i64) -> Vec<Timer> {
        let mut timers = find_by(&self.timers, |timer| {
            timer.shop == shop && timer.is_active && timer.start_ts <= ts && timer.end_ts >= ts
        });
        timers.sort_by_key(|timer| Reverse(timer.created));
        timers
    }

    async fn delete(&self, timer_id: &ID) -> Option<Timer> {
        delete(timer_id, &self.timers)
    }

    async fn increment_views(&self, timer_id: &ID) -> anyhow::Result<()> {
        update_by(
            &self.timers,
            |timer| timer.id == *timer_id,
            |timer| timer.views += 1,
        );
        Ok(())
    }

    async fn increment_clicks(&self, timer_id: &ID) -> anyhow::Result<()> {
        update_by(
            &self.timers,
            |timer| timer.id == *timer_id,
            |timer| timer.clicks += 1,
        );
        Ok(())
    }
}
