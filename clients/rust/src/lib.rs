mod base;
mod shop;
mod status;
mod timer;
mod widget;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIErrorVariant, APIResponse};
pub use hurry_api_structs::dtos::*;
pub use hurry_domain::{
    DisplayOptions, FontSize, TargetProducts, TimeLeft, TimerPosition, TimerStatus,
    UrgencySettings, ID,
};
use shop::ShopClient;
use status::StatusClient;
use std::sync::Arc;
use timer::TimerClient;
pub use timer::{CreateTimerInput, UpdateTimerInput};
use widget::WidgetClient;
pub use widget::{server_offset_millis, Countdown, GetActiveTimerInput};

// Domain
pub use hurry_api_structs::dtos::ShopDTO as Shop;
pub use hurry_api_structs::dtos::TimerDTO as Timer;
pub use hurry_api_structs::dtos::WidgetTimerDTO as WidgetTimer;

/// Hurry Server SDK
///
/// The SDK contains methods for interacting with the Hurry server
/// API.
#[derive(Clone)]
pub struct HurrySDK {
    pub shop: ShopClient,
    pub status: StatusClient,
    pub timer: TimerClient,
    pub widget: WidgetClient,
}

impl HurrySDK {
    pub fn new<T: Into<String>>(address: String, api_key: T) -> Self {
        let mut base = BaseClient::new(address);
        base.set_api_key(api_key.into());
        let base = Arc::new(base);
        let shop = ShopClient::new(base.clone());
        let status = StatusClient::new(base.clone());
        let timer = TimerClient::new(base.clone());
        let widget = WidgetClient::new(base);

        Self {
            shop,
            status,
            timer,
            widget,
        }
    }
}
