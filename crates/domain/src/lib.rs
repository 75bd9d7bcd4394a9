mod countdown;
mod shared;
mod shop;
mod timer;

pub use countdown::{TimeLeft, TimeUnit};
pub use shared::entity::{Entity, ID};
pub use shop::Shop;
pub use timer::{
    select_displayable, DisplayOptions, FontSize, TargetProducts, Timer, TimerPosition,
    TimerStatus, UrgencySettings,
};
