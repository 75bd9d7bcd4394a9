mod get_active_timer;
mod record_timer_click;

use actix_web::web;
use get_active_timer::get_active_timer_controller;
use record_timer_click::record_timer_click_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // registered before the admin timer routes so that "active" is not
    // captured by the {timer_id} path segment
    cfg.route("/timers/active", web::get().to(get_active_timer_controller));
    cfg.route(
        "/timers/{timer_id}/click",
        web::post().to(record_timer_click_controller),
    );
}
