mod create_timer;
mod delete_timer;
mod get_timer;
mod get_timers;
mod toggle_timer;
mod update_timer;

use actix_web::web;
use create_timer::create_timer_controller;
use delete_timer::delete_timer_controller;
use get_timer::get_timer_controller;
use get_timers::get_timers_controller;
use toggle_timer::toggle_timer_controller;
use update_timer::update_timer_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/timers", web::post().to(create_timer_controller));
    cfg.route("/timers", web::get().to(get_timers_controller));
    cfg.route("/timers/{timer_id}", web::get().to(get_timer_controller));
    cfg.route("/timers/{timer_id}", web::put().to(update_timer_controller));
    cfg.route(
        "/timers/{timer_id}",
        web::delete().to(delete_timer_controller),
    );
    cfg.route(
        "/timers/{timer_id}/toggle",
        web::patch().to(toggle_timer_controller),
    );
}
