mod create_shop;
mod get_shop;

use actix_web::web;
use create_shop::create_shop_controller;
use get_shop::get_shop_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/shops", web::post().to(create_shop_controller));
    cfg.route("/shops/me", web::get().to(get_shop_controller));
}
