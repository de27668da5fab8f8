use super::see_other;
use crate::helper::form_helpers::{field, parse_form};
use crate::ui::navigation::is_menu_group;
use crate::AppState;
use actix_web::{web, HttpResponse};

pub fn config_ui(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/ui")
            .route("/sidebar", web::post().to(toggle_sidebar))
            .route("/menu/{name}", web::post().to(toggle_menu)),
    );
}

/// Only same-site absolute paths are followed; anything else goes home.
fn return_location(return_to: &str) -> &str {
    if return_to.starts_with('/') && !return_to.starts_with("//") {
        return_to
    } else {
        "/"
    }
}

async fn toggle_sidebar(app_state: web::Data<AppState>, form: web::Bytes) -> HttpResponse {
    let fields = match parse_form(&form) {
        Ok(fields) => fields,
        Err(resp) => return resp,
    };
    app_state.ui.update(|state| state.toggle_sidebar());
    see_other(return_location(&field(&fields, "return_to")))
}

async fn toggle_menu(
    app_state: web::Data<AppState>,
    name: web::Path<String>,
    form: web::Bytes,
) -> HttpResponse {
    let fields = match parse_form(&form) {
        Ok(fields) => fields,
        Err(resp) => return resp,
    };
    let name = name.into_inner();
    if is_menu_group(&name) {
        app_state.ui.update(|state| state.toggle_menu_expanded(&name));
    } else {
        log::warn!("Ignoring toggle for unknown menu group '{}'", name);
    }
    see_other(return_location(&field(&fields, "return_to")))
}
