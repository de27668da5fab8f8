use crate::pages::{CategoriesPage, PostsPage, RolesPage, SeriesPage, UsersPage};
use crate::ui::navigation::build_menu;
use crate::AppState;
use actix_web::{web, HttpRequest, HttpResponse};
use tera::{Context, Tera};

pub mod dashboard;
pub mod resources;
pub mod ui_state;

/// Every browser-facing route except `/static`.
pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(dashboard::config_dashboard)
        .configure(resources::config_resource::<PostsPage>)
        .configure(resources::config_resource::<CategoriesPage>)
        .configure(resources::config_resource::<SeriesPage>)
        .configure(resources::config_resource::<UsersPage>)
        .configure(resources::config_resource::<RolesPage>)
        .configure(ui_state::config_ui);
}

/// Context shared by every page rendered inside the layout: menu, sidebar,
/// header user and the URL the shell toggles should return to.
pub(crate) fn shell_context(req: &HttpRequest, app_state: &AppState) -> Context {
    let ui = app_state.ui.snapshot();
    let return_to = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| req.path().to_string());

    let mut ctx = Context::new();
    ctx.insert("menu", &build_menu(req.path(), &ui));
    ctx.insert("sidebar_open", &ui.sidebar_open);
    ctx.insert("current_user", &ui.current_user);
    ctx.insert("user_initial", &ui.user_initial());
    ctx.insert("return_to", &return_to);
    ctx
}

pub(crate) fn render_page(tera: &Tera, template: &str, ctx: &Context) -> HttpResponse {
    match tera.render(template, ctx) {
        Ok(rendered) => HttpResponse::Ok().content_type("text/html; charset=utf-8").body(rendered),
        Err(err) => {
            log::error!("Template rendering error in {}: {:?}", template, err);
            HttpResponse::InternalServerError().body("Error rendering page.")
        }
    }
}

pub(crate) fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther().append_header(("location", location)).finish()
}
