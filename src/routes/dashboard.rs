use super::{render_page, shell_context};
use crate::helper::api_client::ApiClient;
use crate::pages::dashboard::{fetch_stats, DashboardStats};
use crate::AppState;
use actix_web::{web, HttpRequest, Responder};
use tera::Tera;

pub fn config_dashboard(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(show_dashboard))
        .route("/dashboard", web::get().to(show_dashboard));
}

async fn show_dashboard(
    req: HttpRequest,
    tera: web::Data<Tera>,
    client: web::Data<ApiClient>,
    app_state: web::Data<AppState>,
) -> impl Responder {
    let stats = match fetch_stats(&client).await {
        Ok(stats) => stats,
        Err(e) => {
            log::error!("Error fetching stats: {}", e);
            DashboardStats::default()
        }
    };

    let mut ctx = shell_context(&req, &app_state);
    ctx.insert("page_title", "Dashboard");
    ctx.insert("cards", &stats.cards());
    ctx.insert("total", &stats.total());
    render_page(&tera, "dashboard.html", &ctx)
}
