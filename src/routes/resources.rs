use super::{render_page, see_other, shell_context};
use crate::helper::api_client::ApiClient;
use crate::helper::form_helpers::{field, parse_form};
use crate::models::{Record, RecordId};
use crate::pages::{confirm_delete_body, ResourcePage};
use crate::services::{Resource, ResourceService};
use crate::ui::{Button, ButtonVariant, Input, Modal, ModalSubmit, Table};
use crate::workflow::{ModalState, Workflow};
use crate::AppState;
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use futures_util::future;
use serde::Deserialize;
use tera::Tera;

type PageWorkflow<P> = Workflow<<P as ResourcePage>::Record, <P as ResourcePage>::Form>;

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub q: Option<String>,
    pub modal: Option<String>,
    pub edit: Option<String>,
    pub delete: Option<String>,
}

/// List, create, update and delete routes for one resource page.
pub fn config_resource<P: ResourcePage>(cfg: &mut web::ServiceConfig) {
    cfg.route(P::ROUTE, web::get().to(show_page::<P>))
        .route(P::ROUTE, web::post().to(create_action::<P>))
        .route(&format!("{}/{{id}}", P::ROUTE), web::post().to(update_action::<P>))
        .route(&format!("{}/{{id}}/delete", P::ROUTE), web::post().to(delete_action::<P>));
}

fn service<P: ResourcePage>(client: &ApiClient) -> ResourceService<P::Record> {
    ResourceService::new(client.clone())
}

fn parse_id(raw: Option<&str>) -> Option<RecordId> {
    raw.and_then(|value| value.parse().ok())
}

async fn show_page<P: ResourcePage>(
    req: HttpRequest,
    tera: web::Data<Tera>,
    client: web::Data<ApiClient>,
    app_state: web::Data<AppState>,
    query: web::Query<PageQuery>,
) -> impl Responder {
    let mut workflow = PageWorkflow::<P>::new(P::Record::PATH);
    workflow.set_search(query.q.clone().unwrap_or_default());
    let lookups = load::<P>(&client, &mut workflow).await;

    if query.modal.as_deref() == Some("create") {
        workflow.open_create();
    } else if let Some(id) = parse_id(query.edit.as_deref()) {
        if !workflow.open_edit(id, P::form_from_record) {
            log::warn!("No {} with id {} to edit", P::Record::PATH, id);
        }
    } else if let Some(id) = parse_id(query.delete.as_deref()) {
        if !workflow.open_delete(id) {
            log::warn!("No {} with id {} to delete", P::Record::PATH, id);
        }
    }

    render_resource_page::<P>(&req, &tera, &app_state, &workflow, &lookups)
}

async fn create_action<P: ResourcePage>(
    req: HttpRequest,
    tera: web::Data<Tera>,
    client: web::Data<ApiClient>,
    app_state: web::Data<AppState>,
    form: web::Bytes,
) -> HttpResponse {
    let fields = match parse_form(&form) {
        Ok(fields) => fields,
        Err(resp) => return resp,
    };
    let submitted = P::form_from_fields(&fields);

    let mut workflow = PageWorkflow::<P>::new(P::Record::PATH);
    workflow.reopen(None, submitted.clone());
    if workflow.begin_submit() {
        let outcome = service::<P>(&client).create(&P::create_payload(&submitted)).await;
        if workflow.finish_submit(outcome) {
            return see_other(P::ROUTE);
        }
    }

    let lookups = load::<P>(&client, &mut workflow).await;
    render_resource_page::<P>(&req, &tera, &app_state, &workflow, &lookups)
}

async fn update_action<P: ResourcePage>(
    req: HttpRequest,
    tera: web::Data<Tera>,
    client: web::Data<ApiClient>,
    app_state: web::Data<AppState>,
    path: web::Path<RecordId>,
    form: web::Bytes,
) -> HttpResponse {
    let id = path.into_inner();
    let fields = match parse_form(&form) {
        Ok(fields) => fields,
        Err(resp) => return resp,
    };
    let submitted = P::form_from_fields(&fields);

    let mut workflow = PageWorkflow::<P>::new(P::Record::PATH);
    workflow.reopen(Some(id), submitted.clone());
    if workflow.begin_submit() {
        let outcome = service::<P>(&client).update(id, &P::update_payload(&submitted)).await;
        if workflow.finish_submit(outcome) {
            return see_other(P::ROUTE);
        }
    }

    let lookups = load::<P>(&client, &mut workflow).await;
    render_resource_page::<P>(&req, &tera, &app_state, &workflow, &lookups)
}

async fn delete_action<P: ResourcePage>(
    client: web::Data<ApiClient>,
    path: web::Path<RecordId>,
    form: web::Bytes,
) -> HttpResponse {
    let fields = match parse_form(&form) {
        Ok(fields) => fields,
        Err(resp) => return resp,
    };

    let mut workflow = PageWorkflow::<P>::new(P::Record::PATH);
    workflow.request_delete(path.into_inner());
    if let Some(id) = workflow.confirm_delete(field(&fields, "confirm") == "yes") {
        if let Err(e) = service::<P>(&client).delete(id).await {
            log::error!("Error deleting {} {}: {}", P::Record::PATH, id, e);
        }
    }
    see_other(P::ROUTE)
}

/// Fetches the list and the page's lookups together and settles the workflow's
/// loading phase.
async fn load<P: ResourcePage>(client: &ApiClient, workflow: &mut PageWorkflow<P>) -> P::Lookups {
    let service = service::<P>(client);
    let (lookups, listed) = future::join(P::load_lookups(client), service.list()).await;
    workflow.finish_loading(listed.map(|items| P::prepare(items, &lookups)));
    lookups
}

fn render_modal<P: ResourcePage>(workflow: &PageWorkflow<P>, lookups: &P::Lookups) -> String {
    let loading = workflow.is_submitting();
    match workflow.modal() {
        ModalState::Closed => String::new(),
        ModalState::Creating(form) => {
            let title = format!("Create New {}", P::SINGULAR);
            Modal {
                is_open: true,
                title: &title,
                body: P::form_body(form, lookups, false),
                cancel_href: P::ROUTE,
                submit: Some(ModalSubmit { action: P::ROUTE, label: "Create", variant: ButtonVariant::Primary, loading }),
            }
            .render()
        }
        ModalState::Editing { id, form } => {
            let title = format!("Edit {}", P::SINGULAR);
            let action = format!("{}/{}", P::ROUTE, id);
            Modal {
                is_open: true,
                title: &title,
                body: P::form_body(form, lookups, true),
                cancel_href: P::ROUTE,
                submit: Some(ModalSubmit { action: &action, label: "Update", variant: ButtonVariant::Primary, loading }),
            }
            .render()
        }
        ModalState::ConfirmDelete { id, label } => {
            let title = format!("Delete {}", P::SINGULAR);
            let action = format!("{}/{}/delete", P::ROUTE, id);
            Modal {
                is_open: true,
                title: &title,
                body: confirm_delete_body(P::SINGULAR, label),
                cancel_href: P::ROUTE,
                submit: Some(ModalSubmit { action: &action, label: "Delete", variant: ButtonVariant::Danger, loading }),
            }
            .render()
        }
    }
}

fn render_resource_page<P: ResourcePage>(
    req: &HttpRequest,
    tera: &Tera,
    app_state: &AppState,
    workflow: &PageWorkflow<P>,
    lookups: &P::Lookups,
) -> HttpResponse {
    let table = Table::new(P::columns()).filter_by(|record: &P::Record| record.search_fields().join(" "));
    let rows = workflow.visible();

    let create_label = format!("Create New {}", P::SINGULAR);
    let create_href = format!("{}?modal=create", P::ROUTE);
    let search = Input::new("q", workflow.search())
        .placeholder(P::SEARCH_PLACEHOLDER)
        .input_type("search")
        .render();

    let mut ctx = shell_context(req, app_state);
    ctx.insert("page_title", P::TITLE);
    ctx.insert("route", P::ROUTE);
    ctx.insert("create_button", &Button::new(&create_label).link(&create_href).render());
    ctx.insert("search_input", &search);
    ctx.insert("table", &table.render(&rows, workflow.is_loading()));
    ctx.insert("modal", &render_modal::<P>(workflow, lookups));
    render_page(tera, "resource_page.html", &ctx)
}
