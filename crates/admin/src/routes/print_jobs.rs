//! Print job management.
//!
//! Same shape as the client routes: modal state in the query string, store
//! failures logged and swallowed. The form additionally carries a client
//! selector, a status selector, a quantity, and an optional due date.

use askama::Template;
use axum::{
    Form, Router,
    extract::{Path, Query, State},
    response::{Html, Redirect},
    routing::{get, post},
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;

use pressroom_core::{ClientId, PrintJobId};

use crate::error::AppError;
use crate::filters;
use crate::middleware::RequireAuth;
use crate::models::{Client, CurrentUser, NewPrintJob, PrintJob, PrintJobStatus, PrintJobUpdate};
use crate::nav::{self, NavItemView};
use crate::state::AppState;

const STATUSES: [PrintJobStatus; 3] = [
    PrintJobStatus::Pending,
    PrintJobStatus::InProgress,
    PrintJobStatus::Completed,
];

#[derive(Template)]
#[template(path = "print_jobs/index.html")]
struct PrintJobsTemplate {
    user: CurrentUser,
    nav: Vec<NavItemView>,
    jobs: Vec<JobRowView>,
    modal: Option<JobFormView>,
    confirm: Option<ConfirmDeleteView>,
}

struct JobRowView {
    id: PrintJobId,
    title: String,
    client_name: String,
    status: &'static str,
    quantity: i32,
    due_date: String,
    created_at: String,
}

impl JobRowView {
    fn build(job: &PrintJob, clients: &[Client]) -> Self {
        let client_name = clients
            .iter()
            .find(|client| client.id == job.client_id)
            .map_or_else(|| "Unknown".to_string(), |client| client.name.clone());
        Self {
            id: job.id,
            title: job.title.clone(),
            client_name,
            status: job.status.label(),
            quantity: job.quantity,
            due_date: job
                .due_date
                .map_or_else(|| "-".to_string(), |date| date.format("%Y-%m-%d").to_string()),
            created_at: job.created_at.format("%Y-%m-%d").to_string(),
        }
    }
}

struct JobFormView {
    heading: &'static str,
    action: String,
    title: String,
    quantity: String,
    due_date: String,
    clients: Vec<ClientOptionView>,
    statuses: Vec<StatusOptionView>,
    submit_label: &'static str,
}

struct ClientOptionView {
    id: ClientId,
    name: String,
    selected: bool,
}

struct StatusOptionView {
    value: &'static str,
    label: &'static str,
    selected: bool,
}

impl JobFormView {
    fn empty(clients: &[Client]) -> Self {
        Self {
            heading: "Add Print Job",
            action: "/print-jobs".to_string(),
            title: String::new(),
            quantity: String::new(),
            due_date: String::new(),
            clients: client_options(clients, None),
            statuses: status_options(PrintJobStatus::Pending),
            submit_label: "Create",
        }
    }

    fn edit(job: &PrintJob, clients: &[Client]) -> Self {
        Self {
            heading: "Edit Print Job",
            action: format!("/print-jobs/{}", job.id),
            title: job.title.clone(),
            quantity: job.quantity.to_string(),
            due_date: job
                .due_date
                .map_or_else(String::new, |date| date.format("%Y-%m-%d").to_string()),
            clients: client_options(clients, Some(job.client_id)),
            statuses: status_options(job.status),
            submit_label: "Save",
        }
    }
}

fn client_options(clients: &[Client], selected: Option<ClientId>) -> Vec<ClientOptionView> {
    clients
        .iter()
        .map(|client| ClientOptionView {
            id: client.id,
            name: client.name.clone(),
            selected: selected == Some(client.id),
        })
        .collect()
}

fn status_options(selected: PrintJobStatus) -> Vec<StatusOptionView> {
    STATUSES
        .iter()
        .map(|&status| StatusOptionView {
            value: status.as_str(),
            label: status.label(),
            selected: status == selected,
        })
        .collect()
}

struct ConfirmDeleteView {
    id: PrintJobId,
    title: String,
}

#[derive(Debug, Deserialize)]
struct ListQuery {
    modal: Option<String>,
    id: Option<i32>,
    confirm_delete: Option<i32>,
}

#[derive(Debug, Deserialize)]
struct JobFormData {
    title: String,
    client_id: i32,
    status: String,
    quantity: i32,
    due_date: Option<String>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/print-jobs", get(index).post(create))
        .route("/print-jobs/{id}", post(update))
        .route("/print-jobs/{id}/delete", post(delete))
}

/// Render the print job list, with modal state taken from the query string.
///
/// GET /print-jobs
async fn index(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Query(query): Query<ListQuery>,
) -> Result<Html<String>, AppError> {
    let jobs = state.print_jobs().list().await.unwrap_or_else(|err| {
        tracing::error!(error = %err, "Failed to load print jobs");
        Vec::new()
    });
    // Client names for the table and the form's selector.
    let clients = state.clients().list().await.unwrap_or_else(|err| {
        tracing::error!(error = %err, "Failed to load clients for print jobs");
        Vec::new()
    });

    let modal = match query.modal.as_deref() {
        Some("new") => Some(JobFormView::empty(&clients)),
        Some("edit") => query.id.and_then(|id| {
            let id = PrintJobId::new(id);
            jobs.iter()
                .find(|job| job.id == id)
                .map(|job| JobFormView::edit(job, &clients))
        }),
        _ => None,
    };

    let confirm = query.confirm_delete.and_then(|id| {
        let id = PrintJobId::new(id);
        jobs.iter()
            .find(|job| job.id == id)
            .map(|job| ConfirmDeleteView {
                id: job.id,
                title: job.title.clone(),
            })
    });

    let template = PrintJobsTemplate {
        user,
        nav: nav::items_for("/print-jobs"),
        jobs: jobs.iter().map(|job| JobRowView::build(job, &clients)).collect(),
        modal,
        confirm,
    };
    Ok(Html(template.render()?))
}

/// Create a print job, stamped with the current user as owner.
///
/// POST /print-jobs
async fn create(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Form(form): Form<JobFormData>,
) -> Redirect {
    let Some((status, due_date)) = parse_job_fields(&form) else {
        return Redirect::to("/print-jobs?modal=new");
    };

    let new = NewPrintJob {
        title: form.title,
        client_id: ClientId::new(form.client_id),
        status,
        quantity: form.quantity,
        due_date,
        created_by: user.id,
    };
    if let Err(err) = state.print_jobs().create(new).await {
        tracing::error!(error = %err, "Failed to create print job");
        return Redirect::to("/print-jobs?modal=new");
    }

    Redirect::to("/print-jobs")
}

/// Update a print job. The owner stamp is not part of the payload.
///
/// POST /print-jobs/{id}
async fn update(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<i32>,
    Form(form): Form<JobFormData>,
) -> Redirect {
    let back = format!("/print-jobs?modal=edit&id={id}");
    let Some((status, due_date)) = parse_job_fields(&form) else {
        return Redirect::to(&back);
    };

    let update = PrintJobUpdate {
        title: form.title,
        client_id: ClientId::new(form.client_id),
        status,
        quantity: form.quantity,
        due_date,
        updated_at: Utc::now(),
    };
    match state.print_jobs().update(PrintJobId::new(id), update).await {
        Ok(_) => Redirect::to("/print-jobs"),
        Err(err) => {
            tracing::error!(error = %err, print_job_id = id, "Failed to update print job");
            Redirect::to(&back)
        }
    }
}

/// Delete a print job.
///
/// POST /print-jobs/{id}/delete
async fn delete(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<i32>,
) -> Redirect {
    if let Err(err) = state.print_jobs().delete(PrintJobId::new(id)).await {
        tracing::error!(error = %err, print_job_id = id, "Failed to delete print job");
    }
    Redirect::to("/print-jobs")
}

/// Parse the status and due date form fields, logging any rejection.
fn parse_job_fields(form: &JobFormData) -> Option<(PrintJobStatus, Option<NaiveDate>)> {
    let status = match form.status.parse::<PrintJobStatus>() {
        Ok(status) => status,
        Err(err) => {
            tracing::error!(error = %err, "Rejected print job status");
            return None;
        }
    };

    // An empty date input submits as an empty string.
    let due_date = match form.due_date.as_deref().filter(|raw| !raw.is_empty()) {
        None => None,
        Some(raw) => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(err) => {
                tracing::error!(error = %err, "Rejected print job due date");
                return None;
            }
        },
    };

    Some((status, due_date))
}
