//! Client management: list page with a modal form and delete confirmation.
//!
//! All modal state lives in the URL query string, so each page is a pure
//! function of the request:
//!
//! - `/clients`                   list, modal closed
//! - `/clients?modal=new`         create form open
//! - `/clients?modal=edit&id=7`   edit form open, prefilled from client 7
//! - `/clients?confirm_delete=7`  delete confirmation open for client 7
//!
//! Store failures are logged and swallowed: the list renders empty, and a
//! failed submission lands back on the page it came from with the modal
//! still open. Edit and delete targets are resolved against the fetched
//! list; an unknown ID renders the page with the modal closed.

use askama::Template;
use axum::{
    Form, Router,
    extract::{Path, Query, State},
    response::{Html, Redirect},
    routing::{get, post},
};
use chrono::Utc;
use serde::Deserialize;

use pressroom_core::{ClientId, Email, Phone};

use crate::error::AppError;
use crate::filters;
use crate::middleware::RequireAuth;
use crate::models::{Client, ClientUpdate, CurrentUser, NewClient};
use crate::nav::{self, NavItemView};
use crate::state::AppState;

#[derive(Template)]
#[template(path = "clients/index.html")]
struct ClientsTemplate {
    user: CurrentUser,
    nav: Vec<NavItemView>,
    clients: Vec<ClientRowView>,
    modal: Option<ClientFormView>,
    confirm: Option<ConfirmDeleteView>,
}

struct ClientRowView {
    id: ClientId,
    name: String,
    email: String,
    phone: String,
    company: String,
    created_at: String,
}

impl From<&Client> for ClientRowView {
    fn from(client: &Client) -> Self {
        Self {
            id: client.id,
            name: client.name.clone(),
            email: client.email.to_string(),
            phone: client.phone.to_string(),
            company: client.company.clone(),
            created_at: client.created_at.format("%Y-%m-%d").to_string(),
        }
    }
}

struct ClientFormView {
    heading: &'static str,
    action: String,
    name: String,
    email: String,
    phone: String,
    company: String,
    submit_label: &'static str,
}

impl ClientFormView {
    fn empty() -> Self {
        Self {
            heading: "Add Client",
            action: "/clients".to_string(),
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            company: String::new(),
            submit_label: "Create",
        }
    }

    fn edit(client: &Client) -> Self {
        Self {
            heading: "Edit Client",
            action: format!("/clients/{}", client.id),
            name: client.name.clone(),
            email: client.email.to_string(),
            phone: client.phone.to_string(),
            company: client.company.clone(),
            submit_label: "Save",
        }
    }
}

struct ConfirmDeleteView {
    id: ClientId,
    name: String,
}

#[derive(Debug, Deserialize)]
struct ListQuery {
    modal: Option<String>,
    id: Option<i32>,
    confirm_delete: Option<i32>,
}

#[derive(Debug, Deserialize)]
struct ClientFormData {
    name: String,
    email: String,
    phone: String,
    company: String,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/clients", get(index).post(create))
        .route("/clients/{id}", post(update))
        .route("/clients/{id}/delete", post(delete))
}

/// Render the client list, with modal state taken from the query string.
///
/// GET /clients
async fn index(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Query(query): Query<ListQuery>,
) -> Result<Html<String>, AppError> {
    let clients = state.clients().list().await.unwrap_or_else(|err| {
        tracing::error!(error = %err, "Failed to load clients");
        Vec::new()
    });

    let modal = match query.modal.as_deref() {
        Some("new") => Some(ClientFormView::empty()),
        Some("edit") => query.id.and_then(|id| {
            let id = ClientId::new(id);
            clients
                .iter()
                .find(|client| client.id == id)
                .map(ClientFormView::edit)
        }),
        _ => None,
    };

    let confirm = query.confirm_delete.and_then(|id| {
        let id = ClientId::new(id);
        clients
            .iter()
            .find(|client| client.id == id)
            .map(|client| ConfirmDeleteView {
                id: client.id,
                name: client.name.clone(),
            })
    });

    let template = ClientsTemplate {
        user,
        nav: nav::items_for("/clients"),
        clients: clients.iter().map(ClientRowView::from).collect(),
        modal,
        confirm,
    };
    Ok(Html(template.render()?))
}

/// Create a client, stamped with the current user as owner.
///
/// POST /clients
async fn create(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Form(form): Form<ClientFormData>,
) -> Redirect {
    let Some((email, phone)) = parse_contact(&form) else {
        return Redirect::to("/clients?modal=new");
    };

    let new = NewClient {
        name: form.name,
        email,
        phone,
        company: form.company,
        created_by: user.id,
    };
    if let Err(err) = state.clients().create(new).await {
        tracing::error!(error = %err, "Failed to create client");
        return Redirect::to("/clients?modal=new");
    }

    Redirect::to("/clients")
}

/// Update a client. The owner stamp is not part of the payload.
///
/// POST /clients/{id}
async fn update(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<i32>,
    Form(form): Form<ClientFormData>,
) -> Redirect {
    let back = format!("/clients?modal=edit&id={id}");
    let Some((email, phone)) = parse_contact(&form) else {
        return Redirect::to(&back);
    };

    let update = ClientUpdate {
        name: form.name,
        email,
        phone,
        company: form.company,
        updated_at: Utc::now(),
    };
    match state.clients().update(ClientId::new(id), update).await {
        Ok(_) => Redirect::to("/clients"),
        Err(err) => {
            tracing::error!(error = %err, client_id = id, "Failed to update client");
            Redirect::to(&back)
        }
    }
}

/// Delete a client.
///
/// POST /clients/{id}/delete
async fn delete(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(id): Path<i32>,
) -> Redirect {
    if let Err(err) = state.clients().delete(ClientId::new(id)).await {
        tracing::error!(error = %err, client_id = id, "Failed to delete client");
    }
    Redirect::to("/clients")
}

/// Parse the email and phone form fields, logging any rejection.
fn parse_contact(form: &ClientFormData) -> Option<(Email, Phone)> {
    let email = match Email::parse(form.email.trim()) {
        Ok(email) => email,
        Err(err) => {
            tracing::error!(error = %err, "Rejected client email");
            return None;
        }
    };
    let phone = match Phone::parse(form.phone.trim()) {
        Ok(phone) => phone,
        Err(err) => {
            tracing::error!(error = %err, "Rejected client phone");
            return None;
        }
    };
    Some((email, phone))
}
