//! Dashboard overview: headline counts and recently added clients.

use askama::Template;
use axum::{Router, extract::State, response::Html, routing::get};

use crate::error::AppError;
use crate::filters;
use crate::middleware::RequireAuth;
use crate::models::{CurrentUser, PrintJobStatus};
use crate::nav::{self, NavItemView};
use crate::state::AppState;

/// Number of clients shown in the recent list.
const RECENT_CLIENTS: usize = 5;

#[derive(Template)]
#[template(path = "dashboard.html")]
struct DashboardTemplate {
    user: CurrentUser,
    nav: Vec<NavItemView>,
    metrics: MetricsView,
    recent_clients: Vec<RecentClientView>,
}

struct MetricsView {
    clients: usize,
    jobs: usize,
    jobs_pending: usize,
    jobs_completed: usize,
}

struct RecentClientView {
    name: String,
    company: String,
    created_at: String,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index))
}

/// Render the dashboard.
///
/// GET /
///
/// A store failure degrades the dashboard to zero counts rather than
/// failing the page.
async fn index(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<Html<String>, AppError> {
    let clients = state.clients().list().await.unwrap_or_else(|err| {
        tracing::error!(error = %err, "Failed to load clients for dashboard");
        Vec::new()
    });
    let jobs = state.print_jobs().list().await.unwrap_or_else(|err| {
        tracing::error!(error = %err, "Failed to load print jobs for dashboard");
        Vec::new()
    });

    let metrics = MetricsView {
        clients: clients.len(),
        jobs: jobs.len(),
        jobs_pending: jobs
            .iter()
            .filter(|job| job.status == PrintJobStatus::Pending)
            .count(),
        jobs_completed: jobs
            .iter()
            .filter(|job| job.status == PrintJobStatus::Completed)
            .count(),
    };

    let recent_clients = clients
        .iter()
        .take(RECENT_CLIENTS)
        .map(|client| RecentClientView {
            name: client.name.clone(),
            company: client.company.clone(),
            created_at: client.created_at.format("%Y-%m-%d").to_string(),
        })
        .collect();

    let template = DashboardTemplate {
        user,
        nav: nav::items_for("/"),
        metrics,
        recent_clients,
    };
    Ok(Html(template.render()?))
}
