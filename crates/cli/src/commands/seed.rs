//! Seed the database with demo data.
//!
//! Creates a demo user, a handful of clients, and a few print jobs so a
//! fresh local database has something to show. Safe to run once against an
//! empty database; re-running fails on the duplicate user email.

use chrono::NaiveDate;

use pressroom_core::{Email, Phone};

use pressroom_admin::db::{self, ClientStore, PgClientStore, PgPrintJobStore, PgUserStore, PrintJobStore, UserStore};
use pressroom_admin::models::{NewClient, NewPrintJob, NewUser, PrintJobStatus};

use super::{CommandError, database_url};

const DEMO_USER_EMAIL: &str = "demo@pressroom.local";

const DEMO_CLIENTS: &[(&str, &str, &str, &str)] = &[
    ("Maya Chen", "maya@riverside.cafe", "555-0183", "Riverside Cafe"),
    ("Tom Okafor", "tom@okaforlaw.com", "555-0147", "Okafor Law"),
    ("Lena Fischer", "lena@nordlicht.events", "555-0129", "Nordlicht Events"),
];

/// Seed demo data.
pub async fn run() -> Result<(), CommandError> {
    dotenvy::dotenv().ok();

    let database_url = database_url()?;

    tracing::info!("Connecting to database...");
    let pool = db::create_pool(&database_url).await?;

    let users = PgUserStore::new(pool.clone());
    let clients = PgClientStore::new(pool.clone());
    let jobs = PgPrintJobStore::new(pool);

    let email = Email::parse(DEMO_USER_EMAIL)?;
    if users.find_by_email(&email).await?.is_some() {
        return Err(CommandError::UserExists(email.to_string()));
    }

    let user = users
        .create(NewUser {
            email,
            name: "Demo User".to_owned(),
        })
        .await?;
    tracing::info!("Created demo user: {}", user.email);

    let mut created = Vec::new();
    for &(name, email, phone, company) in DEMO_CLIENTS {
        let client = clients
            .create(NewClient {
                name: name.to_owned(),
                email: Email::parse(email)?,
                phone: Phone::parse(phone)?,
                company: company.to_owned(),
                created_by: user.id,
            })
            .await?;
        tracing::info!("Created client: {} ({})", client.name, client.company);
        created.push(client);
    }

    let demo_jobs = [
        ("Menu reprint", 0, PrintJobStatus::Pending, 200, Some((2026, 9, 15))),
        ("Letterhead", 1, PrintJobStatus::InProgress, 1000, None),
        ("Festival posters", 2, PrintJobStatus::Completed, 350, Some((2026, 8, 1))),
    ];
    for (title, client_index, status, quantity, due) in demo_jobs {
        let Some(client) = created.get(client_index) else {
            continue;
        };
        let due_date = due.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d));
        let job = jobs
            .create(NewPrintJob {
                title: title.to_owned(),
                client_id: client.id,
                status,
                quantity,
                due_date,
                created_by: user.id,
            })
            .await?;
        tracing::info!("Created print job: {} for {}", job.title, client.name);
    }

    tracing::info!("Seeding complete!");
    Ok(())
}
