//! In-memory store fakes for behavior tests.
//!
//! These mirror the semantics of the `PostgreSQL` stores: server-assigned
//! IDs and creation timestamps, owner stamps untouched by updates, newest
//! first listing. A failing variant simulates an unreachable backend for the
//! silent-failure tests.

#![allow(clippy::unwrap_used)]

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};

use pressroom_core::{ClientId, Email, PrintJobId, UserId};

use super::{ClientStore, PrintJobStore, StoreError, UserStore};
use crate::models::{
    Client, ClientUpdate, NewClient, NewPrintJob, NewUser, PrintJob, PrintJobUpdate, User,
};

/// Fixed base instant for fake timestamps; each insert advances by a second
/// so creation order is always distinguishable.
fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
}

fn backend_down() -> StoreError {
    StoreError::Database(sqlx::Error::PoolClosed)
}

// =============================================================================
// Clients
// =============================================================================

struct ClientsInner {
    next_id: i32,
    tick: i64,
    clients: Vec<Client>,
}

/// In-memory [`ClientStore`].
pub struct MemoryClientStore {
    inner: Mutex<ClientsInner>,
    fail: bool,
}

impl Default for MemoryClientStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryClientStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(ClientsInner {
                next_id: 1,
                tick: 0,
                clients: Vec::new(),
            }),
            fail: false,
        }
    }

    /// A store whose every operation fails, as if the backend were down.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    /// Insert a client directly, bypassing the trait (test seeding).
    pub fn seed(&self, name: &str, email: &str, phone: &str, company: &str, owner: UserId) -> Client {
        let mut inner = self.inner.lock().unwrap();
        let created_at = base_time() + Duration::seconds(inner.tick);
        let client = Client {
            id: ClientId::new(inner.next_id),
            name: name.to_string(),
            email: Email::parse(email).unwrap(),
            phone: pressroom_core::Phone::parse(phone).unwrap(),
            company: company.to_string(),
            created_by: owner,
            created_at,
            updated_at: created_at,
        };
        inner.next_id += 1;
        inner.tick += 1;
        inner.clients.push(client.clone());
        client
    }

    /// Current contents, unordered.
    pub fn snapshot(&self) -> Vec<Client> {
        self.inner.lock().unwrap().clients.clone()
    }
}

#[async_trait]
impl ClientStore for MemoryClientStore {
    async fn list(&self) -> Result<Vec<Client>, StoreError> {
        if self.fail {
            return Err(backend_down());
        }
        let inner = self.inner.lock().unwrap();
        let mut clients = inner.clients.clone();
        clients.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(clients)
    }

    async fn get(&self, id: ClientId) -> Result<Option<Client>, StoreError> {
        if self.fail {
            return Err(backend_down());
        }
        let inner = self.inner.lock().unwrap();
        Ok(inner.clients.iter().find(|c| c.id == id).cloned())
    }

    async fn create(&self, new: NewClient) -> Result<Client, StoreError> {
        if self.fail {
            return Err(backend_down());
        }
        let mut inner = self.inner.lock().unwrap();
        let created_at = base_time() + Duration::seconds(inner.tick);
        let client = Client {
            id: ClientId::new(inner.next_id),
            name: new.name,
            email: new.email,
            phone: new.phone,
            company: new.company,
            created_by: new.created_by,
            created_at,
            updated_at: created_at,
        };
        inner.next_id += 1;
        inner.tick += 1;
        inner.clients.push(client.clone());
        Ok(client)
    }

    async fn update(&self, id: ClientId, update: ClientUpdate) -> Result<Client, StoreError> {
        if self.fail {
            return Err(backend_down());
        }
        let mut inner = self.inner.lock().unwrap();
        let client = inner
            .clients
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(StoreError::NotFound)?;
        // ID, owner, and creation time survive the update untouched.
        client.name = update.name;
        client.email = update.email;
        client.phone = update.phone;
        client.company = update.company;
        client.updated_at = update.updated_at;
        Ok(client.clone())
    }

    async fn delete(&self, id: ClientId) -> Result<(), StoreError> {
        if self.fail {
            return Err(backend_down());
        }
        let mut inner = self.inner.lock().unwrap();
        let before = inner.clients.len();
        inner.clients.retain(|c| c.id != id);
        if inner.clients.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}

// =============================================================================
// Print jobs
// =============================================================================

struct JobsInner {
    next_id: i32,
    tick: i64,
    jobs: Vec<PrintJob>,
}

/// In-memory [`PrintJobStore`].
pub struct MemoryPrintJobStore {
    inner: Mutex<JobsInner>,
    fail: bool,
}

impl Default for MemoryPrintJobStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryPrintJobStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(JobsInner {
                next_id: 1,
                tick: 0,
                jobs: Vec::new(),
            }),
            fail: false,
        }
    }

    /// A store whose every operation fails, as if the backend were down.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    /// Current contents, unordered.
    pub fn snapshot(&self) -> Vec<PrintJob> {
        self.inner.lock().unwrap().jobs.clone()
    }
}

#[async_trait]
impl PrintJobStore for MemoryPrintJobStore {
    async fn list(&self) -> Result<Vec<PrintJob>, StoreError> {
        if self.fail {
            return Err(backend_down());
        }
        let inner = self.inner.lock().unwrap();
        let mut jobs = inner.jobs.clone();
        jobs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(jobs)
    }

    async fn get(&self, id: PrintJobId) -> Result<Option<PrintJob>, StoreError> {
        if self.fail {
            return Err(backend_down());
        }
        let inner = self.inner.lock().unwrap();
        Ok(inner.jobs.iter().find(|j| j.id == id).cloned())
    }

    async fn create(&self, new: NewPrintJob) -> Result<PrintJob, StoreError> {
        if self.fail {
            return Err(backend_down());
        }
        let mut inner = self.inner.lock().unwrap();
        let created_at = base_time() + Duration::seconds(inner.tick);
        let job = PrintJob {
            id: PrintJobId::new(inner.next_id),
            title: new.title,
            client_id: new.client_id,
            status: new.status,
            quantity: new.quantity,
            due_date: new.due_date,
            created_by: new.created_by,
            created_at,
            updated_at: created_at,
        };
        inner.next_id += 1;
        inner.tick += 1;
        inner.jobs.push(job.clone());
        Ok(job)
    }

    async fn update(
        &self,
        id: PrintJobId,
        update: PrintJobUpdate,
    ) -> Result<PrintJob, StoreError> {
        if self.fail {
            return Err(backend_down());
        }
        let mut inner = self.inner.lock().unwrap();
        let job = inner
            .jobs
            .iter_mut()
            .find(|j| j.id == id)
            .ok_or(StoreError::NotFound)?;
        job.title = update.title;
        job.client_id = update.client_id;
        job.status = update.status;
        job.quantity = update.quantity;
        job.due_date = update.due_date;
        job.updated_at = update.updated_at;
        Ok(job.clone())
    }

    async fn delete(&self, id: PrintJobId) -> Result<(), StoreError> {
        if self.fail {
            return Err(backend_down());
        }
        let mut inner = self.inner.lock().unwrap();
        let before = inner.jobs.len();
        inner.jobs.retain(|j| j.id != id);
        if inner.jobs.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}

// =============================================================================
// Users
// =============================================================================

/// In-memory [`UserStore`] seeded with fixed users.
pub struct MemoryUserStore {
    inner: Mutex<Vec<User>>,
}

impl Default for MemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Vec::new()),
        }
    }

    /// Seed a user and return it.
    pub fn seed(&self, id: i32, email: &str, name: &str) -> User {
        let user = User {
            id: UserId::new(id),
            email: Email::parse(email).unwrap(),
            name: name.to_string(),
            created_at: base_time(),
        };
        self.inner.lock().unwrap().push(user.clone());
        user
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, StoreError> {
        let users = self.inner.lock().unwrap();
        Ok(users.iter().find(|u| &u.email == email).cloned())
    }

    async fn create(&self, new: NewUser) -> Result<User, StoreError> {
        let mut users = self.inner.lock().unwrap();
        let next_id = i32::try_from(users.len()).unwrap() + 1;
        let user = User {
            id: UserId::new(next_id),
            email: new.email,
            name: new.name,
            created_at: base_time(),
        };
        users.push(user.clone());
        Ok(user)
    }
}
