use std::sync::Arc;

use shared::domain::{CatName, CatRecord, NewCatRecord};
use tokio::sync::{broadcast, Mutex};
use tracing::{debug, info, warn};

use crate::{
    error::TransportError,
    events::{Notification, RosterEvent, RosterOperation},
    service::RosterService,
};

const EVENT_CHANNEL_CAPACITY: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    Applied,
    Failed,
    /// A newer refresh was issued while this one was in flight.
    Superseded,
    Disposed,
}

impl MutationOutcome {
    pub fn is_applied(self) -> bool {
        self == MutationOutcome::Applied
    }

    fn after_commit(refresh: MutationOutcome) -> MutationOutcome {
        match refresh {
            MutationOutcome::Disposed => MutationOutcome::Disposed,
            _ => MutationOutcome::Applied,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingEdit {
    pub name: CatName,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterView {
    pub cats: Vec<CatRecord>,
    pub is_loading: bool,
    pub is_stale: bool,
    pub revision: u64,
    pub pending_edit: Option<PendingEdit>,
}

struct RosterState {
    snapshot: Vec<CatRecord>,
    is_loading: bool,
    is_stale: bool,
    revision: u64,
    latest_ticket: u64,
    pending_edit: Option<PendingEdit>,
    disposed: bool,
}

pub struct RosterStore {
    service: Arc<dyn RosterService>,
    inner: Mutex<RosterState>,
    events: broadcast::Sender<RosterEvent>,
}

impl RosterStore {
    pub fn new(service: Arc<dyn RosterService>) -> Arc<Self> {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Arc::new(Self {
            service,
            inner: Mutex::new(RosterState {
                snapshot: Vec::new(),
                is_loading: true,
                is_stale: false,
                revision: 0,
                latest_ticket: 0,
                pending_edit: None,
                disposed: false,
            }),
            events,
        })
    }

    pub async fn init(&self) -> MutationOutcome {
        self.refresh().await
    }

    pub async fn dispose(&self) {
        let mut guard = self.inner.lock().await;
        guard.disposed = true;
        guard.pending_edit = None;
        guard.is_loading = false;
        debug!("roster: store disposed");
    }

    pub fn subscribe(&self) -> broadcast::Receiver<RosterEvent> {
        self.events.subscribe()
    }

    pub async fn view(&self) -> RosterView {
        let guard = self.inner.lock().await;
        RosterView {
            cats: guard.snapshot.clone(),
            is_loading: guard.is_loading,
            is_stale: guard.is_stale,
            revision: guard.revision,
            pending_edit: guard.pending_edit.clone(),
        }
    }

    pub async fn snapshot(&self) -> Vec<CatRecord> {
        self.inner.lock().await.snapshot.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.inner.lock().await.is_loading
    }

    pub async fn pending_edit(&self) -> Option<PendingEdit> {
        self.inner.lock().await.pending_edit.clone()
    }

    pub async fn refresh(&self) -> MutationOutcome {
        let ticket = {
            let mut guard = self.inner.lock().await;
            if guard.disposed {
                return MutationOutcome::Disposed;
            }
            guard.latest_ticket += 1;
            guard.is_loading = true;
            guard.latest_ticket
        };

        let result = self.service.list_all().await;

        let mut guard = self.inner.lock().await;
        if guard.disposed {
            return MutationOutcome::Disposed;
        }
        if ticket != guard.latest_ticket {
            debug!(
                ticket,
                latest = guard.latest_ticket,
                "roster: discarding superseded list response"
            );
            return MutationOutcome::Superseded;
        }
        guard.is_loading = false;

        match result {
            Ok(cats) => {
                guard.snapshot = cats;
                guard.is_stale = false;
                guard.revision += 1;
                let revision = guard.revision;
                let count = guard.snapshot.len();
                drop(guard);
                debug!(revision, count, "roster: snapshot replaced");
                let _ = self
                    .events
                    .send(RosterEvent::SnapshotReplaced { revision, count });
                MutationOutcome::Applied
            }
            Err(err) => {
                guard.is_stale = true;
                drop(guard);
                self.report_failure(err);
                MutationOutcome::Failed
            }
        }
    }

    pub async fn add_record(&self, record: NewCatRecord) -> MutationOutcome {
        if self.is_disposed().await {
            return MutationOutcome::Disposed;
        }
        match self.service.create(&record).await {
            Ok(()) => {
                info!(cat = %record.name, breed = %record.breed, "roster: cat created");
                MutationOutcome::after_commit(self.refresh().await)
            }
            Err(err) => {
                self.report_failure(err);
                MutationOutcome::Failed
            }
        }
    }

    pub async fn delete_record(&self, name: &CatName) -> MutationOutcome {
        if self.is_disposed().await {
            return MutationOutcome::Disposed;
        }
        match self.service.remove(name).await {
            Ok(()) => {
                info!(cat = %name, "roster: cat removed");
                MutationOutcome::after_commit(self.refresh().await)
            }
            Err(err) => {
                self.report_failure(err);
                MutationOutcome::Failed
            }
        }
    }

    pub async fn commit_salary_edit(&self, name: &CatName, salary: u64) -> MutationOutcome {
        if self.is_disposed().await {
            return MutationOutcome::Disposed;
        }
        match self.service.update_salary(name, salary).await {
            Ok(()) => {
                info!(cat = %name, salary, "roster: salary updated");
                {
                    let mut guard = self.inner.lock().await;
                    let committed = guard.pending_edit.as_ref().is_some_and(|edit| {
                        &edit.name == name && edit.value.trim().parse::<u64>() == Ok(salary)
                    });
                    if committed {
                        guard.pending_edit = None;
                    }
                }
                MutationOutcome::after_commit(self.refresh().await)
            }
            Err(err) => {
                self.report_failure(err);
                MutationOutcome::Failed
            }
        }
    }

    pub async fn fetch_record(&self, name: &CatName) -> Option<CatRecord> {
        if self.is_disposed().await {
            return None;
        }
        match self.service.fetch_one(name).await {
            Ok(record) => record,
            Err(err) => {
                self.report_failure(err);
                None
            }
        }
    }

    pub(crate) async fn set_pending_edit(&self, edit: PendingEdit) {
        let mut guard = self.inner.lock().await;
        if guard.disposed {
            return;
        }
        if let Some(previous) = guard.pending_edit.replace(edit) {
            debug!(cat = %previous.name, "roster: discarded previous salary edit");
        }
    }

    pub(crate) async fn update_pending_value(&self, value: String) -> bool {
        let mut guard = self.inner.lock().await;
        match guard.pending_edit.as_mut() {
            Some(edit) => {
                edit.value = value;
                true
            }
            None => false,
        }
    }

    pub(crate) async fn clear_pending_edit(&self) -> Option<PendingEdit> {
        self.inner.lock().await.pending_edit.take()
    }

    async fn is_disposed(&self) -> bool {
        self.inner.lock().await.disposed
    }

    fn report_failure(&self, err: TransportError) {
        let operation: RosterOperation = err.operation();
        warn!(operation = %operation, error = %err, "roster: operation failed");
        let _ = self
            .events
            .send(RosterEvent::Notice(Notification::failure(operation, &err)));
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
