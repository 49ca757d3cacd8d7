use std::collections::{HashSet, VecDeque};

use async_trait::async_trait;
use shared::domain::{CatName, CatRecord, NewCatRecord};
use tokio::sync::{oneshot, Mutex};

use crate::{error::TransportError, events::RosterOperation, service::RosterService};

pub(crate) type ListResult = Result<Vec<CatRecord>, TransportError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    List,
    Fetch(CatName),
    Create(NewCatRecord),
    Remove(CatName),
    UpdateSalary(CatName, u64),
}

#[derive(Default)]
pub(crate) struct FakeRosterService {
    cats: Mutex<Vec<CatRecord>>,
    failing: Mutex<HashSet<RosterOperation>>,
    list_gates: Mutex<VecDeque<oneshot::Receiver<ListResult>>>,
    calls: Mutex<Vec<Call>>,
}

impl FakeRosterService {
    pub(crate) fn with_cats(cats: Vec<CatRecord>) -> Self {
        Self {
            cats: Mutex::new(cats),
            ..Self::default()
        }
    }

    pub(crate) async fn fail(&self, operation: RosterOperation) {
        self.failing.lock().await.insert(operation);
    }

    pub(crate) async fn recover(&self, operation: RosterOperation) {
        self.failing.lock().await.remove(&operation);
    }

    /// The next `list_all` call waits for the returned sender instead of
    /// answering from the stored roster.
    pub(crate) async fn gate_next_list(&self) -> oneshot::Sender<ListResult> {
        let (tx, rx) = oneshot::channel();
        self.list_gates.lock().await.push_back(rx);
        tx
    }

    pub(crate) async fn calls(&self) -> Vec<Call> {
        self.calls.lock().await.clone()
    }

    pub(crate) async fn salary_updates(&self) -> Vec<(CatName, u64)> {
        self.calls
            .lock()
            .await
            .iter()
            .filter_map(|call| match call {
                Call::UpdateSalary(name, salary) => Some((name.clone(), *salary)),
                _ => None,
            })
            .collect()
    }

    async fn check(&self, operation: RosterOperation) -> Result<(), TransportError> {
        if self.failing.lock().await.contains(&operation) {
            return Err(unavailable(operation));
        }
        Ok(())
    }
}

pub(crate) fn unavailable(operation: RosterOperation) -> TransportError {
    TransportError::Status {
        operation,
        status: 503,
        detail: "service unavailable".into(),
    }
}

pub(crate) fn cat(name: &str, experience_years: u32, breed: &str, salary: u64) -> CatRecord {
    CatRecord {
        name: CatName::from(name),
        experience_years,
        breed: breed.into(),
        salary,
    }
}

pub(crate) fn new_cat(name: &str, experience_years: u32, breed: &str, salary: u64) -> NewCatRecord {
    NewCatRecord {
        name: CatName::from(name),
        experience_years,
        breed: breed.into(),
        salary,
    }
}

#[async_trait]
impl RosterService for FakeRosterService {
    async fn list_all(&self) -> Result<Vec<CatRecord>, TransportError> {
        self.calls.lock().await.push(Call::List);
        let gate = self.list_gates.lock().await.pop_front();
        if let Some(gate) = gate {
            return gate.await.unwrap_or_else(|_| Err(unavailable(RosterOperation::List)));
        }
        self.check(RosterOperation::List).await?;
        Ok(self.cats.lock().await.clone())
    }

    async fn fetch_one(&self, name: &CatName) -> Result<Option<CatRecord>, TransportError> {
        self.calls.lock().await.push(Call::Fetch(name.clone()));
        self.check(RosterOperation::Fetch).await?;
        Ok(self
            .cats
            .lock()
            .await
            .iter()
            .find(|cat| &cat.name == name)
            .cloned())
    }

    async fn create(&self, record: &NewCatRecord) -> Result<(), TransportError> {
        self.calls.lock().await.push(Call::Create(record.clone()));
        self.check(RosterOperation::Create).await?;
        let mut cats = self.cats.lock().await;
        if cats.iter().any(|cat| cat.name == record.name) {
            return Err(TransportError::Status {
                operation: RosterOperation::Create,
                status: 400,
                detail: "Agent with same name already exists!".into(),
            });
        }
        cats.push(record.clone().into());
        Ok(())
    }

    async fn remove(&self, name: &CatName) -> Result<(), TransportError> {
        self.calls.lock().await.push(Call::Remove(name.clone()));
        self.check(RosterOperation::Remove).await?;
        self.cats.lock().await.retain(|cat| &cat.name != name);
        Ok(())
    }

    async fn update_salary(&self, name: &CatName, salary: u64) -> Result<(), TransportError> {
        self.calls
            .lock()
            .await
            .push(Call::UpdateSalary(name.clone(), salary));
        self.check(RosterOperation::UpdateSalary).await?;
        if let Some(cat) = self
            .cats
            .lock()
            .await
            .iter_mut()
            .find(|cat| &cat.name == name)
        {
            cat.salary = salary;
        }
        Ok(())
    }
}
