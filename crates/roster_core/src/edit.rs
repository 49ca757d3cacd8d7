use std::sync::Arc;

use shared::domain::CatRecord;

use crate::{
    error::{parse_amount, ValidationError},
    store::{MutationOutcome, PendingEdit, RosterStore},
};

#[derive(Clone)]
pub struct SalaryEditDialog {
    store: Arc<RosterStore>,
}

impl SalaryEditDialog {
    pub fn new(store: Arc<RosterStore>) -> Self {
        Self { store }
    }

    pub async fn begin_edit(&self, record: &CatRecord) {
        self.store
            .set_pending_edit(PendingEdit {
                name: record.name.clone(),
                value: record.salary.to_string(),
            })
            .await;
    }

    pub async fn update_value(&self, text: impl Into<String>) -> bool {
        self.store.update_pending_value(text.into()).await
    }

    pub async fn cancel(&self) {
        self.store.clear_pending_edit().await;
    }

    pub async fn current(&self) -> Option<PendingEdit> {
        self.store.pending_edit().await
    }

    pub async fn submit(&self) -> Result<MutationOutcome, ValidationError> {
        let edit = self
            .store
            .pending_edit()
            .await
            .ok_or(ValidationError::NoPendingEdit)?;
        let salary = parse_amount::<u64>("salary", &edit.value)?;
        Ok(self.store.commit_salary_edit(&edit.name, salary).await)
    }
}

#[cfg(test)]
#[path = "tests/edit_tests.rs"]
mod tests;
