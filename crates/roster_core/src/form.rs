use shared::domain::{CatName, NewCatRecord};

use crate::{
    error::{parse_amount, require_text, ValidationError},
    store::{MutationOutcome, RosterStore},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewCatField {
    Name,
    Experience,
    Breed,
    Salary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCatForm {
    pub name: String,
    pub experience: String,
    pub breed: String,
    pub salary: String,
}

impl Default for NewCatForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            experience: "0".into(),
            breed: String::new(),
            salary: "0".into(),
        }
    }
}

impl NewCatForm {
    pub fn set(&mut self, field: NewCatField, value: impl Into<String>) {
        let value = value.into();
        match field {
            NewCatField::Name => self.name = value,
            NewCatField::Experience => self.experience = value,
            NewCatField::Breed => self.breed = value,
            NewCatField::Salary => self.salary = value,
        }
    }

    pub fn to_record(&self) -> Result<NewCatRecord, ValidationError> {
        Ok(NewCatRecord {
            name: CatName(require_text("name", &self.name)?),
            experience_years: parse_amount("experience", &self.experience)?,
            breed: require_text("breed", &self.breed)?,
            salary: parse_amount("salary", &self.salary)?,
        })
    }

    pub async fn submit(&mut self, store: &RosterStore) -> Result<MutationOutcome, ValidationError> {
        let record = self.to_record()?;
        *self = Self::default();
        Ok(store.add_record(record).await)
    }
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;
