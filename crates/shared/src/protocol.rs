use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{CatName, CatRecord, NewCatRecord};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatPayload {
    pub catname: String,
    pub experience: u32,
    pub breed: String,
    pub salary: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListCatsResponse {
    #[serde(default)]
    pub cats: Vec<Value>,
}

impl ListCatsResponse {
    // Rows decode one at a time so a single bad entry does not sink the whole list.
    pub fn rows(self) -> Vec<Result<CatPayload, serde_json::Error>> {
        self.cats.into_iter().map(serde_json::from_value).collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SingleCatResponse {
    #[serde(default)]
    pub message: Option<CatPayload>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatNameQuery {
    pub catname: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSalaryQuery {
    pub catname: String,
    pub salary: u64,
}

impl From<CatPayload> for CatRecord {
    fn from(value: CatPayload) -> Self {
        Self {
            name: CatName(value.catname),
            experience_years: value.experience,
            breed: value.breed,
            salary: value.salary,
        }
    }
}

impl From<&CatRecord> for CatPayload {
    fn from(value: &CatRecord) -> Self {
        Self {
            catname: value.name.0.clone(),
            experience: value.experience_years,
            breed: value.breed.clone(),
            salary: value.salary,
        }
    }
}

impl From<&NewCatRecord> for CatPayload {
    fn from(value: &NewCatRecord) -> Self {
        Self {
            catname: value.name.0.clone(),
            experience: value.experience_years,
            breed: value.breed.clone(),
            salary: value.salary,
        }
    }
}
