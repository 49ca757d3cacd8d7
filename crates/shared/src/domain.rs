use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatName(pub String);

impl CatName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CatName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CatName {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for CatName {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatRecord {
    pub name: CatName,
    pub experience_years: u32,
    pub breed: String,
    pub salary: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCatRecord {
    pub name: CatName,
    pub experience_years: u32,
    pub breed: String,
    pub salary: u64,
}

impl NewCatRecord {
    pub fn matches(&self, record: &CatRecord) -> bool {
        self.name == record.name
            && self.experience_years == record.experience_years
            && self.breed == record.breed
            && self.salary == record.salary
    }
}

impl From<NewCatRecord> for CatRecord {
    fn from(value: NewCatRecord) -> Self {
        Self {
            name: value.name,
            experience_years: value.experience_years,
            breed: value.breed,
            salary: value.salary,
        }
    }
}
