use crate::store::Record;
use serde::{Deserialize, Serialize};

/// An entry of the building's company directory. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub floor: String,
    #[serde(default)]
    pub room: String,
    #[serde(default)]
    pub hotline: String,
    #[serde(default)]
    pub contact_person: String,
}

impl Company {
    /// Case-insensitive substring match over name and floor.
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.name.to_lowercase().contains(&needle) || self.floor.to_lowercase().contains(&needle)
    }
}

impl Record for Company {
    const STORAGE_KEY: &'static str = "reception_companies_data";
    const LABEL: &'static str = "company";

    fn id(&self) -> &str {
        &self.id
    }
}
