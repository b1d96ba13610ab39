use crate::errors::AppResult;
use crate::forms::{clean, require};
use crate::models::Company;

/// Directory entry form. Required: name, floor.
#[derive(Debug, Clone, Default)]
pub struct CompanyForm {
    pub name: String,
    pub floor: String,
    pub room: String,
    pub hotline: String,
    pub contact_person: String,
}

impl CompanyForm {
    pub fn validate(&self) -> AppResult<()> {
        require(&[("name", self.name.as_str()), ("floor", self.floor.as_str())])
    }

    pub fn into_record(self, id: String) -> AppResult<Company> {
        self.validate()?;
        Ok(Company {
            id,
            name: clean(&self.name),
            floor: clean(&self.floor),
            room: clean(&self.room),
            hotline: clean(&self.hotline),
            contact_person: clean(&self.contact_person),
        })
    }
}
