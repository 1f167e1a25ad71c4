//! Customers Data

use jiff::Timestamp;

use crate::domain::{
    customers::records::{CustomerRecord, CustomerUuid},
    validation::{ValidationErrors, max_length, non_blank, required_text},
};

pub(crate) const CUSTOMER_NAME_MAX: usize = 255;
pub(crate) const EMAIL_MAX: usize = 255;

/// Customer fields exactly as a client supplied them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerInput {
    pub version: Option<i32>,
    pub name: Option<String>,
    pub email: Option<String>,
}

/// New Customer Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: String,
    pub email: Option<String>,
}

/// Customer Update Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerUpdate {
    pub version: Option<i32>,
    pub name: String,
    pub email: Option<String>,
}

/// Customer Patch Data
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerPatch {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl TryFrom<CustomerInput> for NewCustomer {
    type Error = ValidationErrors;

    fn try_from(input: CustomerInput) -> Result<Self, Self::Error> {
        let mut errors = ValidationErrors::new();

        required_text(&mut errors, "customerName", input.name.as_deref(), CUSTOMER_NAME_MAX);
        max_length(&mut errors, "email", input.email.as_deref(), EMAIL_MAX);

        match input.name {
            Some(name) if errors.is_empty() => Ok(Self {
                name,
                email: input.email,
            }),
            _ => Err(errors),
        }
    }
}

impl TryFrom<CustomerInput> for CustomerUpdate {
    type Error = ValidationErrors;

    fn try_from(input: CustomerInput) -> Result<Self, Self::Error> {
        let version = input.version;

        NewCustomer::try_from(input).map(|customer| Self {
            version,
            name: customer.name,
            email: customer.email,
        })
    }
}

impl TryFrom<CustomerInput> for CustomerPatch {
    type Error = ValidationErrors;

    fn try_from(input: CustomerInput) -> Result<Self, Self::Error> {
        let mut errors = ValidationErrors::new();

        max_length(&mut errors, "customerName", input.name.as_deref(), CUSTOMER_NAME_MAX);
        max_length(&mut errors, "email", input.email.as_deref(), EMAIL_MAX);

        errors.into_result(Self {
            name: non_blank(input.name),
            email: non_blank(input.email),
        })
    }
}

impl NewCustomer {
    pub(crate) fn into_record(self, now: Timestamp) -> CustomerRecord {
        CustomerRecord {
            uuid: CustomerUuid::new(),
            version: 1,
            name: self.name,
            email: self.email,
            created_at: now,
            updated_at: now,
        }
    }
}

impl CustomerUpdate {
    pub(crate) fn apply_to(self, customer: &mut CustomerRecord) {
        customer.name = self.name;
        customer.email = self.email;
    }

    pub(crate) fn is_stale(&self, current: i32) -> bool {
        self.version.is_some_and(|version| version != current)
    }
}

impl CustomerPatch {
    pub(crate) fn apply_to(self, customer: &mut CustomerRecord) {
        if let Some(name) = non_blank(self.name) {
            customer.name = name;
        }

        if let Some(email) = non_blank(self.email) {
            customer.email = Some(email);
        }
    }
}
