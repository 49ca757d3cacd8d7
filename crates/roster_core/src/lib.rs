pub mod config;
pub mod edit;
pub mod error;
pub mod events;
pub mod form;
pub mod service;
pub mod store;

#[cfg(test)]
#[path = "tests/support.rs"]
mod test_support;

pub use config::ClientSettings;
pub use edit::SalaryEditDialog;
pub use error::{TransportError, ValidationError};
pub use events::{Notification, RosterEvent, RosterOperation};
pub use form::{NewCatField, NewCatForm};
pub use service::{HttpRosterService, RosterService};
pub use store::{MutationOutcome, PendingEdit, RosterStore, RosterView};
