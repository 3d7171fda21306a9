//! Data models for contact records and query results.

pub mod record;
pub mod upcoming;

pub use record::ContactRecord;
pub use upcoming::UpcomingBirthday;
