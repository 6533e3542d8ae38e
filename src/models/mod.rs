pub mod error;
pub mod invoice;
pub mod period;
pub mod query;
pub mod session;
pub mod team;
