pub mod competition;
pub mod scenario;
pub mod submission;
