mod assignment_repository;
pub mod derangement;
mod service;

pub use assignment_repository::{AssignmentRepository, Pairing};
pub use derangement::{Assignment, DerangementError, generate};
pub use service::{SwapError, SwapService};
