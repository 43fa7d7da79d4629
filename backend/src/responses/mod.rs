mod response_repository;
mod self_assessment;

pub use response_repository::ResponseRepository;
pub use self_assessment::{MISSING_SECTIONS_MESSAGE, SelfAssessment};
