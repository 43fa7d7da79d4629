mod people_repository;
mod person;
mod seed;
mod slug;

pub use people_repository::{PeopleRepository, SubmissionCounts, mark_submitted, submitted_ids};
pub use person::Person;
pub use seed::{DEFAULT_ROSTER, seed};
pub use slug::{disambiguate, slugify};
