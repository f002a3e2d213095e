pub mod categories;
pub mod engine;

pub use categories::{determine_accommodation, determine_coverage_type, determine_plan_type};
pub use engine::classify;
