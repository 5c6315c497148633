pub mod member;
pub mod outcome;
pub mod snapshot;
