pub mod apply_command;
pub mod protocol;
pub mod roster;

pub use apply_command::apply_command;
pub use roster::RosterEngine;
