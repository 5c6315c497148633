use crate::engine::protocol::{Notice, RosterCommand};
use crate::engine::roster::RosterEngine;
use crate::model::outcome::RosterError;
use crate::storage::RosterStore;

/// Run a RosterCommand against the engine and phrase the result for the user.
pub fn apply_command<S: RosterStore>(
    engine: &mut RosterEngine<S>,
    command: RosterCommand,
) -> Vec<Notice> {
    match command {
        RosterCommand::AddMember { name, post } => match engine.add(&name, &post) {
            Ok(()) => vec![Notice::success(format!("{} has been added.", name))],
            Err(e) => vec![describe(&e)],
        },

        RosterCommand::RecordAttendance { names, is_present } => {
            match engine.record_attendance(&names, is_present) {
                Ok(report) => {
                    let mut notices: Vec<Notice> = report.blocked.iter().map(describe).collect();

                    for name in &report.newly_blacklisted {
                        notices.push(Notice::warning(format!(
                            "{} has been blacklisted after 3 consecutive absences.",
                            name
                        )));
                    }

                    let marked = report.marked_present.len() + report.marked_absent.len();
                    if marked > 0 {
                        let kind = if is_present { "present" } else { "absent" };
                        notices.push(Notice::success(format!("Marked {} {}.", marked, kind)));
                    }
                    notices
                }
                Err(e) => vec![describe(&e)],
            }
        }

        RosterCommand::ResetBlacklist { name } => match engine.reset_blacklist(&name) {
            Ok(()) => vec![Notice::success(format!("{}'s blacklist status has been reset.", name))],
            Err(e) => vec![describe(&e)],
        },

        RosterCommand::DeleteMember { name } => match engine.delete(&name) {
            Ok(()) => vec![Notice::success(format!("{} has been removed.", name))],
            Err(e) => vec![describe(&e)],
        },

        RosterCommand::EditMember { old_name, new_name, new_post } => {
            match engine.edit(&old_name, &new_name, &new_post) {
                Ok(()) => vec![Notice::success(format!(
                    "{} has been updated to {}.",
                    old_name, new_name
                ))],
                Err(e) => vec![describe(&e)],
            }
        }
    }
}

fn describe(error: &RosterError) -> Notice {
    match error {
        RosterError::DuplicateMember { name } => {
            Notice::warning(format!("{} is already a member.", name))
        }
        RosterError::NotAMember { name } => Notice::warning(format!("{} is not a member.", name)),
        RosterError::NameCollision { name } => Notice::warning(format!(
            "{} is already a member. Please choose a different name.",
            name
        )),
        RosterError::BlacklistedAttendanceBlocked { name } => Notice::warning(format!(
            "{} is blacklisted. Reset blacklist before recording attendance.",
            name
        )),
        RosterError::BlankField { .. } => Notice::warning("Please provide both name and post."),
        RosterError::Storage(e) => Notice::error(format!("Could not save the roster: {}", e)),
    }
}
