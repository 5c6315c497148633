use eframe::egui;

use crate::engine::protocol::{Notice, RosterCommand};
use crate::ui::app::{yes_no, AttendanceApp};

pub fn draw_right_panel(ctx: &egui::Context, app: &mut AttendanceApp) {
    egui::SidePanel::right("right")
        .resizable(true)
        .default_width(340.0)
        .min_width(260.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                draw_attendance(ui, app);
                ui.separator();
                draw_search(ui, app);
            });
        });
}

/* =========================
   Record attendance
   ========================= */

fn draw_attendance(ui: &mut egui::Ui, app: &mut AttendanceApp) {
    ui.heading("Record Attendance");

    let members = app.engine.all();
    if members.is_empty() {
        ui.label("Add members to record attendance.");
        return;
    }

    for member in &members {
        let name = member.name();
        let mut checked = app.ui.selected.contains(name);
        if ui.checkbox(&mut checked, name).changed() {
            if checked {
                app.ui.selected.insert(name.to_string());
            } else {
                app.ui.selected.remove(name);
            }
        }
    }

    ui.horizontal(|ui| {
        let mut mark: Option<bool> = None;
        if ui.button("Present").clicked() {
            mark = Some(true);
        }
        if ui.button("Absent").clicked() {
            mark = Some(false);
        }

        if let Some(is_present) = mark {
            if app.ui.selected.is_empty() {
                app.notify(Notice::warning("Select at least one member."));
            } else {
                let names = app.ui.selected.iter().cloned().collect();
                app.send_command(RosterCommand::RecordAttendance { names, is_present });
            }
        }
    });
}

/* =========================
   Search attendance
   ========================= */

fn draw_search(ui: &mut egui::Ui, app: &mut AttendanceApp) {
    ui.heading("Attendance");

    ui.horizontal(|ui| {
        ui.add(
            egui::TextEdit::singleline(&mut app.ui.search_input).hint_text("Search by name"),
        );
        if ui.button("Show").clicked() {
            app.ui.search_query = Some(app.ui.search_input.trim().to_string());
        }
    });

    let Some(query) = app.ui.search_query.as_deref() else {
        return;
    };

    let results = app.engine.search(query);
    if results.is_empty() {
        ui.label("No matching members.");
        return;
    }

    egui::Grid::new("attendance_results")
        .striped(true)
        .num_columns(6)
        .show(ui, |ui| {
            for header in ["Name", "Post", "Present", "Absent", "Consecutive", "Blacklisted"] {
                ui.strong(header);
            }
            ui.end_row();

            for member in &results {
                ui.label(member.name());
                ui.label(member.post());
                ui.label(member.total_present_days().to_string());
                ui.label(member.total_absent_days().to_string());
                ui.label(member.consecutive_absent_days().to_string());
                ui.label(yes_no(member.is_blacklisted()));
                ui.end_row();
            }
        });
}
