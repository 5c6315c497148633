use eframe::egui;

use crate::ui::app::{yes_no, AttendanceApp, EditDraft};

/// Notice log along the bottom, full roster table with per-row Edit/Delete above it.
pub fn draw_center_panel(ctx: &egui::Context, app: &mut AttendanceApp) {
    // ---------- Notices ----------
    egui::TopBottomPanel::bottom("notices")
        .resizable(true)
        .default_height(140.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .stick_to_bottom(app.ui.should_auto_scroll)
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for notice in &app.ui.notices {
                        app.draw_notice(ui, notice);
                    }
                });
        });

    // ---------- Members ----------
    let members = app.engine.all();
    let highlight = app.settings.blacklist_color();

    let mut edit: Option<EditDraft> = None;
    let mut delete: Option<String> = None;

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Members");
        ui.separator();

        if members.is_empty() {
            ui.label("No members yet.");
            return;
        }

        egui::ScrollArea::both().show(ui, |ui| {
            egui::Grid::new("members_table")
                .striped(true)
                .num_columns(8)
                .show(ui, |ui| {
                    for header in [
                        "#",
                        "Name",
                        "Post",
                        "Present",
                        "Absent",
                        "Consecutive Absent",
                        "Blacklisted",
                        "",
                    ] {
                        ui.strong(header);
                    }
                    ui.end_row();

                    for (index, member) in members.iter().enumerate() {
                        ui.label((index + 1).to_string());
                        ui.label(member.name());
                        ui.label(member.post());
                        ui.label(member.total_present_days().to_string());
                        ui.label(member.total_absent_days().to_string());
                        ui.label(member.consecutive_absent_days().to_string());

                        let flag = yes_no(member.is_blacklisted());
                        if member.is_blacklisted() {
                            ui.label(egui::RichText::new(flag).color(highlight));
                        } else {
                            ui.label(flag);
                        }

                        ui.horizontal(|ui| {
                            if ui.small_button("Edit").clicked() {
                                edit = Some(EditDraft {
                                    original: member.name().to_string(),
                                    name: member.name().to_string(),
                                    post: member.post().to_string(),
                                });
                            }
                            if ui.small_button("Delete").clicked() {
                                delete = Some(member.name().to_string());
                            }
                        });
                        ui.end_row();
                    }
                });
        });
    });

    if let Some(draft) = edit {
        app.ui.edit = Some(draft);
    }
    if let Some(name) = delete {
        app.confirm_delete(&name);
    }
}
