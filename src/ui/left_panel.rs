use eframe::egui;

use crate::engine::protocol::{Notice, RosterCommand};
use crate::ui::app::{AttendanceApp, LeftTab};

pub fn draw_left_panel(ctx: &egui::Context, app: &mut AttendanceApp) {
    egui::SidePanel::left("left")
        .resizable(false)
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut app.ui.left_tab, LeftTab::Roster, "Roster");
                ui.selectable_value(&mut app.ui.left_tab, LeftTab::Settings, "Settings");
            });

            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| match app.ui.left_tab {
                LeftTab::Roster => draw_roster_tools(ui, app),
                LeftTab::Settings => draw_settings(ui, app),
            });
        });
}

/* =========================
   Roster tools
   ========================= */

fn draw_roster_tools(ui: &mut egui::Ui, app: &mut AttendanceApp) {
    ui.heading("Executives");
    ui.label(format!("Total: {}", app.engine.len()));

    ui.separator();
    ui.label("Add member");
    ui.add(egui::TextEdit::singleline(&mut app.ui.new_name).hint_text("Name"));
    ui.add(egui::TextEdit::singleline(&mut app.ui.new_post).hint_text("Post"));

    if ui.button("➕ Add").clicked() {
        let name = app.ui.new_name.trim().to_string();
        let post = app.ui.new_post.trim().to_string();

        if name.is_empty() || post.is_empty() {
            app.notify(Notice::warning("Please provide both name and post."));
        } else {
            app.send_command(RosterCommand::AddMember { name, post });
            app.ui.new_name.clear();
            app.ui.new_post.clear();
        }
    }

    ui.separator();
    ui.label("Reset blacklist");
    ui.add(egui::TextEdit::singleline(&mut app.ui.reset_name).hint_text("Name"));

    if ui.button("Reset").clicked() {
        let name = app.ui.reset_name.trim().to_string();

        if name.is_empty() {
            app.notify(Notice::warning("Please provide the name."));
        } else {
            app.send_command(RosterCommand::ResetBlacklist { name });
            app.ui.reset_name.clear();
        }
    }

    ui.separator();
    ui.label("Blacklisted");
    let names: Vec<String> = app
        .engine
        .blacklisted()
        .iter()
        .map(|m| m.name().to_string())
        .collect();

    if names.is_empty() {
        ui.label("None");
    } else {
        ui.label(
            egui::RichText::new(names.join(", ")).color(app.settings.blacklist_color()),
        );
    }
}

/* =========================
   Settings
   ========================= */

fn draw_settings(ui: &mut egui::Ui, app: &mut AttendanceApp) {
    let mut changed = false;

    ui.label("UI Scale");
    changed |= ui
        .add(egui::Slider::new(&mut app.settings.ui_scale, 0.75..=2.0))
        .changed();

    ui.separator();
    ui.horizontal(|ui| {
        ui.label("Blacklist colour");
        let mut color = app.settings.blacklist_color();
        if ui.color_edit_button_srgba(&mut color).changed() {
            app.settings.set_blacklist_color(color);
            changed = true;
        }
    });

    ui.separator();
    ui.label("Roster file");
    ui.label(
        egui::RichText::new(app.engine.store().path().display().to_string()).small(),
    );

    ui.horizontal(|ui| {
        if ui.button("Open…").clicked() {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("Roster", &["json"])
                .pick_file()
            {
                app.switch_roster(path);
            }
        }

        if ui.button("New…").clicked() {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("Roster", &["json"])
                .set_file_name("members.json")
                .save_file()
            {
                app.switch_roster(path);
            }
        }
    });

    if changed {
        app.persist_settings();
    }
}
