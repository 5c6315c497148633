use eframe::egui;
use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::engine::protocol::{Notice, NoticeLevel, RosterCommand};
use crate::engine::{apply_command, RosterEngine};
use crate::storage::{JsonFileStore, ROSTER_PATH_ENV};
use crate::ui::settings::UiSettings;
use crate::ui::settings_io;
use crate::ui::{center_panel, left_panel, right_panel};

/* =========================
   Tabs
   ========================= */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum LeftTab {
    #[default]
    Roster,
    Settings,
}

/* =========================
   UI State
   ========================= */

/// Older notices are dropped past this many.
pub(crate) const MAX_NOTICES: usize = 300;

/// Pending edit opened from a table row.
#[derive(Debug, Clone)]
pub(crate) struct EditDraft {
    pub original: String,
    pub name: String,
    pub post: String,
}

#[derive(Default)]
pub(crate) struct UiState {
    pub new_name: String,
    pub new_post: String,
    pub reset_name: String,

    pub search_input: String,
    /// Set when "Show attendance" is pressed; `None` hides the results.
    pub search_query: Option<String>,

    pub selected: BTreeSet<String>,
    pub edit: Option<EditDraft>,

    pub notices: Vec<Notice>,
    pub should_auto_scroll: bool,

    pub left_tab: LeftTab,
}

impl UiState {
    pub(crate) fn push_notices(&mut self, notices: impl IntoIterator<Item = Notice>) {
        self.notices.extend(notices);
        if self.notices.len() > MAX_NOTICES {
            let excess = self.notices.len() - MAX_NOTICES;
            self.notices.drain(..excess);
        }
        self.should_auto_scroll = true;
    }
}

/* =========================
   App
   ========================= */

pub struct AttendanceApp {
    pub(crate) engine: RosterEngine<JsonFileStore>,
    pub(crate) ui: UiState,
    pub(crate) settings: UiSettings,
}

impl AttendanceApp {
    pub fn new(engine: RosterEngine<JsonFileStore>, settings: UiSettings) -> Self {
        let mut ui = UiState::default();
        ui.push_notices([Notice::success(format!(
            "Loaded {} members from {}",
            engine.len(),
            engine.store().path().display()
        ))]);

        Self {
            engine,
            ui,
            settings,
        }
    }

    /// Applies a command, queues its notices and clears the checkbox selection.
    pub(crate) fn send_command(&mut self, command: RosterCommand) {
        let notices = apply_command(&mut self.engine, command);
        self.ui.push_notices(notices);
        self.ui.selected.clear();
    }

    pub(crate) fn notify(&mut self, notice: Notice) {
        self.ui.push_notices([notice]);
    }

    /// Asks before removing a member, like any destructive action.
    pub(crate) fn confirm_delete(&mut self, name: &str) {
        let answer = rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Warning)
            .set_title("Delete member")
            .set_description(format!("Are you sure you want to delete {name}?"))
            .set_buttons(rfd::MessageButtons::YesNo)
            .show();

        if answer == rfd::MessageDialogResult::Yes {
            self.send_command(RosterCommand::DeleteMember {
                name: name.to_string(),
            });
        }
    }

    /// Points the app at another roster file and remembers the choice.
    pub(crate) fn switch_roster(&mut self, path: PathBuf) {
        match RosterEngine::open(JsonFileStore::new(&path)) {
            Ok(engine) => {
                self.engine = engine;
                self.ui.selected.clear();
                self.ui.edit = None;
                self.ui.search_query = None;
                self.settings.roster_path = Some(path.clone());
                self.persist_settings();

                if std::env::var_os(ROSTER_PATH_ENV).is_some() {
                    log::warn!("{} is set and will override this choice on next start", ROSTER_PATH_ENV);
                }
                self.notify(Notice::success(format!(
                    "Loaded {} members from {}",
                    self.engine.len(),
                    path.display()
                )));
            }
            Err(e) => {
                log::error!("could not open roster {}: {}", path.display(), e);
                self.notify(Notice::error(format!("Could not open roster: {e}")));
            }
        }
    }

    pub(crate) fn persist_settings(&mut self) {
        if let Err(e) = settings_io::save_settings(&self.settings) {
            log::warn!("settings not saved: {e:#}");
        }
    }

    pub(crate) fn draw_notice(&self, ui: &mut egui::Ui, notice: &Notice) {
        let bg = match notice.level {
            NoticeLevel::Success => egui::Color32::from_rgb(40, 90, 60),
            NoticeLevel::Warning => egui::Color32::from_rgb(120, 80, 40),
            NoticeLevel::Error => egui::Color32::from_rgb(130, 40, 40),
        };

        ui.add_space(4.0);
        bubble(ui, bg, &notice.text);
    }
}

/* =========================
   egui App
   ========================= */

impl eframe::App for AttendanceApp {
    fn update(&mut self, ctx: &egui::Context, _: &mut eframe::Frame) {
        ctx.set_pixels_per_point(self.settings.clamped_scale());

        left_panel::draw_left_panel(ctx, self);
        right_panel::draw_right_panel(ctx, self);
        center_panel::draw_center_panel(ctx, self);
        draw_edit_window(ctx, self);

        self.ui.should_auto_scroll = false;
    }
}

/* =========================
   UI Helpers
   ========================= */

fn draw_edit_window(ctx: &egui::Context, app: &mut AttendanceApp) {
    let Some(draft) = app.ui.edit.as_mut() else {
        return;
    };

    let mut submit = false;
    let mut cancel = false;

    egui::Window::new(format!("Edit {}", draft.original))
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.label("New name");
            ui.text_edit_singleline(&mut draft.name);
            ui.label("New post");
            ui.text_edit_singleline(&mut draft.post);

            ui.horizontal(|ui| {
                submit = ui.button("Save").clicked();
                cancel = ui.button("Cancel").clicked();
            });
        });

    if cancel {
        app.ui.edit = None;
        return;
    }

    if submit {
        let draft = app.ui.edit.take();
        if let Some(draft) = draft {
            let name = draft.name.trim().to_string();
            let post = draft.post.trim().to_string();

            if name.is_empty() || post.is_empty() {
                app.notify(Notice::warning("Please provide both name and post."));
                app.ui.edit = Some(draft);
            } else {
                app.send_command(RosterCommand::EditMember {
                    old_name: draft.original,
                    new_name: name,
                    new_post: post,
                });
            }
        }
    }
}

pub(crate) fn bubble(ui: &mut egui::Ui, color: egui::Color32, text: &str) {
    egui::Frame::new()
        .fill(color)
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::symmetric(10, 6))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).color(egui::Color32::WHITE));
        });
}

pub(crate) fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}
