use anyhow::Context;

use executive_attendance::engine::RosterEngine;
use executive_attendance::storage::JsonFileStore;
use executive_attendance::ui::app::AttendanceApp;
use executive_attendance::ui::settings_io;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let settings = settings_io::load_settings();
    let roster_path = settings_io::resolve_roster_path(&settings);
    log::info!("using roster file {}", roster_path.display());

    let engine = RosterEngine::open(JsonFileStore::new(&roster_path))
        .with_context(|| format!("opening roster {}", roster_path.display()))?;

    let options = eframe::NativeOptions::default();

    eframe::run_native(
        "Executive Attendance",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(AttendanceApp::new(engine, settings)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("ui exited with an error: {e}"))
}
