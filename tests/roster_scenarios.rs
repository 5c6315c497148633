use executive_attendance::engine::RosterEngine;
use executive_attendance::model::outcome::RosterError;
use executive_attendance::model::snapshot::MemberSnapshot;
use executive_attendance::storage::{JsonFileStore, MemoryStore, RosterStore};

fn open_empty() -> RosterEngine<MemoryStore> {
    RosterEngine::open(MemoryStore::new()).unwrap()
}

fn counters(engine: &RosterEngine<MemoryStore>, name: &str) -> (u32, u32, u32, bool) {
    let m = engine.get(name).unwrap();
    (
        m.total_present_days(),
        m.total_absent_days(),
        m.consecutive_absent_days(),
        m.is_blacklisted(),
    )
}

#[test]
fn asha_goes_through_the_whole_blacklist_cycle() {
    let mut roster = open_empty();

    roster.add("Asha", "President").unwrap();
    assert_eq!(counters(&roster, "Asha"), (0, 0, 0, false));

    for _ in 0..3 {
        roster.record_attendance(["Asha"], false).unwrap();
    }
    assert_eq!(counters(&roster, "Asha"), (0, 3, 3, true));

    let report = roster.record_attendance(["Asha"], true).unwrap();
    assert!(matches!(
        report.blocked.as_slice(),
        [RosterError::BlacklistedAttendanceBlocked { name }] if name == "Asha"
    ));
    assert_eq!(counters(&roster, "Asha"), (0, 3, 3, true));

    roster.reset_blacklist("Asha").unwrap();
    assert_eq!(counters(&roster, "Asha"), (0, 3, 0, false));

    roster.record_attendance(["Asha"], true).unwrap();
    assert_eq!(counters(&roster, "Asha"), (1, 3, 0, false));
}

#[test]
fn deleting_a_ghost_from_an_empty_roster_writes_nothing() {
    let mut roster = open_empty();

    let err = roster.delete("Ghost").unwrap_err();

    assert!(matches!(err, RosterError::NotAMember { ref name } if name == "Ghost"));
    assert_eq!(roster.store().save_count(), 0);
    assert!(roster.is_empty());
}

#[test]
fn names_stay_unique_through_adds_and_deletes() {
    let mut roster = open_empty();
    let script = [
        ("add", "Asha"),
        ("add", "Ravi"),
        ("add", "Asha"),
        ("delete", "Ravi"),
        ("add", "Ravi"),
        ("add", "Ravi"),
        ("delete", "Mina"),
        ("add", "Mina"),
    ];

    for (op, name) in script {
        let _ = match op {
            "add" => roster.add(name, "Member"),
            _ => roster.delete(name),
        };

        let names: Vec<String> = roster.all().iter().map(|m| m.name().to_string()).collect();
        let mut deduped = names.clone();
        deduped.dedup();
        assert_eq!(names, deduped);
        assert_eq!(names.len(), roster.len());
    }

    assert_eq!(roster.len(), 3);
}

#[test]
fn rename_collision_leaves_both_records_alone() {
    let mut roster = open_empty();
    roster.add("Asha", "President").unwrap();
    roster.add("Ravi", "Treasurer").unwrap();
    roster.record_attendance(["Ravi"], false).unwrap();
    let asha_before = roster.get("Asha").cloned();
    let ravi_before = roster.get("Ravi").cloned();
    let saves = roster.store().save_count();

    assert!(matches!(
        roster.edit("Asha", "Ravi", "Chair"),
        Err(RosterError::NameCollision { .. })
    ));

    assert_eq!(roster.get("Asha").cloned(), asha_before);
    assert_eq!(roster.get("Ravi").cloned(), ravi_before);
    assert_eq!(roster.store().save_count(), saves);
}

#[test]
fn edit_of_unknown_member_is_not_a_member() {
    let mut roster = open_empty();
    assert!(matches!(
        roster.edit("Ghost", "Ghost", "Chair"),
        Err(RosterError::NotAMember { .. })
    ));
}

#[test]
fn reloading_a_saved_roster_gives_back_identical_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("members.json");

    let mut roster = RosterEngine::open(JsonFileStore::new(&path)).unwrap();
    roster.add("Asha", "President").unwrap();
    roster.add("Ravi", "Treasurer").unwrap();
    roster.add("Mina", "Secretary").unwrap();
    roster.record_attendance(["Asha", "Ravi"], true).unwrap();
    for _ in 0..3 {
        roster.record_attendance(["Mina"], false).unwrap();
    }
    roster.record_attendance(["Ravi"], false).unwrap();
    let before = roster.all();

    let reopened = RosterEngine::open(JsonFileStore::new(&path)).unwrap();
    assert_eq!(reopened.all(), before);
}

#[test]
fn diverged_absent_counters_are_kept_verbatim() {
    let stored = vec![MemberSnapshot {
        name: "Asha".into(),
        post: "President".into(),
        absent_count: 2,
        total_absent_days: 7,
        total_present_days: 11,
        consecutive_absent_days: 1,
        is_blacklisted: false,
    }];

    let mut roster = RosterEngine::open(MemoryStore::with_members(stored.clone())).unwrap();
    assert_eq!(roster.snapshots(), stored);

    roster.record_attendance(["Asha"], false).unwrap();
    let saved = &roster.store().members()[0];
    assert_eq!(saved.absent_count, 3);
    assert_eq!(saved.total_absent_days, 8);
}

#[test]
fn reads_a_roster_written_by_the_browser_version() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("members.json");
    std::fs::write(
        &path,
        r#"[{"name":"Ravi","post":"Treasurer","absentCount":3,"totalAbsentDays":3,
             "totalPresentDays":5,"consecutiveAbsentDays":3,"isBlacklisted":true},
            {"name":"Asha","post":"President","absentCount":0,"totalAbsentDays":0,
             "totalPresentDays":8,"consecutiveAbsentDays":0,"isBlacklisted":false}]"#,
    )
    .unwrap();

    let store = JsonFileStore::new(&path);
    assert_eq!(store.load().unwrap().len(), 2);

    let roster = RosterEngine::open(store).unwrap();
    let names: Vec<String> = roster.all().iter().map(|m| m.name().to_string()).collect();
    assert_eq!(names, vec!["Asha", "Ravi"]);
    assert_eq!(roster.blacklisted().len(), 1);
    assert_eq!(roster.blacklisted()[0].name(), "Ravi");
}

#[test]
fn listing_sorts_accented_names_alongside_plain_ones() {
    let mut roster = open_empty();
    for name in ["Zoe", "Émile", "Eva", "Fatima"] {
        roster.add(name, "Member").unwrap();
    }

    let names: Vec<String> = roster.all().iter().map(|m| m.name().to_string()).collect();
    assert_eq!(names, vec!["Émile", "Eva", "Fatima", "Zoe"]);
}
