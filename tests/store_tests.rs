use chrono::NaiveDate;
use rovertime::core::calculator::balance::calculate_balance;
use rovertime::errors::AppError;
use rovertime::models::category::Category;
use rovertime::models::entry::{Entry, EntryId};
use rovertime::store::layout::RowLayout;
use rovertime::store::{CsvEntryStore, CsvTable, EntryStore, RowStore, resolve_id};
use std::fs;
use tempfile::TempDir;

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
}

fn entry(d: u32, cat: Category, start: &str, end: &str, note: &str) -> Entry {
    Entry::new(date(d), cat, start, end, note).unwrap()
}

#[test]
fn test_append_then_list_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("overtime.csv");
    let mut store = CsvEntryStore::open(&path);

    let a = entry(10, Category::Overtime, "08:00", "17:30", "release, with comma");
    let b = entry(11, Category::CompensatoryLeave, "22:00", "02:00", "");
    store.append(&a).unwrap();
    store.append(&b).unwrap();

    let listed = store.list().unwrap();
    assert_eq!(listed, vec![a, b]);

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("Date,Type,StartTime,EndTime,Hours,Note,Id"));
    assert!(content.contains("2025-01-11,CompensatoryLeave,22:00,02:00,-4.00,,"));
}

#[test]
fn test_missing_file_lists_empty() {
    let dir = TempDir::new().unwrap();
    let store = CsvEntryStore::open(&dir.path().join("nope.csv"));
    assert!(store.list().unwrap().is_empty());
}

#[test]
fn test_delete_shifts_later_rows() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("overtime.csv");
    let mut store = CsvEntryStore::open(&path);

    let entries: Vec<Entry> = (10..14)
        .map(|d| entry(d, Category::Overtime, "08:00", "09:00", ""))
        .collect();
    for e in &entries {
        store.append(e).unwrap();
    }

    let removed = store.delete(&entries[1].id).unwrap();
    assert_eq!(removed, entries[1]);

    let listed = store.list().unwrap();
    assert_eq!(listed.len(), 3);
    assert!(listed.iter().all(|e| e.id != entries[1].id));
    assert_eq!(listed[1], entries[2]);
    assert_eq!(listed[2], entries[3]);
}

#[test]
fn test_replace_overwrites_all_fields_in_place() {
    let dir = TempDir::new().unwrap();
    let mut store = CsvEntryStore::open(&dir.path().join("overtime.csv"));

    let a = entry(10, Category::Overtime, "08:00", "17:30", "first");
    let b = entry(11, Category::Overtime, "08:00", "10:00", "second");
    store.append(&a).unwrap();
    store.append(&b).unwrap();

    let updated = Entry::with_id(
        a.id.clone(),
        date(12),
        Category::CompensatoryLeave,
        "13:00",
        "14:30",
        "changed",
    )
    .unwrap();
    store.replace(&a.id, &updated).unwrap();

    let listed = store.list().unwrap();
    assert_eq!(listed[0], updated);
    assert_eq!(listed[0].hours.to_string(), "-1.50");
    assert_eq!(listed[1], b);
}

#[test]
fn test_unknown_id_is_row_not_found() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("overtime.csv");
    let mut store = CsvEntryStore::open(&path);
    let a = entry(10, Category::Overtime, "08:00", "17:30", "");
    store.append(&a).unwrap();
    let before = fs::read_to_string(&path).unwrap();

    let ghost = EntryId::generate();
    assert!(matches!(
        store.delete(&ghost).unwrap_err(),
        AppError::RowNotFound(_)
    ));
    assert!(matches!(
        store.replace(&ghost, &a).unwrap_err(),
        AppError::RowNotFound(_)
    ));

    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn test_stale_listing_cannot_hit_wrong_row() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("overtime.csv");
    let mut session_a = CsvEntryStore::open(&path);
    let mut session_b = CsvEntryStore::open(&path);

    let first = entry(10, Category::Overtime, "08:00", "09:00", "first");
    let second = entry(11, Category::Overtime, "08:00", "10:00", "second");
    session_a.append(&first).unwrap();
    session_a.append(&second).unwrap();

    // session A lists, session B deletes the first row, A then edits "second"
    let stale = session_a.list().unwrap();
    session_b.delete(&first.id).unwrap();

    let target = &stale[1];
    let edited = Entry::with_id(
        target.id.clone(),
        target.date,
        target.category,
        "08:00",
        "11:00",
        "edited",
    )
    .unwrap();
    session_a.replace(&target.id, &edited).unwrap();

    assert_eq!(session_a.list().unwrap(), vec![edited]);
}

#[test]
fn test_positional_row_store_bounds() {
    let dir = TempDir::new().unwrap();
    let mut table = CsvTable::new(&dir.path().join("t.csv"), RowLayout::File.header());
    table.ensure_exists().unwrap();

    let row = |n: &str| vec![n.to_string(); 7];
    table.append_row(row("a")).unwrap();
    table.append_row(row("b")).unwrap();
    table.append_row(row("c")).unwrap();

    table.update_row(1, row("B")).unwrap();
    table.delete_row(0).unwrap();
    assert_eq!(table.read_all().unwrap(), vec![row("B"), row("c")]);

    assert!(matches!(
        table.update_row(2, row("x")).unwrap_err(),
        AppError::RowNotFound(_)
    ));
    assert!(matches!(
        table.delete_row(5).unwrap_err(),
        AppError::RowNotFound(_)
    ));
}

#[test]
fn test_non_numeric_hours_count_as_zero() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("overtime.csv");
    fs::write(
        &path,
        "Date,Type,StartTime,EndTime,Hours,Note,Id\n\
         2025-01-10,Overtime,08:00,17:30,9.50,,aaaa1111\n\
         2025-01-11,Overtime,08:00,09:00,abc,,bbbb2222\n\
         2025-01-12,CompensatoryLeave,09:00,12:00,-3.00,,cccc3333\n",
    )
    .unwrap();

    let store = CsvEntryStore::open(&path);
    let entries = store.list().unwrap();
    assert_eq!(entries.len(), 3);

    let first = calculate_balance(&entries);
    let second = calculate_balance(&store.list().unwrap());
    assert_eq!(first.to_string(), "6.50");
    assert_eq!(first, second);
}

#[test]
fn test_out_of_range_hours_count_as_zero() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("overtime.csv");
    fs::write(
        &path,
        "Date,Type,StartTime,EndTime,Hours,Note,Id\n\
         2025-01-10,Overtime,08:00,17:30,1e300,,aaaa1111\n\
         2025-01-11,Overtime,08:00,09:00,1e300,,bbbb2222\n\
         2025-01-12,CompensatoryLeave,09:00,12:00,-1e300,,cccc3333\n\
         2025-01-13,Overtime,08:00,10:00,2.00,,dddd4444\n",
    )
    .unwrap();

    let entries = CsvEntryStore::open(&path).list().unwrap();
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[2].hours.to_string(), "0.00");
    assert_eq!(calculate_balance(&entries).to_string(), "2.00");
}

#[test]
fn test_resolve_id_by_prefix() {
    let d = date(10);
    let mk = |id: &str| Entry {
        id: EntryId::from_stored(id),
        ..Entry::new(d, Category::Overtime, "08:00", "09:00", "").unwrap()
    };
    let entries = vec![mk("abcd1234-0000"), mk("abcd9999-0000"), mk("ffff0000-1111")];

    assert_eq!(
        resolve_id(&entries, "ffff").unwrap().id.as_str(),
        "ffff0000-1111"
    );
    assert_eq!(
        resolve_id(&entries, "ABCD1234").unwrap().id.as_str(),
        "abcd1234-0000"
    );
    assert!(matches!(
        resolve_id(&entries, "abcd").unwrap_err(),
        AppError::AmbiguousId(_, 2)
    ));
    assert!(matches!(
        resolve_id(&entries, "abc").unwrap_err(),
        AppError::RowNotFound(_)
    ));
    assert!(matches!(
        resolve_id(&entries, "0000").unwrap_err(),
        AppError::RowNotFound(_)
    ));
}
