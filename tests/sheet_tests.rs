use chrono::NaiveDate;
use rovertime::core::calculator::balance::calculate_balance;
use rovertime::errors::{AppError, AppResult};
use rovertime::models::category::Category;
use rovertime::models::entry::Entry;
use rovertime::store::layout::RowLayout;
use rovertime::store::sheet::FIRST_DATA_ROW;
use rovertime::store::{
    EntryStore, LocalTab, Row, SheetEntryStore, SheetSession, SheetTab, Workbook,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

mod common;
use common::write_credentials;

fn open(dir: &Path) -> SheetEntryStore<LocalTab> {
    let session = SheetSession::establish(Path::new(&write_credentials(dir))).unwrap();
    let wb = Workbook::open(&session, &dir.join("workbook")).unwrap();
    SheetEntryStore::from_workbook(&wb).unwrap()
}

/// Tab held in memory whose appends can be made to fail.
struct MemoryTab {
    title: String,
    values: Vec<Row>,
    fail_append: bool,
}

impl MemoryTab {
    fn new(title: &str, fail_append: bool) -> Self {
        Self {
            title: title.to_string(),
            values: vec![RowLayout::Tab.header()],
            fail_append,
        }
    }
}

impl SheetTab for MemoryTab {
    fn title(&self) -> &str {
        &self.title
    }

    fn get_all_values(&self) -> AppResult<Vec<Row>> {
        Ok(self.values.clone())
    }

    fn append_row(&mut self, values: Row) -> AppResult<()> {
        if self.fail_append {
            return Err(AppError::StoreUnavailable("network".into()));
        }
        self.values.push(values);
        Ok(())
    }

    fn update_row(&mut self, sheet_row: usize, values: Row) -> AppResult<()> {
        self.values[sheet_row - 1] = values;
        Ok(())
    }

    fn delete_row(&mut self, sheet_row: usize) -> AppResult<()> {
        self.values.remove(sheet_row - 1);
        Ok(())
    }
}

fn entry(d: u32, cat: Category, start: &str, end: &str) -> Entry {
    let date = NaiveDate::from_ymd_opt(2025, 1, d).unwrap();
    Entry::new(date, cat, start, end, "note").unwrap()
}

#[test]
fn test_missing_credentials_are_fatal() {
    let dir = TempDir::new().unwrap();
    let err = SheetSession::establish(&dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, AppError::MissingCredentials(_)));

    let bad = dir.path().join("bad.json");
    fs::write(&bad, r#"{"type":"service_account"}"#).unwrap();
    assert!(matches!(
        SheetSession::establish(&bad).unwrap_err(),
        AppError::MissingCredentials(_)
    ));
}

#[test]
fn test_entries_go_to_their_category_tab() {
    let dir = TempDir::new().unwrap();
    let mut store = open(dir.path());

    let ot = entry(10, Category::Overtime, "08:00", "17:30");
    let leave = entry(11, Category::CompensatoryLeave, "09:00", "12:00");
    store.append(&leave).unwrap();
    store.append(&ot).unwrap();

    let wb_dir = dir.path().join("workbook");
    let ot_tab = fs::read_to_string(wb_dir.join("Overtime.csv")).unwrap();
    let leave_tab = fs::read_to_string(wb_dir.join("CompensatoryLeave.csv")).unwrap();

    assert!(ot_tab.starts_with("Date,Type,Hours(+/-),Note,Id"));
    assert!(ot_tab.contains(&format!("2025-01-10,Overtime,9.50,note,{}", ot.id)));
    assert!(leave_tab.contains(&format!(
        "2025-01-11,CompensatoryLeave,-3.00,note,{}",
        leave.id
    )));

    // overtime tab first, then compensatory leave; no clock times
    let listed = store.list().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, ot.id);
    assert_eq!(listed[1].id, leave.id);
    assert!(listed.iter().all(|e| e.span.is_none()));
    assert_eq!(calculate_balance(&listed).to_string(), "6.50");
}

#[test]
fn test_data_position_maps_to_sheet_row_plus_two() {
    let dir = TempDir::new().unwrap();
    let mut store = open(dir.path());

    let a = entry(10, Category::Overtime, "08:00", "09:00");
    let b = entry(11, Category::Overtime, "08:00", "10:00");
    store.append(&a).unwrap();
    store.append(&b).unwrap();

    let tab = LocalTab::open("Overtime", &dir.path().join("workbook/Overtime.csv")).unwrap();
    let values = tab.get_all_values().unwrap();
    // data position 1 lives at 1-based sheet row 3
    let sheet_row = 1 + FIRST_DATA_ROW;
    assert_eq!(values[sheet_row - 1][4], b.id.to_string());
    assert_eq!(values[0][0], "Date");
}

#[test]
fn test_category_change_moves_row_between_tabs() {
    let dir = TempDir::new().unwrap();
    let mut store = open(dir.path());

    let a = entry(10, Category::Overtime, "08:00", "12:00");
    store.append(&a).unwrap();

    let moved = Entry::with_id(
        a.id.clone(),
        a.date,
        Category::CompensatoryLeave,
        "08:00",
        "12:00",
        "now leave",
    )
    .unwrap();
    store.replace(&a.id, &moved).unwrap();

    let listed = store.list().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].category, Category::CompensatoryLeave);
    assert_eq!(listed[0].hours.to_string(), "-4.00");
    assert_eq!(listed[0].id, a.id);

    let removed = store.delete(&a.id).unwrap();
    assert_eq!(removed.note, "now leave");
    assert!(store.list().unwrap().is_empty());
    assert!(matches!(
        store.delete(&a.id).unwrap_err(),
        AppError::RowNotFound(_)
    ));
}

#[test]
fn test_tab_without_id_column_is_upgraded() {
    let dir = TempDir::new().unwrap();
    let wb_dir = dir.path().join("workbook");
    fs::create_dir_all(&wb_dir).unwrap();
    fs::write(
        wb_dir.join("Overtime.csv"),
        "Date,Type,Hours(+/-),Note\n2025-02-01,Overuren,2.5,old row\n",
    )
    .unwrap();

    let store = open(dir.path());
    let listed = store.list().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].category, Category::Overtime);
    assert_eq!(listed[0].hours.to_string(), "2.50");
    assert!(!listed[0].id.as_str().is_empty());

    // the assigned id is persisted: reopening yields the same one
    let again = open(dir.path()).list().unwrap();
    assert_eq!(again[0].id, listed[0].id);
}

#[test]
fn test_failed_move_keeps_entry_in_old_tab() {
    let mut store = SheetEntryStore::new(
        MemoryTab::new("Overtime", false),
        MemoryTab::new("CompensatoryLeave", true),
        "memory".into(),
    )
    .unwrap();

    let a = entry(10, Category::Overtime, "08:00", "12:00");
    store.append(&a).unwrap();

    let moved = Entry::with_id(
        a.id.clone(),
        a.date,
        Category::CompensatoryLeave,
        "08:00",
        "12:00",
        "",
    )
    .unwrap();
    let err = store.replace(&a.id, &moved).unwrap_err();
    assert!(matches!(err, AppError::StoreUnavailable(_)));

    let listed = store.list().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, a.id);
    assert_eq!(listed[0].category, Category::Overtime);
    assert_eq!(listed[0].hours.to_string(), "4.00");
}
