//! Spreadsheet variant: one tab per category, rows addressed by sheet row.
//!
//! [`SheetTab`] is the surface of the remote spreadsheet API. The crate
//! ships [`LocalTab`], a workbook kept as one CSV file per tab.

use super::csv_table::{read_raw, write_raw};
use super::layout::RowLayout;
use super::migrate::fill_missing_ids;
use super::{EntryStore, Row, RowStore, TableAdapter};
use crate::errors::{AppError, AppResult};
use crate::models::category::Category;
use crate::models::entry::{Entry, EntryId};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Sheet row (1-based) holding data position 0; row 1 is the header.
pub const FIRST_DATA_ROW: usize = 2;

/// Row-level API of one spreadsheet tab. Rows are 1-based, header included.
pub trait SheetTab {
    fn title(&self) -> &str;
    fn get_all_values(&self) -> AppResult<Vec<Row>>;
    fn append_row(&mut self, values: Row) -> AppResult<()>;
    fn update_row(&mut self, sheet_row: usize, values: Row) -> AppResult<()>;
    fn delete_row(&mut self, sheet_row: usize) -> AppResult<()>;
}

/// [`RowStore`] view of a tab: data position `i` is sheet row `i + 2`.
pub struct TabRows<T> {
    tab: T,
}

impl<T: SheetTab> TabRows<T> {
    pub fn new(tab: T) -> Self {
        Self { tab }
    }

    pub fn tab(&self) -> &T {
        &self.tab
    }

    fn sheet_row(&self, position: usize) -> AppResult<usize> {
        let len = self.read_all()?.len();
        if position >= len {
            return Err(AppError::RowNotFound(format!(
                "position {} in tab '{}' ({} rows)",
                position,
                self.tab.title(),
                len
            )));
        }
        Ok(position + FIRST_DATA_ROW)
    }
}

impl<T: SheetTab> RowStore for TabRows<T> {
    fn read_all(&self) -> AppResult<Vec<Row>> {
        Ok(self
            .tab
            .get_all_values()?
            .into_iter()
            .skip(FIRST_DATA_ROW - 1)
            .collect())
    }

    fn append_row(&mut self, row: Row) -> AppResult<()> {
        self.tab.append_row(row)
    }

    fn update_row(&mut self, position: usize, row: Row) -> AppResult<()> {
        let r = self.sheet_row(position)?;
        self.tab.update_row(r, row)
    }

    fn delete_row(&mut self, position: usize) -> AppResult<()> {
        let r = self.sheet_row(position)?;
        self.tab.delete_row(r)
    }
}

#[derive(Debug, Deserialize)]
struct ServiceCredentials {
    client_email: String,
}

/// Authenticated session, established once per process.
#[derive(Debug, Clone)]
pub struct SheetSession {
    client_email: String,
}

impl SheetSession {
    /// Load the service credential file. A missing or unreadable file is
    /// fatal for the sheet backend.
    pub fn establish(credentials: &Path) -> AppResult<Self> {
        let missing = |why: String| {
            AppError::MissingCredentials(format!("{}: {}", credentials.display(), why))
        };

        if !credentials.exists() {
            return Err(missing("file not found".into()));
        }

        let content = fs::read_to_string(credentials).map_err(|e| missing(e.to_string()))?;
        let creds: ServiceCredentials =
            serde_json::from_str(&content).map_err(|e| missing(e.to_string()))?;

        if creds.client_email.trim().is_empty() {
            return Err(missing("empty client_email".into()));
        }

        info!(account = %creds.client_email, "spreadsheet session established");
        Ok(Self {
            client_email: creds.client_email,
        })
    }

    pub fn client_email(&self) -> &str {
        &self.client_email
    }
}

/// Workbook stored as a directory of per-tab CSV files.
pub struct Workbook {
    dir: PathBuf,
    account: String,
}

impl Workbook {
    pub fn open(session: &SheetSession, dir: &Path) -> AppResult<Self> {
        fs::create_dir_all(dir)
            .map_err(|e| AppError::StoreUnavailable(format!("{}: {}", dir.display(), e)))?;

        Ok(Self {
            dir: dir.to_path_buf(),
            account: session.client_email().to_string(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    pub fn tab_path(&self, category: Category) -> PathBuf {
        self.dir.join(format!("{}.csv", category.as_str()))
    }

    pub fn tab(&self, category: Category) -> AppResult<LocalTab> {
        LocalTab::open(category.as_str(), &self.tab_path(category))
    }

    /// Tab files currently present on disk.
    pub fn tab_files(&self) -> Vec<PathBuf> {
        Category::ALL
            .iter()
            .map(|c| self.tab_path(*c))
            .filter(|p| p.exists())
            .collect()
    }
}

/// One tab of a [`Workbook`].
pub struct LocalTab {
    title: String,
    path: PathBuf,
}

impl LocalTab {
    /// Open a tab file, creating it with the header when missing. A tab
    /// written before ids existed gets the `Id` column added to its header.
    pub fn open(title: &str, path: &Path) -> AppResult<Self> {
        let header = RowLayout::Tab.header();
        match read_raw(path)? {
            None => write_raw(path, &header, &[])?,
            Some((old, rows)) if old.len() < header.len() => {
                info!(tab = title, "adding Id column to tab header");
                write_raw(path, &header, &rows)?;
            }
            Some(_) => {}
        }

        Ok(Self {
            title: title.to_string(),
            path: path.to_path_buf(),
        })
    }

    fn save(&self, all: &[Row]) -> AppResult<()> {
        let header = all.first().cloned().unwrap_or_else(|| RowLayout::Tab.header());
        let data = all.get(1..).unwrap_or(&[]);
        write_raw(&self.path, &header, data)
    }

    fn index_of(&self, sheet_row: usize, len: usize) -> AppResult<usize> {
        if sheet_row < FIRST_DATA_ROW || sheet_row > len {
            return Err(AppError::RowNotFound(format!(
                "sheet row {} in tab '{}'",
                sheet_row, self.title
            )));
        }
        Ok(sheet_row - 1)
    }
}

impl SheetTab for LocalTab {
    fn title(&self) -> &str {
        &self.title
    }

    fn get_all_values(&self) -> AppResult<Vec<Row>> {
        Ok(match read_raw(&self.path)? {
            Some((header, rows)) => std::iter::once(header).chain(rows).collect(),
            None => vec![RowLayout::Tab.header()],
        })
    }

    fn append_row(&mut self, values: Row) -> AppResult<()> {
        let mut all = self.get_all_values()?;
        all.push(values);
        self.save(&all)
    }

    fn update_row(&mut self, sheet_row: usize, values: Row) -> AppResult<()> {
        let mut all = self.get_all_values()?;
        let idx = self.index_of(sheet_row, all.len())?;
        all[idx] = values;
        self.save(&all)
    }

    fn delete_row(&mut self, sheet_row: usize) -> AppResult<()> {
        let mut all = self.get_all_values()?;
        let idx = self.index_of(sheet_row, all.len())?;
        all.remove(idx);
        self.save(&all)
    }
}

/// Entry store over two tabs, one adapter per category.
pub struct SheetEntryStore<T> {
    overtime: TableAdapter<TabRows<T>>,
    leave: TableAdapter<TabRows<T>>,
    location: String,
}

impl SheetEntryStore<LocalTab> {
    pub fn from_workbook(wb: &Workbook) -> AppResult<Self> {
        Self::new(
            wb.tab(Category::Overtime)?,
            wb.tab(Category::CompensatoryLeave)?,
            format!("{} ({})", wb.dir().display(), wb.account()),
        )
    }
}

impl<T: SheetTab> SheetEntryStore<T> {
    pub fn new(overtime_tab: T, leave_tab: T, location: String) -> AppResult<Self> {
        let id_col = RowLayout::Tab.id_column();

        let mut overtime = TabRows::new(overtime_tab);
        fill_missing_ids(&mut overtime, id_col)?;
        let mut leave = TabRows::new(leave_tab);
        fill_missing_ids(&mut leave, id_col)?;

        Ok(Self {
            overtime: TableAdapter::new(overtime, RowLayout::Tab, Some(Category::Overtime)),
            leave: TableAdapter::new(
                leave,
                RowLayout::Tab,
                Some(Category::CompensatoryLeave),
            ),
            location,
        })
    }

    fn adapter(&self, category: Category) -> &TableAdapter<TabRows<T>> {
        match category {
            Category::Overtime => &self.overtime,
            Category::CompensatoryLeave => &self.leave,
        }
    }

    fn adapter_mut(&mut self, category: Category) -> &mut TableAdapter<TabRows<T>> {
        match category {
            Category::Overtime => &mut self.overtime,
            Category::CompensatoryLeave => &mut self.leave,
        }
    }

    /// Tab, position and current content of the entry carrying `id`.
    fn find(&self, id: &EntryId) -> AppResult<(Category, usize, Entry)> {
        for category in Category::ALL {
            if let Some((pos, e)) = self
                .adapter(category)
                .positioned()?
                .into_iter()
                .find(|(_, e)| &e.id == id)
            {
                return Ok((category, pos, e));
            }
        }
        Err(AppError::RowNotFound(format!("no entry with id '{}'", id)))
    }
}

impl<T: SheetTab> EntryStore for SheetEntryStore<T> {
    fn list(&self) -> AppResult<Vec<Entry>> {
        let mut all = self.overtime.entries()?;
        all.extend(self.leave.entries()?);
        Ok(all)
    }

    fn append(&mut self, entry: &Entry) -> AppResult<()> {
        self.adapter_mut(entry.category).append(entry)?;
        info!(id = %entry.id, tab = entry.category.as_str(), "row appended");
        Ok(())
    }

    fn replace(&mut self, id: &EntryId, entry: &Entry) -> AppResult<()> {
        let (category, pos, _) = self.find(id)?;

        if category == entry.category {
            self.adapter_mut(category).replace_at(pos, entry)?;
        } else {
            // category changed: the row moves to the other tab. Append
            // first so a failed write leaves the entry in its old tab.
            self.adapter_mut(entry.category).append(entry)?;
            self.adapter_mut(category).delete_at(pos)?;
        }

        info!(%id, from = category.as_str(), to = entry.category.as_str(), "row replaced");
        Ok(())
    }

    fn delete(&mut self, id: &EntryId) -> AppResult<Entry> {
        let (category, pos, entry) = self.find(id)?;
        self.adapter_mut(category).delete_at(pos)?;
        info!(%id, tab = category.as_str(), "row deleted");
        Ok(entry)
    }

    fn location(&self) -> String {
        self.location.clone()
    }
}
