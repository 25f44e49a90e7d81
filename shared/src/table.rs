//! Sorting and paging of the dashboard's token list.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::format::{format_date, format_time, serial_number};
use crate::models::{draw_time::minutes_of_day, token_entry::TokenEntry};

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    pub page_size: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    TokenNumber,
    Count,
    Date,
    DrawTime,
}

impl SortField {
    pub fn label(&self) -> &'static str {
        match self {
            SortField::TokenNumber => "Token Number",
            SortField::Count => "Count",
            SortField::Date => "Date",
            SortField::DrawTime => "Draw Time",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Asc => "↑",
            SortDirection::Desc => "↓",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

/// One rendered table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    /// Stable key for the row: backend id, else its position in the fetched list.
    pub key: String,
    pub serial: usize,
    pub token_id: Option<String>,
    pub token_number: String,
    pub count: u64,
    pub date: String,
    pub draw_time: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntryTable {
    entries: Vec<TokenEntry>,
    /// Indices into `entries` in display order.
    order: Vec<usize>,
    sort: Option<SortState>,
    page: usize,
    page_size: usize,
}

impl EntryTable {
    /// Rows start in backend order; nothing is sorted until a header is clicked.
    pub fn new(entries: Vec<TokenEntry>, config: TableConfig) -> Self {
        let mut table = Self {
            order: (0..entries.len()).collect(),
            entries,
            sort: None,
            page: 1,
            page_size: config.page_size.max(1),
        };
        table.apply_sort();
        table
    }

    /// Replaces the whole list, keeping the sort and clamping the page.
    pub fn replace_entries(&mut self, entries: Vec<TokenEntry>) {
        self.order = (0..entries.len()).collect();
        self.entries = entries;
        self.apply_sort();
        self.page = self.page.clamp(1, self.page_count());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn sort(&self) -> Option<SortState> {
        self.sort
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// At least one page, even when empty.
    pub fn page_count(&self) -> usize {
        self.entries.len().div_ceil(self.page_size).max(1)
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.page_count());
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count()
    }

    /// Clicking a header: a new field sorts ascending, the same field flips.
    /// Always returns to the first page.
    pub fn toggle_sort(&mut self, field: SortField) {
        let direction = match self.sort {
            Some(SortState { field: current, direction: SortDirection::Asc }) if current == field => {
                SortDirection::Desc
            }
            _ => SortDirection::Asc,
        };
        self.sort = Some(SortState { field, direction });
        self.order = (0..self.entries.len()).collect();
        self.apply_sort();
        self.page = 1;
    }

    /// `(first, last, total)` row numbers shown on the current page, 1-based.
    pub fn range(&self) -> (usize, usize, usize) {
        let total = self.entries.len();
        if total == 0 {
            return (0, 0, 0);
        }
        let first = (self.page - 1) * self.page_size + 1;
        let last = (self.page * self.page_size).min(total);
        (first, last, total)
    }

    pub fn rows(&self) -> Vec<DisplayRow> {
        let start = (self.page - 1) * self.page_size;
        self.order
            .iter()
            .skip(start)
            .take(self.page_size)
            .enumerate()
            .map(|(index_in_page, &entry_index)| {
                let entry = &self.entries[entry_index];
                DisplayRow {
                    key: entry
                        .token_id
                        .clone()
                        .unwrap_or_else(|| format!("row-{}", entry_index)),
                    serial: serial_number(self.page, self.page_size, index_in_page),
                    token_id: entry.token_id.clone(),
                    token_number: entry.token_number.clone(),
                    count: entry.token_count,
                    date: format_date(&entry.date),
                    draw_time: format_time(&entry.draw_time),
                }
            })
            .collect()
    }

    fn apply_sort(&mut self) {
        let Some(SortState { field, direction }) = self.sort else {
            return;
        };
        let entries = &self.entries;
        self.order.sort_by(|&a, &b| {
            let (a, b) = (&entries[a], &entries[b]);
            match field {
                SortField::TokenNumber => compare_present_first(a.token_value(), b.token_value(), direction),
                SortField::Count => direction.apply(a.token_count.cmp(&b.token_count)),
                SortField::Date => compare_present_first(a.parsed_date(), b.parsed_date(), direction),
                SortField::DrawTime => compare_present_first(
                    a.parsed_draw_time().map(minutes_of_day),
                    b.parsed_draw_time().map(minutes_of_day),
                    direction,
                ),
            }
        });
    }
}

/// Unparseable values always sort after parseable ones.
fn compare_present_first<T: Ord>(a: Option<T>, b: Option<T>, direction: SortDirection) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => direction.apply(a.cmp(&b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
