//! Table view state
//!
//! Sort key/direction plus page/limit, and the derivation of the visible
//! page from the store's collection.

use super::location::{History, query_param, set_query_params};
use serde::{Deserialize, Serialize};
use shared::models::{Employee, EmployeeId};
use shared::{AppError, PaginatedResponse};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_PAGE: u32 = 1;

/// Page size used to locate a freshly added record
pub const DEFAULT_LIMIT: u32 = 5;

/// Sortable column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Name,
    Address,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Address => "address",
        }
    }

    fn value<'a>(&self, employee: &'a Employee) -> &'a str {
        match self {
            Self::Name => &employee.name,
            Self::Address => &employee.address,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "address" => Ok(Self::Address),
            _ => Err(AppError::invalid_request(format!(
                "Cannot sort by '{s}' (expected name or address)"
            ))),
        }
    }
}

/// Allowed rows-per-page values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PageLimit {
    #[default]
    Five,
    Ten,
    Twenty,
    Fifty,
}

impl PageLimit {
    pub const ALL: [PageLimit; 4] = [
        PageLimit::Five,
        PageLimit::Ten,
        PageLimit::Twenty,
        PageLimit::Fifty,
    ];

    pub fn get(self) -> u32 {
        match self {
            Self::Five => 5,
            Self::Ten => 10,
            Self::Twenty => 20,
            Self::Fifty => 50,
        }
    }

    /// Next larger size, saturating at 50
    pub fn next(self) -> Self {
        match self {
            Self::Five => Self::Ten,
            Self::Ten => Self::Twenty,
            Self::Twenty | Self::Fifty => Self::Fifty,
        }
    }

    /// Next smaller size, saturating at 5
    pub fn prev(self) -> Self {
        match self {
            Self::Five | Self::Ten => Self::Five,
            Self::Twenty => Self::Ten,
            Self::Fifty => Self::Twenty,
        }
    }
}

impl fmt::Display for PageLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

impl TryFrom<u32> for PageLimit {
    type Error = AppError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|l| l.get() == value)
            .ok_or_else(|| {
                AppError::out_of_range("Rows per page must be one of 5, 10, 20, 50")
                    .with_detail("limit", value)
            })
    }
}

/// Sort + pagination state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    sort: Option<SortKey>,
    ascending: bool,
    page: u32,
    limit: PageLimit,
    /// Record to keep on screen after an insert, until the user pages away
    reveal: Option<EmployeeId>,
}

impl Default for TableView {
    fn default() -> Self {
        Self {
            sort: None,
            ascending: true,
            page: DEFAULT_PAGE,
            limit: PageLimit::default(),
            reveal: None,
        }
    }
}

impl TableView {
    /// Initial state read from a location's `page` / `limit` query parameters.
    /// Missing or unusable values fall back to page 1, limit 5.
    pub fn from_location(location: &str) -> Self {
        let page = query_param(location, "page")
            .and_then(|p| p.trim().parse::<u32>().ok())
            .filter(|p| *p > 0)
            .unwrap_or(DEFAULT_PAGE);
        let limit = query_param(location, "limit")
            .and_then(|l| l.trim().parse::<u32>().ok())
            .and_then(|l| PageLimit::try_from(l).ok())
            .unwrap_or_default();

        Self {
            page,
            limit,
            ..Self::default()
        }
    }

    pub fn sort_key(&self) -> Option<SortKey> {
        self.sort
    }

    pub fn ascending(&self) -> bool {
        self.ascending
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> PageLimit {
        self.limit
    }

    pub fn reveal_target(&self) -> Option<EmployeeId> {
        self.reveal
    }

    /// `Some(ascending)` for the active sort column, `None` otherwise
    pub fn sort_direction(&self, key: SortKey) -> Option<bool> {
        (self.sort == Some(key)).then_some(self.ascending)
    }

    /// Same key flips direction; a new key starts ascending
    pub fn toggle_sort(&mut self, key: SortKey) {
        if self.sort == Some(key) {
            self.ascending = !self.ascending;
        } else {
            self.sort = Some(key);
            self.ascending = true;
        }
    }

    /// Explicit page change: drops any pending reveal and pushes the location
    pub fn set_page(&mut self, page: u32, history: &mut impl History) {
        self.reveal = None;
        self.page = page.max(1);
        self.sync_location(history);
    }

    /// Change rows per page, back to page 1, and push the location.
    /// A pending reveal is kept, so the next `follow_reveal` may move off page 1.
    pub fn set_limit(&mut self, limit: PageLimit, history: &mut impl History) {
        self.limit = limit;
        self.page = DEFAULT_PAGE;
        self.sync_location(history);
    }

    /// Collection in display order. Stable: ties keep insertion order.
    pub fn sorted<'a>(&self, employees: &'a [Employee]) -> Vec<&'a Employee> {
        let mut rows: Vec<&Employee> = employees.iter().collect();
        if let Some(key) = self.sort {
            let ascending = self.ascending;
            rows.sort_by(|a, b| {
                let ord = compare_ignore_case(key.value(a), key.value(b));
                if ascending { ord } else { ord.reverse() }
            });
        }
        rows
    }

    /// The visible page
    pub fn paginate<'a>(&self, employees: &'a [Employee]) -> PaginatedResponse<&'a Employee> {
        PaginatedResponse::from_slice(&self.sorted(employees), self.page, self.limit.get())
    }

    /// Keep `id` on screen until the next explicit page change
    pub fn reveal(&mut self, id: EmployeeId) {
        self.reveal = Some(id);
    }

    /// Move to the page holding the reveal target, computed with
    /// [`DEFAULT_LIMIT`]. Returns whether the page changed.
    pub fn follow_reveal(&mut self, employees: &[Employee], history: &mut impl History) -> bool {
        let Some(id) = self.reveal else {
            return false;
        };
        let Some(idx) = self.sorted(employees).iter().position(|e| e.id == id) else {
            return false;
        };
        let target = idx as u32 / DEFAULT_LIMIT + 1;
        if target == self.page {
            return false;
        }
        tracing::debug!(id, from = self.page, to = target, "revealing new employee");
        self.page = target;
        self.sync_location(history);
        true
    }

    fn sync_location(&self, history: &mut impl History) {
        let location = set_query_params(
            history.location(),
            &[
                ("page", self.page.to_string()),
                ("limit", self.limit.get().to_string()),
            ],
        );
        history.push(location);
    }
}

fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
