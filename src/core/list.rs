//! Cached-list controller: filter → sort → paginate over an in-memory copy
//! of a server collection.
//!
//! [`derive_view`] is the pure part and never touches the terminal. A
//! [`ListController`] owns the per-view state (query, filters, sort, page,
//! latest request token) and hands that state to `derive_view` on demand.

use crate::models::attendance::AttendanceRecord;
use crate::models::officer::Officer;
use crate::models::section::SheetRow;
use crate::models::student::Student;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Value a categorical filter uses to mean "no constraint".
pub const ALL: &str = "All";

/// Records that can be driven by a [`ListController`].
pub trait Listable {
    /// Fields searched by the free-text query.
    fn search_fields(&self) -> Vec<&str>;

    /// Named field used for categorical filters and sorting.
    fn field(&self, name: &str) -> Option<&str>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    pub fn flipped(self) -> Self {
        match self {
            SortDir::Asc => SortDir::Desc,
            SortDir::Desc => SortDir::Asc,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortDir::Asc => "▲",
            SortDir::Desc => "▼",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub dir: SortDir,
}

/// Everything `derive_view` needs besides the records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub text: String,
    pub filters: BTreeMap<String, String>,
    pub sort: Option<SortSpec>,
}

/// One derived page.
#[derive(Debug)]
pub struct ListView<'a, T> {
    pub rows: Vec<&'a T>,
    /// 1-based, already clamped.
    pub page: usize,
    pub total_pages: usize,
    /// Number of records matching query and filters.
    pub matched: usize,
    /// 0-based offset of `rows[0]` inside the matched list.
    pub offset: usize,
}

impl<T> ListView<'_, T> {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// "Showing 11-20 of 42", or the empty-state text.
    pub fn summary(&self) -> String {
        if self.matched == 0 {
            return "No records found.".to_string();
        }
        format!(
            "Showing {}-{} of {} (page {}/{})",
            self.offset + 1,
            self.offset + self.rows.len(),
            self.matched,
            self.page,
            self.total_pages
        )
    }
}

/// Number of pages for `count` records, never less than 1.
pub fn page_count(count: usize, page_size: usize) -> usize {
    let size = page_size.max(1);
    count.div_ceil(size).max(1)
}

fn matches<T: Listable>(item: &T, needle: &str, filters: &BTreeMap<String, String>) -> bool {
    for (name, wanted) in filters {
        if wanted.is_empty() || wanted == ALL {
            continue;
        }
        if item.field(name) != Some(wanted.as_str()) {
            return false;
        }
    }

    if needle.is_empty() {
        return true;
    }
    item.search_fields()
        .iter()
        .any(|f| f.to_lowercase().contains(needle))
}

fn compare<T: Listable>(a: &T, b: &T, field: &str) -> Ordering {
    let ka = a.field(field).unwrap_or_default().to_lowercase();
    let kb = b.field(field).unwrap_or_default().to_lowercase();
    ka.cmp(&kb)
}

/// Filter, sort and slice `items`. `page` is 1-based and clamped into
/// `[1, total_pages]`.
pub fn derive_view<'a, T: Listable>(
    items: &'a [T],
    query: &ListQuery,
    page: usize,
    page_size: usize,
) -> ListView<'a, T> {
    let needle = query.text.trim().to_lowercase();
    let mut matched: Vec<&T> = items
        .iter()
        .filter(|it| matches(*it, &needle, &query.filters))
        .collect();

    // sort_by is stable: equal keys keep their cached order in both directions
    if let Some(sort) = &query.sort {
        matched.sort_by(|a, b| {
            let ord = compare(*a, *b, &sort.field);
            match sort.dir {
                SortDir::Asc => ord,
                SortDir::Desc => ord.reverse(),
            }
        });
    }

    let size = page_size.max(1);
    let total_pages = page_count(matched.len(), size);
    let page = page.clamp(1, total_pages);
    let offset = (page - 1) * size;
    let total = matched.len();

    let rows: Vec<&T> = matched.into_iter().skip(offset).take(size).collect();

    ListView {
        rows,
        page,
        total_pages,
        matched: total,
        offset: offset.min(total),
    }
}

/// Token handed out by [`ListController::begin_load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadToken(u64);

/// Per-view list state.
#[derive(Debug)]
pub struct ListController<T> {
    items: Vec<T>,
    query: ListQuery,
    page: usize,
    page_size: usize,
    latest: u64,
}

impl<T: Listable> ListController<T> {
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            query: ListQuery::default(),
            page: 1,
            page_size: page_size.max(1),
            latest: 0,
        }
    }

    /// Start with an ascending sort on `field`.
    pub fn sorted_by(mut self, field: &str) -> Self {
        self.query.sort = Some(SortSpec {
            field: field.to_string(),
            dir: SortDir::Asc,
        });
        self
    }

    /// Issue a new request token. Any earlier token becomes stale.
    pub fn begin_load(&mut self) -> LoadToken {
        self.latest += 1;
        LoadToken(self.latest)
    }

    /// Install the result of a load. Returns `false` (and keeps the current
    /// cache) when `token` is not the latest one issued.
    pub fn finish_load(&mut self, token: LoadToken, items: Vec<T>) -> bool {
        if token.0 != self.latest {
            return false;
        }
        self.items = items;
        self.page = self.page.clamp(1, self.total_pages());
        true
    }

    /// Shorthand for a load that cannot be superseded.
    pub fn load(&mut self, items: Vec<T>) {
        let token = self.begin_load();
        self.finish_load(token, items);
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_query(&mut self, text: &str) {
        self.query.text = text.to_string();
        self.page = 1;
    }

    /// `None`, empty or `All` removes the constraint.
    pub fn set_filter(&mut self, name: &str, value: Option<&str>) {
        match value {
            Some(v) if !v.is_empty() && v != ALL => {
                self.query.filters.insert(name.to_string(), v.to_string());
            }
            _ => {
                self.query.filters.remove(name);
            }
        }
        self.page = 1;
    }

    /// Same field again flips the direction, a new field starts ascending.
    pub fn sort_by(&mut self, field: &str) -> SortDir {
        let dir = match &self.query.sort {
            Some(s) if s.field == field => s.dir.flipped(),
            _ => SortDir::Asc,
        };
        self.query.sort = Some(SortSpec {
            field: field.to_string(),
            dir,
        });
        dir
    }

    pub fn total_pages(&self) -> usize {
        self.view().total_pages
    }

    /// Move to `page`, clamped into the valid range.
    pub fn set_page(&mut self, page: usize) -> usize {
        self.page = page.clamp(1, self.total_pages());
        self.page
    }

    pub fn next_page(&mut self) -> usize {
        self.set_page(self.page + 1)
    }

    pub fn prev_page(&mut self) -> usize {
        self.set_page(self.page.saturating_sub(1))
    }

    pub fn view(&self) -> ListView<'_, T> {
        derive_view(&self.items, &self.query, self.page, self.page_size)
    }
}

// ---------------------------
// Roster types
// ---------------------------

impl Listable for Student {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.last_name, &self.first_name, &self.student_no]
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "student_no" => Some(&self.student_no),
            "first_name" => Some(&self.first_name),
            "middle_name" => Some(&self.middle_name),
            "last_name" => Some(&self.last_name),
            "program" => Some(&self.program),
            "year_level" => Some(&self.year_level),
            "section" => Some(&self.section),
            _ => None,
        }
    }
}

impl Listable for SheetRow {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.last_name, &self.first_name, &self.student_no]
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "student_no" => Some(&self.student_no),
            "first_name" => Some(&self.first_name),
            "last_name" => Some(&self.last_name),
            "status" => Some(&self.status),
            _ => None,
        }
    }
}

impl Listable for Officer {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.username]
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "username" => Some(&self.username),
            "role" => Some(self.role.as_str()),
            "status" => Some(if self.is_active { "active" } else { "inactive" }),
            _ => None,
        }
    }
}

impl Listable for AttendanceRecord {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.last_name, &self.first_name, &self.student_no]
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "student_no" => Some(&self.student_no),
            "last_name" => Some(&self.last_name),
            "program" => Some(&self.program),
            "year_level" => Some(&self.year_level),
            "section" => Some(&self.section),
            "time_in" => Some(&self.time_in),
            _ => None,
        }
    }
}
