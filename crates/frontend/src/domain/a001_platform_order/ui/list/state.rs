use crate::shared::date_utils::format_date;
use contracts::domain::a001_platform_order::filter::{Choice, DateRange, FilterCriteria};
use contracts::shared::pagination::PageSize;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

const STORAGE_KEY: &str = "a001_platform_order_list_state_v1";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct PersistedState {
    #[serde(default)]
    pub search_term: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub date_start: String,
    #[serde(default)]
    pub date_end: String,
    #[serde(default)]
    pub page_size: u32,
}

/// One removable active-filter chip
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterChip {
    Search,
    Platform,
    Status,
    DateStart,
    DateEnd,
}

/// Filter inputs of the order list, as typed by the user
#[derive(Clone, Debug, PartialEq)]
pub struct OrderListState {
    // Filters
    pub search_term: String,
    pub platform: Choice,
    pub status: Choice,
    /// `<input type="date">` values, empty when unset
    pub date_start: String,
    pub date_end: String,

    pub page_size: PageSize,
    pub filters_expanded: bool,
}

impl OrderListState {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            search_term: String::new(),
            platform: Choice::All,
            status: Choice::All,
            date_start: String::new(),
            date_end: String::new(),
            page_size,
            filters_expanded: false,
        }
    }

    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            search_term: self.search_term.clone(),
            platform: self.platform.clone(),
            status: self.status.clone(),
            date_range: DateRange::from_inputs(&self.date_start, &self.date_end),
        }
    }

    pub fn clear_filters(&mut self) {
        *self = Self {
            page_size: self.page_size,
            filters_expanded: self.filters_expanded,
            ..Self::new(self.page_size)
        };
    }

    /// Chips for the filters that currently restrict the list
    pub fn chips(&self) -> Vec<(FilterChip, String)> {
        let criteria = self.criteria();
        let mut chips = Vec::new();
        if !criteria.search_term.is_empty() {
            chips.push((FilterChip::Search, format!("Search: \"{}\"", criteria.search_term)));
        }
        if let Choice::Exact(platform) = &criteria.platform {
            chips.push((FilterChip::Platform, format!("Platform: {}", platform)));
        }
        if let Choice::Exact(status) = &criteria.status {
            chips.push((FilterChip::Status, format!("Status: {}", status)));
        }
        if criteria.date_range.start.is_some() {
            chips.push((FilterChip::DateStart, format!("From: {}", format_date(&self.date_start))));
        }
        if criteria.date_range.end.is_some() {
            chips.push((FilterChip::DateEnd, format!("To: {}", format_date(&self.date_end))));
        }
        chips
    }

    pub fn remove_chip(&mut self, chip: FilterChip) {
        match chip {
            FilterChip::Search => self.search_term.clear(),
            FilterChip::Platform => self.platform = Choice::All,
            FilterChip::Status => self.status = Choice::All,
            FilterChip::DateStart => self.date_start.clear(),
            FilterChip::DateEnd => self.date_end.clear(),
        }
    }

    fn to_persisted(&self) -> PersistedState {
        PersistedState {
            search_term: self.search_term.clone(),
            platform: self.platform.as_select_value().to_string(),
            status: self.status.as_select_value().to_string(),
            date_start: self.date_start.clone(),
            date_end: self.date_end.clone(),
            page_size: self.page_size.value(),
        }
    }

    fn apply_persisted(&mut self, p: PersistedState) {
        self.search_term = p.search_term;
        self.platform = Choice::from_select_value(&p.platform);
        self.status = Choice::from_select_value(&p.status);
        self.date_start = p.date_start;
        self.date_end = p.date_end;
        if p.page_size > 0 {
            self.page_size = PageSize::snap(p.page_size);
        }
    }
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn load_persisted() -> Option<PersistedState> {
    let raw = storage()?.get_item(STORAGE_KEY).ok().flatten()?;
    serde_json::from_str::<PersistedState>(&raw).ok()
}

fn save_persisted(st: &PersistedState) {
    let Some(storage) = storage() else { return };
    let Ok(raw) = serde_json::to_string(st) else {
        return;
    };
    let _ = storage.set_item(STORAGE_KEY, &raw);
}

pub fn persist_state(signal: RwSignal<OrderListState>) {
    save_persisted(&signal.get_untracked().to_persisted());
}

/// Restores the saved filters and page size, falling back to `default_page_size`.
pub fn create_state(default_page_size: PageSize) -> RwSignal<OrderListState> {
    let mut st = OrderListState::new(default_page_size);
    if let Some(p) = load_persisted() {
        st.apply_persisted(p);
    }
    RwSignal::new(st)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_criteria_from_inputs() {
        let mut st = OrderListState::new(PageSize::Ten);
        st.search_term = "  shoes ".to_string();
        st.platform = Choice::from_select_value("Amazon");
        st.date_start = "2025-01-01".to_string();

        let criteria = st.criteria();
        assert_eq!(criteria.search_term, "  shoes ");
        assert_eq!(criteria.platform, Choice::Exact("Amazon".to_string()));
        assert!(criteria.status.is_all());
        assert_eq!(criteria.date_range.start, NaiveDate::from_ymd_opt(2025, 1, 1));
        assert_eq!(criteria.date_range.end, None);
        assert_eq!(criteria.active_count(), 3);
    }

    #[test]
    fn test_search_term_is_matched_as_typed() {
        let mut st = OrderListState::new(PageSize::Ten);
        st.search_term = " ".to_string();
        assert_eq!(st.criteria().search_term, " ");
        assert_eq!(st.criteria().active_count(), 1);
    }

    #[test]
    fn test_chips_follow_active_filters() {
        let mut st = OrderListState::new(PageSize::Ten);
        assert!(st.chips().is_empty());

        st.search_term = "shoes".to_string();
        st.status = Choice::Exact("Pending".to_string());
        st.date_end = "2025-01-20".to_string();
        st.date_start = "not a date".to_string();

        let labels: Vec<String> = st.chips().into_iter().map(|(_, label)| label).collect();
        assert_eq!(
            labels,
            vec![
                "Search: \"shoes\"".to_string(),
                "Status: Pending".to_string(),
                "To: 20 Jan 2025".to_string(),
            ]
        );
        assert_eq!(st.chips().len(), st.criteria().active_count());

        st.remove_chip(FilterChip::Status);
        st.remove_chip(FilterChip::Search);
        assert_eq!(st.chips().len(), 1);
        assert!(st.status.is_all());
    }

    #[test]
    fn test_clear_filters_keeps_page_size() {
        let mut st = OrderListState::new(PageSize::Fifty);
        st.status = Choice::Exact("Pending".to_string());
        st.date_end = "2025-02-01".to_string();
        st.filters_expanded = true;

        st.clear_filters();

        assert!(st.criteria().is_neutral());
        assert_eq!(st.page_size, PageSize::Fifty);
        assert!(st.filters_expanded);
    }

    #[test]
    fn test_persisted_state_round_trip() {
        let mut st = OrderListState::new(PageSize::Ten);
        st.status = Choice::Exact("Delivered".to_string());
        st.page_size = PageSize::TwentyFive;

        let raw = serde_json::to_string(&st.to_persisted()).unwrap();
        let mut restored = OrderListState::new(PageSize::Ten);
        restored.apply_persisted(serde_json::from_str(&raw).unwrap());

        assert_eq!(restored, st);
    }

    #[test]
    fn test_persisted_page_size_snaps() {
        let mut st = OrderListState::new(PageSize::Ten);
        st.apply_persisted(serde_json::from_str(r#"{"platform": "All", "page_size": 40}"#).unwrap());
        assert_eq!(st.page_size, PageSize::Fifty);
        assert!(st.platform.is_all());

        // старый формат без размера страницы
        let mut st = OrderListState::new(PageSize::Hundred);
        st.apply_persisted(serde_json::from_str(r#"{"search_term": "AMZ"}"#).unwrap());
        assert_eq!(st.page_size, PageSize::Hundred);
        assert_eq!(st.search_term, "AMZ");
    }
}
