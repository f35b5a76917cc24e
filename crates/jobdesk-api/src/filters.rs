//! Filter values for the job list and their query-string form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Sort keys understood by `GET /jobs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    #[default]
    PostingDateDesc,
    PostingDateAsc,
    TitleAsc,
    CompanyAsc,
}

impl SortOrder {
    pub const ALL: [SortOrder; 4] = [
        SortOrder::PostingDateDesc,
        SortOrder::PostingDateAsc,
        SortOrder::TitleAsc,
        SortOrder::CompanyAsc,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::PostingDateDesc => "posting_date_desc",
            SortOrder::PostingDateAsc => "posting_date_asc",
            SortOrder::TitleAsc => "title_asc",
            SortOrder::CompanyAsc => "company_asc",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::PostingDateDesc => "Newest First",
            SortOrder::PostingDateAsc => "Oldest First",
            SortOrder::TitleAsc => "Title A-Z",
            SortOrder::CompanyAsc => "Company A-Z",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOrder::ALL
            .into_iter()
            .find(|o| o.as_str() == s)
            .ok_or_else(|| format!("unknown sort order: {s}"))
    }
}

/// One of the five filter inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Search,
    JobType,
    Location,
    Tag,
    Sort,
}

impl FilterField {
    pub const ALL: [FilterField; 5] = [
        FilterField::Search,
        FilterField::JobType,
        FilterField::Location,
        FilterField::Tag,
        FilterField::Sort,
    ];

    /// Query parameter (and form field) name.
    pub fn name(self) -> &'static str {
        match self {
            FilterField::Search => "search",
            FilterField::JobType => "job_type",
            FilterField::Location => "location",
            FilterField::Tag => "tag",
            FilterField::Sort => "sort",
        }
    }

    /// Label used in the active-filter summary.
    pub fn label(self) -> &'static str {
        match self {
            FilterField::Search => "Search",
            FilterField::JobType => "Type",
            FilterField::Location => "Location",
            FilterField::Tag => "Tag",
            FilterField::Sort => "Sort",
        }
    }
}

impl FromStr for FilterField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterField::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| format!("unknown filter field: {s}"))
    }
}

/// Current search, filter and sort values.
///
/// Every field is a plain string; an empty string means "not filtering on
/// this". The default sorts newest first and filters nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    pub search: String,
    pub job_type: String,
    pub location: String,
    pub tag: String,
    pub sort: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search: String::new(),
            job_type: String::new(),
            location: String::new(),
            tag: String::new(),
            sort: SortOrder::default().as_str().to_string(),
        }
    }
}

impl FilterState {
    /// A state with every field empty, `sort` included. Serializes to no
    /// query parameters at all.
    pub fn unfiltered() -> Self {
        Self {
            sort: String::new(),
            ..Self::default()
        }
    }

    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::Search => &self.search,
            FilterField::JobType => &self.job_type,
            FilterField::Location => &self.location,
            FilterField::Tag => &self.tag,
            FilterField::Sort => &self.sort,
        }
    }

    pub fn get_mut(&mut self, field: FilterField) -> &mut String {
        match field {
            FilterField::Search => &mut self.search,
            FilterField::JobType => &mut self.job_type,
            FilterField::Location => &mut self.location,
            FilterField::Tag => &mut self.tag,
            FilterField::Sort => &mut self.sort,
        }
    }

    /// Recognized sort key, if `sort` holds one.
    pub fn sort_order(&self) -> Option<SortOrder> {
        self.sort.parse().ok()
    }

    /// Number of non-empty fields, not counting `sort`.
    pub fn active_filter_count(&self) -> usize {
        FilterField::ALL
            .into_iter()
            .filter(|f| *f != FilterField::Sort && !self.get(*f).is_empty())
            .count()
    }

    /// Query parameters for `GET /jobs`, skipping empty fields.
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        FilterField::ALL
            .into_iter()
            .map(|f| (f.name(), self.get(f)))
            .filter(|(_, value)| !value.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn default_counts_no_active_filters() {
        let state = FilterState::default();
        assert_eq!(state.sort, "posting_date_desc");
        assert_eq!(state.active_filter_count(), 0);
        assert_eq!(state.query_pairs(), vec![("sort", "posting_date_desc")]);
    }

    #[test]
    fn unfiltered_has_no_query() {
        assert!(FilterState::unfiltered().query_pairs().is_empty());
    }

    #[test]
    fn sort_is_never_counted() {
        let state = FilterState {
            sort: "title_asc".to_string(),
            tag: "Python".to_string(),
            location: "Remote".to_string(),
            ..FilterState::default()
        };
        assert_eq!(state.active_filter_count(), 2);
        assert_eq!(state.sort_order(), Some(SortOrder::TitleAsc));
        assert_eq!(
            state.query_pairs(),
            vec![("location", "Remote"), ("tag", "Python"), ("sort", "title_asc")]
        );
    }

    #[test]
    fn field_names_round_trip() {
        for field in FilterField::ALL {
            assert_eq!(field.name().parse::<FilterField>(), Ok(field));
        }
        assert!("page".parse::<FilterField>().is_err());
    }

    fn field_value() -> impl Strategy<Value = String> {
        prop_oneof![Just(String::new()), "[a-zA-Z ,-]{1,12}"]
    }

    proptest! {
        // A field appears in the query exactly when its value is non-empty
        #[test]
        fn query_omits_exactly_empty_fields(
            search in field_value(),
            job_type in field_value(),
            location in field_value(),
            tag in field_value(),
            sort in field_value(),
        ) {
            let state = FilterState { search, job_type, location, tag, sort };
            let pairs = state.query_pairs();

            for field in FilterField::ALL {
                let present = pairs.iter().find(|(name, _)| *name == field.name());
                if state.get(field).is_empty() {
                    prop_assert!(present.is_none(), "{} should be omitted", field.name());
                } else {
                    prop_assert_eq!(present.map(|(_, v)| *v), Some(state.get(field)));
                }
            }
        }

        // The count ignores sort and matches the non-empty filter fields
        #[test]
        fn count_matches_non_empty_filters(
            search in field_value(),
            tag in field_value(),
            sort in field_value(),
        ) {
            let state = FilterState { search, tag, sort, ..FilterState::unfiltered() };
            let expected = [&state.search, &state.tag].iter().filter(|v| !v.is_empty()).count();
            prop_assert_eq!(state.active_filter_count(), expected);
        }
    }
}
