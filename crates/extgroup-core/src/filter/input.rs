/// Raw, user-supplied filter values and their lenient conversion into
/// [`ScanFilters`].
///
/// Bad input never aborts a run: the offending filter is disabled and a
/// [`FilterWarning`] is returned alongside the filters that did parse.
use crate::error::FilterWarning;
use crate::filter::ScanFilters;
use chrono::NaiveDate;
use tracing::{debug, warn};

/// Accepted date spellings, tried in order.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d.%m.%Y"];

/// Filter values as typed by a user. Blank strings mean "not set".
#[derive(Debug, Clone, Default)]
pub struct FilterInput {
    pub min_size: Option<String>,
    pub modified_after: Option<String>,
    pub extension: Option<String>,
}

impl FilterInput {
    pub fn parse(&self) -> (ScanFilters, Vec<FilterWarning>) {
        let mut filters = ScanFilters::none();
        let mut warnings = Vec::new();

        if let Some(raw) = non_blank(&self.min_size) {
            match raw.parse::<u64>() {
                Ok(bytes) => filters.min_size = Some(bytes),
                Err(_) => {
                    warn!("Ignoring minimum size filter: cannot parse '{raw}'");
                    warnings.push(FilterWarning::InvalidMinSize(raw.to_string()));
                }
            }
        }

        if let Some(raw) = non_blank(&self.modified_after) {
            match parse_date(raw) {
                Some(date) => filters.modified_after = Some(date),
                None => {
                    warn!("Ignoring modified-after filter: cannot parse '{raw}'");
                    warnings.push(FilterWarning::InvalidDate(raw.to_string()));
                }
            }
        }

        if let Some(raw) = non_blank(&self.extension) {
            filters.extension = Some(normalise_extension(raw));
        }

        debug!(?filters, "Parsed filter input");
        (filters, warnings)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Parse `YYYY-MM-DD` or `DD.MM.YYYY`.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw.trim(), fmt).ok())
}

/// Extension keys always start with `.`; add it when the user left it off.
fn normalise_extension(raw: &str) -> String {
    if raw.starts_with('.') {
        raw.to_string()
    } else {
        format!(".{raw}")
    }
}
