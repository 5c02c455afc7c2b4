use chrono::{DateTime, Days, FixedOffset, NaiveDate, TimeZone, Utc};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::{
    admin::{AdminConfigError, ModelAdmin},
    jalali::{JalaliDate, JalaliError},
};

#[derive(Debug, Clone, Copy, Default, Deserialize, ToSchema)]
pub struct Pagination {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl Pagination {
    pub fn normalize(&self, default_per_page: i64) -> (i64, i64, i64) {
        let page = self.page.unwrap_or(1).max(1);
        let per_page = self.per_page.unwrap_or(default_per_page).clamp(1, 100);
        let offset = (page - 1).saturating_mul(per_page);
        (page, per_page, offset)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProductSortBy {
    CreatedAt,
    Price,
    Name,
    IsActive,
}

impl ProductSortBy {
    pub fn from_field(field: &str) -> Option<Self> {
        match field {
            "created_at" => Some(ProductSortBy::CreatedAt),
            "price" => Some(ProductSortBy::Price),
            "name" => Some(ProductSortBy::Name),
            "is_active" => Some(ProductSortBy::IsActive),
            _ => None,
        }
    }
}

/// Date filter choices for `created_at`. Month and year follow the Jalali
/// calendar in the display offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CreatedAtFilter {
    Today,
    #[serde(rename = "past_7_days")]
    Past7Days,
    ThisMonth,
    ThisYear,
    HasDate,
    NoDate,
}

impl CreatedAtFilter {
    pub const ALL: [CreatedAtFilter; 6] = [
        CreatedAtFilter::Today,
        CreatedAtFilter::Past7Days,
        CreatedAtFilter::ThisMonth,
        CreatedAtFilter::ThisYear,
        CreatedAtFilter::HasDate,
        CreatedAtFilter::NoDate,
    ];

    /// Query string value of the choice.
    pub fn as_str(self) -> &'static str {
        match self {
            CreatedAtFilter::Today => "today",
            CreatedAtFilter::Past7Days => "past_7_days",
            CreatedAtFilter::ThisMonth => "this_month",
            CreatedAtFilter::ThisYear => "this_year",
            CreatedAtFilter::HasDate => "has_date",
            CreatedAtFilter::NoDate => "no_date",
        }
    }

    /// Half-open UTC range `[start, end)` selected by the filter, or `None`
    /// when the filter is not a range.
    pub fn range(
        self,
        now: DateTime<Utc>,
        offset: FixedOffset,
    ) -> Result<Option<(DateTime<Utc>, DateTime<Utc>)>, JalaliError> {
        let today = now.with_timezone(&offset).date_naive();
        let tomorrow = today
            .checked_add_days(Days::new(1))
            .ok_or(JalaliError::OutOfRange)?;

        let (start, end) = match self {
            CreatedAtFilter::Today => (today, tomorrow),
            CreatedAtFilter::Past7Days => (
                today
                    .checked_sub_days(Days::new(7))
                    .ok_or(JalaliError::OutOfRange)?,
                tomorrow,
            ),
            CreatedAtFilter::ThisMonth => {
                let j = JalaliDate::from_gregorian(today);
                let first = JalaliDate::new(j.year(), j.month(), 1)?;
                let next = if j.month() == 12 {
                    JalaliDate::new(j.year() + 1, 1, 1)?
                } else {
                    JalaliDate::new(j.year(), j.month() + 1, 1)?
                };
                (first.to_gregorian()?, next.to_gregorian()?)
            }
            CreatedAtFilter::ThisYear => {
                let j = JalaliDate::from_gregorian(today);
                (
                    JalaliDate::new(j.year(), 1, 1)?.to_gregorian()?,
                    JalaliDate::new(j.year() + 1, 1, 1)?.to_gregorian()?,
                )
            }
            CreatedAtFilter::HasDate | CreatedAtFilter::NoDate => return Ok(None),
        };

        Ok(Some((local_midnight(start, offset)?, local_midnight(end, offset)?)))
    }
}

fn local_midnight(date: NaiveDate, offset: FixedOffset) -> Result<DateTime<Utc>, JalaliError> {
    offset
        .from_local_datetime(&date.and_time(chrono::NaiveTime::MIN))
        .single()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or(JalaliError::OutOfRange)
}

/// Query string of the product changelist.
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductChangeListQuery {
    /// Page number, default 1.
    pub page: Option<i64>,
    /// Items per page, default `list_per_page`.
    pub per_page: Option<i64>,
    /// Case-insensitive search over the search fields.
    pub q: Option<String>,
    pub is_active: Option<bool>,
    pub created_at: Option<CreatedAtFilter>,
    /// A `list_display` column, `-` prefixed for descending.
    pub o: Option<String>,
}

impl ProductChangeListQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination {
            page: self.page,
            per_page: self.per_page,
        }
    }

    pub fn search_term(&self) -> Option<&str> {
        self.q.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    /// Active list filters as `&key=value` pairs, appended to sort links.
    pub fn filter_params(&self) -> String {
        let mut params = String::new();
        if let Some(is_active) = self.is_active {
            params.push_str(&format!("&is_active={is_active}"));
        }
        if let Some(created_at) = self.created_at {
            params.push_str(&format!("&created_at={}", created_at.as_str()));
        }
        params
    }

    /// Resolves `o` through the admin columns; falls back to the admin's
    /// default ordering.
    pub fn ordering(
        &self,
        admin: &ModelAdmin,
    ) -> Result<Vec<(ProductSortBy, SortOrder)>, AdminConfigError> {
        match self.o.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => {
                let (column, order) = split_direction(raw);
                let field = admin.order_field_for(column)?;
                let sort_by = ProductSortBy::from_field(field)
                    .ok_or_else(|| AdminConfigError::UnsortableColumn(column.to_string()))?;
                Ok(vec![(sort_by, order)])
            }
            None => admin
                .ordering
                .iter()
                .map(|entry| {
                    let (field, order) = split_direction(entry);
                    ProductSortBy::from_field(field)
                        .map(|sort_by| (sort_by, order))
                        .ok_or_else(|| AdminConfigError::UnsortableColumn(field.to_string()))
                })
                .collect(),
        }
    }
}

fn split_direction(raw: &str) -> (&str, SortOrder) {
    match raw.strip_prefix('-') {
        Some(rest) => (rest, SortOrder::Desc),
        None => (raw, SortOrder::Asc),
    }
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RecentActionsQuery {
    /// Number of entries, default 10, at most 50.
    pub limit: Option<u64>,
}

impl RecentActionsQuery {
    pub fn limit(&self) -> u64 {
        self.limit.unwrap_or(10).clamp(1, 50)
    }
}
