//! Pagination guard for the restaurant list.

use std::num::IntErrorKind;

use super::FieldErrors;
use crate::models::restaurant::RestaurantQuery;
use crate::repos::{PageRequest, SortBy, SortDirection};

pub const ALLOWED_PAGE_SIZES: [u32; 3] = [5, 10, 15];
pub const SORTABLE_COLUMNS: [SortBy; 3] = SortBy::ALL;

fn present(raw: &Option<String>) -> Option<&str> {
    raw.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Integer value of a parameter. Digit strings too long for `i128` are
/// still integers and saturate.
fn parse_int(raw: &str) -> Option<i128> {
    match raw.parse::<i128>() {
        Ok(n) => Some(n),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i128::MAX),
            IntErrorKind::NegOverflow => Some(i128::MIN),
            _ => None,
        },
    }
}

/// Validate list-query parameters. Nothing is clamped or defaulted: a
/// missing size or number is an error like any other.
pub fn validate_restaurant_query(query: &RestaurantQuery) -> Result<PageRequest, FieldErrors> {
    let mut errors = FieldErrors::new();

    let page_size = match present(&query.page_size).map(parse_int) {
        None => {
            errors.add("pageSize", "'pageSize' is required");
            None
        }
        Some(None) => {
            errors.add("pageSize", "'pageSize' must be an integer");
            None
        }
        Some(Some(n)) => match u32::try_from(n) {
            Ok(size) if ALLOWED_PAGE_SIZES.contains(&size) => Some(size),
            _ => {
                errors.add("pageSize", "'pageSize' must be one of [5, 10, 15]");
                None
            }
        },
    };

    let page_number = match present(&query.page_number).map(parse_int) {
        None => {
            errors.add("pageNumber", "'pageNumber' is required");
            None
        }
        Some(None) => {
            errors.add("pageNumber", "'pageNumber' must be an integer");
            None
        }
        Some(Some(n)) if n < 1 => {
            errors.add("pageNumber", "'pageNumber' must be greater than or equal to 1");
            None
        }
        Some(Some(n)) => match u32::try_from(n) {
            Ok(n) => Some(n),
            Err(_) => {
                errors.add(
                    "pageNumber",
                    format!("'pageNumber' must be less than or equal to {}", u32::MAX),
                );
                None
            }
        },
    };

    let sort_by = match present(&query.sort_by) {
        None => None,
        Some(raw) => match raw.parse::<SortBy>() {
            Ok(column) => Some(column),
            Err(()) => {
                let allowed: Vec<&str> = SORTABLE_COLUMNS.iter().map(SortBy::as_str).collect();
                errors.add(
                    "sortBy",
                    format!("'sortBy' must be one of [{}]", allowed.join(", ")),
                );
                None
            }
        },
    };

    let direction = match present(&query.sort_direction) {
        None => SortDirection::default(),
        Some(raw) => raw.parse().unwrap_or_else(|()| {
            errors.add("sortDirection", "'sortDirection' must be ASC or DESC");
            SortDirection::default()
        }),
    };

    match (page_size, page_number) {
        (Some(page_size), Some(page_number)) if errors.is_empty() => Ok(PageRequest {
            page_number,
            page_size,
            search_phrase: query.search_phrase.clone(),
            sort: sort_by.map(|column| (column, direction)),
        }),
        _ => Err(errors),
    }
}
