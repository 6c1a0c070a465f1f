//! Restaurant domain model and list-query types.

use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
pub struct Restaurant {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub has_delivery: bool,
    pub contact_email: Option<String>,
    pub contact_number: Option<String>,
    pub city: String,
    pub street: String,
    pub postal_code: Option<String>,
    pub created_by_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewRestaurant {
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub has_delivery: bool,
    pub contact_email: Option<String>,
    pub contact_number: Option<String>,
    pub city: String,
    pub street: String,
    pub postal_code: Option<String>,
    pub created_by_id: Option<i32>,
}

/// Fields an owner may change after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantPatch {
    pub name: String,
    pub description: Option<String>,
    pub has_delivery: bool,
}

impl Restaurant {
    pub fn apply(&mut self, patch: RestaurantPatch) {
        self.name = patch.name;
        self.description = patch.description;
        self.has_delivery = patch.has_delivery;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    Name,
    Category,
    Description,
}

impl SortBy {
    pub const ALL: [SortBy; 3] = [SortBy::Name, SortBy::Category, SortBy::Description];

    pub const fn as_str(&self) -> &'static str {
        match self {
            SortBy::Name => "Name",
            SortBy::Category => "Category",
            SortBy::Description => "Description",
        }
    }
}

impl FromStr for SortBy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortBy::ALL
            .into_iter()
            .find(|column| column.as_str() == s)
            .ok_or(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(SortDirection::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(SortDirection::Desc)
        } else {
            Err(())
        }
    }
}

/// A list request that already passed the pagination guard.
#[derive(Debug, Clone, PartialEq)]
pub struct PageRequest {
    /// 1-based
    pub page_number: u32,
    pub page_size: u32,
    pub search_phrase: Option<String>,
    pub sort: Option<(SortBy, SortDirection)>,
}

impl PageRequest {
    pub fn offset(&self) -> u64 {
        u64::from(self.page_number - 1) * u64::from(self.page_size)
    }

    /// Lower-cased, trimmed phrase; `None` when blank.
    pub fn normalized_phrase(&self) -> Option<String> {
        self.search_phrase
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_lowercase)
    }
}

/// One page of results plus the total match count before paging.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_items: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sortable_columns_exactly() {
        assert_eq!("Name".parse::<SortBy>(), Ok(SortBy::Name));
        assert_eq!("Description".parse::<SortBy>(), Ok(SortBy::Description));
        assert!("name".parse::<SortBy>().is_err());
        assert!("City".parse::<SortBy>().is_err());
    }

    #[test]
    fn parses_direction_case_insensitively() {
        assert_eq!("DESC".parse::<SortDirection>(), Ok(SortDirection::Desc));
        assert_eq!("asc".parse::<SortDirection>(), Ok(SortDirection::Asc));
        assert!("up".parse::<SortDirection>().is_err());
    }

    #[test]
    fn offset_is_zero_based() {
        let req = PageRequest {
            page_number: 3,
            page_size: 10,
            search_phrase: Some("  Pizza ".into()),
            sort: None,
        };
        assert_eq!(req.offset(), 20);
        assert_eq!(req.normalized_phrase().as_deref(), Some("pizza"));
    }
}
