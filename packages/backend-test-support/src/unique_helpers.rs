//! Unique test data built on ULIDs, so tests sharing a store never collide.

use ulid::Ulid;

/// A unique string in the format `{prefix}-{ulid}`.
///
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let a = unique_str("restaurant");
/// assert_ne!(a, unique_str("restaurant"));
/// assert!(a.starts_with("restaurant-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// A unique, lower-case email address `{prefix}-{ulid}@example.test`.
///
/// ```
/// use backend_test_support::unique_helpers::unique_email;
///
/// let email = unique_email("owner");
/// assert_ne!(email, unique_email("owner"));
/// assert!(email.ends_with("@example.test"));
/// assert_eq!(email, email.to_lowercase());
/// ```
pub fn unique_email(prefix: &str) -> String {
    format!("{}-{}@example.test", prefix, Ulid::new()).to_lowercase()
}

/// A short unique restaurant name that fits the 25 character limit.
pub fn unique_restaurant_name(prefix: &str) -> String {
    let ulid = Ulid::new().to_string();
    let suffix = &ulid[ulid.len() - 8..];
    let prefix: String = prefix.chars().take(16).collect();
    format!("{prefix}-{suffix}")
}
