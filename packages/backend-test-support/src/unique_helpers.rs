use ulid::Ulid;

/// A fresh address under `example.test`, lowercase so it survives email
/// normalization unchanged.
///
/// ```
/// use backend_test_support::unique_helpers::unique_email;
///
/// let a = unique_email("owner");
/// assert_ne!(a, unique_email("owner"));
/// assert!(a.starts_with("owner-") && a.ends_with("@example.test"));
/// ```
pub fn unique_email(prefix: &str) -> String {
    format!("{prefix}-{}@example.test", Ulid::new().to_string().to_lowercase())
}
