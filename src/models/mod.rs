use serde::{Deserialize, Serialize};

/// One extracted listing, serialized as-is to `<item_id>.json`.
///
/// Field order is the on-disk key order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Listing {
    pub title: String,
    /// Raw price text, currency and format vary per listing
    pub price: String,
    pub url: String,
    /// e.g. "New", "Pre-Owned"; empty when the page has none
    pub condition: String,
}

impl Listing {
    /// Build a listing, trimming surrounding whitespace from every field.
    pub fn new(
        title: impl AsRef<str>,
        price: impl AsRef<str>,
        url: impl AsRef<str>,
        condition: impl AsRef<str>,
    ) -> Self {
        Self {
            title: title.as_ref().trim().to_string(),
            price: price.as_ref().trim().to_string(),
            url: url.as_ref().trim().to_string(),
            condition: condition.as_ref().trim().to_string(),
        }
    }

    /// Last `/` segment of the URL with any query string dropped.
    ///
    /// An empty URL, or one ending in `/`, gives an empty id.
    pub fn item_id(&self) -> &str {
        let last = self.url.rsplit('/').next().unwrap_or("");
        last.split('?').next().unwrap_or("")
    }

    /// File name this listing is persisted under.
    pub fn file_name(&self) -> String {
        format!("{}.json", self.item_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_url(url: &str) -> Listing {
        Listing::new("t", "p", url, "c")
    }

    #[test]
    fn test_new_trims_fields() {
        let listing = Listing::new("  Dell Laptop \n", "\t$99.00 ", " https://x.com/itm/1 ", " New ");
        assert_eq!(listing.title, "Dell Laptop");
        assert_eq!(listing.price, "$99.00");
        assert_eq!(listing.url, "https://x.com/itm/1");
        assert_eq!(listing.condition, "New");
    }

    #[test]
    fn test_file_name_strips_query() {
        let listing = with_url("https://x.com/itm/123456789?hash=abc");
        assert_eq!(listing.item_id(), "123456789");
        assert_eq!(listing.file_name(), "123456789.json");
    }

    #[test]
    fn test_file_name_without_query() {
        assert_eq!(with_url("https://x.com/itm/987654321").file_name(), "987654321.json");
    }

    #[test]
    fn test_degenerate_urls() {
        assert_eq!(with_url("").file_name(), ".json");
        assert_eq!(with_url("https://x.com/itm/").file_name(), ".json");
        assert_eq!(with_url("?only=query").file_name(), ".json");
        assert_eq!(with_url("plain-id").file_name(), "plain-id.json");
    }

    #[test]
    fn test_json_key_order() {
        let json = serde_json::to_string(&Listing::new("a", "b", "c", "d")).unwrap();
        assert_eq!(json, r#"{"title":"a","price":"b","url":"c","condition":"d"}"#);
    }
}
