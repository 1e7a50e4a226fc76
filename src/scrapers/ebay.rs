use crate::error::{CrawlError, Result};
use crate::models::Listing;
use crate::scrapers::types::ListingSelectors;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info};

/// Extracts listings from a seller/search results page
pub struct ListingExtractor {
    container: Selector,
    title: Selector,
    price: Selector,
    link: Selector,
    link_attr: String,
    condition: Selector,
}

impl ListingExtractor {
    /// Compile the given selector set
    pub fn new(selectors: &ListingSelectors) -> Result<Self> {
        Ok(Self {
            container: compile(&selectors.container)?,
            title: compile(&selectors.title)?,
            price: compile(&selectors.price)?,
            link: compile(&selectors.link)?,
            link_attr: selectors.link_attr.clone(),
            condition: compile(&selectors.condition)?,
        })
    }

    /// Parse raw HTML and extract its listings
    pub fn extract_from_str(&self, html: &str) -> Vec<Listing> {
        let document = Html::parse_document(html);
        self.extract(&document)
    }

    /// One listing per container match, in document order.
    ///
    /// A missing field element yields an empty string for that field.
    pub fn extract(&self, document: &Html) -> Vec<Listing> {
        let listings: Vec<Listing> = document
            .select(&self.container)
            .map(|card| {
                let url = card
                    .select(&self.link)
                    .next()
                    .and_then(|a| a.value().attr(&self.link_attr))
                    .unwrap_or("");

                let listing = Listing::new(
                    text_of(&card, &self.title),
                    text_of(&card, &self.price),
                    url,
                    text_of(&card, &self.condition),
                );
                debug!("Extracted listing: {}", listing.title);
                listing
            })
            .collect();

        info!("Found {} listings in HTML", listings.len());
        listings
    }
}

impl Default for ListingExtractor {
    fn default() -> Self {
        Self::new(&ListingSelectors::default()).expect("default selectors are valid CSS")
    }
}

fn compile(selector: &str) -> Result<Selector> {
    Selector::parse(selector)
        .map_err(|e| CrawlError::Parse(format!("invalid selector `{}`: {}", selector, e)))
}

/// Concatenated text of every match under `card`
fn text_of(card: &ElementRef<'_>, selector: &Selector) -> String {
    card.select(selector).flat_map(|el| el.text()).collect()
}

/// Keep listings whose condition equals `condition` exactly.
///
/// An empty `condition` returns the input untouched.
pub fn filter_by_condition(listings: Vec<Listing>, condition: &str) -> Vec<Listing> {
    if condition.is_empty() {
        return listings;
    }
    listings
        .into_iter()
        .filter(|listing| listing.condition == condition)
        .collect()
}
