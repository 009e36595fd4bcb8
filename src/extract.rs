use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::models::ScrapeResult;

static TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h2.product-title").expect("Invalid title selector"));

static PRICE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("span.price").expect("Invalid price selector"));

static IMAGE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("img.product-image").expect("Invalid image selector"));

/// Run the three fixed selector passes over a page.
///
/// Each pass fills its own sequence in document order; the lengths are
/// independent. Parsing is lenient, so broken markup and pages with no
/// matches both come back as (possibly empty) results rather than errors.
pub fn extract(html: &str) -> ScrapeResult {
    let document = Html::parse_document(html);

    let titles = document
        .select(&TITLE_SELECTOR)
        .map(|element| element.text().collect::<String>().trim().to_string())
        .collect();

    let prices = document
        .select(&PRICE_SELECTOR)
        .map(|element| element.text().collect::<String>().trim().to_string())
        .collect();

    // src is taken as-is (untrimmed); a missing attribute stays None
    let images = document
        .select(&IMAGE_SELECTOR)
        .map(|element| element.value().attr("src").map(str::to_string))
        .collect();

    ScrapeResult {
        titles,
        prices,
        images,
    }
}
