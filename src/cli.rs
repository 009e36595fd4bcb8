use clap::Parser;
use std::path::PathBuf;

use crate::models::ScrapeRequest;

#[derive(Debug, Parser)]
#[command(
    name = "product-scraper",
    version,
    about = "Scrape product titles, prices and image URLs from a single page"
)]
pub struct Cli {
    /// URL to scrape
    #[arg(short, long)]
    pub url: String,

    /// Output JSON file
    #[arg(short, long, default_value = "output.json")]
    pub output: PathBuf,

    /// Custom header as "Key: Value" (repeatable, applied in order)
    #[arg(short = 'H', long = "header", value_name = "KEY: VALUE")]
    pub headers: Vec<String>,

    /// Raw cookie string (repeatable, joined with "; " into a Cookie header)
    #[arg(short = 'C', long = "cookie", value_name = "COOKIE")]
    pub cookies: Vec<String>,
}

impl Cli {
    pub fn to_request(&self) -> ScrapeRequest {
        ScrapeRequest {
            url: self.url.clone(),
            headers: self.headers.clone(),
            cookies: self.cookies.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn missing_url_is_a_usage_error() {
        let result = Cli::try_parse_from(["product-scraper"]);
        assert!(result.is_err());
    }

    #[test]
    fn output_defaults_to_output_json() {
        let cli = Cli::try_parse_from(["product-scraper", "--url", "http://example.com"]).unwrap();
        assert_eq!(cli.output, Path::new("output.json"));
        assert!(cli.headers.is_empty());
        assert!(cli.cookies.is_empty());
    }

    #[test]
    fn headers_and_cookies_are_repeatable_in_order() {
        let cli = Cli::try_parse_from([
            "product-scraper",
            "-u",
            "http://example.com",
            "-o",
            "out.json",
            "-H",
            "Accept: text/html",
            "-H",
            "X-Test: 1",
            "-C",
            "a=1",
            "-C",
            "b=2",
        ])
        .unwrap();

        let request = cli.to_request();
        assert_eq!(request.headers, vec!["Accept: text/html", "X-Test: 1"]);
        assert_eq!(request.cookies, vec!["a=1", "b=2"]);
        assert_eq!(cli.output, Path::new("out.json"));
    }
}
