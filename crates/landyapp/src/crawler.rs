//! # Competitor Site Crawling
//!
//! Fetches a competitor's site and condenses it into [`SiteSignals`], a small
//! text digest the generator can fold into its prompt. The crawl is strictly
//! best-effort: it fetches the home page plus a couple of same-site inner
//! pages, and callers are expected to treat any failure as "no signals", never
//! as a reason to fail the operation they were running.
//!
//! Extraction is regex-level, not a DOM parse. Titles, meta descriptions,
//! headings and visible text are pulled with patterns that tolerate sloppy
//! markup; whatever they miss was not worth a parser dependency. Script and
//! style blocks are stripped before text extraction, byte reads are capped,
//! and text previews are truncated so one bloated page cannot dominate the
//! prompt.

use crate::config::LandyConfig;
use once_cell::sync::Lazy;
use regex::Regex;
use std::io::Read;
use thiserror::Error;
use tracing::debug;

const USER_AGENT: &str = "landy/0.4 (+https://github.com/landy-app/landy)";

/// Candidate inner links considered, before fetching caps apply.
const MAX_CANDIDATE_LINKS: usize = 5;
const MAX_HEADINGS: usize = 10;
const HOME_EXCERPT_CHARS: usize = 3000;
const INNER_EXCERPT_CHARS: usize = 800;

#[derive(Error, Debug)]
pub enum CrawlError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Read failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("Invalid competitor URL: {0}")]
    InvalidUrl(String),
}

/// One fetched page, reduced to what the prompt can use.
#[derive(Debug, Clone)]
pub struct CrawledPage {
    pub url: String,
    pub title: Option<String>,
    pub excerpt: String,
}

/// Everything the crawl learned about a competitor site.
#[derive(Debug, Clone, Default)]
pub struct SiteSignals {
    pub source_url: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub headings: Vec<String>,
    pub excerpt: String,
    pub inner_pages: Vec<CrawledPage>,
}

impl SiteSignals {
    /// Render the signals as a plain-text block for prompt inclusion.
    pub fn digest(&self) -> String {
        let mut out = format!("Competitor site: {}\n", self.source_url);
        if let Some(title) = &self.title {
            out.push_str(&format!("Title: {}\n", title));
        }
        if let Some(description) = &self.description {
            out.push_str(&format!("Description: {}\n", description));
        }
        if !self.headings.is_empty() {
            out.push_str(&format!("Key headings: {}\n", self.headings.join("; ")));
        }
        if !self.excerpt.is_empty() {
            out.push_str(&format!("Homepage text: {}\n", self.excerpt));
        }
        for page in &self.inner_pages {
            out.push_str(&format!("Inner page {}: {}\n", page.url, page.excerpt));
        }
        out
    }
}

/// Abstract interface for competitor crawling.
///
/// Errors carry their own type on purpose: there is no conversion into the
/// crate-wide error, so callers have to handle a failed crawl locally rather
/// than letting it bubble out of an operation.
pub trait SiteCrawler {
    fn crawl(&self, url: &str) -> std::result::Result<SiteSignals, CrawlError>;
}

/// Production crawler over a blocking HTTP client.
pub struct HttpCrawler {
    client: reqwest::blocking::Client,
    max_inner_pages: usize,
    max_fetch_bytes: u64,
}

impl HttpCrawler {
    pub fn new(config: &LandyConfig) -> std::result::Result<Self, CrawlError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.crawl_timeout())
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            max_inner_pages: config.max_inner_pages,
            max_fetch_bytes: config.max_fetch_bytes,
        })
    }

    fn fetch(&self, url: &str) -> std::result::Result<String, CrawlError> {
        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(CrawlError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        // Cap the read; a lossy decode also survives truncation mid-codepoint
        let mut buf = Vec::new();
        response.take(self.max_fetch_bytes).read_to_end(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

impl SiteCrawler for HttpCrawler {
    fn crawl(&self, url: &str) -> std::result::Result<SiteSignals, CrawlError> {
        let url = normalize_url(url)?;
        let home_html = self.fetch(&url)?;

        let mut signals = SiteSignals {
            source_url: url.clone(),
            title: extract_title(&home_html),
            description: extract_description(&home_html),
            headings: extract_headings(&home_html),
            excerpt: visible_text(&home_html, HOME_EXCERPT_CHARS),
            inner_pages: Vec::new(),
        };

        for link in extract_links(&home_html, &url) {
            if signals.inner_pages.len() >= self.max_inner_pages {
                break;
            }
            match self.fetch(&link) {
                Ok(html) => signals.inner_pages.push(CrawledPage {
                    title: extract_title(&html),
                    excerpt: visible_text(&html, INNER_EXCERPT_CHARS),
                    url: link,
                }),
                Err(e) => {
                    debug!("Skipping inner page {}: {}", link, e);
                }
            }
        }

        Ok(signals)
    }
}

static TITLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title>").unwrap());
static META_DESC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?is)<meta[^>]*name\s*=\s*["']description["'][^>]*content\s*=\s*["']([^"']*)["']"#)
        .unwrap()
});
static HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<h[1-3][^>]*>(.*?)</h[1-3]>").unwrap());
static SCRIPT_STYLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<script[^>]*>.*?</script>|<style[^>]*>.*?</style>").unwrap()
});
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<[^>]+>").unwrap());
static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)<a[^>]*href\s*=\s*["']([^"'#]+)["']"#).unwrap());
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Require an http(s) URL, defaulting the scheme when the user left it off.
fn normalize_url(url: &str) -> std::result::Result<String, CrawlError> {
    let url = url.trim();
    if url.is_empty() || url.contains(char::is_whitespace) {
        return Err(CrawlError::InvalidUrl(url.to_string()));
    }
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(url.to_string())
    } else if url.contains("://") {
        Err(CrawlError::InvalidUrl(url.to_string()))
    } else {
        Ok(format!("https://{}", url))
    }
}

/// The `scheme://host` part of a URL, used for same-site link checks.
fn origin(url: &str) -> Option<String> {
    let scheme_end = url.find("://")?;
    let rest = &url[scheme_end + 3..];
    let host_end = rest.find('/').unwrap_or(rest.len());
    if rest[..host_end].is_empty() {
        return None;
    }
    Some(format!("{}{}", &url[..scheme_end + 3], &rest[..host_end]))
}

fn clean_fragment(raw: &str) -> String {
    let stripped = TAG_RE.replace_all(raw, " ");
    let collapsed = WHITESPACE_RE.replace_all(&stripped, " ");
    decode_entities(collapsed.trim())
}

/// Decode the handful of entities that actually show up in titles and copy.
fn decode_entities(text: &str) -> String {
    text.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
}

fn extract_title(html: &str) -> Option<String> {
    TITLE_RE
        .captures(html)
        .map(|c| clean_fragment(&c[1]))
        .filter(|t| !t.is_empty())
}

fn extract_description(html: &str) -> Option<String> {
    META_DESC_RE
        .captures(html)
        .map(|c| decode_entities(c[1].trim()))
        .filter(|d| !d.is_empty())
}

fn extract_headings(html: &str) -> Vec<String> {
    HEADING_RE
        .captures_iter(html)
        .map(|c| clean_fragment(&c[1]))
        .filter(|h| !h.is_empty())
        .take(MAX_HEADINGS)
        .collect()
}

/// Visible page text with scripts and styles removed, truncated to
/// `max_chars`.
fn visible_text(html: &str, max_chars: usize) -> String {
    let without_blocks = SCRIPT_STYLE_RE.replace_all(html, " ");
    let text = clean_fragment(&without_blocks);
    text.chars().take(max_chars).collect()
}

/// Same-site links worth visiting, resolved to absolute URLs.
fn extract_links(html: &str, base_url: &str) -> Vec<String> {
    let Some(origin) = origin(base_url) else {
        return Vec::new();
    };

    let mut links = Vec::new();
    for capture in LINK_RE.captures_iter(html) {
        let href = capture[1].trim();
        let resolved = if href.starts_with("http://") || href.starts_with("https://") {
            // Same origin means the origin prefix is followed by a path, not
            // more hostname ("https://acme.example.evil.com" must not pass)
            match href.strip_prefix(origin.as_str()) {
                Some(rest) if rest.is_empty() || rest.starts_with('/') => href.to_string(),
                _ => continue,
            }
        } else if href.starts_with('/') {
            format!("{}{}", origin, href)
        } else {
            // mailto:, javascript:, tel:, and page-relative paths
            continue;
        };

        let trimmed = resolved.trim_end_matches('/').to_string();
        if trimmed == origin || trimmed == base_url.trim_end_matches('/') {
            continue;
        }
        if !links.contains(&trimmed) {
            links.push(trimmed);
        }
        if links.len() >= MAX_CANDIDATE_LINKS {
            break;
        }
    }
    links
}

// --- Test Doubles ---

#[cfg(any(test, feature = "test_utils"))]
pub mod mock {
    use super::*;

    /// Canned crawler for tests: either returns fixed signals or fails.
    pub struct MockCrawler {
        signals: Option<SiteSignals>,
    }

    impl MockCrawler {
        pub fn returning(signals: SiteSignals) -> Self {
            Self {
                signals: Some(signals),
            }
        }

        pub fn failing() -> Self {
            Self { signals: None }
        }
    }

    impl SiteCrawler for MockCrawler {
        fn crawl(&self, url: &str) -> std::result::Result<SiteSignals, CrawlError> {
            match &self.signals {
                Some(signals) => {
                    let mut signals = signals.clone();
                    signals.source_url = url.to_string();
                    Ok(signals)
                }
                None => Err(CrawlError::Status {
                    url: url.to_string(),
                    status: 503,
                }),
            }
        }
    }
}
