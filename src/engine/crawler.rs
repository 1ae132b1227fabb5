// src/engine/crawler.rs
//
// Default engine: breadth-first crawl of one site, every fetched page
// appended to the hash-chained ledger as a `page` block, one `session`
// block at the end of each run.

use std::collections::{HashSet, VecDeque};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use log::{info, warn};
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use serde_json::json;
use url::Url;

use crate::config::consts::{HTTP_TIMEOUT_SECS, REQUEST_PAUSE_MS, USER_AGENT};

use super::analysis;
use super::ledger::{Ledger, sha256_hex};
use super::types::{BlockRecord, RunSummary, ScrapeRequest};
use super::{CancelToken, Engine, EngineError, EventSink};

/// Tuning shared with the settings UI; read once at the start of each run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlConfig {
    pub request_pause_ms: u64,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            request_pause_ms: REQUEST_PAUSE_MS,
            timeout_secs: HTTP_TIMEOUT_SECS,
            user_agent: USER_AGENT.into(),
        }
    }
}

/// What the engine remembers about one fetched page, input to the
/// report/anomaly pass.
#[derive(Clone, Debug)]
pub struct PageStats {
    pub url: String,
    pub host: String,
    pub status: u16,
    pub bytes: usize,
    pub content_hash: String,
}

struct Fetched {
    status: u16,
    body: String,
}

pub struct CrawlEngine {
    config: Arc<Mutex<CrawlConfig>>,
    ledger: Mutex<Ledger>,
    pages: Mutex<Vec<PageStats>>,
    link_sel: Selector,
    title_sel: Selector,
}

impl CrawlEngine {
    pub fn new(config: Arc<Mutex<CrawlConfig>>) -> Self {
        Self {
            config,
            ledger: Mutex::new(Ledger::new()),
            pages: Mutex::new(Vec::new()),
            link_sel: Selector::parse("a[href]").expect("static selector"),
            title_sel: Selector::parse("title").expect("static selector"),
        }
    }

    fn fetch(&self, client: &reqwest::blocking::Client, url: &Url) -> Result<Fetched, EngineError> {
        let resp = client
            .get(url.clone())
            .send()
            .map_err(|e| EngineError::Fetch {
                url: url.to_string(),
                reason: e.to_string(),
            })?;
        let status = resp.status().as_u16();
        let body = resp.text().map_err(|e| EngineError::Fetch {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Fetched { status, body })
    }

    /// Page title plus all same-document http(s) links, resolved against
    /// `base` and stripped of fragments.
    fn extract(&self, base: &Url, body: &str) -> (Option<String>, Vec<Url>) {
        let doc = Html::parse_document(body);

        let title = doc
            .select(&self.title_sel)
            .next()
            .map(|t| t.text().collect::<String>().trim().to_owned())
            .filter(|t| !t.is_empty());

        let mut links = Vec::new();
        for a in doc.select(&self.link_sel) {
            let Some(href) = a.value().attr("href") else {
                continue;
            };
            if let Ok(mut resolved) = base.join(href) {
                resolved.set_fragment(None);
                if matches!(resolved.scheme(), "http" | "https") {
                    links.push(resolved);
                }
            }
        }
        (title, links)
    }
}

impl Engine for CrawlEngine {
    fn run(
        &self,
        req: &ScrapeRequest,
        sink: &EventSink,
        cancel: &CancelToken,
    ) -> Result<RunSummary, EngineError> {
        let cfg = self.config.lock().unwrap().clone();
        let client = reqwest::blocking::Client::builder()
            .user_agent(cfg.user_agent.clone())
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()
            .map_err(|e| EngineError::Client(e.to_string()))?;

        let host = req.url().host_str().map(str::to_owned);
        let max_pages = req.max_pages() as usize;
        let mut summary = RunSummary::default();
        let mut queue = VecDeque::from([req.url().clone()]);
        let mut seen: HashSet<Url> = queue.iter().cloned().collect();

        info!("Crawl: begin {} (max {max_pages} pages)", req.url());

        while let Some(url) = queue.pop_front() {
            if summary.pages_fetched >= max_pages {
                break;
            }
            if cancel.is_cancelled() {
                summary.cancelled = true;
                sink.log("Stop requested, ending session early");
                break;
            }

            let first = summary.pages_fetched == 0 && summary.fetch_errors == 0;
            let page = match self.fetch(&client, &url) {
                Ok(page) => page,
                Err(e) => {
                    // An unreachable start page is fatal; anything later is a
                    // counted, logged incident.
                    if first {
                        return Err(e);
                    }
                    warn!("Crawl: {e}");
                    summary.fetch_errors += 1;
                    sink.log(format!("Fetch error: {e}"));
                    continue;
                }
            };

            summary.pages_fetched += 1;
            let (title, links) = self.extract(&url, &page.body);

            self.pages.lock().unwrap().push(PageStats {
                url: url.to_string(),
                host: url.host_str().unwrap_or_default().to_owned(),
                status: page.status,
                bytes: page.body.len(),
                content_hash: sha256_hex(page.body.as_bytes()),
            });

            let payload = json!({
                "url": url.to_string(),
                "status": page.status,
                "bytes": page.body.len(),
                "title": title,
                "links": links.len(),
            });
            self.ledger
                .lock()
                .unwrap()
                .append("page", payload.to_string());
            summary.blocks_appended += 1;

            sink.log(format!(
                "[{}/{}] {} — HTTP {}, {} bytes, {} link(s)",
                summary.pages_fetched,
                max_pages,
                url,
                page.status,
                page.body.len(),
                links.len()
            ));

            for link in links {
                if link.host_str() != host.as_deref() {
                    continue;
                }
                if seen.insert(link.clone()) {
                    queue.push_back(link);
                }
            }

            if !queue.is_empty() && summary.pages_fetched < max_pages {
                thread::sleep(Duration::from_millis(cfg.request_pause_ms));
            }
        }

        let closing = json!({
            "start_url": req.url().to_string(),
            "pages": summary.pages_fetched,
            "errors": summary.fetch_errors,
            "cancelled": summary.cancelled,
        });
        self.ledger
            .lock()
            .unwrap()
            .append("session", closing.to_string());
        summary.blocks_appended += 1;

        info!("Crawl: done — {summary}");
        Ok(summary)
    }

    fn ledger_snapshot(&self) -> Vec<BlockRecord> {
        self.ledger.lock().unwrap().snapshot()
    }

    fn generate_report(&self) -> String {
        let ledger = self.ledger.lock().unwrap();
        let pages = self.pages.lock().unwrap();
        analysis::report(&ledger, &pages)
    }

    fn detect_anomalies(&self) -> String {
        let ledger = self.ledger.lock().unwrap();
        let pages = self.pages.lock().unwrap();
        analysis::anomalies(&ledger, &pages)
    }
}
