// src/engine/analysis.rs
//
// Plain-text report and anomaly pass over the ledger and the per-page
// stats the engine retains. The shell renders the output verbatim.

use std::collections::BTreeMap;
use std::fmt::Write;

use chrono::Local;

use super::crawler::PageStats;
use super::ledger::Ledger;

pub fn report(ledger: &Ledger, pages: &[PageStats]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Analysis report — {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    let _ = writeln!(out);

    if ledger.is_empty() && pages.is_empty() {
        out.push_str("No data yet — run a scraping session first.\n");
        return out;
    }

    let mut by_type: BTreeMap<&str, usize> = BTreeMap::new();
    for block in ledger.blocks() {
        *by_type.entry(block.data_type()).or_default() += 1;
    }
    let _ = writeln!(out, "Ledger: {} block(s)", ledger.len());
    for (data_type, count) in &by_type {
        let _ = writeln!(out, "  {data_type}: {count}");
    }
    match ledger.verify() {
        Ok(()) => out.push_str("  chain: intact\n"),
        Err(e) => {
            let _ = writeln!(out, "  chain: BROKEN — {e}");
        }
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Pages fetched: {}", pages.len());
    if !pages.is_empty() {
        let ok = pages.iter().filter(|p| p.status < 400).count();
        let total: usize = pages.iter().map(|p| p.bytes).sum();
        let _ = writeln!(out, "  ok responses: {ok}/{}", pages.len());
        let _ = writeln!(out, "  mean body size: {} bytes", total / pages.len());

        let mut by_host: BTreeMap<&str, usize> = BTreeMap::new();
        for p in pages {
            *by_host.entry(p.host.as_str()).or_default() += 1;
        }
        out.push_str("  by host:\n");
        for (h, count) in &by_host {
            let _ = writeln!(out, "    {h}: {count}");
        }
    }
    out
}

pub fn anomalies(ledger: &Ledger, pages: &[PageStats]) -> String {
    let mut findings: Vec<String> = Vec::new();

    for p in pages {
        if p.status >= 400 {
            findings.push(format!("HTTP {} at {}", p.status, p.url));
        }
    }

    // Body-size outliers beyond two standard deviations; needs a few
    // samples before the mean says anything.
    if pages.len() >= 3 {
        let n = pages.len() as f64;
        let mean = pages.iter().map(|p| p.bytes as f64).sum::<f64>() / n;
        let variance = pages
            .iter()
            .map(|p| {
                let d = p.bytes as f64 - mean;
                d * d
            })
            .sum::<f64>()
            / n;
        let std_dev = variance.sqrt();
        if std_dev > 0.0 {
            for p in pages {
                let d = (p.bytes as f64 - mean).abs();
                if d > 2.0 * std_dev {
                    findings.push(format!(
                        "unusual body size at {}: {} bytes (mean {:.0})",
                        p.url, p.bytes, mean
                    ));
                }
            }
        }
    }

    let mut by_hash: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for p in pages {
        by_hash
            .entry(p.content_hash.as_str())
            .or_default()
            .push(p.url.as_str());
    }
    for urls in by_hash.values() {
        if urls.len() > 1 {
            findings.push(format!("duplicate content: {}", urls.join(", ")));
        }
    }

    if let Err(e) = ledger.verify() {
        findings.push(format!("ledger: {e}"));
    }

    if findings.is_empty() {
        format!("No anomalies detected across {} page(s).\n", pages.len())
    } else {
        let mut out = format!("{} finding(s):\n", findings.len());
        for f in &findings {
            out.push_str("  - ");
            out.push_str(f);
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(url: &str, status: u16, bytes: usize, content_hash: &str) -> PageStats {
        PageStats {
            url: url.into(),
            host: "example.com".into(),
            status,
            bytes,
            content_hash: content_hash.into(),
        }
    }

    #[test]
    fn report_with_no_data_says_so() {
        let out = report(&Ledger::new(), &[]);
        assert!(out.contains("No data yet"));
    }

    #[test]
    fn report_counts_blocks_and_pages() {
        let mut ledger = Ledger::new();
        ledger.append("page", "a".into());
        ledger.append("session", "b".into());
        let pages = vec![
            page("https://example.com/", 200, 100, "h1"),
            page("https://example.com/2", 200, 300, "h2"),
        ];

        let out = report(&ledger, &pages);
        assert!(out.contains("Ledger: 3 block(s)"));
        assert!(out.contains("page: 1"));
        assert!(out.contains("chain: intact"));
        assert!(out.contains("Pages fetched: 2"));
        assert!(out.contains("mean body size: 200 bytes"));
    }

    #[test]
    fn clean_run_has_no_anomalies() {
        let pages = vec![
            page("https://example.com/", 200, 100, "h1"),
            page("https://example.com/2", 200, 110, "h2"),
        ];
        let out = anomalies(&Ledger::new(), &pages);
        assert!(out.contains("No anomalies"));
    }

    #[test]
    fn error_statuses_are_flagged() {
        let pages = vec![
            page("https://example.com/", 200, 100, "h1"),
            page("https://example.com/missing", 404, 20, "h2"),
        ];
        let out = anomalies(&Ledger::new(), &pages);
        assert!(out.contains("HTTP 404 at https://example.com/missing"));
    }

    #[test]
    fn size_outliers_are_flagged() {
        let mut pages = vec![
            page("https://example.com/a", 200, 100, "h1"),
            page("https://example.com/b", 200, 100, "h2"),
            page("https://example.com/c", 200, 100, "h3"),
            page("https://example.com/d", 200, 100, "h4"),
            page("https://example.com/e", 200, 100, "h5"),
        ];
        pages.push(page("https://example.com/huge", 200, 100_000, "h6"));

        let out = anomalies(&Ledger::new(), &pages);
        assert!(out.contains("unusual body size at https://example.com/huge"));
    }

    #[test]
    fn duplicate_content_is_flagged() {
        let pages = vec![
            page("https://example.com/a", 200, 100, "same"),
            page("https://example.com/b", 200, 100, "same"),
        ];
        let out = anomalies(&Ledger::new(), &pages);
        assert!(out.contains("duplicate content: https://example.com/a, https://example.com/b"));
    }
}
