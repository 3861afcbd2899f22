//! HTML rendering of leaderboard pages.
//!
//! A page renders as a fragment: the results table, the First/Prev/Next/Last
//! strip, the numbered page strip and a "Page N of M" summary. Interactive
//! controls carry a `data-page` attribute that the page script turns into a
//! fetch of the matching fragment; disabled controls and the current page
//! carry none.

use podium_core::models::PageResult;

/// Column headers of the results table.
pub const HEADERS: [&str; 3] = ["RANK", "PUBLIC KEY", "60 Day Uptime Performance SCORE"];

// -----------------------------------------------------------------------------
// Controls
// -----------------------------------------------------------------------------

/// One of the First/Prev/Next/Last navigation controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavControl {
    pub label: &'static str,
    /// Page fetched when the control is activated.
    pub target: u64,
    pub disabled: bool,
}

/// An entry of the numbered page strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    /// The page being shown; not interactive.
    Current(u64),
    /// Any other page.
    Link(u64),
}

/// Navigation state for one rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationControls {
    pub page_number: u64,
    pub page_count: u64,
    pub first: NavControl,
    pub prev: NavControl,
    pub next: NavControl,
    pub last: NavControl,
    pub pages: Vec<PageLink>,
}

impl PaginationControls {
    /// Derive the controls for `page_number` out of `page_count` pages.
    ///
    /// First/Prev are disabled on the first page, Next/Last on the last one
    /// (or past it), and everything is disabled when there is at most one page.
    pub fn new(page_number: u64, page_count: u64) -> Self {
        let page_number = page_number.max(1);
        let single_page = page_count <= 1;
        let at_start = page_number <= 1 || single_page;
        let at_end = page_number >= page_count;

        let prev_target = if page_number <= 1 {
            page_number
        } else {
            (page_number - 1).min(page_count.max(1))
        };
        let next_target = if at_end { page_number } else { page_number + 1 };

        let pages = (1..=page_count)
            .map(|n| {
                if n == page_number {
                    PageLink::Current(n)
                } else {
                    PageLink::Link(n)
                }
            })
            .collect();

        Self {
            page_number,
            page_count,
            first: NavControl {
                label: "First",
                target: 1,
                disabled: at_start,
            },
            prev: NavControl {
                label: "Prev",
                target: prev_target,
                disabled: at_start,
            },
            next: NavControl {
                label: "Next",
                target: next_target,
                disabled: at_end,
            },
            last: NavControl {
                label: "Last",
                target: page_count.max(1),
                disabled: at_end,
            },
            pages,
        }
    }

    pub fn from_page(page: &PageResult) -> Self {
        Self::new(page.page_number, page.page_count)
    }

    /// The four navigation controls in display order.
    pub fn nav(&self) -> [NavControl; 4] {
        [self.first, self.prev, self.next, self.last]
    }

    /// "Page N of M" summary line.
    pub fn summary(&self) -> String {
        format!("Page {} of {}", self.page_number, self.page_count)
    }
}

// -----------------------------------------------------------------------------
// HTML
// -----------------------------------------------------------------------------

/// Render the full leaderboard fragment for a page.
pub fn render_fragment(page: &PageResult) -> String {
    let controls = PaginationControls::from_page(page);

    let mut html = String::with_capacity(1024 + page.entries.len() * 160);
    html.push_str("<div class=\"leaderboard\">\n");
    render_table(&mut html, page);
    render_nav(&mut html, &controls);
    render_page_strip(&mut html, &controls);
    html.push_str(&format!(
        "<p class=\"page-summary\">{}</p>\n",
        controls.summary()
    ));
    html.push_str("</div>\n");
    html
}

fn render_table(html: &mut String, page: &PageResult) {
    html.push_str("<table class=\"leaderboard-table\">\n<thead>\n<tr>");
    for header in HEADERS {
        html.push_str(&format!("<th scope=\"col\">{}</th>", escape_html(header)));
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");

    if page.entries.is_empty() {
        html.push_str("<tr class=\"empty\"><td colspan=\"3\">No block producers on this page</td></tr>\n");
    }

    for (rank, entry) in page.ranked() {
        html.push_str(&format!(
            "<tr><td>{}</td><td class=\"public-key\">{}</td><td>{}</td></tr>\n",
            rank,
            escape_html(&entry.public_key),
            entry.score
        ));
    }

    html.push_str("</tbody>\n</table>\n");
}

fn render_nav(html: &mut String, controls: &PaginationControls) {
    html.push_str("<nav aria-label=\"Leaderboard pages\">\n<ul class=\"pagination\">\n");
    for control in controls.nav() {
        if control.disabled {
            html.push_str(&format!(
                "<li class=\"page-item disabled\"><a class=\"page-link\" aria-disabled=\"true\">{}</a></li>\n",
                control.label
            ));
        } else {
            html.push_str(&format!(
                "<li class=\"page-item\"><a class=\"page-link\" href=\"?pageNumber={0}\" data-page=\"{0}\">{1}</a></li>\n",
                control.target, control.label
            ));
        }
    }
    html.push_str("</ul>\n</nav>\n");
}

fn render_page_strip(html: &mut String, controls: &PaginationControls) {
    html.push_str("<div class=\"page-strip\">\n");
    for link in &controls.pages {
        match link {
            PageLink::Current(n) => {
                html.push_str(&format!("<a class=\"current\" aria-current=\"page\">{n}</a>\n"));
            }
            PageLink::Link(n) => {
                html.push_str(&format!(
                    "<a class=\"pages\" href=\"?pageNumber={n}\" data-page=\"{n}\">{n}</a>\n"
                ));
            }
        }
    }
    html.push_str("</div>\n");
}

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
