//! Canned result-page trees shaped like the live search page.
//!
//! The field paths in the extractor count whitespace text nodes between
//! elements, exactly as the page serves them, so these fixtures interleave
//! newline text nodes the same way.

use super::{NodeSpec, StaticTree};

/// One result row whose fields land where the extractor's paths expect.
///
/// `link` is the value of the download link's `href`; pass `None` to build
/// a row whose link element carries no such attribute.
pub fn result_row(
    name: &str,
    link: Option<&str>,
    seeders: &str,
    leechers: &str,
    info: &str,
) -> NodeSpec {
    let mut link_node = NodeSpec::element("a");
    if let Some(href) = link {
        link_node = link_node.attr("href", href);
    }

    // Main cell: whitespace, title div, whitespace, download link,
    // whitespace, uploader link, whitespace, description text.
    let main_cell = NodeSpec::element("td")
        .child(NodeSpec::text("\n"))
        .child(
            NodeSpec::element("div")
                .attr("class", "detName")
                .child(NodeSpec::text(" "))
                .child(NodeSpec::element("a").child(NodeSpec::text(name))),
        )
        .child(NodeSpec::text("\n"))
        .child(link_node)
        .child(NodeSpec::text("\n"))
        .child(NodeSpec::element("a").child(NodeSpec::element("img")))
        .child(NodeSpec::text("\n"))
        .child(
            NodeSpec::element("font")
                .attr("class", "detDesc")
                .child(NodeSpec::text(info)),
        );

    NodeSpec::element("tr")
        .child(NodeSpec::text("\n"))
        .child(NodeSpec::element("td").attr("class", "vertTh"))
        .child(NodeSpec::text("\n"))
        .child(main_cell)
        .child(NodeSpec::text("\n"))
        .child(NodeSpec::element("td").child(NodeSpec::text(seeders)))
        .child(NodeSpec::text("\n"))
        .child(NodeSpec::element("td").child(NodeSpec::text(leechers)))
}

/// A full page wrapping the given rows in the result table.
pub fn result_page(rows: Vec<NodeSpec>) -> StaticTree {
    let mut tbody = NodeSpec::element("tbody");
    for row in rows {
        tbody = tbody.child(NodeSpec::text("\n")).child(row);
    }

    StaticTree::build(
        NodeSpec::element("html").child(
            NodeSpec::element("body").child(
                NodeSpec::element("div").attr("id", "main").child(
                    NodeSpec::element("table")
                        .attr("id", "searchResult")
                        .child(tbody),
                ),
            ),
        ),
    )
}

/// A page with the result table missing entirely.
pub fn empty_page() -> StaticTree {
    StaticTree::build(
        NodeSpec::element("html")
            .child(NodeSpec::element("body").child(NodeSpec::element("div").attr("id", "main"))),
    )
}
