//! End-to-end pipeline tests: raw page markup through extraction, ranking
//! and track assignment.

use galleon_core::{assign_tracks, parse_results, rank, ExtractError};

/// Render one result row the way the live page serves it, whitespace and
/// all. The extractor's positional paths count those text nodes.
fn render_row(name: &str, magnet: &str, seeders: u32, leechers: u32, size: &str) -> String {
    format!(
        r#"<tr>
  <td class="vertTh"><a href="/browse/100">Audio</a></td>
  <td>
    <div class="detName"> <a href="/torrent/1/{name}" class="detLink">{name}</a></div>
    <a href="{magnet}" title="Download this torrent using magnet"><img src="/static/img/icon-magnet.gif"></a>
    <a href="/user/uploader"><img src="/static/img/vip.gif"></a>
    <font class="detDesc">Uploaded 03-01&nbsp;2017, Size {size}, ULed by uploader</font>
  </td>
  <td align="right">{seeders}</td>
  <td align="right">{leechers}</td>
</tr>"#
    )
}

fn render_page(rows: &[String]) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><title>Search results</title></head>
<body>
<div id="content">
  <table id="searchResult">
    <thead>
      <tr class="header"><th>Type</th><th>Name</th><th>SE</th><th>LE</th></tr>
    </thead>
    <tbody>
{}
    </tbody>
  </table>
</div>
</body>
</html>"#,
        rows.join("\n")
    )
}

#[test]
fn extracts_ranks_and_matches_a_full_page() {
    let page = render_page(&[
        render_row(
            "Cher - Believe (1998) [FLAC]",
            "magnet:?xt=urn:btih:flac",
            12,
            4,
            "245.51 MiB",
        ),
        render_row(
            "Cher Believe mp3",
            "magnet:?xt=urn:btih:mp3",
            3,
            40,
            "58.10 MiB",
        ),
        render_row(
            "Cher - Believe",
            "magnet:?xt=urn:btih:dead",
            0,
            90,
            "60.00 MiB",
        ),
    ]);

    let candidates = parse_results(&page).unwrap();
    assert_eq!(candidates.len(), 3);

    // Header row lives in thead and must not have been picked up.
    assert_eq!(candidates[0].name, "Cher - Believe (1998) [FLAC]");
    assert_eq!(candidates[0].link, "magnet:?xt=urn:btih:flac");
    assert_eq!(candidates[0].seeders, 12);
    assert_eq!(candidates[0].leechers, 4);
    // 245.51 * 1024 * 1024, truncated.
    assert_eq!(candidates[0].size_bytes, 257_435_893);

    let ranked = rank(candidates, "Cher - Believe");
    // The dead torrent saturates to worst despite its perfect name.
    assert_eq!(ranked.last().unwrap().seeders, 0);
    // The healthy FLAC rip (health -8) beats the leecher-heavy mp3 rip.
    assert_eq!(ranked[0].link, "magnet:?xt=urn:btih:flac");

    let tracks: Vec<String> = ["Believe", "Strong Enough", "All or Nothing"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let files: Vec<String> = [
        "Cher - Believe (1998)/03 - All or Nothing.flac",
        "Cher - Believe (1998)/01 - Believe.flac",
        "Cher - Believe (1998)/02 - Strong Enough.flac",
        "Cher - Believe (1998)/cover.jpg",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    let assignments = assign_tracks(&tracks, &files);
    assert_eq!(assignments.len(), 3);
    assert_eq!(assignments[0].path, "Cher - Believe (1998)/01 - Believe.flac");
    assert_eq!(
        assignments[1].path,
        "Cher - Believe (1998)/02 - Strong Enough.flac"
    );
    assert_eq!(
        assignments[2].path,
        "Cher - Believe (1998)/03 - All or Nothing.flac"
    );
}

#[test]
fn page_without_result_table_reports_no_results() {
    let page = r#"<!DOCTYPE html>
<html><body><div id="content"><h2>No hits. Try fewer keywords?</h2></div></body></html>"#;

    assert!(matches!(
        parse_results(page),
        Err(ExtractError::ContainerNotFound)
    ));
}

#[test]
fn empty_result_table_yields_no_candidates() {
    let page = render_page(&[]);
    // The thead's header row is not a tbody child, leaving zero rows.
    let candidates = parse_results(&page).unwrap();
    assert!(candidates.is_empty());
}

#[test]
fn size_annotation_with_unknown_unit_is_tolerated() {
    let page = render_page(&[render_row(
        "Huge Discography",
        "magnet:?xt=urn:btih:huge",
        5,
        1,
        "1.20 TiB",
    )]);

    let candidates = parse_results(&page).unwrap();
    assert_eq!(candidates[0].size_bytes, 0);
}
