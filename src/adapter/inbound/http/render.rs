//! HTML rendering.
//!
//! Pages and fragments are plain strings. htmx attributes wire the entry
//! form, search box and row actions to the `/api` routes; every swap
//! targets either `#content` (form + table) or `#records` (table only).
//! All user-supplied text passes through [`escape`].

use url::form_urlencoded;

use crate::domain::ScoreRecord;

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@1.9.12";

/// Escape text for use in element content and quoted attributes.
#[must_use]
pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Percent-encode a name for a query string.
fn encode_query(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// The full index page: entry form, search box and record table.
#[must_use]
pub fn index_page(records: &[ScoreRecord]) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>SAT Scores</title>
<link rel="stylesheet" href="/static/styles.css">
<script src="{htmx}"></script>
</head>
<body>
<h1>SAT Scores</h1>
<main id="content">
{body}
</main>
<p><a href="/api/view-all-data">View all data (JSON)</a></p>
</body>
</html>
"#,
        htmx = HTMX_SRC,
        body = form_with_table(records),
    )
}

/// Entry form, search box and table; swapped into `#content`.
#[must_use]
pub fn form_with_table(records: &[ScoreRecord]) -> String {
    format!(
        "{form}\n{search}\n<div id=\"records\">\n{table}</div>",
        form = entry_form(),
        search = search_box(),
        table = table(records),
    )
}

fn entry_form() -> String {
    let mut out = String::from(
        "<form class=\"entry\" hx-post=\"/api/submit-sat-score\" hx-target=\"#records\" \
         hx-on::after-request=\"if(event.detail.successful) this.reset()\">\n",
    );
    for (field, label) in [
        ("name", "Name"),
        ("address", "Address"),
        ("city", "City"),
        ("country", "Country"),
        ("pincode", "Pincode"),
    ] {
        out.push_str(&format!(
            "<label>{label} <input type=\"text\" name=\"{field}\" required></label>\n"
        ));
    }
    out.push_str(
        "<label>SAT Score <input type=\"number\" name=\"sat_score\" min=\"0\" max=\"100\" required></label>\n\
         <button type=\"submit\">Submit</button>\n</form>",
    );
    out
}

fn search_box() -> &'static str {
    "<input type=\"search\" name=\"name\" placeholder=\"Search by name\" \
     hx-get=\"/api/search-by-name\" hx-trigger=\"input changed delay:300ms, search\" \
     hx-target=\"#records\">"
}

/// The record table; swapped into `#records`.
#[must_use]
pub fn table(records: &[ScoreRecord]) -> String {
    let mut out = String::from(
        "<table>\n<thead><tr><th>Rank</th><th>Name</th><th>Address</th><th>City</th>\
         <th>Country</th><th>Pincode</th><th>SAT Score</th><th>Result</th><th></th></tr></thead>\n<tbody>\n",
    );
    if records.is_empty() {
        out.push_str("<tr><td colspan=\"9\" class=\"empty\">No records</td></tr>\n");
    }
    for record in records {
        out.push_str(&row(record));
    }
    out.push_str("</tbody>\n</table>\n");
    out
}

fn row(record: &ScoreRecord) -> String {
    let query = encode_query(&record.name);
    let name = escape(&record.name);
    format!(
        "<tr id=\"record-{id}\"><td>{rank}</td><td>{name}</td><td>{address}</td><td>{city}</td>\
         <td>{country}</td><td>{pincode}</td><td>{score}</td><td>{result}</td>\
         <td><button hx-get=\"/update-sat-score-form?name={query}\" hx-target=\"#content\">Edit</button> \
         <button hx-delete=\"/api/delete-record?name={query}\" hx-target=\"#records\" \
         hx-confirm=\"Delete {name}?\">Delete</button></td></tr>\n",
        id = record.id,
        rank = record.rank,
        address = escape(&record.address),
        city = escape(&record.city),
        country = escape(&record.country),
        pincode = escape(&record.pincode),
        score = record.score.value(),
        result = if record.passed { "Pass" } else { "Fail" },
    )
}

/// Update form pre-filled from a record; swapped into `#content`.
///
/// Location inputs start blank and only overwrite the stored value when
/// filled in.
#[must_use]
pub fn update_form(record: &ScoreRecord) -> String {
    let name = escape(&record.name);
    let mut out = format!(
        "<form class=\"update\" hx-post=\"/api/update-sat-score\" hx-target=\"#content\">\n\
         <h2>Update {name}</h2>\n\
         <input type=\"hidden\" name=\"name\" value=\"{name}\">\n\
         <label>SAT Score <input type=\"number\" name=\"sat_score\" min=\"0\" max=\"100\" \
         value=\"{score}\" required></label>\n",
        score = record.score.value(),
    );
    for (field, label, current) in [
        ("address", "Address", &record.address),
        ("city", "City", &record.city),
        ("country", "Country", &record.country),
        ("pincode", "Pincode", &record.pincode),
    ] {
        out.push_str(&format!(
            "<label>{label} <input type=\"text\" name=\"{field}\" placeholder=\"{current}\"></label>\n",
            current = escape(current),
        ));
    }
    out.push_str(
        "<button type=\"submit\">Update</button>\n\
         <a href=\"/\">Cancel</a>\n</form>",
    );
    out
}

/// Error message fragment.
#[must_use]
pub fn error_fragment(message: &str) -> String {
    format!(
        "<div class=\"error\" role=\"alert\">{}</div>",
        escape(message)
    )
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::{RecordId, Score};

    fn record(name: &str, score: i64, rank: u32) -> ScoreRecord {
        let score = Score::try_new(score).unwrap();
        ScoreRecord {
            id: RecordId::new(7),
            name: name.to_string(),
            address: "1 Main St".into(),
            city: "Springfield".into(),
            country: "US".into(),
            pincode: "12345".into(),
            score,
            passed: score.passed(),
            rank,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn escape_covers_markup_characters() {
        assert_eq!(
            escape(r#"<b a="1">'x' & y</b>"#),
            "&lt;b a=&quot;1&quot;&gt;&#39;x&#39; &amp; y&lt;/b&gt;"
        );
    }

    #[test]
    fn table_escapes_user_text() {
        let html = table(&[record("<script>alert(1)</script>", 80, 1)]);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn table_rows_link_with_encoded_names() {
        let html = table(&[record("Ann & Bo", 40, 1)]);
        assert!(html.contains("/api/delete-record?name=Ann+%26+Bo"));
        assert!(html.contains("/update-sat-score-form?name=Ann+%26+Bo"));
        assert!(html.contains("<td>Pass</td>"));
    }

    #[test]
    fn empty_table_says_so() {
        assert!(table(&[]).contains("No records"));
    }

    #[test]
    fn update_form_prefills_score() {
        let html = update_form(&record("Carol", 70, 2));
        assert!(html.contains("value=\"70\""));
        assert!(html.contains("name=\"name\" value=\"Carol\""));
    }

    #[test]
    fn index_page_links_stylesheet_and_table() {
        let html = index_page(&[record("Alice", 90, 1)]);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("/static/styles.css"));
        assert!(html.contains("<div id=\"records\">"));
        assert!(html.contains("Alice"));
    }
}
