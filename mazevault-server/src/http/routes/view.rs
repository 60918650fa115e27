//! HTML view of a stored maze
//!
//! Renders record metadata plus whatever the stored body offers for
//! display: the body's pre-rendered `ascii` field when present, otherwise
//! the body JSON pretty-printed. The page is hand-built, not templated.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::Html,
    routing::get,
    Router,
};

use crate::db::{MazeRecord, MazeRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::MazeId;

/// GET /view/{maze_id}
async fn view_maze(
    State(state): State<Arc<AppState>>,
    Path(maze_id): Path<String>,
) -> Result<Html<String>, ApiError> {
    let id = MazeId::parse(&maze_id)?;
    let record = MazeRepo::new(&state.pool)
        .first(id.as_str())
        .await?
        .ok_or_else(|| ApiError::NotFound {
            resource: "maze",
            id: id.as_str().to_owned(),
        })?;

    Ok(Html(render_page(&record)))
}

fn render_page(record: &MazeRecord) -> String {
    let display = match record.body.get("ascii").and_then(|v| v.as_str()) {
        Some(ascii) => ascii.to_owned(),
        // Body came from a different generator; show it as-is
        None => serde_json::to_string_pretty(&record.body).unwrap_or_default(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Maze {id}</title>
<style>
body {{ font-family: sans-serif; margin: 2rem; }}
pre {{ font-family: monospace; line-height: 1; background: #f4f4f4; padding: 1rem; display: inline-block; }}
dl {{ display: grid; grid-template-columns: max-content auto; gap: 0.25rem 1rem; }}
dt {{ font-weight: bold; }}
</style>
</head>
<body>
<h1>Maze {id}</h1>
<dl>
<dt>Height</dt><dd>{height}</dd>
<dt>Width</dt><dd>{width}</dd>
<dt>Seed</dt><dd>{seed}</dd>
<dt>Challenge level</dt><dd>{challenge}</dd>
<dt>Created</dt><dd>{created}</dd>
</dl>
<pre>{display}</pre>
</body>
</html>
"#,
        id = escape(&record.id),
        height = record.height,
        width = record.width,
        seed = record.seed,
        challenge = record.challenge_level,
        created = escape(&record.created_at.to_rfc3339()),
        display = escape(&display),
    )
}

/// Minimal HTML escaping for text content.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// View routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/view/{maze_id}", get(view_maze))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn record(body: serde_json::Value) -> MazeRecord {
        MazeRecord {
            id: "4:5:9".into(),
            height: 4,
            width: 5,
            seed: 9,
            challenge_level: 1,
            body,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn page_embeds_ascii() {
        let page = render_page(&record(json!({"ascii": "# #\n# #\n"})));
        assert!(page.contains("<pre># #\n# #\n</pre>"));
        assert!(page.contains("Maze 4:5:9"));
    }

    #[test]
    fn page_falls_back_to_json() {
        let page = render_page(&record(json!({"cells": [1, 2]})));
        assert!(page.contains("&quot;cells&quot;"));
    }

    #[test]
    fn escapes_markup() {
        let page = render_page(&record(json!({"ascii": "<script>"})));
        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;"));
    }
}
