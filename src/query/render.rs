//! Text rendering of query results

use super::session::QueryError;
use crate::graph::PathResult;

/// The literal no-path message
pub const NO_PATH: &str = "There is no path.";

/// Render a path result as the bracketed report block
///
/// ```text
/// ***
/// Path length: 2
/// A
/// B
/// C
/// ***
/// ```
///
/// or, when no route exists:
///
/// ```text
/// ***
/// There is no path.
/// ***
/// ```
pub fn render_path(result: &PathResult) -> String {
    let mut out = String::from("***\n");
    if result.found {
        out.push_str(&format!("Path length: {}\n", result.length));
        for id in &result.path {
            out.push_str(id.as_str());
            out.push('\n');
        }
    } else {
        out.push_str(NO_PATH);
        out.push('\n');
    }
    out.push_str("***");
    out
}

/// Render a query error as a one-line report
pub fn render_error(error: &QueryError) -> String {
    error.to_string()
}
