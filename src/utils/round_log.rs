//! Round-log export for game history interchange.
//!
//! Serializes resolved rounds and headers to a PGN-styled text block. Each
//! round prints both sides' notation on one numbered line; conflict notes
//! ride along as a brace comment.

use std::collections::BTreeMap;

use chrono::Local;

use crate::resolution::outcome::RoundOutcome;

/// Write the session history with the default header block.
///
/// `result` is the caller's result line, e.g. `"1-0"` once a king falls or
/// `"*"` for an unfinished game.
pub fn write_round_log(history: &[RoundOutcome], result: &str) -> String {
    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), "Simultaneous Chess Game".to_owned());
    headers.insert("Site".to_owned(), "Local".to_owned());
    headers.insert(
        "Date".to_owned(),
        Local::now().format("%Y.%m.%d").to_string(),
    );
    headers.insert("White".to_owned(), "White".to_owned());
    headers.insert("Black".to_owned(), "Black".to_owned());
    headers.insert("Result".to_owned(), result.to_owned());

    write_round_log_with_headers(history, &headers)
}

pub fn write_round_log_with_headers(
    history: &[RoundOutcome],
    headers: &BTreeMap<String, String>,
) -> String {
    let mut out = String::new();

    for (key, value) in headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_header_value(value)));
    }
    out.push('\n');

    for (index, round) in history.iter().enumerate() {
        let white = round.white_notation.as_deref().unwrap_or("-");
        let black = round.black_notation.as_deref().unwrap_or("-");
        out.push_str(&format!("{}. {} {}", index + 1, white, black));
        if !round.conflicts.is_empty() {
            out.push_str(&format!(" {{{}}}", round.conflicts.join(", ")));
        }
        out.push('\n');
    }

    out
}

fn escape_header_value(value: &str) -> String {
    value.replace('"', "\\\"")
}
