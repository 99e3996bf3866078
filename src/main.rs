// ==========================================
// Asin Batcher - engine entry point
// ==========================================
// Reads one JSON request from stdin, writes one JSON response to
// stdout. The exit code carries no status: success/failure lives
// entirely in the payload's `ok` field.
// ==========================================

use std::io::{Read, Write};

fn main() {
    asin_batcher::logging::init();

    tracing::debug!(version = asin_batcher::VERSION, "{} starting", asin_batcher::APP_NAME);

    let mut raw = String::new();
    if let Err(err) = std::io::stdin().read_to_string(&mut raw) {
        tracing::warn!(error = %err, "could not read stdin");
        raw.clear();
    }

    let response = asin_batcher::respond(&raw);
    let payload = response.to_string();

    let mut stdout = std::io::stdout();
    if stdout.write_all(payload.as_bytes()).is_err() {
        // Nothing sensible left to do; the client sees a broken pipe.
        tracing::error!("could not write response to stdout");
    }
    let _ = stdout.flush();
}
