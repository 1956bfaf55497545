//! Prompt and incoming-line formatting. Cosmetic only: the escape codes
//! keep a line that arrives mid-typing from colliding with the prompt,
//! anything the user already typed stays intact in the terminal's own
//! input buffer.

/// What the user types after.
pub const PROMPT: &str = "you> ";

// \r returns the cursor to column zero, ESC[K erases from there to the
// end of the line.
const WIPE: &str = "\r\x1b[K";

/// One incoming line, ready to print in a single write: wipe the prompt
/// line, show the labeled text, hand the prompt back.
pub fn incoming(label: &str, text: &str) -> String {
    format!("{WIPE}{label}{text}\n{PROMPT}")
}
