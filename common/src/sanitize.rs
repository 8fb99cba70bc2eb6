//! Pure input-cleaning helpers.
//!
//! Every piece of free text that can reach a command boundary or a display
//! surface passes through exactly one of these functions first.

/// Characters stripped from every command argument.
const SHELL_METACHARACTERS: &[char] = &[';', '&', '|', '`', '$', '(', ')', '<', '>'];

/// Longest argument the executor will accept.
const MAX_ARG_LEN: usize = 100;

/// Strips control characters (newline and tab survive), truncates to
/// `max_len` characters and trims surrounding whitespace. Total: never fails,
/// and applying it twice yields the same string.
pub fn sanitize_text(text: &str, max_len: usize) -> String {
    let cleaned: String = text
        .chars()
        .filter(|c| !is_stripped_control(*c))
        .take(max_len)
        .collect();
    cleaned.trim().to_string()
}

fn is_stripped_control(c: char) -> bool {
    c.is_control() && c != '\n' && c != '\t'
}

/// Removes shell metacharacters from each argument and caps its length.
/// Arguments are built from validated domain values long before they get
/// here; this is the second line of defense right at the spawn boundary.
pub fn sanitize_command_args(args: &[String]) -> Vec<String> {
    args.iter()
        .map(|arg| {
            arg.chars()
                .filter(|c| !SHELL_METACHARACTERS.contains(c))
                .take(MAX_ARG_LEN)
                .collect()
        })
        .collect()
}

/// Escapes markup-significant characters so text echoed from process output
/// cannot smuggle markup into a status surface.
pub fn escape_markup(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Sanitize-then-escape, for anything headed to a display surface.
pub fn sanitize_for_display(text: &str, max_len: usize) -> String {
    escape_markup(&sanitize_text(text, max_len))
}
