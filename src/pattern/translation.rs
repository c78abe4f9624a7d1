/// Rewrite hyphen shorthand into raw matcher syntax.
///
/// | Input     | Output        |
/// |-----------|---------------|
/// | `-CON`    | `.*CON$`      |
/// | `CON-`    | `^CON.*`      |
/// | `-CON-`   | `.*CON.*`     |
/// | `-PUCH-R` | `.*PUCH.*R$`  |
///
/// Anything else comes back unchanged, as do `""` and `"-"`. The output feeds
/// [`convert_pattern_to_regex`](super::convert_pattern_to_regex), which adds
/// whatever anchors are still missing.
#[must_use]
pub fn translate_hyphen_pattern(pattern: &str) -> String {
    let clean = pattern.trim();
    if clean.is_empty() || clean == "-" {
        return pattern.to_string();
    }

    let parts: Vec<&str> = clean.split('-').filter(|p| !p.is_empty()).collect();
    let leading = clean.starts_with('-');
    let trailing = clean.ends_with('-');

    // "-PUCH-R": contains everything before the last hyphen, ends with the rest
    if leading && !trailing && parts.len() >= 2
        && let Some((last, middle)) = parts.split_last()
    {
        return format!(".*{}.*{last}$", middle.concat());
    }

    match (leading, trailing) {
        (true, true) => {
            let inner = &clean[1..clean.len() - 1];
            if inner.is_empty() { pattern.to_string() } else { format!(".*{inner}.*") }
        }
        (true, false) => format!(".*{}$", &clean[1..]),
        (false, true) => format!("^{}.*", &clean[..clean.len() - 1]),
        (false, false) => pattern.to_string(),
    }
}
