/// Convert an HTML fragment to plain text.
///
/// Tags are dropped, `<br>` and closing `</p>`/`</li>` become line breaks,
/// common entities are decoded and runs of spaces collapse to one.
pub fn html_to_text(html: &str) -> String {
    let mut raw = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(start) = rest.find(['<', '&']) {
        raw.push_str(&rest[..start]);
        rest = &rest[start..];

        if rest.starts_with('<') {
            match rest.find('>') {
                Some(end) => {
                    if is_break_tag(&rest[1..end]) {
                        raw.push('\n');
                    }
                    rest = &rest[end + 1..];
                }
                None => {
                    // Unterminated tag: drop the remainder.
                    rest = "";
                }
            }
        } else {
            match rest.find(';').and_then(|end| decode_entity(&rest[1..end]).map(|c| (c, end))) {
                Some((decoded, end)) => {
                    raw.push(decoded);
                    rest = &rest[end + 1..];
                }
                None => {
                    raw.push('&');
                    rest = &rest[1..];
                }
            }
        }
    }
    raw.push_str(rest);

    raw.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

fn is_break_tag(tag: &str) -> bool {
    let name: String = tag
        .trim()
        .trim_end_matches('/')
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '/')
        .collect::<String>()
        .to_ascii_lowercase();
    matches!(name.as_str(), "br" | "/p" | "/li" | "/div")
}

fn decode_entity(entity: &str) -> Option<char> {
    match entity {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        _ => {
            let code = entity.strip_prefix('#')?;
            let value = match code.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => code.parse().ok()?,
            };
            char::from_u32(value)
        }
    }
}
