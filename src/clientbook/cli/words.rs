use clientbook::error::{ClientError, Result};

/// Split a session line into words. Single and double quotes group words;
/// a backslash escapes the next character outside single quotes.
pub fn split_words(line: &str) -> Result<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some('\''), '\'') | (Some('"'), '"') => quote = None,
            (Some('\''), _) => current.push(c),
            (_, '\\') => {
                let escaped = chars.next().ok_or_else(|| {
                    ClientError::Parse("Trailing backslash in input".to_string())
                })?;
                current.push(escaped);
                in_word = true;
            }
            (Some(_), _) => current.push(c),
            (None, '\'') | (None, '"') => {
                quote = Some(c);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, _) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(ClientError::Parse(format!("Unclosed {} quote", q)));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}
