/// Split delimited text into rows of raw fields.
///
/// - fields are separated by `,`, records by `\n`
/// - `\r` is dropped wherever it appears
/// - `"` opens a quoted region in which `,` and `\n` are literal and `""` is one quote;
///   the region ends at the first lone `"`
/// - a final record made only of blank fields is dropped (trailing newline)
///
/// Fields are returned untrimmed; callers decide what whitespace means.
pub fn parse_csv(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\r' {
            continue;
        }

        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
            continue;
        }

        match c {
            '"' => in_quotes = true,
            ',' => row.push(std::mem::take(&mut field)),
            '\n' => {
                row.push(std::mem::take(&mut field));
                rows.push(std::mem::take(&mut row));
            }
            _ => field.push(c),
        }
    }

    row.push(field);
    if !row.iter().all(|cell| cell.trim().is_empty()) {
        rows.push(row);
    }

    rows
}
