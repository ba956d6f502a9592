/// Converts a 1-based line and column, as reported by the parsing backends, into a byte
/// offset into `source`. Columns count characters. Positions past the end of a line or
/// of the source clamp to the nearest valid offset, so the result is always usable as a
/// span start. This is only called on the error path.
pub fn offset_from_line_and_column(source: &str, line: usize, column: usize) -> usize {
    if line == 0 {
        return 0;
    }
    let mut current_line = 1;
    let mut line_start = 0;
    if line > 1 {
        let mut found = false;
        for (i, c) in source.char_indices() {
            if c == '\n' {
                current_line += 1;
                if current_line == line {
                    line_start = i + 1;
                    found = true;
                    break;
                }
            }
        }
        if !found {
            return source.len();
        }
    }

    let rest = &source[line_start..];
    let line_len = rest.find('\n').unwrap_or(rest.len());
    let within = rest[..line_len]
        .char_indices()
        .nth(column.saturating_sub(1))
        .map_or(line_len, |(i, _)| i);
    line_start + within
}
