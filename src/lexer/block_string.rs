/// Canonicalize a raw block-string body.
///
/// Splits on `\n`, `\r\n`, or `\r`; computes the common indentation of every
/// non-blank line after the first (spaces and tabs each counting as one
/// unit); strips it; trims leading and trailing blank lines; rejoins with
/// `\n`. Idempotent: dedenting an already-dedented body returns it
/// unchanged.
pub fn dedent_block_string_value(raw: &str) -> String {
    let lines = split_lines(raw);

    let mut common_indent = None;
    for line in &lines[1..] {
        let indent = leading_whitespace(line);
        if indent < line.len() && common_indent.map_or(true, |common| indent < common) {
            common_indent = Some(indent);
            if indent == 0 {
                break;
            }
        }
    }

    let mut dedented = Vec::with_capacity(lines.len());
    dedented.push(lines[0]);
    let indent = common_indent.unwrap_or(0);
    for line in &lines[1..] {
        dedented.push(line.get(indent..).unwrap_or(""));
    }

    let first = dedented
        .iter()
        .position(|line| !is_blank(line))
        .unwrap_or(dedented.len());
    let last = dedented
        .iter()
        .rposition(|line| !is_blank(line))
        .map_or(first, |last| last + 1);

    dedented[first..last].join("\n")
}

fn split_lines(raw: &str) -> Vec<&str> {
    let bytes = raw.as_bytes();
    let mut lines = Vec::new();
    let mut line_start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&raw[line_start..i]);
                i += 1;
                line_start = i;
            }
            b'\r' => {
                lines.push(&raw[line_start..i]);
                i += 1;
                if bytes.get(i) == Some(&b'\n') {
                    i += 1;
                }
                line_start = i;
            }
            _ => i += 1,
        }
    }
    lines.push(&raw[line_start..]);
    lines
}

fn leading_whitespace(line: &str) -> usize {
    line.bytes()
        .take_while(|b| matches!(b, b' ' | b'\t'))
        .count()
}

fn is_blank(line: &str) -> bool {
    leading_whitespace(line) == line.len()
}
