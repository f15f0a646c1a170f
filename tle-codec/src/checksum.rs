//! Modulo-10 element line checksum

/// Checksum of an element line with its trailing checksum digit already removed.
///
/// Digits count their value, `-` counts as one and everything else is ignored.
pub fn checksum(line: &str) -> u8 {
    let sum: u32 = line.chars().map(char_value).sum();
    (sum % 10) as u8
}

fn char_value(c: char) -> u32 {
    match c {
        '-' => 1,
        c => c.to_digit(10).unwrap_or(0),
    }
}

/// Splits a complete element line into its body and trailing checksum digit
pub(crate) fn split_checksum(line: &str) -> Option<(&str, u8)> {
    let last = line.chars().last()?;
    let digit = last.to_digit(10)?;
    Some((&line[..line.len() - last.len_utf8()], digit as u8))
}

/// Appends the checksum digit of `line` to itself
pub(crate) fn append_checksum(line: &mut String) {
    let digit = checksum(line);
    line.push(char::from(b'0' + digit));
}
