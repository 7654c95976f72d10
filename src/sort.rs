//! Natural ("human") ordering of names.
//!
//! Runs of ASCII digits compare by numeric value and everything else compares
//! as text, so `"Trial 2"` sorts before `"Trial 10"`.

use std::cmp::Ordering;

#[derive(Debug, Clone, Copy)]
enum Chunk<'a> {
    Text(&'a str),
    Number(&'a str),
}

impl Ord for Chunk<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Chunk::Number(a), Chunk::Number(b)) => compare_digits(a, b),
            (Chunk::Text(a), Chunk::Text(b)) => a.cmp(b),
            // Chunks alternate text/number from a leading text chunk, so
            // mixed pairs only occur at different positions.
            (Chunk::Text(_), Chunk::Number(_)) => Ordering::Less,
            (Chunk::Number(_), Chunk::Text(_)) => Ordering::Greater,
        }
    }
}

impl PartialEq for Chunk<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Chunk<'_> {}

impl PartialOrd for Chunk<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compare two digit runs by value without parsing into a fixed-width integer.
fn compare_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Split into alternating text and digit chunks, always starting with text.
fn chunks(s: &str) -> Vec<Chunk<'_>> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut in_digits = false;

    for (i, c) in s.char_indices() {
        let is_digit = c.is_ascii_digit();
        if is_digit != in_digits {
            out.push(chunk(&s[start..i], in_digits));
            start = i;
            in_digits = is_digit;
        }
    }
    out.push(chunk(&s[start..], in_digits));
    out
}

fn chunk(text: &str, digits: bool) -> Chunk<'_> {
    if digits {
        Chunk::Number(text)
    } else {
        Chunk::Text(text)
    }
}

/// Natural ordering of two strings.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    chunks(a).cmp(&chunks(b))
}

/// Sorted copy of `things` in natural order. Equal keys keep their order.
pub fn sort_nicely<T: AsRef<str> + Clone>(things: &[T]) -> Vec<T> {
    let mut sorted = things.to_vec();
    sorted.sort_by(|a, b| natural_cmp(a.as_ref(), b.as_ref()));
    sorted
}
