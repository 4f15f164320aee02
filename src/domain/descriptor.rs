//! Distribution package descriptor rewriting.

/// Replace every literal occurrence of the previous release folder name with the next one.
///
/// Works on raw bytes, so descriptors saved in a legacy code page such as cp1251
/// keep their text intact. Occurrences are replaced left to right without overlap.
/// Returns the rewritten content and the number of replacements.
pub fn retarget_descriptor(content: &[u8], previous: &str, next: &str) -> (Vec<u8>, usize) {
    let needle = previous.as_bytes();
    if needle.is_empty() {
        return (content.to_vec(), 0);
    }

    let mut rewritten = Vec::with_capacity(content.len());
    let mut count = 0;
    let mut rest = content;
    while let Some(pos) = find(rest, needle) {
        rewritten.extend_from_slice(&rest[..pos]);
        rewritten.extend_from_slice(next.as_bytes());
        rest = &rest[pos + needle.len()..];
        count += 1;
    }
    rewritten.extend_from_slice(rest);
    (rewritten, count)
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|window| window == needle)
}
