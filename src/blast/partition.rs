/// Split `original` into exactly `count` contiguous segments.
///
/// Every segment is `original.len() / count` bytes long except the last, which
/// also takes whatever the division leaves over. Returns an empty list when
/// `count` is zero or larger than the input.
#[must_use]
pub fn partition(original: &str, count: usize) -> Vec<&str> {
    if count == 0 || count > original.len() {
        return Vec::new();
    }

    let size = original.len() / count;
    let mut segments: Vec<&str> = (0..count - 1)
        .map(|i| &original[i * size..(i + 1) * size])
        .collect();
    segments.push(&original[(count - 1) * size..]);
    segments
}
