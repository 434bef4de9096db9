//! Divides an input sequence into roughly equal contiguous chunks.


/// Split `input` into at most `count` contiguous chunks of equal stride.
///
/// The stride is `max(1, input.len() / count)` with integer division; the
/// final chunk may be shorter when the length is not an exact multiple.
/// Because the stride is clamped to 1, inputs shorter than `count` produce
/// fewer chunks than requested, and short strides can produce more — callers
/// that rely on an exact chunk count should not (see `split_text` tests for
/// the exact partitions).
///
/// Concatenating the returned chunks in order always reproduces `input`.
/// An empty input yields an empty result.
///
/// # Panics
///
/// Panics if `count` is zero.
pub fn split<T>(input: &[T], count: usize) -> Vec<&[T]> {
    if input.is_empty() {
        return vec![];
    }

    let chunk_size = (input.len() / count).max(1);
    input.chunks(chunk_size).collect()
}

/// [`split`] over the characters of a string, slicing at char boundaries.
///
/// The stride is computed from the character count, so concatenation is exact
/// for any UTF-8 input.
///
/// # Panics
///
/// Panics if `count` is zero.
pub fn split_text(input: &str, count: usize) -> Vec<&str> {
    if input.is_empty() {
        return vec![];
    }

    let char_count = input.chars().count();
    let chunk_size = (char_count / count).max(1);

    let mut chunks = Vec::with_capacity(char_count.div_ceil(chunk_size));
    let mut start = 0;
    let mut chars_in_chunk = 0;

    for (offset, _) in input.char_indices() {
        if chars_in_chunk == chunk_size {
            chunks.push(&input[start..offset]);
            start = offset;
            chars_in_chunk = 0;
        }
        chars_in_chunk += 1;
    }
    chunks.push(&input[start..]);

    chunks
}
