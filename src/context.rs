/// Positions within `window` of `idx` in a sentence of length `len`.
///
/// Left neighbours come first, nearest first, then right neighbours, nearest first.
/// Positions falling outside the sentence are omitted, there is no padding.
pub fn context_positions(len: usize, idx: usize, window: usize) -> Vec<usize> {
    let mut positions = Vec::with_capacity(2 * window.min(len));
    if idx >= len {
        return positions;
    }
    positions.extend((1..=window.min(idx)).map(|d| idx - d));
    positions.extend((1..=window).map(|d| idx + d).take_while(|j| *j < len));
    positions
}

/// The context words of the word at `idx`.
pub fn context_window<S: AsRef<str>>(sentence: &[S], idx: usize, window: usize) -> Vec<&str> {
    context_positions(sentence.len(), idx, window)
    .into_iter()
    .map(|j| sentence[j].as_ref())
    .collect()
}
