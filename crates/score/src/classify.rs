//! Arg-max class selection over score rows.

/// Picks the highest-scoring class of every row.
///
/// Only finite values compete. Ties keep the lowest class index, and a row
/// with no columns or no finite value selects class `0`.
///
/// ```
/// use frnn_score::select_class;
///
/// let scores = vec![vec![0.2, 0.5, 0.3], vec![0.4, 0.4, 0.2], vec![f64::NAN, 0.1]];
/// assert_eq!(select_class(&scores), vec![1, 0, 1]);
/// ```
pub fn select_class(scores: &[Vec<f64>]) -> Vec<usize> {
    scores.iter().map(|row| argmax_finite(row)).collect()
}

fn argmax_finite(row: &[f64]) -> usize {
    let mut best: Option<(usize, f64)> = None;
    for (class, &value) in row.iter().enumerate() {
        if !value.is_finite() {
            continue;
        }
        match best {
            Some((_, top)) if value <= top => {}
            _ => best = Some((class, value)),
        }
    }
    best.map_or(0, |(class, _)| class)
}
