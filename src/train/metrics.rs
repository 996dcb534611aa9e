//! Ranking metrics
//!
//! Pooled ROC AUC over (label, score) pairs. Equivalent to the
//! Mann-Whitney U statistic: tied scores receive their average rank, so the
//! result matches the trapezoidal area under the ROC curve.

use std::cmp::Ordering;

/// Area under the ROC curve for binary labels and continuous scores
///
/// Labels at or above 0.5 count as the positive class. Returns `None` when
/// the pool contains a single class (AUC is undefined there).
///
/// # Example
///
/// ```
/// use grafeno::train::roc_auc;
///
/// let labels = [0.0, 0.0, 1.0, 1.0];
/// let scores = [0.1, 0.4, 0.35, 0.8];
/// assert!((roc_auc(&labels, &scores).unwrap() - 0.75).abs() < 1e-6);
///
/// assert!(roc_auc(&[1.0, 1.0], &[0.2, 0.9]).is_none());
/// ```
pub fn roc_auc(labels: &[f32], scores: &[f32]) -> Option<f32> {
    assert_eq!(
        labels.len(),
        scores.len(),
        "Labels and scores must have same length"
    );

    let n = labels.len();
    let n_pos = labels.iter().filter(|&&l| l >= 0.5).count();
    let n_neg = n - n_pos;
    if n_pos == 0 || n_neg == 0 {
        return None;
    }

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| scores[a].partial_cmp(&scores[b]).unwrap_or(Ordering::Equal));

    // 1-based ranks, averaged over runs of tied scores
    let mut ranks = vec![0.0f64; n];
    let mut i = 0;
    while i < n {
        let mut j = i;
        while j + 1 < n && scores[order[j + 1]] == scores[order[i]] {
            j += 1;
        }
        let avg_rank = (i + j) as f64 / 2.0 + 1.0;
        for k in i..=j {
            ranks[order[k]] = avg_rank;
        }
        i = j + 1;
    }

    let positive_rank_sum: f64 = labels
        .iter()
        .zip(ranks.iter())
        .filter(|(&label, _)| label >= 0.5)
        .map(|(_, &rank)| rank)
        .sum();

    let n_pos = n_pos as f64;
    let n_neg = n_neg as f64;
    let auc = (positive_rank_sum - n_pos * (n_pos + 1.0) / 2.0) / (n_pos * n_neg);
    Some(auc as f32)
}
