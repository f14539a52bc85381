use super::filter::matching_offers;
use super::model::{CompetitionCategory, Offer};

/// An eligible offer together with how far the score clears its cutoff.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedOffer {
    pub offer: Offer,
    pub cutoff: f64,
    /// `score - cutoff`, never negative.
    pub margin: f64,
}

/// Statistics for a non-empty course/category selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub score: f64,
    pub total_offers: usize,
    pub eligible_count: usize,
    /// Mean over available cutoffs; `None` when every cutoff is missing.
    pub mean_cutoff: Option<f64>,
    /// Eligible offers, highest cutoff first. Ties keep dataset order.
    pub ranked: Vec<RankedOffer>,
    /// Only set when nothing is eligible and some cutoff is available.
    pub min_cutoff: Option<f64>,
    pub points_needed: Option<f64>,
    /// Available cutoffs of the selection, in dataset order.
    pub cutoffs: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum EligibilityResult {
    /// No positive score entered yet.
    #[default]
    NoQuery,
    /// The course has no offers in the selected category.
    NoOffersFound,
    Evaluated(Evaluation),
}

/// Evaluate which offers `score` would clear for a course and category.
///
/// A score that is absent, not positive or NaN short-circuits to
/// [`EligibilityResult::NoQuery`].
pub fn evaluate(
    offers: &[Offer],
    score: Option<f64>,
    course: &str,
    category: CompetitionCategory,
) -> EligibilityResult {
    let Some(score) = score.filter(|s| *s > 0.0) else {
        return EligibilityResult::NoQuery;
    };

    let selected = matching_offers(offers, course, category);
    if selected.is_empty() {
        return EligibilityResult::NoOffersFound;
    }

    let cutoffs: Vec<f64> = selected.iter().filter_map(|o| o.cutoff_score).collect();
    let mean_cutoff =
        (!cutoffs.is_empty()).then(|| cutoffs.iter().sum::<f64>() / cutoffs.len() as f64);

    let mut ranked: Vec<RankedOffer> = selected
        .iter()
        .filter_map(|o| {
            let cutoff = o.cutoff_score.filter(|c| *c <= score)?;
            Some(RankedOffer {
                offer: (*o).clone(),
                cutoff,
                margin: score - cutoff,
            })
        })
        .collect();
    // `sort_by` is stable, so equal cutoffs keep dataset order.
    ranked.sort_by(|a, b| b.cutoff.total_cmp(&a.cutoff));

    let (min_cutoff, points_needed) = if ranked.is_empty() {
        let min = cutoffs.iter().copied().reduce(f64::min);
        (min, min.map(|m| m - score))
    } else {
        (None, None)
    };

    EligibilityResult::Evaluated(Evaluation {
        score,
        total_offers: selected.len(),
        eligible_count: ranked.len(),
        mean_cutoff,
        ranked,
        min_cutoff,
        points_needed,
        cutoffs,
    })
}
