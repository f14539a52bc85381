use super::model::{CompetitionCategory, Offer};

// ---------------------------------------------------------------------------
// Filter predicate: course + competition category
// ---------------------------------------------------------------------------

/// Offers for `course` (exact, case-sensitive match) in the given category,
/// in dataset order.
pub fn matching_offers<'a>(
    offers: &'a [Offer],
    course: &str,
    category: CompetitionCategory,
) -> Vec<&'a Offer> {
    offers
        .iter()
        .filter(|o| o.course_name == course && category.admits(&o.competition_category))
        .collect()
}
