use std::cmp::Ordering;

use crate::models::Candidate;

/// Seed ordering for the router.
///
/// Wishlist entries come first, then rating tier descending. The sort is
/// stable, so equal entries keep their input order.
pub fn prioritize(candidates: &[Candidate]) -> Vec<&Candidate> {
    let mut ordered: Vec<&Candidate> = candidates.iter().collect();
    ordered.sort_by(|a, b| compare_priority(a, b));
    ordered
}

/// Priority comparison: `Less` means `a` is seeded before `b`.
pub fn compare_priority(a: &Candidate, b: &Candidate) -> Ordering {
    b.wishlist
        .cmp(&a.wishlist)
        .then_with(|| b.rating.cmp(&a.rating))
}
