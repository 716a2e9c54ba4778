use std::collections::BTreeSet;

/// Set-Jaccard similarity of two tag lists; 0 when both are empty
///
/// Duplicates within a list are ignored.
pub fn jaccard<S: AsRef<str>>(a: &[S], b: &[S]) -> f64 {
    let left: BTreeSet<&str> = a.iter().map(AsRef::as_ref).collect();
    let right: BTreeSet<&str> = b.iter().map(AsRef::as_ref).collect();

    let union = left.union(&right).count();
    if union == 0 {
        return 0.0;
    }

    left.intersection(&right).count() as f64 / union as f64
}

/// Number of distinct tags present in both lists
pub fn intersection_count<S: AsRef<str>>(a: &[S], b: &[S]) -> usize {
    let left: BTreeSet<&str> = a.iter().map(AsRef::as_ref).collect();
    b.iter()
        .map(AsRef::as_ref)
        .collect::<BTreeSet<&str>>()
        .intersection(&left)
        .count()
}

/// Sorted tags common to both sets
pub fn shared_tags<'a>(a: &BTreeSet<&'a str>, b: &BTreeSet<&'a str>) -> Vec<&'a str> {
    a.intersection(b).copied().collect()
}
