use std::collections::HashMap;

/// Returns up to `limit` `(token, count)` pairs, highest count first.
///
/// Matching is exact and case-sensitive. Equal counts keep the order in
/// which each token first appeared: distinct tokens are recorded in arrival
/// order and the sort is stable.
pub fn rank<S: AsRef<str>>(tokens: &[S], limit: usize) -> Vec<(String, usize)> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();

    for token in tokens {
        let token = token.as_ref();
        match positions.get(token) {
            Some(&pos) => counts[pos].1 += 1,
            None => {
                positions.insert(token, counts.len());
                counts.push((token, 1));
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(limit);

    counts
        .into_iter()
        .map(|(token, count)| (token.to_string(), count))
        .collect()
}
