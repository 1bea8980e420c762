//! "Did you mean" matching over edit distance.

/// Closest candidate to `word` by Levenshtein distance, ignoring ASCII case.
///
/// An exact match returns immediately. Ties keep the first candidate seen.
/// `None` only when `candidates` is empty.
pub fn suggest<I, S>(word: &str, candidates: I) -> Option<S>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let word = word.to_lowercase();
    let mut best: Option<(usize, S)> = None;
    for candidate in candidates {
        let distance = strsim::levenshtein(&word, &candidate.as_ref().to_lowercase());
        if distance == 0 {
            return Some(candidate);
        }
        if best.as_ref().is_none_or(|(min, _)| distance < *min) {
            best = Some((distance, candidate));
        }
    }
    best.map(|(_, candidate)| candidate)
}

/// Like [`suggest`], but `None` when the closest candidate is the word itself.
pub fn correction<I, S>(word: &str, candidates: I) -> Option<S>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    suggest(word, candidates).filter(|c| !c.as_ref().eq_ignore_ascii_case(word))
}
