//! Typo suggestions for rejected attribute names.
//!
//! Scoring counts the characters two names share in one contiguous run from
//! each end. Names with a common prefix, a common suffix, or both score
//! highly, while scattered coincidences do not.

/// Score and length difference recorded for one candidate during the
/// best-match scan.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Candidate {
    /// Existing attribute name.
    pub key: String,
    /// Result of [`total_matching`] against the offending name.
    pub total_matching: usize,
    /// Absolute difference between the two names' lengths, in characters.
    pub length_delta: usize,
}

impl Candidate {
    fn score(key: &str, offending_lower: &str, offending_len: usize) -> Self {
        Self {
            key: key.to_owned(),
            total_matching: total_matching(&key.to_lowercase(), offending_lower),
            length_delta: key.chars().count().abs_diff(offending_len),
        }
    }

    const fn beats(&self, other: &Self) -> bool {
        self.total_matching > other.total_matching
            || (self.total_matching == other.total_matching
                && self.length_delta < other.length_delta)
    }
}

/// Counts the characters `a` and `b` have in common at either end.
///
/// The longer name is scanned from the left, tracking a contiguous run of
/// characters that also appear consecutively in the shorter one, then the
/// same is done from the right over whatever the left scan did not consume.
/// The sum of both runs is capped at the shorter name's length.
///
/// Characters are compared exactly; callers that want case-insensitive
/// scores lowercase both names first, as [`best_match`] does.
///
/// # Examples
/// ```rust
/// use helpful_merge::total_matching;
///
/// assert_eq!(total_matching("foo", "fooBar"), 3);
/// assert_eq!(total_matching("fooBarCar", "fooBrrCar"), 8);
/// assert_eq!(total_matching("foo", "bar"), 0);
/// ```
#[must_use]
pub fn total_matching(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (longer, shorter) = if a.len() > b.len() { (a, b) } else { (b, a) };

    let (left_total, consumed) = scan_from_left(&longer, &shorter);
    let right_total = scan_from_right(&longer, &shorter, consumed);

    shorter.len().min(left_total + right_total)
}

/// Returns the left run length and the number of `longer` characters the
/// scan consumed.
fn scan_from_left(longer: &[char], shorter: &[char]) -> (usize, usize) {
    let mut total = 0;
    let mut inner = 0;
    let mut last_common: Option<usize> = None;
    let mut left = 0;

    while let Some(&current) = longer.get(left) {
        while total == 0 && inner < shorter.len() && shorter.get(inner) != Some(&current) {
            inner += 1;
        }

        if shorter.get(inner) == Some(&current) {
            if last_common.map_or(left != 0, |index| index + 1 != left) {
                total = 0;
            }
            last_common = Some(left);
            total += 1;
            inner += 1;
            if total == shorter.len() {
                break;
            }
        } else if total > 1 {
            break;
        } else {
            total = 0;
            inner = 0;
        }
        left += 1;
    }

    (total, left)
}

fn scan_from_right(longer: &[char], shorter: &[char], consumed: usize) -> usize {
    let from_end = |chars: &[char], offset: usize| {
        chars
            .len()
            .checked_sub(offset + 1)
            .and_then(|index| chars.get(index).copied())
    };
    let mut total = 0;
    let mut inner = 0;
    let mut last_common: Option<usize> = None;

    for right in 0..longer.len().saturating_sub(consumed) {
        let current = from_end(longer, right);
        while total == 0 && inner < shorter.len() && from_end(shorter, inner) != current {
            inner += 1;
        }

        if current.is_some() && from_end(shorter, inner) == current {
            if last_common.map_or(right != 0, |index| index + 1 != right) {
                total = 0;
            }
            last_common = Some(right);
            total += 1;
            inner += 1;
        } else if total > 1 {
            break;
        } else {
            total = 0;
            inner = 0;
        }
    }

    total
}

/// Picks the candidate most likely meant by `offending`.
///
/// Both names are lowercased before scoring. The highest score wins, ties go
/// to the candidate whose length is closest to `offending`, and earlier
/// candidates win exact ties. A winning score of one or less is too weak to
/// suggest and yields `None`.
///
/// # Examples
/// ```rust
/// use helpful_merge::best_match;
///
/// assert_eq!(best_match(["foo", "bar"], "baz").as_deref(), Some("bar"));
/// assert_eq!(best_match(["foo"], "qux"), None);
/// ```
#[must_use]
pub fn best_match<I, S>(candidates: I, offending: &str) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    best_candidate(candidates, offending)
        .filter(|candidate| candidate.total_matching > 1)
        .map(|candidate| candidate.key)
}

/// Scores every candidate and returns the winner, however weak.
#[must_use]
pub fn best_candidate<I, S>(candidates: I, offending: &str) -> Option<Candidate>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let offending_lower = offending.to_lowercase();
    let offending_len = offending.chars().count();

    candidates.into_iter().fold(None, |best, key| {
        let candidate = Candidate::score(key.as_ref(), &offending_lower, offending_len);
        match best {
            Some(current) if !candidate.beats(&current) => Some(current),
            _ => Some(candidate),
        }
    })
}
