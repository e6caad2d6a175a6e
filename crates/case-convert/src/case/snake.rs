/// Options controlling how [`to_snake_case_with`] places word boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SnakeCaseOptions {
    /// Maximum number of underscores inserted into a single identifier.
    ///
    /// `None` places every boundary. With `Some(n)`, digit boundaries are
    /// granted first (left to right) and whatever budget remains goes to
    /// capital boundaries (left to right); once the budget is spent the rest
    /// of the identifier is only lowercased.
    pub boundary_limit: Option<usize>,
    /// Whether a digit that directly follows an uppercase letter starts a new
    /// word (`aB1` -> `a_b_1`) or stays attached to it (`aB1` -> `a_b1`).
    pub split_digits_after_uppercase: bool,
}

impl SnakeCaseOptions {
    /// Boundary rules of the original JavaScript implementation: at most ten
    /// boundaries per identifier, and only lowercase letters split off a
    /// following digit.
    pub const LEGACY: Self = Self {
        boundary_limit: Some(10),
        split_digits_after_uppercase: false,
    };
}

impl Default for SnakeCaseOptions {
    fn default() -> Self {
        Self {
            boundary_limit: None,
            split_digits_after_uppercase: true,
        }
    }
}

/// Convert an identifier to snake_case.
///
/// An underscore is inserted before every uppercase letter except the first
/// character, and before the first digit of a run that follows a letter.
/// The result is lowercased.
///
/// # Examples
///
/// ```
/// use case_convert::to_snake_case;
///
/// assert_eq!(to_snake_case("objectArray"), "object_array");
/// assert_eq!(to_snake_case("ObjectArray"), "object_array");
/// assert_eq!(to_snake_case("aaaBbb1"), "aaa_bbb_1");
/// assert_eq!(to_snake_case("abc12"), "abc_12");
/// ```
pub fn to_snake_case(identifier: &str) -> String {
    to_snake_case_with(identifier, SnakeCaseOptions::default())
}

/// Convert an identifier to snake_case using explicit [`SnakeCaseOptions`].
///
/// # Examples
///
/// ```
/// use case_convert::{to_snake_case_with, SnakeCaseOptions};
///
/// assert_eq!(to_snake_case_with("aB1", SnakeCaseOptions::default()), "a_b_1");
/// assert_eq!(to_snake_case_with("aB1", SnakeCaseOptions::LEGACY), "a_b1");
/// ```
pub fn to_snake_case_with(identifier: &str, options: SnakeCaseOptions) -> String {
    let (mut digit_budget, mut capital_budget) = match options.boundary_limit {
        None => (usize::MAX, usize::MAX),
        Some(limit) => {
            let digits = count_digit_boundaries(identifier, options).min(limit);
            (digits, limit - digits)
        }
    };

    let mut out = String::with_capacity(identifier.len() + identifier.len() / 2);
    let mut prev: Option<char> = None;
    let mut truncated = false;

    for c in identifier.chars() {
        let boundary = match prev {
            Some(p) if c.is_ascii_digit() && starts_digit_word(p, options) => {
                Some(&mut digit_budget)
            }
            Some(_) if c.is_ascii_uppercase() => Some(&mut capital_budget),
            _ => None,
        };
        if let Some(budget) = boundary {
            if *budget > 0 {
                *budget -= 1;
                out.push('_');
            } else {
                truncated = true;
            }
        }
        out.push(c.to_ascii_lowercase());
        prev = Some(c);
    }

    if truncated {
        tracing::debug!(
            identifier,
            limit = ?options.boundary_limit,
            "snake_case boundary limit reached, remaining boundaries skipped"
        );
    }

    out
}

#[inline]
fn starts_digit_word(prev: char, options: SnakeCaseOptions) -> bool {
    prev.is_ascii_lowercase() || (options.split_digits_after_uppercase && prev.is_ascii_uppercase())
}

fn count_digit_boundaries(identifier: &str, options: SnakeCaseOptions) -> usize {
    let mut count = 0;
    let mut prev: Option<char> = None;
    for c in identifier.chars() {
        if matches!(prev, Some(p) if c.is_ascii_digit() && starts_digit_word(p, options)) {
            count += 1;
        }
        prev = Some(c);
    }
    count
}
