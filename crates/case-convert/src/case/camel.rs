/// Returns `true` for the two characters that separate words in snake_case
/// and kebab-case identifiers.
#[inline]
pub(crate) fn is_separator(c: char) -> bool {
    c == '_' || c == '-'
}

/// Convert an identifier to camelCase.
///
/// A leading uppercase letter is lowercased. Every `_` or `-` that is
/// directly followed by a lowercase letter or a digit is dropped and the
/// following character is uppercased. Separators followed by anything else
/// (another separator, an uppercase letter, the end of the string) are kept.
///
/// # Examples
///
/// ```
/// use case_convert::to_camel_case;
///
/// assert_eq!(to_camel_case("object_array"), "objectArray");
/// assert_eq!(to_camel_case("kebab-case-key"), "kebabCaseKey");
/// assert_eq!(to_camel_case("PascalCase"), "pascalCase");
/// assert_eq!(to_camel_case("A"), "a");
/// ```
pub fn to_camel_case(identifier: &str) -> String {
    let mut chars = identifier.chars().peekable();

    let first = match chars.next() {
        Some(c) => c,
        None => return String::new(),
    };
    if chars.peek().is_none() {
        return first.to_ascii_lowercase().to_string();
    }

    let mut out = String::with_capacity(identifier.len());
    let mut pending = Some(first.to_ascii_lowercase());

    // `pending` holds the character under inspection; it only joins the output
    // once we know it is not a separator that swallows its follower.
    while let Some(c) = pending.take() {
        match chars.peek() {
            Some(&next) if is_separator(c) && is_camel_follower(next) => {
                chars.next();
                out.push(next.to_ascii_uppercase());
            }
            _ => out.push(c),
        }
        pending = chars.next();
    }

    out
}

#[inline]
fn is_camel_follower(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit()
}
