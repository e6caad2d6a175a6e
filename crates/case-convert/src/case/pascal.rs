use super::camel::to_camel_case;

/// Convert an identifier to PascalCase.
///
/// Segments words exactly like [`to_camel_case`] and then uppercases the
/// first character.
///
/// # Examples
///
/// ```
/// use case_convert::to_pascal_case;
///
/// assert_eq!(to_pascal_case("object_array"), "ObjectArray");
/// assert_eq!(to_pascal_case("objectArray"), "ObjectArray");
/// assert_eq!(to_pascal_case("a"), "A");
/// ```
pub fn to_pascal_case(identifier: &str) -> String {
    let mut out = to_camel_case(identifier);
    if let Some(first) = out.get_mut(..1) {
        first.make_ascii_uppercase();
    }
    out
}
