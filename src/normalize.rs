//! ASCII folding of numeral forms and concept glosses

use deunicode::deunicode;

/// Lowercase and keep only ASCII letters and digits.
pub fn slug(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Transliterate a form to plain ASCII for comparison.
///
/// `@` (schwa in some sources) becomes `a` before slugging.
pub fn simple_chars(form: &str) -> String {
    slug(&deunicode(form).replace('@', "a"))
}
