//! Case helpers for headwords and description clauses.

/// Upper-cases the first character and lower-cases the rest.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Upper-cases the first letter of every run of letters and lower-cases the
/// rest, so `"guarda-CHUVA"` becomes `"Guarda-Chuva"`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_alpha = false;
    for c in text.chars() {
        if prev_is_alpha {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_is_alpha = c.is_alphabetic();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_lowers_the_tail() {
        assert_eq!(capitalize("ação DE agir"), "Ação de agir");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn title_case_each_word() {
        assert_eq!(title_case("maçã"), "Maçã");
        assert_eq!(title_case("guarda-CHUVA"), "Guarda-Chuva");
        assert_eq!(title_case("pé de moleque"), "Pé De Moleque");
    }
}
