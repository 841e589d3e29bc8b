//! Slug generation for human-entered text.
//!
//! Output is lowercase `[a-z0-9]` segments joined by single hyphens, or the
//! empty string when nothing Latin survives (e.g. purely CJK or Cyrillic input).
//! Callers that need a non-empty slug must supply their own fallback, for
//! instance a short unique identifier.

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Converts `input` into a URL-safe slug.
///
/// Accents are removed by decomposing (NFD), dropping combining marks and
/// recomposing (NFC); every remaining character that is not an ASCII letter,
/// ASCII digit, whitespace or hyphen is dropped; runs of whitespace and hyphens
/// collapse to a single `-`; leading and trailing hyphens are trimmed.
///
/// The function is idempotent: `generate_slug(&generate_slug(s)) == generate_slug(s)`.
///
/// ```
/// assert_eq!(ntools::tools::generate_slug("São Paulo"), "sao-paulo");
/// ```
#[must_use]
pub fn generate_slug(input: &str) -> String {
    if input.trim().is_empty() {
        return String::new();
    }

    let folded: String = input
        .nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .nfc()
        .collect();

    let mut slug = String::with_capacity(folded.len());
    let mut prev_dash = false;
    for ch in folded.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            prev_dash = false;
        } else if (ch.is_whitespace() || ch == '-') && !prev_dash {
            slug.push('-');
            prev_dash = true;
        }
    }

    slug.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn assert_slugs(cases: &[(&str, &str)]) {
        for (input, expected) in cases {
            assert_eq!(generate_slug(input), *expected, "input: {input:?}");
        }
    }

    #[test]
    fn test_basic_text() {
        assert_slugs(&[
            ("Hello World", "hello-world"),
            ("Test String", "test-string"),
            ("UPPERCASE", "uppercase"),
            ("CamelCaseText", "camelcasetext"),
        ]);
    }

    #[test]
    fn test_empty_or_whitespace() {
        for input in ["", "   ", "\t", "\n", "\r\n \t"] {
            assert_eq!(generate_slug(input), "", "input: {input:?}");
        }
    }

    #[test]
    fn test_accents_removed() {
        assert_slugs(&[
            ("café", "cafe"),
            ("naïve", "naive"),
            ("résumé", "resume"),
            ("piñata", "pinata"),
            ("Ação", "acao"),
            ("Ótimo", "otimo"),
            ("É possível", "e-possivel"),
            ("Müller", "muller"),
            ("Zürich", "zurich"),
            ("Ñoño", "nono"),
            ("Año Nuevo", "ano-nuevo"),
            ("Côte d'Ivoire", "cote-divoire"),
            ("Château", "chateau"),
            ("Français", "francais"),
            ("Múltiplos Ácêntõs Pára Téstãr", "multiplos-acentos-para-testar"),
        ]);
    }

    #[test]
    fn test_decomposed_input() {
        // "cafe" followed by U+0301 COMBINING ACUTE ACCENT
        assert_eq!(generate_slug("cafe\u{301} noir"), "cafe-noir");
    }

    #[test]
    fn test_special_characters() {
        assert_slugs(&[
            ("Hello! World?", "hello-world"),
            ("Test & Example", "test-example"),
            ("Price: $100", "price-100"),
            ("Email: test@example.com", "email-testexamplecom"),
            ("C# Programming", "c-programming"),
            ("C++ Language", "c-language"),
            ("50% Off!", "50-off"),
            ("(Example)", "example"),
            ("<HTML>", "html"),
            ("!!!", ""),
            ("@@@", ""),
        ]);
    }

    #[test]
    fn test_whitespace_and_hyphens() {
        assert_slugs(&[
            ("  Hello   World!!  ", "hello-world"),
            ("Multiple   Spaces", "multiple-spaces"),
            ("Tab\tCharacter", "tab-character"),
            ("New\nLine", "new-line"),
            ("Test--Double--Hyphen", "test-double-hyphen"),
            ("Multiple---Hyphens", "multiple-hyphens"),
            ("-Both Sides-", "both-sides"),
            ("a - ! - b", "a-b"),
            ("São Paulo - SP", "sao-paulo-sp"),
        ]);
    }

    #[test]
    fn test_real_world() {
        assert_slugs(&[
            ("Version 2.0", "version-20"),
            ("10 Dicas para Programação em C#", "10-dicas-para-programacao-em-c"),
            ("Introdução ao .NET Core", "introducao-ao-net-core"),
            ("Smart TV 55\" 4K Samsung", "smart-tv-55-4k-samsung"),
            ("Rio de Janeiro/RJ", "rio-de-janeirorj"),
            ("Brasília (DF)", "brasilia-df"),
            ("1984 - George Orwell", "1984-george-orwell"),
            ("José #1 Developer", "jose-1-developer"),
            ("Café & Restaurante - Centro", "cafe-restaurante-centro"),
        ]);
    }

    #[test]
    fn test_non_latin_scripts_yield_empty() {
        assert_slugs(&[("東京", ""), ("Москва", ""), ("Tokyo 東京", "tokyo")]);
    }

    #[test]
    fn test_output_shape_and_idempotence() {
        let shape = Regex::new(r"^([a-z0-9]+(-[a-z0-9]+)*)?$").expect("valid regex");
        let inputs = [
            "Hello World",
            "Café com Leite",
            "Test! @#$ 123",
            "--a--b--",
            "  -  ",
            "hello-world",
            "Ünïcödé    tëxt -- with   ÄLL sorts!!! of ~~ noise ---",
            "ǅemal ﬁnance",
        ];
        for input in inputs {
            let slug = generate_slug(input);
            assert!(shape.is_match(&slug), "{input:?} -> {slug:?}");
            assert!(!slug.contains("--"));
            assert!(!slug.starts_with('-') && !slug.ends_with('-'));
            assert_eq!(generate_slug(&slug), slug, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_long_input() {
        let input = "Palavra Acentuada É ".repeat(5_000);
        let slug = generate_slug(&input);
        assert!(slug.starts_with("palavra-acentuada-e-palavra"));
        assert!(!slug.ends_with('-'));
    }
}
