//! Brazilian taxpayer document validation (`CPF` / `CNPJ`).
//!
//! Both formats end in two modulo-11 check digits. The second check digit is
//! computed over the body plus the first check digit, so each weight table
//! below is the second-digit table; the first digit uses the same table
//! without its leading weight.

use std::fmt;

const CPF_LENGTH: usize = 11;
const CNPJ_LENGTH: usize = 14;

const CPF_WEIGHTS: [u32; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];
const CNPJ_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Which document a digit string looks like, decided by length alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Individual taxpayer number, 11 digits.
    Cpf,
    /// Corporate taxpayer number, 14 digits.
    Cnpj,
}

impl DocumentKind {
    /// Classify `input` after stripping everything that is not an ASCII digit.
    /// Returns `None` unless exactly 11 or 14 digits remain.
    #[must_use]
    pub fn detect(input: &str) -> Option<Self> {
        match digits(input).len() {
            CPF_LENGTH => Some(Self::Cpf),
            CNPJ_LENGTH => Some(Self::Cnpj),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cpf => "cpf",
            Self::Cnpj => "cnpj",
        }
    }

    const fn length(self) -> usize {
        match self {
            Self::Cpf => CPF_LENGTH,
            Self::Cnpj => CNPJ_LENGTH,
        }
    }

    const fn weights(self) -> &'static [u32] {
        match self {
            Self::Cpf => &CPF_WEIGHTS,
            Self::Cnpj => &CNPJ_WEIGHTS,
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keep only the ASCII digits of `input`, in order.
///
/// ```
/// assert_eq!(ntools::tools::only_numbers("(11) 98765-4321"), "11987654321");
/// ```
#[must_use]
pub fn only_numbers(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Validate a `CPF` or a `CNPJ`, whichever the digit count says it is.
///
/// Formatting is ignored: `"123.456.789-09"` and `"12345678909"` give the same answer.
/// Anything that is not 11 or 14 digits long is `false`.
#[must_use]
pub fn validate_cpf_or_cnpj(input: &str) -> bool {
    DocumentKind::detect(input).is_some_and(|kind| validate(kind, input))
}

/// Validate `input` strictly as a `CPF`.
#[must_use]
pub fn validate_cpf(input: &str) -> bool {
    validate(DocumentKind::Cpf, input)
}

/// Validate `input` strictly as a `CNPJ`.
#[must_use]
pub fn validate_cnpj(input: &str) -> bool {
    validate(DocumentKind::Cnpj, input)
}

fn validate(kind: DocumentKind, input: &str) -> bool {
    let digits = digits(input);

    if digits.len() != kind.length() {
        return false;
    }

    // Repeated-digit sequences satisfy the checksum but are never issued.
    if digits.iter().all(|&digit| digit == digits[0]) {
        return false;
    }

    let weights = kind.weights();
    let len = digits.len();

    let first = check_digit(&digits[..len - 2], &weights[1..]);
    if digits[len - 2] != first {
        return false;
    }

    let second = check_digit(&digits[..len - 1], weights);
    digits[len - 1] == second
}

fn digits(input: &str) -> Vec<u32> {
    input.chars().filter_map(|c| c.to_digit(10)).collect()
}

fn check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits
        .iter()
        .zip(weights)
        .map(|(digit, weight)| digit * weight)
        .sum();

    match sum % 11 {
        rem if rem < 2 => 0,
        rem => 11 - rem,
    }
}
