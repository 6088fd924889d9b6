//! ISBN normalization and checksum validation

/// Normalize ISBN by removing hyphens and spaces
pub fn normalize_isbn(isbn: &str) -> String {
    isbn.chars()
        .filter(|c| c.is_ascii_digit() || *c == 'X' || *c == 'x')
        .collect::<String>()
        .to_uppercase()
}

/// Validate an ISBN-10 or ISBN-13 checksum after normalization
pub fn is_valid_isbn(isbn: &str) -> bool {
    let normalized = normalize_isbn(isbn);
    match normalized.len() {
        10 => validate_isbn10(&normalized),
        13 => validate_isbn13(&normalized),
        _ => false,
    }
}

fn validate_isbn10(isbn: &str) -> bool {
    let chars: Vec<char> = isbn.chars().collect();

    // X is only allowed as the check digit
    if chars[..9].iter().any(|c| !c.is_ascii_digit()) {
        return false;
    }

    let sum: u32 = chars
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            let value = if c == 'X' { 10 } else { c.to_digit(10).unwrap_or(0) };
            value * (10 - i as u32)
        })
        .sum();
    sum % 11 == 0
}

fn validate_isbn13(isbn: &str) -> bool {
    if !isbn.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }

    let sum: u32 = isbn
        .chars()
        .enumerate()
        .map(|(i, c)| {
            let value = c.to_digit(10).unwrap_or(0);
            if i % 2 == 0 {
                value
            } else {
                value * 3
            }
        })
        .sum();
    sum % 10 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_isbn() {
        assert_eq!(normalize_isbn("978-0-321-12521-7"), "9780321125217");
        assert_eq!(normalize_isbn("0 8044 2957 x"), "080442957X");
    }

    #[test]
    fn test_isbn_checksum() {
        assert!(is_valid_isbn("0306406152")); // ISBN-10
        assert!(is_valid_isbn("978-0-321-12521-7")); // ISBN-13
        assert!(is_valid_isbn("080442957X"));
        assert!(!is_valid_isbn("0306406151"));
        assert!(!is_valid_isbn("12345"));
        assert!(!is_valid_isbn("X306406152"));
    }
}
