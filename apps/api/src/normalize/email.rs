/// Canonicalizes an email address: strips all whitespace, lowercases.
/// Structural validation is the request boundary's job, not this function's.
pub fn clean_email(email: &str) -> String {
    email.split_whitespace().collect::<String>().to_lowercase()
}
