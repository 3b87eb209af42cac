//! Display helpers derived from the signed-in identity.
//!
//! Missing fields fall back to fixed strings; these never fail.

use super::entities::UserIdentity;

pub const FALLBACK_INITIALS: &str = "U";
pub const FALLBACK_DISPLAY_NAME: &str = "User";

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.filter(|v| !v.trim().is_empty())
}

/// Up to two uppercase initials: one per leading display-name token, else the
/// first letter of the email, else `"U"`.
pub fn user_initials(user: Option<&UserIdentity>) -> String {
    let Some(user) = user else {
        return FALLBACK_INITIALS.to_string();
    };

    if let Some(name) = non_blank(user.display_name.as_deref()) {
        return name
            .split_whitespace()
            .take(2)
            .filter_map(|token| token.chars().next())
            .filter_map(|c| c.to_uppercase().next())
            .collect();
    }

    match user.email.chars().next().and_then(|c| c.to_uppercase().next()) {
        Some(c) => c.to_string(),
        None => FALLBACK_INITIALS.to_string(),
    }
}

/// Display name, else email local part, else `"User"`.
pub fn user_display_name(user: Option<&UserIdentity>) -> String {
    let Some(user) = user else {
        return FALLBACK_DISPLAY_NAME.to_string();
    };

    if let Some(name) = non_blank(user.display_name.as_deref()) {
        return name.to_string();
    }

    let local = user.email.split('@').next().unwrap_or_default();
    if local.is_empty() {
        FALLBACK_DISPLAY_NAME.to_string()
    } else {
        local.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials_from_display_name() {
        let u = UserIdentity::with_email("m@x.com").display_name("Maria Lopez");
        assert_eq!(user_initials(Some(&u)), "ML");
        assert_eq!(user_display_name(Some(&u)), "Maria Lopez");
    }

    #[test]
    fn test_initials_truncate_to_two_tokens() {
        let u = UserIdentity::default().display_name("ana maria de la cruz");
        assert_eq!(user_initials(Some(&u)), "AM");

        let single = UserIdentity::default().display_name("cher");
        assert_eq!(user_initials(Some(&single)), "C");

        let spaced = UserIdentity::default().display_name("  john   q  public ");
        assert_eq!(user_initials(Some(&spaced)), "JQ");
    }

    #[test]
    fn test_initials_one_char_per_token_when_uppercase_expands() {
        let u = UserIdentity::default().display_name("ßen Xavier");
        assert_eq!(user_initials(Some(&u)), "SX");

        let email = UserIdentity::with_email("ßen@x.de");
        assert_eq!(user_initials(Some(&email)), "S");
    }

    #[test]
    fn test_email_only() {
        let u = UserIdentity::with_email("j.doe@example.com");
        assert_eq!(user_initials(Some(&u)), "J");
        assert_eq!(user_display_name(Some(&u)), "j.doe");
    }

    #[test]
    fn test_blank_display_name_falls_back_to_email() {
        let u = UserIdentity::with_email("kim@fleet.io").display_name("   ");
        assert_eq!(user_initials(Some(&u)), "K");
        assert_eq!(user_display_name(Some(&u)), "kim");
    }

    #[test]
    fn test_absent_identity() {
        assert_eq!(user_initials(None), "U");
        assert_eq!(user_display_name(None), "User");
    }

    #[test]
    fn test_empty_fields() {
        let u = UserIdentity::default();
        assert_eq!(user_initials(Some(&u)), "U");
        assert_eq!(user_display_name(Some(&u)), "User");

        let no_local = UserIdentity::with_email("@example.com");
        assert_eq!(user_display_name(Some(&no_local)), "User");
    }
}
