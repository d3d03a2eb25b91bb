//! Form input checks shared by the auth and mail pages.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Minimum password length accepted by the identity provider.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Loose `local@domain.tld` shape check. The provider does the real validation.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

/// Trim and check sign-in fields.
///
/// # Errors
///
/// Returns the message to show next to the form.
pub fn validate_credentials(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    if !is_valid_email(email) {
        return Err("Enter a valid email address.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Sign-in checks plus password confirmation.
///
/// # Errors
///
/// Returns the message to show next to the form.
pub fn validate_registration(email: &str, password: &str, confirm: &str) -> Result<(String, String), &'static str> {
    let creds = validate_credentials(email, password)?;
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok(creds)
}

/// Every comma-separated recipient has an email shape.
#[must_use]
pub fn is_valid_recipient_list(to: &str) -> bool {
    let mut any = false;
    for addr in to.split(',').map(str::trim) {
        if !is_valid_email(addr) {
            return false;
        }
        any = true;
    }
    any
}
