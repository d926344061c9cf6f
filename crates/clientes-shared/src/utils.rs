//! Utility functions

/// Masks the local part of an email for log output: `ana@x.com` -> `an***@x.com`.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let keep = if local.chars().count() <= 2 { 1 } else { 2 };
            let prefix: String = local.chars().take(keep).collect();
            format!("{}***@{}", prefix, domain)
        }
        _ => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("ana@x.com"), "an***@x.com");
        assert_eq!(mask_email("al@x.com"), "a***@x.com");
        assert_eq!(mask_email("joão@exemplo.com.br"), "jo***@exemplo.com.br");
    }

    #[test]
    fn test_mask_email_without_at() {
        assert_eq!(mask_email("not-an-email"), "***");
        assert_eq!(mask_email("@x.com"), "***");
    }
}
