//! Credential validation against the static allowlist.

use sprintgate_config::Allowlist;

/// True iff `identifier` exactly matches the allowlist identifier and
/// `passcode` is one of the allowed passcodes.
///
/// Case-sensitive, no normalization: `"shivam_07"` does not match
/// `"Shivam_07"`. Plaintext comparison against injected configuration.
#[must_use]
pub fn validate(allowlist: &Allowlist, identifier: &str, passcode: &str) -> bool {
    identifier == allowlist.identifier()
        && allowlist
            .passcodes()
            .iter()
            .any(|candidate| candidate == passcode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_every_allowlisted_pair() {
        let allowlist = Allowlist::default();
        for passcode in ["281234", "981536", "631732", "581294", "687891"] {
            assert!(
                validate(&allowlist, "Shivam_07", passcode),
                "expected {passcode} to validate"
            );
        }
    }

    #[test]
    fn rejects_case_mismatch() {
        let allowlist = Allowlist::default();
        assert!(!validate(&allowlist, "shivam_07", "631732"));
        assert!(!validate(&allowlist, "SHIVAM_07", "631732"));
    }

    #[test]
    fn rejects_unknown_passcode() {
        let allowlist = Allowlist::default();
        assert!(!validate(&allowlist, "Shivam_07", "123456"));
        assert!(!validate(&allowlist, "Shivam_07", ""));
    }

    #[test]
    fn rejects_swapped_fields() {
        let allowlist = Allowlist::default();
        assert!(!validate(&allowlist, "631732", "Shivam_07"));
    }

    #[test]
    fn no_trimming() {
        let allowlist = Allowlist::default();
        assert!(!validate(&allowlist, "Shivam_07 ", "631732"));
        assert!(!validate(&allowlist, "Shivam_07", " 631732"));
    }
}
