/// Property-based tests for password hashing using proptest
///
/// These tests verify the hashing contract across randomly generated
/// passwords and salts. The case count is kept low because each case pays
/// the full PBKDF2 work factor.
use classroom_manager::auth::CredentialStore;
use proptest::prelude::*;

// Strategy for printable passwords of realistic length
fn password_strategy() -> impl Strategy<Value = String> {
    "[ -~]{1,32}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn hash_is_deterministic(password in password_strategy(), salt in "[0-9a-f]{64}") {
        let a = CredentialStore::hash_password(&password, &salt);
        let b = CredentialStore::hash_password(&password, &salt);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn distinct_passwords_yield_distinct_digests(
        (p1, p2) in (password_strategy(), password_strategy())
            .prop_filter("passwords must differ", |(a, b)| a != b),
        salt in "[0-9a-f]{64}",
    ) {
        let a = CredentialStore::hash_password(&p1, &salt);
        let b = CredentialStore::hash_password(&p2, &salt);
        prop_assert_ne!(a, b);
    }

    #[test]
    fn digest_is_fixed_length_hex(password in password_strategy(), salt in "[0-9a-f]{64}") {
        let digest = CredentialStore::hash_password(&password, &salt);
        prop_assert_eq!(digest.len(), 64);
        prop_assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
