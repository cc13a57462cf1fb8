use habit_core::{validate_email, validate_habit_name, validate_name, validate_password};

#[test]
fn email_requires_local_part_domain_and_dot() {
    assert!(validate_email("a@b.com").is_valid);
    assert!(validate_email("first.last@sub.example.org").is_valid);

    for bad in ["", "a@b", "@b.com", "a@.com", "a b@c.com", "a@@b.com", "a@b.com "] {
        let result = validate_email(bad);
        assert!(!result.is_valid, "{bad:?} should be rejected");
        assert!(result.message.is_some());
    }
}

#[test]
fn password_needs_six_characters() {
    let short = validate_password("12345");
    assert!(!short.is_valid);
    assert_eq!(
        short.message.as_deref(),
        Some("Password must be at least 6 characters long")
    );
    assert!(validate_password("123456").is_valid);
    assert!(validate_password("      ").is_valid);
}

#[test]
fn name_is_trimmed_before_length_check() {
    assert!(!validate_name(" a ").is_valid);
    assert_eq!(
        validate_name("").message.as_deref(),
        Some("Name must be at least 2 characters long")
    );
    assert!(validate_name("Al").is_valid);
}

#[test]
fn habit_name_bounds() {
    let empty = validate_habit_name("");
    assert!(!empty.is_valid);
    assert_eq!(empty.message.as_deref(), Some("Habit name is required"));
    assert!(!validate_habit_name("   ").is_valid);

    let long = validate_habit_name(&"x".repeat(51));
    assert!(!long.is_valid);
    assert_eq!(
        long.message.as_deref(),
        Some("Habit name must be less than 50 characters")
    );

    assert!(validate_habit_name(&"x".repeat(50)).is_valid);
    assert!(validate_habit_name("Read").is_valid);
    assert!(validate_habit_name("Read").message.is_none());
}

#[test]
fn habit_name_counts_characters_not_bytes() {
    assert!(validate_habit_name(&"é".repeat(50)).is_valid);
}
