//! Integration tests for configuration token parsing.
//!
//! Both flag sets accept comma-separated, case-insensitive names with
//! surrounding whitespace, plus the `all` and `none` keywords.

use catlog::{Category, FlagKind, LogConfig, PrefixMode};

// ============================================================================
// Category Token Tests
// ============================================================================

/// Verifies single and combined category names.
#[test]
fn category_names_combine() {
    assert_eq!("general".parse::<Category>(), Ok(Category::GENERAL));
    assert_eq!(
        "general,operations".parse::<Category>(),
        Ok(Category::GENERAL | Category::OPERATIONS)
    );
    assert_eq!("NETWORK".parse::<Category>(), Ok(Category::NETWORK));
}

/// Verifies keywords and empty tokens.
#[test]
fn category_keywords() {
    assert_eq!("ALL".parse::<Category>(), Ok(Category::all()));
    assert_eq!("none".parse::<Category>(), Ok(Category::NONE));
    assert_eq!(",, ,".parse::<Category>(), Ok(Category::NONE));
    assert_eq!("none,network".parse::<Category>(), Ok(Category::NETWORK));
}

/// Verifies the first unknown token is reported.
#[test]
fn category_unknown_token() {
    let error = "network, storage, disk".parse::<Category>().unwrap_err();
    assert_eq!(error.kind(), FlagKind::Category);
    assert_eq!(error.token(), "storage");
    assert_eq!(error.to_string(), "unknown category: \"storage\"");
}

// ============================================================================
// Prefix Token Tests
// ============================================================================

/// Verifies prefix names and their aliases.
#[test]
fn prefix_names_and_aliases() {
    assert_eq!(
        "date, method, line".parse::<PrefixMode>(),
        Ok(PrefixMode::DEFAULT)
    );
    assert_eq!("filename".parse::<PrefixMode>(), Ok(PrefixMode::FILE_NAME));
    assert_eq!("methodName".parse::<PrefixMode>(), Ok(PrefixMode::METHOD_NAME));

    let error = "time".parse::<PrefixMode>().expect_err("only `date` names the date field");
    assert_eq!(error.kind(), FlagKind::PrefixField);
    assert_eq!(error.token(), "time");
}

/// Verifies Display output parses back to the same set.
#[test]
fn display_round_trips() {
    for bits in 0..=PrefixMode::all().bits() {
        let mode = PrefixMode::from_bits_truncate(bits);
        assert_eq!(mode.to_string().parse::<PrefixMode>(), Ok(mode), "{mode:?}");
    }
    for bits in 0..=Category::all().bits() {
        let category = Category::from_bits_truncate(bits);
        assert_eq!(category.to_string().parse::<Category>(), Ok(category), "{category:?}");
    }
}

// ============================================================================
// Configuration Tests
// ============================================================================

/// Verifies a configuration assembled from tokens.
#[test]
fn config_from_tokens() {
    let mut config = LogConfig::new();
    config.apply_category_tokens("network").expect("valid categories");
    config.apply_prefix_tokens("line").expect("valid prefix fields");

    assert_eq!(config.enabled, Category::NETWORK);
    assert_eq!(config.prefix, PrefixMode::LINE);
}

/// Verifies an invalid prefix token leaves the configuration untouched.
#[test]
fn config_rejects_unknown_prefix_field() {
    let mut config = LogConfig::new();
    let error = config.apply_prefix_tokens("date,seconds").unwrap_err();
    assert_eq!(error.kind(), FlagKind::PrefixField);
    assert_eq!(config.prefix, PrefixMode::DEFAULT);
}
