use newsletter2go_client::utils::config::{get_env_or_default, get_env_or_none};
use std::env;

#[test]
fn test_get_env_or_default_with_existing_var() {
    unsafe {
        env::set_var("N2G_TEST_VAR_STRING", "test_value");
        let result: String = get_env_or_default("N2G_TEST_VAR_STRING", "default".to_string());
        assert_eq!(result, "test_value");
        env::remove_var("N2G_TEST_VAR_STRING");
    }
}

#[test]
fn test_get_env_or_default_with_missing_var() {
    unsafe {
        env::remove_var("N2G_MISSING_VAR");
        let result: String = get_env_or_default("N2G_MISSING_VAR", "default".to_string());
        assert_eq!(result, "default");
    }
}

#[test]
fn test_get_env_or_default_with_invalid_parse() {
    unsafe {
        env::set_var("N2G_TEST_VAR_INVALID", "not_a_number");
        let result: u64 = get_env_or_default("N2G_TEST_VAR_INVALID", 99);
        assert_eq!(result, 99);
        env::remove_var("N2G_TEST_VAR_INVALID");
    }
}

#[test]
fn test_get_env_or_none_with_existing_var() {
    unsafe {
        env::set_var("N2G_TEST_VAR_OPTION", "123");
        let result: Option<u64> = get_env_or_none("N2G_TEST_VAR_OPTION");
        assert_eq!(result, Some(123));
        env::remove_var("N2G_TEST_VAR_OPTION");
    }
}

#[test]
fn test_get_env_or_none_with_missing_var() {
    unsafe {
        env::remove_var("N2G_MISSING_OPTION");
        let result: Option<String> = get_env_or_none("N2G_MISSING_OPTION");
        assert_eq!(result, None);
    }
}
