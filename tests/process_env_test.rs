// Integration tests against the real process environment.
// temp_env serialises environment mutation across the tests in this binary.

use envtype::{
    get_boolean, get_number, get_number_array, get_string, get_string_array, BooleanOptions,
    ConfigError, ConfigErrorKind, NumberArrayOptions, NumberOptions, StringArrayOptions,
    StringOptions,
};

#[test]
fn test_boolean_true() {
    temp_env::with_var("TEST_BOOLEAN", Some("true"), || {
        assert_eq!(get_boolean("TEST_BOOLEAN", BooleanOptions::new()), Ok(Some(true)));
    });
}

#[test]
fn test_boolean_not_set() {
    temp_env::with_var_unset("TEST_BOOLEAN", || {
        assert_eq!(
            get_boolean("TEST_BOOLEAN", BooleanOptions::new()),
            Err(ConfigError::not_defined("TEST_BOOLEAN"))
        );
        assert_eq!(
            get_boolean("TEST_BOOLEAN", BooleanOptions::new().allow_undefined()),
            Ok(None)
        );
        assert_eq!(
            get_boolean("TEST_BOOLEAN", BooleanOptions::new().with_default(false)),
            Ok(Some(false))
        );
    });
}

#[test]
fn test_number_default_when_unset() {
    temp_env::with_var_unset("TEST_NUMBER", || {
        assert_eq!(
            get_number("TEST_NUMBER", NumberOptions::new().with_default(20.22)),
            Ok(Some(20.22))
        );
    });
}

#[test]
fn test_number_not_in_allow_list() {
    temp_env::with_var("TEST_NUMBER", Some("30.33"), || {
        let err = get_number("TEST_NUMBER", NumberOptions::new().allow_list([10.0, 20.0]))
            .unwrap_err();

        assert_eq!(err, ConfigError::list_value("TEST_NUMBER", 30.33, vec![10.0, 20.0]));
        assert_eq!(err.kind(), ConfigErrorKind::ListValue);
        assert_eq!(err.kind().name(), "ListValueConfigError");
    });
}

#[test]
fn test_number_outside_range() {
    temp_env::with_var("TEST_NUMBER", Some("20.00001"), || {
        assert_eq!(
            get_number("TEST_NUMBER", NumberOptions::new().allow_range(10.0, 20.0)),
            Err(ConfigError::range_value("TEST_NUMBER", 20.00001, (10.0, 20.0)))
        );
    });
}

#[test]
fn test_number_range_boundaries() {
    for boundary in ["10", "20"] {
        temp_env::with_var("TEST_NUMBER", Some(boundary), || {
            assert!(get_number("TEST_NUMBER", NumberOptions::new().allow_range(10.0, 20.0)).is_ok());
        });
    }
}

#[test]
fn test_empty_string_is_not_defined() {
    temp_env::with_var("TEST_STRING", Some(""), || {
        assert_eq!(
            get_string("TEST_STRING", StringOptions::new()),
            Err(ConfigError::not_defined("TEST_STRING"))
        );
        assert_eq!(
            get_string("TEST_STRING", StringOptions::new().with_default("foo")),
            Ok(Some("foo".to_string()))
        );
    });
}

#[test]
fn test_string_not_in_allow_list() {
    temp_env::with_var("TEST_STRING", Some("baz"), || {
        assert_eq!(
            get_string("TEST_STRING", StringOptions::new().allow_list(["foo", "bar"])),
            Err(ConfigError::list_value("TEST_STRING", "baz", vec!["foo", "bar"]))
        );
    });
}

#[test]
fn test_string_array_first_offending_element() {
    temp_env::with_var("TEST_STRING_ARRAY", Some("foo,bar,baz"), || {
        assert_eq!(
            get_string_array(
                "TEST_STRING_ARRAY",
                StringArrayOptions::new().allow_list(["foo", "baz"])
            ),
            Err(ConfigError::list_value("TEST_STRING_ARRAY", "bar", vec!["foo", "baz"]))
        );
    });
}

#[test]
fn test_number_array_empty_allow_undefined() {
    temp_env::with_var("TEST_NUMBER", Some(""), || {
        assert_eq!(
            get_number_array("TEST_NUMBER", NumberArrayOptions::new().allow_undefined()),
            Ok(vec![])
        );
        assert_eq!(
            get_number_array("TEST_NUMBER", NumberArrayOptions::new()),
            Err(ConfigError::not_defined("TEST_NUMBER"))
        );
    });
}

#[test]
fn test_number_array_values() {
    temp_env::with_var("TEST_NUMBER", Some("10.33,20.33,30.33"), || {
        assert_eq!(
            get_number_array("TEST_NUMBER", NumberArrayOptions::new()),
            Ok(vec![10.33, 20.33, 30.33])
        );
    });
}

#[test]
fn test_error_message_is_human_readable() {
    temp_env::with_var_unset("TEST_REQUIRED_URL", || {
        let err = get_string("TEST_REQUIRED_URL", StringOptions::new()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "environment variable `TEST_REQUIRED_URL` is not defined"
        );
    });
}
