use super::*;

#[test]
fn test_bool_spellings() {
	for s in ["true", "TRUE", "yes", "on", "1"] {
		assert_eq!(bool::from_config(s), Some(true), "{s}");
	}
	for s in ["false", "False", "no", "off", "0"] {
		assert_eq!(bool::from_config(s), Some(false), "{s}");
	}
	assert_eq!(bool::from_config("maybe"), None);
	assert_eq!(true.to_config(), "true");
}

#[test]
fn test_int_parse() {
	assert_eq!(i32::from_config("42"), Some(42));
	assert_eq!(i32::from_config(" -7 "), Some(-7));
	assert_eq!(i32::from_config("2.5"), None);
	assert_eq!(i32::from_config("abc"), None);
	assert_eq!(u32::from_config("-1"), None);
	assert_eq!(i64::from_config("9223372036854775807"), Some(i64::MAX));
}

#[test]
fn test_float_parse() {
	assert_eq!(f64::from_config("2.5"), Some(2.5));
	assert_eq!(f64::from_config("11"), Some(11.0));
	assert_eq!(f64::from_config("nan"), None);
	assert_eq!(f64::from_config("inf"), None);
	// Canonical form round-trips exactly.
	assert_eq!(f64::from_config(&2.5_f64.to_config()), Some(2.5));
}

#[test]
fn test_string_identity() {
	assert_eq!(String::from_config("  spaced  "), Some("  spaced  ".to_string()));
	assert_eq!("x".to_string().to_config(), "x");
}

#[test]
fn test_color_hex() {
	assert_eq!(Color::from_config("#FF0000"), Some(Color::rgb(0xff, 0, 0)));
	assert_eq!(
		Color::from_config("#11223344"),
		Some(Color { r: 0x11, g: 0x22, b: 0x33, a: 0x44 })
	);
	assert_eq!(Color::from_config("#ff00"), None);
	assert_eq!(Color::from_config("ff0000"), None);
	assert_eq!(Color::from_config("#gg0000"), None);
	assert_eq!(Color::rgb(0xff, 0, 0).to_config(), "#ff0000");
	assert_eq!(Color { r: 1, g: 2, b: 3, a: 4 }.to_config(), "#01020304");
}
