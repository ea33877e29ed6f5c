use opt_core::{EmptyValueAccess, Option};

#[test]
fn serializes_tag_and_value() {
  assert_eq!(serde_json::to_string(&Option::present(42)).unwrap(), r#"{"Present":42}"#);
  assert_eq!(serde_json::to_string(&Option::<i32>::absent()).unwrap(), r#""Absent""#);
}

#[test]
fn round_trips_both_variants() {
  let present = Option::present(String::from("value"));
  let json = serde_json::to_string(&present).unwrap();
  assert_eq!(serde_json::from_str::<Option<String>>(&json).unwrap(), present);

  let absent = Option::<String>::absent();
  let json = serde_json::to_string(&absent).unwrap();
  assert_eq!(serde_json::from_str::<Option<String>>(&json).unwrap(), absent);
}

#[test]
fn round_trips_nested_options() {
  let nested = Option::present(Option::<u8>::absent());
  let json = serde_json::to_string(&nested).unwrap();
  assert_eq!(serde_json::from_str::<Option<Option<u8>>>(&json).unwrap(), nested);
}

#[test]
fn rejects_unknown_tag() {
  assert!(serde_json::from_str::<Option<i32>>(r#"{"Missing":1}"#).is_err());
}

#[test]
fn round_trips_access_error() {
  let json = serde_json::to_string(&EmptyValueAccess).unwrap();
  assert_eq!(serde_json::from_str::<EmptyValueAccess>(&json).unwrap(), EmptyValueAccess);
}
