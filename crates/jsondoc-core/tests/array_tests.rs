use serde::Deserialize;

use jsondoc_core::{parse_array, JsonArray, Value};

// ============================================================================
// Sequence Operations
// ============================================================================

#[test]
fn new_array_is_empty() {
    let array = JsonArray::new();
    assert_eq!(array.len(), 0);
    assert!(array.is_empty());
}

#[test]
fn push_appends_in_order() {
    let mut array = JsonArray::new();
    array.push(1i64);
    array.push("two");
    array.push(true);
    assert_eq!(array.len(), 3);
    assert_eq!(array[0], Value::from(1i64));
    assert_eq!(array[1], Value::from("two"));
    assert_eq!(array[2], Value::from(true));
}

#[test]
fn get_past_the_end_is_none() {
    let array = JsonArray::new();
    assert!(array.get(10).is_none());
}

#[test]
fn insert_shifts_later_elements() {
    let mut array: JsonArray = vec![1i64, 3i64].into_iter().collect();
    array.insert(1, 2i64);
    assert_eq!(array.get_i64_value(1).unwrap(), 2);
    assert_eq!(array.get_i64_value(2).unwrap(), 3);
}

#[test]
fn remove_returns_the_element() {
    let mut array: JsonArray = vec!["a", "b", "c"].into_iter().collect();
    let removed = array.remove(1);
    assert_eq!(removed, Value::from("b"));
    assert_eq!(array.len(), 2);
    assert_eq!(array.get_string(1).unwrap().as_deref(), Some("c"));
}

#[test]
fn remove_value_drops_the_first_match() {
    let mut array: JsonArray = vec![1i64, 2i64, 1i64].into_iter().collect();
    assert!(array.remove_value(&Value::from(1i64)));
    assert_eq!(array.len(), 2);
    assert_eq!(array.get_i64_value(0).unwrap(), 2);
    assert!(!array.remove_value(&Value::from(99i64)));
}

#[test]
fn contains_compares_structurally() {
    let array = parse_array(r#"[{"a":1},[2]]"#).unwrap();
    let inner = jsondoc_core::parse_value(r#"{"a":1}"#).unwrap();
    assert!(array.contains(&inner));
    assert!(!array.contains(&Value::from(7i64)));
}

#[test]
fn extend_appends_in_bulk() {
    let mut array = JsonArray::new();
    array.extend(vec![1i64, 2i64, 3i64]);
    assert_eq!(array.len(), 3);
}

#[test]
fn clear_empties_the_array() {
    let mut array: JsonArray = vec![1i64].into_iter().collect();
    array.clear();
    assert!(array.is_empty());
}

#[test]
fn slices_give_sub_range_views() {
    let array: JsonArray = vec![0i64, 1i64, 2i64, 3i64].into_iter().collect();
    let middle = &array.as_slice()[1..3];
    assert_eq!(middle, &[Value::from(1i64), Value::from(2i64)][..]);
}

#[test]
fn clone_is_structurally_equal() {
    let array = parse_array(r#"[1,{"a":[true]}]"#).unwrap();
    assert_eq!(array.clone(), array);
}

// ============================================================================
// Sparse Growth
// ============================================================================

#[test]
fn set_past_the_end_pads_with_nulls() {
    let mut array = JsonArray::new();
    assert!(array.set(5, "x").is_none());
    assert_eq!(array.len(), 6);
    for index in 0..5 {
        assert!(array[index].is_null());
    }
    assert_eq!(array.get_string(5).unwrap().as_deref(), Some("x"));
}

#[test]
fn set_in_range_returns_the_displaced_element() {
    let mut array: JsonArray = vec![1i64, 2i64].into_iter().collect();
    let displaced = array.set(1, 20i64);
    assert_eq!(displaced, Some(Value::from(2i64)));
    assert_eq!(array.len(), 2);
    assert_eq!(array.get_i64_value(1).unwrap(), 20);
}

#[test]
fn set_at_the_exact_end_appends() {
    let mut array: JsonArray = vec![1i64].into_iter().collect();
    assert!(array.set(1, 2i64).is_none());
    assert_eq!(array.len(), 2);
}

// ============================================================================
// Typed Getters
// ============================================================================

#[test]
fn typed_getters_coerce_elements() {
    let array = parse_array(r#"[true,"2",3.5,"0"]"#).unwrap();
    assert_eq!(array.get_bool(0).unwrap(), Some(true));
    assert_eq!(array.get_i64(1).unwrap(), Some(2));
    assert_eq!(array.get_f64(2).unwrap(), Some(3.5));
    assert_eq!(array.get_bool(3).unwrap(), Some(false));
}

#[test]
fn absent_index_reads_as_absent() {
    let array = JsonArray::new();
    assert_eq!(array.get_i64(10).unwrap(), None);
    assert_eq!(array.get_i64_value(10).unwrap(), 0);
    assert_eq!(array.get_bool_value(10).unwrap(), false);
    assert_eq!(array.get_f64_value(10).unwrap(), 0.0);
}

#[test]
fn null_element_defaults_in_value_getters() {
    let array = parse_array("[null]").unwrap();
    assert_eq!(array.get_i32(0).unwrap(), None);
    assert_eq!(array.get_i32_value(0).unwrap(), 0);
    assert_eq!(array.get_i16_value(0).unwrap(), 0);
    assert_eq!(array.get_i8_value(0).unwrap(), 0);
    assert_eq!(array.get_f32_value(0).unwrap(), 0.0);
}

#[test]
fn bigint_getter_handles_huge_elements() {
    let array = parse_array(r#"["987654321098765432109876543210"]"#).unwrap();
    let expected = "987654321098765432109876543210"
        .parse::<num_bigint::BigInt>()
        .unwrap();
    assert_eq!(array.get_bigint(0).unwrap(), Some(expected));
}

#[test]
fn bigdecimal_getter_keeps_the_literal() {
    let array = parse_array("[0.30000000000000004]").unwrap();
    let expected = "0.30000000000000004"
        .parse::<bigdecimal::BigDecimal>()
        .unwrap();
    assert_eq!(array.get_bigdecimal(0).unwrap(), Some(expected));
}

// ============================================================================
// Nested Nodes
// ============================================================================

#[test]
fn nested_object_elements_come_back_as_nodes() {
    let array = parse_array(r#"[{"name":"Ada"},7]"#).unwrap();
    let object = array.get_json_object(0).unwrap();
    assert_eq!(object.get_string("name").unwrap().as_deref(), Some("Ada"));
    assert!(array.get_json_object(1).is_none());
}

#[test]
fn nested_array_elements_come_back_as_nodes() {
    let array = parse_array("[[1,2],true]").unwrap();
    let inner = array.get_json_array(0).unwrap();
    assert_eq!(inner.len(), 2);
    assert!(array.get_json_array(1).is_none());
}

#[test]
fn embedded_json_text_is_not_parsed_on_the_array_path() {
    // Unlike the object node, the array node leaves string elements alone.
    let array = parse_array(r#"["{\"a\":1}"]"#).unwrap();
    assert!(array.get_json_object(0).is_none());
}

// ============================================================================
// Typed Conversion
// ============================================================================

#[derive(Debug, Deserialize, PartialEq)]
struct Point {
    x: i64,
    y: i64,
}

#[test]
fn get_typed_converts_node_elements() {
    let array = parse_array(r#"[{"x":1,"y":2}]"#).unwrap();
    let point: Point = array.get_typed(0).unwrap().unwrap();
    assert_eq!(point, Point { x: 1, y: 2 });
}

#[test]
fn get_typed_parses_embedded_json_strings() {
    let array = parse_array(r#"["{\"x\":3,\"y\":4}"]"#).unwrap();
    let point: Point = array.get_typed(0).unwrap().unwrap();
    assert_eq!(point, Point { x: 3, y: 4 });
}

#[test]
fn get_typed_is_absent_for_missing_elements() {
    let array = JsonArray::new();
    let point: Option<Point> = array.get_typed(0).unwrap();
    assert!(point.is_none());
}

#[test]
fn to_typed_converts_every_element() {
    let array = parse_array("[1,2,3]").unwrap();
    let numbers: Vec<i64> = array.to_typed().unwrap();
    assert_eq!(numbers, vec![1, 2, 3]);
}

// ============================================================================
// Serialization
// ============================================================================

#[test]
fn to_json_string_renders_the_whole_sequence() {
    let mut array = JsonArray::new();
    array.push(1i64);
    array.push("x");
    array.push(Value::Null);
    assert_eq!(array.to_json_string().unwrap(), r#"[1,"x",null]"#);
}

#[test]
fn display_matches_to_json_string() {
    let array = parse_array(r#"[1,{"a":2}]"#).unwrap();
    assert_eq!(array.to_string(), array.to_json_string().unwrap());
}
