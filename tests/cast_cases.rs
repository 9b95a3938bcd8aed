#[macro_use]
mod cases;

use std::sync::Arc;

use mu::{Array, ty};

cast_case! {
    name: null,
    value: Value::Null,
    bool: { None },
    i64: { None },
    String: { None },
    Array: { None },
    Value: { None },
}

cast_case! {
    name: int,
    value: Value::from(42_i64),
    i64: { Some(42) },
    f64: { None },
    bool: { None },
    String: { None },
    Value: { Some(Value::Int(42)) },
}

cast_case! {
    name: float,
    value: Value::from(-0.5_f64),
    f64: { Some(x) if x == -0.5 },
    i64: { None },
}

cast_case! {
    name: string,
    value: Value::from("forty-two"),
    String: { Some(ref s) if s == "forty-two" },
    Arc<str>: { Some(ref s) if &**s == "forty-two" },
    Arc<[u8]>: { None },
}

cast_case! {
    name: bytes,
    value: Value::from(vec![4_u8, 2]),
    Arc<[u8]>: { Some(ref b) if &**b == [4_u8, 2] },
    String: { None },
}

cast_case! {
    name: int_array,
    value: Value::array(ty!(Int), [1_i64, 2].map(Value::from)),
    Vec<i64>: { Some(ref v) if v == &[1, 2] },
    Vec<f64>: { None },
    Vec<Value>: { Some(ref v) if v.len() == 2 },
    Array: { Some(ref a) if a.element_ty() == &ty!(Int) },
    i64: { None },
}

cast_case! {
    name: any_array,
    value: Value::array(ty!(Any), [Value::from(1_i64), Value::from("two")]),
    Vec<i64>: { None },
    Vec<String>: { None },
    Vec<Value>: { Some(ref v) if v[1].as_str() == Some("two") },
}

cast_case! {
    name: nested_array,
    value: Value::array(ty!(Array[Bool]), [Value::array(ty!(Bool), [Value::from(true)])]),
    Vec<Vec<bool>>: { Some(ref v) if v == &[vec![true]] },
    Vec<bool>: { None },
    Vec<Array>: { Some(ref v) if v.len() == 1 },
}
