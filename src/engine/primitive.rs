// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Leaf decoders.

use serde_json::Value;

use super::Decoder;
use crate::core::value::{render, same_value};
use crate::core::{Dialect, Fault, JsonType, Unknown};

fn mismatch(expected: &str, input: Option<&Value>) -> Fault {
    Fault::expected(expected, JsonType::of(input).describe())
}

/// Accepts a string.
pub fn t_string<D: Dialect>() -> Decoder<String, D> {
    Decoder::from_fn(|input| match input {
        Some(Value::String(s)) => Ok(s.clone()),
        other => Err(mismatch("a string", other)),
    })
}

/// Accepts a number.
pub fn t_number<D: Dialect>() -> Decoder<f64, D> {
    Decoder::from_fn(|input| match input {
        Some(Value::Number(n)) => n.as_f64().ok_or_else(|| mismatch("a number", input)),
        other => Err(mismatch("a number", other)),
    })
}

/// Accepts a boolean.
pub fn t_boolean<D: Dialect>() -> Decoder<bool, D> {
    Decoder::from_fn(|input| match input {
        Some(Value::Bool(b)) => Ok(*b),
        other => Err(mismatch("a boolean", other)),
    })
}

/// Accepts anything, unchecked. Undefined comes out as `None`, never as
/// `null`.
pub fn t_any<D: Dialect>() -> Decoder<Option<Value>, D> {
    Decoder::from_fn(|input| Ok(input.cloned()))
}

/// Accepts anything, as an opaque [`Unknown`].
pub fn t_unknown<D: Dialect>() -> Decoder<Unknown, D> {
    Decoder::from_fn(|input| Ok(Unknown(input.cloned())))
}

/// Accepts only values deep-equal to `expected`.
pub fn constant<D: Dialect>(expected: impl Into<Value>) -> Decoder<Value, D> {
    let expected = expected.into();
    Decoder::from_fn(move |input| match input {
        Some(value) if same_value(value, &expected) => Ok(value.clone()),
        other => Err(Fault::expected(&render(Some(&expected)), &render(other))),
    })
}

/// Ignores the input and always produces `value`.
pub fn succeed<T, D>(value: T) -> Decoder<T, D>
where
    T: Clone + Send + Sync + 'static,
    D: Dialect,
{
    Decoder::from_fn_accepting_missing(move |_| Ok(value.clone()))
}

/// Ignores the input and always fails with exactly `message`.
pub fn fail<T: 'static, D: Dialect>(message: impl Into<String>) -> Decoder<T, D> {
    let message = message.into();
    Decoder::from_fn(move |_| Err(Fault::new(message.clone())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Decoding;
    use serde_json::json;

    fn message<T: 'static + std::fmt::Debug>(decoder: &Decoder<T, Decoding>, input: Value) -> String {
        let err = decoder.run(&input).unwrap_err();
        assert_eq!(err.at, "input");
        err.message
    }

    #[test]
    fn test_string() {
        let decoder = t_string::<Decoding>();
        assert_eq!(decoder.run(&json!("hey")), Ok("hey".to_string()));
        assert_eq!(message(&decoder, json!(1)), "expected a string, got a number");
        assert_eq!(message(&decoder, json!(null)), "expected a string, got null");
        assert_eq!(message(&decoder, json!(true)), "expected a string, got a boolean");
        assert_eq!(message(&decoder, json!({})), "expected a string, got an object");
        assert_eq!(message(&decoder, json!([])), "expected a string, got an array");
    }

    #[test]
    fn test_number() {
        let decoder = t_number::<Decoding>();
        assert_eq!(decoder.run(&json!(5)), Ok(5.0));
        assert_eq!(decoder.run(&json!(-0.25)), Ok(-0.25));
        assert_eq!(message(&decoder, json!("hey")), "expected a number, got a string");
        assert_eq!(message(&decoder, json!(true)), "expected a number, got a boolean");
    }

    #[test]
    fn test_boolean() {
        let decoder = t_boolean::<Decoding>();
        assert_eq!(decoder.run(&json!(false)), Ok(false));
        assert_eq!(message(&decoder, json!(1)), "expected a boolean, got a number");
    }

    #[test]
    fn test_any_and_unknown_accept_everything() {
        for input in [json!(1), json!(false), json!({"boots": "n cats"}), json!(null)] {
            assert_eq!(t_any::<Decoding>().run(&input), Ok(Some(input.clone())));
            assert_eq!(t_unknown::<Decoding>().run(&input), Ok(Unknown(Some(input.clone()))));
        }
    }

    #[test]
    fn test_any_and_unknown_keep_undefined_apart_from_null() {
        assert_eq!(t_any::<Decoding>().run_opt(None), Ok(None));
        assert_eq!(t_any::<Decoding>().run(&json!(null)), Ok(Some(Value::Null)));

        let undefined = t_unknown::<Decoding>().run_opt(None).unwrap();
        assert!(undefined.is_undefined());
        assert_eq!(undefined.as_value(), None);
        assert!(!t_unknown::<Decoding>().run(&json!(null)).unwrap().is_undefined());
    }

    #[test]
    fn test_constant_literals() {
        assert_eq!(constant::<Decoding>("zero").run(&json!("zero")), Ok(json!("zero")));
        assert_eq!(message(&constant(42), json!(true)), "expected 42, got true");
        assert_eq!(message(&constant("a"), json!("b")), "expected \"a\", got \"b\"");
        assert_eq!(constant::<Decoding>(Value::Null).run(&json!(null)), Ok(json!(null)));
    }

    #[test]
    fn test_constant_composites() {
        let array = constant::<Decoding>(json!([1, 2, 3]));
        assert_eq!(array.run(&json!([1, 2, 3])), Ok(json!([1, 2, 3])));
        assert_eq!(message(&array, json!([1, 2, 3, 4])), "expected [1,2,3], got [1,2,3,4]");

        let object = constant::<Decoding>(json!({"a": true, "b": 12}));
        assert_eq!(object.run(&json!({"a": true, "b": 12})), Ok(json!({"a": true, "b": 12})));
        assert_eq!(
            message(&object, json!({"a": true, "b": 7})),
            "expected {\"a\":true,\"b\":12}, got {\"a\":true,\"b\":7}"
        );
    }

    #[test]
    fn test_constant_message_prints_integral_floats_as_integers() {
        let decoder = constant::<Decoding>(json!({"a": 1.0}));
        assert_eq!(decoder.run(&json!({"a": 1})), Ok(json!({"a": 1})));
        assert_eq!(
            message(&decoder, json!({"a": 2.0})),
            "expected {\"a\":1}, got {\"a\":2}"
        );
        assert_eq!(message(&constant(3.0), json!("3")), "expected 3, got \"3\"");
    }

    #[test]
    fn test_succeed_ignores_input() {
        let decoder = succeed::<_, Decoding>(12345);
        assert_eq!(decoder.run(&json!("pancakes")), Ok(12345));
        assert_eq!(decoder.run_opt(None), Ok(12345));
    }

    #[test]
    fn test_fail_always_fails() {
        let wisdom = "People don't think it be like it is, but it do.";
        let decoder = fail::<(), Decoding>(wisdom);
        assert_eq!(message(&decoder, json!("pancakes")), wisdom);
        assert_eq!(message(&decoder, json!(5)), wisdom);
    }
}
