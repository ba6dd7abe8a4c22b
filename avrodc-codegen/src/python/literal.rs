//! Python literal rendering for schema default values.
//!
//! Values are rendered the way Python's `repr` prints the equivalent
//! object, so the generated source reads as if written by hand.

use crate::error::CodegenError;
use serde_json::{Number, Value};

/// Renders a JSON default value as a Python literal.
///
/// # Errors
/// Returns `CodegenError::UnrepresentableDefault` if the value has no exact
/// Python literal (non-finite floats).
pub fn python_literal(value: &Value) -> Result<String, CodegenError> {
    match value {
        Value::Null => Ok("None".to_string()),
        Value::Bool(true) => Ok("True".to_string()),
        Value::Bool(false) => Ok("False".to_string()),
        Value::Number(n) => python_number(n),
        Value::String(s) => Ok(python_str(s)),
        Value::Array(items) => {
            let items = items
                .iter()
                .map(python_literal)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(format!("[{}]", items.join(", ")))
        }
        Value::Object(entries) => {
            let entries = entries
                .iter()
                .map(|(k, v)| Ok(format!("{}: {}", python_str(k), python_literal(v)?)))
                .collect::<Result<Vec<_>, CodegenError>>()?;
            Ok(format!("{{{}}}", entries.join(", ")))
        }
    }
}

/// Renders a JSON default value as the default of a dataclass field.
///
/// Lists and dicts are mutable, which `dataclasses` rejects as a plain
/// default, so they are wrapped in a `default_factory`.
///
/// # Errors
/// Returns `CodegenError::UnrepresentableDefault` as [`python_literal`]
/// does.
pub fn python_default(value: &Value) -> Result<String, CodegenError> {
    match value {
        Value::Array(items) if items.is_empty() => {
            Ok("dataclasses.field(default_factory=list)".to_string())
        }
        Value::Object(entries) if entries.is_empty() => {
            Ok("dataclasses.field(default_factory=dict)".to_string())
        }
        Value::Array(_) | Value::Object(_) => Ok(format!(
            "dataclasses.field(default_factory=lambda: {})",
            python_literal(value)?
        )),
        scalar => python_literal(scalar),
    }
}

fn python_number(n: &Number) -> Result<String, CodegenError> {
    if let Some(i) = n.as_i64() {
        return Ok(i.to_string());
    }
    if let Some(u) = n.as_u64() {
        return Ok(u.to_string());
    }
    match n.as_f64() {
        Some(f) => python_float(f),
        None => Err(CodegenError::UnrepresentableDefault {
            value: n.to_string(),
        }),
    }
}

/// Renders a float the way Python's `repr` does: shortest round-trip
/// digits, positional notation for decimal exponents in `-4..16`,
/// scientific notation with a signed two-digit exponent otherwise.
///
/// # Errors
/// Returns `CodegenError::UnrepresentableDefault` for NaN and infinities,
/// which have no literal form in Python source.
pub fn python_float(f: f64) -> Result<String, CodegenError> {
    if !f.is_finite() {
        return Err(CodegenError::UnrepresentableDefault {
            value: f.to_string(),
        });
    }

    let scientific = format!("{f:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return Err(CodegenError::UnrepresentableDefault { value: scientific });
    };
    let exponent: i32 = exponent
        .parse()
        .map_err(|_| CodegenError::UnrepresentableDefault {
            value: scientific.clone(),
        })?;

    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();

    let body = if (-4..16).contains(&exponent) {
        positional(&digits, exponent)
    } else {
        let (first, rest) = digits.split_at(1);
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        if rest.is_empty() {
            format!("{first}e{exp_sign}{:02}", exponent.unsigned_abs())
        } else {
            format!("{first}.{rest}e{exp_sign}{:02}", exponent.unsigned_abs())
        }
    };

    Ok(format!("{sign}{body}"))
}

/// Lays out significant digits `d.ddd × 10^exponent` without an exponent.
fn positional(digits: &str, exponent: i32) -> String {
    if exponent < 0 {
        let zeros = "0".repeat(exponent.unsigned_abs() as usize - 1);
        return format!("0.{zeros}{digits}");
    }

    let int_len = exponent as usize + 1;
    if digits.len() <= int_len {
        let zeros = "0".repeat(int_len - digits.len());
        format!("{digits}{zeros}.0")
    } else {
        let (int_part, frac_part) = digits.split_at(int_len);
        format!("{int_part}.{frac_part}")
    }
}

/// Renders a string as a Python string literal.
///
/// Single quotes are used unless the string contains a single quote and no
/// double quote.
#[must_use]
pub fn python_str(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    python_quoted(s, quote)
}

/// Renders a string as a Python string literal delimited by `quote`.
#[must_use]
pub fn python_quoted(s: &str, quote: char) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => {
                let code = u32::from(c);
                if code <= 0xff {
                    out.push_str(&format!("\\x{code:02x}"));
                } else if code <= 0xffff {
                    out.push_str(&format!("\\u{code:04x}"));
                } else {
                    out.push_str(&format!("\\U{code:08x}"));
                }
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn lit(value: Value) -> String {
        python_literal(&value).expect("Failed to render literal")
    }

    #[test]
    fn test_scalar_literals() {
        assert_eq!(lit(json!(null)), "None");
        assert_eq!(lit(json!(true)), "True");
        assert_eq!(lit(json!(false)), "False");
        assert_eq!(lit(json!(0)), "0");
        assert_eq!(lit(json!(-42)), "-42");
        assert_eq!(lit(json!(u64::MAX)), "18446744073709551615");
    }

    #[test]
    fn test_float_literals() {
        assert_eq!(lit(json!(0.0)), "0.0");
        assert_eq!(lit(json!(1.0)), "1.0");
        assert_eq!(lit(json!(-2.5)), "-2.5");
        assert_eq!(lit(json!(0.1)), "0.1");
        assert_eq!(lit(json!(100.0)), "100.0");
        assert_eq!(lit(json!(123.456)), "123.456");
        assert_eq!(lit(json!(0.0001)), "0.0001");
        assert_eq!(lit(json!(0.00001)), "1e-05");
        assert_eq!(lit(json!(1e15)), "1000000000000000.0");
        assert_eq!(lit(json!(1e16)), "1e+16");
        assert_eq!(lit(json!(1.5e300)), "1.5e+300");
        assert_eq!(lit(json!(-1.25e-7)), "-1.25e-07");
    }

    #[test]
    fn test_non_finite_floats_are_rejected() {
        for f in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                python_float(f),
                Err(CodegenError::UnrepresentableDefault { .. })
            ));
        }
    }

    #[test]
    fn test_string_literals() {
        assert_eq!(python_str("hello"), "'hello'");
        assert_eq!(python_str(""), "''");
        assert_eq!(python_str("it's"), "\"it's\"");
        assert_eq!(python_str("say \"hi\""), "'say \"hi\"'");
        assert_eq!(python_str("both ' and \""), "'both \\' and \"'");
        assert_eq!(python_str("a\\b"), "'a\\\\b'");
        assert_eq!(python_str("line\nbreak\ttab"), "'line\\nbreak\\ttab'");
        assert_eq!(python_str("\u{1}"), "'\\x01'");
        assert_eq!(python_str("caf\u{e9}"), "'caf\u{e9}'");
    }

    #[test]
    fn test_quoted_with_fixed_delimiter() {
        assert_eq!(python_quoted("com.example", '"'), "\"com.example\"");
        assert_eq!(python_quoted("a\"b", '"'), "\"a\\\"b\"");
        assert_eq!(python_quoted("it's", '"'), "\"it's\"");
        assert_eq!(python_quoted("a\\b", '"'), "\"a\\\\b\"");
    }

    #[test]
    fn test_mutable_defaults_use_factory() {
        let default = |value: Value| python_default(&value).expect("Failed to render default");
        assert_eq!(default(json!([])), "dataclasses.field(default_factory=list)");
        assert_eq!(default(json!({})), "dataclasses.field(default_factory=dict)");
        assert_eq!(
            default(json!([1, "two"])),
            "dataclasses.field(default_factory=lambda: [1, 'two'])"
        );
        assert_eq!(
            default(json!({"k": [true]})),
            "dataclasses.field(default_factory=lambda: {'k': [True]})"
        );
        assert_eq!(default(json!(null)), "None");
        assert_eq!(default(json!("x")), "'x'");
        assert_eq!(default(json!(1.5)), "1.5");
    }

    #[test]
    fn test_container_literals() {
        assert_eq!(lit(json!([])), "[]");
        assert_eq!(lit(json!([1, "two", null])), "[1, 'two', None]");
        assert_eq!(lit(json!({})), "{}");
        assert_eq!(
            lit(json!({"b": 1, "a": [true]})),
            "{'b': 1, 'a': [True]}"
        );
    }
}
