//! Helper functions bound into the demo views.
//!
//! | Template call                 | Result                                  |
//! |-------------------------------|-----------------------------------------|
//! | `app_name()`                  | `"Trellis"`                             |
//! | `cache_buster()`              | process start time, Unix seconds        |
//! | `add(a=2, b=3)`               | `5` (float if either side is a float)   |
//! | `dollar_format(amount=12.5)`  | `"$12.50"`                              |

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tera::{Error, Value};

use trellis_renderer::FunctionMap;

pub const APP_NAME: &str = "Trellis";

/// Build the helper table. `started_at` is captured once in `main`.
pub fn function_map(started_at: DateTime<Utc>) -> FunctionMap {
    let cache_buster = started_at.timestamp();
    FunctionMap::new()
        .with(
            "app_name",
            |_: &HashMap<String, Value>| -> tera::Result<Value> { Ok(Value::from(APP_NAME)) },
        )
        .with(
            "cache_buster",
            move |_: &HashMap<String, Value>| -> tera::Result<Value> {
                Ok(Value::from(cache_buster))
            },
        )
        .with("add", add)
        .with("dollar_format", dollar_format)
}

fn number<'a>(args: &'a HashMap<String, Value>, func: &str, key: &str) -> tera::Result<&'a Value> {
    args.get(key)
        .filter(|v| v.is_number())
        .ok_or_else(|| Error::msg(format!("`{func}` expects a numeric `{key}` argument")))
}

fn add(args: &HashMap<String, Value>) -> tera::Result<Value> {
    let a = number(args, "add", "a")?;
    let b = number(args, "add", "b")?;
    if let (Some(a), Some(b)) = (a.as_i64(), b.as_i64()) {
        return Ok(Value::from(a + b));
    }
    let sum = a.as_f64().unwrap_or_default() + b.as_f64().unwrap_or_default();
    Ok(Value::from(sum))
}

fn dollar_format(args: &HashMap<String, Value>) -> tera::Result<Value> {
    let amount = number(args, "dollar_format", "amount")?
        .as_f64()
        .unwrap_or_default();
    Ok(Value::from(format!("${amount:.2}")))
}
