/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// Objects with a string `t` (`{"t": .., "c": ..}` or `{"t": ..}`)
/// become [`Value::Node`](crate::Value::Node), like they do when decoded.
///
/// ```rust
/// use pandoc_filter::{pandoc, Tag};
///
/// let para = pandoc!({"t": "Para", "c": [{"t": "Str", "c": "Hi"}, {"t": "Space"}]});
/// assert_eq!(para.tag(), Some(&Tag::Para));
/// ```
#[macro_export]
macro_rules! pandoc {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::pandoc!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::ValueMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::ValueMap::new();
        $(
            object.insert($key.to_string(), $crate::pandoc!($value));
        )*
        $crate::Value::from_map(object)
    }};

    // Any other expression convertible into a Value
    ($other:expr) => {
        $crate::Value::from($other)
    };
}
