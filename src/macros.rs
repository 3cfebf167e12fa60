/// Builds a [`Value`](crate::Value) from JSON-like syntax.
///
/// ```rust
/// use string_grammar::value;
///
/// let rule = value!({
///     "comment": "single-quoted plain string",
///     "patterns": [{"include": "#string-escapes"}]
/// });
/// assert!(rule.is_mapping());
/// ```
///
/// Any other expression is converted with `Value::from`, so it must be a
/// type with a `From` impl for [`Value`](crate::Value). Use
/// [`to_value`](crate::to_value) for arbitrary `Serialize` types.
#[macro_export]
macro_rules! value {
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
        $crate::Value::Sequence(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Sequence(vec![$($crate::value!($elem)),*])
    };

    ({}) => {
        $crate::Value::Mapping($crate::Mapping::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut mapping = $crate::Mapping::new();
        $(
            mapping.insert($key.to_string(), $crate::value!($value));
        )*
        $crate::Value::Mapping(mapping)
    }};

    ($s:expr) => {
        $crate::Value::from($s)
    };
}
