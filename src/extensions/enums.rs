use strum::IntoEnumIterator;

/// Comma-separated spellings of every variant of `T`, for error messages.
pub fn valid_csv<T>() -> String
where
    T: IntoEnumIterator + AsRef<str>,
{
    T::iter()
        .map(|v| v.as_ref().to_owned())
        .collect::<Vec<_>>()
        .join(", ")
}
