//! Configuration deserialization helpers
//!
//! Paths may be written either as a single string or as an array of path
//! segments. Both forms go through shell expansion.

use std::fmt;
use std::path::PathBuf;

use serde::de::{self, SeqAccess, Visitor};
use serde::Deserializer;
use shellexpand::tilde;

/// Expands `~` and environment variables in `path`
///
/// When a variable is undefined, only the tilde is expanded and the variable
/// is left as written.
pub fn expand_path(path: &str) -> String {
    match shellexpand::full(path) {
        Ok(expanded) => expanded.to_string(),
        Err(_) => tilde(path).to_string(),
    }
}

/// Appends a separator to a bare drive letter such as `C:`
pub fn handle_colon_end(mut path: String) -> String {
    if path.ends_with(':') {
        path += "\\";
    };
    path
}

pub fn process_path<S: AsRef<str>>(path: S) -> String {
    let p = expand_path(path.as_ref());
    handle_colon_end(p)
}

/// Deserializes a path from a string or an array of segments
pub fn deserialize_path<'de, D>(deserializer: D) -> Result<PathBuf, D::Error>
where
    D: Deserializer<'de>,
{
    struct PathVisitor;

    impl<'de> Visitor<'de> for PathVisitor {
        type Value = PathBuf;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a path string or an array of path segments")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(PathBuf::from(process_path(value)))
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let mut path = PathBuf::new();
            while let Some(segment) = seq.next_element::<String>()? {
                path.push(process_path(segment));
            }
            Ok(path)
        }
    }

    deserializer.deserialize_any(PathVisitor)
}
