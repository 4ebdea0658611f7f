//! Parsing of `<prefix><index>` interface names such as `event5` or `js0`.

/// Last path segment of `path`: everything after the final `/`, or the whole
/// string when there is no separator.
pub fn last_segment(path: &str) -> &str {
    match path.rfind('/') {
        Some(pos) => &path[pos + 1..],
        None => path,
    }
}

/// An interface name split into its scheme prefix and numeric index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeName<'a> {
    /// The full segment, e.g. `event5`
    pub token: &'a str,
    /// The index after the prefix, if it is a plain decimal number
    pub index: Option<u32>,
}

impl<'a> NodeName<'a> {
    /// Accepts `segment` if it starts with `prefix`.
    ///
    /// The index part is not required to be numeric: the device tree decides
    /// whether such an entry exists.
    pub fn parse(segment: &'a str, prefix: &str) -> Option<Self> {
        if prefix.is_empty() {
            return None;
        }
        let rest = segment.strip_prefix(prefix)?;
        let index = if !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()) {
            rest.parse().ok()
        } else {
            None
        };
        Some(Self {
            token: segment,
            index,
        })
    }
}
