use crate::error::QueueError;
use std::cmp::Ordering;
use std::fmt;

/// An element of a [`Queue`](crate::Queue): an owned copy of a string.
///
/// Elements order byte-wise lexicographically, the way `strcmp` does.
/// [`Element::cmp_numeric`] gives the order used by the monotonic filters.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Element {
    value: String,
}

impl Element {
    /// Copy `value` into a new element.
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_owned(),
        }
    }

    /// Copy `value` into a new element, or return an error if the copy
    /// cannot be allocated.
    pub fn try_new(value: &str) -> Result<Self, QueueError> {
        let mut owned = String::new();
        owned.try_reserve_exact(value.len())?;
        owned.push_str(value);
        Ok(Self { value: owned })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn into_value(self) -> String {
        self.value
    }

    /// Compare as integers when both values parse as `i64`, byte-wise
    /// otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Element;
    /// use std::cmp::Ordering;
    ///
    /// let (two, thirteen) = (Element::new("2"), Element::new("13"));
    /// assert_eq!(two.cmp_numeric(&thirteen), Ordering::Less);
    /// assert_eq!(two.cmp(&thirteen), Ordering::Greater);
    /// assert_eq!(Element::new("b").cmp_numeric(&Element::new("10")), Ordering::Greater);
    /// ```
    pub fn cmp_numeric(&self, other: &Element) -> Ordering {
        match (self.value.parse::<i64>(), other.value.parse::<i64>()) {
            (Ok(a), Ok(b)) => a.cmp(&b),
            _ => self.value.cmp(&other.value),
        }
    }

    /// Copy the value into `buf` as a NUL-terminated byte string.
    ///
    /// At most `buf.len() - 1` bytes of the value are copied, the rest of
    /// `buf` is zero-filled. Nothing is written to an empty `buf`.
    ///
    /// Returns the number of value bytes copied.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Element;
    ///
    /// let element = Element::new("gerbil");
    /// let mut buf = [0xff_u8; 5];
    /// assert_eq!(element.copy_to(&mut buf), 4);
    /// assert_eq!(&buf, b"gerb\0");
    /// ```
    pub fn copy_to(&self, buf: &mut [u8]) -> usize {
        let capacity = match buf.len().checked_sub(1) {
            Some(capacity) => capacity,
            None => return 0,
        };
        let copied = self.value.len().min(capacity);
        let (head, tail) = buf.split_at_mut(copied);
        head.copy_from_slice(&self.value.as_bytes()[..copied]);
        tail.iter_mut().for_each(|byte| *byte = 0);
        copied
    }
}

impl From<&str> for Element {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl AsRef<str> for Element {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.value, f)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
