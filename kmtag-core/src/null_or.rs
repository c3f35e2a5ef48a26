// Optional values for kmtag

/// A value, or an explicit marker that there is none.
///
/// Presence is recorded separately from the value itself, so "absent" never
/// collides with "present but zero". Two access styles exist and the type
/// system decides which one a wrapper offers:
///
/// - Strict: [`NullOr::get`], [`NullOr::into_option`] and friends work for
///   every `T` and make the caller handle absence. This is the only style
///   available for references, which is what the safe reader returns.
/// - Lenient: [`NullOr::value`] is available only when `T: Default` and
///   yields the default for an empty wrapper. Call sites reading typed tag
///   values go through [`NullOr::copied`] or [`NullOr::cloned`] first, which
///   makes the switch to lenient access visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NullOr<T> {
    value: Option<T>,
}

impl<T> NullOr<T> {
    pub const fn null() -> Self {
        NullOr { value: None }
    }

    pub const fn new(value: T) -> Self {
        NullOr { value: Some(value) }
    }

    pub fn is_ok(&self) -> bool {
        self.value.is_some()
    }

    pub fn is_null(&self) -> bool {
        self.value.is_none()
    }

    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.value.as_mut()
    }

    pub fn as_ref(&self) -> NullOr<&T> {
        NullOr {
            value: self.value.as_ref(),
        }
    }

    pub fn as_mut(&mut self) -> NullOr<&mut T> {
        NullOr {
            value: self.value.as_mut(),
        }
    }

    pub fn into_option(self) -> Option<T> {
        self.value
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> NullOr<U> {
        NullOr {
            value: self.value.map(f),
        }
    }

    /// `self` if it holds a value, otherwise `other`.
    pub fn or(self, other: NullOr<T>) -> NullOr<T> {
        if self.is_ok() {
            self
        } else {
            other
        }
    }

    /// Like [`NullOr::or`], but only builds the fallback when needed.
    pub fn or_else<F: FnOnce() -> NullOr<T>>(self, f: F) -> NullOr<T> {
        if self.is_ok() {
            self
        } else {
            f()
        }
    }
}

impl<T: Default> NullOr<T> {
    /// The held value, or `T::default()` for an empty wrapper.
    ///
    /// Absence is still observable through [`NullOr::is_ok`]; this only
    /// guarantees the read itself is well defined.
    pub fn value(self) -> T {
        self.value.unwrap_or_default()
    }
}

impl<'a, T: Copy> NullOr<&'a T> {
    pub fn copied(self) -> NullOr<T> {
        NullOr {
            value: self.value.copied(),
        }
    }
}

impl<'a, T: Clone> NullOr<&'a T> {
    pub fn cloned(self) -> NullOr<T> {
        NullOr {
            value: self.value.cloned(),
        }
    }
}

impl<T> Default for NullOr<T> {
    fn default() -> Self {
        NullOr::null()
    }
}

impl<T> From<Option<T>> for NullOr<T> {
    fn from(value: Option<T>) -> Self {
        NullOr { value }
    }
}

impl<T> From<NullOr<T>> for Option<T> {
    fn from(wrapper: NullOr<T>) -> Self {
        wrapper.value
    }
}

/// First wrapper holding a value, scanning left to right, or an empty one.
///
/// Stops pulling from `wrappers` as soon as a value is found.
pub fn first_ok<T, I>(wrappers: I) -> NullOr<T>
where
    I: IntoIterator<Item = NullOr<T>>,
{
    wrappers
        .into_iter()
        .find(NullOr::is_ok)
        .unwrap_or_default()
}

/// The held value, or `def` converted into the wrapped type.
pub fn default_or<T, D>(optional: NullOr<T>, def: D) -> T
where
    D: Into<T>,
{
    match optional.value {
        Some(value) => value,
        None => def.into(),
    }
}

/// Argument list form of [`first_ok`]. Later arguments are only evaluated
/// while every earlier one is empty.
///
/// ```
/// use kmtag_core::{first_ok, NullOr};
///
/// let found = first_ok!(NullOr::null(), NullOr::new(3u32), NullOr::new(4u32));
/// assert_eq!(found, NullOr::new(3));
/// ```
#[macro_export]
macro_rules! first_ok {
    ($head:expr $(,)?) => {
        $head
    };
    ($head:expr, $($tail:expr),+ $(,)?) => {{
        let head = $head;
        if head.is_ok() {
            head
        } else {
            $crate::first_ok!($($tail),+)
        }
    }};
}
