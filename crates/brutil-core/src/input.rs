//! # Raw Input
//!
//! Validators accept text that may be absent. [`RawInput`] lets the same
//! function take `&str`, `String`, `&String`, or an `Option` of any of them,
//! with `None` treated exactly like empty text.

/// Text handed to a validator, possibly absent.
pub trait RawInput {
    /// The text, or `None` if absent.
    fn raw(&self) -> Option<&str>;
}

impl RawInput for str {
    fn raw(&self) -> Option<&str> {
        Some(self)
    }
}

impl RawInput for String {
    fn raw(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl<T: RawInput + ?Sized> RawInput for &T {
    fn raw(&self) -> Option<&str> {
        (**self).raw()
    }
}

impl<T: RawInput> RawInput for Option<T> {
    fn raw(&self) -> Option<&str> {
        self.as_ref().and_then(RawInput::raw)
    }
}
