use crate::choice::{Choice, choice};
use crate::primitive::{IsSymbol, is_symbol};
use crate::symbol::Symbol;

/// Parser that matches a single ASCII digit (0-9)
///
/// Works for any symbol type built from bytes, which covers both `char`
/// and `u8` input.
pub fn digit<T>() -> Choice<IsSymbol<T>>
where
    T: Symbol + From<u8>,
{
    choice(
        is_symbol(T::from(b'0')),
        (b'1'..=b'9').map(|d| is_symbol(T::from(d))),
    )
}
