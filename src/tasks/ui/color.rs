/* ************************************************************************ **
** This file is part of mathkern, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use ::ansi_term::{Colour, Style};
use ::std::fmt;

/// A thing that might colorize text based on a value.
pub trait PaintAs<D, C> {
    fn paint_as(&self, compared: &C, displayed: D) -> String;
}

/// Picks the style of the first threshold that a value exceeds.
///
/// `divs` is scanned in order, so list it from the largest threshold down.
pub struct ColorByRange<T> {
    pub divs: Vec<(T, Style)>,
    pub lowest: Style,
}

impl<T> ColorByRange<T> {
    pub fn new(divs: Vec<(T, Style)>, lowest: Style) -> ColorByRange<T>
    { ColorByRange { divs, lowest } }

    fn style_of(&self, x: &T) -> Style
    where T: PartialOrd,
    {
        for &(ref pivot, style) in &self.divs {
            if x > pivot { return style; }
        }
        self.lowest
    }
}

impl ColorByRange<f64> {
    /// Red for residuals that suggest a wrong root, yellow for ones that are
    /// merely imprecise.
    pub fn residuals() -> Self {
        ColorByRange::new(vec![
            (1e-6, Colour::Red.bold()),
            (1e-10, Colour::Yellow.normal()),
        ], Colour::Green.normal())
    }
}

impl<D> PaintAs<D, f64> for ColorByRange<f64>
where D: fmt::Display,
{
    fn paint_as(&self, compared: &f64, displayed: D) -> String
    { paint(self.style_of(&compared.abs()), displayed).to_string() }
}

/// Does not colorize.
pub struct NullPainter;

impl<D, C> PaintAs<D, C> for NullPainter
where D: fmt::Display,
{
    fn paint_as(&self, _: &C, displayed: D) -> String
    { displayed.to_string() }
}

// hack for type inference issues
pub fn paint<T>(style: Style, value: T) -> Wrapper<T, T>
{ gpaint(style, value) }

pub fn gpaint<U, T>(style: Style, value: U) -> Wrapper<U, T>
{ Wrapper { style, value, _target: Default::default() } }

/// Colorizes `Display` and `LowerExp` output.
///
/// The second parameter lets `U` be anything that borrows as `T`, so that a
/// wrapper around an owned value can be returned from a function.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Wrapper<U, T = U> {
    style: Style,
    value: U,
    _target: ::std::marker::PhantomData<T>,
}

macro_rules! derive_fmt_impl {
    ($Trait:path) => {
        impl<U, T> $Trait for Wrapper<U, T>
        where
            U: ::std::borrow::Borrow<T>,
            T: $Trait,
        {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.style.prefix())?;
                T::fmt(self.value.borrow(), f)?;
                write!(f, "{}", self.style.suffix())
            }
        }
    };
}

derive_fmt_impl!(fmt::Display);
derive_fmt_impl!(fmt::LowerExp);
