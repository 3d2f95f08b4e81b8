//! Minimal percent-directive formatter.
//!
//! Supports `%d`, `%u`, `%x`, `%s`, `%c` and `%%` over a closed argument
//! enum. Anything else after a `%` is printed verbatim, and so is a directive
//! whose argument is missing or of the wrong kind.

use termline_platform::Transport;

/// A formatter argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arg<'a> {
    /// Signed 32-bit integer.
    Int(i32),
    /// Unsigned 32-bit integer.
    Uint(u32),
    /// String, or `None` for an absent one (printed as `(null)`).
    Str(Option<&'a str>),
    /// A single byte.
    Char(u8),
}

impl From<i32> for Arg<'_> {
    fn from(v: i32) -> Self {
        Arg::Int(v)
    }
}

impl From<u32> for Arg<'_> {
    fn from(v: u32) -> Self {
        Arg::Uint(v)
    }
}

impl From<u8> for Arg<'_> {
    fn from(v: u8) -> Self {
        Arg::Char(v)
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(v: &'a str) -> Self {
        Arg::Str(Some(v))
    }
}

impl<'a> From<Option<&'a str>> for Arg<'a> {
    fn from(v: Option<&'a str>) -> Self {
        Arg::Str(v)
    }
}

/// Render `format` with `args` to `out`.
pub fn write_formatted(out: &mut dyn Transport, format: &str, args: &[Arg<'_>]) {
    let mut args = args.iter();
    let mut bytes = format.bytes();

    while let Some(b) = bytes.next() {
        if b != b'%' {
            out.write_byte(b);
            continue;
        }
        let Some(directive) = bytes.next() else {
            out.write_byte(b'%');
            break;
        };
        if directive == b'%' {
            out.write_byte(b'%');
            continue;
        }
        if !matches!(directive, b'd' | b'u' | b'x' | b's' | b'c') {
            out.write_byte(b'%');
            out.write_byte(directive);
            continue;
        }

        let rendered = args.next().and_then(|arg| render(directive, *arg));
        match rendered {
            Some(Rendered::Text(text)) => out.write_str(&text),
            Some(Rendered::Byte(c)) => out.write_byte(c),
            None => {
                out.write_byte(b'%');
                out.write_byte(directive);
            },
        }
    }
}

enum Rendered {
    Text(String),
    Byte(u8),
}

fn render(directive: u8, arg: Arg<'_>) -> Option<Rendered> {
    let rendered = match (directive, arg) {
        (b'd', Arg::Int(v)) => Rendered::Text(v.to_string()),
        (b'd' | b'u', Arg::Uint(v)) => Rendered::Text(v.to_string()),
        (b'u', Arg::Int(v)) => Rendered::Text((v as u32).to_string()),
        (b'x', Arg::Uint(v)) => Rendered::Text(format!("{v:x}")),
        (b'x', Arg::Int(v)) => Rendered::Text(format!("{:x}", v as u32)),
        (b's', Arg::Str(Some(s))) => Rendered::Text(s.to_string()),
        (b's', Arg::Str(None)) => Rendered::Text("(null)".to_string()),
        (b'c', Arg::Char(c)) => Rendered::Byte(c),
        _ => return None,
    };
    Some(rendered)
}

/// Formatted output to a [`Terminal`](crate::Terminal) or any transport
/// wrapper with a `printf(&str, &[Arg])` method.
///
/// ```ignore
/// printf!(term, "pin %d is %s\r\n", 13, "on");
/// ```
#[macro_export]
macro_rules! printf {
    ($out:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        $out.printf($fmt, &[$($crate::Arg::from($arg)),*])
    };
}
