//! printf-style message templating.

/// Substitutes `args` into the placeholders of `template`.
///
/// The template is scanned once, left to right:
/// - `%s`, `%d`, `%i`, `%f`, `%j`, `%o` and `%O` each take the next argument;
///   once the arguments run out they are kept as written
/// - `%%` produces a single `%`
/// - any other `%` is kept as written
///
/// Arguments left over after the scan are appended, separated by spaces.
/// Substituted text is never scanned again.
///
/// # Example
///
/// ```rust
/// use preconditions::errr::template::format;
///
/// let message = format("(%s): Error ID %s", &["svc", "E42"]);
/// assert_eq!(message, "(svc): Error ID E42");
/// ```
pub fn format<S: AsRef<str>>(template: &str, args: &[S]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut args = args.iter();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.peek().copied() {
            Some('%') => {
                chars.next();
                out.push('%');
            }
            Some(conv @ ('s' | 'd' | 'i' | 'f' | 'j' | 'o' | 'O')) => {
                chars.next();
                match args.next() {
                    Some(arg) => out.push_str(arg.as_ref()),
                    None => {
                        out.push('%');
                        out.push(conv);
                    }
                }
            }
            _ => out.push('%'),
        }
    }

    for arg in args {
        out.push(' ');
        out.push_str(arg.as_ref());
    }

    out
}
