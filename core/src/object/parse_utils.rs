pub(crate) fn header<'a>(line: &'a [u8], name: &[u8]) -> Option<&'a [u8]> {
    if line.contains(&b' ') {
        let (maybe_name, value) = split_once(line, &b' ');
        if maybe_name == name {
            Some(value)
        } else {
            None
        }
    } else {
        None
    }
}

pub(crate) fn split_once<'a>(s: &'a [u8], c: &u8) -> (&'a [u8], &'a [u8]) {
    match s.iter().position(|b| b == c) {
        Some(n) => (&s[0..n], &s[n + 1..]),
        None => (s, &[]),
    }
}

/// Parse a `+hhmm` / `-hhmm` offset into minutes east of UTC.
pub(crate) fn tz_from_str(s: &[u8]) -> Option<i16> {
    if s.len() != 5 {
        return None;
    }

    let sign: i16 = match s[0] {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };

    let mut digits = [0i16; 4];
    for (d, c) in digits.iter_mut().zip(&s[1..]) {
        if !c.is_ascii_digit() {
            return None;
        }
        *d = i16::from(c - b'0');
    }

    let hh = digits[0] * 10 + digits[1];
    let mm = digits[2] * 10 + digits[3];
    if mm >= 60 {
        return None;
    }

    Some(sign * (hh * 60 + mm))
}

/// Format minutes east of UTC as `+hhmm` / `-hhmm`.
pub(crate) fn format_tz(tz_offset: i16) -> String {
    let sign = if tz_offset < 0 { "-" } else { "+" };

    let offset = tz_offset.abs();
    let hours = offset / 60;
    let min = offset % 60;

    format!("{}{:02}{:02}", sign, hours, min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_fn() {
        assert_eq!(header(b"parent abc", b"parent").unwrap(), b"abc");
        assert_eq!(header(b"parent ", b"parent").unwrap(), b"");

        assert_eq!(header(b"parenx abc", b"parent"), None);
        assert_eq!(header(b"parent", b"parent"), None);
        assert_eq!(header(b"parentx abc", b"parent"), None);
    }

    #[test]
    fn tz_round_trip() {
        assert_eq!(tz_from_str(b"+0000"), Some(0));
        assert_eq!(tz_from_str(b"-0800"), Some(-480));
        assert_eq!(tz_from_str(b"+0545"), Some(345));
        assert_eq!(format_tz(345), "+0545");
        assert_eq!(format_tz(-480), "-0800");
    }

    #[test]
    fn tz_rejects_garbage() {
        assert_eq!(tz_from_str(b"0000"), None);
        assert_eq!(tz_from_str(b"*0000"), None);
        assert_eq!(tz_from_str(b"+00a0"), None);
        assert_eq!(tz_from_str(b"+0075"), None);
    }
}
