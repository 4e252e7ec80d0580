//! Number formatting for table cells

/// Fixed decimals with a space every three integer digits
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer_part, decimal_part) = match unsigned.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (unsigned, None),
    };

    let mut grouped = String::new();
    for (i, c) in integer_part.chars().enumerate() {
        if i > 0 && (integer_part.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Accelerating voltage, whole kilovolts when integral
pub fn format_voltage(kv: f64) -> String {
    if kv.fract() == 0.0 {
        format!("{} kV", format_number_with_decimals(kv, 0))
    } else {
        format!("{} kV", format_number_with_decimals(kv, 1))
    }
}

/// File size stored in megabytes, shown in GB from 1024 MB up
pub fn format_file_size(mb: f64) -> String {
    if mb >= 1024.0 {
        format!("{} GB", format_number_with_decimals(mb / 1024.0, 2))
    } else {
        format!("{} MB", format_number_with_decimals(mb, 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1 235");
        assert_eq!(format_number_with_decimals(1234.567, 2), "1 234.57");
        assert_eq!(format_number_with_decimals(1234567.0, 0), "1 234 567");
        assert_eq!(format_number_with_decimals(0.0, 1), "0.0");
        assert_eq!(format_number_with_decimals(-1234.5, 1), "-1 234.5");
        assert_eq!(format_number_with_decimals(-123.0, 0), "-123");
    }

    #[test]
    fn test_format_voltage() {
        assert_eq!(format_voltage(300.0), "300 kV");
        assert_eq!(format_voltage(62.5), "62.5 kV");
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(640.0), "640.0 MB");
        assert_eq!(format_file_size(2048.0), "2.00 GB");
        assert_eq!(format_file_size(6.2), "6.2 MB");
    }
}
