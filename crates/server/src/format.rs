/// Re-render a bullet_points summary as clean `- ` lines
///
/// Splits on line breaks, trims, drops blank lines, and prefixes each
/// remaining line. Applied only in this layer; the library returns the
/// endpoint's text untouched.
pub fn format_bullets(summary: &str) -> String {
    summary
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| format!("- {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bullets_drops_blank_lines() {
        assert_eq!(format_bullets("a\n\nb\nc"), "- a\n- b\n- c");
    }

    #[test]
    fn test_format_bullets_trims_lines() {
        assert_eq!(format_bullets("  first point  \n\t second point"), "- first point\n- second point");
    }

    #[test]
    fn test_format_bullets_empty_input() {
        assert_eq!(format_bullets(""), "");
        assert_eq!(format_bullets("\n\n\n"), "");
    }
}
