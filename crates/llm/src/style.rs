/// Summary style selected per request
///
/// Exactly one style governs prompt construction for a given call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryStyle {
    Brief,
    Detailed,
    BulletPoints,
    Executive,
}

impl SummaryStyle {
    /// Fixed instruction text for this style
    pub fn instruction(self) -> &'static str {
        match self {
            Self::Brief => {
                "Summarize the following content in 3-4 concise sentences. \
                 Focus only on the key ideas."
            }
            Self::Detailed => {
                "Create a detailed summary (200-300 words). \
                 Capture main arguments, key details, and conclusions."
            }
            Self::BulletPoints => {
                "Summarize the following content as 5-7 bullet points. \
                 Each bullet should be short and informative."
            }
            Self::Executive => {
                "Write an executive summary for busy decision-makers. \
                 Highlight key insights, risks, opportunities, and recommendations."
            }
        }
    }

    /// Canonical keyword for this style
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Brief => "brief",
            Self::Detailed => "detailed",
            Self::BulletPoints => "bullet_points",
            Self::Executive => "executive",
        }
    }

    /// Parse a style keyword, falling back to `Brief` for anything
    /// unrecognized. The fallback is deliberate: callers feeding
    /// free-form keywords (web forms) get a usable default instead of
    /// an error.
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "brief" => Self::Brief,
            "detailed" => Self::Detailed,
            "bullet_points" => Self::BulletPoints,
            "executive" => Self::Executive,
            _ => Self::Brief,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instruction_per_style() {
        assert!(SummaryStyle::Brief.instruction().contains("3-4 concise sentences"));
        assert!(SummaryStyle::Detailed.instruction().contains("200-300 words"));
        assert!(SummaryStyle::BulletPoints.instruction().contains("5-7 bullet points"));
        assert!(SummaryStyle::Executive.instruction().contains("executive summary"));
    }

    #[test]
    fn test_from_keyword() {
        assert_eq!(SummaryStyle::from_keyword("brief"), SummaryStyle::Brief);
        assert_eq!(SummaryStyle::from_keyword("detailed"), SummaryStyle::Detailed);
        assert_eq!(
            SummaryStyle::from_keyword("bullet_points"),
            SummaryStyle::BulletPoints
        );
        assert_eq!(SummaryStyle::from_keyword("executive"), SummaryStyle::Executive);
    }

    #[test]
    fn test_from_keyword_falls_back_to_brief() {
        assert_eq!(SummaryStyle::from_keyword("haiku"), SummaryStyle::Brief);
        assert_eq!(SummaryStyle::from_keyword(""), SummaryStyle::Brief);
        assert_eq!(SummaryStyle::from_keyword("BRIEF"), SummaryStyle::Brief);
    }

    #[test]
    fn test_keyword_round_trip() {
        for style in [
            SummaryStyle::Brief,
            SummaryStyle::Detailed,
            SummaryStyle::BulletPoints,
            SummaryStyle::Executive,
        ] {
            assert_eq!(SummaryStyle::from_keyword(style.keyword()), style);
        }
    }
}
