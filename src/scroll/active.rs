//! Tracks which section the reader is currently looking at.

use crate::config::ACTIVE_SECTION_LINE;

/// Viewport-relative vertical extent of a section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    pub fn contains_line(&self, line: f64) -> bool {
        self.top <= line && self.bottom >= line
    }
}

/// Id of the first section, in document order, crossing the reference line.
pub fn section_at_line<'a, I>(sections: I, line: f64) -> Option<&'a str>
where
    I: IntoIterator<Item = (&'a str, SectionBounds)>,
{
    sections
        .into_iter()
        .find(|(_, bounds)| bounds.contains_line(line))
        .map(|(id, _)| id)
}

/// Remembers the last section that matched so gaps between sections do not
/// clear the highlight.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveSection {
    current: Option<String>,
    line: f64,
}

impl Default for ActiveSection {
    fn default() -> Self {
        Self::new(ACTIVE_SECTION_LINE)
    }
}

impl ActiveSection {
    pub fn new(line: f64) -> Self {
        Self { current: None, line }
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Re-run detection over fresh bounds. Returns `true` if the active section changed.
    pub fn update<'a, I>(&mut self, sections: I) -> bool
    where
        I: IntoIterator<Item = (&'a str, SectionBounds)>,
    {
        match section_at_line(sections, self.line) {
            Some(id) if self.current.as_deref() != Some(id) => {
                self.current = Some(id.to_string());
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Three stacked sections seen after scrolling the page by `scroll`.
    fn layout(scroll: f64) -> Vec<(&'static str, SectionBounds)> {
        vec![
            ("inicio", SectionBounds::new(0.0 - scroll, 500.0 - scroll)),
            ("mision", SectionBounds::new(500.0 - scroll, 1200.0 - scroll)),
            ("vision", SectionBounds::new(1200.0 - scroll, 2000.0 - scroll)),
        ]
    }

    #[test]
    fn test_first_section_at_top() {
        assert_eq!(section_at_line(layout(0.0), 100.0), Some("inicio"));
    }

    #[test]
    fn test_second_section_after_scrolling() {
        // reference line now falls at document offset 600
        assert_eq!(section_at_line(layout(500.0), 100.0), Some("mision"));
    }

    #[test]
    fn test_boundaries_are_inclusive_and_first_wins() {
        // line sits exactly where inicio ends and mision begins
        assert_eq!(section_at_line(layout(400.0), 100.0), Some("inicio"));
    }

    #[test]
    fn test_gap_keeps_previous_section() {
        let mut active = ActiveSection::default();
        assert!(active.update(layout(0.0)));
        assert_eq!(active.current(), Some("inicio"));

        let gap = vec![
            ("inicio", SectionBounds::new(-600.0, 40.0)),
            ("mision", SectionBounds::new(180.0, 900.0)),
        ];
        assert!(!active.update(gap));
        assert_eq!(active.current(), Some("inicio"));
    }

    #[test]
    fn test_update_reports_changes_only() {
        let mut active = ActiveSection::default();
        assert!(active.update(layout(500.0)));
        assert!(!active.update(layout(520.0)));
        assert!(active.update(layout(1500.0)));
        assert_eq!(active.current(), Some("vision"));
    }

    #[test]
    fn test_nothing_matched_yet() {
        let mut active = ActiveSection::default();
        assert!(!active.update(Vec::new()));
        assert_eq!(active.current(), None);
    }
}
