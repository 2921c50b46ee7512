//! Which page section the floating nav should highlight.
//!
//! Everything here is pure: the caller measures the rendered sections and
//! hands their bounds in, so the matching rule can be tested without a DOM.

use crate::config::HEADER_OFFSET_PX;

/// Named in-page anchors. The nav links and the rendered `id` attributes both
/// come from [`SectionId::anchor`], so renaming a section happens in one place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Platform,
    Works,
    Testimonials,
    Pricing,
    Booking,
    Faq,
    Contact,
}

/// Sections the tracker considers, in priority order.
pub static TRACKED_SECTIONS: [SectionId; 5] = [
    SectionId::Platform,
    SectionId::Works,
    SectionId::Pricing,
    SectionId::Faq,
    SectionId::Contact,
];

impl SectionId {
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Platform => "platform",
            SectionId::Works => "works",
            SectionId::Testimonials => "testimonials",
            SectionId::Pricing => "pricing",
            SectionId::Booking => "booking",
            SectionId::Faq => "faq",
            SectionId::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Platform => "Platform",
            SectionId::Works => "Works",
            SectionId::Testimonials => "Reflections",
            SectionId::Pricing => "Pricing",
            SectionId::Booking => "Book a call",
            SectionId::Faq => "FAQ",
            SectionId::Contact => "Contact",
        }
    }
}

/// Vertical span of a rendered section, in document pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Half-open: the bottom edge belongs to the next section.
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// First section (in the order given) whose span contains
/// `scroll_y + HEADER_OFFSET_PX`. Sections missing from the document are
/// simply absent from `layout`.
pub fn active_section<I>(scroll_y: f64, layout: I) -> Option<SectionId>
where
    I: IntoIterator<Item = (SectionId, SectionBounds)>,
{
    let position = scroll_y + HEADER_OFFSET_PX;
    layout
        .into_iter()
        .find(|(_, bounds)| bounds.contains(position))
        .map(|(id, _)| id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stacked_layout() -> Vec<(SectionId, SectionBounds)> {
        // platform 400..1000, works 1000..1600, pricing 1600..2400,
        // faq 2400..2900, contact 2900..3300
        vec![
            (SectionId::Platform, SectionBounds::new(400.0, 600.0)),
            (SectionId::Works, SectionBounds::new(1000.0, 600.0)),
            (SectionId::Pricing, SectionBounds::new(1600.0, 800.0)),
            (SectionId::Faq, SectionBounds::new(2400.0, 500.0)),
            (SectionId::Contact, SectionBounds::new(2900.0, 400.0)),
        ]
    }

    #[test]
    fn nothing_is_active_above_the_first_section() {
        assert_eq!(active_section(0.0, stacked_layout()), None);
        assert_eq!(active_section(299.0, stacked_layout()), None);
    }

    #[test]
    fn header_offset_is_applied_before_matching() {
        assert_eq!(active_section(300.0, stacked_layout()), Some(SectionId::Platform));
        assert_eq!(active_section(899.0, stacked_layout()), Some(SectionId::Platform));
        assert_eq!(active_section(900.0, stacked_layout()), Some(SectionId::Works));
    }

    #[test]
    fn past_the_last_section_clears_the_highlight() {
        assert_eq!(active_section(3199.0, stacked_layout()), Some(SectionId::Contact));
        assert_eq!(active_section(3200.0, stacked_layout()), None);
    }

    #[test]
    fn overlapping_sections_resolve_to_the_first_declared() {
        let layout = vec![
            (SectionId::Works, SectionBounds::new(0.0, 1000.0)),
            (SectionId::Pricing, SectionBounds::new(500.0, 1000.0)),
        ];
        assert_eq!(active_section(600.0, layout.clone()), Some(SectionId::Works));
        assert_eq!(active_section(900.0, layout), Some(SectionId::Pricing));
    }

    #[test]
    fn missing_sections_are_skipped() {
        let layout: Vec<_> = stacked_layout()
            .into_iter()
            .filter(|(id, _)| *id != SectionId::Works)
            .collect();
        assert_eq!(active_section(1000.0, layout.clone()), None);
        assert_eq!(active_section(1600.0, layout), Some(SectionId::Pricing));
    }

    #[test]
    fn every_position_maps_to_the_first_containing_section() {
        let layout = stacked_layout();
        for step in 0..700 {
            let scroll_y = step as f64 * 5.0;
            let position = scroll_y + HEADER_OFFSET_PX;
            let expected = layout
                .iter()
                .find(|(_, b)| b.top <= position && position < b.top + b.height)
                .map(|(id, _)| *id);
            assert_eq!(active_section(scroll_y, layout.clone()), expected, "scroll_y = {scroll_y}");
        }
    }

    #[test]
    fn anchors_are_unique() {
        let all = [
            SectionId::Platform,
            SectionId::Works,
            SectionId::Testimonials,
            SectionId::Pricing,
            SectionId::Booking,
            SectionId::Faq,
            SectionId::Contact,
        ];
        let mut anchors: Vec<_> = all.iter().map(|s| s.anchor()).collect();
        anchors.sort_unstable();
        anchors.dedup();
        assert_eq!(anchors.len(), all.len());
        assert_eq!(SectionId::Faq.href(), "#faq");
    }
}
