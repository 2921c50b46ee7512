//! Copy for the home and philosophy pages. Fixed at build time.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub quote: &'static str,
    pub rating: u8,
}

impl Testimonial {
    /// "Sarah Chen" -> "SC"
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }

    pub fn byline(&self) -> String {
        format!("{} at {}", self.role, self.company)
    }
}

pub static TESTIMONIALS: [Testimonial; 5] = [
    Testimonial {
        name: "Sarah Chen",
        role: "Product Manager",
        company: "TechFlow",
        quote: "Meiyo transformed our vision into reality with remarkable precision. Their approach honors every detail while maintaining the essence of simplicity.",
        rating: 5,
    },
    Testimonial {
        name: "Marcus Rodriguez",
        role: "Founder",
        company: "GreenSpace",
        quote: "Working with Meiyo felt like having a wise mentor guide our product journey. The transparency and craftsmanship exceeded our expectations.",
        rating: 5,
    },
    Testimonial {
        name: "Elena Nakamura",
        role: "Creative Director",
        company: "Minimal Studios",
        quote: "The philosophy of honor and respect flows through every interaction. Our MVP launched beautifully, exactly as envisioned.",
        rating: 5,
    },
    Testimonial {
        name: "David Kim",
        role: "CEO",
        company: "Harmony Labs",
        quote: "Like tending a garden, Meiyo nurtured our idea from concept to launch. The fixed pricing brought peace of mind throughout the process.",
        rating: 5,
    },
    Testimonial {
        name: "Amélie Dubois",
        role: "Tech Lead",
        company: "Serenity AI",
        quote: "Exceptional attention to detail and a process that feels both professional and deeply personal. Truly artisanal development work.",
        rating: 5,
    },
];

pub struct PricingTier {
    pub name: &'static str,
    pub price: &'static str,
    pub features: [&'static str; 3],
    pub cta: &'static str,
    /// Rendered with the solid button style.
    pub featured: bool,
}

pub static PRICING_TIERS: [PricingTier; 3] = [
    PricingTier {
        name: "Single Blossom",
        price: "$4,500",
        features: [
            "Complete web or mobile application, crafted from your vision to launch",
            "Full-cycle development: design, build, test, and deploy with care",
            "30 days of dedicated support to nurture your first steps",
        ],
        cta: "Begin the journey",
        featured: false,
    },
    PricingTier {
        name: "Twin Garden",
        price: "$7,500",
        features: [
            "Synchronized web and mobile experience: two platforms, one vision",
            "Seamless design system flowing between desktop and mobile",
            "60 days of mindful support as your dual platforms take root",
        ],
        cta: "Embrace harmony",
        featured: true,
    },
    PricingTier {
        name: "Evergreen Care",
        price: "$950",
        features: [
            "Monthly maintenance, updates, and gentle improvements for you",
            "Ongoing feature additions as your product evolves and grows",
            "Priority response, first light of attention when you need us",
        ],
        cta: "Sustain and grow",
        featured: false,
    },
];

#[derive(Debug, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub static FAQS: [FaqEntry; 3] = [
    FaqEntry {
        question: "How do we begin working together?",
        answer: "We start with a gentle conversation about your vision, followed by a clear proposal that honors your ideas and timeline.",
    },
    FaqEntry {
        question: "Is pricing fixed? Any hidden fees?",
        answer: "Our pricing is transparent as water. What you see is what you invest, with no hidden costs or surprise additions.",
    },
    FaqEntry {
        question: "How long does it take to launch an MVP?",
        answer: "Like tending a garden, we work with patience and precision. Most MVPs bloom within 4-8 weeks, depending on complexity.",
    },
];

/// Heading plus paragraphs, used by the home page intro and the philosophy page.
pub struct ProseBlock {
    pub heading: &'static str,
    pub paragraphs: &'static [&'static str],
}

pub static PLATFORM_BLOCKS: [ProseBlock; 2] = [
    ProseBlock {
        heading: "What 'meiyo' means to us",
        paragraphs: &[
            "'Meiyo' is the Japanese word for honor, prestige, and deep respect: values that shape how we treat each client's vision. We believe every MVP begins with recognition and mindful craftsmanship.",
            "We honor your ideas by offering gentle guidance, clear fixed pricing, and a process built on trust. Here, you're not just a client. Your story is the heart of what we build together.",
        ],
    },
    ProseBlock {
        heading: "What we do",
        paragraphs: &[
            "Like a gardener tending the first bud of spring, we help visionaries gently shape their ideas into living products. Your MVP is approached with patience, honor, and a respect rooted in Japanese artistry.",
            "Trust our hands to cultivate what you imagine, each step guided by care and stillness, as a stone garden reveals balance. We bring clarity and fixed pricing, turning inspiration into form with quiet precision.",
        ],
    },
];

pub const WORKS_INTRO: &str = "A gallery of projects crafted by our own team. Click to explore live demonstrations of concept sites reflecting meiyo's blend of simplicity and refinement.";
pub const WORKS_TILES: usize = 6;

pub static PHILOSOPHY_SECTIONS: [ProseBlock; 6] = [
    ProseBlock {
        heading: "What Meiyo Means",
        paragraphs: &[
            "'Meiyo' (名誉) is the Japanese word for honor, prestige, and deep respect. It represents the reverence we hold for each client's vision and the responsibility we feel in bringing their ideas to life.",
            "In Japanese culture, meiyo is not just about recognition. It's about the integrity of one's work, the respect shown to others, and the mindful approach to every task. These values form the foundation of how we approach MVP development.",
        ],
    },
    ProseBlock {
        heading: "Craftsmanship Over Speed",
        paragraphs: &[
            "While we work efficiently, we never sacrifice quality for speed. Every line of code, every design decision, every user interaction is considered with care. We believe that rushing leads to technical debt and poor user experiences.",
            "Like a master craftsman who takes pride in their work, we approach each project with patience and attention to detail. Your MVP deserves nothing less than our best effort.",
        ],
    },
    ProseBlock {
        heading: "Transparency in Everything",
        paragraphs: &[
            "No hidden costs. No surprise changes. No unclear timelines. We believe in complete transparency from the first conversation to the final deployment.",
            "You'll always know exactly what we're working on, why we're making certain decisions, and what to expect next. This isn't just good business. It's showing respect for your time and investment.",
        ],
    },
    ProseBlock {
        heading: "Your Vision, Honored",
        paragraphs: &[
            "We don't impose our ideas on your project. Instead, we listen deeply to understand your vision, then use our expertise to bring it to life in the most effective way possible.",
            "Every suggestion we make, every technology choice, every design decision is made with your specific goals in mind. Your success is our success, and we take that responsibility seriously.",
        ],
    },
    ProseBlock {
        heading: "Sustainable Growth",
        paragraphs: &[
            "We don't just build MVPs. We build foundations for growth. Every technical decision is made with scalability in mind, ensuring your product can evolve as your user base grows.",
            "Clean code, proper documentation, and thoughtful architecture aren't luxuries. They're necessities for any product that aims to succeed long term.",
        ],
    },
    ProseBlock {
        heading: "Mindful Technology",
        paragraphs: &[
            "We choose technologies not because they're trendy, but because they're the right fit for your specific needs. Sometimes that means using the latest frameworks, sometimes it means sticking with proven solutions.",
            "Our goal is always to create something that works reliably, performs well, and can be maintained easily as your product grows.",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_the_first_letter_of_each_word() {
        assert_eq!(TESTIMONIALS[0].initials(), "SC");
        assert_eq!(TESTIMONIALS[4].initials(), "AD");
        assert_eq!(TESTIMONIALS[3].byline(), "CEO at Harmony Labs");
    }

    #[test]
    fn testimonials_are_complete() {
        assert_eq!(TESTIMONIALS.len(), 5);
        for t in &TESTIMONIALS {
            assert!(!t.name.is_empty() && !t.quote.is_empty());
            assert!((1..=5).contains(&t.rating));
        }
    }

    #[test]
    fn faq_questions_are_unique() {
        let mut questions: Vec<_> = FAQS.iter().map(|f| f.question).collect();
        questions.sort_unstable();
        questions.dedup();
        assert_eq!(questions.len(), FAQS.len());
    }

    #[test]
    fn exactly_one_featured_tier() {
        assert_eq!(PRICING_TIERS.iter().filter(|t| t.featured).count(), 1);
    }
}
