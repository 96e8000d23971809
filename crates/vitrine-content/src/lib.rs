//! Static page content for the vitrine terminal site.
//!
//! Pure data: each page is a list of sections carrying their copy and
//! the reveal transition they mount with. Nothing here has behavior
//! beyond lookup.

mod logo;

pub use logo::{build_logo_art, LOGO_HEIGHT};

use vitrine_core::{Page, RevealKind};

/// Brand name typed out by the landing page logo.
pub const BRAND: &str = "NEOBYTE AI";

/// Tagline shown under the logo on the landing page.
pub const TAGLINE: &str = "Offline intelligence. Infinite possibilities.";

/// One content section of a page.
#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub heading: &'static str,
    pub body: &'static [&'static str],
    /// Entrance transition used when the section scrolls into view.
    pub kind: RevealKind,
    /// Delay before the entrance starts, staggering sibling sections.
    pub delay_ms: u64,
}

/// Sections of a page, in display order.
pub fn sections(page: Page) -> &'static [Section] {
    match page {
        Page::Home => HOME,
        Page::About => ABOUT,
        Page::Products => PRODUCTS,
        Page::Team => TEAM,
        Page::Contact => CONTACT,
        Page::Partners => PARTNERS,
    }
}

const HOME: &[Section] = &[
    Section {
        heading: "[ WHAT WE DO ]",
        body: &[
            "Offline AI   Run capable models with no internet connection at all.",
            "Data custody Your data never leaves the device. No cloud, no leaks.",
            "Edge power   Efficient inference on hardware that fits in one hand.",
        ],
        kind: RevealKind::FadeIn,
        delay_ms: 0,
    },
    Section {
        heading: "[ WHY IT MATTERS ]",
        body: &[
            "Connectivity is a luxury. Privacy is a right. We build machines",
            "that deliver modern AI where the network ends and keep every",
            "byte of your data under your own roof.",
        ],
        kind: RevealKind::SlideUp,
        delay_ms: 100,
    },
    Section {
        heading: "[ READY TO BUILD THE FUTURE? ]",
        body: &[
            "We are an early-stage team looking for partners, investors and",
            "tinkerers who share our vision of AI independence.",
            "",
            "Press 5 to get in touch.",
        ],
        kind: RevealKind::BounceIn,
        delay_ms: 200,
    },
];

const ABOUT: &[Section] = &[
    Section {
        heading: "[ OUR MISSION ]",
        body: &[
            "Make serious machine intelligence run anywhere, owned by the",
            "people who use it rather than the clouds that meter it.",
        ],
        kind: RevealKind::SlideUp,
        delay_ms: 0,
    },
    Section {
        heading: "[ THE STORY ]",
        body: &[
            "Neobyte started in a basement workshop with one question: why",
            "does a model that fits on a memory card need a data center?",
            "Two years of quantization tricks and stubborn firmware later,",
            "the answer ships in a box the size of a paperback.",
        ],
        kind: RevealKind::SlideLeft,
        delay_ms: 100,
    },
    Section {
        heading: "[ VALUES ]",
        body: &[
            "Local first. Repairable always. Documented or it didn't happen.",
        ],
        kind: RevealKind::ZoomIn,
        delay_ms: 200,
    },
];

const PRODUCTS: &[Section] = &[
    Section {
        heading: "[ NEOBYTE ONE ]",
        body: &[
            "A pocket inference appliance. Speech, vision and text models",
            "preloaded, updated by memory card, powered over USB.",
        ],
        kind: RevealKind::SlideRight,
        delay_ms: 0,
    },
    Section {
        heading: "[ NEOBYTE RACK ]",
        body: &[
            "The same sovereignty, scaled to a branch office. Eight bays,",
            "zero uplinks required, managed from one terminal screen.",
        ],
        kind: RevealKind::SlideLeft,
        delay_ms: 150,
    },
    Section {
        heading: "[ FIELD KIT ]",
        body: &[
            "Ruggedized ONE for clinics, ships and research stations.",
            "Solar-friendly draw, glove-friendly switches.",
        ],
        kind: RevealKind::FlipIn,
        delay_ms: 300,
    },
];

const TEAM: &[Section] = &[
    Section {
        heading: "[ FOUNDERS ]",
        body: &[
            "Priya Raman     CEO. Ex-compiler engineer, serial miniaturizer.",
            "Tomas Okafor    CTO. Taught weather models to live on buoys.",
            "June Park       Hardware. Solders faster than she types.",
        ],
        kind: RevealKind::SlideUp,
        delay_ms: 0,
    },
    Section {
        heading: "[ THE WIDER CREW ]",
        body: &[
            "Nine humans, four time zones, one shared soldering iron.",
            "We hire for curiosity and ship for keeps.",
        ],
        kind: RevealKind::ElasticIn,
        delay_ms: 150,
    },
];

const CONTACT: &[Section] = &[
    Section {
        heading: "[ GET IN TOUCH ]",
        body: &[
            "Partnerships, pilots, press or plain curiosity: we answer",
            "every message ourselves, usually within two days.",
            "",
            "Press e to edit the form below, Enter to send.",
        ],
        kind: RevealKind::FadeIn,
        delay_ms: 0,
    },
];

const PARTNERS: &[Section] = &[
    Section {
        heading: "[ WORKING WITH US ]",
        body: &[
            "We co-design deployments with hardware vendors, NGOs and",
            "research labs that need intelligence past the last cell tower.",
        ],
        kind: RevealKind::SlideDown,
        delay_ms: 0,
    },
    Section {
        heading: "[ CURRENT PARTNERS ]",
        body: &[
            "Meridian Relief    Offline triage assistants in mobile clinics.",
            "Arcadia Marine     Fleet log summarization, mid-ocean.",
            "Litmus Labs        Joint work on low-power vision models.",
        ],
        kind: RevealKind::ScaleIn,
        delay_ms: 150,
    },
    Section {
        heading: "[ BECOME ONE ]",
        body: &[
            "If your problem ends with 'but there is no connectivity', we",
            "want to hear about it.",
        ],
        kind: RevealKind::RotateIn,
        delay_ms: 300,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_page_has_content() {
        for page in Page::ALL {
            let list = sections(page);
            assert!(!list.is_empty(), "{page:?} has no sections");
            for section in list {
                assert!(!section.heading.is_empty());
                assert!(!section.body.is_empty());
            }
        }
    }

    #[test]
    fn body_lines_fit_a_narrow_terminal() {
        for page in Page::ALL {
            for section in sections(page) {
                for line in section.body {
                    assert!(line.len() <= 76, "line too wide on {page:?}: {line}");
                }
            }
        }
    }

    #[test]
    fn stagger_delays_are_ordered_within_a_page() {
        for page in Page::ALL {
            let delays: Vec<u64> = sections(page).iter().map(|s| s.delay_ms).collect();
            let mut sorted = delays.clone();
            sorted.sort_unstable();
            assert_eq!(delays, sorted, "delays out of order on {page:?}");
        }
    }
}
