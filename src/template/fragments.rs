//! Phrase tables that articles are composed from.
//!
//! Every table is non-empty; the picker relies on that.

/// Keywords written to `keywords.txt` when the file does not exist yet.
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "online obituary",
    "memorial page online",
    "tribute page",
    "Philadelphia obituary",
    "memorial website",
    "QR code funeral program",
    "write an obituary",
    "obituary examples",
    "how to share obituary",
    "grief support resources Philadelphia",
    "funeral homes Philadelphia",
];

pub const CITIES: &[&str] = &[
    "Philadelphia",
    "West Philly",
    "North Philly",
    "South Philly",
    "Kensington",
    "Upper Darby",
    "Camden",
    "Cherry Hill",
    "Germantown",
    "Manayunk",
    "Roxborough",
];

pub const OPENERS: &[&str] = &[
    "Create an online obituary today",
    "Dignified memorial page online",
    "Shareable tribute page for family",
    "Modern alternative to print obituaries",
    "Memorial website your family can keep",
    "Set up a tribute page in minutes",
];

pub const BENEFITS: &[&str] = &[
    "Elegant design, permanent link",
    "Built for phones and sharing",
    "Clear pricing, fast turnaround",
    "Keep memories visible, not buried",
    "One page they can visit forever",
    "Same-day setup available",
];

/// Who the page honours. Only the rich flavor uses these.
pub const RELATIONS: &[&str] = &[
    "a parent",
    "a grandparent",
    "a spouse",
    "a sibling",
    "a close friend",
    "a veteran",
];

pub const ANGLES: &[&str] = &[
    "Step-by-step help",
    "Plain-language guidance",
    "A calm checklist",
    "Practical examples",
    "Simple wording ideas",
];

/// Context lines; `{city}` is substituted.
pub const NOTES: &[&str] = &[
    "Families in {city} often share one link with relatives near and far.",
    "Written for families in {city} planning a service this month.",
    "A short guide for {city} households gathering memories and details.",
    "Useful for {city} congregations and community groups sharing news.",
];

/// A guide section: heading plus its bullet points.
pub type GuideSection = (&'static str, &'static [&'static str]);

pub const GUIDE_SECTIONS: &[GuideSection] = &[
    (
        "What to include",
        &[
            "Full name, dates, city, key relationships",
            "Two or three defining stories",
            "Service details and preferred charities",
        ],
    ),
    (
        "How to write it",
        &[
            "Start with a simple, specific headline",
            "Use one short paragraph for life highlights",
            "Close with service info and thanks",
        ],
    ),
    (
        "Sharing it right",
        &[
            "Use one link the whole family shares",
            "Add a small QR code to programs",
            "Post to church and community pages",
        ],
    ),
];

/// Question/answer pairs for the FAQ section and FAQPage schema.
pub const FAQ: &[(&str, &str)] = &[
    (
        "How long should an obituary be?",
        "Most read well at 200 to 400 words: the essentials, a few stories, and service details.",
    ),
    (
        "Can the page be updated after it is shared?",
        "Yes. An online memorial keeps the same link while details such as service times change.",
    ),
    (
        "What is the easiest way to share it?",
        "Send one link to family, and print a small QR code on the service program.",
    ),
];
