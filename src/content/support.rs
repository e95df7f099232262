//! The UK support service directory.

#[cfg(test)]
#[path = "support_test.rs"]
mod support_test;

/// One support service. `phone` is absent for web-only services.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SupportResource {
    pub name: &'static str,
    pub description: &'static str,
    pub phone: Option<&'static str>,
    pub website: &'static str,
}

// Services surfaced in the "Immediate, Confidential Help" band.
const IMMEDIATE_HELP: &[&str] = &[
    "Samaritans",
    "NHS Urgent Mental Health Helpline",
    "National Suicide Prevention Helpline UK",
];

/// Every listed service, in display order.
pub fn support_resources() -> &'static [SupportResource] {
    RESOURCES
}

/// Crisis services pinned at the top of the Support page.
pub fn immediate_help() -> Vec<&'static SupportResource> {
    RESOURCES.iter().filter(|r| IMMEDIATE_HELP.contains(&r.name)).collect()
}

/// Everything not in the crisis band.
pub fn other_support() -> Vec<&'static SupportResource> {
    RESOURCES.iter().filter(|r| !IMMEDIATE_HELP.contains(&r.name)).collect()
}

static RESOURCES: &[SupportResource] = &[
    SupportResource {
        name: "Samaritans",
        description: "A confidential support service for anyone in the UK and Ireland, providing a safe place to talk any time you like, in your own way.",
        phone: Some("116 123"),
        website: "https://www.samaritans.org/",
    },
    SupportResource {
        name: "Mind",
        description: "Provides advice and support to empower anyone experiencing a mental health problem. They campaign to improve services, raise awareness and promote understanding.",
        phone: Some("0300 123 3393"),
        website: "https://www.mind.org.uk/",
    },
    SupportResource {
        name: "Alcoholics Anonymous (AA)",
        description: "A fellowship of people who share their experience, strength and hope with each other that they may solve their common problem and help others to recover from alcoholism.",
        phone: Some("0800 917 7650"),
        website: "https://www.alcoholics-anonymous.org.uk/",
    },
    SupportResource {
        name: "Drinkline",
        description: "A free, confidential helpline for people who are concerned about their own or someone else's drinking. Open weekdays 9am-8pm, weekends 11am-4pm.",
        phone: Some("0300 123 1110"),
        website: "https://www.drinkaware.co.uk/helpline",
    },
    SupportResource {
        name: "We Are With You",
        description: "A UK-wide treatment agency that helps individuals, families and communities manage the effects of drug and alcohol misuse.",
        phone: None,
        website: "https://www.wearewithyou.org.uk/",
    },
    SupportResource {
        name: "SMART Recovery UK",
        description: "Offers free, self-empowering, science-based, mutual-help groups for people looking to manage their recovery from any type of addictive behaviour.",
        phone: Some("0330 053 6022"),
        website: "https://smartrecovery.org.uk/",
    },
    SupportResource {
        name: "NHS Urgent Mental Health Helpline",
        description: "For 24-hour advice and support for you, your child, your parent or someone you care for. Find a local helpline for your area via the NHS website.",
        phone: Some("111"),
        website: "https://www.nhs.uk/service-search/mental-health/find-an-urgent-mental-health-helpline",
    },
    SupportResource {
        name: "Al-Anon Family Groups",
        description: "Provides support to anyone whose life is, or has been, affected by someone else's drinking.",
        phone: Some("0800 0086 811"),
        website: "https://www.al-anonuk.org.uk/",
    },
    SupportResource {
        name: "Change Grow Live (CGL)",
        description: "A national health and social care charity that provides support for substance misuse, mental health, homelessness, and domestic abuse.",
        phone: None,
        website: "https://www.changegrowlive.org/",
    },
    SupportResource {
        name: "National Suicide Prevention Helpline UK",
        description: "Offers a supportive listening service to anyone with thoughts of suicide. You can call them on 0800 689 5652 (6pm to midnight every day).",
        phone: Some("0800 689 5652"),
        website: "https://www.spbristol.org/NSPHUK",
    },
];
