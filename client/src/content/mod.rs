//! Static site content: contact details, plans, service verticals, legal text.
//!
//! DESIGN
//! ======
//! Copy lives in data tables rather than in page markup so the near-duplicate
//! pages (three service verticals, three plan details) share one component
//! each and only the data differs.


/// Agency contact details shown in the footer and on the contact page.
pub struct SiteInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub address: &'static str,
    pub hours: &'static str,
    pub social: &'static [(&'static str, &'static str)],
}

pub static SITE: SiteInfo = SiteInfo {
    name: "Harbor Surrogacy",
    description: "Guiding intended parents, surrogates and egg donors through every step of the journey with care, \
                  transparency and expert support.",
    email: "hello@harborsurrogacy.example",
    phone: "+1 (555) 014-2200",
    address: "200 Harbor Way, Suite 4, San Diego, CA",
    hours: "Mon-Fri: 8am-6pm",
    social: &[
        ("Facebook", "https://facebook.com/harborsurrogacy"),
        ("Twitter", "https://twitter.com/harborsurrogacy"),
        ("Instagram", "https://instagram.com/harborsurrogacy"),
        ("LinkedIn", "https://linkedin.com/company/harborsurrogacy"),
    ],
};

// =============================================================================
// PRICING
// =============================================================================

/// A support plan.
pub struct Plan {
    pub slug: &'static str,
    pub name: &'static str,
    pub price: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub popular: bool,
}

impl Plan {
    #[must_use]
    pub fn route(&self) -> String {
        format!("/{}", self.slug)
    }
}

pub static PLANS: [Plan; 3] = [
    Plan {
        slug: "basic",
        name: "Basic Support",
        price: "$25",
        description: "Essential services for your surrogacy journey",
        features: &[
            "Initial consultation",
            "Profile creation and matching",
            "Basic legal guidance",
            "Email support",
            "Resource library access",
        ],
        popular: false,
    },
    Plan {
        slug: "pro",
        name: "Complete Care",
        price: "$100",
        description: "Comprehensive support throughout your journey",
        features: &[
            "Everything in Basic Support",
            "Dedicated coordinator",
            "Comprehensive legal services",
            "24/7 phone support",
            "Counseling services",
            "Medical coordination",
            "Insurance guidance",
        ],
        popular: true,
    },
    Plan {
        slug: "enterprise",
        name: "Premium Experience",
        price: "$50",
        description: "White-glove service with personalized attention",
        features: &[
            "Everything in Complete Care",
            "Priority matching",
            "Concierge services",
            "Travel coordination",
            "Birth planning support",
            "Post-birth follow-up",
            "Extended support period",
            "VIP access to events",
        ],
        popular: false,
    },
];

/// Look up a plan by its route slug.
#[must_use]
pub fn plan_by_slug(slug: &str) -> Option<&'static Plan> {
    PLANS.iter().find(|plan| plan.slug == slug)
}

/// Add-on service priced separately from the plans.
pub struct AddOn {
    pub name: &'static str,
    pub price: &'static str,
    pub description: &'static str,
}

pub static ADD_ONS: [AddOn; 3] = [
    AddOn {
        name: "Legal Services",
        price: "$1,500 - $3,000",
        description: "Comprehensive legal support and contract drafting",
    },
    AddOn {
        name: "Counseling Services",
        price: "$150 per session",
        description: "Professional counseling for all parties involved",
    },
    AddOn {
        name: "Medical Coordination",
        price: "$500 - $1,000",
        description: "Coordination with fertility clinics and medical providers",
    },
];

// =============================================================================
// SERVICE VERTICALS
// =============================================================================

/// Audience-specific service page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Vertical {
    IntendedParents,
    Surrogates,
    EggDonors,
}

/// Headline number shown on explore cards.
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

impl Vertical {
    pub const ALL: [Vertical; 3] = [Vertical::IntendedParents, Vertical::Surrogates, Vertical::EggDonors];

    #[must_use]
    pub fn route(self) -> &'static str {
        match self {
            Self::IntendedParents => "/intendedparents",
            Self::Surrogates => "/surrogates",
            Self::EggDonors => "/eggdonors",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::IntendedParents => "Intended Parents",
            Self::Surrogates => "Surrogates",
            Self::EggDonors => "Egg Donors",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::IntendedParents => {
                "Find compassionate surrogates and egg donors to help build your family. Connect with carefully \
                 screened individuals who share your values and vision for the journey ahead."
            }
            Self::Surrogates => {
                "Connect with intended parents looking for gestational carriers. Our platform helps match you with \
                 families based on shared preferences, location, and values."
            }
            Self::EggDonors => {
                "Browse our database of carefully screened egg donors. Find donors that match your criteria with \
                 detailed profiles including medical history, education, and more."
            }
        }
    }

    #[must_use]
    pub fn stats(self) -> [Stat; 2] {
        match self {
            Self::IntendedParents => [
                Stat { label: "Active Profiles", value: "1,240+" },
                Stat { label: "Success Stories", value: "890+" },
            ],
            Self::Surrogates => [
                Stat { label: "Active Profiles", value: "850+" },
                Stat { label: "Matches Made", value: "620+" },
            ],
            Self::EggDonors => [
                Stat { label: "Active Donors", value: "1,500+" },
                Stat { label: "Successful Matches", value: "1,100+" },
            ],
        }
    }

    /// Steps of the journey, in order.
    #[must_use]
    pub fn steps(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::IntendedParents => &[
                ("Consultation", "Meet a coordinator to talk through your goals, timeline and budget."),
                ("Matching", "Review screened surrogate and donor profiles that fit your preferences."),
                ("Legal & Medical", "We coordinate contracts, clinics and screenings on your behalf."),
                ("Pregnancy & Birth", "Stay informed with regular updates until you welcome your child home."),
            ],
            Self::Surrogates => &[
                ("Apply", "Tell us about yourself and your pregnancy history."),
                ("Screening", "Complete medical and psychological screening at no cost to you."),
                ("Match", "Meet intended parents who share your values and expectations."),
                ("Journey", "Receive compensation, legal representation and support at every step."),
            ],
            Self::EggDonors => &[
                ("Apply", "Complete a short application and health questionnaire."),
                ("Screening", "Attend medical and genetic screening appointments."),
                ("Match", "Your anonymous profile is shared with intended parents."),
                ("Donation", "Complete a short retrieval cycle with full clinical support."),
            ],
        }
    }

    /// Whether the card matches a free-text search, case-insensitively.
    #[must_use]
    pub fn matches(self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty()
            || self.title().to_lowercase().contains(&query)
            || self.description().to_lowercase().contains(&query)
    }
}

/// Verticals matching `query`, in display order.
#[must_use]
pub fn search_verticals(query: &str) -> Vec<Vertical> {
    Vertical::ALL.into_iter().filter(|v| v.matches(query)).collect()
}

// =============================================================================
// LEGAL
// =============================================================================

/// Long-form legal documents rendered from markdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegalDoc {
    Privacy,
    Cookies,
    Terms,
}

impl LegalDoc {
    #[must_use]
    pub fn markdown(self) -> &'static str {
        match self {
            Self::Privacy => include_str!("../../content/privacy.md"),
            Self::Cookies => include_str!("../../content/cookies.md"),
            Self::Terms => include_str!("../../content/terms.md"),
        }
    }

    /// Footer translation key for the document's link.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Self::Privacy => "footer.privacy",
            Self::Cookies => "footer.cookies",
            Self::Terms => "footer.terms",
        }
    }

    #[must_use]
    pub fn route(self) -> &'static str {
        match self {
            Self::Privacy => "/privacy",
            Self::Cookies => "/cookies",
            Self::Terms => "/terms",
        }
    }
}
