//! Static site content
//!
//! Display strings for the home page. Authored here as configuration; nothing
//! in this module is computed.

/// Company identity shared by the header, footer and SEO metadata.
pub struct Company {
    pub name: &'static str,
    pub tagline: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub logo: &'static str,
    pub site_url: &'static str,
}

pub const COMPANY: Company = Company {
    name: "Aalekhan Software",
    tagline: "Digitize your life",
    email: "info@aalekhansoftware.com",
    phone: "+91-8401428050",
    logo: "/assets/logo/aalekhan_logo.jpeg",
    site_url: "https://aalekhansoftware.com",
};

pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    /// Phosphor icon class, e.g. `ph-code`.
    pub icon: &'static str,
}

impl Service {
    /// Fragment id used by the solutions dropdown to link to this service.
    pub fn anchor(&self) -> String {
        let mut anchor = String::with_capacity(self.title.len());
        for c in self.title.chars() {
            if c.is_ascii_alphanumeric() {
                anchor.push(c.to_ascii_lowercase());
            } else if !anchor.is_empty() && !anchor.ends_with('-') {
                anchor.push('-');
            }
        }
        anchor.trim_end_matches('-').to_string()
    }
}

pub struct CaseStudy {
    pub name: &'static str,
    pub impact: &'static str,
    pub result: &'static str,
    pub metric: &'static str,
}

pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
}

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Top-level navigation entry.
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        label: "Services",
        href: "#services",
    },
    NavLink {
        label: "Case Studies",
        href: "#case-studies",
    },
    NavLink {
        label: "Testimonials",
        href: "#testimonials",
    },
    NavLink {
        label: "FAQ",
        href: "#faq",
    },
    NavLink {
        label: "Contact",
        href: "#contact",
    },
];

/// Options offered by the contact form's project type selector.
pub const PROJECT_TYPES: &[&str] = &[
    "Custom Software",
    "Web Application",
    "SaaS Platform",
    "ERP / CRM",
    "Dedicated Team",
    "Other",
];

pub const SERVICES: &[Service] = &[
    Service {
        title: "Custom Software Development",
        description: "Tailored software solutions designed to meet your unique business requirements and drive growth.",
        icon: "ph-lightning",
    },
    Service {
        title: "Full Stack Development",
        description: "End-to-end development services covering frontend, backend, and database layers for complete solutions.",
        icon: "ph-code",
    },
    Service {
        title: "Frontend Development Services",
        description: "Modern, responsive user interfaces built with React, Angular, and Vue.js for exceptional user experiences.",
        icon: "ph-browser",
    },
    Service {
        title: "Backend Development Services",
        description: "Scalable server-side solutions with Node.js, Java, .NET, and Python for robust application architecture.",
        icon: "ph-server",
    },
    Service {
        title: "API Development Services",
        description: "RESTful and GraphQL APIs designed for seamless integration and optimal performance.",
        icon: "ph-plug",
    },
    Service {
        title: "Web Application Development",
        description: "Enterprise-grade web applications and SPAs built with modern frameworks and best practices.",
        icon: "ph-globe",
    },
    Service {
        title: "SaaS Application Development",
        description: "Cloud-native SaaS platforms with multi-tenancy, scalability, and subscription management.",
        icon: "ph-cloud",
    },
    Service {
        title: "ERP & CRM Development",
        description: "Custom ERP and CRM software solutions tailored to streamline your business operations.",
        icon: "ph-chart-line",
    },
    Service {
        title: "Digital Transformation",
        description: "Comprehensive digital transformation services to modernize legacy systems and drive innovation.",
        icon: "ph-rocket",
    },
    Service {
        title: "Dedicated Development Team",
        description: "Expert development teams that integrate seamlessly with your organization for long-term success.",
        icon: "ph-users",
    },
];

pub const CASE_STUDIES: &[CaseStudy] = &[
    CaseStudy {
        name: "Fintech Identity Platform",
        impact: "Cut onboarding time by 63% with automated KYC",
        result: "ISO 27001-ready architecture with 99.99% uptime",
        metric: "63% faster onboarding",
    },
    CaseStudy {
        name: "eCommerce Replatform",
        impact: "Drove 28% conversion lift via headless storefront",
        result: "Global CDN, <200ms TTFB across 6 regions",
        metric: "28% conversion lift",
    },
    CaseStudy {
        name: "Healthcare Analytics",
        impact: "Real-time insights for 12M events/day",
        result: "HIPAA-compliant data mesh with auditability",
        metric: "12M events/day",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Avery Singh",
        role: "VP Engineering, Arcadia",
        quote: "Aalekhan became an extension of our team\u{2014}shipping reliably with a security-first mindset.",
    },
    Testimonial {
        name: "Jordan Lee",
        role: "Product Lead, Northwind Commerce",
        quote: "They translated complex requirements into elegant experiences and measurable outcomes.",
    },
    Testimonial {
        name: "Casey Morgan",
        role: "CTO, Helix Health",
        quote: "Architecture, delivery, and quality were all world-class. We scaled with confidence.",
    },
];

pub const FAQS: &[Faq] = &[
    Faq {
        question: "How do you engage with new projects?",
        answer: "We start with a discovery sprint to align on goals, risks, and architecture, then move into iterative delivery with weekly demos.",
    },
    Faq {
        question: "Do you work with existing teams?",
        answer: "Yes\u{2014}our squads integrate with your product, design, and security teams, aligning on rituals and tooling from day one.",
    },
    Faq {
        question: "Which industries do you specialize in?",
        answer: "Fintech, healthtech, SaaS, and eCommerce, with experience in compliance, data, and performance-sensitive systems.",
    },
    Faq {
        question: "How do you ensure quality and security?",
        answer: "Automated testing, CI/CD, IaC, threat modeling, and reviews aligned to SOC2/ISO practices where needed.",
    },
];
