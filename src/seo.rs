//! Search engine metadata for the home page

use serde_json::{Value, json};
use tracing::debug;

use crate::content::COMPANY;
use crate::document::{Document, MetaTag};

const TITLE: &str = "Aalekhan Software | Digitize your life | Custom Software Development Company";

const DESCRIPTION: &str = "Aalekhan Software - Digitize your life. Leading software development company offering custom software development, full stack development, web application development services, SaaS application development, ERP/CRM software development, and dedicated development teams. Expert IT services company and software solutions provider.";

const KEYWORDS: &str = "software development company, custom software development, IT services company, software solutions provider, enterprise software development, business software solutions, digital transformation services, backend development services, API development services, frontend development services, SPA development company, full stack development company, full stack Java developer company, web application development services, software outsourcing company, dedicated development team, custom ERP software development, CRM software development services, SaaS application development";

const OG_DESCRIPTION: &str = "Digitize your life with Aalekhan Software. Leading software development company providing custom software development, full stack development, web applications, SaaS, ERP/CRM solutions, and dedicated development teams.";

const ORG_DESCRIPTION: &str = "Leading software development company providing custom software development, full stack development, web application development services, SaaS application development, ERP/CRM software development, and dedicated development teams.";

/// Metadata written into the document head on page load.
#[derive(Debug, Clone, PartialEq)]
pub struct SeoMetadata {
    pub title: String,
    pub meta: Vec<MetaTag>,
    pub structured_data: Vec<Value>,
}

impl SeoMetadata {
    /// Builds the home page metadata for a page served at `page_url`.
    ///
    /// The organization record points at `page_url`, falling back to the
    /// company site when the URL is unknown.
    pub fn home(page_url: &str) -> Self {
        let org_url = if page_url.is_empty() {
            COMPANY.site_url
        } else {
            page_url
        };

        Self {
            title: TITLE.to_string(),
            meta: vec![
                MetaTag::name("description", DESCRIPTION),
                MetaTag::name("keywords", KEYWORDS),
                MetaTag::property("og:title", TITLE),
                MetaTag::property("og:description", OG_DESCRIPTION),
                MetaTag::property("og:type", "website"),
                MetaTag::name("robots", "index, follow"),
                MetaTag::name("author", COMPANY.name),
            ],
            structured_data: vec![software_application(), organization(org_url)],
        }
    }

    /// Writes title, meta tags, the canonical link and structured data into
    /// the document head.
    ///
    /// Returns false without touching anything when the document has no
    /// head.
    pub fn inject(&self, document: &mut Document) -> bool {
        let canonical = if document.url().is_empty() {
            "/".to_string()
        } else {
            document.url().to_string()
        };

        let Some(head) = document.head_mut() else {
            debug!("Document head unavailable, skipping metadata injection");
            return false;
        };

        head.set_title(&self.title);
        for tag in &self.meta {
            head.upsert_meta(tag.clone());
        }
        head.append_link("canonical", &canonical);
        for data in &self.structured_data {
            head.append_json_ld(data.clone());
        }

        debug!(
            meta = self.meta.len(),
            structured = self.structured_data.len(),
            "Injected page metadata"
        );
        true
    }
}

fn software_application() -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "SoftwareApplication",
        "name": COMPANY.name,
        "applicationCategory": "SoftwareDevelopmentCompany",
        "operatingSystem": "Web, Cloud",
        "offers": {
            "@type": "Offer",
            "price": "0",
            "priceCurrency": "USD",
        },
        "aggregateRating": {
            "@type": "AggregateRating",
            "ratingValue": "4.9",
            "reviewCount": "150",
        },
    })
}

fn organization(url: &str) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": COMPANY.name,
        "url": url,
        "logo": COMPANY.logo,
        "description": ORG_DESCRIPTION,
        "sameAs": ["https://www.linkedin.com", "https://twitter.com"],
        "contactPoint": [
            {
                "@type": "ContactPoint",
                "contactType": "sales",
                "telephone": COMPANY.phone,
                "email": COMPANY.email,
                "areaServed": "Worldwide",
                "availableLanguage": ["English"],
            }
        ],
        "areaServed": {
            "@type": "Country",
            "name": "Worldwide",
        },
        "knowsAbout": [
            "Custom Software Development",
            "Full Stack Development",
            "Web Application Development",
            "SaaS Application Development",
            "ERP Software Development",
            "CRM Software Development",
            "API Development",
            "Digital Transformation",
        ],
    })
}
