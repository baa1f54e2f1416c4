use std::{fmt, str::FromStr};

use serde::Serialize;

/// Site locales. German is the canonical locale; English mirrors it, matching
/// the frontend's routing (`/` redirects to `/de`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    De,
    En,
}

impl Default for Locale {
    fn default() -> Self {
        Locale::De
    }
}

impl FromStr for Locale {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "de" => Ok(Locale::De),
            "en" => Ok(Locale::En),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::De => write!(f, "de"),
            Locale::En => write!(f, "en"),
        }
    }
}

impl Serialize for Locale {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

#[derive(Debug, Serialize)]
pub struct PageSection {
    pub heading: String,
    pub body: String,
}

#[derive(Debug, Serialize)]
pub struct PageContent {
    pub slug: String,
    pub locale: Locale,
    pub title: String,
    pub subtitle: String,
    pub sections: Vec<PageSection>,
}

#[derive(Debug, Serialize)]
pub struct PageSummary {
    pub slug: String,
    pub locale: Locale,
    pub title: String,
}

#[derive(Debug, Serialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub category: String,
    pub year: String,
    pub client: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

pub const PAGE_SLUGS: [&str; 5] = ["home", "about", "services", "portfolio", "privacy-policy"];

fn section(heading: &str, body: &str) -> PageSection {
    PageSection {
        heading: heading.to_string(),
        body: body.to_string(),
    }
}

fn content(slug: &str, locale: Locale, title: &str, subtitle: &str, sections: Vec<PageSection>) -> PageContent {
    PageContent {
        slug: slug.to_string(),
        locale,
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        sections,
    }
}

/// Full content for one page, or `None` for an unknown slug.
pub fn page(locale: Locale, slug: &str) -> Option<PageContent> {
    let page = match (slug, locale) {
        ("home", Locale::En) => content(
            slug,
            locale,
            "Nexor Software",
            "Innovative software solutions that transform your business and drive digital excellence.",
            vec![
                section(
                    "Our Company",
                    "Founded on innovation and driven by excellence, Nexor Software has been at the forefront of digital transformation for over a decade.",
                ),
                section(
                    "Services",
                    "From web applications to enterprise solutions, we deliver comprehensive software development services tailored to your unique needs.",
                ),
                section(
                    "Careers",
                    "Join our talented team of developers, designers, and innovators who are passionate about creating exceptional digital experiences.",
                ),
            ],
        ),
        ("home", Locale::De) => content(
            slug,
            locale,
            "Nexor Software",
            "Innovative Softwarelösungen, die Ihr Unternehmen transformieren und digitale Exzellenz vorantreiben.",
            vec![
                section(
                    "Unser Unternehmen",
                    "Gegründet auf Innovation und getrieben von Exzellenz steht Nexor Software seit über einem Jahrzehnt an der Spitze der digitalen Transformation.",
                ),
                section(
                    "Leistungen",
                    "Von Webanwendungen bis zu Unternehmenslösungen liefern wir umfassende Softwareentwicklung, zugeschnitten auf Ihre Anforderungen.",
                ),
                section(
                    "Karriere",
                    "Werden Sie Teil unseres Teams aus Entwicklern, Designern und Innovatoren, die außergewöhnliche digitale Erlebnisse schaffen.",
                ),
            ],
        ),
        ("about", Locale::En) => content(
            slug,
            locale,
            "About Us",
            "We are a software consultancy focused on quality, partnership and measurable results.",
            vec![
                section(
                    "Who we are",
                    "A small, senior team building web platforms, terminal software and dashboards for clients across Germany.",
                ),
                section(
                    "How we work",
                    "Close collaboration, short iterations and honest communication from the first workshop to the handover.",
                ),
            ],
        ),
        ("about", Locale::De) => content(
            slug,
            locale,
            "Über uns",
            "Wir sind eine Softwareberatung mit Fokus auf Qualität, Partnerschaft und messbaren Ergebnissen.",
            vec![
                section(
                    "Wer wir sind",
                    "Ein kleines, erfahrenes Team, das Webplattformen, Terminalsoftware und Dashboards für Kunden in ganz Deutschland entwickelt.",
                ),
                section(
                    "Wie wir arbeiten",
                    "Enge Zusammenarbeit, kurze Iterationen und ehrliche Kommunikation vom ersten Workshop bis zur Übergabe.",
                ),
            ],
        ),
        ("services", Locale::En) => content(
            slug,
            locale,
            "Our Services",
            "We offer comprehensive software solutions to transform your business and drive digital innovation.",
            vec![
                section(
                    "Custom Software Development",
                    "Tailored software solutions built to meet your specific business requirements and workflows.",
                ),
                section(
                    "Mobile App Development",
                    "Native and cross-platform mobile applications for iOS and Android platforms.",
                ),
                section(
                    "Web Development",
                    "Modern, responsive websites and web applications using cutting-edge technologies.",
                ),
                section(
                    "Database Solutions",
                    "Database design, optimization, and management for efficient data storage and retrieval.",
                ),
                section(
                    "Cloud Integration",
                    "Cloud migration, deployment, and management services for scalable solutions.",
                ),
                section(
                    "Security Solutions",
                    "Comprehensive security audits and implementation of robust security measures.",
                ),
            ],
        ),
        ("services", Locale::De) => content(
            slug,
            locale,
            "Unsere Leistungen",
            "Wir bieten umfassende Softwarelösungen, um Ihr Unternehmen zu transformieren und digitale Innovation voranzutreiben.",
            vec![
                section(
                    "Individuelle Softwareentwicklung",
                    "Maßgeschneiderte Softwarelösungen für Ihre spezifischen Geschäftsanforderungen und Abläufe.",
                ),
                section(
                    "Mobile-App-Entwicklung",
                    "Native und plattformübergreifende Apps für iOS und Android.",
                ),
                section(
                    "Webentwicklung",
                    "Moderne, responsive Webseiten und Webanwendungen mit aktuellen Technologien.",
                ),
                section(
                    "Datenbanklösungen",
                    "Datenbankdesign, -optimierung und -verwaltung für effiziente Datenhaltung.",
                ),
                section(
                    "Cloud-Integration",
                    "Migration, Deployment und Betrieb in der Cloud für skalierbare Lösungen.",
                ),
                section(
                    "Sicherheitslösungen",
                    "Umfassende Sicherheitsaudits und Umsetzung robuster Schutzmaßnahmen.",
                ),
            ],
        ),
        ("portfolio", Locale::En) => content(
            slug,
            locale,
            "Our Portfolio",
            "Explore our latest projects and see how we've helped businesses transform their digital presence with innovative solutions.",
            vec![section(
                "Ready to Start Your Project?",
                "Let's discuss how we can bring your vision to life with our expertise and innovative solutions.",
            )],
        ),
        ("portfolio", Locale::De) => content(
            slug,
            locale,
            "Unser Portfolio",
            "Entdecken Sie unsere neuesten Projekte und sehen Sie, wie wir Unternehmen dabei geholfen haben, ihre digitale Präsenz mit innovativen Lösungen zu transformieren.",
            vec![section(
                "Bereit, Ihr Projekt zu starten?",
                "Lassen Sie uns besprechen, wie wir Ihre Vision mit unserer Expertise und innovativen Lösungen zum Leben erwecken können.",
            )],
        ),
        ("privacy-policy", Locale::En) => content(
            slug,
            locale,
            "Privacy Policy",
            "How we handle your data.",
            vec![section(
                "Contact form",
                "Data submitted through the contact form is relayed by email to our team and not stored by this service.",
            )],
        ),
        ("privacy-policy", Locale::De) => content(
            slug,
            locale,
            "Datenschutzerklärung",
            "Wie wir mit Ihren Daten umgehen.",
            vec![section(
                "Kontaktformular",
                "Über das Kontaktformular übermittelte Daten werden per E-Mail an unser Team weitergeleitet und von diesem Dienst nicht gespeichert.",
            )],
        ),
        _ => return None,
    };
    Some(page)
}

pub fn page_summaries(locale: Locale) -> Vec<PageSummary> {
    PAGE_SLUGS
        .iter()
        .filter_map(|slug| page(locale, slug))
        .map(|p| PageSummary {
            slug: p.slug,
            locale: p.locale,
            title: p.title,
        })
        .collect()
}

fn project(
    title: &str,
    description: &str,
    technologies: &[&str],
    category: &str,
    client: &str,
    link: Option<&str>,
) -> Project {
    Project {
        title: title.to_string(),
        description: description.to_string(),
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
        category: category.to_string(),
        year: "2025".to_string(),
        client: client.to_string(),
        link: link.map(|l| l.to_string()),
    }
}

pub fn projects(locale: Locale) -> Vec<Project> {
    match locale {
        Locale::En => vec![
            project(
                "E-Tech24 Website",
                "Professional website design for E-Tech24, a technology solutions provider. Created modern, responsive design concepts with focus on user experience and visual appeal.",
                &["Figma", "UI/UX Design", "Responsive Design"],
                "Website",
                "E-Tech24",
                Some("https://e-tech24.de/"),
            ),
            project(
                "Payterminals Website",
                "Professional website design for Payterminals, a technology hardware provider. Created modern, responsive design concepts with focus on user experience and visual appeal.",
                &["Wix", "Figma", "UI/UX Design"],
                "Website",
                "Payterminals",
                Some("https://www.payterminals.de"),
            ),
            project(
                "Terminal Software Solution",
                "Custom software development for terminal systems. Robust, efficient software designed for reliable terminal operations and management.",
                &["TypeScript"],
                "Software",
                "E-Tech24",
                None,
            ),
            project(
                "Nexor Terminal Dashboard",
                "Dashboard for monitoring the status and revenue of every terminal running the Nexor Terminal Software suite.",
                &["Next.js", "TypeScript", "TailwindCSS"],
                "Website",
                "Nexor Software",
                Some("https://dashboard.nexor-software.de"),
            ),
        ],
        Locale::De => vec![
            project(
                "E-Tech24 Website",
                "Professionelles Webdesign für E-Tech24, einen Technologielösungsanbieter. Moderne, responsive Designkonzepte mit Fokus auf Benutzerfreundlichkeit und visuelle Attraktivität erstellt.",
                &["Figma", "UI/UX Design", "Responsive Design"],
                "Webseite",
                "E-Tech24",
                Some("https://e-tech24.de/"),
            ),
            project(
                "Payterminals Website",
                "Professionelles Webdesign für Payterminals, einen Technologiehardwareanbieter. Moderne, responsive Designkonzepte mit Fokus auf Benutzerfreundlichkeit und visuelle Attraktivität erstellt.",
                &["Wix", "Figma", "UI/UX Design"],
                "Webseite",
                "Payterminals",
                Some("https://www.payterminals.de"),
            ),
            project(
                "Terminal Software Lösung",
                "Maßgeschneiderte Softwareentwicklung für Terminalsysteme. Robuste, effiziente Software für zuverlässige Terminalbetriebe und -verwaltung.",
                &["TypeScript", "Electron", "C#"],
                "Software",
                "E-Tech24",
                None,
            ),
            project(
                "Nexor Terminal Dashboard",
                "Dashboard zur Überwachung vom Status und Umsatzes aller Terminals mit Nexor Terminal Software.",
                &["Next.js", "TypeScript", "TailwindCSS"],
                "Webseite",
                "Nexor Software",
                Some("https://dashboard.nexor-software.de"),
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_slug_resolves_in_both_locales() {
        for slug in PAGE_SLUGS {
            assert!(page(Locale::De, slug).is_some(), "missing de/{slug}");
            assert!(page(Locale::En, slug).is_some(), "missing en/{slug}");
        }
    }

    #[test]
    fn unknown_slug_is_none() {
        assert!(page(Locale::De, "blog").is_none());
    }

    #[test]
    fn locale_parsing_is_case_insensitive() {
        assert_eq!("DE".parse::<Locale>(), Ok(Locale::De));
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn project_lists_match_across_locales() {
        assert_eq!(projects(Locale::De).len(), projects(Locale::En).len());
    }
}
