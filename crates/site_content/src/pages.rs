//! Typed copy for every page, the header, and the footer.

use crate::routes::Route;

/// Banner at the top of the home page.
#[derive(Debug, Clone, Copy)]
pub struct Hero {
    pub tag: &'static str,
    pub title: &'static str,
    pub lead: &'static str,
    pub primary: PageLink,
    pub secondary: PageLink,
}

/// Title block at the top of the inner pages.
#[derive(Debug, Clone, Copy)]
pub struct PageHeader {
    pub tag: &'static str,
    pub title: &'static str,
    pub lead: &'static str,
}

/// Tag line, heading, and optional lead introducing a section.
#[derive(Debug, Clone, Copy)]
pub struct SectionHeader {
    pub tag: &'static str,
    pub title: &'static str,
    pub lead: Option<&'static str>,
}

/// A labelled link to another page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLink {
    pub label: &'static str,
    pub to: Route,
}

/// Two-column section pairing copy with an illustration.
#[derive(Debug, Clone, Copy)]
pub struct SplitSection {
    pub tag: &'static str,
    pub title: &'static str,
    pub lead: &'static str,
    pub body: &'static str,
    pub cta: PageLink,
}

/// Closing call-to-action banner.
#[derive(Debug, Clone, Copy)]
pub struct CtaBox {
    pub title: &'static str,
    pub blurb: &'static str,
    pub primary: PageLink,
    pub secondary: Option<PageLink>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceIcon {
    Laser,
    Plasma,
    Press,
    Weld,
    Finish,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueIcon {
    Vision,
    Mission,
    Goal,
}

/// One of the service cards on the home page.
#[derive(Debug, Clone, Copy)]
pub struct ServiceHighlight {
    pub icon: ServiceIcon,
    pub title: &'static str,
    pub blurb: &'static str,
}

/// A checked capability bullet.
#[derive(Debug, Clone, Copy)]
pub struct CapabilityPoint {
    pub title: &'static str,
    pub blurb: &'static str,
}

/// Vision, mission, or goal card on the about page.
#[derive(Debug, Clone, Copy)]
pub struct ValueCard {
    pub icon: ValueIcon,
    pub name: &'static str,
    pub blurb: &'static str,
    pub featured: bool,
}

/// Numbered "what sets us apart" item.
#[derive(Debug, Clone, Copy)]
pub struct Differentiator {
    pub number: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
}

/// A machine listing with its spec bullets.
#[derive(Debug, Clone, Copy)]
pub struct Machine {
    pub icon: ServiceIcon,
    pub name: &'static str,
    pub specs: &'static [&'static str],
}

/// Supporting equipment entry.
#[derive(Debug, Clone, Copy)]
pub struct SupportStation {
    pub name: &'static str,
    pub blurb: &'static str,
}

/// One of the sectors on the industries page.
#[derive(Debug, Clone, Copy)]
pub struct Industry {
    pub glyph: &'static str,
    pub name: &'static str,
    pub blurb: &'static str,
}

/// Label and ghost text for one form input. Required fields gate the
/// submit button and carry a marker next to the label.
#[derive(Debug, Clone, Copy)]
pub struct FieldCopy {
    pub label: &'static str,
    pub placeholder: &'static str,
    pub required: bool,
}

/// All of the contact form's strings.
#[derive(Debug, Clone, Copy)]
pub struct ContactFormCopy {
    pub name: FieldCopy,
    pub email: FieldCopy,
    pub phone: FieldCopy,
    pub company: FieldCopy,
    pub message: FieldCopy,
    pub submit: &'static str,
    pub submitting: &'static str,
    pub success: &'static str,
    pub failure: &'static str,
}

// Home and About open with the same company introduction.
const COMPANY_INTRO_LEAD: &str = "Canada Sheet Metal is a Canadian-based sheet metal \
     fabrication company specializing in precision manufacturing, custom metal components, \
     and high-quality fabricated assemblies.";

// Header

pub const HEADER_QUOTE_LABEL: &str = "Request Quote";

// Home

pub const HOME_HERO: Hero = Hero {
    tag: "Canadian Excellence in Metal Fabrication",
    title: "Precision Sheet Metal\nFabrication",
    lead: "Canada Sheet Metal is your trusted partner for high-quality sheet metal \
           fabrication. We serve industrial, commercial, HVAC, and manufacturing sectors \
           across Canada with precision, reliability, and expert craftsmanship.",
    primary: PageLink {
        label: "Request a Quote",
        to: Route::Contact,
    },
    secondary: PageLink {
        label: "Contact Us",
        to: Route::Contact,
    },
};

pub const HOME_HIGHLIGHTS_HEADER: SectionHeader = SectionHeader {
    tag: "What We Do",
    title: "Complete Sheet Metal Solutions",
    lead: Some(
        "From concept to completion, we deliver precision fabrication services tailored \
         to your needs.",
    ),
};

pub const HOME_HIGHLIGHTS: [ServiceHighlight; 4] = [
    ServiceHighlight {
        icon: ServiceIcon::Laser,
        title: "CNC Laser Cutting",
        blurb: "High-precision cutting for complex profiles with tight tolerances.",
    },
    ServiceHighlight {
        icon: ServiceIcon::Press,
        title: "Precision Bending",
        blurb: "Advanced CNC press brakes for accurate, repeatable bends.",
    },
    ServiceHighlight {
        icon: ServiceIcon::Weld,
        title: "Welding & Assembly",
        blurb: "Expert MIG, TIG, and Spot welding for structural applications.",
    },
    ServiceHighlight {
        icon: ServiceIcon::Finish,
        title: "Quality Finishing",
        blurb: "Clean edges and premium finishing for final production parts.",
    },
];

pub const HOME_HIGHLIGHT_LINK: PageLink = PageLink {
    label: "Learn More →",
    to: Route::Capabilities,
};

pub const HOME_INTRO: SplitSection = SplitSection {
    tag: "About Us",
    title: "Your Trusted Canadian Fabrication Partner",
    lead: COMPANY_INTRO_LEAD,
    body: "We support a wide range of industries including manufacturing, HVAC, \
           construction, and industrial equipment. Our focus is on delivering accurate, \
           durable, and cost-effective sheet metal solutions while maintaining high \
           standards of quality, safety, and customer service.",
    cta: PageLink {
        label: "Learn More About Us",
        to: Route::About,
    },
};

pub const HOME_EQUIPMENT_HEADER: SectionHeader = SectionHeader {
    tag: "Why Choose Us",
    title: "Advanced Equipment & Skilled Craftsmanship",
    lead: Some(
        "We combine state-of-the-art machinery with experienced professionals to deliver \
         exceptional results.",
    ),
};

pub const HOME_EQUIPMENT_POINTS: [CapabilityPoint; 3] = [
    CapabilityPoint {
        title: "CNC Laser Cutting",
        blurb: "Precision cutting up to 20mm with tight tolerances.",
    },
    CapabilityPoint {
        title: "14ft CNC Press Brake",
        blurb: "Capable of complex, long bends with high accuracy.",
    },
    CapabilityPoint {
        title: "MIG, TIG & Spot Welding",
        blurb: "Complete welding services for all applications.",
    },
];

pub const HOME_EQUIPMENT_CTA: PageLink = PageLink {
    label: "View All Capabilities",
    to: Route::Capabilities,
};

pub const HOME_INDUSTRIES_HEADER: SectionHeader = SectionHeader {
    tag: "Industries We Serve",
    title: "Ready to Support Your Sector",
    lead: Some("From HVAC to manufacturing, we provide precision fabrication for diverse industries."),
};

pub const HOME_INDUSTRY_PILLS: [&str; 6] = [
    "Manufacturing & OEMs",
    "HVAC & Mechanical",
    "Construction",
    "Industrial Equipment",
    "Automotive",
    "Custom Projects",
];

pub const HOME_INDUSTRIES_CTA: PageLink = PageLink {
    label: "Explore Industries",
    to: Route::Industries,
};

pub const HOME_CTA: CtaBox = CtaBox {
    title: "Ready to Start Your Project?",
    blurb: "Get in touch with our fabrication experts for a free consultation and quote.",
    primary: PageLink {
        label: "Request a Quote",
        to: Route::Contact,
    },
    secondary: Some(PageLink {
        label: "Contact Us",
        to: Route::Contact,
    }),
};

// About

pub const ABOUT_HEADER: PageHeader = PageHeader {
    tag: "About Us",
    title: "Building Trust Through Precision",
    lead: "A Canadian-based fabrication company delivering quality and innovation.",
};

pub const ABOUT_WHO_TITLE: &str = "Who We Are";

pub const ABOUT_WHO_LEAD: &str = COMPANY_INTRO_LEAD;

pub const ABOUT_WHO_BODY: [&str; 2] = [
    "We support a wide range of industries including manufacturing, HVAC, construction, \
     and industrial equipment.",
    "Our focus is on delivering accurate, durable, and cost-effective sheet metal \
     solutions while maintaining high standards of quality, safety, and customer service. \
     We work closely with our customers from concept to completion to ensure every \
     project meets exact specifications.",
];

pub const ABOUT_VALUES_HEADER: SectionHeader = SectionHeader {
    tag: "Our Foundation",
    title: "Vision, Mission & Goal",
    lead: None,
};

pub const ABOUT_VALUES: [ValueCard; 3] = [
    ValueCard {
        icon: ValueIcon::Vision,
        name: "Vision",
        blurb: "To become a trusted Canadian leader in sheet metal fabrication by \
                delivering precision-built solutions that support the growth of \
                manufacturing and industrial innovation across Canada.",
        featured: false,
    },
    ValueCard {
        icon: ValueIcon::Mission,
        name: "Mission",
        blurb: "Our mission is to provide reliable, high-quality sheet metal fabrication \
                services using advanced machinery, skilled craftsmanship, and a \
                customer-first approach—ensuring every project is delivered with \
                accuracy, consistency, and integrity.",
        featured: true,
    },
    ValueCard {
        icon: ValueIcon::Goal,
        name: "Company Goal",
        blurb: "To build long-term partnerships with customers by offering dependable \
                fabrication services, continuous improvement, and on-time delivery for \
                small, medium, and large-scale projects.",
        featured: false,
    },
];

pub const ABOUT_WHY_HEADER: SectionHeader = SectionHeader {
    tag: "Why Canada Sheet Metal",
    title: "What Sets Us Apart",
    lead: None,
};

pub const ABOUT_DIFFERENTIATORS: [Differentiator; 4] = [
    Differentiator {
        number: "01",
        title: "Precision Manufacturing",
        blurb: "State-of-the-art CNC equipment for accurate, repeatable results.",
    },
    Differentiator {
        number: "02",
        title: "Quality Assurance",
        blurb: "Rigorous inspection processes at every production stage.",
    },
    Differentiator {
        number: "03",
        title: "On-Time Delivery",
        blurb: "Reliable timelines with efficient project management.",
    },
    Differentiator {
        number: "04",
        title: "Customer Focus",
        blurb: "Collaborative approach from concept to completion.",
    },
];

// Capabilities

pub const CAPABILITIES_HEADER: PageHeader = PageHeader {
    tag: "Our Equipment",
    title: "Capacity & Capabilities",
    lead: "Advanced machinery and skilled craftsmanship for mid to large-scale \
           fabrication projects.",
};

pub const CAPABILITIES_OVERVIEW_HEADER: SectionHeader = SectionHeader {
    tag: "What We Can Do",
    title: "Capabilities Overview",
    lead: Some(
        "Canada Sheet Metal has the capability to handle mid to large-scale fabrication \
         projects, from prototype development to full production runs.",
    ),
};

pub const CAPABILITIES_SERVICES_INTRO: &str = "Our services include:";

pub const CAPABILITIES_SERVICES: [&str; 5] = [
    "Sheet metal cutting",
    "Precision bending and forming",
    "Welding and assembly",
    "Custom metal fabrication",
    "Short and long production runs",
];

pub const CAPABILITIES_OVERVIEW_CTA: PageLink = PageLink {
    label: "Request a Quote",
    to: Route::Contact,
};

pub const MACHINERY_HEADER: SectionHeader = SectionHeader {
    tag: "Our Equipment",
    title: "Machinery & Equipment",
    lead: Some(
        "Industry-leading equipment with realistic technical capabilities for precision \
         manufacturing.",
    ),
};

pub const MACHINES: [Machine; 4] = [
    Machine {
        icon: ServiceIcon::Laser,
        name: "CNC Laser Cutting Machine",
        specs: &[
            "High-precision cutting for mild steel, stainless steel, and aluminum",
            "Thickness capability up to approx. 20 mm (material dependent)",
            "Ideal for complex profiles and tight tolerances",
        ],
    },
    Machine {
        icon: ServiceIcon::Plasma,
        name: "CNC Plasma Cutting Machine",
        specs: &[
            "Suitable for thicker materials and heavy-duty applications",
            "Cost-effective cutting for structural and industrial components",
        ],
    },
    Machine {
        icon: ServiceIcon::Press,
        name: "CNC Press Brake (14 ft)",
        specs: &[
            "Precision bending and forming",
            "Capable of handling long and complex bends",
            "High repeatability and accuracy",
        ],
    },
    Machine {
        icon: ServiceIcon::Weld,
        name: "Welding Equipment",
        specs: &[
            "MIG Welding – For structural and production welding",
            "TIG Welding – For clean, precision welding on stainless steel and aluminum",
            "Spot Welding – For sheet metal assemblies",
        ],
    },
];

pub const SUPPORT_HEADER: SectionHeader = SectionHeader {
    tag: "Additional Resources",
    title: "Additional Supporting Equipment",
    lead: Some("All equipment supports high-quality fabrication, accuracy, and consistent output."),
};

pub const SUPPORT_STATIONS: [SupportStation; 5] = [
    SupportStation {
        name: "Shearing Machines",
        blurb: "Precision cutting and sizing",
    },
    SupportStation {
        name: "Drilling & Tapping Stations",
        blurb: "Accurate hole placement",
    },
    SupportStation {
        name: "Grinding & Finishing Equipment",
        blurb: "Surface preparation and finishing",
    },
    SupportStation {
        name: "Material Handling & Lifting",
        blurb: "Safe and efficient material movement",
    },
    SupportStation {
        name: "Assembly & Inspection Workstations",
        blurb: "Quality control and final assembly",
    },
];

pub const CAPABILITIES_CTA: CtaBox = CtaBox {
    title: "Ready to Discuss Your Project?",
    blurb: "Contact us to learn how our capabilities can support your fabrication needs.",
    primary: PageLink {
        label: "Request a Quote",
        to: Route::Contact,
    },
    secondary: Some(PageLink {
        label: "Industries We Serve",
        to: Route::Industries,
    }),
};

// Industries

pub const INDUSTRIES_HEADER: PageHeader = PageHeader {
    tag: "Who We Serve",
    title: "Industries We Serve",
    lead: "Delivering precision sheet metal fabrication solutions across diverse sectors in Canada.",
};

pub const INDUSTRIES_GRID_HEADER: SectionHeader = SectionHeader {
    tag: "Our Expertise",
    title: "Serving a Wide Range of Industries",
    lead: Some(
        "From manufacturing to construction, we provide reliable fabrication services \
         tailored to each industry's unique requirements.",
    ),
};

pub const INDUSTRIES: [Industry; 6] = [
    Industry {
        glyph: "🏭",
        name: "Manufacturing & OEMs",
        blurb: "Custom components, assemblies, and production parts for original equipment \
                manufacturers and manufacturing facilities.",
    },
    Industry {
        glyph: "❄️",
        name: "HVAC & Mechanical Contractors",
        blurb: "Precision ductwork, housings, enclosures, and mechanical components for \
                heating, ventilation, and air conditioning systems.",
    },
    Industry {
        glyph: "🏗️",
        name: "Construction & Infrastructure",
        blurb: "Structural components, architectural metalwork, and custom fabrications \
                for commercial and industrial construction projects.",
    },
    Industry {
        glyph: "⚙️",
        name: "Industrial Equipment Manufacturers",
        blurb: "Machine guards, panels, enclosures, and custom housings for industrial \
                machinery and equipment.",
    },
    Industry {
        glyph: "🚗",
        name: "Automotive & Transportation",
        blurb: "Vehicle components, transport equipment parts, and specialized \
                fabrications for the automotive and transportation sector.",
    },
    Industry {
        glyph: "✨",
        name: "Custom Metal Projects",
        blurb: "Bespoke fabrication solutions for unique requirements, prototypes, and \
                specialized applications across various industries.",
    },
];

pub const INDUSTRIES_CTA: CtaBox = CtaBox {
    title: "Don't See Your Industry?",
    blurb: "We work with businesses of all types. Contact us to discuss your specific \
            fabrication needs.",
    primary: PageLink {
        label: "Get in Touch",
        to: Route::Contact,
    },
    secondary: Some(PageLink {
        label: "View Our Capabilities",
        to: Route::Capabilities,
    }),
};

// Contact

pub const CONTACT_TITLE: &str = "Contact Us";

pub const CONTACT_SUBTITLE: &str = "Ready to start your next project? Get in touch with our team.";

pub const CONTACT_LOCATION_HEADING: &str = "Our Location";
pub const CONTACT_EMAIL_HEADING: &str = "Email Us";
pub const CONTACT_PHONE_HEADING: &str = "Call Us";

pub const CONTACT_FORM: ContactFormCopy = ContactFormCopy {
    name: FieldCopy {
        label: "Name",
        placeholder: "John Doe",
        required: true,
    },
    email: FieldCopy {
        label: "Email",
        placeholder: "john@example.com",
        required: true,
    },
    phone: FieldCopy {
        label: "Phone",
        placeholder: "+1 (416) 555-0000",
        required: false,
    },
    company: FieldCopy {
        label: "Company",
        placeholder: "Your Company",
        required: false,
    },
    message: FieldCopy {
        label: "Message",
        placeholder: "Tell us about your project...",
        required: true,
    },
    submit: "Send Message",
    submitting: "Sending...",
    success: "Thank you! Your message has been sent successfully.",
    failure: "Something went wrong. Please try again or email us directly.",
};

// Footer

pub const FOOTER_BLURB: &str = "Precision sheet metal fabrication services for industrial, \
     commercial, and manufacturing sectors across Canada. Quality craftsmanship, on-time \
     delivery.";

pub const FOOTER_COMPANY_LINKS: [PageLink; 4] = [
    PageLink {
        label: "Home",
        to: Route::Home,
    },
    PageLink {
        label: "About Us",
        to: Route::About,
    },
    PageLink {
        label: "Capabilities",
        to: Route::Capabilities,
    },
    PageLink {
        label: "Industries",
        to: Route::Industries,
    },
];

pub const FOOTER_SERVICE_LINKS: [PageLink; 4] = [
    PageLink {
        label: "CNC Laser Cutting",
        to: Route::Capabilities,
    },
    PageLink {
        label: "Precision Bending",
        to: Route::Capabilities,
    },
    PageLink {
        label: "Welding Services",
        to: Route::Capabilities,
    },
    PageLink {
        label: "Custom Fabrication",
        to: Route::Capabilities,
    },
];

pub const FOOTER_RIGHTS: &str = "All Rights Reserved.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlight_and_machine_tables_are_filled_in() {
        assert_eq!(HOME_HIGHLIGHTS.len(), 4);
        for highlight in HOME_HIGHLIGHTS {
            assert!(!highlight.title.is_empty());
            assert!(!highlight.blurb.is_empty());
        }
        assert_eq!(MACHINES.len(), 4);
        for machine in MACHINES {
            assert!(machine.specs.len() >= 2, "{} needs spec bullets", machine.name);
        }
    }

    #[test]
    fn differentiators_are_numbered_in_order() {
        let numbers: Vec<_> = ABOUT_DIFFERENTIATORS.iter().map(|d| d.number).collect();
        assert_eq!(numbers, ["01", "02", "03", "04"]);
    }

    #[test]
    fn exactly_one_value_card_is_featured() {
        let featured = ABOUT_VALUES.iter().filter(|card| card.featured).count();
        assert_eq!(featured, 1);
    }

    #[test]
    fn industries_page_lists_six_sectors() {
        assert_eq!(INDUSTRIES.len(), 6);
        for industry in INDUSTRIES {
            assert!(!industry.glyph.is_empty());
            assert!(!industry.blurb.is_empty());
        }
    }

    #[test]
    fn form_requires_name_email_and_message() {
        assert!(CONTACT_FORM.name.required);
        assert!(CONTACT_FORM.email.required);
        assert!(CONTACT_FORM.message.required);
        assert!(!CONTACT_FORM.phone.required);
        assert!(!CONTACT_FORM.company.required);
    }

    #[test]
    fn footer_service_links_all_land_on_capabilities() {
        for link in FOOTER_SERVICE_LINKS {
            assert_eq!(link.to, Route::Capabilities);
        }
    }

    #[test]
    fn footer_blurb_joins_into_clean_copy() {
        assert!(FOOTER_BLURB.starts_with("Precision sheet metal fabrication services"));
        assert!(FOOTER_BLURB.ends_with("Quality craftsmanship, on-time delivery."));
        assert!(!FOOTER_BLURB.contains("  "), "line continuations left a double space");
    }

    #[test]
    fn every_cta_names_a_destination() {
        for cta in [HOME_CTA, CAPABILITIES_CTA, INDUSTRIES_CTA] {
            assert!(!cta.primary.label.is_empty());
            if let Some(secondary) = cta.secondary {
                assert!(!secondary.label.is_empty());
            }
        }
    }
}
