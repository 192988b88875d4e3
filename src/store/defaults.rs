use crate::store::model::{
    AboutInfo, CaseStudy, FooterInfo, Partner, Service, ServiceIcon, SocialLink, TeamMember,
};

pub fn footer() -> FooterInfo {
    FooterInfo {
        address: "Keskuskatu 7, 00100 Helsinki, Finland".to_string(),
        email: "hello@northbeam.fi".to_string(),
        phone: "+358 40 123 4567".to_string(),
        social_links: vec![
            SocialLink {
                platform: "LinkedIn".to_string(),
                url: "https://www.linkedin.com/company/northbeam-consulting".to_string(),
            },
            SocialLink {
                platform: "GitHub".to_string(),
                url: "https://github.com/northbeam".to_string(),
            },
            SocialLink {
                platform: "X".to_string(),
                url: "https://x.com/northbeam".to_string(),
            },
        ],
    }
}

pub fn about() -> AboutInfo {
    AboutInfo {
        title: "About Northbeam".to_string(),
        description: "Northbeam is a technology consultancy helping construction, logistics and public sector organisations replace paper-heavy processes with software that people actually use.".to_string(),
        mission: "Make digital tools the easiest way to get real work done on site, in the office and on the road.".to_string(),
        vision: "A Nordic industry where every project decision is backed by accurate, shared data.".to_string(),
        values: vec![
            "Honesty over hype".to_string(),
            "Ship small, ship often".to_string(),
            "Understand the work before automating it".to_string(),
            "Leave clients more capable than we found them".to_string(),
        ],
        team: vec![
            TeamMember {
                id: "1".to_string(),
                name: "Aino Virtanen".to_string(),
                position: "Managing Director".to_string(),
                photo: "/assets/team/aino.jpg".to_string(),
                bio: "Fifteen years of ERP and document management projects for the construction industry.".to_string(),
            },
            TeamMember {
                id: "2".to_string(),
                name: "Mikko Laine".to_string(),
                position: "Lead Engineer".to_string(),
                photo: "/assets/team/mikko.jpg".to_string(),
                bio: "Builds integrations and field applications; previously logistics systems architect.".to_string(),
            },
            TeamMember {
                id: "3".to_string(),
                name: "Sara Nieminen".to_string(),
                position: "Service Designer".to_string(),
                photo: "/assets/team/sara.jpg".to_string(),
                bio: "Turns interviews on muddy building sites into interfaces foremen enjoy using.".to_string(),
            },
        ],
    }
}

pub fn services() -> Vec<Service> {
    vec![
        Service {
            id: "1".to_string(),
            title: "Construction digitalisation".to_string(),
            description: "Site diaries, inspections and handover documentation moved from paper to tablets.".to_string(),
            icon: ServiceIcon::Building,
            details: "We map your site processes, pick or build the right tools, and train crews until the new way is the default way.".to_string(),
        },
        Service {
            id: "2".to_string(),
            title: "Document management".to_string(),
            description: "One searchable home for drawings, contracts and permits.".to_string(),
            icon: ServiceIcon::FileText,
            details: "Migration from shared drives, metadata design, retention rules and integrations with your existing ERP.".to_string(),
        },
        Service {
            id: "3".to_string(),
            title: "Logistics systems".to_string(),
            description: "Delivery scheduling and tracking for material flows to and from site.".to_string(),
            icon: ServiceIcon::Truck,
            details: "Just-in-time delivery planning, carrier integrations and live status boards for site managers.".to_string(),
        },
        Service {
            id: "4".to_string(),
            title: "Custom software".to_string(),
            description: "When nothing off the shelf fits, we build it.".to_string(),
            icon: ServiceIcon::Code,
            details: "Web and mobile applications, APIs and data pipelines, delivered in short iterations with your team in the loop.".to_string(),
        },
    ]
}

pub fn partners() -> Vec<Partner> {
    vec![
        Partner {
            id: "1".to_string(),
            name: "Rakenne Group".to_string(),
            logo: "/assets/partners/rakenne.svg".to_string(),
            description: "General contractor delivering residential and commercial projects across Finland.".to_string(),
            website: Some("https://rakenne.example.com".to_string()),
        },
        Partner {
            id: "2".to_string(),
            name: "Pohjola Freight".to_string(),
            logo: "/assets/partners/pohjola.svg".to_string(),
            description: "Regional haulage and construction logistics operator.".to_string(),
            website: Some("https://pohjolafreight.example.com".to_string()),
        },
        Partner {
            id: "3".to_string(),
            name: "Arkisto Cloud".to_string(),
            logo: "/assets/partners/arkisto.svg".to_string(),
            description: "Document management platform we implement and extend for our clients.".to_string(),
            website: None,
        },
    ]
}

pub fn case_studies() -> Vec<CaseStudy> {
    vec![
        CaseStudy {
            id: "1".to_string(),
            title: "Paperless site handover".to_string(),
            client: "Rakenne Group".to_string(),
            description: "Digital inspection and handover flow for a 240-apartment residential project.".to_string(),
            challenge: "Handover binders took three weeks to assemble and were out of date on delivery.".to_string(),
            solution: "Tablet-based inspection checklists feeding a generated handover package.".to_string(),
            result: "Handover documentation ready on completion day; defect follow-up time halved.".to_string(),
            images: vec!["/assets/cases/handover-1.jpg".to_string(), "/assets/cases/handover-2.jpg".to_string()],
            partner_id: Some("1".to_string()),
        },
        CaseStudy {
            id: "2".to_string(),
            title: "Just-in-time deliveries".to_string(),
            client: "Pohjola Freight".to_string(),
            description: "Delivery slot booking between site managers and carriers.".to_string(),
            challenge: "Trucks queued at site gates while cranes were booked for other lifts.".to_string(),
            solution: "Shared slot calendar with carrier ETA updates and crane booking integration.".to_string(),
            result: "Gate waiting time down 60%, two fewer crane idle hours per day.".to_string(),
            images: vec!["/assets/cases/deliveries-1.jpg".to_string()],
            partner_id: Some("2".to_string()),
        },
    ]
}
