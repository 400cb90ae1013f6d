//! The records themselves.

use super::{
    Brand, BrandWork, Education, Experience, Person, Project, ProjectFeature, Screenshot,
    SkillCategory, WorkKind,
};

pub const PERSON: Person = Person {
    name: "Azure Malm",
    title: "Head of Design",
    email: "azurem.ux@gmail.com",
    location: "Seattle, WA",
    linkedin: "https://linkedin.com/in/azure-malm",
    bio: "I lead design teams and shape product vision, combining hands-on design and engineering expertise with strategic leadership to deliver exceptional user experiences at scale.",
    extended_bio: &[
        "My journey into design leadership started with a fascination for how people interact with technology. After earning my BA from Seattle Pacific University, I pursued a Master's in Learning & Technology at WGU, focused on integrating technology into the classroom. The skills I built there carry over every day: understanding how different people learn, communicating complex ideas clearly, and adapting my approach to meet people where they are.",
        "A Google UX Design Certificate sharpened my design thinking toolkit, and I transitioned from UX Designer to UX Engineer, combining my love for visual design with hands-on front-end development.",
        "Today, as Head of Design, I split my time between leading a team of designers and doing hands-on design work myself. I approve all design output, drive product strategy, and make higher-level decisions that shape the user experience across our entire product suite, but I'm also still in Figma every day working on projects alongside my team.",
    ],
};

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        company: "PCM Services LLC",
        role: "Head of Design",
        period: "Dec 2025 - Present",
        description: "Leading the design team and overseeing all design output across the company's product suite.",
        highlights: &[
            "Managing and mentoring a team of designers across multiple product lines",
            "Approving all design work before release to ensure quality and consistency",
            "Driving higher-level product and design strategy decisions",
            "Establishing design standards and review processes across the organization",
        ],
    },
    Experience {
        company: "PCM Services LLC",
        role: "UX Engineer",
        period: "Aug 2024 - Nov 2025",
        description: "Leading front-end development and design implementation for internal and client-facing applications.",
        highlights: &[
            "Translating complex design systems into scalable React components",
            "Collaborating with product teams to refine UX flows",
            "Implementing accessible, responsive interfaces across platforms",
        ],
    },
    Experience {
        company: "Hawx Smart Pest Control",
        role: "UX Engineer",
        period: "Aug 2023 - 2024",
        description: "Evolved from UX Designer to UX Engineer, owning both the design and front-end implementation of multiple internal tools.",
        highlights: &[
            "Built and shipped production React Native and React web applications",
            "Designed and developed four major internal products end-to-end",
            "Established front-end component patterns and design system foundations",
        ],
    },
    Experience {
        company: "Hawx Smart Pest Control",
        role: "UX Designer",
        period: "Sept 2022 - Aug 2023",
        description: "Owned the UX design process for internal sales and service tools, from research through high-fidelity prototypes.",
        highlights: &[
            "Conducted user research and usability testing with field technicians and sales reps",
            "Created wireframes, prototypes, and design specifications in Figma",
            "Collaborated closely with engineering to ensure design fidelity",
        ],
    },
];

pub const EDUCATION: &[Education] = &[
    Education {
        institution: "Google",
        degree: "UX Design Professional Certificate",
        period: "2021 - 2022",
    },
    Education {
        institution: "Western Governors University",
        degree: "MS Learning & Technology",
        period: "2020 - 2021",
    },
    Education {
        institution: "Seattle Pacific University",
        degree: "BA",
        period: "2015 - 2020",
    },
];

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        category: "Design",
        skills: &[
            "Figma",
            "Wireframing",
            "Prototyping",
            "User Research",
            "Usability Testing",
            "Design Systems",
            "Information Architecture",
        ],
    },
    SkillCategory {
        category: "Development",
        skills: &[
            "React",
            "React Native",
            "Next.js",
            "JavaScript",
            "HTML",
            "CSS/SCSS",
            "WordPress",
            "Webflow",
            "Wix",
        ],
    },
    SkillCategory {
        category: "Tools",
        skills: &["GitLab", "VS Code", "Notion", "ClickUp", "Monday"],
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        slug: "digital-technician",
        title: "Digital Technician",
        subtitle: "Internal Technician Tool",
        role: "Sole Designer & Front-End Engineer",
        tech: &["Figma", "React Native", "HTML", "CSS/SCSS", "JavaScript", "GitLab"],
        platforms: &["Mobile"],
        problem: "When I joined, Digital Technician was functional but still growing. Over time we added manager views, leaderboards, quote tracking, multi-photo capture, rescheduling, and NPS scoring, and the app outgrew its original design. The route list, map, and service checklist all struggled to display increasingly complex information.",
        goal: "Continuously evolve the app to support every service type Hawx offers while keeping the experience fast and intuitive for technicians working in the field, ultimately leading to a full redesign of every page.",
        description: "Digital Technician is the mobile app used by every Hawx Pest Control service technician to run their day. It handles the full appointment lifecycle: daily routes, guided service checklists, chemical treatment logs, photo capture, signatures, and service tickets. I worked on this app for over 3 years, first building new features on the existing foundation, then leading a complete redesign of every page.",
        design_approach: "The full redesign focused on a scalable layout system that could handle all the features added over the years. Designed for one-handed use in the field, the interface prioritizes large touch targets, clear visual states, and minimal text input.",
        features: &[
            ProjectFeature {
                number: 1,
                title: "Daily Route & Map View",
                description: "Technicians see their full daily route with NPS scores, star ratings, and color-coded status badges, plus an interactive map with numbered pins.",
            },
            ProjectFeature {
                number: 2,
                title: "Guided Service Checklist",
                description: "A step-by-step checklist adapts to the service type and automatically adds steps for customer add-ons.",
            },
            ProjectFeature {
                number: 3,
                title: "Multi-Photo Documentation",
                description: "Techs attach multiple photos and notes to each checklist item, organized by service category in a gallery.",
            },
            ProjectFeature {
                number: 4,
                title: "Leaderboards & Points",
                description: "Techs earn points for completing appointments, with leaderboards and NPS scores tracked alongside performance.",
            },
        ],
        screenshots: &[
            Screenshot {
                label: "Guided Checklist",
                description: "Treatment checklist with step-by-step guidance and expandable detail sections",
            },
            Screenshot {
                label: "Concern Dashboard",
                description: "Customer concern visibility panel showing reported issues with priority flags",
            },
            Screenshot {
                label: "Photo Documentation",
                description: "Photo capture and annotation interface for logging treatment areas",
            },
        ],
    },
    Project {
        slug: "hawx-website",
        title: "Hawx Website",
        subtitle: "Website Redesign",
        role: "Sole Designer",
        tech: &["Figma", "Next.js", "React", "HTML", "CSS/SCSS", "JavaScript"],
        platforms: &["Desktop Web"],
        problem: "The existing Hawx website was dated and needed a refresh. It had poor SEO, broken or incorrectly coded elements, and wasn't responsive across screen sizes.",
        goal: "Redesign the entire Hawx web presence with a modern, user-focused design that improves how information is displayed and creates a scalable system for all page types.",
        description: "A comprehensive redesign of the Hawx Pest Control website, rethinking every page from homepage to location pages to the pest library. As the sole designer, I'm leading the full redesign: establishing a new visual language and building a cohesive design system.",
        design_approach: "A component library built in Figma with consistent typography, color, spacing, and interaction patterns that scale across every page type.",
        features: &[
            ProjectFeature {
                number: 1,
                title: "Design System",
                description: "A comprehensive component library with consistent typography, color, spacing, and interaction patterns.",
            },
            ProjectFeature {
                number: 2,
                title: "Location Page Hierarchy",
                description: "A three-level location system: overview, state-level pages, and individual branch pages with local details and CTAs.",
            },
            ProjectFeature {
                number: 3,
                title: "Pest Library",
                description: "Redesigned pest information pages with better content structure and clear calls to action.",
            },
        ],
        screenshots: &[
            Screenshot {
                label: "Homepage",
                description: "Redesigned homepage with new visual language and conversion-focused layout",
            },
            Screenshot {
                label: "Location Pages",
                description: "Three-level location hierarchy from overview to individual branches",
            },
        ],
    },
    Project {
        slug: "blackbird",
        title: "Blackbird",
        subtitle: "Door-to-Door Sales Tool",
        role: "UX Designer",
        tech: &["Figma", "React Native", "HTML", "CSS/SCSS", "JavaScript", "GitLab"],
        platforms: &["Tablet", "Mobile"],
        problem: "Door-to-door sales reps were relying on paper contracts and verbal explanations to sell pest control services, with no way to track progress or manage territories digitally.",
        goal: "Replace the paper-based sales process with a digital tool that takes a sales rep from walking up to a house all the way through creating a customer, signing the contract, and scheduling their first service.",
        description: "Blackbird is an application built for Hawx Pest Control's door-to-door sales team, designed first for iPad and later adapted to mobile. It digitized the entire sales process, replacing paper contracts with a guided flow through service selection, contract signing, and payment. Delivered within a 6-month timeline to meet a hard deadline before sales season.",
        design_approach: "A guided, linear flow designed for credibility at the door: clear terms, pricing breakdowns, and smooth signature capture built for iPad.",
        features: &[
            ProjectFeature {
                number: 1,
                title: "Full Sign-Up Flow",
                description: "From initial pitch through service selection, contract review, electronic signature, payment, and first service scheduling, all in one session.",
            },
            ProjectFeature {
                number: 2,
                title: "Sales Map & Pins",
                description: "An interactive territory map with color-coded statuses (sold, come back later, never knock, pending).",
            },
            ProjectFeature {
                number: 3,
                title: "Leaderboard & Baseball Card",
                description: "A competitive leaderboard ranks reps, and each rep gets a personal baseball card with their sales stats.",
            },
        ],
        screenshots: &[
            Screenshot {
                label: "Sign-Up Flow",
                description: "Guided service selection and contract signing on iPad",
            },
            Screenshot {
                label: "Territory Map",
                description: "Pin-based territory management with color-coded statuses",
            },
        ],
    },
    Project {
        slug: "pestrack",
        title: "PesTrack",
        subtitle: "Lead Generation Tool",
        role: "Sole Designer & Front-End Engineer",
        tech: &["Figma", "Next.js", "HTML", "CSS/SCSS", "JavaScript"],
        platforms: &["Mobile Web", "Desktop"],
        problem: "The existing lead capture form didn't collect enough data to qualify leads effectively, leaving the sales team with little context when calling back.",
        goal: "Build a conversion-focused lead generation flow that captures detailed customer information so the sales team has everything they need before making the callback.",
        description: "PesTrack is a mobile-first lead generation tool built for Hawx Pest Control. It replaced a basic website form with a guided, step-by-step flow designed to capture richer lead data: one question at a time, no scrolling, optimized for conversion on mobile devices.",
        design_approach: "Every screen fits within the viewport with no scrolling required. One question per screen with large, tappable options keeps the experience fast and focused.",
        features: &[
            ProjectFeature {
                number: 1,
                title: "No-Scroll Mobile Design",
                description: "One question per screen with large, tappable options, every screen fitting the viewport.",
            },
            ProjectFeature {
                number: 2,
                title: "Service Area Validation",
                description: "Customers confirm Hawx services their area before investing time in the rest of the flow.",
            },
            ProjectFeature {
                number: 3,
                title: "Qualified Lead Handoff",
                description: "The flow collects a complete customer profile and promises a 10-minute callback.",
            },
        ],
        screenshots: &[
            Screenshot {
                label: "Pest Selection",
                description: "Visual pest selection with illustrated icons",
            },
            Screenshot {
                label: "Address Validation",
                description: "Upfront service-area confirmation step",
            },
        ],
    },
    Project {
        slug: "bluejay",
        title: "Bluejay",
        subtitle: "Internal Sales Tool",
        role: "Sole Designer & Front-End Engineer",
        tech: &["Figma", "React", "HTML", "CSS/SCSS", "JavaScript"],
        platforms: &["Desktop Web", "Mobile"],
        problem: "The inside sales team was juggling fragmented tools and a costly third-party platform, with no unified system for handling calls, looking up customers, and processing sales.",
        goal: "Build an all-in-one internal sales tool that integrates directly with Five9's telephony platform, consolidating the entire sales workflow into a single application.",
        description: "Bluejay is a two-sided web-based sales tool built for Hawx Pest Control's inside sales team. Reps look up customers, build service packages with customizable pricing, and send a link for the customer to complete sign-up on their own device, with webhook-based progress tracking keeping the rep informed in real time.",
        design_approach: "Two experiences, one system: a dense rep-facing workspace tuned for speed on calls, and a clean customer-facing flow for reviewing, signing, and paying.",
        features: &[
            ProjectFeature {
                number: 1,
                title: "Five9 Integration",
                description: "Deep telephony integration for call management, automatic logging, and real-time agent status.",
            },
            ProjectFeature {
                number: 2,
                title: "Custom Sales Flow",
                description: "Reps select services, configure add-ons, set term lengths and pricing, and send a customer-facing link.",
            },
            ProjectFeature {
                number: 3,
                title: "Customer-Facing Link",
                description: "Customers review their plan, sign the agreement, and complete payment on their own device.",
            },
        ],
        screenshots: &[
            Screenshot {
                label: "Rep Workspace",
                description: "Customer lookup and package building with Five9 call controls",
            },
            Screenshot {
                label: "Customer Flow",
                description: "Plan review, e-signature, and payment on the customer's device",
            },
        ],
    },
];

pub const BRANDS: &[Brand] = &[
    Brand {
        name: "Hawx",
        slug: "hawx",
        description: "Smart pest control company — designed and built multiple internal tools, led a full website redesign, and created ongoing marketing creatives.",
        work: &[
            BrandWork {
                title: "Website Redesign",
                description: "Full redesign of the Hawx public website — in progress",
                kind: WorkKind::Website,
            },
            BrandWork {
                title: "Blackbird",
                description: "iPad app for door-to-door sales team",
                kind: WorkKind::App,
            },
            BrandWork {
                title: "Digital Technician",
                description: "Mobile app for field service technicians",
                kind: WorkKind::App,
            },
            BrandWork {
                title: "PesTrack",
                description: "Responsive lead generation tool for the Hawx homepage",
                kind: WorkKind::LeadGen,
            },
            BrandWork {
                title: "Bluejay",
                description: "Web-based internal sales tool with Five9 integration",
                kind: WorkKind::App,
            },
            BrandWork {
                title: "Marketing Creatives",
                description: "Ongoing design of marketing materials and campaign assets",
                kind: WorkKind::Marketing,
            },
        ],
    },
    Brand {
        name: "Trusted Service Pros",
        slug: "trusted-service-pros",
        description: "Home services brand — established the brand identity from scratch and designed landing pages across multiple service verticals.",
        work: &[
            BrandWork {
                title: "Brand Identity",
                description: "Logo, color palette, typography, and brand guidelines",
                kind: WorkKind::Branding,
            },
            BrandWork {
                title: "Roofing Landing Page",
                description: "Service-specific landing page for roofing leads",
                kind: WorkKind::LandingPage,
            },
            BrandWork {
                title: "Siding Landing Page",
                description: "Service-specific landing page for siding leads",
                kind: WorkKind::LandingPage,
            },
            BrandWork {
                title: "Windows Landing Page",
                description: "Service-specific landing page for window replacement leads",
                kind: WorkKind::LandingPage,
            },
            BrandWork {
                title: "Lead Generation Flows",
                description: "Multi-step lead capture experiences",
                kind: WorkKind::LeadGen,
            },
            BrandWork {
                title: "Marketing Creatives",
                description: "Ongoing design of marketing materials and campaign assets",
                kind: WorkKind::Marketing,
            },
        ],
    },
    Brand {
        name: "Canopy",
        slug: "canopy",
        description: "Home exteriors brand — designed landing pages for multiple service lines and created marketing materials.",
        work: &[
            BrandWork {
                title: "Roofing Landing Page",
                description: "Service-specific landing page for roofing leads",
                kind: WorkKind::LandingPage,
            },
            BrandWork {
                title: "Siding Landing Page",
                description: "Service-specific landing page for siding leads",
                kind: WorkKind::LandingPage,
            },
            BrandWork {
                title: "Windows Landing Page",
                description: "Service-specific landing page for window replacement leads",
                kind: WorkKind::LandingPage,
            },
            BrandWork {
                title: "Lead Generation Flows",
                description: "Multi-step lead capture experiences",
                kind: WorkKind::LeadGen,
            },
            BrandWork {
                title: "Marketing Creatives",
                description: "Ongoing design of marketing materials and campaign assets",
                kind: WorkKind::Marketing,
            },
        ],
    },
    Brand {
        name: "AdviserMatch",
        slug: "advisermatch",
        description: "Financial adviser matching platform — designed landing pages, lead generation flows, and marketing creatives.",
        work: &[
            BrandWork {
                title: "Warm Transfer Landing Pages",
                description: "Landing pages for warm transfer lead campaigns",
                kind: WorkKind::LandingPage,
            },
            BrandWork {
                title: "Lead Generation Flows",
                description: "Multi-step lead capture experiences for financial adviser matching",
                kind: WorkKind::LeadGen,
            },
            BrandWork {
                title: "Marketing Creatives",
                description: "Ongoing design of marketing materials and campaign assets",
                kind: WorkKind::Marketing,
            },
        ],
    },
    Brand {
        name: "PCM Encore",
        slug: "pcm-encore",
        description: "Financial advisory firm specializing in retirement planning, investing, and wealth management.",
        work: &[
            BrandWork {
                title: "Family Office Landing Page",
                description: "Landing page for family office services",
                kind: WorkKind::LandingPage,
            },
            BrandWork {
                title: "Private Wealth Management Landing Page",
                description: "Landing page for private wealth management services",
                kind: WorkKind::LandingPage,
            },
            BrandWork {
                title: "Webinar Landing Pages",
                description: "Landing pages for webinar events and registrations",
                kind: WorkKind::LandingPage,
            },
            BrandWork {
                title: "Marketing Creatives",
                description: "Design of marketing materials and campaign assets",
                kind: WorkKind::Marketing,
            },
        ],
    },
    Brand {
        name: "YES Brands",
        slug: "yes-brands",
        description: "Youth enrichment services spanning multiple brands across gymnastics, baseball, basketball, and more.",
        work: &[BrandWork {
            title: "Ta Da Gymnastics Redesign",
            description: "Site redesign for the Ta Da Gymnastics brand",
            kind: WorkKind::Redesign,
        }],
    },
];
