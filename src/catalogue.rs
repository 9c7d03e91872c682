//! Fixed site data: brands, sectors, case studies, the model catalogue,
//! navigation and the legal page index.

pub struct Brand {
    pub slug: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub logo: &'static str,
    pub external_url: Option<&'static str>,
    pub features: &'static [&'static str],
}

pub struct Sector {
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub details: &'static [&'static str],
}

pub struct CaseStudy {
    pub slug: &'static str,
    pub institution: &'static str,
    pub kind: InstitutionKind,
    pub location: &'static str,
    pub challenge: &'static str,
    pub solution: &'static str,
    pub results: &'static [&'static str],
    pub testimonial: &'static str,
    pub contact: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstitutionKind {
    University,
    School,
    TrainingCentre,
}

impl InstitutionKind {
    pub fn label(self) -> &'static str {
        match self {
            InstitutionKind::University => "University",
            InstitutionKind::School => "School",
            InstitutionKind::TrainingCentre => "Training Centre",
        }
    }
}

pub struct Model {
    pub slug: &'static str,
    pub name: &'static str,
    pub category: ModelCategory,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelCategory {
    Lms,
    Tutoring,
    Assessment,
    Analytics,
}

impl ModelCategory {
    pub fn label(self) -> &'static str {
        match self {
            ModelCategory::Lms => "LMS",
            ModelCategory::Tutoring => "AI Tutoring",
            ModelCategory::Assessment => "Assessment",
            ModelCategory::Analytics => "Analytics",
        }
    }
}

pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
}

pub struct LegalPage {
    pub slug: &'static str,
    pub title: &'static str,
}

impl LegalPage {
    pub fn file_name(&self) -> String {
        format!("{}.md", self.slug)
    }

    pub fn path(&self) -> String {
        format!("/{}", self.slug)
    }
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { href: "/", label: "Home" },
    NavItem { href: "/what-we-do", label: "What We Do" },
    NavItem { href: "/brands", label: "Brands" },
    NavItem { href: "/blog", label: "Blog" },
    NavItem { href: "/contact", label: "Contact" },
];

pub const LEGAL_PAGES: &[LegalPage] = &[
    LegalPage { slug: "privacy-policy", title: "Privacy Policy" },
    LegalPage { slug: "terms", title: "Terms & Conditions" },
    LegalPage { slug: "cookies-policy", title: "Cookie Policy" },
    LegalPage { slug: "saas-terms", title: "SaaS Terms of Service" },
    LegalPage { slug: "trademark-usage", title: "Trademark Usage Policy" },
];

pub const BRANDS: &[Brand] = &[
    Brand {
        slug: "pupilsai",
        name: "PupilsAI",
        tagline: "Adaptive AI platform for UK schools",
        description: "Privacy-first classroom AI that supports lesson preparation, differentiation and formative feedback, designed with safeguarding in mind.",
        logo: "/assets/brands/pupilsai.svg",
        external_url: None,
        features: &[
            "Pupil-safe prompts and safeguards",
            "Curriculum-aligned planning templates",
            "Teacher controls, oversight and audit logs",
            "UK/EU data hosting options",
            "SSO with leading MIS/LMS platforms",
            "Accessibility-first UI (WCAG 2.2)",
        ],
    },
    Brand {
        slug: "teachersai",
        name: "TeachersAI",
        tagline: "Planning, marking and safeguarding in one suite",
        description: "Consistent, time-saving marking with rubric-based workflows and evidence-backed feedback, reducing workload without compromising professional judgement.",
        logo: "/assets/brands/teachersai.svg",
        external_url: None,
        features: &[
            "Rubric-based marking and moderation",
            "Batch workflows with anonymised marking",
            "Export to MIS/LMS and spreadsheets",
            "Comment banks with tone controls",
            "Subject-specific exemplars",
            "Internal quality assurance and audit trails",
        ],
    },
    Brand {
        slug: "studentsai",
        name: "StudentsAI",
        tagline: "Study companions for learners and families",
        description: "A research-aware writing assistant that helps plan, draft and reference responsibly, supporting good academic practice rather than shortcuts.",
        logo: "/assets/brands/studentsai.svg",
        external_url: None,
        features: &[
            "Referencing guidance (Harvard, APA, MLA)",
            "Plagiarism-aware suggestions and paraphrase coaching",
            "Revision, structure and clarity modes",
            "Reading lists and note-taking aids",
            "Accessibility features and dyslexia-friendly options",
            "Export to Word, Google Docs and Markdown",
        ],
    },
    Brand {
        slug: "graduatesai",
        name: "GraduatesAI",
        tagline: "Career readiness for university leavers",
        description: "AI-powered coaching that helps graduates showcase skills, prepare for interviews and transition smoothly into work or postgraduate study.",
        logo: "/assets/logo.svg",
        external_url: None,
        features: &[
            "Personalised employability plans",
            "Mock interviews with role-specific feedback",
            "Portfolio and CV enhancement tools",
            "Graduate labour market insights",
            "Integration with careers services",
            "Accessibility support for neurodiverse users",
        ],
    },
    Brand {
        slug: "careersai",
        name: "CareersAI",
        tagline: "Workforce development for employers",
        description: "A talent intelligence platform that maps skills, pathways and training, giving HR teams privacy-safe analytics without compromising staff trust.",
        logo: "/assets/logo.svg",
        external_url: None,
        features: &[
            "Skills taxonomies aligned to UK frameworks",
            "Internal mobility and progression planning",
            "Privacy-first analytics dashboards",
            "Training recommendations and LMS exports",
            "Diversity and inclusion reporting",
            "API access for HRIS integration",
        ],
    },
    Brand {
        slug: "startupsai",
        name: "StartupsAI",
        tagline: "No-code automation for founders",
        description: "Templates, datasets and workflow builders that let start-ups launch AI services quickly while staying compliant and investor ready.",
        logo: "/assets/logo.svg",
        external_url: None,
        features: &[
            "Drag-and-drop workflow designer",
            "Marketplace of vetted UK datasets",
            "Built-in governance and audit trails",
            "Deploy to web, chat and API endpoints",
            "Usage analytics with cost controls",
            "Collaboration workspaces for teams",
        ],
    },
];

pub const SECTORS: &[Sector] = &[
    Sector {
        slug: "sector-ai-platforms",
        title: "Sector AI Platforms",
        summary: "Tailored learning, civic, and enterprise platforms that embed responsible AI across classrooms, public services, and industry.",
        details: &[
            "Our sector-focused tools are designed to meet strict governance, accessibility, and security requirements, allowing organisations to deploy AI safely and transparently. They combine curriculum-aligned assistance, domain-specific datasets, policy-aware models and robust administrative oversight so that AI augments human expertise rather than replacing it.",
            "We continue to expand our portfolio of platforms that empower education, health, public sector, and enterprise teams to operate more efficiently while maintaining compliance and trust.",
        ],
    },
    Sector {
        slug: "productivity-and-insights",
        title: "Productivity & Insights",
        summary: "Secure SaaS and automation suites that streamline operations, finance, and research without compromising on compliance.",
        details: &[
            "We develop cloud-native applications that help teams accelerate decision-making, automate routine work, extract insights from complex data, and deploy AI workflows safely at scale.",
            "Whether improving internal reporting, reducing administrative overhead, or enabling AI-assisted research, our tools are designed to enhance productivity while maintaining the highest standards of security and governance.",
        ],
    },
    Sector {
        slug: "data-and-no-code",
        title: "Data & No-Code",
        summary: "Curated British datasets and no-code tools that let teams build, experiment, and deploy AI workflows in days, not months.",
        details: &[
            "Our dataset practice focuses on ethically sourced, UK-aligned, high-quality corpora that underpin safer, more representative AI systems. Paired with our no-code builder tools, researchers, analysts, and product teams can rapidly prototype, evaluate, and deploy AI solutions without writing code.",
            "We also invest in dataset compression and model-distillation techniques, allowing capable AI systems to run on consumer-grade devices while preserving privacy and reducing costs.",
        ],
    },
];

pub const RESEARCH_FOCUS: &[&str] = &[
    "Developing compact, efficient AI models that run locally on phones, tablets, laptops and embedded devices.",
    "Reducing model size while improving accuracy, latency, safety and robustness.",
    "Exploring new architectures for edge-first, privacy-preserving AI.",
    "Building consumer and business products that bring real value to everyday workflows.",
    "Advancing dataset curation and model evaluation for safer and more representative artificial intelligence.",
    "Designing tools that allow organisations to adopt AI responsibly, even in highly regulated industries.",
];

pub const CASE_STUDIES: &[CaseStudy] = &[
    CaseStudy {
        slug: "university-edinburgh",
        institution: "University of Edinburgh",
        kind: InstitutionKind::University,
        location: "Edinburgh, Scotland",
        challenge: "Needed to improve student engagement and provide personalised learning experiences across 35,000 students.",
        solution: "Implemented AI Tutor Pro and Smart LMS Edinburgh with customised dashboards for faculty.",
        results: &[
            "40% increase in student engagement scores",
            "25% improvement in course completion rates",
            "60% reduction in administrative workload for faculty",
        ],
        testimonial: "McCaigs AI has transformed how we deliver education.",
        contact: "Dr. Sarah Mitchell, Director of Digital Learning",
    },
    CaseStudy {
        slug: "glasgow-college",
        institution: "Glasgow College",
        kind: InstitutionKind::TrainingCentre,
        location: "Glasgow, Scotland",
        challenge: "Required scalable assessment tools for vocational training programmes with varying skill levels.",
        solution: "Deployed Assessment AI Suite with adaptive testing tailored for technical subjects.",
        results: &[
            "50% reduction in assessment time",
            "90% accuracy in skill level identification",
            "35% increase in student satisfaction",
        ],
        testimonial: "Three years later, we're still receiving valuable updates.",
        contact: "James Robertson, Head of Assessment",
    },
    CaseStudy {
        slug: "royal-high-school",
        institution: "Royal High School Edinburgh",
        kind: InstitutionKind::School,
        location: "Edinburgh, Scotland",
        challenge: "Needed comprehensive analytics to track student progress and identify at-risk students early.",
        solution: "Integrated Student Analytics Pro with existing systems to give teachers real-time insight.",
        results: &[
            "45% early identification of at-risk students",
            "30% improvement in intervention success rates",
            "20% increase in overall academic performance",
        ],
        testimonial: "Their Edinburgh roots mean they truly understand Scottish education.",
        contact: "Fiona MacLeod, Deputy Head Teacher",
    },
];

pub const MODELS: &[Model] = &[
    Model {
        slug: "ai-tutor-pro",
        name: "AI Tutor Pro",
        category: ModelCategory::Tutoring,
        description: "Personalised AI tutoring that adapts to each student's learning style and pace.",
        features: &[
            "Adaptive learning algorithms",
            "Real-time progress tracking",
            "Multi-subject support",
            "Instant feedback system",
        ],
    },
    Model {
        slug: "smart-lms",
        name: "Smart LMS Edinburgh",
        category: ModelCategory::Lms,
        description: "Learning management with AI-powered insights and automation.",
        features: &[
            "AI-powered content recommendations",
            "Automated grading",
            "Student engagement analytics",
            "Integration with existing tools",
        ],
    },
    Model {
        slug: "assessment-ai",
        name: "Assessment AI Suite",
        category: ModelCategory::Assessment,
        description: "AI-driven assessment tools for comprehensive student evaluation.",
        features: &[
            "Automated essay scoring",
            "Plagiarism detection",
            "Adaptive testing",
            "Detailed analytics reports",
        ],
    },
    Model {
        slug: "student-analytics",
        name: "Student Analytics Pro",
        category: ModelCategory::Analytics,
        description: "Analytics for tracking student performance and institutional insight.",
        features: &[
            "Predictive performance modelling",
            "Early intervention alerts",
            "Institutional benchmarking",
            "Data visualisation tools",
        ],
    },
];

pub fn brand_by_slug(slug: &str) -> Option<&'static Brand> {
    BRANDS.iter().find(|b| b.slug == slug)
}

pub fn sector_by_slug(slug: &str) -> Option<&'static Sector> {
    SECTORS.iter().find(|s| s.slug == slug)
}

pub fn case_study_by_slug(slug: &str) -> Option<&'static CaseStudy> {
    CASE_STUDIES.iter().find(|c| c.slug == slug)
}

pub fn model_by_slug(slug: &str) -> Option<&'static Model> {
    MODELS.iter().find(|m| m.slug == slug)
}

pub fn legal_page_by_slug(slug: &str) -> Option<&'static LegalPage> {
    LEGAL_PAGES.iter().find(|p| p.slug == slug)
}
