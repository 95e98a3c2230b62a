//! Static copy rendered by the sections. Read-only; the engine never sees it.

#[derive(Debug, PartialEq)]
pub struct ServiceCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub accent: (&'static str, &'static str),
}

pub const SERVICES: &[ServiceCard] = &[
    ServiceCard {
        icon: "</>",
        title: "Custom Software Development",
        description: "Tailored solutions designed to address your unique business challenges and drive growth.",
        accent: ("rgba(59, 130, 246, 0.2)", "rgba(168, 85, 247, 0.2)"),
    },
    ServiceCard {
        icon: "☁",
        title: "Cloud Infrastructure",
        description: "Scalable and secure cloud solutions that optimize performance and reduce operational costs.",
        accent: ("rgba(16, 185, 129, 0.2)", "rgba(20, 184, 166, 0.2)"),
    },
    ServiceCard {
        icon: "🛡",
        title: "Cybersecurity Services",
        description: "Comprehensive security solutions that protect your data and systems from evolving threats.",
        accent: ("rgba(239, 68, 68, 0.2)", "rgba(249, 115, 22, 0.2)"),
    },
    ServiceCard {
        icon: "🖥",
        title: "UI/UX Design",
        description: "Intuitive and engaging user experiences that connect with your audience and drive conversions.",
        accent: ("rgba(99, 102, 241, 0.2)", "rgba(139, 92, 246, 0.2)"),
    },
    ServiceCard {
        icon: "⚡",
        title: "AI & Machine Learning",
        description: "Advanced AI solutions that provide intelligent insights and automate complex processes.",
        accent: ("rgba(234, 179, 8, 0.2)", "rgba(245, 158, 11, 0.2)"),
    },
    ServiceCard {
        icon: "🚀",
        title: "Digital Transformation",
        description: "Strategic guidance and implementation to modernize your business operations and capabilities.",
        accent: ("rgba(236, 72, 153, 0.2)", "rgba(244, 63, 94, 0.2)"),
    },
];

#[derive(Debug, PartialEq)]
pub struct TechService {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub features: &'static [(&'static str, &'static str)],
}

pub const TECH_SERVICES: &[TechService] = &[
    TechService {
        id: "web",
        title: "Web Development",
        description: "Building responsive, scalable web applications with modern frameworks and cutting-edge technologies.",
        icon: "💻",
        color: "#2563eb",
        features: &[
            ("Frontend Development", "⚛"),
            ("Backend Solutions", "🗄"),
            ("E-commerce Platforms", "🛒"),
        ],
    },
    TechService {
        id: "app",
        title: "App Development",
        description: "Creating native and cross-platform mobile experiences for iOS and Android devices.",
        icon: "📱",
        color: "#059669",
        features: &[
            ("iOS Development", "🍎"),
            ("Android Development", "🤖"),
            ("Cross-Platform Apps", "⚛"),
        ],
    },
    TechService {
        id: "it",
        title: "IT Services",
        description: "Comprehensive IT solutions including cloud infrastructure, security, and database management.",
        icon: "🗄",
        color: "#9333ea",
        features: &[
            ("Cloud Infrastructure", "☁"),
            ("Database Management", "🛢"),
            ("Cybersecurity", "🛡"),
        ],
    },
];

#[derive(Debug, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub image_url: Option<&'static str>,
    pub gradient: (&'static str, &'static str),
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "QuantumLeap Analytics Platform",
        description: "Developed a cloud-native data visualization tool helping businesses unlock insights with real-time dashboards and predictive modeling.",
        tags: &["React", "Python (Flask)", "AWS", "Data Viz", "Machine Learning"],
        image_url: Some("https://images.unsplash.com/photo-1551288049-bebda4e38f71?auto=format&fit=crop&w=1740&q=80"),
        gradient: ("rgba(30, 58, 138, 0.7)", "rgba(7, 89, 133, 0.7)"),
    },
    Project {
        title: "Aura E-commerce Ecosystem",
        description: "Built a scalable microservices-based e-commerce platform with a focus on performance, security, and seamless user experience.",
        tags: &["Next.js", "Node.js", "Kubernetes", "Microservices", "Stripe API"],
        image_url: Some("https://plus.unsplash.com/premium_photo-1683288295841-782fa47e4770?w=900&auto=format&fit=crop&q=60"),
        gradient: ("rgba(88, 28, 135, 0.7)", "rgba(55, 48, 163, 0.7)"),
    },
    Project {
        title: "Synapse AI - Medical Imaging",
        description: "AI-driven solution enhancing diagnostic accuracy by analyzing medical images using advanced deep learning models.",
        tags: &["Python (PyTorch)", "FastAPI", "Google Cloud", "AI/ML", "Healthcare"],
        image_url: Some("https://images.unsplash.com/photo-1581091226825-a6a2a5aee158?auto=format&fit=crop&w=1740&q=80"),
        gradient: ("rgba(6, 78, 59, 0.7)", "rgba(22, 101, 52, 0.7)"),
    },
    Project {
        title: "ConnectSphere Collaboration Hub",
        description: "A real-time SaaS platform enabling remote teams to collaborate effectively with features like shared workspaces and video conferencing.",
        tags: &["Vue.js", "Go", "WebSockets", "SaaS", "UI/UX Design"],
        image_url: None,
        gradient: ("rgba(136, 19, 55, 0.7)", "rgba(157, 23, 77, 0.7)"),
    },
];

#[derive(Debug, PartialEq)]
pub struct ApproachStep {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const APPROACH_STEPS: &[ApproachStep] = &[
    ApproachStep {
        number: "01",
        title: "Discovery",
        description: "We begin by deeply understanding your vision, goals, challenges, and user needs through collaborative workshops and research.",
        icon: "🧭",
    },
    ApproachStep {
        number: "02",
        title: "Strategy & Design",
        description: "A tailored roadmap is crafted, defining the architecture, tech stack, and UX/UI design prototypes for optimal results.",
        icon: "📐",
    },
    ApproachStep {
        number: "03",
        title: "Agile Implementation",
        description: "Our team executes with precision, using iterative development cycles for flexibility, transparency, and continuous feedback.",
        icon: "🧩",
    },
    ApproachStep {
        number: "04",
        title: "Launch & Evolution",
        description: "We ensure a smooth deployment and provide ongoing support, monitoring, and optimization for sustained growth.",
        icon: "📈",
    },
];

pub struct Contact {
    pub email: &'static str,
    pub phone: &'static str,
    pub phone_href: &'static str,
    pub address: &'static str,
}

pub const CONTACT: Contact = Contact {
    email: "contact@futurecore.com",
    phone: "+1 (555) 123-4567",
    phone_href: "tel:+15551234567",
    address: "123 Innovation Drive, Tech Center, CA 90210",
};

#[derive(Debug, PartialEq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
}

pub const TEAM: &[TeamMember] = &[
    TeamMember { name: "Alex Morgan", role: "CEO & Founder" },
    TeamMember { name: "Jamie Chen", role: "CTO" },
    TeamMember { name: "Taylor Reed", role: "Head of Design" },
    TeamMember { name: "Jordan Smith", role: "Lead Developer" },
];

#[derive(Debug, PartialEq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: &[Faq] = &[
    Faq {
        question: "What technology services does FutureCore specialize in?",
        answer: "FutureCore specializes in custom software development, cloud infrastructure management, comprehensive cybersecurity solutions, and implementing AI & machine learning systems. Our team brings extensive experience across various industries to deliver tailored technology solutions that drive business growth.",
    },
    Faq {
        question: "How does your software development process work?",
        answer: "Our software development process follows an agile methodology with six key phases: discovery and planning, design, development, testing, deployment, and ongoing maintenance. We maintain transparent communication throughout, with regular updates and demonstrations to ensure the final product aligns perfectly with your vision.",
    },
    Faq {
        question: "What industries do you typically work with?",
        answer: "We serve clients across diverse sectors including finance, healthcare, retail, manufacturing, and education. Our solutions are customized to address industry-specific challenges while leveraging our technical expertise to create innovative solutions regardless of the sector.",
    },
    Faq {
        question: "How do you approach data security and privacy?",
        answer: "Security is fundamental to everything we build. We implement industry-leading encryption protocols, conduct regular security audits, and follow best practices for secure coding. All our solutions comply with relevant regulations including GDPR, HIPAA, and other data protection standards applicable to your industry.",
    },
    Faq {
        question: "What is the typical timeline for project completion?",
        answer: "Project timelines vary based on scope and complexity. Small to medium projects typically take 2-4 months, while enterprise-scale solutions may require 6-12 months. During our initial consultation, we'll provide a detailed timeline estimate based on your specific requirements and priorities.",
    },
];

/// Case-insensitive match on question or answer. A blank query keeps everything.
pub fn filter_faqs(query: &str) -> Vec<&'static Faq> {
    let needle = query.trim().to_lowercase();
    FAQS.iter()
        .filter(|faq| {
            needle.is_empty()
                || faq.question.to_lowercase().contains(&needle)
                || faq.answer.to_lowercase().contains(&needle)
        })
        .collect()
}

#[derive(Debug, PartialEq)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
}

pub const ALL_CATEGORY: &str = "all";

pub const CATEGORIES: &[Category] = &[
    Category { id: ALL_CATEGORY, name: "All Services" },
    Category { id: "cloud", name: "Cloud Solutions" },
    Category { id: "development", name: "Development" },
    Category { id: "security", name: "Security" },
    Category { id: "consulting", name: "Consulting" },
];

#[derive(Debug, PartialEq)]
pub struct CatalogService {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub category: &'static str,
    pub features: &'static [&'static str],
}

pub const SERVICE_CATALOG: &[CatalogService] = &[
    CatalogService {
        title: "Cloud Infrastructure",
        description: "Scalable and secure cloud infrastructure solutions tailored to your business needs.",
        icon: "🗄",
        category: "cloud",
        features: &["Auto-scaling resources", "Global distribution", "High availability", "Disaster recovery"],
    },
    CatalogService {
        title: "Database Management",
        description: "Comprehensive database solutions for efficient data storage and retrieval.",
        icon: "🛢",
        category: "cloud",
        features: &["SQL & NoSQL solutions", "Automated backups", "Performance optimization", "Data migration"],
    },
    CatalogService {
        title: "Web Development",
        description: "Custom websites and web applications built with cutting-edge technologies.",
        icon: "🌐",
        category: "development",
        features: &["Responsive design", "SEO optimization", "Performance tuning", "Content management"],
    },
    CatalogService {
        title: "Mobile Applications",
        description: "Native and cross-platform mobile applications for iOS and Android.",
        icon: "📱",
        category: "development",
        features: &["Cross-platform solutions", "Native development", "App store optimization", "Backend integration"],
    },
    CatalogService {
        title: "Cybersecurity",
        description: "Comprehensive security solutions to protect your business from digital threats.",
        icon: "🛡",
        category: "security",
        features: &["Threat detection", "Penetration testing", "Security audits", "Compliance solutions"],
    },
    CatalogService {
        title: "Custom Software",
        description: "Bespoke software solutions designed to address your unique business challenges.",
        icon: "</>",
        category: "development",
        features: &["Enterprise applications", "Integration solutions", "Legacy system modernization", "Process automation"],
    },
    CatalogService {
        title: "IT Consulting",
        description: "Strategic technology advisory services to drive business growth and innovation.",
        icon: "⚙",
        category: "consulting",
        features: &["Technology roadmapping", "Digital transformation", "IT strategy", "Vendor selection"],
    },
    CatalogService {
        title: "Data Analytics",
        description: "Turn your data into actionable insights with our advanced analytics solutions.",
        icon: "📊",
        category: "consulting",
        features: &["Business intelligence", "Predictive analytics", "Data visualization", "Machine learning"],
    },
];

pub fn services_in(category: &str) -> Vec<&'static CatalogService> {
    SERVICE_CATALOG
        .iter()
        .filter(|s| category == ALL_CATEGORY || s.category == category)
        .collect()
}

#[derive(Debug, PartialEq)]
pub struct Benefit {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct FeaturedService {
    pub title: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub benefits: &'static [Benefit],
}

pub const FEATURED: FeaturedService = FeaturedService {
    title: "Enterprise Cloud Solutions",
    description: "Transform your business with our comprehensive enterprise cloud solutions. We provide end-to-end services from migration planning to ongoing optimization, ensuring a seamless transition to the cloud with minimal disruption to your operations.",
    long_description: "Our enterprise cloud solutions are designed to help businesses of all sizes leverage the power of cloud computing. We understand that each organization has unique requirements, which is why our approach is consultative and tailored to your specific needs. From initial assessment and strategy development to implementation and ongoing management, our team of certified experts will guide you through every step of your cloud journey.",
    benefits: &[
        Benefit {
            title: "Scalability",
            description: "Easily scale your resources up or down based on demand, ensuring optimal performance without overspending.",
        },
        Benefit {
            title: "Cost Optimization",
            description: "Reduce capital expenditure and benefit from a pay-as-you-go model that aligns with your business needs.",
        },
        Benefit {
            title: "Enhanced Security",
            description: "Protect your critical data with advanced security measures, compliance frameworks, and regular audits.",
        },
        Benefit {
            title: "Business Continuity",
            description: "Ensure your operations continue without interruption with robust disaster recovery and backup solutions.",
        },
    ],
};

#[derive(Debug, PartialEq)]
pub struct Testimonial {
    pub text: &'static str,
    pub author: &'static str,
    pub position: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        text: "Working with this team transformed our IT infrastructure. Their cloud solutions have significantly improved our operational efficiency.",
        author: "Sarah Johnson",
        position: "CTO, TechCorp",
    },
    Testimonial {
        text: "The cybersecurity services provided have given us peace of mind knowing our sensitive data is protected against evolving threats.",
        author: "Michael Chen",
        position: "Security Director, DataSafe Inc.",
    },
    Testimonial {
        text: "Their custom software development team delivered a solution that perfectly addressed our unique business requirements.",
        author: "Alex Rivera",
        position: "Operations Manager, InnovateCo",
    },
];

/// Title + body blocks used on the About page.
#[derive(Debug, PartialEq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const ABOUT_PILLARS: &[Feature] = &[
    Feature {
        icon: "",
        title: "Who We Are",
        description: "Future Core Innovations is a leading technology company focused on innovation. Founded in 2015, we've grown from a small team of passionate tech enthusiasts to a global force driving digital transformation across industries. Our team of experts combines technical brilliance with creative thinking to deliver solutions that not only meet current needs but anticipate future challenges.",
    },
    Feature {
        icon: "",
        title: "Our Mission",
        description: "At Future Core Innovations, our mission is to push the boundaries of what's possible through innovative technology solutions. We are committed to fostering a culture of creativity and excellence, ensuring that we not only meet but exceed our clients' expectations. Our goal is to drive progress and transform industries, creating a better, more connected world for everyone.",
    },
    Feature {
        icon: "",
        title: "Our Approach",
        description: "We take a holistic approach to innovation. We understand that true progress requires more than just cutting-edge technology; it demands a deep understanding of our clients' needs and a collaborative spirit. By combining strategic insight with technical expertise, we deliver tailored solutions that not only address immediate challenges but also pave the way for long-term success.",
    },
];

pub const CORE_SERVICES: &[Feature] = &[
    Feature {
        icon: "💻",
        title: "Custom Software Development",
        description: "Bespoke software solutions designed to address your unique business challenges, from enterprise applications to specialized tools that streamline operations.",
    },
    Feature {
        icon: "🌐",
        title: "Cloud Solutions",
        description: "Comprehensive cloud transformation services including migration, optimization, and management for enhanced scalability and cost-efficiency.",
    },
    Feature {
        icon: "📱",
        title: "Mobile App Development",
        description: "Cross-platform and native mobile applications that deliver exceptional user experiences and drive engagement across iOS and Android devices.",
    },
    Feature {
        icon: "🤖",
        title: "AI & Machine Learning",
        description: "Intelligent solutions that leverage cutting-edge AI technologies to analyze data, automate processes, and provide valuable insights.",
    },
    Feature {
        icon: "🔒",
        title: "Cybersecurity Services",
        description: "Comprehensive security solutions to protect your digital assets, prevent breaches, and ensure regulatory compliance in an evolving threat landscape.",
    },
    Feature {
        icon: "📊",
        title: "Data Analytics & BI",
        description: "Transform raw data into actionable intelligence with our advanced analytics solutions that drive informed decision-making and business growth.",
    },
];

pub const REASONS: &[Feature] = &[
    Feature {
        icon: "🌍",
        title: "Worldwide Experience",
        description: "Our global expertise enables us to guide you through international challenges and opportunities with confidence, leveraging our deep market knowledge.",
    },
    Feature {
        icon: "🚀",
        title: "Incentive for Results",
        description: "We focus on achieving measurable outcomes, ensuring our objectives align with yours to drive exceptional performance and success at every stage.",
    },
    Feature {
        icon: "⭐",
        title: "High-Quality Results",
        description: "Our team delivers outstanding results, utilizing cutting-edge technologies and best practices to ensure every project meets the highest standards.",
    },
    Feature {
        icon: "⚡",
        title: "Agile Methodology",
        description: "We embrace agile practices that allow for flexibility, rapid iteration, and continuous improvement throughout the development lifecycle.",
    },
    Feature {
        icon: "🤝",
        title: "Strategic Partnership",
        description: "We don't just deliver projects; we build lasting relationships based on trust, transparency, and a shared vision for success.",
    },
    Feature {
        icon: "🔄",
        title: "Continuous Innovation",
        description: "Our commitment to ongoing research and development ensures we're always at the cutting edge of technology trends and solutions.",
    },
];

/// In-page anchors shown in the navigation bar.
pub const NAV_ANCHORS: &[(&str, &str)] = &[
    ("Services", "/#services"),
    ("Work", "/#work"),
    ("Approach", "/#approach"),
    ("Team", "/#team"),
];

pub const FOOTER_SERVICES: &[&str] = &[
    "Custom Software Dev",
    "Cloud Solutions",
    "Cybersecurity",
    "AI & ML Integration",
];

pub const FOOTER_COMPANY: &[&str] = &["About Us", "Careers", "Blog", "Contact"];

pub const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("LinkedIn", "https://www.linkedin.com"),
    ("Twitter", "https://twitter.com"),
    ("GitHub", "https://github.com"),
    ("Dribbble", "https://dribbble.com"),
];

pub const LEGAL_LINKS: &[&str] = &["Privacy Policy", "Terms of Service", "Cookies Policy"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_query_keeps_every_faq() {
        assert_eq!(filter_faqs("").len(), FAQS.len());
        assert_eq!(filter_faqs("   ").len(), FAQS.len());
    }

    #[test]
    fn faq_search_is_case_insensitive_and_checks_answers() {
        let hits = filter_faqs("GDPR");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].question, "How do you approach data security and privacy?");

        let hits = filter_faqs("timeline");
        assert_eq!(hits.len(), 1);
        assert!(filter_faqs("quantum computing").is_empty());
    }

    #[test]
    fn category_filter() {
        assert_eq!(services_in(ALL_CATEGORY).len(), SERVICE_CATALOG.len());
        let dev: Vec<_> = services_in("development").iter().map(|s| s.title).collect();
        assert_eq!(dev, vec!["Web Development", "Mobile Applications", "Custom Software"]);
        assert!(services_in("unknown").is_empty());
    }

    #[test]
    fn every_catalog_category_has_a_tab() {
        for service in SERVICE_CATALOG {
            assert!(CATEGORIES.iter().any(|c| c.id == service.category), "{}", service.title);
        }
    }

    #[test]
    fn tech_service_ids_are_unique() {
        let mut ids: Vec<_> = TECH_SERVICES.iter().map(|s| s.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), TECH_SERVICES.len());
    }
}
