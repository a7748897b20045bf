//! Profession catalog: static keyword lists, summary suggestions, and the selectable
//! profession options. Plain data, loaded once, never mutated.

use serde::Serialize;

/// Keyword list and summary suggestions for one profession.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProfessionProfile {
    pub id: &'static str,
    pub label: &'static str,
    /// Expected industry terms, in catalog order. Found/missing lists keep this order.
    pub keywords: &'static [&'static str],
    pub summary_suggestions: &'static [&'static str],
}

/// A named group of `(id, label)` profession options.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProfessionGroup {
    pub name: &'static str,
    pub options: &'static [(&'static str, &'static str)],
}

/// Professions with a keyword catalog, in the order they are offered.
pub const PROFESSION_PROFILES: &[ProfessionProfile] = &[
    ProfessionProfile {
        id: "software-engineer",
        label: "Software Engineer",
        keywords: &[
            "JavaScript", "Python", "React", "Node.js", "Git", "API", "Database", "Agile",
            "Testing", "Cloud", "AWS", "Docker", "Kubernetes", "CI/CD", "Microservices", "SQL",
            "NoSQL", "REST", "GraphQL",
        ],
        summary_suggestions: &[
            "Experienced software engineer with 5+ years developing scalable web applications using modern technologies. Proven track record of delivering high-quality code, optimizing system performance, and collaborating effectively in agile environments.",
            "Full-stack software engineer specializing in React, Node.js, and cloud technologies. Passionate about building user-centric applications with clean, maintainable code and strong focus on performance optimization.",
            "Results-driven software engineer with expertise in microservices architecture, containerization, and CI/CD pipelines. Committed to writing efficient, testable code and mentoring junior developers.",
        ],
    },
    ProfessionProfile {
        id: "data-scientist",
        label: "Data Scientist",
        keywords: &[
            "Python", "R", "Machine Learning", "SQL", "Statistics", "Pandas", "NumPy",
            "Scikit-learn", "TensorFlow", "Deep Learning", "Data Visualization", "Tableau",
            "Power BI", "Big Data", "Hadoop", "Spark",
        ],
        summary_suggestions: &[
            "Data scientist with 4+ years of experience in machine learning, statistical analysis, and data visualization. Skilled in Python, R, and SQL with a track record of delivering actionable insights that drive business decisions.",
            "Experienced data scientist specializing in predictive modeling, deep learning, and big data analytics. Proven ability to translate complex data into clear business recommendations and implement scalable ML solutions.",
            "Results-oriented data scientist with expertise in NLP, computer vision, and time series analysis. Strong background in statistics and programming with experience deploying ML models in production environments.",
        ],
    },
    ProfessionProfile {
        id: "product-manager",
        label: "Product Manager",
        keywords: &[
            "Product Strategy", "Roadmap", "Agile", "Scrum", "Analytics", "A/B Testing",
            "User Research", "Stakeholder Management", "KPIs", "Feature Prioritization",
            "Market Research", "Go-to-Market",
        ],
        summary_suggestions: &[
            "Strategic product manager with 5+ years driving product vision and roadmap execution. Proven track record of launching successful products, conducting market research, and collaborating cross-functionally to deliver user-centered solutions.",
            "Data-driven product manager with expertise in agile methodologies, user research, and product analytics. Skilled at identifying market opportunities and translating them into innovative product features that drive growth.",
            "Customer-focused product manager experienced in B2B and B2C products. Strong analytical skills with proven ability to prioritize features, manage stakeholder expectations, and lead products from conception to launch.",
        ],
    },
    ProfessionProfile {
        id: "marketing-manager",
        label: "Marketing Manager",
        keywords: &[
            "Digital Marketing", "SEO", "SEM", "Content Marketing", "Social Media", "Analytics",
            "Campaign Management", "Brand Management", "Lead Generation", "Marketing Automation",
            "CRM", "ROI", "Conversion Optimization",
        ],
        summary_suggestions: &[
            "Creative marketing manager with 4+ years developing and executing integrated marketing campaigns. Proven track record of increasing brand awareness, generating qualified leads, and driving revenue growth across digital channels.",
            "Digital marketing manager specializing in content strategy, social media, and performance marketing. Data-driven approach with expertise in SEO, PPC, and marketing automation platforms.",
            "Strategic marketing manager with experience in brand positioning, campaign development, and market analysis. Skilled at building cross-functional relationships and delivering measurable results that exceed targets.",
        ],
    },
    ProfessionProfile {
        id: "sales-manager",
        label: "Sales Manager",
        keywords: &[
            "Sales Strategy", "Lead Generation", "CRM", "Pipeline Management", "Forecasting",
            "Account Management", "Relationship Building", "Negotiation", "Revenue Growth",
            "Team Leadership", "KPIs", "Salesforce",
        ],
        summary_suggestions: &[
            "Results-driven sales manager with 6+ years leading high-performing teams to exceed revenue targets. Proven expertise in consultative selling, relationship building, and developing strategic sales processes.",
            "Dynamic sales manager with track record of growing territories by 40%+ annually. Strong background in B2B sales, pipeline management, and coaching sales representatives to achieve peak performance.",
            "Customer-focused sales manager experienced in solution selling and account management. Skilled at identifying opportunities, negotiating contracts, and building long-term client relationships.",
        ],
    },
    ProfessionProfile {
        id: "financial-analyst",
        label: "Financial Analyst",
        keywords: &[
            "Financial Modeling", "Excel", "Financial Reporting", "Budgeting", "Forecasting",
            "Variance Analysis", "Investment Analysis", "Risk Assessment", "SQL", "Tableau",
            "Bloomberg", "Financial Planning",
        ],
        summary_suggestions: &[
            "Detail-oriented financial analyst with 3+ years of experience in financial modeling, budgeting, and variance analysis. Strong analytical skills with proven ability to provide insights that support strategic decision-making.",
            "CPA-certified financial analyst specializing in investment analysis, risk assessment, and performance reporting. Proficient in advanced Excel, SQL, and financial planning software.",
            "Results-driven financial analyst with expertise in corporate finance, financial reporting, and business intelligence. Strong communication skills with experience presenting complex financial data to stakeholders.",
        ],
    },
    ProfessionProfile {
        id: "graphic-designer",
        label: "Graphic Designer",
        keywords: &[
            "Adobe Creative Suite", "Photoshop", "Illustrator", "InDesign", "Typography",
            "Brand Identity", "Layout Design", "Color Theory", "UI/UX", "Print Design",
            "Digital Design", "Creative Direction",
        ],
        summary_suggestions: &[
            "Creative graphic designer with 5+ years creating compelling visual content for digital and print media. Expertise in Adobe Creative Suite, brand development, and translating client concepts into effective design solutions.",
            "Versatile graphic designer specializing in web design, marketing materials, and brand identity. Strong understanding of design principles, typography, and color theory with focus on user experience.",
            "Innovative graphic designer with experience in packaging design, advertising campaigns, and digital illustrations. Collaborative approach with ability to manage multiple projects while meeting tight deadlines.",
        ],
    },
    ProfessionProfile {
        id: "project-manager",
        label: "Project Manager",
        keywords: &[
            "Project Management", "PMP", "Agile", "Scrum", "Risk Management",
            "Stakeholder Management", "Budget Management", "Timeline Management",
            "Process Improvement", "Team Leadership", "JIRA", "MS Project",
        ],
        summary_suggestions: &[
            "Certified PMP project manager with 6+ years successfully delivering complex projects on time and within budget. Expertise in agile and waterfall methodologies, risk management, and stakeholder communication.",
            "Strategic project manager with proven track record of leading cross-functional teams and driving process improvements. Strong analytical skills with experience in project portfolio management and resource optimization.",
            "Results-oriented project manager specializing in technology implementations and organizational change management. Skilled at facilitating collaboration and ensuring project objectives align with business goals.",
        ],
    },
    ProfessionProfile {
        id: "hr-manager",
        label: "HR Manager",
        keywords: &[
            "Talent Acquisition", "Employee Relations", "Performance Management", "Compensation",
            "Benefits", "Training Development", "HR Analytics", "Compliance", "HRIS",
            "Organizational Development", "Change Management",
        ],
        summary_suggestions: &[
            "Strategic HR manager with 7+ years developing talent acquisition, employee engagement, and performance management programs. Proven track record of reducing turnover and implementing HR best practices.",
            "People-focused HR manager with expertise in organizational development, training programs, and employee relations. Strong communication skills with experience supporting company culture and change initiatives.",
            "Compliance-oriented HR manager with deep knowledge of employment law, benefits administration, and HRIS systems. Skilled at developing policies and procedures that support both employees and business objectives.",
        ],
    },
    ProfessionProfile {
        id: "business-analyst",
        label: "Business Analyst",
        keywords: &[
            "Business Analysis", "Requirements Gathering", "Process Mapping", "Data Analysis",
            "SQL", "Stakeholder Management", "Documentation", "Systems Analysis",
            "Project Management", "Process Improvement", "Visio", "JIRA",
        ],
        summary_suggestions: &[
            "Analytical business analyst with 4+ years translating business requirements into technical solutions. Expertise in process mapping, data analysis, and stakeholder management with strong problem-solving skills.",
            "Detail-oriented business analyst specializing in systems analysis, requirements gathering, and process improvement. Proven ability to bridge communication between business users and technical teams.",
            "Strategic business analyst with experience in project management, data visualization, and change management. Strong analytical mindset with focus on delivering solutions that drive operational efficiency.",
        ],
    },
];

/// Every profession the wizard offers, grouped as presented to the user.
pub const PROFESSION_GROUPS: &[ProfessionGroup] = &[
    ProfessionGroup {
        name: "Technology & Engineering",
        options: &[
            ("software-engineer", "Software Engineer"),
            ("data-scientist", "Data Scientist"),
            ("web-developer", "Web Developer"),
            ("mobile-developer", "Mobile Developer"),
            ("devops-engineer", "DevOps Engineer"),
            ("cybersecurity-analyst", "Cybersecurity Analyst"),
            ("cloud-architect", "Cloud Architect"),
            ("ai-engineer", "AI/ML Engineer"),
            ("systems-administrator", "Systems Administrator"),
            ("network-engineer", "Network Engineer"),
            ("qa-engineer", "QA Engineer"),
            ("technical-writer", "Technical Writer"),
        ],
    },
    ProfessionGroup {
        name: "Business & Management",
        options: &[
            ("product-manager", "Product Manager"),
            ("project-manager", "Project Manager"),
            ("business-analyst", "Business Analyst"),
            ("operations-manager", "Operations Manager"),
            ("general-manager", "General Manager"),
            ("ceo", "CEO/Executive"),
            ("consultant", "Management Consultant"),
            ("strategy-manager", "Strategy Manager"),
            ("program-manager", "Program Manager"),
        ],
    },
    ProfessionGroup {
        name: "Marketing & Sales",
        options: &[
            ("marketing-manager", "Marketing Manager"),
            ("digital-marketer", "Digital Marketing Specialist"),
            ("content-marketer", "Content Marketing Manager"),
            ("seo-specialist", "SEO Specialist"),
            ("social-media-manager", "Social Media Manager"),
            ("sales-manager", "Sales Manager"),
            ("sales-representative", "Sales Representative"),
            ("account-manager", "Account Manager"),
            ("business-development", "Business Development"),
            ("brand-manager", "Brand Manager"),
            ("public-relations", "Public Relations Specialist"),
        ],
    },
    ProfessionGroup {
        name: "Finance & Accounting",
        options: &[
            ("financial-analyst", "Financial Analyst"),
            ("accountant", "Accountant"),
            ("investment-banker", "Investment Banker"),
            ("financial-advisor", "Financial Advisor"),
            ("treasury-analyst", "Treasury Analyst"),
            ("risk-analyst", "Risk Analyst"),
            ("auditor", "Auditor"),
            ("tax-specialist", "Tax Specialist"),
            ("budget-analyst", "Budget Analyst"),
            ("credit-analyst", "Credit Analyst"),
        ],
    },
    ProfessionGroup {
        name: "Healthcare & Medical",
        options: &[
            ("physician", "Physician"),
            ("nurse", "Nurse"),
            ("pharmacist", "Pharmacist"),
            ("physical-therapist", "Physical Therapist"),
            ("medical-technician", "Medical Technician"),
            ("healthcare-administrator", "Healthcare Administrator"),
            ("medical-researcher", "Medical Researcher"),
            ("dentist", "Dentist"),
            ("veterinarian", "Veterinarian"),
            ("psychologist", "Psychologist"),
        ],
    },
    ProfessionGroup {
        name: "Education",
        options: &[
            ("teacher", "Teacher"),
            ("professor", "Professor"),
            ("principal", "Principal/Administrator"),
            ("curriculum-developer", "Curriculum Developer"),
            ("education-coordinator", "Education Coordinator"),
            ("librarian", "Librarian"),
            ("student-counselor", "Student Counselor"),
            ("training-specialist", "Training Specialist"),
        ],
    },
    ProfessionGroup {
        name: "Creative & Design",
        options: &[
            ("graphic-designer", "Graphic Designer"),
            ("ui-ux-designer", "UI/UX Designer"),
            ("web-designer", "Web Designer"),
            ("interior-designer", "Interior Designer"),
            ("artist", "Artist"),
            ("photographer", "Photographer"),
            ("videographer", "Videographer"),
            ("animator", "Animator"),
            ("creative-director", "Creative Director"),
            ("copywriter", "Copywriter"),
        ],
    },
    ProfessionGroup {
        name: "Human Resources",
        options: &[
            ("hr-manager", "HR Manager"),
            ("recruiter", "Recruiter"),
            ("hr-generalist", "HR Generalist"),
            ("compensation-analyst", "Compensation Analyst"),
            ("employee-relations", "Employee Relations Specialist"),
            ("training-manager", "Training Manager"),
            ("talent-acquisition", "Talent Acquisition Specialist"),
        ],
    },
    ProfessionGroup {
        name: "Legal",
        options: &[
            ("lawyer", "Lawyer"),
            ("paralegal", "Paralegal"),
            ("legal-assistant", "Legal Assistant"),
            ("compliance-officer", "Compliance Officer"),
            ("contract-specialist", "Contract Specialist"),
            ("legal-counsel", "Legal Counsel"),
        ],
    },
    ProfessionGroup {
        name: "Manufacturing & Operations",
        options: &[
            ("manufacturing-engineer", "Manufacturing Engineer"),
            ("quality-assurance", "Quality Assurance Specialist"),
            ("production-manager", "Production Manager"),
            ("supply-chain-manager", "Supply Chain Manager"),
            ("logistics-coordinator", "Logistics Coordinator"),
            ("warehouse-manager", "Warehouse Manager"),
            ("procurement-specialist", "Procurement Specialist"),
        ],
    },
    ProfessionGroup {
        name: "Customer Service & Support",
        options: &[
            ("customer-service-representative", "Customer Service Representative"),
            ("customer-success-manager", "Customer Success Manager"),
            ("support-specialist", "Support Specialist"),
            ("call-center-manager", "Call Center Manager"),
            ("client-relations", "Client Relations Manager"),
        ],
    },
    ProfessionGroup {
        name: "Real Estate & Construction",
        options: &[
            ("real-estate-agent", "Real Estate Agent"),
            ("property-manager", "Property Manager"),
            ("construction-manager", "Construction Manager"),
            ("architect", "Architect"),
            ("civil-engineer", "Civil Engineer"),
            ("electrical-engineer", "Electrical Engineer"),
            ("mechanical-engineer", "Mechanical Engineer"),
        ],
    },
    ProfessionGroup {
        name: "Media & Communications",
        options: &[
            ("journalist", "Journalist"),
            ("editor", "Editor"),
            ("communications-specialist", "Communications Specialist"),
            ("broadcast-technician", "Broadcast Technician"),
            ("media-producer", "Media Producer"),
        ],
    },
    ProfessionGroup {
        name: "Research & Science",
        options: &[
            ("research-scientist", "Research Scientist"),
            ("lab-technician", "Lab Technician"),
            ("environmental-scientist", "Environmental Scientist"),
            ("biomedical-researcher", "Biomedical Researcher"),
            ("chemist", "Chemist"),
            ("physicist", "Physicist"),
        ],
    },
    ProfessionGroup {
        name: "Hospitality & Tourism",
        options: &[
            ("hotel-manager", "Hotel Manager"),
            ("event-planner", "Event Planner"),
            ("travel-agent", "Travel Agent"),
            ("restaurant-manager", "Restaurant Manager"),
            ("chef", "Chef"),
            ("concierge", "Concierge"),
        ],
    },
    ProfessionGroup {
        name: "Transportation & Logistics",
        options: &[
            ("pilot", "Pilot"),
            ("truck-driver", "Truck Driver"),
            ("logistics-manager", "Logistics Manager"),
            ("fleet-manager", "Fleet Manager"),
            ("transportation-coordinator", "Transportation Coordinator"),
        ],
    },
    ProfessionGroup {
        name: "Non-Profit & Social Services",
        options: &[
            ("social-worker", "Social Worker"),
            ("program-coordinator", "Program Coordinator"),
            ("fundraising-coordinator", "Fundraising Coordinator"),
            ("community-outreach", "Community Outreach Specialist"),
            ("case-manager", "Case Manager"),
        ],
    },
    ProfessionGroup {
        name: "Government & Public Service",
        options: &[
            ("policy-analyst", "Policy Analyst"),
            ("government-administrator", "Government Administrator"),
            ("public-affairs", "Public Affairs Specialist"),
            ("urban-planner", "Urban Planner"),
            ("law-enforcement", "Law Enforcement Officer"),
        ],
    },
    ProfessionGroup {
        name: "Other",
        options: &[
            ("other", "Other"),
        ],
    },
];

/// Resolves a profession id to its profile. Unknown or empty ids resolve to `None`.
pub fn lookup(profession: &str) -> Option<&'static ProfessionProfile> {
    PROFESSION_PROFILES.iter().find(|p| p.id == profession)
}

/// Catalog keywords for a profession; empty for unknown professions.
pub fn keywords_for(profession: &str) -> &'static [&'static str] {
    lookup(profession).map(|p| p.keywords).unwrap_or(&[])
}

/// Summary suggestions for a profession; empty for unknown professions.
pub fn suggestions_for(profession: &str) -> &'static [&'static str] {
    lookup(profession)
        .map(|p| p.summary_suggestions)
        .unwrap_or(&[])
}

/// Display label for any selectable profession id.
pub fn label_for(profession: &str) -> Option<&'static str> {
    PROFESSION_GROUPS
        .iter()
        .flat_map(|g| g.options.iter())
        .find(|(id, _)| *id == profession)
        .map(|(_, label)| *label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_software_engineer_keywords_in_catalog_order() {
        let keywords = keywords_for("software-engineer");
        assert_eq!(keywords.len(), 19);
        assert_eq!(keywords[0], "JavaScript");
        assert_eq!(keywords[2], "React");
        assert_eq!(keywords[18], "GraphQL");
    }

    #[test]
    fn test_unknown_profession_has_no_keywords() {
        assert!(keywords_for("astronaut").is_empty());
        assert!(keywords_for("").is_empty());
        assert!(lookup("other").is_none());
    }

    #[test]
    fn test_every_profile_has_three_suggestions() {
        for profile in PROFESSION_PROFILES {
            assert_eq!(
                profile.summary_suggestions.len(),
                3,
                "{} should have 3 suggestions",
                profile.id
            );
            assert!(!profile.keywords.is_empty());
        }
    }

    #[test]
    fn test_unknown_profession_has_no_suggestions() {
        assert!(suggestions_for("chef").is_empty());
    }

    #[test]
    fn test_every_profile_is_a_selectable_option() {
        for profile in PROFESSION_PROFILES {
            assert_eq!(label_for(profile.id), Some(profile.label));
        }
    }

    #[test]
    fn test_option_ids_are_unique() {
        let mut seen = HashSet::new();
        for (id, _) in PROFESSION_GROUPS.iter().flat_map(|g| g.options.iter()) {
            assert!(seen.insert(*id), "duplicate profession id {id}");
        }
        assert_eq!(label_for("ai-engineer"), Some("AI/ML Engineer"));
        assert_eq!(label_for("nonexistent"), None);
    }
}
