//! The fixed content tree the renderer paginates.
//!
//! The document always carries the same nine blocks: title, headline,
//! contact table, summary, skills table, experience entries, projects,
//! certifications table, and the education block. The dated footer is
//! stamped by the layout, not stored here.

pub struct ResumeContent {
    pub name: &'static str,
    pub headline: &'static str,
    /// Two rows of two centered cells each.
    pub contact_rows: [[&'static str; 2]; 2],
    pub summary: &'static str,
    pub skills: &'static [SkillRow],
    pub experience: &'static [ExperienceEntry],
    pub projects: &'static [ProjectEntry],
    pub certifications: &'static [CertificationRow],
    pub education_degree: &'static str,
    pub education_detail: &'static str,
}

pub struct SkillRow {
    pub label: &'static str,
    pub detail: &'static str,
}

pub struct ExperienceEntry {
    /// Single line: role | employer | date range.
    pub heading: &'static str,
    pub bullets: &'static [&'static str],
}

pub struct ProjectEntry {
    pub heading: &'static str,
    pub description: &'static str,
}

pub struct CertificationRow {
    pub title: &'static str,
    pub issuer: &'static str,
    pub year: &'static str,
}

impl ResumeContent {
    /// The document as published on the site.
    pub fn standard() -> Self {
        ResumeContent {
            name: "ROHAN VERMA",
            headline: "Security Analyst @ Korventa | Cybersecurity, Burp Suite Expert",
            contact_rows: [
                [
                    "Email: rohan.verma1704@gmail.com",
                    "Location: Pune, Maharashtra, India",
                ],
                [
                    "LinkedIn: linkedin.com/rohan-verma04",
                    "Phone: Available upon request",
                ],
            ],
            summary: "Passionate cybersecurity professional with 3+ years of experience at \
                Korventa Systems, specializing in Burp Suite and security vulnerability \
                assessments. Expert at identifying and mitigating security risks with a deep \
                understanding of cybersecurity best practices. Recently expanded expertise \
                with 16 hours of intensive AI workshop training, combining traditional \
                security practices with modern AI-driven approaches.",
            skills: &[
                SkillRow {
                    label: "Security & Assessment:",
                    detail: "Burp Suite, Security Vulnerability Assessment, SBOM Analysis, \
                        Penetration Testing",
                },
                SkillRow {
                    label: "Security Tools:",
                    detail: "SPDX Format Analysis, CycloneDX Format Analysis, Vulnerability \
                        Scanners, SIEM Tools",
                },
                SkillRow {
                    label: "Emerging Tech:",
                    detail: "AI-Powered Security Analysis, Machine Learning in Cybersecurity, \
                        Generative AI Applications",
                },
            ],
            experience: &[
                ExperienceEntry {
                    heading: "Senior Security Analyst | Korventa Systems | July 2025 - Present",
                    bullets: &[
                        "Lead security vulnerability assessments for critical digital infrastructure",
                        "Mentor junior security analysts and provide technical guidance",
                        "Implement advanced Burp Suite configurations for enterprise applications",
                        "Collaborate with development teams to integrate security best practices",
                        "Reduced critical vulnerabilities by 40% through proactive assessment strategies",
                    ],
                },
                ExperienceEntry {
                    heading: "Security Analyst | Korventa Systems | January 2023 - July 2025",
                    bullets: &[
                        "Performed comprehensive security vulnerability assessments",
                        "Analyzed dependency graphs to identify potential security risks",
                        "Developed and maintained security testing protocols",
                        "Successfully identified and mitigated 200+ security vulnerabilities",
                        "Improved security assessment efficiency by 35% through process optimization",
                    ],
                },
                ExperienceEntry {
                    heading: "Engineer Trainee | Korventa Systems | August 2022 - January 2023",
                    bullets: &[
                        "Assisted senior analysts in security assessments and testing",
                        "Learned Burp Suite and other security testing tools",
                        "Participated in vulnerability research and analysis",
                        "Completed comprehensive cybersecurity training program",
                    ],
                },
            ],
            projects: &[
                ProjectEntry {
                    heading: "SBOM Vulnerability Analysis Tool (2024)",
                    description: "Developed a comprehensive Software Bill of Materials (SBOM) \
                        analysis tool that processes both SPDX and CycloneDX format files to \
                        identify underlying vulnerabilities in software dependencies. Enables \
                        organizations to proactively identify security risks in their software \
                        supply chain, reducing potential attack vectors by up to 60%.",
                },
                ProjectEntry {
                    heading: "Burp Suite Automation Framework (2024)",
                    description: "Created an automated security testing framework using Burp \
                        Suite to streamline web application security assessments across multiple \
                        environments. Reduced manual security testing time by 70% while \
                        increasing coverage and consistency of security assessments.",
                },
            ],
            certifications: &[
                CertificationRow {
                    title: "Vulnerability Management - Foundation",
                    issuer: "Qualys",
                    year: "2024",
                },
                CertificationRow {
                    title: "Generative AI Fundamentals",
                    issuer: "Databricks",
                    year: "2024",
                },
                CertificationRow {
                    title: "Certified Cybersecurity Technician (CCT)",
                    issuer: "EC Council",
                    year: "2023",
                },
                CertificationRow {
                    title: "AI Workshop Certification (16 hours)",
                    issuer: "Brightcourse",
                    year: "2024",
                },
            ],
            education_degree: "Bachelor of Technology - Computer Science",
            education_detail: "Vishwakarma Institute of Technology, Pune | 2018 - 2022 | GPA: 8.4/10",
        }
    }
}
