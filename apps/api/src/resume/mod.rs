//! Resume rendering — LaTeX template substitution and PDF compilation.
//!
//! Every user-supplied value is escaped before substitution; list sections
//! are omitted entirely when empty so the template never emits an empty
//! itemize environment.

pub mod handlers;
pub mod keywords;
pub mod render;

use std::collections::BTreeMap;

use serde::Deserialize;

const TEMPLATE: &str = include_str!("template.tex");

#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub title: String,
    pub link: Option<String>,
    #[serde(default)]
    pub points: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Experience {
    pub company: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Education {
    pub year: String,
    pub institution: String,
    pub score: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResumeData {
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
    /// Category name → skills, e.g. "languages" → ["Python", "Rust"].
    #[serde(default)]
    pub tech: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
}

/// Escapes LaTeX special characters in a user-supplied string.
pub fn escape_latex(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str(r"\&"),
            '%' => out.push_str(r"\%"),
            '$' => out.push_str(r"\$"),
            '#' => out.push_str(r"\#"),
            '_' => out.push_str(r"\_"),
            '{' => out.push_str(r"\{"),
            '}' => out.push_str(r"\}"),
            '~' => out.push_str(r"\textasciitilde{}"),
            '^' => out.push_str(r"\textasciicircum{}"),
            '\\' => out.push_str(r"\textbackslash{}"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders the LaTeX source for a resume. Pure string work; compilation
/// happens in `render::compile_pdf`.
pub fn render_resume(data: &ResumeData) -> String {
    TEMPLATE
        .replace("{{NAME}}", &escape_latex(&data.name))
        .replace("{{ROLE}}", &escape_latex(&data.role))
        .replace("{{EMAIL}}", &escape_latex(&data.email))
        .replace("{{PHONE}}", &escape_latex(&data.phone))
        .replace("{{LINKEDIN}}", &escape_latex(&data.linkedin))
        .replace("{{GITHUB}}", &escape_latex(&data.github))
        .replace("{{TECH_SECTION}}", &tech_section(&data.tech))
        .replace(
            "{{ACHIEVEMENTS_SECTION}}",
            &achievements_section(&data.achievements),
        )
        .replace("{{PROJECTS_SECTION}}", &projects_section(&data.projects))
        .replace(
            "{{EXPERIENCE_SECTION}}",
            &experience_section(&data.experience),
        )
        .replace("{{EDUCATION_SECTION}}", &education_section(&data.education))
}

fn tech_section(tech: &BTreeMap<String, Vec<String>>) -> String {
    if tech.is_empty() {
        return String::new();
    }
    let mut out = String::from("\\section*{Technical Skills}\n\\begin{itemize}\n");
    for (category, skills) in tech {
        let skills = skills
            .iter()
            .map(|s| escape_latex(s))
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!(
            "    \\item \\textbf{{{}}}: {}\n",
            escape_latex(category),
            skills
        ));
    }
    out.push_str("\\end{itemize}\n");
    out
}

fn achievements_section(achievements: &[String]) -> String {
    if achievements.is_empty() {
        return String::new();
    }
    let mut out = String::from("\\section*{Achievements}\n\\begin{itemize}\n");
    for achievement in achievements {
        out.push_str(&format!("    \\item {}\n", escape_latex(achievement)));
    }
    out.push_str("\\end{itemize}\n");
    out
}

fn projects_section(projects: &[Project]) -> String {
    if projects.is_empty() {
        return String::new();
    }
    let mut out = String::from("\\section*{Projects}\n");
    for project in projects {
        out.push_str(&format!("\\subsection*{{{}}}\n", escape_latex(&project.title)));
        if let Some(link) = &project.link {
            out.push_str(&format!("\\texttt{{{}}}\n", escape_latex(link)));
        }
        if !project.points.is_empty() {
            out.push_str("\\begin{itemize}\n");
            for point in &project.points {
                out.push_str(&format!("    \\item {}\n", escape_latex(point)));
            }
            out.push_str("\\end{itemize}\n");
        }
    }
    out
}

fn experience_section(experience: &[Experience]) -> String {
    if experience.is_empty() {
        return String::new();
    }
    let mut out = String::from("\\section*{Experience}\n\\begin{itemize}\n");
    for entry in experience {
        out.push_str(&format!(
            "    \\item \\textbf{{{}}}: {}\n",
            escape_latex(&entry.company),
            escape_latex(&entry.description)
        ));
    }
    out.push_str("\\end{itemize}\n");
    out
}

fn education_section(education: &[Education]) -> String {
    if education.is_empty() {
        return String::new();
    }
    let mut out = String::from("\\section*{Education}\n\\begin{itemize}\n");
    for entry in education {
        out.push_str(&format!(
            "    \\item {} -- {} ({})\n",
            escape_latex(&entry.year),
            escape_latex(&entry.institution),
            escape_latex(&entry.score)
        ));
    }
    out.push_str("\\end{itemize}\n");
    out
}
