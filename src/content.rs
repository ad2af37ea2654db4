//! Static page content. Everything here is declared once and rendered in
//! declaration order.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillIcon {
    Code,
    Brain,
    Rocket,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub name: &'static str,
    pub icon: SkillIcon,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub github: &'static str,
    pub tags: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    CodeHost,
    ProfessionalNetwork,
    Document,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactLink {
    pub kind: ContactKind,
    pub label: &'static str,
    pub href: &'static str,
}

impl ContactLink {
    /// Documents are downloaded in place, profiles open in a new tab.
    pub fn is_download(&self) -> bool {
        self.kind == ContactKind::Document
    }

    /// File name offered to the browser for downloads.
    pub fn download_name(&self) -> Option<&'static str> {
        if self.is_download() {
            self.href.rsplit('/').next()
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub about: &'static str,
}

pub static PROFILE: Profile = Profile {
    name: "Said Valencia Castrillo",
    headline: "Tecnólogo en Análisis y Desarrollo de Sistemas",
    about: "Soy un tecnólogo en Análisis y Desarrollo de Sistemas de Información egresado del sena Colombo Alemán en barranquilla, actualmente estudiando Ingeniría de Sistemas,con experiencia en creación de aplicaciones web. Especializado en Python/Django y Vue.js, con enfoque en buenas prácticas de código limpio y optimización de rendimiento. Passion por implementar soluciones tecnológicas innovadoras con impacto social y ambiental. Mi enfoque se centra en el aprendizaje continuo y la aplicación de nuevas tecnologías para resolver problemas de manera eficiente.",
};

pub static SKILLS: [SkillCategory; 3] = [
    SkillCategory {
        name: "Frontend",
        icon: SkillIcon::Code,
        items: &["React", "Vue", "JavaScript", "CSS"],
    },
    SkillCategory {
        name: "Backend",
        icon: SkillIcon::Brain,
        items: &["Java", "Python", "Django", "Ruby On Rails", "SQL"],
    },
    SkillCategory {
        name: "DevOps",
        icon: SkillIcon::Rocket,
        items: &["Git", "Docker"],
    },
];

pub static PROJECTS: [Project; 6] = [
    Project {
        title: "Task Manager",
        description: "Aplicación de gestión de tareas con Django",
        image: "/media/Captura_de_pantalla_2024-11-12_141004.png",
        github: "https://github.com/said-codes/django-project",
        tags: &["Python", "Django", "PostgreSQL", "Docker"],
    },
    Project {
        title: "Halo web",
        description: "Sitio web de Halo con diseño interactivo",
        image: "/media/Captura de pantalla 2025-03-21 172418.png",
        github: "https://github.com/said-codes/halo-web",
        tags: &["HTML", "CSS", "JavaScript"],
    },
    Project {
        title: "Instagram Clon",
        description: "Clon de Instagram, red social, con Django",
        image: "/media/Captura_de_pantalla_2024-11-12_135932.png",
        github: "https://github.com/said-codes/instagram-clone-django",
        tags: &["Python", "Django"],
    },
    Project {
        title: "Microdoft To Do Clon",
        description: "Clon de Microsoft To Do, aplicación para la gestión de tareas",
        image: "/media/Captura de pantalla 2025-03-09 182228.png",
        github: "https://github.com/said-codes/to-do-django-vue",
        tags: &["Python", "Django", "Vue"],
    },
    Project {
        title: "Twitter Clon",
        description: "Clon de de Twitter,red social, con Django y Vue",
        image: "/media/Captura de pantalla 2025-03-21 175454.png",
        github: "https://github.com/said-codes/twitter-clone",
        tags: &["Python", "Django", "Vue"],
    },
    Project {
        title: "Pagina de web de fundación caritas felices con pasión",
        description: "Pagina web de fundación dedicada a la recolección de tapas plásticas y actividades recreativas en los barrios de santa marta",
        image: "/media/Captura de pantalla 2025-03-25 082221.png",
        github: "https://github.com/said-codes/caritas-felices",
        tags: &["Vue", "Three.js", "Tailwindcss"],
    },
];

pub static CONTACT_LINKS: [ContactLink; 3] = [
    ContactLink {
        kind: ContactKind::CodeHost,
        label: "GitHub",
        href: "https://github.com/said-codes",
    },
    ContactLink {
        kind: ContactKind::ProfessionalNetwork,
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/valencia-castrillo-said/",
    },
    ContactLink {
        kind: ContactKind::Document,
        label: "Descargar CV",
        href: "/media/cv.pdf",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_list_order() {
        let titles: Vec<&str> = PROJECTS.iter().map(|p| p.title).collect();
        assert_eq!(
            titles,
            vec![
                "Task Manager",
                "Halo web",
                "Instagram Clon",
                "Microdoft To Do Clon",
                "Twitter Clon",
                "Pagina de web de fundación caritas felices con pasión",
            ]
        );
    }

    #[test]
    fn test_project_tags_keep_declared_order() {
        assert_eq!(PROJECTS[0].tags, ["Python", "Django", "PostgreSQL", "Docker"]);
        assert_eq!(PROJECTS[1].tags, ["HTML", "CSS", "JavaScript"]);
        assert_eq!(PROJECTS[5].tags, ["Vue", "Three.js", "Tailwindcss"]);
    }

    #[test]
    fn test_project_assets() {
        for project in PROJECTS.iter() {
            assert!(project.image.starts_with("/media/"), "{}", project.title);
            assert!(
                project.github.starts_with("https://github.com/said-codes/"),
                "{}",
                project.title
            );
        }
    }

    #[test]
    fn test_skill_categories() {
        let names: Vec<&str> = SKILLS.iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Frontend", "Backend", "DevOps"]);
        assert_eq!(SKILLS[0].icon, SkillIcon::Code);
        assert_eq!(SKILLS[1].icon, SkillIcon::Brain);
        assert_eq!(SKILLS[2].icon, SkillIcon::Rocket);
        assert_eq!(
            SKILLS[1].items,
            ["Java", "Python", "Django", "Ruby On Rails", "SQL"]
        );
    }

    #[test]
    fn test_contact_targets() {
        let kinds: Vec<ContactKind> = CONTACT_LINKS.iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ContactKind::CodeHost,
                ContactKind::ProfessionalNetwork,
                ContactKind::Document
            ]
        );
        assert!(!CONTACT_LINKS[0].is_download());
        assert!(!CONTACT_LINKS[1].is_download());
        assert!(CONTACT_LINKS[2].is_download());
        assert_eq!(CONTACT_LINKS[2].download_name(), Some("cv.pdf"));
        assert_eq!(CONTACT_LINKS[0].download_name(), None);
    }
}
