//! Page sections and the static copy shown in them.

/// One entry of the navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavSection {
    /// Anchor id of the section element.
    pub id: &'static str,
    pub label: &'static str,
}

/// Navigable sections in document order.
pub const SECTIONS: &[NavSection] = &[
    NavSection { id: "inicio", label: "Inicio" },
    NavSection { id: "mision", label: "Misión" },
    NavSection { id: "vision", label: "Visión" },
    NavSection { id: "valores", label: "Valores" },
    NavSection { id: "equipo", label: "Equipo" },
    NavSection { id: "proyectos", label: "Proyectos" },
    NavSection { id: "recomendacion", label: "Recomendación" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: &[Card] = &[
    Card { title: "Rápido", description: "Optimizado para una mejor experiencia" },
    Card { title: "Responsivo", description: "Diseño adaptable a todos los dispositivos" },
    Card { title: "Moderno", description: "Utilizando las últimas tecnologías web" },
];

pub const MISSION: &str = "Construimos software a la medida que resuelve problemas reales, \
    con código limpio, entregas frecuentes y una comunicación cercana con cada cliente.";

pub const VISION: &str = "Ser el estudio de desarrollo de referencia para pequeñas y medianas \
    empresas que buscan dar el salto digital sin perder su esencia.";

pub const VALUES: &[Card] = &[
    Card { title: "Calidad", description: "Cada línea de código se revisa, se prueba y se documenta." },
    Card { title: "Transparencia", description: "Avances visibles y decisiones compartidas en cada etapa." },
    Card { title: "Aprendizaje", description: "Nos formamos de forma continua para ofrecer lo mejor." },
    Card { title: "Compromiso", description: "Tratamos cada proyecto como si fuera nuestro." },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub initials: &'static str,
}

pub const TEAM: &[TeamMember] = &[
    TeamMember { name: "Andrea Díaz", role: "Desarrollo frontend", initials: "AD" },
    TeamMember { name: "Nicolás Herrera", role: "Arquitectura backend", initials: "NH" },
    TeamMember { name: "Daniela Vega", role: "Diseño UX/UI", initials: "DV" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub name: &'static str,
    pub summary: &'static str,
    pub tags: &'static [&'static str],
}

pub const PROJECTS: &[Project] = &[
    Project {
        name: "Agenda Clínica",
        summary: "Gestión de citas y recordatorios para consultorios médicos.",
        tags: &["Web", "Rust", "PostgreSQL"],
    },
    Project {
        name: "Tienda Local",
        summary: "Catálogo y pedidos en línea para comercios de barrio.",
        tags: &["E-commerce", "WebAssembly"],
    },
    Project {
        name: "Panel Logístico",
        summary: "Seguimiento de entregas en tiempo real para flotas pequeñas.",
        tags: &["Dashboard", "Mapas"],
    },
];

pub const RECOMMENDATION: &str = "¿Tienes una idea pero no sabes por dónde empezar? \
    Cuéntanos tu proyecto y te recomendaremos la tecnología y el plan de trabajo que mejor se adapten a ti.";

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_section_ids_are_unique() {
        let ids: HashSet<_> = SECTIONS.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), SECTIONS.len());
    }

    #[test]
    fn test_menu_order() {
        let ids: Vec<_> = SECTIONS.iter().map(|s| s.id).collect();
        assert_eq!(
            ids,
            ["inicio", "mision", "vision", "valores", "equipo", "proyectos", "recomendacion"]
        );
    }

    #[test]
    fn test_ids_are_valid_anchors() {
        for s in SECTIONS {
            assert!(s.id.chars().all(|c| c.is_ascii_lowercase()), "bad anchor #{}", s.id);
        }
    }
}
