use crate::i18n::Locale;

pub struct ServiceText {
    pub title: &'static str,
    pub summary: &'static str,
    pub body: &'static str,
    pub deliverables: &'static [&'static str],
}

/// Slugs are shared by both locales so `/services/x` and `/es/services/x`
/// always point at the same service. Keep in sync with the backend sitemap.
pub struct Service {
    pub slug: &'static str,
    pub en: ServiceText,
    pub es: ServiceText,
}

impl Service {
    pub fn text(&self, locale: Locale) -> &ServiceText {
        match locale {
            Locale::En => &self.en,
            Locale::Es => &self.es,
        }
    }
}

pub static SERVICES: [Service; 4] = [
    Service {
        slug: "web-design",
        en: ServiceText {
            title: "Web design",
            summary: "Fast, accessible sites that make your offer obvious.",
            body: "We design marketing sites and landing pages around one question: what should a visitor do next? Every layout, word and animation is there to answer it.",
            deliverables: &["Content structure and wireframes", "Visual design system", "Responsive build", "Performance and accessibility audit"],
        },
        es: ServiceText {
            title: "Diseño web",
            summary: "Webs rápidas y accesibles que dejan clara tu propuesta.",
            body: "Diseñamos webs corporativas y landing pages alrededor de una pregunta: ¿qué debería hacer ahora el visitante? Cada bloque, palabra y animación está ahí para responderla.",
            deliverables: &["Estructura de contenidos y wireframes", "Sistema de diseño visual", "Desarrollo responsive", "Auditoría de rendimiento y accesibilidad"],
        },
    },
    Service {
        slug: "branding",
        en: ServiceText {
            title: "Branding",
            summary: "Identities with a point of view, built to scale.",
            body: "From naming to a complete visual identity, we shape brands that feel consistent in a pitch deck, on a storefront and in a product screen.",
            deliverables: &["Positioning workshop", "Logo and typography", "Color and motion guidelines", "Brand templates"],
        },
        es: ServiceText {
            title: "Branding",
            summary: "Identidades con criterio, preparadas para crecer.",
            body: "Del naming a una identidad visual completa, creamos marcas coherentes en una presentación, en una tienda y en la pantalla de un producto.",
            deliverables: &["Taller de posicionamiento", "Logotipo y tipografía", "Guías de color y movimiento", "Plantillas de marca"],
        },
    },
    Service {
        slug: "product-development",
        en: ServiceText {
            title: "Product development",
            summary: "Web and mobile products, from prototype to production.",
            body: "A small senior team that designs and engineers together. We prototype early, test with real users and ship software you can maintain.",
            deliverables: &["Clickable prototype", "Production web or mobile app", "Automated tests and CI", "Handover documentation"],
        },
        es: ServiceText {
            title: "Desarrollo de producto",
            summary: "Productos web y móviles, del prototipo a producción.",
            body: "Un equipo pequeño y sénior que diseña y programa a la vez. Prototipamos pronto, probamos con usuarios reales y entregamos software mantenible.",
            deliverables: &["Prototipo navegable", "Aplicación web o móvil en producción", "Tests automáticos e integración continua", "Documentación de traspaso"],
        },
    },
    Service {
        slug: "digital-strategy",
        en: ServiceText {
            title: "Digital strategy",
            summary: "Clear priorities before a single pixel is drawn.",
            body: "We audit what you have, talk to your customers and turn what we learn into a roadmap your team can actually follow.",
            deliverables: &["Audit of current channels", "Customer interviews", "Prioritized roadmap", "Success metrics"],
        },
        es: ServiceText {
            title: "Estrategia digital",
            summary: "Prioridades claras antes de dibujar un solo píxel.",
            body: "Analizamos lo que tienes, hablamos con tus clientes y convertimos lo aprendido en una hoja de ruta que tu equipo pueda seguir.",
            deliverables: &["Auditoría de canales actuales", "Entrevistas con clientes", "Hoja de ruta priorizada", "Métricas de éxito"],
        },
    },
];

pub fn find(slug: &str) -> Option<&'static Service> {
    SERVICES.iter().find(|service| service.slug == slug)
}
