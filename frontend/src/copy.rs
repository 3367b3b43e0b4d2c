//! Localized site copy. One `SiteCopy` per locale, so a string missing from a
//! translation fails to compile instead of rendering blank.

use crate::i18n::Locale;

pub struct SiteCopy {
    pub nav: NavCopy,
    pub hero: HeroCopy,
    pub services: ServicesCopy,
    pub process: ProcessCopy,
    pub marquee: &'static [&'static str],
    pub contact: ContactCopy,
    pub chat: ChatCopy,
    pub footer: FooterCopy,
    pub privacy: LegalCopy,
    pub cookies: LegalCopy,
    pub not_found: NotFoundCopy,
}

pub struct NavCopy {
    pub services: &'static str,
    pub process: &'static str,
    pub contact: &'static str,
    pub switch_language: &'static str,
}

pub struct HeroCopy {
    pub eyebrow: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub cta: &'static str,
}

pub struct ServicesCopy {
    pub heading: &'static str,
    pub intro: &'static str,
    pub learn_more: &'static str,
    pub deliverables: &'static str,
    pub back: &'static str,
    pub cta: &'static str,
}

pub struct ProcessCopy {
    pub heading: &'static str,
    pub steps: &'static [(&'static str, &'static str)],
}

pub struct ContactCopy {
    pub heading: &'static str,
    pub intro: &'static str,
    pub name_label: &'static str,
    pub email_label: &'static str,
    pub message_label: &'static str,
    pub submit: &'static str,
    pub sending: &'static str,
    pub sent: &'static str,
    pub invalid_email: &'static str,
    pub short_message: &'static str,
    pub network_error: &'static str,
    pub retry: &'static str,
}

pub struct ChatCopy {
    pub launcher: &'static str,
    pub title: &'static str,
    pub ask_scope: &'static str,
    pub scope_website: &'static str,
    pub scope_branding: &'static str,
    pub scope_product: &'static str,
    pub scope_other: &'static str,
    pub ask_detail: &'static str,
    pub ask_name: &'static str,
    pub ask_email: &'static str,
    pub empty_answer: &'static str,
    pub invalid_email: &'static str,
    pub done: &'static str,
    pub placeholder: &'static str,
    pub send: &'static str,
    pub sending: &'static str,
    pub sent: &'static str,
    pub failed: &'static str,
    pub retry: &'static str,
}

pub struct FooterCopy {
    pub tagline: &'static str,
    pub privacy: &'static str,
    pub cookies: &'static str,
    pub rights: &'static str,
}

pub struct LegalSection {
    pub heading: &'static str,
    pub paragraphs: &'static [&'static str],
}

pub struct LegalCopy {
    pub title: &'static str,
    pub updated: &'static str,
    pub sections: &'static [LegalSection],
}

pub struct NotFoundCopy {
    pub title: &'static str,
    pub body: &'static str,
    pub home: &'static str,
}

pub fn copy(locale: Locale) -> &'static SiteCopy {
    match locale {
        Locale::En => &EN,
        Locale::Es => &ES,
    }
}

static EN: SiteCopy = SiteCopy {
    nav: NavCopy {
        services: "Services",
        process: "Process",
        contact: "Contact",
        switch_language: "Español",
    },
    hero: HeroCopy {
        eyebrow: "Boutique digital studio",
        title: "We design and build digital products people remember.",
        subtitle: "Strategy, identity and engineering under one small roof. Fewer clients, more attention.",
        cta: "Start a project",
    },
    services: ServicesCopy {
        heading: "What we do",
        intro: "Four disciplines, one team that talks to each other.",
        learn_more: "Learn more",
        deliverables: "What you get",
        back: "All services",
        cta: "Talk to us about this",
    },
    process: ProcessCopy {
        heading: "How we work",
        steps: &[
            ("Listen", "A short discovery call to understand your goals, audience and constraints."),
            ("Shape", "A focused proposal with scope, timeline and a fixed price."),
            ("Build", "Weekly demos. You see progress, not status reports."),
            ("Launch", "We ship, measure and stay around for what comes next."),
        ],
    },
    marquee: &["Web design", "Branding", "Product", "Strategy", "Motion", "Engineering"],
    contact: ContactCopy {
        heading: "Let's talk",
        intro: "Tell us a little about your project. We answer within two working days.",
        name_label: "Name (optional)",
        email_label: "Email",
        message_label: "Message",
        submit: "Send message",
        sending: "Sending…",
        sent: "Thanks! Your message is on its way.",
        invalid_email: "Please enter a valid email address.",
        short_message: "Please write at least 10 characters.",
        network_error: "We could not reach the server. Check your connection.",
        retry: "Try again",
    },
    chat: ChatCopy {
        launcher: "Chat with us",
        title: "Start a project",
        ask_scope: "Great! What do you need help with?",
        scope_website: "A website",
        scope_branding: "Branding",
        scope_product: "A digital product",
        scope_other: "Something else",
        ask_detail: "Tell us a bit more about it.",
        ask_name: "What is your name?",
        ask_email: "And your email, so we can get back to you?",
        empty_answer: "Please write an answer.",
        invalid_email: "That email does not look right. Could you check it?",
        done: "Thank you! We will be in touch soon.",
        placeholder: "Type your answer…",
        send: "Send",
        sending: "Sending your request…",
        sent: "Request sent.",
        failed: "We could not send your request.",
        retry: "Retry",
    },
    footer: FooterCopy {
        tagline: "Small studio, careful work.",
        privacy: "Privacy",
        cookies: "Cookies",
        rights: "All rights reserved.",
    },
    privacy: LegalCopy {
        title: "Privacy policy",
        updated: "Last updated: January 2026",
        sections: &[
            LegalSection {
                heading: "What we collect",
                paragraphs: &[
                    "When you use the contact form or the chat, we receive your name (if given), your email address and your message.",
                    "We do not create accounts and we do not store submissions in a database. They arrive in our inbox as email.",
                ],
            },
            LegalSection {
                heading: "How we use it",
                paragraphs: &["Only to answer your inquiry. We never sell or share your data for marketing."],
            },
            LegalSection {
                heading: "Processors",
                paragraphs: &["Messages are delivered through a transactional email provider acting on our behalf."],
            },
            LegalSection {
                heading: "Your rights",
                paragraphs: &["You can ask us to delete any email you sent us by writing to the same address."],
            },
        ],
    },
    cookies: LegalCopy {
        title: "Cookie policy",
        updated: "Last updated: January 2026",
        sections: &[
            LegalSection {
                heading: "Local storage",
                paragraphs: &[
                    "We remember your language choice and whether you have opened the chat. Both are stored only in your browser.",
                ],
            },
            LegalSection {
                heading: "Third-party cookies",
                paragraphs: &["Analytics cookies are only set after you give consent, and you can withdraw it at any time."],
            },
        ],
    },
    not_found: NotFoundCopy {
        title: "Page not found",
        body: "The page you are looking for moved or never existed.",
        home: "Back to home",
    },
};

static ES: SiteCopy = SiteCopy {
    nav: NavCopy {
        services: "Servicios",
        process: "Proceso",
        contact: "Contacto",
        switch_language: "English",
    },
    hero: HeroCopy {
        eyebrow: "Estudio digital boutique",
        title: "Diseñamos y construimos productos digitales que se recuerdan.",
        subtitle: "Estrategia, identidad e ingeniería bajo un mismo techo. Menos clientes, más atención.",
        cta: "Empezar un proyecto",
    },
    services: ServicesCopy {
        heading: "Qué hacemos",
        intro: "Cuatro disciplinas, un equipo que habla entre sí.",
        learn_more: "Ver más",
        deliverables: "Qué recibes",
        back: "Todos los servicios",
        cta: "Hablemos de esto",
    },
    process: ProcessCopy {
        heading: "Cómo trabajamos",
        steps: &[
            ("Escuchar", "Una breve llamada para entender tus objetivos, tu público y tus límites."),
            ("Definir", "Una propuesta concreta con alcance, plazos y precio cerrado."),
            ("Construir", "Demos semanales. Ves avances, no informes de estado."),
            ("Lanzar", "Publicamos, medimos y seguimos cerca para lo que venga."),
        ],
    },
    marquee: &["Diseño web", "Branding", "Producto", "Estrategia", "Motion", "Ingeniería"],
    contact: ContactCopy {
        heading: "Hablemos",
        intro: "Cuéntanos un poco sobre tu proyecto. Respondemos en dos días laborables.",
        name_label: "Nombre (opcional)",
        email_label: "Email",
        message_label: "Mensaje",
        submit: "Enviar mensaje",
        sending: "Enviando…",
        sent: "¡Gracias! Tu mensaje está en camino.",
        invalid_email: "Introduce un email válido.",
        short_message: "Escribe al menos 10 caracteres.",
        network_error: "No pudimos contactar con el servidor. Revisa tu conexión.",
        retry: "Reintentar",
    },
    chat: ChatCopy {
        launcher: "Habla con nosotros",
        title: "Empezar un proyecto",
        ask_scope: "¡Genial! ¿En qué te podemos ayudar?",
        scope_website: "Una web",
        scope_branding: "Branding",
        scope_product: "Un producto digital",
        scope_other: "Otra cosa",
        ask_detail: "Cuéntanos un poco más.",
        ask_name: "¿Cómo te llamas?",
        ask_email: "¿Y tu email, para poder responderte?",
        empty_answer: "Escribe una respuesta.",
        invalid_email: "Ese email no parece correcto. ¿Puedes revisarlo?",
        done: "¡Gracias! Te escribiremos pronto.",
        placeholder: "Escribe tu respuesta…",
        send: "Enviar",
        sending: "Enviando tu solicitud…",
        sent: "Solicitud enviada.",
        failed: "No pudimos enviar tu solicitud.",
        retry: "Reintentar",
    },
    footer: FooterCopy {
        tagline: "Estudio pequeño, trabajo cuidado.",
        privacy: "Privacidad",
        cookies: "Cookies",
        rights: "Todos los derechos reservados.",
    },
    privacy: LegalCopy {
        title: "Política de privacidad",
        updated: "Última actualización: enero de 2026",
        sections: &[
            LegalSection {
                heading: "Qué recogemos",
                paragraphs: &[
                    "Cuando usas el formulario de contacto o el chat, recibimos tu nombre (si lo indicas), tu email y tu mensaje.",
                    "No creamos cuentas ni guardamos los envíos en una base de datos. Llegan a nuestro buzón como email.",
                ],
            },
            LegalSection {
                heading: "Para qué lo usamos",
                paragraphs: &["Solo para responder a tu consulta. Nunca vendemos ni cedemos tus datos con fines comerciales."],
            },
            LegalSection {
                heading: "Encargados del tratamiento",
                paragraphs: &["Los mensajes se entregan a través de un proveedor de email transaccional que actúa en nuestro nombre."],
            },
            LegalSection {
                heading: "Tus derechos",
                paragraphs: &["Puedes pedirnos que borremos cualquier email que nos hayas enviado escribiendo a la misma dirección."],
            },
        ],
    },
    cookies: LegalCopy {
        title: "Política de cookies",
        updated: "Última actualización: enero de 2026",
        sections: &[
            LegalSection {
                heading: "Almacenamiento local",
                paragraphs: &[
                    "Recordamos tu idioma y si ya has abierto el chat. Ambos datos se guardan solo en tu navegador.",
                ],
            },
            LegalSection {
                heading: "Cookies de terceros",
                paragraphs: &["Las cookies de analítica solo se activan con tu consentimiento, que puedes retirar en cualquier momento."],
            },
        ],
    },
    not_found: NotFoundCopy {
        title: "Página no encontrada",
        body: "La página que buscas se ha movido o nunca existió.",
        home: "Volver al inicio",
    },
};
