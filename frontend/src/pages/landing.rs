use chrono::{Datelike, Utc};
use yew::prelude::*;

use crate::components::lead_form::LeadForm;
use crate::components::pricing::Pricing;
use crate::config;

const BENEFITS: [(&str, &str); 6] = [
    ("Monitoreo completo de calidad del agua", "pH, cloro, ácido cianúrico, alcalinidad, entre otros."),
    ("Dosificación inteligente", "Sugerencias automáticas basadas en las condiciones reales del agua."),
    ("Gestión de inventario de productos químicos", "Controla lo que tienes y evita faltantes."),
    ("Control de equipos", "Historial, fichas técnicas y mantenimientos programados."),
    ("Reportes automáticos", "Listos para auditorías o revisión interna."),
    ("Multi-sitio", "Controla múltiples piscinas desde un único panel."),
];

const AUDIENCE: [(&str, &str); 4] = [
    ("Propietarios de piscinas residenciales", "Que quieren una piscina segura sin complicaciones."),
    ("Hoteles y centros vacacionales", "Que cuidan la experiencia de sus huéspedes."),
    ("Clubes deportivos y recreativos", "Que necesitan eficiencia y control."),
    ("Empresas operadoras", "Con piscinas en múltiples ubicaciones."),
];

const STEPS: [(&str, &str); 5] = [
    ("Crea tu piscina", "Ingresa los datos básicos sobre tu piscina."),
    ("Agrega tus productos químicos", "Registra los productos que usas y lleva el control del inventario."),
    ("Registra los datos operativos", "Toma lecturas y guarda los resultados para monitorear tu operación."),
    ("Recibe alertas y sugerencias automáticas", "Te avisamos si algo no está en los rangos ideales y te decimos qué hacer."),
    ("Toma decisiones con seguridad", "Actúa con tranquilidad: tienes toda la información al alcance de tu mano."),
];

const FEATURES: [&str; 5] = ["Parámetros", "Dosificación", "Normativas", "Inventarios", "Mantenimiento"];

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="landing-page">
            <section class="hero-section">
                <div class="hero-text">
                    <h1>
                        <strong class="accent">{"AIQUA Pool:"}</strong>
                        {" la forma más inteligente de operar y cuidar tu piscina"}
                    </h1>
                    <p>
                        {"Monitorea la calidad del agua, optimiza el uso de productos químicos y gestiona toda tu operación desde una sola plataforma digital."}
                        <br />
                        <strong>{"Reduce errores, gana eficiencia y garantiza la seguridad de tus piscinas."}</strong>
                    </p>
                    <a href="#comienza-ahora" class="hero-cta">
                        {"Empieza gratis hoy y transforma tu operación"}
                    </a>
                </div>
                <div class="hero-video">
                    <iframe
                        src="https://www.youtube.com/embed/a8LIW46N8K4"
                        title="Aiqua - Video de presentación"
                        allowfullscreen=true
                    ></iframe>
                </div>
            </section>

            <section id="que-es" class="about-section">
                <h2>{"¿Qué es Aiqua?"}</h2>
                <p>
                    <strong>{"AIQUA Pool"}</strong>
                    {" es la app que te permite tener el control total de tus piscinas desde cualquier lugar. Desde la calidad del agua hasta el control de inventarios y mantenimiento de equipos, todo está al alcance de tu mano en una plataforma simple, intuitiva y profesional."}
                </p>
                <p>
                    {"Controla parámetros como pH, cloro, ácido cianúrico y alcalinidad, recibe alertas automáticas cuando algo se sale de los rangos ideales, obtén sugerencias de dosificación en tiempo real, y genera reportes instantáneos para uso interno o auditorías."}
                </p>
                <div class="feature-chips">
                    { for FEATURES.iter().map(|label| html! { <span class="feature-chip">{*label}</span> }) }
                </div>
            </section>

            <section class="banner-section">
                <p><strong>{"Aiqua Pool"}</strong></p>
                <p>{"automatiza y centraliza todo lo necesario para garantizar una piscina operativa, higiénica y segura."}</p>
            </section>

            <section class="benefits-section">
                <h2>{"Beneficios claves"}</h2>
                <div class="card-grid">
                    {
                        for BENEFITS.iter().map(|(title, text)| html! {
                            <div class="info-card">
                                <h3>{title.to_uppercase()}</h3>
                                <p>{*text}</p>
                            </div>
                        })
                    }
                </div>
            </section>

            <section class="audience-section">
                <h2>{"¿Quién puede usar Aiqua?"}</h2>
                <div class="card-grid">
                    {
                        for AUDIENCE.iter().map(|(title, text)| html! {
                            <div class="info-card">
                                <h3>{title.to_uppercase()}</h3>
                                <p>{*text}</p>
                            </div>
                        })
                    }
                </div>
            </section>

            <section class="steps-section">
                <h2>{"¿Cómo funciona?"}</h2>
                <div class="card-grid">
                    {
                        for STEPS.iter().enumerate().map(|(i, (title, text))| html! {
                            <div class="step-card">
                                <div class="step-number">{(i + 1).to_string()}</div>
                                <h3>{title.to_uppercase()}</h3>
                                <p>{*text}</p>
                            </div>
                        })
                    }
                </div>
            </section>

            <Pricing />

            <section id="comienza-ahora" class="start-section">
                <div class="start-text">
                    <h3>
                        <strong class="accent">{"Revoluciona"}</strong>
                        {" la operación de tus piscinas"}
                    </h3>
                    <ul>
                        <li>{"✓ Supervisa, controla y optimiza en un solo lugar."}</li>
                        <li>{"✓ Aumenta la eficiencia y asegura el cumplimiento normativo."}</li>
                        <li>{"✓ Reduce riesgos y toma decisiones basadas en datos."}</li>
                    </ul>
                </div>
                <LeadForm />
            </section>

            <section id="contacto" class="contact-section">
                <h2>{"AIQUA Pool"}</h2>
                <p>
                    {"es tu aliado para una gestión moderna, segura y eficiente de piscinas. Reduce costos, evita errores y asegura la mejor calidad del agua. Empieza gratis hoy y lleva tu operación al siguiente nivel."}
                </p>
                <a
                    href={config::whatsapp_link()}
                    target="_blank"
                    rel="noopener noreferrer"
                    class="whatsapp-button"
                >
                    {"📱 Escríbenos por WhatsApp"}
                </a>
            </section>

            <footer class="landing-footer">
                <p>{format!("© {} AIQUA - Desarrollado por Tree-a", Utc::now().year())}</p>
            </footer>

            <style>
                {r#"
                    .landing-page {
                        width: 100%;
                        color: #4D4D4D;
                        background: #f9fafb;
                        overflow-x: hidden;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    }
                    .landing-page section {
                        padding: 5rem 1.5rem;
                    }
                    .landing-page h2 {
                        font-size: 1.9rem;
                        text-align: center;
                        color: #00AEEF;
                        margin-bottom: 2.5rem;
                    }
                    .accent {
                        color: #7AC943;
                    }
                    .hero-section {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                        gap: 3rem;
                        align-items: center;
                        background: linear-gradient(to right, black, gray);
                        color: white;
                        padding-top: 8rem !important;
                    }
                    .hero-section h1 {
                        font-size: 2.6rem;
                        line-height: 1.2;
                    }
                    .hero-cta, .whatsapp-button {
                        display: inline-block;
                        background: #7AC943;
                        color: white;
                        font-weight: 600;
                        padding: 0.8rem 1.6rem;
                        border-radius: 0.5rem;
                        text-decoration: none;
                    }
                    .whatsapp-button {
                        border-radius: 9999px;
                    }
                    .hero-video iframe {
                        width: 100%;
                        height: 320px;
                        border: none;
                        border-radius: 0.5rem;
                    }
                    .feature-chips {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 1rem;
                    }
                    .feature-chip {
                        border: 1px solid #00AEEF;
                        border-radius: 0.4rem;
                        padding: 0.5rem 0.9rem;
                        background: white;
                    }
                    .banner-section {
                        background: #00AEEF;
                        color: white;
                        padding: 1.5rem !important;
                    }
                    .benefits-section, .steps-section {
                        background: black;
                    }
                    .benefits-section h2, .steps-section h2 {
                        color: white;
                    }
                    .card-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                        gap: 2rem;
                    }
                    .info-card, .step-card {
                        background: white;
                        border-radius: 0.75rem;
                        padding: 2rem;
                        text-align: center;
                        box-shadow: 0 8px 20px rgba(0, 0, 0, 0.15);
                    }
                    .info-card h3, .step-card h3 {
                        color: #29ABE2;
                    }
                    .step-number {
                        width: 2.5rem;
                        height: 2.5rem;
                        margin: 0 auto 1rem;
                        border: 2px solid #7AC943;
                        border-radius: 0.5rem;
                        color: #7AC943;
                        font-weight: bold;
                        line-height: 2.4rem;
                    }
                    .pricing-section {
                        background: white;
                        text-align: center;
                    }
                    .pricing-subtitle {
                        font-size: 1.1rem;
                        margin-bottom: 1.5rem;
                    }
                    .recurrence-selector {
                        display: inline-flex;
                        padding: 0.25rem;
                        margin-bottom: 3rem;
                        background: white;
                        border-radius: 0.5rem;
                        box-shadow: 0 4px 12px rgba(0, 0, 0, 0.1);
                    }
                    .recurrence-option {
                        border: none;
                        background: none;
                        padding: 0.5rem 1rem;
                        border-radius: 0.4rem;
                        color: #4b5563;
                        cursor: pointer;
                    }
                    .recurrence-option.active {
                        background: #29ABE2;
                        color: white;
                    }
                    .tier-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(210px, 1fr));
                        gap: 1.5rem;
                    }
                    .tier-card {
                        position: relative;
                        border-radius: 1rem;
                        padding: 1.5rem;
                        text-align: left;
                        cursor: pointer;
                        box-shadow: 0 8px 20px rgba(0, 0, 0, 0.1);
                        transition: transform 0.2s ease;
                    }
                    .tier-card.highlighted {
                        transform: translateY(-1rem);
                        border: 2px solid #7AC943;
                    }
                    .tier-badge {
                        position: absolute;
                        top: -1rem;
                        left: 50%;
                        transform: translateX(-50%);
                        background: #7AC943;
                        color: white;
                        font-weight: bold;
                        font-size: 0.85rem;
                        padding: 0.25rem 1rem;
                        border-radius: 9999px;
                        white-space: nowrap;
                    }
                    .tier-card h3 {
                        color: #29ABE2;
                    }
                    .tier-price {
                        font-size: 1.5rem;
                        font-weight: bold;
                        color: #1f2937;
                        margin-bottom: 1rem;
                    }
                    .tier-features {
                        list-style: none;
                        padding: 0;
                        line-height: 2;
                    }
                    .tier-cta {
                        display: block;
                        text-align: center;
                        margin-top: 1rem;
                        padding: 0.5rem 1rem;
                        border-radius: 9999px;
                        font-weight: bold;
                        text-decoration: none;
                        background: #7AC943;
                        color: white;
                    }
                    .tier-cta.muted {
                        background: #d1d5db;
                        color: #4b5563;
                    }
                    .tier-loading {
                        grid-column: 1 / -1;
                        padding: 2.5rem 0;
                    }
                    .start-section {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                        gap: 3rem;
                        align-items: center;
                        background: black;
                        color: white;
                    }
                    .start-section ul {
                        list-style: none;
                        padding: 0;
                        line-height: 2.2;
                    }
                    .lead-form-card {
                        max-width: 28rem;
                        margin: 0 auto;
                        background: white;
                        color: #1f2937;
                        border: 2px solid #93c5fd;
                        border-radius: 1rem;
                        padding: 1.5rem;
                    }
                    .lead-form-card h4 {
                        text-align: center;
                        font-size: 1.25rem;
                    }
                    .lead-form-card input[type="text"],
                    .lead-form-card input[type="email"],
                    .lead-form-card input[type="tel"] {
                        width: 100%;
                        box-sizing: border-box;
                        padding: 0.5rem 1rem;
                        margin-bottom: 1rem;
                        border: 1px solid #d1d5db;
                        border-radius: 0.5rem;
                    }
                    .lead-terms {
                        font-size: 0.85rem;
                        margin-bottom: 1rem;
                    }
                    .lead-form-card button {
                        width: 100%;
                        padding: 0.6rem;
                        border: none;
                        border-radius: 9999px;
                        background: linear-gradient(to right, #3b82f6, #1d4ed8);
                        color: white;
                        font-weight: 600;
                        cursor: pointer;
                    }
                    .lead-form-card button:disabled {
                        opacity: 0.6;
                        cursor: default;
                    }
                    .lead-notice {
                        margin-top: 1rem;
                        padding: 0.75rem;
                        border-radius: 0.5rem;
                        background: #ecfccb;
                        color: #3f6212;
                    }
                    .lead-notice.error {
                        background: #fee2e2;
                        color: #991b1b;
                    }
                    .contact-section {
                        background: white;
                        text-align: center;
                    }
                    .contact-section h2 {
                        color: #4D4D4D;
                    }
                    .contact-section p {
                        max-width: 48rem;
                        margin: 0 auto 2rem;
                        font-size: 1.1rem;
                        line-height: 1.7;
                    }
                    .landing-footer {
                        background: #4D4D4D;
                        color: white;
                        text-align: center;
                        padding: 1.5rem;
                    }
                "#}
            </style>
        </div>
    }
}
