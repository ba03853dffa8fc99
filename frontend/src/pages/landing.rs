use chrono::Datelike;
use yew::prelude::*;

use crate::components::accordion::SingleOpenAccordion;
use crate::components::cards::{FeatureCard, StepItem};
use crate::components::icons::{Icon, IconSvg};
use crate::config;
use crate::content::{CTA_LABEL, FAQS, FEATURES, STEPS, TIP_CHECKLIST, VIDEO_STATS};

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section class="hero">
            <div class="hero-glow"></div>
            <div class="container hero-content">
                <div class="hero-badge">
                    <IconSvg icon={Icon::CheckCircle} class={classes!("icon-sm")} />
                    <span>{"Umetna inteligenca za slovenske pravnike"}</span>
                </div>
                <h1 class="georgia-font">
                    {"Dobrodošli v prihodnosti "}<span class="accent">{"pravne prakse!"}</span>
                </h1>
                <p class="hero-subtitle">
                    {"Lexora je vaša nova konkurenčna prednost. Oglejte si spodnji video vodič, da ugotovite, kako v celoti izkoristiti potencial umetne inteligence v vaši odvetniški pisarni."}
                </p>
                <div class="hero-cta-group">
                    <a href={config::APP_URL} class="hero-cta">
                        {CTA_LABEL}
                        <IconSvg icon={Icon::ArrowRight} class={classes!("icon-md")} />
                    </a>
                </div>
            </div>
        </section>
    }
}

#[function_component(VideoSection)]
fn video_section() -> Html {
    html! {
        <section id="video" class="video-section">
            <div class="video-glow"></div>
            <div class="video-inner">
                <div class="video-frame">
                    <div class="video-glass">
                        <div class="video-aspect">
                            <iframe
                                src={config::VIDEO_EMBED_URL}
                                title="Lexora predstavitev"
                                frameborder="0"
                                allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                                allowfullscreen=true
                            ></iframe>
                        </div>
                    </div>
                </div>

                <div class="video-stats">
                    { for VIDEO_STATS.iter().map(|stat| html! {
                        <div class="video-stat">
                            <span class="stat-value">{stat.value}</span>
                            <span class="stat-label">{stat.label}</span>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(StepsSection)]
fn steps_section() -> Html {
    html! {
        <section id="koraki" class="steps-section">
            <div class="container steps-grid">
                <div>
                    <h2 class="georgia-font section-title">
                        {"3 preprosti koraki do "}<span class="accent">{"uvedbe AI v vaše pravno delo:"}</span>
                    </h2>
                    <p class="section-lead">
                        {"Ni vam treba spreminjati svojega načina dela. Lexora se prilagodi vam – vašim primerom, vašim dokumentom, vašemu načinu razmišljanja."}
                    </p>
                    <div class="steps-list">
                        { for STEPS.iter().enumerate().map(|(index, step)| html! {
                            <StepItem key={index} step={step} index={index} total={STEPS.len()} />
                        }) }
                    </div>
                </div>
                <div class="tip-card">
                    <div class="tip-glow"></div>
                    <div class="tip-content">
                        <h3>{"Hitri nasvet za začetek"}</h3>
                        <p class="tip-text">
                            {"Priporočamo, da Lexoro preizkusite na čim več korakih svojega delovnega procesa – od prve analize dokumentov do priprave končnih osnutkov. Uporabljajte jo pri različnih opravilih in scenarijih, saj boste le tako v celoti izkoristili njen potencial ter moč umetne inteligence v vsakodnevnem pravnem delu."}
                        </p>
                        <ul class="tip-checklist">
                            { for TIP_CHECKLIST.iter().map(|item| html! {
                                <li>
                                    <span class="check-bubble">
                                        <IconSvg icon={Icon::CheckCircle} class={classes!("icon-sm")} />
                                    </span>
                                    <span>{*item}</span>
                                </li>
                            }) }
                        </ul>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(FeaturesSection)]
fn features_section() -> Html {
    html! {
        <section id="funkcije" class="features-section">
            <div class="container">
                <div class="section-header">
                    <h2 class="georgia-font section-title">
                        {"Orodja, ki vam "}<span class="accent">{"prihranijo ure dela"}</span>
                    </h2>
                    <p class="section-lead">
                        {"Odvetniško delo ni več le brskanje po papirjih. Z Lexoro postane vaše znanje bolj dostopno in uporabno."}
                    </p>
                </div>
                <div class="features-grid">
                    { for FEATURES.iter().enumerate().map(|(index, feature)| html! {
                        <FeatureCard key={index} feature={feature} />
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(FaqSection)]
fn faq_section() -> Html {
    html! {
        <section class="faq-section">
            <div class="container">
                <div class="section-header">
                    <div class="faq-badge">
                        <IconSvg icon={Icon::HelpCircle} class={classes!("icon-lg")} />
                    </div>
                    <h2 class="georgia-font section-title">{"Pogosta vprašanja"}</h2>
                    <p class="section-lead">
                        {"Tukaj so odgovori na najpogostejša vprašanja naših novih uporabnikov."}
                    </p>
                </div>
                <SingleOpenAccordion items={FAQS} />
            </div>
        </section>
    }
}

#[function_component(CtaSection)]
fn cta_section() -> Html {
    html! {
        <section class="cta-section">
            <svg class="cta-grid" viewBox="0 0 100 100" aria-hidden="true">
                <pattern id="grid" width="10" height="10" patternUnits="userSpaceOnUse">
                    <path d="M 10 0 L 0 0 0 10" fill="none" stroke="white" stroke-width="0.5" />
                </pattern>
                <rect width="100" height="100" fill="url(#grid)" />
            </svg>
            <div class="container cta-content">
                <h2 class="georgia-font">{"Ste pripravljeni dvigniti svojo pisarno na nov nivo?"}</h2>
                <p>{"Vaša ekipa bo navdušena nad novim nivojem produktivnosti, ki ga prinaša Lexora."}</p>
                <div class="cta-actions">
                    <a href={config::APP_URL} class="cta-primary">{"Začnite zdaj"}</a>
                    <a href={config::contact_mailto()} class="cta-secondary">
                        {format!("Kontaktirajte podporo: {}", config::CONTACT_EMAIL)}
                    </a>
                </div>
            </div>
        </section>
    }
}

pub fn copyright_line(year: i32) -> String {
    format!("© {} Lexora. Vse pravice pridržane.", year)
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = chrono::Local::now().year();
    html! {
        <footer class="site-footer">
            <div class="container footer-content">
                <span class="georgia-font footer-logo">{"Lexora"}</span>
                <div class="footer-links">
                    <a href="#">{"Pogoji uporabe"}</a>
                    <a href="#">{"Politika zasebnosti"}</a>
                    <a href={config::contact_mailto()}>{"Pišite nam"}</a>
                </div>
                <p>{copyright_line(year)}</p>
            </div>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <div class="landing-page">
            <Hero />
            <VideoSection />
            <StepsSection />
            <FeaturesSection />
            <FaqSection />
            <CtaSection />
            <Footer />

            <style>
                {r#"
                :root {
                    --accent: #3b82f6;
                    --accent-strong: #1d4ed8;
                    --accent-soft: #60a5fa;
                    --muted: #a1a1aa;
                    --border: #27272a;
                    --surface: #18181b;
                    --surface-deep: #09090b;
                }

                body {
                    margin: 0;
                    background: #000;
                    color: #fff;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }

                ::selection {
                    background: #1e3a8a;
                    color: #fff;
                }

                .georgia-font {
                    font-family: Georgia, "Times New Roman", serif;
                }

                .accent {
                    color: var(--accent);
                }

                .icon { flex-shrink: 0; }
                .icon-sm { width: 16px; height: 16px; }
                .icon-md { width: 24px; height: 24px; }
                .icon-lg { width: 32px; height: 32px; }

                .container {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }

                /* Nav */
                .lexora-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    padding: 1.25rem 0;
                    background: transparent;
                    transition: all 0.3s ease;
                }

                .lexora-nav.scrolled {
                    padding: 0.75rem 0;
                    background: rgba(0, 0, 0, 0.9);
                    backdrop-filter: blur(12px);
                    border-bottom: 1px solid var(--border);
                }

                .nav-content {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .nav-logo {
                    font-size: 1.875rem;
                    color: #fff;
                    text-decoration: none;
                    letter-spacing: -0.02em;
                }

                .nav-links {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                    font-size: 0.875rem;
                    font-weight: 500;
                }

                .nav-link, .mobile-link {
                    color: var(--muted);
                    text-decoration: none;
                    transition: color 0.2s ease;
                }

                .nav-link:hover {
                    color: #fff;
                }

                .nav-cta, .mobile-cta {
                    background: var(--accent-strong);
                    color: #fff;
                    padding: 0.5rem 1.25rem;
                    border-radius: 9999px;
                    text-decoration: none;
                    transition: background 0.2s ease;
                }

                .nav-cta:hover, .mobile-cta:hover {
                    background: #2563eb;
                }

                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    color: var(--muted);
                    cursor: pointer;
                }

                .burger-menu .icon {
                    width: 24px;
                    height: 24px;
                }

                .mobile-menu {
                    display: none;
                    background: var(--surface-deep);
                    border-bottom: 1px solid var(--border);
                    padding: 1rem;
                }

                .mobile-link {
                    display: block;
                    color: #d4d4d8;
                    margin-bottom: 1rem;
                }

                .mobile-cta {
                    display: block;
                    text-align: center;
                    border-radius: 0.5rem;
                }

                /* Hero */
                .hero {
                    position: relative;
                    padding: 8rem 0 1rem;
                    overflow: hidden;
                    text-align: center;
                }

                .hero-glow {
                    position: absolute;
                    top: 0;
                    left: 50%;
                    transform: translateX(-50%);
                    width: 100%;
                    height: 800px;
                    background: linear-gradient(to bottom, rgba(30, 58, 138, 0.1), transparent);
                    opacity: 0.6;
                    z-index: -1;
                }

                .hero-badge {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    background: rgba(30, 58, 138, 0.4);
                    border: 1px solid #1e40af;
                    color: #93c5fd;
                    font-size: 0.875rem;
                    font-weight: 600;
                    margin-bottom: 1.5rem;
                }

                .hero h1 {
                    font-size: clamp(2.25rem, 6vw, 4.5rem);
                    font-weight: 400;
                    line-height: 1.15;
                    max-width: 56rem;
                    margin: 0 auto 2rem;
                }

                .hero-subtitle {
                    font-size: 1.25rem;
                    color: var(--muted);
                    max-width: 42rem;
                    margin: 0 auto 2.5rem;
                    line-height: 1.6;
                }

                .hero-cta-group {
                    display: flex;
                    justify-content: center;
                }

                .hero-cta {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 1.25rem 2.5rem;
                    background: var(--accent-strong);
                    color: #fff;
                    border-radius: 9999px;
                    font-weight: 700;
                    font-size: 1.25rem;
                    text-decoration: none;
                    box-shadow: 0 10px 15px rgba(30, 58, 138, 0.2);
                    transition: transform 0.2s ease, background 0.2s ease;
                }

                .hero-cta:hover {
                    background: #2563eb;
                    transform: scale(1.05);
                }

                /* Video */
                .video-section {
                    position: relative;
                    padding: 7rem 0;
                    overflow: hidden;
                }

                .video-glow {
                    position: absolute;
                    top: 0;
                    left: 50%;
                    transform: translateX(-50%);
                    width: 900px;
                    max-width: 100%;
                    height: 450px;
                    background: rgba(37, 99, 235, 0.2);
                    filter: blur(64px);
                    border-radius: 9999px;
                    pointer-events: none;
                }

                .video-inner {
                    position: relative;
                    max-width: 1400px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }

                .video-frame {
                    border-radius: 1.5rem;
                    padding: 1px;
                    background: linear-gradient(to bottom, rgba(255, 255, 255, 0.2), rgba(255, 255, 255, 0.05), transparent);
                    box-shadow: 0 50px 140px rgba(0, 0, 0, 0.7);
                }

                .video-glass {
                    border-radius: 1.5rem;
                    background: rgba(255, 255, 255, 0.05);
                    backdrop-filter: blur(24px);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    overflow: hidden;
                }

                .video-aspect {
                    aspect-ratio: 16 / 9;
                    width: 100%;
                }

                .video-aspect iframe {
                    width: 100%;
                    height: 100%;
                    border: 0;
                }

                .video-stats {
                    margin: 5rem auto 0;
                    max-width: 64rem;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2.5rem;
                    text-align: center;
                }

                .video-stat:nth-child(2) {
                    border-left: 1px solid rgba(255, 255, 255, 0.1);
                    border-right: 1px solid rgba(255, 255, 255, 0.1);
                }

                .stat-value {
                    display: block;
                    font-size: 1.875rem;
                    font-weight: 600;
                    color: var(--accent);
                }

                .stat-label {
                    color: #71717a;
                    font-size: 0.875rem;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                }

                /* Shared section chrome */
                .section-header {
                    text-align: center;
                    margin-bottom: 4rem;
                }

                .section-title {
                    font-size: clamp(1.875rem, 4vw, 3rem);
                    font-weight: 500;
                    line-height: 1.2;
                    margin: 0 0 1.5rem;
                }

                .section-lead {
                    font-size: 1.125rem;
                    color: var(--muted);
                    max-width: 42rem;
                    margin: 0 auto 3rem;
                }

                /* Steps */
                .steps-section {
                    padding: 6rem 0;
                    background: var(--surface-deep);
                }

                .steps-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                }

                .step-item {
                    display: flex;
                    gap: 1.5rem;
                    align-items: flex-start;
                }

                .step-marker {
                    position: relative;
                    flex-shrink: 0;
                }

                .step-number {
                    position: relative;
                    z-index: 1;
                    width: 48px;
                    height: 48px;
                    border-radius: 9999px;
                    background: #000;
                    border: 2px solid #2563eb;
                    color: var(--accent-soft);
                    font-weight: 700;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .step-connector {
                    position: absolute;
                    top: 48px;
                    bottom: -24px;
                    left: 50%;
                    width: 2px;
                    background: var(--border);
                    transform: translateX(-50%);
                }

                .step-body {
                    padding-bottom: 3rem;
                }

                .step-heading {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 0.5rem;
                }

                .step-heading h3 {
                    margin: 0;
                    font-size: 1.25rem;
                }

                .step-icon {
                    color: var(--accent);
                }

                .step-body p {
                    color: var(--muted);
                    line-height: 1.6;
                    max-width: 28rem;
                    margin: 0;
                }

                .tip-card {
                    position: relative;
                    overflow: hidden;
                    padding: 3rem;
                    border-radius: 1.5rem;
                    background: rgba(30, 58, 138, 0.2);
                    border: 1px solid rgba(30, 64, 175, 0.5);
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
                }

                .tip-glow {
                    position: absolute;
                    top: 0;
                    right: 0;
                    width: 16rem;
                    height: 16rem;
                    border-radius: 9999px;
                    background: rgba(37, 99, 235, 0.1);
                    transform: translate(50%, -50%);
                }

                .tip-content {
                    position: relative;
                    z-index: 1;
                }

                .tip-content h3 {
                    font-size: 1.5rem;
                    color: var(--accent-soft);
                    margin: 0 0 1.5rem;
                }

                .tip-text {
                    color: #d4d4d8;
                    font-style: italic;
                    line-height: 1.6;
                    margin-bottom: 2rem;
                }

                .tip-checklist {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                }

                .tip-checklist li {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 1rem;
                    color: #e4e4e7;
                    font-weight: 500;
                }

                .check-bubble {
                    width: 40px;
                    height: 40px;
                    border-radius: 9999px;
                    background: rgba(30, 58, 138, 0.4);
                    border: 1px solid #1e40af;
                    color: var(--accent-soft);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                /* Features */
                .features-section {
                    padding: 6rem 0;
                }

                .features-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }

                .feature-card {
                    background: var(--surface);
                    padding: 2rem;
                    border-radius: 1rem;
                    border: 1px solid var(--border);
                    transition: border-color 0.2s ease;
                }

                .feature-card:hover {
                    border-color: #3f3f46;
                }

                .feature-icon {
                    width: 48px;
                    height: 48px;
                    border-radius: 0.75rem;
                    background: rgba(30, 58, 138, 0.3);
                    color: var(--accent-soft);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin-bottom: 1.5rem;
                    transition: transform 0.2s ease;
                }

                .feature-card:hover .feature-icon {
                    transform: scale(1.1);
                }

                .feature-card h3 {
                    font-size: 1.25rem;
                    margin: 0 0 0.75rem;
                }

                .feature-card p {
                    color: var(--muted);
                    line-height: 1.6;
                    margin: 0;
                }

                /* FAQ */
                .faq-section {
                    padding: 6rem 0;
                    background: var(--surface-deep);
                }

                .faq-badge {
                    display: inline-block;
                    padding: 1rem;
                    background: var(--surface);
                    border: 1px solid var(--border);
                    border-radius: 1rem;
                    color: var(--accent);
                    margin-bottom: 1.5rem;
                }

                .faq-list {
                    max-width: 48rem;
                    margin: 0 auto;
                }

                .faq-item {
                    background: var(--surface);
                    border: 1px solid var(--border);
                    border-radius: 0.75rem;
                    overflow: hidden;
                    margin-bottom: 1rem;
                }

                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                    padding: 1.25rem;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1rem;
                    font-weight: 600;
                    text-align: left;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }

                .faq-question:hover {
                    background: var(--border);
                }

                .faq-chevron {
                    width: 20px;
                    height: 20px;
                    color: #71717a;
                    transition: transform 0.2s ease;
                }

                .faq-chevron.open {
                    transform: rotate(180deg);
                    color: var(--accent-soft);
                }

                .faq-answer {
                    padding: 1.25rem;
                    color: var(--muted);
                    border-top: 1px solid var(--border);
                    animation: faqFadeIn 0.2s ease-out;
                }

                @keyframes faqFadeIn {
                    from { opacity: 0; transform: translateY(-4px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                /* CTA */
                .cta-section {
                    position: relative;
                    overflow: hidden;
                    padding: 6rem 0;
                    background: #172554;
                    text-align: center;
                }

                .cta-grid {
                    position: absolute;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 100%;
                    opacity: 0.05;
                    pointer-events: none;
                }

                .cta-content {
                    position: relative;
                    z-index: 1;
                }

                .cta-content h2 {
                    font-size: clamp(1.875rem, 5vw, 3.75rem);
                    font-weight: 500;
                    margin: 0 0 2rem;
                }

                .cta-content p {
                    font-size: 1.25rem;
                    color: #bfdbfe;
                    max-width: 42rem;
                    margin: 0 auto 3rem;
                }

                .cta-actions {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                }

                .cta-primary, .cta-secondary {
                    padding: 1.25rem 2.5rem;
                    border-radius: 9999px;
                    font-weight: 700;
                    font-size: 1.25rem;
                    text-decoration: none;
                    transition: all 0.2s ease;
                }

                .cta-primary {
                    background: #fff;
                    color: #172554;
                }

                .cta-primary:hover {
                    background: #f4f4f5;
                    transform: scale(1.05);
                }

                .cta-secondary {
                    border: 2px solid rgba(255, 255, 255, 0.2);
                    color: #fff;
                }

                .cta-secondary:hover {
                    background: rgba(255, 255, 255, 0.1);
                }

                /* Footer */
                .site-footer {
                    padding: 3rem 0;
                    color: #71717a;
                    border-top: 1px solid #18181b;
                }

                .footer-content {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 2rem;
                }

                .footer-logo {
                    font-size: 1.5rem;
                    color: #fff;
                }

                .footer-links {
                    display: flex;
                    gap: 2rem;
                    font-size: 0.875rem;
                }

                .footer-links a {
                    color: inherit;
                    text-decoration: none;
                }

                .footer-links a:hover {
                    color: #fff;
                }

                .site-footer p {
                    font-size: 0.875rem;
                }

                @media (max-width: 1024px) {
                    .steps-grid {
                        grid-template-columns: 1fr;
                    }
                    .features-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }

                @media (max-width: 768px) {
                    .nav-links {
                        display: none;
                    }
                    .burger-menu {
                        display: block;
                    }
                    .mobile-menu {
                        display: block;
                    }
                    .features-grid, .video-stats {
                        grid-template-columns: 1fr;
                    }
                    .video-stat:nth-child(2) {
                        border-left: none;
                        border-right: none;
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                        padding: 1.5rem 0;
                    }
                    .step-connector {
                        display: none;
                    }
                    .cta-actions, .footer-content {
                        flex-direction: column;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_line_uses_given_year() {
        assert_eq!(copyright_line(2026), "© 2026 Lexora. Vse pravice pridržane.");
    }
}
