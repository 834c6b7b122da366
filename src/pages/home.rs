use log::info;
use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::i18n::Lang;
use crate::scroll::reactor::ScrollReactor;
use crate::scroll::reveal::ScrollReveal;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub lang: Lang,
}

/// The single marketing page. Scroll behaviors attach once on mount and detach
/// on unmount; a language switch re-renders copy without re-observing elements.
#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let lang = props.lang;

    use_effect_with_deps(
        move |_| {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            let reveal = ScrollReveal::attach(&document).ok();
            let reactor = ScrollReactor::attach(&window, &document).ok();
            info!("scroll behaviors attached");

            move || {
                drop(reveal);
                drop(reactor);
                info!("scroll behaviors detached");
            }
        },
        (),
    );

    let values = [
        (
            "01",
            ("Excellence Without Compromise", "L'Excellence Sans Compromis"),
            (
                "Superior materials, precise craftsmanship, and meticulous production control. Every detail, from fibre selection to finishing, reflects our commitment to quality.",
                "Matériaux supérieurs, savoir-faire précis et contrôle de production méticuleux. Chaque détail, de la sélection des fibres aux finitions, reflète notre engagement envers la qualité.",
            ),
        ),
        (
            "02",
            ("Value That Endures", "Une Valeur Durable"),
            (
                "Packaging designed to remain in use long after purchase. Our products extend brand visibility while remaining cost-effective at scale.",
                "Des emballages conçus pour rester en usage longtemps après l'achat. Nos produits prolongent la visibilité de la marque tout en restant rentables à grande échelle.",
            ),
        ),
        (
            "03",
            ("Design with Purpose", "Un Design Réfléchi"),
            (
                "Every product elevates brand identity while reinforcing responsible values. Each piece is more than packaging, it is a statement of identity.",
                "Chaque produit valorise l'identité de la marque tout en renforçant des valeurs responsables. Chaque pièce est plus qu'un emballage, c'est une déclaration d'identité.",
            ),
        ),
        (
            "04",
            ("Environmental & Ethical Responsibility", "Responsabilité Environnementale et Éthique"),
            (
                "We prioritise natural, biodegradable materials and responsible sourcing practices across every stage of production.",
                "Nous privilégions les matériaux naturels et biodégradables ainsi que des pratiques d'approvisionnement responsables à chaque étape de la production.",
            ),
        ),
    ];

    let products = [
        (
            ("Our Signature", "Notre Signature"),
            ("Premium Custom Jute Bags", "Sacs en Jute Personnalisés"),
            (
                "Crafted for longevity. Designed for visibility. Our reinforced, reusable jute bags have become trusted retail staples, transforming everyday packaging into lasting brand presence.",
                "Conçus pour durer. Pensés pour la visibilité. Nos sacs en jute renforcés et réutilisables sont devenus des incontournables du commerce, transformant l'emballage quotidien en présence de marque durable.",
            ),
        ),
        (
            ("Brand Experience", "Expérience de Marque"),
            ("Reusable Retail Packaging", "Emballages Réutilisables"),
            (
                "A range of reusable, brandable bags and packaging formats that enhance customer experience and brand presence.",
                "Une gamme de sacs et formats d'emballage réutilisables et personnalisables qui enrichissent l'expérience client et la présence de la marque.",
            ),
        ),
        (
            ("Tailored Solutions", "Solutions Sur Mesure"),
            ("Corporate & Promotional", "Entreprise & Promotion"),
            (
                "Tailored packaging for events, corporate gifting, and brand activation with custom design options.",
                "Des emballages sur mesure pour les événements, les cadeaux d'entreprise et l'activation de marque, avec des options de design personnalisées.",
            ),
        ),
    ];

    let services = [
        (
            ("Logo & Artwork Integration", "Intégration de Logo et Graphismes"),
            (
                "Precise reproduction of your brand identity across all formats",
                "Reproduction précise de votre identité de marque sur tous les formats",
            ),
        ),
        (
            ("Pantone-Matched Colours", "Couleurs Pantone"),
            (
                "Exact colour matching for consistent brand representation",
                "Correspondance exacte des couleurs pour une représentation cohérente de la marque",
            ),
        ),
        (
            ("Format & Size Tailoring", "Formats et Tailles Sur Mesure"),
            (
                "Custom dimensions to suit your specific product requirements",
                "Des dimensions personnalisées adaptées aux exigences de vos produits",
            ),
        ),
        (
            ("Material Selection Guidance", "Conseil en Sélection de Matériaux"),
            (
                "Strategic advice on fibre and finish for optimal results",
                "Des conseils stratégiques sur les fibres et les finitions pour un résultat optimal",
            ),
        ),
        (
            ("Pre-Production Support", "Accompagnement Pré-Production"),
            (
                "Dedicated assistance through sampling and approval stages",
                "Une assistance dédiée durant les étapes d'échantillonnage et de validation",
            ),
        ),
    ];

    let partnership = [
        (
            ("Strategic Volume Pricing", "Tarifs Dégressifs Stratégiques"),
            (
                "Competitive rates that scale with your business needs",
                "Des tarifs compétitifs qui évoluent avec les besoins de votre entreprise",
            ),
        ),
        (
            ("Extensive Customisation", "Personnalisation Étendue"),
            (
                "Limitless options for materials, design, and finishing",
                "Des options illimitées de matériaux, de design et de finitions",
            ),
        ),
        (
            ("Global Sourcing, Local Service", "Sourcing Mondial, Service Local"),
            (
                "International reach with dedicated European support",
                "Une portée internationale avec un accompagnement européen dédié",
            ),
        ),
        (
            ("Quote to Delivery", "Du Devis à la Livraison"),
            (
                "Professional guidance at every stage of your project",
                "Un accompagnement professionnel à chaque étape de votre projet",
            ),
        ),
    ];

    html! {
        <main>
            // Hero
            <section class="hero">
                <div class="hero__background">
                    <div class="hero__image"></div>
                </div>
                <div class="hero__content">
                    <span class="hero__eyebrow">
                        { lang.pick("Premium Sustainable Packaging", "Emballage Durable Haut de Gamme") }
                    </span>
                    <h1 class="hero__title">
                        { lang.pick(
                            "Sustainable Packaging Solutions that Elevate Your Brand",
                            "Des Solutions d'Emballage Durables qui Élèvent Votre Marque",
                        ) }
                    </h1>
                    <p class="hero__subtitle">
                        { lang.pick(
                            "From premium custom jute bags to tailored packaging solutions, we help businesses amplify visibility, quality, and environmental impact.",
                            "Des sacs en jute personnalisés haut de gamme aux solutions d'emballage sur mesure, nous aidons les entreprises à amplifier leur visibilité, leur qualité et leur impact environnemental.",
                        ) }
                    </p>
                    <div class="hero__cta">
                        <a href="#contact" class="btn-primary">
                            { lang.pick("Request Your Proposal", "Demandez Votre Proposition") }
                        </a>
                        <a href="#philosophy" class="btn-outline">
                            { lang.pick("Discover More", "En Savoir Plus") }
                        </a>
                    </div>
                </div>
            </section>

            // Intro blurb
            <section class="section-cream intro">
                <p class="reveal intro__text">
                    { lang.pick(
                        "International Jute is a European packaging partner specializing in high-quality custom jute bags and sustainable retail solutions. We combine global manufacturing expertise with refined design standards to deliver packaging that strengthens brand visibility and reflects responsible values.",
                        "International Jute est un partenaire européen de l'emballage, spécialisé dans les sacs en jute personnalisés de haute qualité et les solutions durables pour le commerce. Nous allions expertise industrielle mondiale et exigence de design pour livrer des emballages qui renforcent la visibilité des marques et incarnent des valeurs responsables.",
                    ) }
                </p>
            </section>

            // Philosophy / mission
            <section id="philosophy" class="section-ivory philosophy">
                <div class="philosophy__grid">
                    <div class="reveal">
                        <span class="section-label">{ lang.pick("Our Mission", "Notre Mission") }</span>
                        <h2>{ lang.pick("Our Philosophy", "Notre Philosophie") }</h2>
                    </div>
                    <div class="reveal">
                        <p>
                            { lang.pick(
                                "At International Jute, we believe packaging should be purposeful, refined, and enduring. Our mission is to provide premium-quality packaging solutions that combine sustainability, bespoke design, cost efficiency, and long-term brand visibility.",
                                "Chez International Jute, nous croyons que l'emballage doit être utile, raffiné et durable. Notre mission est de fournir des solutions d'emballage haut de gamme qui allient durabilité, design sur mesure, maîtrise des coûts et visibilité de marque à long terme.",
                            ) }
                        </p>
                        <p>
                            { lang.pick(
                                "Sustainable fibers and responsible production are core to our philosophy, helping brands reduce environmental impact while strengthening their market presence.",
                                "Les fibres durables et la production responsable sont au cœur de notre philosophie, aidant les marques à réduire leur impact environnemental tout en renforçant leur présence sur le marché.",
                            ) }
                        </p>
                        <p class="philosophy__quote">
                            { lang.pick(
                                "\u{201c}We deliver products designed not for single use, but for lasting presence.\u{201d}",
                                "\u{ab}\u{a0}Nous livrons des produits conçus non pas pour un usage unique, mais pour une présence durable.\u{a0}\u{bb}",
                            ) }
                        </p>
                    </div>
                </div>
            </section>

            // Values
            <section class="section-dark standards">
                <div class="standards__heading">
                    <span class="reveal section-label">{ lang.pick("What We Stand For", "Ce Que Nous Défendons") }</span>
                    <h2 class="reveal">{ lang.pick("Our Standards", "Nos Exigences") }</h2>
                </div>
                <div class="standards__grid">
                    { for values.iter().map(|(num, title, text)| html! {
                        <div class="reveal standards__item" key={*num}>
                            <span class="standards__num">{ *num }</span>
                            <div>
                                <h3>{ lang.pick(title.0, title.1) }</h3>
                                <p>{ lang.pick(text.0, text.1) }</p>
                            </div>
                        </div>
                    }) }
                </div>
            </section>

            // Products
            <section id="products" class="section-cream products">
                <div class="products__heading">
                    <span class="reveal section-label">{ lang.pick("What We Offer", "Ce Que Nous Proposons") }</span>
                    <h2 class="reveal">{ lang.pick("Our Products", "Nos Produits") }</h2>
                    <p class="reveal">
                        { lang.pick(
                            "We offer a distinct range of sustainable packaging options designed to meet the needs of retail, corporate, and promotional applications.",
                            "Nous proposons une gamme distincte d'options d'emballage durables, conçues pour répondre aux besoins du commerce, de l'entreprise et de la promotion.",
                        ) }
                    </p>
                </div>
                <div class="products__grid">
                    { for products.iter().map(|(subtitle, title, text)| html! {
                        <div class="reveal products__card" key={title.0}>
                            <span class="products__subtitle">{ lang.pick(subtitle.0, subtitle.1) }</span>
                            <h3>{ lang.pick(title.0, title.1) }</h3>
                            <p>{ lang.pick(text.0, text.1) }</p>
                        </div>
                    }) }
                </div>
            </section>

            // Services
            <section id="services" class="section-ivory services">
                <div class="services__grid">
                    <div class="reveal">
                        <span class="section-label">{ lang.pick("Bespoke Capabilities", "Capacités Sur Mesure") }</span>
                        <h2>{ lang.pick("Fully Bespoke Branding & Support", "Personnalisation et Accompagnement Complets") }</h2>
                        <p>
                            { lang.pick(
                                "We provide comprehensive customization services to ensure your packaging aligns with your brand's vision. International Jute supports every stage from concept to final delivery.",
                                "Nous offrons des services de personnalisation complets pour que votre emballage reflète la vision de votre marque. International Jute vous accompagne à chaque étape, du concept à la livraison finale.",
                            ) }
                        </p>
                    </div>
                    <div class="services__list">
                        { for services.iter().map(|(service, desc)| html! {
                            <div class="reveal services__item" key={service.0}>
                                <h4>{ lang.pick(service.0, service.1) }</h4>
                                <p>{ lang.pick(desc.0, desc.1) }</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            // Quality & sourcing
            <section class="section-gradient sourcing">
                <span class="reveal section-label">{ lang.pick("Quality & Sourcing", "Qualité et Sourcing") }</span>
                <h2 class="reveal">{ lang.pick("Manufactured with Precision", "Fabriqué avec Précision") }</h2>
                <p class="reveal">
                    { lang.pick(
                        "Through partnerships with established manufacturers, we deliver packaging that meets exacting quality standards. Our partners use advanced production methods and rigorous quality checks, ensuring dependable performance and consistent results.",
                        "Grâce à des partenariats avec des fabricants établis, nous livrons des emballages qui répondent à des normes de qualité exigeantes. Nos partenaires utilisent des méthodes de production avancées et des contrôles qualité rigoureux, garantissant des performances fiables et des résultats constants.",
                    ) }
                </p>
                <p class="reveal">
                    { lang.pick(
                        "International Jute oversees every stage, from customization validation to delivery, ensuring European service standards at every step.",
                        "International Jute supervise chaque étape, de la validation de la personnalisation à la livraison, garantissant des standards de service européens tout au long du processus.",
                    ) }
                </p>
            </section>

            // Image break with parallax layer
            <section class="image-break">
                <div class="image-break__img"></div>
            </section>

            // Why choose us
            <section class="section-cream partnership">
                <div class="partnership__heading">
                    <span class="reveal section-label">{ lang.pick("Partnership", "Partenariat") }</span>
                    <h2 class="reveal">{ lang.pick("Your Strategic Packaging Partner", "Votre Partenaire Stratégique en Emballage") }</h2>
                    <p class="reveal">
                        { lang.pick(
                            "We are more than suppliers, we are partners in elevating your brand through sustainable, effective packaging.",
                            "Nous sommes plus que des fournisseurs, nous sommes des partenaires qui élèvent votre marque grâce à un emballage durable et efficace.",
                        ) }
                    </p>
                </div>
                <div class="partnership__grid">
                    { for partnership.iter().map(|(title, desc)| html! {
                        <div class="reveal partnership__item" key={title.0}>
                            <h4>{ lang.pick(title.0, title.1) }</h4>
                            <p>{ lang.pick(desc.0, desc.1) }</p>
                        </div>
                    }) }
                </div>
            </section>

            // Story
            <section id="story" class="section-ivory story">
                <div class="story__grid">
                    <div class="reveal story__emblem">
                        <span class="story__initials">{ "IJ" }</span>
                        <span class="story__wordmark">{ "International Jute" }</span>
                    </div>
                    <div>
                        <span class="reveal section-label">{ lang.pick("Our Story", "Notre Histoire") }</span>
                        <h2 class="reveal">{ lang.pick("Crafted for Purpose", "Façonné avec Intention") }</h2>
                        <p class="reveal">
                            { lang.pick(
                                "International Jute was founded with a clear and simple vision: sustainable packaging can be both elegant and commercially intelligent.",
                                "International Jute a été fondée avec une vision claire et simple : un emballage durable peut être à la fois élégant et commercialement intelligent.",
                            ) }
                        </p>
                        <p class="reveal">
                            { lang.pick(
                                "In response to growing demand for responsible alternatives, we developed a model that combines international manufacturing strength with refined European service.",
                                "Face à la demande croissante d'alternatives responsables, nous avons développé un modèle qui allie la force industrielle internationale à un service européen raffiné.",
                            ) }
                        </p>
                        <p class="reveal">
                            { lang.pick(
                                "We support brands with innovative packaging solutions that balance design, durability, and environmental responsibility, and we continue to evolve with client needs and sustainability standards.",
                                "Nous accompagnons les marques avec des solutions d'emballage innovantes qui équilibrent design, durabilité et responsabilité environnementale, et nous continuons d'évoluer avec les besoins des clients et les normes de durabilité.",
                            ) }
                        </p>
                    </div>
                </div>
            </section>

            // Contact
            <section id="contact" class="section-dark contact">
                <span class="reveal section-label">{ lang.pick("Get in Touch", "Contactez-Nous") }</span>
                <h2 class="reveal">
                    { lang.pick("Let's Discuss Your Packaging Solution", "Parlons de Votre Solution d'Emballage") }
                </h2>
                <p class="reveal">
                    { lang.pick(
                        "We would be delighted to discuss your project and provide you with a tailored proposal.",
                        "Nous serions ravis de discuter de votre projet et de vous fournir une proposition sur mesure.",
                    ) }
                </p>
                <div class="contact__details">
                    <div class="reveal">
                        <span class="contact__label">{ "Email" }</span>
                        <a href="mailto:info@internationaljute.co.uk">{ "info@internationaljute.co.uk" }</a>
                    </div>
                    <div class="reveal">
                        <span class="contact__label">{ "France" }</span>
                        <a href="tel:+33664639962">{ "+33 6 64 63 99 62" }</a>
                    </div>
                    <div class="reveal">
                        <span class="contact__label">{ lang.pick("United Kingdom", "Royaume-Uni") }</span>
                        <a href="tel:+447476889555">{ "+44 7476 889 555" }</a>
                    </div>
                </div>
                <div class="reveal contact__form-wrapper">
                    <ContactForm {lang} />
                </div>
            </section>

            // Footer
            <footer class="footer">
                <div class="footer__brand">
                    <span class="footer__name">{ "International Jute" }</span>
                    <span class="footer__tagline">
                        { lang.pick("Premium Sustainable Packaging", "Emballage Durable Haut de Gamme") }
                    </span>
                </div>
                <div class="footer__links">
                    <a href="#philosophy">{ lang.pick("Philosophy", "Philosophie") }</a>
                    <a href="#products">{ lang.pick("Products", "Produits") }</a>
                    <a href="#services">{ "Services" }</a>
                    <a href="#story">{ lang.pick("Our Story", "Notre Histoire") }</a>
                    <a href="#contact">{ "Contact" }</a>
                </div>
                <div class="footer__domains">
                    <span>{ "internationaljute.org" }</span>
                    <span>{ "internationaljute.co.uk" }</span>
                </div>
                <p class="footer__copyright">
                    { lang.pick(
                        "© 2026 International Jute. All rights reserved.",
                        "© 2026 International Jute. Tous droits réservés.",
                    ) }
                </p>
            </footer>
        </main>
    }
}
