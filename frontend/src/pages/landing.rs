use yew::prelude::*;

use crate::behaviors::page::init_page;
use crate::config;

struct Stat {
    target: u32,
    label: &'static str,
}

const STATS: [Stat; 4] = [
    Stat { target: 1200, label: "Meals delivered" },
    Stat { target: 85, label: "Home kitchens" },
    Stat { target: 24, label: "Neighbourhoods" },
    Stat { target: 98, label: "% happy customers" },
];

const FEATURES: [(&str, &str); 3] = [
    ("Cooked at home", "Every dish is made in a registered home kitchen near you, in small batches."),
    ("Honest ingredients", "Cooks list what goes into each meal. No mystery sauces, no shortcuts."),
    ("Picked up or delivered", "Collect from the cook or get it brought over while it is still warm."),
];

const ORDER_STEPS: [(&str, &str); 3] = [
    ("Browse", "See what the cooks in your area are making this week."),
    ("Order", "Reserve a portion before the cook's cut-off time."),
    ("Enjoy", "Pick it up or have it delivered, then tell the cook how it was."),
];

const TESTIMONIALS: [(&str, &str); 2] = [
    ("Tastes like my mother's kitchen in Tampere. I order every Friday now.", "Aino, student"),
    ("I cook for my family anyway. HomelyB lets me share it and earn a bit.", "Mehmet, home cook"),
];

#[function_component(Landing)]
pub fn landing() -> Html {
    // Attach page behaviours once the markup is in the DOM.
    {
        use_effect_with_deps(
            move |_| {
                init_page();
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <nav class="navbar">
                <div class="nav-content">
                    <a href="#home" class="nav-logo">{config::SITE_NAME}</a>
                    <button class="mobile-menu-toggle" aria-label="Open menu">
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                    <ul class="nav-links">
                        <li><a href="#features">{"Why us"}</a></li>
                        <li><a href="#menu">{"Menu"}</a></li>
                        <li><a href="#how">{"How it works"}</a></li>
                        <li><a href="#contact">{"Contact"}</a></li>
                    </ul>
                </div>
            </nav>

            <section id="home" class="hero">
                <img class="hero-logo" src="/assets/logo.png" alt="HomelyB logo" />
                <h1>{"Home cooking, from your neighbours"}</h1>
                <p class="hero-subtitle">{"Real food from real home kitchens, for everyone missing home."}</p>
                <a href="?form=register" class="hero-cta">{"Register your kitchen"}</a>
            </section>

            <section id="features" class="features">
                { for FEATURES.iter().map(|(title, text)| html! {
                    <div class="feature">
                        <h3>{*title}</h3>
                        <p>{*text}</p>
                    </div>
                }) }
            </section>

            <section id="menu" class="menu">
                <div class="menu-category">
                    <h3>{"This week"}</h3>
                    <ul class="menu-items">
                        <li>{"Karelian pies with egg butter"}</li>
                        <li>{"Salmon soup"}</li>
                        <li>{"Lentil dal with flatbread"}</li>
                        <li>{"Cabbage rolls with lingonberry"}</li>
                    </ul>
                </div>
                <div class="menu-category">
                    <h3>{"Sweet"}</h3>
                    <ul class="menu-items">
                        <li>{"Cinnamon buns"}</li>
                        <li>{"Blueberry pie"}</li>
                    </ul>
                </div>
            </section>

            <section id="how" class="order">
                { for ORDER_STEPS.iter().enumerate().map(|(i, (title, text))| html! {
                    <div class="order-step">
                        <span class="step-number">{(i + 1).to_string()}</span>
                        <h3>{*title}</h3>
                        <p>{*text}</p>
                    </div>
                }) }
                <div class="benefit-card">
                    <h3>{"Cooking already? Earn from it."}</h3>
                    <p>{"Registered kitchens set their own menu, prices and portions."}</p>
                </div>
            </section>

            <section class="stats-section">
                { for STATS.iter().map(|stat| html! {
                    <div class="stat-card">
                        <span class="stat-number" data-target={stat.target.to_string()}>{"0"}</span>
                        <span class="stat-label">{stat.label}</span>
                    </div>
                }) }
            </section>

            <section class="testimonials">
                { for TESTIMONIALS.iter().map(|(quote, who)| html! {
                    <div class="testimonial-card">
                        <p>{*quote}</p>
                        <span>{*who}</span>
                    </div>
                }) }
            </section>

            <section id="contact" class="contact">
                <div class="contact-method">
                    <h4>{"Email"}</h4>
                    <a href="mailto:hello@homelyb.fi">{"hello@homelyb.fi"}</a>
                </div>
                <div class="contact-method">
                    <h4>{"Phone"}</h4>
                    <a href="tel:+358401234567">{"+358 40 123 4567"}</a>
                </div>
                <div class="contact-method">
                    <h4>{"WhatsApp"}</h4>
                    <a href="https://wa.me/358401234567">{"+358 40 123 4567"}</a>
                </div>
            </section>

            <footer class="footer">
                <img id="footer-logo" src="/assets/logo.png" alt="HomelyB" />
                <div class="footer-bottom">
                    <p>{"© HomelyB"}</p>
                </div>
            </footer>

            <button id="scrollToTop" class="scroll-to-top" aria-label="Back to top">{"↑"}</button>

            <div id="formModal" class="form-modal">
                <div class="form-modal-content">
                    <button id="closeFormModal" class="form-modal-close" aria-label="Close">{"×"}</button>
                    <h2>{"Register your kitchen"}</h2>
                    <form class="register-form">
                        <input type="text" name="name" placeholder="Your name" />
                        <input type="email" name="email" placeholder="Email" />
                        <input type="text" name="area" placeholder="Neighbourhood" />
                        <button type="submit">{"Send"}</button>
                    </form>
                </div>
            </div>

            <style>
                {r#"
                    .form-modal { display: none; position: fixed; inset: 0; background: rgba(0, 0, 0, 0.5); z-index: 1000; }
                    .form-modal.active { display: flex; align-items: center; justify-content: center; }
                    .form-modal-content { background: white; padding: 30px; border-radius: 12px; max-width: 480px; width: 90%; position: relative; }
                    .scroll-to-top { position: fixed; right: 24px; bottom: 24px; opacity: 0; pointer-events: none; transition: opacity 0.3s ease; }
                    .scroll-to-top.visible { opacity: 1; pointer-events: auto; }
                    .navbar { position: sticky; top: 0; background: white; z-index: 100; }
                    @media (max-width: 768px) {
                        .nav-links { display: none; }
                    }
                "#}
            </style>
        </div>
    }
}
