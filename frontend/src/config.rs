#[cfg(debug_assertions)]
pub fn get_logo_source_url() -> &'static str {
    "information.txt"  // Served next to index.html by trunk
}

#[cfg(not(debug_assertions))]
pub fn get_logo_source_url() -> &'static str {
    "/information.txt"  // Production URL
}

pub const SITE_NAME: &str = "HomelyB";

// Fade-in reveal
pub const REVEAL_SELECTOR: &str =
    ".feature, .menu-category, .testimonial-card, .contact-method, .order-step, .benefit-card, .stat-card";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_HIDDEN_OFFSET: &str = "translateY(20px)";
pub const REVEAL_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";

// Stat counter
pub const STATS_SECTION_SELECTOR: &str = ".stats-section";
pub const STAT_NUMBER_SELECTOR: &str = ".stat-number";
pub const STAT_TARGET_ATTR: &str = "data-target";
pub const STATS_THRESHOLD: f64 = 0.5;
pub const COUNTER_DURATION_MS: f64 = 2000.0;
pub const COUNTER_FRAME_MS: f64 = 16.0;

// Registration modal
pub const MODAL_ID: &str = "formModal";
pub const MODAL_CLOSE_ID: &str = "closeFormModal";
pub const MODAL_ACTIVE_CLASS: &str = "active";
pub const REGISTRATION_PARAMS: [(&str, &str); 2] = [("register", "kitchen"), ("form", "register")];

// Navigation
pub const NAVBAR_SELECTOR: &str = ".navbar";
pub const NAV_LINKS_SELECTOR: &str = ".nav-links";
pub const MENU_TOGGLE_SELECTOR: &str = ".mobile-menu-toggle";
pub const MENU_ACTIVE_CLASS: &str = "active";
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;
pub const RESIZE_DEBOUNCE_MS: u32 = 250;
pub const MENU_OPEN_STYLES: [(&str, &str); 10] = [
    ("display", "flex"),
    ("flex-direction", "column"),
    ("position", "absolute"),
    ("top", "80px"),
    ("left", "0"),
    ("right", "0"),
    ("background", "white"),
    ("padding", "20px"),
    ("box-shadow", "0 4px 6px rgba(0, 0, 0, 0.1)"),
    ("gap", "15px"),
];

// Scroll effects
pub const NAVBAR_SHADOW_THRESHOLD_PX: f64 = 50.0;
pub const NAVBAR_SHADOW_SCROLLED: &str = "0 4px 12px rgba(0, 0, 0, 0.15)";
pub const NAVBAR_SHADOW_RESTING: &str = "0 4px 6px rgba(0, 0, 0, 0.1)";
pub const HERO_SELECTOR: &str = ".hero";
pub const PARALLAX_SPEED: f64 = 0.5;
pub const SCROLL_TOP_ID: &str = "scrollToTop";
pub const SCROLL_TOP_THRESHOLD_PX: f64 = 300.0;
pub const VISIBLE_CLASS: &str = "visible";

// Contact copy
pub const CONTACT_LINK_SELECTOR: &str = ".contact-method a";
pub const COPIED_LABEL: &str = "Copied!";
pub const COPIED_COLOR: &str = "var(--secondary-color)";
pub const COPY_FEEDBACK_MS: u32 = 2000;

// Menu item hover
pub const MENU_ITEM_SELECTOR: &str = ".menu-items li";

// Logo + footer
pub const FOOTER_LOGO_ID: &str = "footer-logo";
pub const HERO_LOGO_SELECTOR: &str = ".hero-logo";
pub const FOOTER_TEXT_SELECTOR: &str = ".footer-bottom p";
