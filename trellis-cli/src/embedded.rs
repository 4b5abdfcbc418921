//! Demo view set baked into the binary at compile time via `include_str!`.

use trellis_renderer::EmbeddedSource;

const DEMO_VIEWS: &[(&str, &str)] = &[
    ("layouts/base.html.tera", include_str!("../views/layouts/base.html.tera")),
    ("layouts/plain.html.tera", include_str!("../views/layouts/plain.html.tera")),
    ("pages/index.html.tera", include_str!("../views/pages/index.html.tera")),
    ("pages/error.html.tera", include_str!("../views/pages/error.html.tera")),
    (
        "pages/auth/login.html.tera",
        include_str!("../views/pages/auth/login.html.tera"),
    ),
    (
        "pages/auth/signup.html.tera",
        include_str!("../views/pages/auth/signup.html.tera"),
    ),
    ("shared/footer.html.tera", include_str!("../views/shared/footer.html.tera")),
    ("shared/scripts.html.tera", include_str!("../views/shared/scripts.html.tera")),
];

pub fn demo_views() -> EmbeddedSource {
    EmbeddedSource::from_static(DEMO_VIEWS)
}
