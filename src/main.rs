//! LayoutML demo site.
//!
//! Serves a small site built from element trees:
//!
//! ```text
//! /              home page (layouts, styled elements)
//! /contact       form with inputs and a select
//! /user/<id>     async handler with a path parameter
//! /api/ping      route from an included router
//! anything else  error page
//! ```
//!
//! Usage: `layoutml [config.toml]`

use std::path::PathBuf;

use layoutml::config::AppConfig;
use layoutml::document::{Page, Script};
use layoutml::html::{Direction, Element, Input, Layout, Select, TextArea};
use layoutml::http::{App, HttpServer};
use layoutml::lifecycle::{signals, startup, Shutdown};
use layoutml::observability;
use layoutml::routing::{PathParams, Router};

fn base_page(title: &str) -> Page {
    let nav = Layout::horizontal()
        .named("SiteNav")
        .with_styles("gap: 16px; padding: 12px")
        .with_element(Element::anchor("/", "Home"))
        .with_element(Element::anchor("/contact", "Contact"))
        .with_element(Element::anchor("/user/42", "Profile"));

    let mut page = Page::new(title).with_language("en").with_element(nav);
    page.body_mut().styles_mut().set_margin("0").set_font_family("sans-serif");
    page
}

fn home(_: PathParams) -> Page {
    let mut hero = Layout::responsive("768px", Direction::Column).named("Hero");
    hero.stretch(false);
    hero.add_elements([
        Element::heading(1, "LayoutML").named("HeroTitle").with_styles("font-size: 3rem"),
        Element::paragraph("Pages are element trees, rendered on request."),
    ]);

    let mut features = Layout::vertical().named("Features");
    features.set_gap("8px");
    for text in ["Typed attributes", "Generated stylesheets", "Sync and async routes"] {
        features.add_element(Element::paragraph(text).named("Feature"));
    }

    let mut page = base_page("LayoutML").named("Home").with_element(hero).with_element(features);
    page.body_mut().add_script(Script::inline("console.log('home');"));
    page
}

fn contact(_: PathParams) -> Page {
    let form = Element::form("/contact", "post")
        .named("ContactForm")
        .with_styles("display: grid; gap: 8px; max-width: 420px")
        .with_child(Element::label(Some("name"), "Name"))
        .with_child(Input::text("name").with_id("name").required())
        .with_child(Element::label(Some("email"), "Email"))
        .with_child(Input::email("email").with_id("email").with_placeholder("you@example.com"))
        .with_child(
            Select::new("topic")
                .with_option("general", "General")
                .with_option("support", "Support")
                .select("general"),
        )
        .with_child(TextArea::new("message").with_size(5, 40))
        .with_child(Input::submit("Send"));

    base_page("Contact").named("Contact").with_element(form)
}

async fn user(params: PathParams) -> Page {
    let id = params.get("id").unwrap_or("unknown").to_string();
    base_page(&format!("User {id}"))
        .named("User")
        .with_element(Element::heading(2, format!("User {id}")))
        .with_element(Element::paragraph("Loaded by an async handler."))
}

fn api_router() -> Router<Page> {
    let mut api = Router::with_prefix("/v0");
    api.route("/ping", |_| {
        Page::new("pong").with_element(Element::paragraph("pong"))
    });
    api
}

fn build_app(config: &AppConfig) -> Result<App, Box<dyn std::error::Error>> {
    let mut app = App::from_config(config);
    app.route("/", home)
        .route("/contact", contact)
        .route_async("/user/<id>", user);
    app.include_router(&api_router(), "/api")?;
    app.set_error_page(
        &base_page("Not found")
            .named("NotFound")
            .with_element(Element::heading(1, "Nothing here")),
    );
    Ok(app)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = startup::load(config_path.as_deref())?;

    observability::init_logging(&config.observability.log_filter);
    tracing::info!("layoutml v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.server.bind_address,
        styles_dir = %config.styles.dir,
        static_root = %config.static_files.root,
        "Configuration loaded"
    );

    startup::start_metrics(&config)?;

    let mut app = build_app(&config)?;
    startup::prepare(&mut app, &config).await?;

    let listener = startup::bind(&config).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(address = %local_addr, "Listening for connections");

    let shutdown = Shutdown::new();
    let receiver = shutdown.subscribe();
    signals::spawn_signal_listener(shutdown);

    HttpServer::new(config.server.clone(), app)
        .run(listener, receiver)
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
