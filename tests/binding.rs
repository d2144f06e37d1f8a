use std::sync::Arc;

use site_binder_rs::dom::attr_equals;
use site_binder_rs::{
    ConfigResolver, ConfigSource, ConfigStore, DeclarativeWidgets, Document, MemoryStore, Page,
    Section, Selector, SiteBinder, SiteConfig, VERSION,
};

const TEMPLATE: &str = r##"<!DOCTYPE html>
<html>
<head>
    <title>Home | Template</title>
    <meta name="description" content="Template description">
</head>
<body>
    <h1 data-template="name">Jane Template</h1>
    <div data-template="fullBio"><p>Lorem ipsum.</p></div>
    <div class="contact-info-item hidden">
        <a data-template="phoneLink" href="#">(000) 000-0000</a>
    </div>
    <div data-template="socialLinks"><a href="#">placeholder</a></div>
    <div data-template="servicesAccordion" class="dsn-accordion"></div>
    <div data-template="cardSlider"></div>
    <div data-template="testimonials"></div>
    <div data-template="timeline"><div>static entry</div></div>
    <section data-template-image="about" style="min-height: 300px;"></section>
    <p data-template="copyright">&copy; Template</p>
</body>
</html>"##;

const CONFIG: &str = r#"{
    "personal": {
        "name": "Ada Lovelace",
        "fullBio": "Para one.\n\nPara two."
    },
    "contact": { "phone": "(555) 123-4567" },
    "social": { "github": "https://g", "twitter": "" },
    "services": [
        { "icon": "fas fa-code", "title": "Build", "shortDesc": "s", "fullDesc": "f", "features": ["a"] },
        { "icon": "fas fa-chart", "title": "Scale", "shortDesc": "s", "fullDesc": "f", "features": [] },
        { "icon": "fas fa-lock", "title": "Secure", "shortDesc": "s", "fullDesc": "f", "features": [] }
    ],
    "testimonials": [
        { "quote": "Great", "author": "Bo", "role": "CTO", "company": "Acme" }
    ],
    "images": { "about": "/img/about.jpg" },
    "seo": { "siteTitle": "Ada Consulting", "siteDescription": "Analytical engines" },
    "footer": { "copyright": "Ada Lovelace" }
}"#;

const RICH_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Home | Template</title>
    <script>if (a < b && c > d) { init("<p>"); }</script>
    <style>.hero > h1 { content: "&amp;"; }</style>
    <noscript><link rel="stylesheet" href="/css/no-js.css"></noscript>
</head>
<body>
    <noscript><iframe src="https://example.com/tag" height="0" width="0"></iframe></noscript>
    <h1 data-template="name">Jane &amp; Co&nbsp;&lt;3</h1>
    <svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" viewBox="0 0 10 10">
        <use xlink:href="#icon-arrow"></use>
    </svg>
    <pre>

    indented snippet</pre>
    <textarea name="msg">
keep</textarea>
    <!-- footer -->
    <p data-template="copyright">&copy; Template</p>
</body>
</html>"##;

fn config() -> SiteConfig {
    SiteConfig::from_json_str(CONFIG).unwrap()
}

fn css(selector: &str) -> Selector {
    Selector::parse(selector).unwrap()
}

fn binder_with(store: MemoryStore, default: SiteConfig) -> SiteBinder {
    SiteBinder::builder()
        .with_store(Arc::new(store))
        .with_default_config(default)
        .with_widget_host(DeclarativeWidgets)
        .build()
}

fn marked(page: &Page, marker: &str) -> site_binder_rs::NodeId {
    page.select_first(&attr_equals("data-template", marker))
        .unwrap()
}

#[test]
fn version_is_exposed() {
    assert!(!VERSION.is_empty());
}

#[test]
fn renders_documented_examples() {
    let mut binder = binder_with(MemoryStore::new(), config());
    let mut page = Page::parse(TEMPLATE);
    let report = binder.init(&mut page);
    assert_eq!(binder.source(), ConfigSource::Default);
    assert!(report.was_applied(Section::Social));

    let document = page.document();

    let social = marked(&page, "socialLinks");
    let links = document.select_within(social, &css("a"));
    assert_eq!(links.len(), 1);
    assert_eq!(document.attr(links[0], "href"), Some("https://g"));

    let bio = marked(&page, "fullBio");
    let paragraphs = document.select_within(bio, &css("p"));
    let texts: Vec<_> = paragraphs
        .iter()
        .map(|paragraph| document.text_content(*paragraph))
        .collect();
    assert_eq!(texts, vec!["Para one.", "Para two."]);

    let phone = marked(&page, "phoneLink");
    assert_eq!(document.attr(phone, "href"), Some("tel:5551234567"));
    assert_eq!(document.text_content(phone), "(555) 123-4567");
    let item = document
        .select_first(&css(".contact-info-item"))
        .unwrap();
    assert!(!document.has_class(item, "hidden"));

    let about = page
        .select_first(&css(r#"[data-template-image="about"]"#))
        .unwrap();
    assert_eq!(
        document.style_property(about, "background-image"),
        Some("url('/img/about.jpg')".to_string())
    );
}

#[test]
fn list_sections_render_one_child_per_record() {
    let mut binder = binder_with(MemoryStore::new(), config());
    let mut page = Page::parse(TEMPLATE);
    binder.init(&mut page);
    let document = page.document();

    let accordion = marked(&page, "servicesAccordion");
    let titles: Vec<_> = document
        .select_within(accordion, &css(".service-name"))
        .into_iter()
        .map(|title| document.text_content(title))
        .collect();
    assert_eq!(titles, vec!["Build", "Scale", "Secure"]);
    assert_eq!(document.element_children(accordion).len(), 3);

    let cards = marked(&page, "cardSlider");
    assert_eq!(document.element_children(cards).len(), 3);
    assert!(document.has_class(cards, "slick-initialized"));

    let testimonials = marked(&page, "testimonials");
    assert_eq!(document.element_children(testimonials).len(), 1);
}

#[test]
fn absent_sections_leave_markup_untouched() {
    let mut binder = binder_with(MemoryStore::new(), config());
    let mut page = Page::parse(TEMPLATE);
    let timeline = marked(&page, "timeline");
    let before = page.document().outer_html(timeline);

    let report = binder.init(&mut page);
    assert!(report.skipped.contains(&Section::Timeline));
    assert_eq!(page.document().outer_html(timeline), before);
}

#[test]
fn applying_twice_is_idempotent() {
    let mut binder = binder_with(MemoryStore::new(), config());
    let mut page = Page::parse(TEMPLATE);
    binder.init(&mut page);
    let first = page.to_html();

    binder.apply(&mut page);
    assert_eq!(page.to_html(), first);

    let title = page.select_first(&css("title")).unwrap();
    assert_eq!(page.document().text_content(title), "Home | Ada Consulting");
}

#[test]
fn empty_config_renders_rich_markup_unchanged() {
    let mut binder = SiteBinder::builder().disable_logging().build();
    let expected = Document::parse(RICH_TEMPLATE).to_html();

    let once = binder.render(RICH_TEMPLATE);
    assert_eq!(once, expected);
    assert_eq!(binder.render(&once), once);

    assert!(once.contains(r#"<noscript><iframe src="https://example.com/tag""#));
    assert!(once.contains("if (a < b && c > d)"));
    assert!(once.contains(r##"<use xlink:href="#icon-arrow">"##));
    assert!(once.contains("<pre>\n\n    indented snippet</pre>"));
    assert!(once.contains("Jane &amp; Co&nbsp;&lt;3"));
}

#[test]
fn full_config_on_rich_markup_is_idempotent() {
    let mut binder = binder_with(MemoryStore::new(), config());
    let mut page = Page::parse(RICH_TEMPLATE);
    binder.init(&mut page);
    let first = page.to_html();
    binder.apply(&mut page);
    assert_eq!(page.to_html(), first);

    assert!(first.contains("Ada Lovelace"));
    assert!(first.contains(r##"<use xlink:href="#icon-arrow">"##));
    assert!(first.contains("<pre>\n\n    indented snippet</pre>"));
    assert!(first.contains(r#"<noscript><link rel="stylesheet" href="/css/no-js.css"></noscript>"#));
}

#[test]
fn accordion_clicks_work_on_rendered_markup() {
    let mut binder = binder_with(MemoryStore::new(), config());
    let mut page = Page::parse(TEMPLATE);
    binder.init(&mut page);

    let headers = page.select(&css(".dsn-accordion-header"));
    assert_eq!(headers.len(), 3);
    assert!(page.click(headers[0]).is_some());
    assert!(page.click(headers[1]).is_some());

    let items = page.select(&css(".dsn-accordion-item"));
    let document = page.document();
    assert!(!document.has_class(items[0], "active"));
    assert!(document.has_class(items[1], "active"));
}

#[test]
fn saved_config_survives_a_fresh_resolve() {
    let store = MemoryStore::new();
    let default = SiteConfig::default();
    let mut binder = binder_with(store.clone(), default.clone());
    let mut page = Page::parse(TEMPLATE);
    binder.init(&mut page);

    let saved = config();
    binder.save(saved.clone(), &mut page).unwrap();

    let reloaded = ConfigResolver::new(Arc::new(store.clone()), default.clone()).load();
    assert_eq!(reloaded.source, ConfigSource::Stored);
    assert_eq!(reloaded.config, saved);

    binder.reset(&mut page).unwrap();
    let reloaded = ConfigResolver::new(Arc::new(store), default.clone()).load();
    assert_eq!(reloaded.source, ConfigSource::Default);
    assert_eq!(reloaded.config, default);
}

#[test]
fn corrupt_storage_falls_back_to_default() {
    let store = MemoryStore::new();
    store.write("siteConfig", "{ not json").unwrap();
    let mut binder = binder_with(store, config());
    let mut page = Page::parse(TEMPLATE);
    binder.init(&mut page);

    assert_eq!(binder.source(), ConfigSource::Fallback);
    let name = marked(&page, "name");
    assert_eq!(page.document().text_content(name), "Ada Lovelace");
}

#[test]
fn redb_storage_persists_between_binders() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("site.redb");
    let saved = config();

    {
        let mut binder = SiteBinder::builder()
            .with_storage_path(&path)
            .unwrap()
            .build();
        let mut page = Page::parse(TEMPLATE);
        binder.init(&mut page);
        binder.save(saved.clone(), &mut page).unwrap();
    }

    let mut binder = SiteBinder::builder()
        .with_storage_path(&path)
        .unwrap()
        .build();
    binder.load();
    let html = binder.render(TEMPLATE);
    assert_eq!(binder.source(), ConfigSource::Stored);
    assert_eq!(binder.config(), &saved);
    assert!(html.contains("tel:5551234567"));
}
