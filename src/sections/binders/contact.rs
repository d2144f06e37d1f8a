//! Contact details and mail/phone links.

use crate::config::{Contact, SiteConfig};
use once_cell::sync::Lazy;
use scraper::Selector;

use crate::dom::{Document, Patch};
use crate::sections::core::{BindContext, digits_only, non_empty, replace_text};
use crate::sections::{Section, SectionBinder};

static CONTACT_ITEM: Lazy<Selector> = Lazy::new(|| Selector::parse(".contact-info-item").unwrap());
const HIDDEN_CLASS: &str = "hidden";

#[derive(Debug, Default, Clone, Copy)]
pub struct ContactBinder;

impl SectionBinder for ContactBinder {
    fn section(&self) -> Section {
        Section::Contact
    }

    fn bind(&self, config: &SiteConfig, document: &Document, ctx: &BindContext) -> Option<Patch> {
        config
            .contact
            .as_ref()
            .map(|contact| bind_contact(contact, document, ctx))
    }
}

pub fn bind_contact(contact: &Contact, document: &Document, ctx: &BindContext) -> Patch {
    let mut patch = Patch::new();
    let email = non_empty(contact.email.as_ref());
    let phone = non_empty(contact.phone.as_ref());

    replace_text(&mut patch, document, &ctx.field("email"), email);
    replace_text(&mut patch, document, &ctx.field("phone"), phone);
    replace_text(
        &mut patch,
        document,
        &ctx.field("responseTime"),
        non_empty(contact.response_time.as_ref()),
    );

    if let Some(email) = email {
        for link in document.select(&ctx.field("emailLink")) {
            patch.set_attr(link, "href", format!("mailto:{email}"));
            patch.set_text(link, email);
        }
    }

    if let Some(phone) = phone {
        let dial = format!("tel:{}", digits_only(phone));
        for link in document.select(&ctx.field("phoneLink")) {
            patch.set_attr(link, "href", dial.as_str());
            patch.set_text(link, phone);
            if let Some(item) = document.closest(link, &CONTACT_ITEM) {
                patch.remove_class(item, HIDDEN_CLASS);
            }
        }
    }

    patch
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::selector::css;
    use crate::sections::test_support::render;

    const PAGE: &str = r##"<body>
        <div class="contact-info-item hidden"><a data-template="phoneLink" href="#">call</a></div>
        <a data-template="emailLink" href="#">mail</a>
        <span data-template="responseTime">soon</span>
    </body>"##;

    #[test]
    fn dial_link_uses_digits_but_keeps_label() {
        let config = SiteConfig {
            contact: Some(Contact {
                email: Some("ada@example.com".into()),
                phone: Some("(555) 123-4567".into()),
                response_time: None,
            }),
            ..SiteConfig::default()
        };
        let (document, _) = render(&ContactBinder, &config, PAGE);

        let phone = document
            .select_first(&css(r#"[data-template="phoneLink"]"#))
            .unwrap();
        assert_eq!(document.attr(phone, "href"), Some("tel:5551234567"));
        assert_eq!(document.text_content(phone), "(555) 123-4567");
        let item = document.select_first(&css(".contact-info-item")).unwrap();
        assert!(!document.has_class(item, "hidden"));

        let email = document
            .select_first(&css(r#"[data-template="emailLink"]"#))
            .unwrap();
        assert_eq!(document.attr(email, "href"), Some("mailto:ada@example.com"));

        let response = document
            .select_first(&css(r#"[data-template="responseTime"]"#))
            .unwrap();
        assert_eq!(document.text_content(response), "soon");
    }

    #[test]
    fn phone_item_stays_hidden_without_phone() {
        let config = SiteConfig {
            contact: Some(Contact::default()),
            ..SiteConfig::default()
        };
        let (document, _) = render(&ContactBinder, &config, PAGE);
        let item = document.select_first(&css(".contact-info-item")).unwrap();
        assert!(document.has_class(item, "hidden"));
    }
}
