//! DOM construction of the static page shell.
//!
//! Everything here is fixed content from [`crate::content`]: headline, creed
//! columns, social link buttons, the showcase image, and the contract
//! address. The background canvas is owned by `static/index.html` and never
//! touched from this module.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlImageElement};

use crate::content::{self, LinkIcon, SocialLink};

/// Builds the page shell inside `root`.
pub fn mount(document: &Document, root: &Element) -> Result<(), JsValue> {
    let headline = document.create_element("h1")?;
    headline.set_class_name("headline");
    headline.set_text_content(Some(content::HEADLINE));
    root.append_child(&headline)?;

    root.append_child(&creed_columns(document)?)?;
    root.append_child(&social_row(document)?)?;
    root.append_child(&showcase(document)?)?;
    root.append_child(&contract_box(document)?)?;
    Ok(())
}

fn creed_columns(document: &Document) -> Result<Element, JsValue> {
    let columns = document.create_element("div")?;
    columns.set_class_name("creed");
    columns.append_child(&creed_column(document, "creed-left", &content::CREED_LEFT)?)?;
    columns.append_child(&creed_column(document, "creed-right", &content::CREED_RIGHT)?)?;
    Ok(columns)
}

fn creed_column(
    document: &Document,
    class: &str,
    lines: &[&str],
) -> Result<Element, JsValue> {
    let column = document.create_element("div")?;
    column.set_class_name(class);
    for line in lines.iter().copied() {
        let paragraph = document.create_element("p")?;
        paragraph.set_text_content(Some(line));
        column.append_child(&paragraph)?;
    }
    Ok(column)
}

fn social_row(document: &Document) -> Result<Element, JsValue> {
    let row = document.create_element("div")?;
    row.set_class_name("social-row");
    for link in content::SOCIAL_LINKS {
        row.append_child(&link_button(document, link)?)?;
    }
    Ok(row)
}

/// One social link. A `<button>` rather than an `<a href>` so the URL only
/// ever opens through [`open_external`], detached from this page.
fn link_button(document: &Document, link: SocialLink) -> Result<Element, JsValue> {
    let button = document.create_element("button")?;
    button.set_class_name("social-link");
    button.set_attribute("type", "button")?;
    button.set_attribute("aria-label", link.label)?;

    match link.icon {
        LinkIcon::Image { src, alt, size } => {
            let image = document
                .create_element("img")?
                .dyn_into::<HtmlImageElement>()?;
            image.set_src(src);
            image.set_alt(alt);
            image.set_width(size);
            image.set_height(size);
            image.set_class_name("social-icon");
            button.append_child(&image)?;
        }
        LinkIcon::Svg { markup } => {
            button.set_inner_html(markup);
        }
    }

    let caption = document.create_element("span")?;
    caption.set_class_name("sr-only");
    caption.set_text_content(Some(link.label));
    button.append_child(&caption)?;

    let url = link.url;
    let on_click = Closure::wrap(Box::new(move || open_external(url)) as Box<dyn FnMut()>);
    button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    // The buttons live for the page lifetime, so the handlers do too.
    on_click.forget();

    Ok(button)
}

fn showcase(document: &Document) -> Result<Element, JsValue> {
    let figure = document.create_element("div")?;
    figure.set_class_name("showcase");
    let image = document
        .create_element("img")?
        .dyn_into::<HtmlImageElement>()?;
    image.set_src(content::SHOWCASE_GIF_URL);
    image.set_alt(content::SHOWCASE_GIF_ALT);
    image.set_class_name("showcase-image");
    figure.append_child(&image)?;
    Ok(figure)
}

fn contract_box(document: &Document) -> Result<Element, JsValue> {
    let boxed = document.create_element("div")?;
    boxed.set_class_name("contract");
    let line = document.create_element("p")?;
    line.set_text_content(Some(&format!("CA: {}", content::CONTRACT_ADDRESS)));
    boxed.append_child(&line)?;
    Ok(boxed)
}

/// Opens `url` in a new browsing context with no opener or referrer tie back
/// to this page. Popup-blocker refusals are deliberately ignored.
fn open_external(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let _ = window.open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer");
}
