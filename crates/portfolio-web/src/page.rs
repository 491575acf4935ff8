use crate::constants::{FOOTER_ID, WORK_LIST_ID};
use crate::dom;
use portfolio_core::content::{footer_text, WorkEntry, NAV_TARGETS, WORK_HISTORY};
use web_sys as web;

pub fn wire_navigation(document: &web::Document) {
    for (button_id, section_id) in NAV_TARGETS {
        let doc = document.clone();
        dom::add_click_listener(document, button_id, move || {
            dom::scroll_to_section(&doc, section_id);
        });
    }
}

pub fn render_work_history(document: &web::Document) -> anyhow::Result<()> {
    let Some(list) = document.get_element_by_id(WORK_LIST_ID) else {
        log::warn!("[page] missing #{}", WORK_LIST_ID);
        return Ok(());
    };
    for entry in &WORK_HISTORY {
        let card = work_card(document, entry)?;
        list.append_child(&card)
            .map_err(|e| anyhow::anyhow!(format!("append work card: {:?}", e)))?;
    }
    Ok(())
}

fn work_card(document: &web::Document, entry: &WorkEntry) -> anyhow::Result<web::HtmlElement> {
    let card = dom::create_html_element(document, "article", "work-card")?;
    let append = |parent: &web::HtmlElement, tag: &str, class: &str, text: &str| {
        let el = dom::create_html_element(document, tag, class)?;
        el.set_text_content(Some(text));
        parent
            .append_child(&el)
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        anyhow::Ok(el)
    };
    append(&card, "p", "work-period", entry.period)?;
    let title = append(&card, "h3", "work-role", entry.role)?;
    append(&title, "span", "work-company", &format!(" at {}", entry.company))?;
    append(&card, "p", "work-description", entry.description)?;
    let tags = dom::create_html_element(document, "div", "work-tags")?;
    for tag in entry.tags {
        append(&tags, "span", "work-tag", tag)?;
    }
    card.append_child(&tags)
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    Ok(card)
}

pub fn set_footer_year(document: &web::Document) {
    let year = js_sys::Date::new_0().get_full_year() as i32;
    dom::set_text(document, FOOTER_ID, &footer_text(year));
}
