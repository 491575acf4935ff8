use crate::constants::{CONTACT_FORM_ID, CONTACT_STATUS_ID};
use crate::dom;
use portfolio_core::contact::{
    interpret_response, status_line, SubmitError, DEFAULT_ENDPOINT, STATUS_SENDING,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Intercept the contact form's submit and post it with `fetch` instead of navigating.
pub fn wire_form(document: &web::Document) {
    let Some(form) = document
        .get_element_by_id(CONTACT_FORM_ID)
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
    else {
        log::warn!("[contact] missing #{}", CONTACT_FORM_ID);
        return;
    };
    let form_submit = form.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        ev.prevent_default();
        let form = form_submit.clone();
        spawn_local(async move {
            submit(form).await;
        });
    }) as Box<dyn FnMut(_)>);
    _ = form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn set_status(text: &str) {
    if let Some(doc) = dom::window_document() {
        dom::set_text(&doc, CONTACT_STATUS_ID, text);
    }
}

fn endpoint_for(form: &web::HtmlFormElement) -> String {
    form.get_attribute("action")
        .filter(|a| !a.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
}

async fn submit(form: web::HtmlFormElement) {
    set_status(STATUS_SENDING);
    let outcome = match post_form(&form).await {
        Ok((ok, status, body)) => interpret_response(ok, status, &body),
        Err(e) => {
            log::warn!("[contact] request failed: {:?}", e);
            Err(SubmitError::Network)
        }
    };
    match &outcome {
        Ok(()) => {
            log::info!("[contact] sent");
            form.reset();
        }
        Err(e) => log::warn!("[contact] {:?}", e),
    }
    set_status(&status_line(&outcome));
}

/// One POST of the form fields as multipart data. Returns (ok, status, body text).
async fn post_form(form: &web::HtmlFormElement) -> Result<(bool, u16, String), JsValue> {
    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let data = web::FormData::new_with_form(form)?;
    let headers = web::Headers::new()?;
    headers.set("Accept", "application/json")?;

    let opts = web::RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(web::RequestMode::Cors);
    opts.set_headers(&headers);
    opts.set_body(&data);

    let request = web::Request::new_with_str_and_init(&endpoint_for(form), &opts)?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: web::Response = resp_value.dyn_into()?;
    let ok = resp.ok();
    let status = resp.status();
    let body = if ok {
        String::new()
    } else {
        JsFuture::from(resp.text()?)
            .await?
            .as_string()
            .unwrap_or_default()
    };
    Ok((ok, status, body))
}
