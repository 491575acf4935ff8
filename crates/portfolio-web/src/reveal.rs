use crate::constants::REVEAL_VISIBLE_CLASS;
use portfolio_core::{RevealRegistry, REVEAL_THRESHOLD};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Observe each section once; the first sufficiently visible intersection adds the
/// visible class and stops observing that section.
pub fn wire_sections(document: &web::Document, ids: &[&str]) -> anyhow::Result<()> {
    let registry = Rc::new(RefCell::new(RevealRegistry::new()));
    let observers: Rc<RefCell<Vec<(String, web::IntersectionObserver)>>> =
        Rc::new(RefCell::new(Vec::new()));
    for id in ids {
        let Some(el) = document.get_element_by_id(id) else {
            log::warn!("[reveal] missing section #{}", id);
            continue;
        };
        registry.borrow_mut().mount(*id);
        let observer = observe_section(&el, id.to_string(), registry.clone())?;
        observers.borrow_mut().push((id.to_string(), observer));
    }
    wire_teardown(registry, observers);
    Ok(())
}

fn observe_section(
    el: &web::Element,
    id: String,
    registry: Rc<RefCell<RevealRegistry>>,
) -> anyhow::Result<web::IntersectionObserver> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                let ratio = entry.intersection_ratio() as f32;
                if registry.borrow_mut().observe(&id, ratio) {
                    let target = entry.target();
                    _ = target.class_list().add_1(REVEAL_VISIBLE_CLASS);
                    observer.unobserve(&target);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);
    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD as f64));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| anyhow::anyhow!(format!("IntersectionObserver error: {:?}", e)))?;
    observer.observe(el);
    callback.forget();
    Ok(observer)
}

// Release pending subscriptions when the page is discarded. A page entering the
// back/forward cache keeps its observers so unrevealed sections still fire on return.
fn wire_teardown(
    registry: Rc<RefCell<RevealRegistry>>,
    observers: Rc<RefCell<Vec<(String, web::IntersectionObserver)>>>,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::PageTransitionEvent| {
        let released = registry.borrow_mut().page_hide(ev.persisted());
        observers.borrow_mut().retain(|(id, observer)| {
            let keep = !released.contains(id);
            if !keep {
                observer.disconnect();
            }
            keep
        });
    }) as Box<dyn FnMut(web::PageTransitionEvent)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
