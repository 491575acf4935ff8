use crate::camera;
use crate::constants::DRAG_THRESHOLD_PX;
use crate::dom;
use crate::input::{self, PointerState};
use portfolio_core::Scene;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<Scene>>,
    pub pointer: Rc<RefCell<PointerState>>,
}

/// Pick the object under a canvas CSS position and forward hover changes to the body cursor.
fn update_hover(scene: &Rc<RefCell<Scene>>, canvas: &web::HtmlCanvasElement, hit: Option<glam::Vec2>) {
    let target = hit.and_then(|pos| {
        let s = scene.borrow();
        let cam = s.orbit().camera(camera::canvas_aspect(canvas));
        let ray = camera::screen_to_world_ray(canvas, &cam, pos.x, pos.y);
        s.pick(&ray)
    });
    if let Some(cursor) = scene.borrow_mut().pointer_over(target) {
        dom::set_body_cursor(cursor);
    }
}

fn add_window_listener(event: &str, handler: Box<dyn FnMut(web::PointerEvent)>) {
    let closure = wasm_bindgen::closure::Closure::wrap(handler);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

pub fn wire_input_handlers(w: InputWiring) {
    // pointermove: orbit while dragging, otherwise hover
    {
        let scene_m = w.scene.clone();
        let pointer_m = w.pointer.clone();
        let canvas_m = w.canvas.clone();
        add_window_listener(
            "pointermove",
            Box::new(move |ev: web::PointerEvent| {
                let pos = input::pointer_canvas_css(&ev, &canvas_m);
                let drag = pointer_m.borrow_mut().move_to(pos, DRAG_THRESHOLD_PX);
                if let Some(delta) = drag {
                    let (_, css_h) = camera::canvas_css_size(&canvas_m);
                    scene_m.borrow_mut().orbit_mut().drag(delta.x, delta.y, css_h);
                    return;
                }
                let over_ui = dom::event_targets_ui(&ev);
                update_hover(&scene_m, &canvas_m, (!over_ui).then_some(pos));
            }),
        );
    }

    // pointerdown
    {
        let pointer_m = w.pointer.clone();
        let canvas_m = w.canvas.clone();
        add_window_listener(
            "pointerdown",
            Box::new(move |ev: web::PointerEvent| {
                if ev.button() != 0 || dom::event_targets_ui(&ev) {
                    return;
                }
                let pos = input::pointer_canvas_css(&ev, &canvas_m);
                pointer_m.borrow_mut().press(pos);
            }),
        );
    }

    // pointerup: a press that never became a drag clicks whatever is hovered
    {
        let scene_m = w.scene.clone();
        let pointer_m = w.pointer.clone();
        let canvas_m = w.canvas.clone();
        add_window_listener(
            "pointerup",
            Box::new(move |ev: web::PointerEvent| {
                if !pointer_m.borrow_mut().release() {
                    return;
                }
                let pos = input::pointer_canvas_css(&ev, &canvas_m);
                update_hover(&scene_m, &canvas_m, Some(pos));
                let hovered = scene_m.borrow().hovered();
                if let Some(i) = hovered {
                    scene_m.borrow_mut().click(i);
                }
            }),
        );
    }

    // pointer left the window
    {
        let scene_m = w.scene.clone();
        let pointer_m = w.pointer.clone();
        let canvas_m = w.canvas.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            if ev.related_target().is_none() {
                pointer_m.borrow_mut().release();
                update_hover(&scene_m, &canvas_m, None);
            }
        }) as Box<dyn FnMut(_)>);
        if let Some(doc) = dom::window_document() {
            _ = doc.add_event_listener_with_callback("mouseout", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }
}
