use crate::constants::LABEL_CLASS;
use crate::dom;
use crate::input;
use portfolio_core::color::css_hex;
use portfolio_core::{Camera, LabelItem};
use web_sys as web;

/// Floating object labels drawn as absolutely positioned DOM nodes over the canvas.
pub struct LabelLayer {
    document: web::Document,
    container: web::HtmlElement,
    nodes: Vec<Option<web::HtmlElement>>,
}

impl LabelLayer {
    pub fn new(document: &web::Document, container: web::HtmlElement) -> Self {
        Self {
            document: document.clone(),
            container,
            nodes: Vec::new(),
        }
    }

    fn node(&mut self, object: usize) -> Option<&web::HtmlElement> {
        if self.nodes.len() <= object {
            self.nodes.resize(object + 1, None);
        }
        if self.nodes[object].is_none() {
            match dom::create_html_element(&self.document, "div", LABEL_CLASS) {
                Ok(el) => {
                    _ = self.container.append_child(&el);
                    self.nodes[object] = Some(el);
                }
                Err(e) => {
                    log::warn!("[labels] {:?}", e);
                    return None;
                }
            }
        }
        self.nodes[object].as_ref()
    }

    /// Show the given labels at their projected anchors and hide all others.
    pub fn sync(&mut self, labels: &[LabelItem], camera: &Camera, css_w: f32, css_h: f32) {
        let mut shown = Vec::with_capacity(self.nodes.len());
        for label in labels {
            let Some(ndc) = camera.project(label.anchor) else {
                continue;
            };
            if ndc.z > 1.0 {
                continue;
            }
            let pos = input::ndc_to_css_px(ndc.x, ndc.y, css_w, css_h);
            let font_px = input::world_size_to_css_px(
                label.font_size,
                (label.anchor - camera.eye).length(),
                camera.fovy_radians,
                css_h,
            );
            let style = format!(
                "display:block;position:absolute;left:{:.1}px;top:{:.1}px;font-size:{:.1}px;color:{};transform:translate(-50%,-100%);pointer-events:none;white-space:nowrap;",
                pos.x,
                pos.y,
                font_px,
                css_hex(label.color)
            );
            if let Some(el) = self.node(label.object) {
                if el.text_content().as_deref() != Some(label.text.as_str()) {
                    el.set_text_content(Some(&label.text));
                }
                _ = el.set_attribute("style", &style);
                if shown.len() <= label.object {
                    shown.resize(label.object + 1, false);
                }
                shown[label.object] = true;
            }
        }
        for (i, node) in self.nodes.iter().enumerate() {
            if let Some(el) = node {
                if !shown.get(i).copied().unwrap_or(false) {
                    _ = el.set_attribute("style", "display:none");
                }
            }
        }
    }
}
