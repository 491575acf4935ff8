// Page wiring constants: element ids, classes and interaction tuning.

// Elements
pub const CANVAS_ID: &str = "app-canvas";
pub const LABEL_LAYER_ID: &str = "scene-labels";
pub const WORK_LIST_ID: &str = "work-list";
pub const FOOTER_ID: &str = "footer-copy";
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const CONTACT_STATUS_ID: &str = "contact-status";

// Classes
pub const REVEAL_VISIBLE_CLASS: &str = "is-visible";
pub const LABEL_CLASS: &str = "scene-label";

// Pointer events that start on page controls never reach the scene
pub const UI_SELECTOR: &str = "a, button, input, textarea, select, label, form, header";

// Pointer travel (CSS px) before a press becomes an orbit drag instead of a click
pub const DRAG_THRESHOLD_PX: f32 = 4.0;
