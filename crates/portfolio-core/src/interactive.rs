//! Hover / click / jump state machine shared by every clickable scene object.
//!
//! The controller owns one [`InteractiveObjectState`] and is the only thing
//! that mutates it: pointer handlers flip the flags, and [`InteractiveObject::update`]
//! integrates the vertical jump once per frame. Visual payloads and idle
//! motions live elsewhere and are layered underneath the offsets produced here.

use crate::clock::sanitize_delta;
use crate::constants::{
    HOVER_SCALE, JUMP_APEX, JUMP_FALL_RATE, JUMP_RISE_RATE, LABEL_DEFAULT_OFFSET,
    LABEL_SIZE_FACTOR, LABEL_SIZE_PAD, REST_SCALE,
};
use glam::Vec3;

/// Pointer affordance requested by a controller when its hover state changes.
///
/// The page layer decides how to apply it (the web front-end writes
/// `document.body.style.cursor`). Controllers never touch global UI state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorStyle {
    Pointer,
    Auto,
}

impl CursorStyle {
    pub fn as_css(&self) -> &'static str {
        match self {
            CursorStyle::Pointer => "pointer",
            CursorStyle::Auto => "auto",
        }
    }
}

/// Where an object sits and what it is called. Fixed at creation.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectPlacement {
    pub base_position: Vec3,
    pub scale: f32,
    pub size_hint: Option<f32>,
    pub label: String,
}

impl ObjectPlacement {
    pub fn new(label: impl Into<String>, base_position: Vec3) -> Self {
        Self {
            base_position,
            scale: 1.0,
            size_hint: None,
            label: label.into(),
        }
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size_hint = Some(size);
        self
    }

    /// Local height of the label above the object's origin.
    pub fn label_offset(&self) -> f32 {
        match self.size_hint {
            Some(size) => size * LABEL_SIZE_FACTOR + LABEL_SIZE_PAD,
            None => LABEL_DEFAULT_OFFSET,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InteractiveObjectState {
    pub hovered: bool,
    pub clicked: bool,
    pub label_visible: bool,
    pub vertical_offset: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JumpPhase {
    Rest,
    Rising,
    Falling,
}

pub struct InteractiveObject {
    placement: ObjectPlacement,
    state: InteractiveObjectState,
}

impl InteractiveObject {
    pub fn new(placement: ObjectPlacement) -> Self {
        Self {
            placement,
            state: InteractiveObjectState::default(),
        }
    }

    pub fn placement(&self) -> &ObjectPlacement {
        &self.placement
    }

    pub fn state(&self) -> InteractiveObjectState {
        self.state
    }

    pub fn label(&self) -> &str {
        &self.placement.label
    }

    /// Returns the cursor to show, or `None` if the object was already hovered.
    pub fn hover_enter(&mut self) -> Option<CursorStyle> {
        if self.state.hovered {
            return None;
        }
        self.state.hovered = true;
        Some(CursorStyle::Pointer)
    }

    /// Returns the cursor to restore, or `None` if the object was not hovered.
    pub fn hover_exit(&mut self) -> Option<CursorStyle> {
        if !self.state.hovered {
            return None;
        }
        self.state.hovered = false;
        Some(CursorStyle::Auto)
    }

    /// Start (or restart) the rise from the current offset and toggle the label.
    pub fn click(&mut self) {
        self.state.clicked = true;
        self.state.label_visible = !self.state.label_visible;
    }

    pub fn update(&mut self, delta: f32) {
        let delta = sanitize_delta(delta);
        if self.state.clicked {
            self.state.vertical_offset += delta * JUMP_RISE_RATE;
            if self.state.vertical_offset > JUMP_APEX {
                self.state.clicked = false;
            }
        } else if self.state.vertical_offset > 0.0 {
            self.state.vertical_offset =
                (self.state.vertical_offset - delta * JUMP_FALL_RATE).max(0.0);
        }
    }

    pub fn scale_factor(&self) -> f32 {
        if self.state.hovered {
            HOVER_SCALE
        } else {
            REST_SCALE
        }
    }

    pub fn vertical_offset(&self) -> f32 {
        self.state.vertical_offset
    }

    pub fn label_visible(&self) -> bool {
        self.state.label_visible
    }

    pub fn phase(&self) -> JumpPhase {
        if self.state.clicked {
            JumpPhase::Rising
        } else if self.state.vertical_offset > 0.0 {
            JumpPhase::Falling
        } else {
            JumpPhase::Rest
        }
    }

    /// Label anchor in world space. Follows placement only, not the jump.
    pub fn label_anchor(&self) -> Vec3 {
        self.placement.base_position
            + Vec3::Y * self.placement.label_offset() * self.placement.scale
    }
}
