//! Application state
//!
//! One `App` owns the whole session: the pending startup fetches, the
//! built gallery, the movement state and the active control strategy.
//! The main loop calls `update` then `draw` once per frame; nothing in
//! here blocks.

use macroquad::prelude::*;

use crate::config;
use crate::content::{
    self, begin_art_fetch, begin_content_fetch, resolve_content, ContentItem, PendingArt,
    PendingContent,
};
use crate::controls::{detect_control_mode, Controls, MovementState};
use crate::gallery::{layout_slots, room, LayoutParams, Panel, WallSlot};
use crate::pick::pick_slot;
use crate::ui;
use crate::viewpoint::{self, Viewpoint};

pub struct App {
    /// Both startup fetches; `Some` until they land and the gallery builds
    pending_content: Option<PendingContent>,
    /// Album art download for the track panel's second paint
    pending_art: Option<PendingArt>,
    panels: Vec<Panel>,
    /// Placements parallel to `panels`, the picker's geometry input
    slots: Vec<WallSlot>,
    movement: MovementState,
    controls: Controls,
    /// Set when the primary fetch failed; shown inline, never fatal
    load_error: Option<String>,
}

impl App {
    pub fn new() -> Self {
        let mut movement = MovementState::new();
        if let Some(saved) = viewpoint::load() {
            saved.apply(&mut movement);
            println!("Restored last viewpoint");
        }

        Self {
            pending_content: Some(begin_content_fetch()),
            pending_art: None,
            panels: Vec::new(),
            slots: Vec::new(),
            movement,
            controls: Controls::new(detect_control_mode()),
            load_error: None,
        }
    }

    /// Advance one frame: poll fetches while loading, otherwise run the
    /// input/movement/pick cycle
    pub fn update(&mut self, delta: f32) {
        if let Some(mut pending) = self.pending_content.take() {
            if !pending.is_complete() {
                self.pending_content = Some(pending);
                return;
            }
            let (repos, track) = pending.take();
            self.build_gallery(repos, track);
        }

        let output = self.controls.update(&mut self.movement);
        self.movement.tick(delta);
        self.poll_album_art();

        if output.pick_requested {
            self.pick();
        }
    }

    /// One-shot gallery build once both fetches have reported.
    ///
    /// A failed primary fetch leaves the content list empty and records
    /// the inline error; the museum still opens, just with bare walls.
    fn build_gallery(
        &mut self,
        repos: Result<Vec<content::RepoRecord>, content::FetchError>,
        track: Option<content::TrackRecord>,
    ) {
        let (items, error) = resolve_content(repos, track);
        self.load_error = error;

        if let Some(ContentItem::Track(track)) = items.iter().find(|item| item.is_track()) {
            self.pending_art = Some(begin_art_fetch(&track.album_art));
        }

        self.slots = layout_slots(items.len(), &LayoutParams::default());
        self.panels = items
            .into_iter()
            .zip(self.slots.iter().copied())
            .map(|(item, slot)| Panel::new(item, slot))
            .collect();

        println!("Museum built with {} panels", self.panels.len());
    }

    /// Second phase of the track panel: swap the placeholder for the art
    fn poll_album_art(&mut self) {
        let complete = match self.pending_art.as_mut() {
            Some(op) => op.is_complete(),
            None => return,
        };
        if !complete {
            return;
        }

        if let Some(op) = self.pending_art.take() {
            match op.take() {
                Ok(art) => {
                    let texture = Texture2D::from_rgba8(art.width, art.height, &art.rgba);
                    texture.set_filter(FilterMode::Linear);
                    if let Some(panel) = self.panels.iter().find(|p| p.item.is_track()) {
                        panel.repaint_with_art(&texture);
                    }
                }
                Err(e) => eprintln!("Album art fetch failed: {}", e),
            }
        }
    }

    /// Ray through the view center; on a hit, snapshot the viewpoint and
    /// open the panel's URL
    fn pick(&mut self) {
        let Some(index) = pick_slot(
            self.movement.position,
            self.movement.view_dir(),
            &self.slots,
        ) else {
            return;
        };
        let Some(panel) = self.panels.get(index) else {
            return;
        };

        if let Err(e) = viewpoint::save(&Viewpoint::from_movement(&self.movement)) {
            eprintln!("Could not save viewpoint: {}", e);
        }

        let url = panel.item.url();
        println!("Opening {}: {}", panel.item.title(), url);
        if webbrowser::open(url).is_err() {
            eprintln!("Failed to open browser. Please visit:\n{}", url);
        }
    }

    /// Render the current frame
    pub fn draw(&self) {
        clear_background(config::BACKGROUND);

        if self.pending_content.is_some() {
            ui::draw_loading();
            return;
        }

        set_camera(&self.movement.camera());
        room::draw_room();
        for panel in &self.panels {
            panel.draw();
        }
        set_default_camera();

        if let Some(message) = &self.load_error {
            ui::draw_error(message);
        }

        match &self.controls {
            Controls::Touch(touch) => ui::draw_joysticks(touch),
            Controls::Pointer(_) => {
                if self.controls.wants_instructions() {
                    ui::draw_instructions();
                } else {
                    ui::draw_crosshair();
                }
            }
        }
    }
}
