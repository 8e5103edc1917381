//! Panel rendering
//!
//! Each content item becomes one framed panel: an offscreen canvas painted
//! once with the item's text (and album art for the track), displayed as a
//! textured rectangle floating just off its wall. Canvas painting happens
//! at build time, not per frame; only the 3D draw runs every frame.
//!
//! Track panels render in two phases: geometry and text go up immediately
//! with a placeholder art square, and the canvas is repainted exactly once
//! when the album art download finishes.

use macroquad::prelude::*;

use super::layout::{Wall, WallSlot};
use super::text::wrap_lines;
use crate::config;
use crate::content::ContentItem;

/// One hung panel: content, placement, and the painted canvas
pub struct Panel {
    pub item: ContentItem,
    pub slot: WallSlot,
    canvas: RenderTarget,
}

impl Panel {
    /// Build a panel and paint its canvas immediately.
    ///
    /// Track panels get the placeholder art square; everything else is
    /// fully painted here and never repainted.
    pub fn new(item: ContentItem, slot: WallSlot) -> Self {
        let canvas = render_target(config::CANVAS_WIDTH, config::CANVAS_HEIGHT);
        canvas.texture.set_filter(FilterMode::Linear);

        let panel = Self { item, slot, canvas };
        panel.paint(None);
        panel
    }

    /// Repaint the canvas with the downloaded album art (track panels)
    pub fn repaint_with_art(&self, art: &Texture2D) {
        self.paint(Some(art));
    }

    fn frame_color(&self) -> Color {
        match &self.item {
            ContentItem::Repo(_) => config::FRAME_REPO,
            ContentItem::Track(_) => config::FRAME_TRACK,
            ContentItem::Info(_) => config::FRAME_INFO,
        }
    }

    fn frame_thickness(&self) -> f32 {
        match &self.item {
            ContentItem::Repo(_) => config::FRAME_THICKNESS_REPO,
            ContentItem::Track(_) => config::FRAME_THICKNESS_TRACK,
            ContentItem::Info(_) => config::FRAME_THICKNESS_INFO,
        }
    }

    /// Paint the full canvas for this item
    fn paint(&self, art: Option<&Texture2D>) {
        let width = config::CANVAS_WIDTH as f32;
        let height = config::CANVAS_HEIGHT as f32;

        set_camera(&Camera2D {
            zoom: vec2(2.0 / width, 2.0 / height),
            target: vec2(width / 2.0, height / 2.0),
            render_target: Some(self.canvas.clone()),
            ..Default::default()
        });

        clear_background(config::CANVAS_BACKGROUND);
        match &self.item {
            ContentItem::Repo(repo) => paint_repo(repo, width, height),
            ContentItem::Track(track) => paint_track(track, width, art),
            ContentItem::Info(info) => paint_info(info, width, height),
        }

        set_default_camera();
    }

    /// Draw the frame and canvas into the 3D scene
    pub fn draw(&self) {
        let normal = self.slot.wall.normal();
        let rotation = self.slot.rotation;
        let right = vec3(rotation.cos(), 0.0, -rotation.sin());

        // Frame: an axis-aligned slab; depth axis depends on the wall
        let frame_size = match self.slot.wall {
            Wall::North | Wall::South => vec3(
                config::PANEL_WIDTH + config::FRAME_MARGIN,
                config::PANEL_HEIGHT + config::FRAME_MARGIN,
                self.frame_thickness(),
            ),
            Wall::East | Wall::West => vec3(
                self.frame_thickness(),
                config::PANEL_HEIGHT + config::FRAME_MARGIN,
                config::PANEL_WIDTH + config::FRAME_MARGIN,
            ),
        };
        draw_cube(self.slot.position, frame_size, None, self.frame_color());

        // Canvas: a textured quad lifted out of the frame toward the room.
        // Anchored at the viewer's top-left; v grows downward to match the
        // canvas orientation the 2D pass painted.
        let center = self.slot.position + normal * config::PANEL_SURFACE_LIFT;
        let top_left = center - right * (config::PANEL_WIDTH / 2.0)
            + vec3(0.0, config::PANEL_HEIGHT / 2.0, 0.0);
        draw_affine_parallelogram(
            top_left,
            right * config::PANEL_WIDTH,
            vec3(0.0, -config::PANEL_HEIGHT, 0.0),
            Some(&self.canvas.texture),
            WHITE,
        );
    }
}

/// Repository canvas: name, description, stats, language dot, update date
fn paint_repo(repo: &crate::content::RepoRecord, width: f32, height: f32) {
    // Shrink the title font when the name would overflow
    let mut title_size = 36.0;
    if measure_text(&repo.name, None, 36, 1.0).width > width - 40.0 {
        title_size = 24.0;
    }
    draw_centered(&repo.name, width / 2.0, 50.0, title_size, config::CANVAS_TEXT);

    if let Some(description) = &repo.description {
        let lines = wrap_lines(description, width - 40.0, 5, |s| {
            measure_text(s, None, 18, 1.0).width
        });
        let mut y = 100.0;
        for line in &lines {
            draw_centered(line, width / 2.0, y, 18.0, config::CANVAS_TEXT);
            y += 25.0;
        }
    }

    let stats = format!(
        "Stars: {} | Forks: {}",
        repo.stargazers_count, repo.forks_count
    );
    draw_centered(&stats, width / 2.0, height - 80.0, 16.0, config::CANVAS_TEXT);

    if let Some(language) = &repo.language {
        draw_circle(
            width / 2.0 - 50.0,
            height - 45.0,
            8.0,
            config::language_color(language),
        );
        draw_centered(language, width / 2.0, height - 40.0, 16.0, config::CANVAS_TEXT);
    }

    let updated = repo.updated_date();
    if !updated.is_empty() {
        let line = format!("Updated: {}", updated);
        draw_centered(&line, width / 2.0, height - 15.0, 14.0, config::CANVAS_TEXT);
    }
}

/// Track canvas: album art (or placeholder) over title, artists, album
fn paint_track(track: &crate::content::TrackRecord, width: f32, art: Option<&Texture2D>) {
    let art_size = config::ALBUM_ART_SIZE;
    let art_x = (width - art_size) / 2.0;
    let art_y = 30.0;

    match art {
        Some(texture) => draw_texture_ex(
            texture,
            art_x,
            art_y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(art_size, art_size)),
                ..Default::default()
            },
        ),
        None => draw_rectangle(art_x, art_y, art_size, art_size, config::ART_PLACEHOLDER),
    }

    draw_centered(&track.name, width / 2.0, art_y + art_size + 30.0, 32.0, config::CANVAS_TEXT);
    draw_centered(
        &track.artists,
        width / 2.0,
        art_y + art_size + 70.0,
        18.0,
        config::CANVAS_TEXT,
    );
    draw_centered(
        &track.album,
        width / 2.0,
        art_y + art_size + 100.0,
        18.0,
        config::CANVAS_TEXT,
    );
}

/// Info canvas: vertically centered title and wrapped body
fn paint_info(info: &crate::content::InfoSection, width: f32, height: f32) {
    let lines = wrap_lines(&info.text, width - 40.0, 5, |s| {
        measure_text(s, None, 18, 1.0).width
    });

    let title_height = 32.0;
    let gap_after_title = 20.0;
    let line_height = 25.0;
    let total = title_height + gap_after_title + lines.len() as f32 * line_height;
    let mut y = (height - total) / 2.0 + title_height;

    draw_centered(&info.title, width / 2.0, y, 32.0, config::CANVAS_TEXT);
    y += gap_after_title + line_height;
    for line in &lines {
        draw_centered(line, width / 2.0, y, 18.0, config::CANVAS_TEXT);
        y += line_height;
    }
}

/// Draw text with its horizontal center at `cx`, baseline at `y`
fn draw_centered(text: &str, cx: f32, y: f32, font_size: f32, color: Color) {
    let dims = measure_text(text, None, font_size as u16, 1.0);
    draw_text(text, cx - dims.width / 2.0, y, font_size, color);
}
