//! REPO MUSEUM: a walkable first-person gallery of your repositories
//!
//! Four walls of panels generated from a GitHub account, the most
//! recently played track, and a few résumé sections. Pointer-lock WASD
//! controls on desktop, dual virtual joysticks on touch devices; click
//! or tap a panel to open the project behind it.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod config;
mod content;
mod controls;
mod gallery;
mod pick;
mod ui;
mod viewpoint;

use macroquad::prelude::*;

use app::App;

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Repo Museum v{}", VERSION),
        window_width: 1280,
        window_height: 720,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    println!("=== REPO MUSEUM v{} ===", VERSION);

    let mut app = App::new();

    loop {
        app.update(get_frame_time());
        app.draw();
        next_frame().await
    }
}
